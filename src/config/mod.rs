//! Server configuration: schema, file loading, CLI merging, validation.

pub mod cli;
pub mod loader;
pub mod schema;
pub mod validation;

pub use cli::parse_config;
pub use loader::{load_config, ConfigError};
pub use schema::{PatternRule, RuleKind, ServerConfig};
pub use validation::{validate_config, ValidationError};
