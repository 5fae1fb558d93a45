//! Command-line interface.
//!
//! # Responsibilities
//! - Parse flags mirroring the classic envhttpd options
//! - Merge an optional TOML config file with CLI overrides
//! - Reconstruct the interleaved `-i`/`-x` declaration order
//!
//! # Design Decisions
//! - CLI flags win over config-file values
//! - `-i` and `-x` may be interleaved; their relative order on the command
//!   line is the rule evaluation order, recovered from argument indices
//! - The parsed result is validated before the server ever sees it

use std::path::PathBuf;

use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};

use crate::config::loader::{load_config, ConfigError};
use crate::config::schema::{PatternRule, ServerConfig};
use crate::config::validation::validate_config;

/// Serve the process environment over HTTP.
#[derive(Debug, Parser)]
#[command(name = "envhttpd", version, about)]
pub struct Cli {
    /// Port number the server listens on
    #[arg(short = 'p', long)]
    pub port: Option<u16>,

    /// Include environment variables matching PATTERN (repeatable)
    #[arg(short = 'i', long = "include", value_name = "PATTERN")]
    pub include: Vec<String>,

    /// Exclude environment variables matching PATTERN (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Enable debug logging and text/plain responses
    #[arg(short = 'D', long)]
    pub debug: bool,

    /// Hostname reported in the Hostname response header
    #[arg(short = 'H', long)]
    pub hostname: Option<String>,

    /// Maximum number of variables exposed
    #[arg(long, value_name = "N")]
    pub max_vars: Option<usize>,

    /// Optional TOML configuration file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Parse the process arguments into a validated [`ServerConfig`].
pub fn parse_config() -> Result<ServerConfig, ConfigError> {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches)
        .unwrap_or_else(|e| e.exit());
    build_config(&cli, &matches)
}

/// Merge file config and CLI flags into the final configuration.
fn build_config(cli: &Cli, matches: &ArgMatches) -> Result<ServerConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };

    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(hostname) = &cli.hostname {
        config.hostname = hostname.clone();
    }
    if let Some(max_vars) = cli.max_vars {
        config.max_vars = max_vars;
    }
    if cli.debug {
        config.debug = true;
    }

    let cli_rules = ordered_rules(cli, matches);
    if !cli_rules.is_empty() {
        // CLI rules append after file rules, so they win on conflicts.
        config.rules.extend(cli_rules);
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Rebuild the command-line declaration order of `-i`/`-x` rules.
///
/// Clap groups repeated occurrences per flag; the raw argument indices let
/// us interleave the two lists back into their original order.
fn ordered_rules(cli: &Cli, matches: &ArgMatches) -> Vec<PatternRule> {
    let mut indexed: Vec<(usize, PatternRule)> = Vec::new();

    if let Some(indices) = matches.indices_of("include") {
        for (index, glob) in indices.zip(&cli.include) {
            indexed.push((index, PatternRule::include(glob.clone())));
        }
    }
    if let Some(indices) = matches.indices_of("exclude") {
        for (index, glob) in indices.zip(&cli.exclude) {
            indexed.push((index, PatternRule::exclude(glob.clone())));
        }
    }

    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, rule)| rule).collect()
}
