//! Request routing.

pub mod router;

pub use router::dispatch;
