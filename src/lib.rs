pub mod annotate;
pub mod app;
pub mod backing;
pub mod cli;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod extract;
pub mod industry;
pub mod learn;
pub mod merge;
pub mod model;
pub mod proficiency;
pub mod taxonomy;
pub mod test_utils;
pub mod text;
pub mod validator;

pub use error::{Result, SpError};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
