//! Configuration for the die widget.
//!
//! Settings persist to disk as RON, take CLI overrides via clap, and
//! tolerate missing or unknown fields across versions.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, DieConfig, WindowConfig, default_config_dir};
pub use error::ConfigError;
