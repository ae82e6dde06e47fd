//! Errors from reading and writing the widget's `config.ron`.

use std::io;
use std::path::PathBuf;

/// Failure while loading or persisting the widget's settings.
///
/// Read/write/parse variants carry the offending path so the binary can
/// report which file to fix or delete.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings file exists but could not be read.
    #[error("could not read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The settings file or its directory could not be written.
    #[error("could not write settings to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The settings file is not valid RON for this config shape.
    #[error("malformed settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// The in-memory settings could not be rendered as RON.
    #[error("could not serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}
