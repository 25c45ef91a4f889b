use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the crate's fallible seams: config loading, preset
/// lookup and export. The physics core itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("unknown aircraft preset '{0}'")]
    UnknownPreset(String),
    #[error("export failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialise snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
