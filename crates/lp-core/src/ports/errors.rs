use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("config directory unavailable")]
    ConfigDirUnavailable,

    #[error("data local directory unavailable")]
    DataLocalDirUnavailable,
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write clipboard: {0}")]
    WriteFailed(String),
}

#[derive(Debug, Error)]
pub enum BuildInfoError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Error)]
pub enum StringTableError {
    #[error("failed to read string table {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse string table: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown string key: {0}")]
    UnknownKey(String),

    #[error("string {0} must be a string value")]
    NotAString(String),
}
