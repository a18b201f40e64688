use std::path::PathBuf;

use thiserror::Error;

/// Failure to retrieve the directory. The caller logs it and carries on
/// with an empty collection.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("endpoint returned {0}")]
    Status(reqwest::StatusCode),

    #[error("response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid endpoint {value:?}: {source}")]
    Endpoint {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("endpoint must be http or https, got {0:?}")]
    Scheme(String),

    #[error("invalid debounce delay {0:?}: expected milliseconds")]
    Debounce(String),

    #[error("could not find config directory")]
    NoConfigDir,
}
