use pong_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("config file '{path}' is too large: {size} bytes (max {max} bytes)")]
    ConfigTooLarge { path: String, size: u64, max: u64 },

    #[error("error parsing config '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("frame on line {line} is not valid: {source}")]
    Protocol {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}
