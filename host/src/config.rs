use std::fs;
use std::path::Path;

use pong_core::GameConfig;

use crate::error::HostError;

/// Config files are a few hundred bytes; anything larger is not a config.
pub const MAX_CONFIG_SIZE: u64 = 1024 * 1024;

/// Loads a (possibly partial) JSON config, or the defaults when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> Result<GameConfig, HostError> {
    let Some(path) = path else {
        tracing::debug!("No config file given, using defaults");
        return Ok(GameConfig::default());
    };
    let display = path.display().to_string();

    let metadata = fs::metadata(path)?;
    if metadata.len() > MAX_CONFIG_SIZE {
        return Err(HostError::ConfigTooLarge {
            path: display,
            size: metadata.len(),
            max: MAX_CONFIG_SIZE,
        });
    }

    let raw = fs::read_to_string(path)?;
    let config = parse_config(&raw).map_err(|source| HostError::ConfigParse {
        path: display.clone(),
        source,
    })?;
    config.validate()?;

    if config.paddle_y_min > config.paddle_y_max {
        tracing::warn!(
            "paddle_y_min ({}) exceeds paddle_y_max ({}); paddles will be pinned at {}",
            config.paddle_y_min,
            config.paddle_y_max,
            config.paddle_y_min
        );
    }

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Parses config JSON; missing fields take their defaults.
pub fn parse_config(raw: &str) -> Result<GameConfig, serde_json::Error> {
    serde_json::from_str(raw)
}
