//! TOML configuration loading with validation.
//!
//! The config structs live in `gripper_common::config`; this module
//! adds file loading and maps parse/validation failures onto one
//! error type the binary can report.

use std::path::Path;

use gripper_common::config::NodeConfig;
use thiserror::Error;

/// Configuration loading/validation error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("config I/O error: {0}")]
    Io(String),
    /// TOML parse error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Parameter validation error.
    #[error("config validation: {0}")]
    Validation(String),
}

/// Load and validate the node configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<NodeConfig, ConfigError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(format!("failed to read {}: {e}", path.display())))?;
    load_config_from_str(&text)
}

/// Load and validate the node configuration from a TOML string
/// (also used by tests).
pub fn load_config_from_str(text: &str) -> Result<NodeConfig, ConfigError> {
    let config: NodeConfig =
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate().map_err(ConfigError::Validation)?;
    Ok(config)
}

// ─── Tests ──────────────────────────────────────────────────────────
