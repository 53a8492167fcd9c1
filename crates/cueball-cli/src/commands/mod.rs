pub mod calibrate;
pub mod classify;
pub mod config;
pub mod features;

use std::path::Path;

use anyhow::{Context, Result};
use cueball_core::session::{CalibrationConfig, ClassifySession};

/// Build a session from an optional calibration file; without one the
/// default ball region applies.
pub fn load_session(config: Option<&Path>) -> Result<ClassifySession> {
    match config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read calibration file {}", path.display()))?;
            let config: CalibrationConfig = toml::from_str(&text)
                .with_context(|| format!("Invalid calibration file {}", path.display()))?;
            Ok(ClassifySession::new(config.region))
        }
        None => Ok(ClassifySession::with_default_region()),
    }
}
