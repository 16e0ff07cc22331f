use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::MarkerStyle;
use crate::illusion::IllusionParams;

/// Runtime settings: illusion parameters, marker speed and look.
/// Any field missing from the file falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub params: IllusionParams,
    /// Waypoints per second
    pub speed: f32,
    pub marker: MarkerStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            params: IllusionParams::default(),
            speed: 1.0,
            marker: MarkerStyle::default(),
        }
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
