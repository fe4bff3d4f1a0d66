use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::DEFAULT_Y_TOL;
use crate::names::DEFAULT_MARKERS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("y_tol must be a positive, finite number (got {0})")]
    InvalidTolerance(f64),
    #[error("At least one marker is required")]
    NoMarkers,
    #[error("Marker {0} is blank")]
    BlankMarker(usize),
}

/// Parameters of a scan: line bucket height and the title markers to look for.
///
/// ```toml
/// y_tol = 0.005
/// markers = ["Monsieur", "Madame"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    pub y_tol: f64,
    pub markers: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            y_tol: DEFAULT_Y_TOL,
            markers: DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl ScanConfig {
    /// Parse a TOML document; absent keys keep their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.y_tol.is_finite() || self.y_tol <= 0.0 {
            return Err(ConfigError::InvalidTolerance(self.y_tol));
        }
        if self.markers.is_empty() {
            return Err(ConfigError::NoMarkers);
        }
        if let Some(index) = self.markers.iter().position(|m| m.trim().is_empty()) {
            return Err(ConfigError::BlankMarker(index));
        }
        Ok(())
    }
}
