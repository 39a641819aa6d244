//! Scene settings: viewport, container layout, seeding and tuning
//!
//! Loaded from JSON. Missing fields fall back to defaults.

use serde::{Deserialize, Serialize};

use crate::sim::Rect;
use crate::tuning::Tuning;

/// Parameters for the initial population
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedParams {
    /// Number of bodies to place
    pub count: usize,
    /// Smallest body radius
    pub radius_min: f32,
    /// Largest body radius
    pub radius_max: f32,
    /// Velocity components are drawn from [-speed, speed]
    pub speed: f32,
    /// Cutter contact radius
    pub cutter_size: f32,
    /// Cutter speed (direction is random)
    pub cutter_speed: f32,
    /// RNG seed for reproducible runs
    pub seed: u64,
}

impl Default for SeedParams {
    fn default() -> Self {
        Self {
            count: 8,
            radius_min: 15.0,
            radius_max: 45.0,
            speed: 1.5,
            cutter_size: 40.0,
            cutter_speed: 2.0,
            seed: 0x5eed,
        }
    }
}

/// Full scene description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Outer frame (width, height)
    pub viewport: (f32, f32),
    /// Interior obstacle; `None` until layout has been measured
    pub container: Option<Rect>,
    pub seeding: SeedParams,
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport: (1280.0, 720.0),
            container: Some(Rect::new(440.0, 840.0, 210.0, 510.0)),
            seeding: SeedParams::default(),
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Load settings from a JSON file, falling back to defaults (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
