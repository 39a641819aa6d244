//! Data-driven physics constants
//!
//! Every field defaults to the matching value in [`crate::consts`], so a
//! tuning document only needs to name the values it overrides.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics constants consumed by the simulation step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Spatial grid cell size
    pub cell_size: f32,
    /// Highest generation a body can reach
    pub max_generation: u8,
    /// Minimum radius (exclusive) for a body to be split
    pub split_min_radius: f32,
    /// Child radius = parent radius * scale
    pub split_radius_scale: f32,
    /// Heading offset of each child (radians)
    pub split_angle: f32,
    /// Immunity window given to children (ticks)
    pub immunity_ticks: u32,
    /// Minimum child speed (units per tick)
    pub min_split_speed: f32,
    /// Cutter rotation per tick (radians)
    pub cutter_spin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            cell_size: GRID_CELL_SIZE,
            max_generation: MAX_GENERATION,
            split_min_radius: SPLIT_MIN_RADIUS,
            split_radius_scale: SPLIT_RADIUS_SCALE,
            split_angle: SPLIT_ANGLE,
            immunity_ticks: SPLIT_IMMUNITY_TICKS,
            min_split_speed: MIN_SPLIT_SPEED,
            cutter_spin: CUTTER_SPIN,
        }
    }
}

impl Tuning {
    /// Whether the grid can see every collision between bodies up to `max_radius`
    pub fn covers_radius(&self, max_radius: f32) -> bool {
        self.cell_size >= 2.0 * max_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "max_generation": 2 }"#).unwrap();
        assert_eq!(tuning.max_generation, 2);
        assert_eq!(tuning.cell_size, GRID_CELL_SIZE);
        assert_eq!(tuning.immunity_ticks, SPLIT_IMMUNITY_TICKS);
    }

    #[test]
    fn test_covers_radius() {
        let tuning = Tuning::default();
        assert!(tuning.covers_radius(50.0));
        assert!(!tuning.covers_radius(50.5));
    }
}
