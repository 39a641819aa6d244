//! Fission Balls - a splitting-ball background simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, grid, collisions, fission)
//! - `tuning`: Data-driven physics constants
//! - `settings`: Seeding parameters and scene layout
//! - `platform`: Browser bindings (wasm32 only)

pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{SeedParams, Settings};
pub use tuning::Tuning;

use glam::Vec2;

/// Simulation constants (defaults for [`Tuning`])
pub mod consts {
    /// Uniform grid cell size; must cover the largest collision diameter
    pub const GRID_CELL_SIZE: f32 = 100.0;

    /// Generation cap: bodies at this generation never split again
    pub const MAX_GENERATION: u8 = 4;
    /// Bodies at or below this radius never split
    pub const SPLIT_MIN_RADIUS: f32 = 10.0;
    /// Child radius as a fraction of the parent radius
    pub const SPLIT_RADIUS_SCALE: f32 = 0.8;
    /// Angular offset of each child's heading from the parent's (60 degrees)
    pub const SPLIT_ANGLE: f32 = std::f32::consts::FRAC_PI_3;
    /// Ticks a freshly split child is immune to the cutter
    pub const SPLIT_IMMUNITY_TICKS: u32 = 30;
    /// Floor on child speed (units per tick) so children never stall
    pub const MIN_SPLIT_SPEED: f32 = 1.0;

    /// Cutter spin per tick (radians, visual only)
    pub const CUTTER_SPIN: f32 = 0.02;
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(std::f32::consts::TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= std::f32::consts::TAU {
        0.0
    } else {
        wrapped
    }
}

/// Unit vector pointing at `theta` radians
#[inline]
pub fn unit_vector(theta: f32) -> Vec2 {
    Vec2::from_angle(theta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{PI, TAU};

    #[test]
    fn test_wrap_angle() {
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-5);
        assert!((wrap_angle(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-5);
        assert!(wrap_angle(-1e-9) < TAU);
    }

    #[test]
    fn test_unit_vector() {
        let v = unit_vector(PI / 2.0);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
    }
}
