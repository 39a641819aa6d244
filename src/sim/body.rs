//! Body model: circle bodies, the cutter, and their shared kinematics

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;
use crate::wrap_angle;

/// Coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Anything that moves one velocity step per tick and bounces off bounds.
///
/// Boundary handling is generic over this so circles and the cutter share it.
pub trait Kinematic {
    fn pos(&self) -> Vec2;
    fn pos_mut(&mut self) -> &mut Vec2;
    fn vel(&self) -> Vec2;
    fn vel_mut(&mut self) -> &mut Vec2;
    /// Distance from the center to the edge used for bounds tests
    fn half_extent(&self) -> f32;

    /// Position after one more tick at the current velocity
    #[inline]
    fn next_pos(&self) -> Vec2 {
        self.pos() + self.vel()
    }

    /// Advance position by velocity (unit timestep)
    #[inline]
    fn integrate(&mut self) {
        let vel = self.vel();
        *self.pos_mut() += vel;
    }

    /// Negate the velocity component on `axis`
    #[inline]
    fn reflect_axis(&mut self, axis: Axis) {
        let vel = self.vel_mut();
        match axis {
            Axis::X => vel.x = -vel.x,
            Axis::Y => vel.y = -vel.y,
        }
    }
}

/// A circular body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Number of splits in this body's lineage
    pub generation: u8,
    /// Ticks left before the cutter can split this body
    pub immunity: u32,
}

impl Body {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            generation: 0,
            immunity: 0,
        }
    }

    /// Mass is always derived from the radius
    #[inline]
    pub fn mass(&self) -> f32 {
        self.radius * self.radius
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Whether contact with the cutter splits this body
    pub fn can_split(&self, tuning: &Tuning) -> bool {
        self.generation < tuning.max_generation
            && self.radius > tuning.split_min_radius
            && self.immunity == 0
    }

    /// Count down the immunity window by one tick
    #[inline]
    pub fn cool_down(&mut self) {
        self.immunity = self.immunity.saturating_sub(1);
    }
}

impl Kinematic for Body {
    fn pos(&self) -> Vec2 {
        self.pos
    }
    fn pos_mut(&mut self) -> &mut Vec2 {
        &mut self.pos
    }
    fn vel(&self) -> Vec2 {
        self.vel
    }
    fn vel_mut(&mut self) -> &mut Vec2 {
        &mut self.vel
    }
    fn half_extent(&self) -> f32 {
        self.radius
    }
}

/// The roaming triangle that splits bodies on contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cutter {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Circumradius of the triangle, also its contact radius
    pub size: f32,
    /// Orientation in [0, 2π), visual only
    pub rotation: f32,
}

impl Cutter {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self {
            pos,
            vel,
            size,
            rotation: 0.0,
        }
    }

    /// Advance the visual rotation, wrapping at a full turn
    pub fn spin(&mut self, step: f32) {
        self.rotation = wrap_angle(self.rotation + step);
    }

    /// Triangle corners in world space (for rendering)
    pub fn vertices(&self) -> [Vec2; 3] {
        let third = std::f32::consts::TAU / 3.0;
        [0.0, third, 2.0 * third]
            .map(|offset| self.pos + Vec2::from_angle(self.rotation + offset) * self.size)
    }
}

impl Kinematic for Cutter {
    fn pos(&self) -> Vec2 {
        self.pos
    }
    fn pos_mut(&mut self) -> &mut Vec2 {
        &mut self.pos
    }
    fn vel(&self) -> Vec2 {
        self.vel
    }
    fn vel_mut(&mut self) -> &mut Vec2 {
        &mut self.vel
    }
    fn half_extent(&self) -> f32 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    fn body(radius: f32) -> Body {
        Body::new(1, Vec2::new(100.0, 100.0), Vec2::new(2.0, -3.0), radius)
    }

    #[test]
    fn test_mass_follows_radius() {
        let mut b = body(20.0);
        assert_eq!(b.mass(), 400.0);
        b.radius = 16.0;
        assert_eq!(b.mass(), 256.0);
    }

    #[test]
    fn test_integrate_and_reflect() {
        let mut b = body(20.0);
        b.integrate();
        assert_eq!(b.pos, Vec2::new(102.0, 97.0));

        b.reflect_axis(Axis::X);
        assert_eq!(b.vel, Vec2::new(-2.0, -3.0));
        b.reflect_axis(Axis::Y);
        assert_eq!(b.vel, Vec2::new(-2.0, 3.0));
    }

    #[test]
    fn test_can_split() {
        let tuning = Tuning::default();
        let mut b = body(20.0);
        assert!(b.can_split(&tuning));

        b.immunity = 1;
        assert!(!b.can_split(&tuning));
        b.immunity = 0;

        b.generation = tuning.max_generation;
        assert!(!b.can_split(&tuning));
        b.generation = 0;

        // Radius must be strictly above the minimum
        b.radius = tuning.split_min_radius;
        assert!(!b.can_split(&tuning));
    }

    #[test]
    fn test_cool_down_stops_at_zero() {
        let mut b = body(20.0);
        b.immunity = 2;
        b.cool_down();
        b.cool_down();
        b.cool_down();
        assert_eq!(b.immunity, 0);
    }

    #[test]
    fn test_cutter_spin_wraps() {
        let mut cutter = Cutter::new(Vec2::ZERO, Vec2::ZERO, 30.0);
        for _ in 0..1000 {
            cutter.spin(0.5);
            assert!(cutter.rotation >= 0.0 && cutter.rotation < TAU);
        }
    }

    #[test]
    fn test_cutter_vertices_on_circumcircle() {
        let mut cutter = Cutter::new(Vec2::new(50.0, 60.0), Vec2::ZERO, 30.0);
        cutter.spin(1.0);
        for v in cutter.vertices() {
            assert!(((v - cutter.pos).length() - 30.0).abs() < 1e-4);
        }
    }
}
