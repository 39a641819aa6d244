//! Cutter contact and body splitting
//!
//! The cutter always bounces off a body it touches. A touched body that is
//! eligible splits into two smaller children; the split is staged in
//! [`PopulationEdits`] and committed by the state after the sweep.

use glam::Vec2;

use super::body::{Body, Cutter};
use crate::tuning::Tuning;

/// Population changes staged during one tick
#[derive(Debug, Clone, Default)]
pub struct PopulationEdits {
    /// IDs of parents to remove
    pub removed: Vec<u32>,
    /// Children to append after removal
    pub offspring: Vec<Body>,
}

impl PopulationEdits {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.offspring.is_empty()
    }

    /// Stage `parent`'s replacement by its children
    pub fn stage_split(&mut self, parent: &Body, children: [Body; 2]) {
        self.removed.push(parent.id);
        self.offspring.extend(children);
    }
}

/// Whether the cutter's contact circle overlaps the body
#[inline]
pub fn touches(cutter: &Cutter, body: &Body) -> bool {
    cutter.pos.distance(body.pos) < cutter.size + body.radius
}

/// Send the cutter away from `body` at its current speed
pub fn deflect_cutter(cutter: &mut Cutter, body: &Body) {
    let speed = cutter.vel.length();
    match (cutter.pos - body.pos).try_normalize() {
        Some(away) => cutter.vel = away * speed,
        // Coincident centers: no normal to follow, turn around
        None => cutter.vel = -cutter.vel,
    }
}

/// Deflect the cutter off every body it touches, in population order.
///
/// Returns the indices of the touched bodies.
pub fn sweep_cutter(cutter: &mut Cutter, bodies: &[Body]) -> Vec<usize> {
    let mut touched = Vec::new();
    for (idx, body) in bodies.iter().enumerate() {
        if touches(cutter, body) {
            deflect_cutter(cutter, body);
            touched.push(idx);
        }
    }
    touched
}

/// Split `parent` into two children with the given IDs.
///
/// Children sit one child-radius either side of the parent along the axis
/// perpendicular to its heading, and fly off at the heading ± the split
/// angle. The child on the `+` side of the axis takes the `+` angle.
pub fn split(parent: &Body, ids: [u32; 2], tuning: &Tuning) -> [Body; 2] {
    let heading = parent.vel.try_normalize().unwrap_or(Vec2::X);
    let axis = heading.perp();
    let radius = parent.radius * tuning.split_radius_scale;
    let speed = parent.speed().max(tuning.min_split_speed);

    let child = |id: u32, side: f32| Body {
        id,
        pos: parent.pos + axis * (side * radius),
        vel: Vec2::from_angle(side * tuning.split_angle).rotate(heading) * speed,
        radius,
        generation: parent.generation.saturating_add(1),
        immunity: tuning.immunity_ticks,
    };

    [child(ids[0], 1.0), child(ids[1], -1.0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn parent() -> Body {
        Body::new(7, Vec2::new(400.0, 300.0), Vec2::new(3.0, 0.0), 20.0)
    }

    #[test]
    fn test_split_invariants() {
        let tuning = Tuning::default();
        let p = parent();
        let children = split(&p, [10, 11], &tuning);

        assert_eq!(children[0].id, 10);
        assert_eq!(children[1].id, 11);
        for child in &children {
            assert!((child.radius - 16.0).abs() < EPS);
            assert_eq!(child.generation, 1);
            assert_eq!(child.immunity, 30);
            assert!(!child.can_split(&tuning));
            assert!((child.speed() - 3.0).abs() < EPS);
            assert!((child.pos.distance(p.pos) - 16.0).abs() < EPS);
        }
    }

    #[test]
    fn test_split_directions() {
        let children = split(&parent(), [1, 2], &Tuning::default());
        let sixty = std::f32::consts::FRAC_PI_3;

        // Heading +x, so the split axis is +y
        assert!((children[0].pos - Vec2::new(400.0, 316.0)).length() < EPS);
        assert!((children[1].pos - Vec2::new(400.0, 284.0)).length() < EPS);
        assert!((children[0].vel.to_angle() - sixty).abs() < EPS);
        assert!((children[1].vel.to_angle() + sixty).abs() < EPS);
        // Children diverge rather than converge
        let gap_now = children[0].pos.distance(children[1].pos);
        let gap_next = (children[0].pos + children[0].vel).distance(children[1].pos + children[1].vel);
        assert!(gap_next > gap_now);
    }

    #[test]
    fn test_split_speed_floor() {
        let mut p = parent();
        p.vel = Vec2::ZERO;
        for child in split(&p, [1, 2], &Tuning::default()) {
            assert!((child.speed() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_touches() {
        let cutter = Cutter::new(Vec2::new(430.0, 300.0), Vec2::ZERO, 20.0);
        assert!(touches(&cutter, &parent()));
        let cutter = Cutter::new(Vec2::new(440.0, 300.0), Vec2::ZERO, 20.0);
        assert!(!touches(&cutter, &parent()));
    }

    #[test]
    fn test_deflect_preserves_speed_and_points_away() {
        let p = parent();
        let mut cutter = Cutter::new(Vec2::new(420.0, 320.0), Vec2::new(-3.0, -4.0), 20.0);
        deflect_cutter(&mut cutter, &p);
        assert!((cutter.vel.length() - 5.0).abs() < EPS);
        let away = (cutter.pos - p.pos).normalize();
        assert!((cutter.vel.normalize() - away).length() < EPS);
    }

    #[test]
    fn test_deflect_coincident_reverses() {
        let p = parent();
        let mut cutter = Cutter::new(p.pos, Vec2::new(1.0, 2.0), 20.0);
        deflect_cutter(&mut cutter, &p);
        assert_eq!(cutter.vel, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn test_sweep_reports_touched_indices() {
        let bodies = vec![
            Body::new(1, Vec2::new(100.0, 100.0), Vec2::ZERO, 10.0),
            Body::new(2, Vec2::new(400.0, 300.0), Vec2::ZERO, 10.0),
            Body::new(3, Vec2::new(120.0, 100.0), Vec2::ZERO, 10.0),
        ];
        let mut cutter = Cutter::new(Vec2::new(110.0, 110.0), Vec2::new(1.0, 0.0), 15.0);
        assert_eq!(sweep_cutter(&mut cutter, &bodies), vec![0, 2]);
        assert!((cutter.vel.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_stage_split() {
        let p = parent();
        let mut edits = PopulationEdits::default();
        assert!(edits.is_empty());
        edits.stage_split(&p, split(&p, [8, 9], &Tuning::default()));
        assert_eq!(edits.removed, vec![7]);
        assert_eq!(edits.offspring.len(), 2);
    }
}
