//! Simulation state
//!
//! Owns the body population and everything a tick reads: the cutter, the
//! viewport extent, the container rectangle and the collision grid.

use glam::Vec2;
use serde::Serialize;

use super::body::{Body, Cutter};
use super::boundary::Rect;
use super::fission::PopulationEdits;
use super::grid::SpatialGrid;
use super::seed;
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Read-only view of one committed frame, for renderers
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Frame<'a> {
    pub tick: u64,
    pub bodies: &'a [Body],
    pub cutter: &'a Cutter,
}

#[derive(Debug, Clone)]
pub struct SimState {
    /// Physics constants
    pub tuning: Tuning,
    /// Outer frame (width, height)
    pub viewport: Vec2,
    /// Bodies in stable order; edited only by `commit` during a tick
    pub bodies: Vec<Body>,
    pub cutter: Cutter,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Interior obstacle, `None` until measured
    container: Option<Rect>,
    pub(crate) grid: SpatialGrid,
    next_id: u32,
}

impl SimState {
    /// Empty population with the given cutter
    pub fn new(viewport: Vec2, cutter: Cutter, tuning: Tuning) -> Self {
        Self {
            grid: SpatialGrid::new(tuning.cell_size),
            tuning,
            viewport,
            bodies: Vec::new(),
            cutter,
            time_ticks: 0,
            container: None,
            next_id: 1,
        }
    }

    /// Build and seed a scene from settings
    pub fn seeded(settings: &Settings) -> Self {
        let (width, height) = settings.viewport;
        let params = &settings.seeding;

        if !settings.tuning.covers_radius(params.radius_max) {
            log::warn!(
                "Grid cell {} is smaller than the largest collision diameter {}; collisions may be missed",
                settings.tuning.cell_size,
                2.0 * params.radius_max
            );
        }

        let mut state = Self::new(
            Vec2::new(width, height),
            Cutter::new(Vec2::ZERO, Vec2::ZERO, params.cutter_size),
            settings.tuning.clone(),
        );
        state.set_container(settings.container);
        seed::seed_population(&mut state, params);

        log::info!(
            "Seeded {} bodies (seed {}) in {}x{}",
            state.bodies.len(),
            params.seed,
            width,
            height
        );
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a generation-0 body; returns its ID
    pub fn spawn_body(&mut self, pos: Vec2, vel: Vec2, radius: f32) -> u32 {
        let id = self.next_entity_id();
        self.bodies.push(Body::new(id, pos, vel, radius));
        id
    }

    /// Update the outer frame after a resize
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    /// Update the container; rectangles without area count as unmeasured
    pub fn set_container(&mut self, rect: Option<Rect>) {
        self.container = rect.filter(Rect::is_measured);
    }

    pub fn container(&self) -> Option<&Rect> {
        self.container.as_ref()
    }

    /// Apply staged edits: remove parents, then append offspring.
    ///
    /// Returns the index at which the newly appended bodies start.
    pub fn commit(&mut self, edits: PopulationEdits) -> usize {
        if edits.is_empty() {
            return self.bodies.len();
        }
        if !edits.removed.is_empty() {
            self.bodies.retain(|b| !edits.removed.contains(&b.id));
        }
        let newborn_from = self.bodies.len();
        self.bodies.extend(edits.offspring);
        newborn_from
    }

    /// The committed frame for rendering
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            tick: self.time_ticks,
            bodies: &self.bodies,
            cutter: &self.cutter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_state() -> SimState {
        SimState::new(
            Vec2::new(800.0, 600.0),
            Cutter::new(Vec2::new(-1.0e4, -1.0e4), Vec2::ZERO, 0.0),
            Tuning::default(),
        )
    }

    #[test]
    fn test_entity_ids_unique() {
        let mut state = empty_state();
        let a = state.spawn_body(Vec2::new(10.0, 10.0), Vec2::ZERO, 5.0);
        let b = state.next_entity_id();
        let c = state.spawn_body(Vec2::new(20.0, 10.0), Vec2::ZERO, 5.0);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_unmeasured_container_stored_as_none() {
        let mut state = empty_state();
        state.set_container(Some(Rect::new(0.0, 0.0, 0.0, 0.0)));
        assert!(state.container().is_none());

        let rect = Rect::new(100.0, 200.0, 100.0, 200.0);
        state.set_container(Some(rect));
        assert_eq!(state.container(), Some(&rect));

        state.set_container(None);
        assert!(state.container().is_none());
    }

    #[test]
    fn test_commit_removes_then_appends() {
        let mut state = empty_state();
        let first = state.spawn_body(Vec2::new(10.0, 10.0), Vec2::ZERO, 20.0);
        let second = state.spawn_body(Vec2::new(200.0, 10.0), Vec2::ZERO, 20.0);

        let parent = state.bodies[0].clone();
        let ids = [state.next_entity_id(), state.next_entity_id()];
        let mut edits = PopulationEdits::default();
        edits.stage_split(&parent, crate::sim::fission::split(&parent, ids, &state.tuning));

        let newborn_from = state.commit(edits);
        assert_eq!(newborn_from, 1);
        assert_eq!(state.bodies.len(), 3);
        assert_eq!(state.bodies[0].id, second);
        assert!(state.bodies.iter().all(|b| b.id != first));
        assert_eq!(state.bodies[1].id, ids[0]);
        assert_eq!(state.bodies[2].id, ids[1]);
    }

    #[test]
    fn test_commit_empty_edits_keeps_population() {
        let mut state = empty_state();
        state.spawn_body(Vec2::new(10.0, 10.0), Vec2::ZERO, 20.0);
        state.spawn_body(Vec2::new(200.0, 10.0), Vec2::ZERO, 20.0);
        let before = state.bodies.clone();

        assert_eq!(state.commit(PopulationEdits::default()), 2);
        assert_eq!(state.bodies, before);
    }

    #[test]
    fn test_frame_serializes() {
        let mut state = empty_state();
        state.spawn_body(Vec2::new(10.0, 20.0), Vec2::new(1.0, 0.0), 5.0);
        let json = serde_json::to_string(&state.frame()).unwrap();
        assert!(json.contains("\"bodies\""));
        assert!(json.contains("\"cutter\""));
    }
}
