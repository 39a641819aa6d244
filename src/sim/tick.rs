//! One simulation step
//!
//! Phases run in a fixed order and each one sees the complete output of the
//! previous one:
//! 1. cutter motion and spin
//! 2. cutter contacts and splits (staged)
//! 3. commit of staged population edits
//! 4. immunity countdown, boundaries and integration per body
//! 5. grid rebuild
//! 6. pairwise collisions over grid neighbors

use super::body::Kinematic;
use super::boundary;
use super::collision::{pair_mut, resolve_pair};
use super::fission::{self, PopulationEdits};
use super::grid::SpatialGrid;
use super::state::SimState;

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Bodies the cutter touched
    pub contacts: u32,
    /// Bodies that split
    pub splits: u32,
    /// Pairs resolved by the collision pass
    pub collisions: u32,
    /// Population after the tick
    pub population: usize,
}

/// Advance the simulation by one tick
pub fn tick(state: &mut SimState) -> TickReport {
    state.time_ticks += 1;
    let extent = state.viewport;
    let container = state.container().copied();
    let mut report = TickReport::default();

    // 1. Cutter
    boundary::resolve_cutter(&mut state.cutter, extent, container.as_ref());
    state.cutter.integrate();
    state.cutter.spin(state.tuning.cutter_spin);

    // 2. Cutter contacts against the current population
    let touched = fission::sweep_cutter(&mut state.cutter, &state.bodies);
    report.contacts = touched.len() as u32;

    let mut edits = PopulationEdits::default();
    for idx in touched {
        if !state.bodies[idx].can_split(&state.tuning) {
            continue;
        }
        let ids = [state.next_entity_id(), state.next_entity_id()];
        let parent = &state.bodies[idx];
        edits.stage_split(parent, fission::split(parent, ids, &state.tuning));
        report.splits += 1;
    }

    // 3. Commit
    let newborn_from = state.commit(edits);
    if report.splits > 0 {
        log::debug!(
            "tick {}: {} split(s), population {}",
            state.time_ticks,
            report.splits,
            state.bodies.len()
        );
    }

    // 4. Kinematics; bodies born this tick keep their full immunity window
    for (idx, body) in state.bodies.iter_mut().enumerate() {
        if idx < newborn_from {
            body.cool_down();
        }
        boundary::resolve_body(body, extent, container.as_ref());
        body.integrate();
    }

    // 5. Grid
    state.grid.rebuild(&state.bodies);

    // 6. Collisions
    let mut resolved = 0;
    let bodies = &mut state.bodies;
    visit_pairs(&state.grid, |i, j| {
        let (a, b) = pair_mut(bodies, i, j);
        if resolve_pair(a, b) {
            resolved += 1;
        }
    });
    report.collisions = resolved;
    report.population = state.bodies.len();

    log::trace!(
        "tick {}: {:?} over {} cells",
        state.time_ticks,
        report,
        state.grid.occupied_cells()
    );
    report
}

/// Visit each unordered pair of grid neighbors exactly once.
///
/// Handles are processed in order; a handle is marked before its neighbors
/// are visited and marked handles are skipped, so the pair (i, j) is seen
/// only from whichever of the two comes first.
pub fn visit_pairs<F>(grid: &SpatialGrid, mut visit: F)
where
    F: FnMut(usize, usize),
{
    let mut processed = vec![false; grid.len()];
    let mut candidates = Vec::new();
    for i in 0..grid.len() {
        processed[i] = true;
        candidates.clear();
        candidates.extend(grid.neighbors(i));
        for &j in &candidates {
            if !processed[j] {
                visit(i, j);
            }
        }
    }
}
