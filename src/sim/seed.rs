//! Initial placement of bodies and the cutter

use glam::Vec2;
use rand::distr::Uniform;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::boundary::Rect;
use super::state::SimState;
use crate::settings::SeedParams;

/// Placement attempts before giving up on one body
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

/// Uniform sample in [lo, hi].
///
/// Collapses to `lo` for empty or inverted ranges and for spans too wide to
/// represent as an `f32`.
fn sample_span(rng: &mut Pcg32, lo: f32, hi: f32) -> f32 {
    if hi <= lo {
        return lo;
    }
    match Uniform::new_inclusive(lo, hi) {
        Ok(dist) => rng.sample(dist),
        Err(err) => {
            log::warn!("Cannot sample [{}, {}]: {}; using {}", lo, hi, err, lo);
            lo
        }
    }
}

/// Random position keeping a margin of `extent` from the frame edges and
/// clear of the container. `None` if no spot was found.
fn place(rng: &mut Pcg32, viewport: Vec2, extent: f32, container: Option<&Rect>) -> Option<Vec2> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let pos = Vec2::new(
            sample_span(rng, extent, viewport.x - extent),
            sample_span(rng, extent, viewport.y - extent),
        );
        if container.is_none_or(|rect| !rect.overlaps(pos, extent)) {
            return Some(pos);
        }
    }
    None
}

/// Fill `state` with `params.count` bodies and place the cutter.
///
/// Deterministic for a given seed. Bodies that cannot be placed clear of the
/// container are skipped.
pub fn seed_population(state: &mut SimState, params: &SeedParams) {
    let mut rng = Pcg32::seed_from_u64(params.seed);
    let viewport = state.viewport;
    let container = state.container().copied();
    let (r_min, r_max) = if params.radius_min <= params.radius_max {
        (params.radius_min, params.radius_max)
    } else {
        (params.radius_max, params.radius_min)
    };
    let speed = params.speed.abs();

    let mut skipped = 0;
    for _ in 0..params.count {
        let radius = sample_span(&mut rng, r_min, r_max);
        let vel = Vec2::new(
            sample_span(&mut rng, -speed, speed),
            sample_span(&mut rng, -speed, speed),
        );
        match place(&mut rng, viewport, radius, container.as_ref()) {
            Some(pos) => {
                state.spawn_body(pos, vel, radius);
            }
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        log::warn!("Could not place {} of {} bodies clear of the container", skipped, params.count);
    }

    let size = params.cutter_size;
    let heading = sample_span(&mut rng, 0.0, std::f32::consts::TAU);
    state.cutter.size = size;
    state.cutter.vel = crate::unit_vector(heading) * params.cutter_speed;
    state.cutter.pos = place(&mut rng, viewport, size, container.as_ref()).unwrap_or_else(|| {
        log::warn!("Could not place the cutter clear of the container; using the frame center");
        viewport * 0.5
    });
}
