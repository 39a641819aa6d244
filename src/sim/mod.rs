//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Unit timestep only (one velocity step per tick)
//! - Seeded RNG only
//! - Stable iteration order (population order)
//! - No rendering or platform dependencies

pub mod body;
pub mod boundary;
pub mod collision;
pub mod fission;
pub mod grid;
pub mod seed;
pub mod state;
pub mod tick;

pub use body::{Axis, Body, Cutter, Kinematic};
pub use boundary::{Face, Rect};
pub use collision::resolve_pair;
pub use fission::{PopulationEdits, split};
pub use grid::{CellKey, SpatialGrid};
pub use state::{Frame, SimState};
pub use tick::{TickReport, tick, visit_pairs};
