//! Uniform spatial grid for neighbor queries
//!
//! Bodies are bucketed by the integer cell containing their center. A query
//! returns the 3×3 block of cells around a body's own cell, which finds every
//! overlapping pair as long as the cell size covers the largest collision
//! diameter. The grid holds population indices only and is rebuilt each tick.

use std::collections::HashMap;

use glam::Vec2;

use super::body::Body;

/// Integer cell coordinate
pub type CellKey = (i32, i32);

#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cell_size: f32,
    /// Cell coord -> handles inserted into that cell
    buckets: HashMap<CellKey, Vec<usize>>,
    /// Cell each handle was inserted into (indexed by handle)
    cells: Vec<CellKey>,
}

impl SpatialGrid {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            buckets: HashMap::new(),
            cells: Vec::new(),
        }
    }

    /// Number of handles currently stored
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of non-empty cells
    pub fn occupied_cells(&self) -> usize {
        self.buckets.len()
    }

    /// Cell containing `pos`
    #[inline]
    pub fn cell_of(&self, pos: Vec2) -> CellKey {
        (
            (pos.x / self.cell_size).floor() as i32,
            (pos.y / self.cell_size).floor() as i32,
        )
    }

    /// Drop every bucket
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.cells.clear();
    }

    /// Bucket a position; handles are handed out in insertion order
    pub fn insert(&mut self, pos: Vec2) -> usize {
        let handle = self.cells.len();
        let cell = self.cell_of(pos);
        self.cells.push(cell);
        self.buckets.entry(cell).or_default().push(handle);
        handle
    }

    /// Clear and re-insert the population, so handle == population index
    pub fn rebuild(&mut self, bodies: &[Body]) {
        self.clear();
        for body in bodies {
            self.insert(body.pos);
        }
    }

    /// Handles in the 3×3 block around `handle`'s cell, `handle` included.
    ///
    /// Uses the cell recorded at insertion, so corrections made to positions
    /// after the rebuild do not shift the query window.
    pub fn neighbors(&self, handle: usize) -> impl Iterator<Item = usize> + '_ {
        let cell = self.cells.get(handle).copied();
        cell.into_iter().flat_map(move |cell| self.around(cell))
    }

    /// Handles in the 3×3 block around `cell`
    pub fn around(&self, (cx, cy): CellKey) -> impl Iterator<Item = usize> + '_ {
        (-1..=1)
            .flat_map(move |dx| (-1..=1).map(move |dy| (cx.saturating_add(dx), cy.saturating_add(dy))))
            .filter_map(move |key| self.buckets.get(&key))
            .flat_map(|bucket| bucket.iter().copied())
    }
}
