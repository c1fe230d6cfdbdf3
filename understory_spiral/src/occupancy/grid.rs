// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid occupancy backend.
//!
//! Placed rects are bucketed into fixed-size square cells; a query only
//! touches the cells its region overlaps (plus a one-cell ring to absorb
//! rounding at cell edges). This pays off on crowded boards where most
//! placed notes are far from any given probe.

use alloc::vec::Vec;
use core::fmt::Debug;

use hashbrown::HashMap;
use kurbo::Rect;
use smallvec::SmallVec;

use super::Occupancy;

/// Uniform grid backend with a fixed cell size and origin at (0, 0).
#[derive(Clone)]
pub struct GridOccupancy {
    cell_size: f64,
    cells: HashMap<(i32, i32), SmallVec<[usize; 8]>>,
    slots: usize,
}

impl Debug for GridOccupancy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridOccupancy")
            .field("cell_size", &self.cell_size)
            .field("slots", &self.slots)
            .field("cells", &self.cells.len())
            .finish_non_exhaustive()
    }
}

impl GridOccupancy {
    /// Create a grid with the given cell size.
    ///
    /// A cell a little larger than a typical padded note works well.
    pub fn new(cell_size: f64) -> Self {
        debug_assert!(
            cell_size.is_finite() && cell_size > 0.0,
            "grid cell_size must be strictly positive and finite"
        );
        Self {
            cell_size,
            cells: HashMap::new(),
            slots: 0,
        }
    }

    /// Cell edge length.
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of non-empty cells.
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    fn cell_range(&self, min: f64, max: f64) -> (i32, i32) {
        let c0 = cell_coord(min, self.cell_size);
        let c1 = cell_coord(max, self.cell_size);
        if c0 <= c1 { (c0, c1) } else { (c1, c0) }
    }
}

impl Occupancy for GridOccupancy {
    fn insert(&mut self, slot: usize, rect: Rect) {
        let (ix0, ix1) = self.cell_range(rect.x0, rect.x1);
        let (iy0, iy1) = self.cell_range(rect.y0, rect.y1);
        for ix in ix0..=ix1 {
            for iy in iy0..=iy1 {
                self.cells.entry((ix, iy)).or_default().push(slot);
            }
        }
        self.slots = self.slots.max(slot + 1);
    }

    fn clear(&mut self) {
        self.cells.clear();
        self.slots = 0;
    }

    fn visit_near<F: FnMut(usize)>(&self, region: Rect, mut f: F) {
        let (ix0, ix1) = self.cell_range(region.x0, region.x1);
        let (iy0, iy1) = self.cell_range(region.y0, region.y1);

        let (ix0, ix1) = (ix0.saturating_sub(1), ix1.saturating_add(1));
        let (iy0, iy1) = (iy0.saturating_sub(1), iy1.saturating_add(1));

        let mut near: Vec<usize> = Vec::new();
        let span = (i64::from(ix1) - i64::from(ix0) + 1)
            .saturating_mul(i64::from(iy1) - i64::from(iy0) + 1);
        if span > i64::try_from(self.cells.len()).unwrap_or(i64::MAX) {
            // Fewer occupied cells than cells in range: walk the map instead.
            for (&(ix, iy), cell) in &self.cells {
                if (ix0..=ix1).contains(&ix) && (iy0..=iy1).contains(&iy) {
                    near.extend_from_slice(cell);
                }
            }
        } else {
            for ix in ix0..=ix1 {
                for iy in iy0..=iy1 {
                    if let Some(cell) = self.cells.get(&(ix, iy)) {
                        near.extend_from_slice(cell);
                    }
                }
            }
        }
        // Ascending slot order keeps visits deterministic regardless of hashing.
        near.sort_unstable();
        near.dedup();
        near.into_iter().for_each(&mut f);
    }
}

/// Map a coordinate to its grid cell, rounding towards -∞ and saturating to `i32`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Grid cell indices are intentionally i32; out-of-range values are saturated."
)]
#[inline]
fn cell_coord(value: f64, cell_size: f64) -> i32 {
    let t = value / cell_size;
    let coord = t as i32;

    // Round towards -∞ (the cast above has already truncated).
    if t < 0.0 && f64::from(coord) > t {
        coord.saturating_sub(1)
    } else {
        coord
    }
}
