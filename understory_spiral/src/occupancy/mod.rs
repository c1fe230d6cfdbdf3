// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Broad-phase storage for placed boxes.
//!
//! An [`Occupancy`] backend only narrows down which placed boxes might be
//! near a query region. The exact padded-overlap test is always done by
//! [`PlacedSet`][crate::PlacedSet], so every backend yields the same
//! placements.
//!
//! - [`FlatScan`]: visits every slot. Smallest and fine for boards of a few
//!   hundred notes.
//! - `GridOccupancy` *(feature `occupancy_grid`)*: uniform grid keyed by cell,
//!   visiting only boxes registered in cells the query touches.

use kurbo::Rect;

#[cfg(feature = "occupancy_grid")]
mod grid;

#[cfg(feature = "occupancy_grid")]
pub use grid::GridOccupancy;

/// Spatial backend abstraction used by [`PlacedSet`][crate::PlacedSet].
///
/// Slots are dense and assigned in placement order starting at 0.
pub trait Occupancy {
    /// Register the raw (unpadded) rect of the box in `slot`.
    fn insert(&mut self, slot: usize, rect: Rect);

    /// Forget every slot.
    fn clear(&mut self);

    /// Visit slots whose rect may intersect `region`.
    ///
    /// Backends may report extra slots but must never miss one whose rect
    /// intersects `region`. Each slot is reported at most once.
    fn visit_near<F: FnMut(usize)>(&self, region: Rect, f: F);
}

/// Linear-scan backend: every slot is a candidate.
#[derive(Clone, Debug, Default)]
pub struct FlatScan {
    len: usize,
}

impl FlatScan {
    /// Create an empty backend.
    pub const fn new() -> Self {
        Self { len: 0 }
    }
}

impl Occupancy for FlatScan {
    fn insert(&mut self, slot: usize, _rect: Rect) {
        self.len = self.len.max(slot + 1);
    }

    fn clear(&mut self) {
        self.len = 0;
    }

    fn visit_near<F: FnMut(usize)>(&self, _region: Rect, f: F) {
        (0..self.len).for_each(f);
    }
}
