// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The caller-owned set of boxes placed so far in a layout pass.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::occupancy::{FlatScan, Occupancy};
use crate::types::{NoteBox, padded_overlap};

/// Ordered, append-only sequence of placed boxes.
///
/// Append order is note order. It seeds the spiral for each following note,
/// so reordering the same boxes changes later placements.
#[derive(Clone, Debug, Default)]
pub struct PlacedSet<O = FlatScan> {
    boxes: Vec<NoteBox>,
    occupancy: O,
}

impl PlacedSet<FlatScan> {
    /// Create an empty set backed by a linear scan.
    pub const fn new() -> Self {
        Self {
            boxes: Vec::new(),
            occupancy: FlatScan::new(),
        }
    }
}

#[cfg(feature = "occupancy_grid")]
impl PlacedSet<crate::occupancy::GridOccupancy> {
    /// Create an empty set backed by a uniform grid with `cell_size` cells.
    pub fn with_grid(cell_size: f64) -> Self {
        Self::with_occupancy(crate::occupancy::GridOccupancy::new(cell_size))
    }
}

impl<O: Occupancy> PlacedSet<O> {
    /// Create an empty set over an explicit backend.
    ///
    /// The backend is cleared so slot numbering starts at 0.
    pub fn with_occupancy(mut occupancy: O) -> Self {
        occupancy.clear();
        Self {
            boxes: Vec::new(),
            occupancy,
        }
    }

    /// Append a box. It becomes the next slot.
    pub fn push(&mut self, b: NoteBox) {
        let slot = self.boxes.len();
        self.occupancy.insert(slot, b.rect());
        self.boxes.push(b);
    }

    /// Remove every box, keeping the backend.
    pub fn clear(&mut self) {
        self.boxes.clear();
        self.occupancy.clear();
    }

    /// Number of placed boxes.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether nothing has been placed.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Placed boxes in placement order.
    pub fn boxes(&self) -> &[NoteBox] {
        &self.boxes
    }

    /// The broad-phase backend.
    pub fn occupancy(&self) -> &O {
        &self.occupancy
    }

    /// Whether `candidate`, padded by `margin`, intersects any placed box padded by `margin`.
    pub fn overlaps_padded(&self, candidate: Rect, margin: f64) -> bool {
        let padded = candidate.inflate(margin, margin);
        // Any box that can intersect `padded` once inflated lies within `padded` grown by `margin`.
        let region = padded.inflate(margin, margin);
        let mut hit = false;
        self.occupancy.visit_near(region, |slot| {
            if !hit {
                hit = padded_overlap(padded, self.boxes[slot].padded(margin));
            }
        });
        hit
    }
}

impl<O: Occupancy> Extend<NoteBox> for PlacedSet<O> {
    fn extend<I: IntoIterator<Item = NoteBox>>(&mut self, iter: I) {
        for b in iter {
            self.push(b);
        }
    }
}

impl FromIterator<NoteBox> for PlacedSet<FlatScan> {
    fn from_iter<I: IntoIterator<Item = NoteBox>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
