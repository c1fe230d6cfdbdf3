// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout passes over a whole board of notes.

use alloc::vec::Vec;

use kurbo::Size;

use crate::engine::SpiralEngine;
use crate::error::PlacementError;
use crate::occupancy::{FlatScan, Occupancy};
use crate::placed::PlacedSet;
use crate::types::{Canvas, Placement, check_size};

/// Anything that can turn an ordered list of sized items into 2D placements.
///
/// This is the seam for alternative board layouts (force-directed, word
/// cloud packing, ...) that live outside this crate.
pub trait LabelLayout {
    /// Place `sizes[i]` for every `i`, in order, on `canvas`.
    fn layout(&self, canvas: Canvas, sizes: &[Size]) -> Result<Vec<Placement>, PlacementError>;
}

impl LabelLayout for SpiralEngine {
    fn layout(&self, canvas: Canvas, sizes: &[Size]) -> Result<Vec<Placement>, PlacementError> {
        let mut board = Board::new(self.clone(), canvas)?;
        board.layout_all(sizes.iter().copied())?;
        Ok(board.placements)
    }
}

/// A canvas, an engine, and the notes laid out on it so far.
///
/// `Board` drives the engine the way a host would: index 0 is centered,
/// every later note is placed against everything before it, and nothing is
/// ever moved once placed until the next full [`layout_all`](Self::layout_all).
#[derive(Clone, Debug)]
pub struct Board<O = FlatScan> {
    engine: SpiralEngine,
    canvas: Canvas,
    placed: PlacedSet<O>,
    placements: Vec<Placement>,
}

impl Board<FlatScan> {
    /// Create an empty board using a linear-scan [`PlacedSet`].
    pub fn new(engine: SpiralEngine, canvas: Canvas) -> Result<Self, PlacementError> {
        Self::with_placed_set(engine, canvas, PlacedSet::new())
    }
}

impl<O: Occupancy> Board<O> {
    /// Create an empty board over a caller-chosen [`PlacedSet`] backend.
    ///
    /// Any boxes already in `placed` are discarded.
    pub fn with_placed_set(
        engine: SpiralEngine,
        canvas: Canvas,
        mut placed: PlacedSet<O>,
    ) -> Result<Self, PlacementError> {
        canvas.check()?;
        placed.clear();
        Ok(Self {
            engine,
            canvas,
            placed,
            placements: Vec::new(),
        })
    }

    /// The board's canvas.
    pub const fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// The engine used for every placement.
    pub const fn engine(&self) -> &SpiralEngine {
        &self.engine
    }

    /// Boxes placed in the current pass.
    pub const fn placed(&self) -> &PlacedSet<O> {
        &self.placed
    }

    /// Placements in note order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Number of notes on the board.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether the board has no notes.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// How many placements in the current pass came from the fallback path.
    pub fn forced_count(&self) -> usize {
        self.placements.iter().filter(|p| p.forced).count()
    }

    /// Remove every note.
    pub fn clear(&mut self) {
        self.placed.clear();
        self.placements.clear();
    }

    /// Place one more note after the existing ones without moving them.
    pub fn append(&mut self, size: Size) -> Result<Placement, PlacementError> {
        let index = self.placements.len();
        let placement = if index == 0 {
            self.engine.place_first(self.canvas, size)?
        } else {
            self.engine
                .place_next(&self.placed, self.canvas, index, size)?
        };
        self.placed.push(placement.to_box(size));
        self.placements.push(placement);
        Ok(placement)
    }

    /// Throw away the current layout and place `sizes` from scratch, in order.
    ///
    /// Every size is checked before anything is cleared, so an invalid size
    /// leaves the previous layout untouched.
    pub fn layout_all<I>(&mut self, sizes: I) -> Result<&[Placement], PlacementError>
    where
        I: IntoIterator<Item = Size>,
    {
        let sizes: Vec<Size> = sizes.into_iter().collect();
        for &size in &sizes {
            check_size(size)?;
        }

        self.clear();
        self.placements.reserve(sizes.len());
        for size in sizes {
            self.append(size)?;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            notes = self.placements.len(),
            forced = self.forced_count(),
            width = self.canvas.width,
            height = self.canvas.height,
            "laid out board"
        );
        Ok(&self.placements)
    }

    /// Change the canvas and lay every existing note out again in the same order.
    pub fn resize(&mut self, canvas: Canvas) -> Result<&[Placement], PlacementError> {
        canvas.check()?;
        self.canvas = canvas;
        let sizes: Vec<Size> = self.placed.boxes().iter().map(|b| b.size()).collect();
        self.layout_all(sizes)
    }
}
