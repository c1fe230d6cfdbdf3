// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_spiral --heading-base-level=0

//! Understory Spiral: collision-avoiding spiral placement for boards of notes.
//!
//! Given an ordered sequence of measured boxes and a fixed canvas, this crate
//! assigns each box a position (and a small cosmetic tilt) so that boxes do
//! not overlap, growing outward from the canvas center.
//!
//! - The first note is centered exactly.
//! - Note `i` searches a golden-angle spiral seeded by `i`, probing candidates
//!   until one lies inside the padded canvas and clears every earlier note by
//!   the configured margin.
//! - The search is bounded, and ends early once the spiral has outgrown the
//!   canvas. When it ends without a fit the note gets a
//!   deterministic fallback position and the result is marked
//!   [`forced`](Placement::forced); nothing is ever left unplaced.
//!
//! Placement is deterministic: the same canvas, sizes, and order always give
//! bit-identical results. Order matters, since the index seeds the spiral.
//!
//! This crate does not measure or render anything. Hosts measure notes with
//! their own text/layout machinery, feed the sizes in, and apply the
//! resulting positions and rotations to their own views.
//!
//! ## API overview
//!
//! - [`SpiralEngine`]: stateless engine with [`SpiralEngine::place_first`] and
//!   [`SpiralEngine::place_next`].
//! - [`PlacedSet`]: the caller-owned, append-only set of boxes placed so far.
//! - [`PlacementConfig`]: margins, spiral tightness, step sizes, and budget.
//! - [`SpiralSearch`]: the bounded candidate generator the engine drives,
//!   usable on its own for inspection and testing.
//! - [`Board`]: a canvas plus placed notes, with full re-layout,
//!   incremental append, and resize.
//! - [`LabelLayout`]: the seam for other board layouts (force-directed,
//!   word cloud) provided by other crates.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_spiral::{Canvas, PlacedSet, SpiralEngine};
//!
//! let engine = SpiralEngine::default();
//! let canvas = Canvas::new(800.0, 600.0);
//! let size = Size::new(100.0, 40.0);
//!
//! let first = engine.place_first(canvas, size).unwrap();
//! assert_eq!((first.x, first.y), (350.0, 280.0));
//!
//! let mut placed = PlacedSet::new();
//! placed.push(first.to_box(size));
//!
//! let second = engine.place_next(&placed, canvas, 1, size).unwrap();
//! assert!(!second.forced);
//! placed.push(second.to_box(size));
//! ```
//!
//! A [`Board`] does the bookkeeping for a whole pass:
//!
//! ```rust
//! use kurbo::Size;
//! use understory_spiral::{Board, Canvas, SpiralEngine};
//!
//! let mut board = Board::new(SpiralEngine::default(), Canvas::new(1024.0, 768.0)).unwrap();
//! board
//!     .layout_all([Size::new(120.0, 48.0), Size::new(90.0, 32.0), Size::new(150.0, 60.0)])
//!     .unwrap();
//! assert_eq!(board.len(), 3);
//! assert_eq!(board.forced_count(), 0);
//!
//! // A new note arrives: place it without moving the others.
//! let p = board.append(Size::new(100.0, 40.0)).unwrap();
//! assert!(!p.forced);
//! ```
//!
//! ## Features
//!
//! - `std` *(default)*: use `std` float math in `kurbo`.
//! - `libm`: use `libm` float math for `no_std` builds.
//! - `occupancy_grid` *(default)*: enables [`occupancy::GridOccupancy`], a
//!   uniform grid broad-phase backed by `hashbrown`. Placements are identical
//!   with or without it.
//! - `tracing`: emit `tracing` events (`trace` per accepted note, `warn` per
//!   fallback, `debug` per board layout).
//!
//! ### Float semantics
//!
//! Sizes and canvas dimensions must be positive and finite; anything else is
//! reported as a [`PlacementError`]. Debug builds assert on NaN coordinates
//! reaching the overlap test.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod board;
pub mod config;
mod engine;
mod error;
pub mod occupancy;
mod placed;
mod search;
mod types;

pub use board::{Board, LabelLayout};
pub use config::{GOLDEN_ANGLE, PlacementConfig};
pub use engine::SpiralEngine;
pub use error::{ConfigError, PlacementError};
pub use placed::PlacedSet;
pub use search::{Probe, Rejection, SpiralSearch};
pub use types::{Canvas, NoteBox, Placement, padded_overlap};
