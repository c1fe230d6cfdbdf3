// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boxes, canvases, and placement results.

use kurbo::{Point, Rect, Size};

use crate::error::PlacementError;

/// A placed note's footprint in canvas coordinates.
///
/// `x`/`y` is the top-left corner. The size is whatever the host measured;
/// the engine never changes it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NoteBox {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Measured width.
    pub width: f64,
    /// Measured height.
    pub height: f64,
}

impl NoteBox {
    /// Create a box from its top-left corner and size.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The box occupied by a note of `size` at `placement`.
    ///
    /// Rotation is cosmetic and does not change the footprint.
    #[inline]
    pub fn from_placement(placement: &Placement, size: Size) -> Self {
        Self::new(placement.x, placement.y, size.width, size.height)
    }

    /// Top-left corner.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Measured size.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The box as a [`Rect`].
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin(), self.size())
    }

    /// The box inflated by `margin` on every side.
    ///
    /// Two notes keep their minimum gap when their padded rects do not
    /// intersect (see [`padded_overlap`]).
    #[inline]
    pub fn padded(&self, margin: f64) -> Rect {
        self.rect().inflate(margin, margin)
    }
}

/// The fixed region notes are placed in. The origin is the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Canvas {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
}

impl Canvas {
    /// Create a canvas of the given size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center of the canvas, where the spiral starts.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Canvas size.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The region a note must stay inside when `padding` is kept from every edge.
    ///
    /// May be empty or inverted when the canvas is smaller than twice the padding.
    #[inline]
    pub fn inset_bounds(&self, padding: f64) -> Rect {
        Rect::new(padding, padding, self.width - padding, self.height - padding)
    }

    pub(crate) fn check(&self) -> Result<(), PlacementError> {
        if is_positive_finite(self.width) && is_positive_finite(self.height) {
            Ok(())
        } else {
            Err(PlacementError::InvalidCanvas {
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl From<Size> for Canvas {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

/// Where the engine put a note.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Left edge of the note.
    pub x: f64,
    /// Top edge of the note.
    pub y: f64,
    /// Cosmetic tilt in degrees. Never part of bounds or overlap math.
    pub rotation_degrees: f64,
    /// `true` when the search budget ran out and this is the fallback position.
    ///
    /// Forced placements may overlap earlier notes or leave the canvas.
    pub forced: bool,
    /// Number of spiral probes consumed (zero for the first note).
    pub attempts: u32,
}

impl Placement {
    /// Top-left corner.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The footprint of a note of `size` at this placement.
    #[inline]
    pub fn to_box(&self, size: Size) -> NoteBox {
        NoteBox::from_placement(self, size)
    }
}

/// Whether two padded rects intersect.
///
/// The test is strict: rects that only share an edge do not overlap.
#[inline]
pub fn padded_overlap(a: Rect, b: Rect) -> bool {
    debug_assert!(
        !(a.x0.is_nan() || a.y0.is_nan() || b.x0.is_nan() || b.y0.is_nan()),
        "overlap test on NaN coordinates"
    );
    a.x0 < b.x1 && a.x1 > b.x0 && a.y0 < b.y1 && a.y1 > b.y0
}

/// Whether `inner` lies entirely inside `outer`, edges included.
#[inline]
pub(crate) fn contains_rect(outer: Rect, inner: Rect) -> bool {
    inner.x0 >= outer.x0 && inner.y0 >= outer.y0 && inner.x1 <= outer.x1 && inner.y1 <= outer.y1
}

#[inline]
pub(crate) fn is_positive_finite(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Reject sizes the host could not have measured.
pub(crate) fn check_size(size: Size) -> Result<(), PlacementError> {
    if is_positive_finite(size.width) && is_positive_finite(size.height) {
        Ok(())
    } else {
        Err(PlacementError::InvalidSize {
            width: size.width,
            height: size.height,
        })
    }
}
