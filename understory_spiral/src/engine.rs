// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stateless placement engine.

use kurbo::{Rect, Size, Vec2};

use crate::config::PlacementConfig;
use crate::error::PlacementError;
use crate::occupancy::Occupancy;
use crate::placed::PlacedSet;
use crate::search::{Probe, Rejection, SpiralSearch};
use crate::types::{Canvas, Placement, check_size, contains_rect};

/// Places notes along a golden-angle spiral around the canvas center.
///
/// The engine holds only its configuration. Everything that changes during
/// a layout pass lives in the caller's [`PlacedSet`].
#[derive(Clone, Debug, Default)]
pub struct SpiralEngine {
    config: PlacementConfig,
}

impl SpiralEngine {
    /// Create an engine after validating `config`.
    pub fn new(config: PlacementConfig) -> Result<Self, PlacementError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The engine's configuration.
    pub const fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Center the first note on the canvas.
    pub fn place_first(&self, canvas: Canvas, size: Size) -> Result<Placement, PlacementError> {
        canvas.check()?;
        check_size(size)?;
        let center = canvas.center();
        Ok(Placement {
            x: center.x - size.width / 2.0,
            y: center.y - size.height / 2.0,
            rotation_degrees: 0.0,
            forced: false,
            attempts: 0,
        })
    }

    /// Place note `index`.
    ///
    /// Index 0 is always centered with [`place_first`](Self::place_first).
    ///
    /// Probes the spiral seeded by `index` until a candidate lies inside the
    /// padded canvas and clears every box in `placed` by the configured
    /// margin. When the search ends without a fit, returns the fallback
    /// position with [`Placement::forced`] set; that position is not checked
    /// against anything.
    pub fn place_next<O: Occupancy>(
        &self,
        placed: &PlacedSet<O>,
        canvas: Canvas,
        index: usize,
        size: Size,
    ) -> Result<Placement, PlacementError> {
        if index == 0 {
            return Err(PlacementError::FirstIndex);
        }
        canvas.check()?;
        check_size(size)?;

        let center = canvas.center();
        let bounds = canvas.inset_bounds(self.config.padding);
        let mut search = SpiralSearch::new(index, &self.config)
            .with_radius_limit(reach(bounds, size));

        while let Some(probe) = search.next() {
            let candidate = Rect::from_origin_size(probe.origin_for(center, size), size);
            if !contains_rect(bounds, candidate) {
                search.reject(Rejection::Bounds);
                continue;
            }
            if placed.overlaps_padded(candidate, self.config.min_distance) {
                search.reject(Rejection::Overlap);
                continue;
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(
                index,
                attempts = probe.attempt,
                x = candidate.x0,
                y = candidate.y0,
                "placed note"
            );
            return Ok(self.accept(probe, candidate));
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(
            index,
            attempts = search.attempts(),
            left_canvas = search.has_left_reach(),
            placed = placed.len(),
            "spiral search exhausted, using fallback position"
        );
        Ok(Placement {
            attempts: search.attempts(),
            ..self.fallback(canvas, index, size)
        })
    }

    /// The position used when the search for `index` ends without a fit.
    ///
    /// Always marked [`forced`](Placement::forced). `attempts` is the full
    /// budget here; [`place_next`](Self::place_next) reports the probes it
    /// actually drew, which is fewer when the spiral left the canvas first.
    pub fn fallback(&self, canvas: Canvas, index: usize, size: Size) -> Placement {
        let probe = SpiralSearch::fallback(index, &self.config);
        let origin = probe.origin_for(canvas.center(), size);
        Placement {
            x: origin.x,
            y: origin.y,
            rotation_degrees: probe.rotation_degrees(self.config.rotation_amplitude),
            forced: true,
            attempts: probe.attempt,
        }
    }

    fn accept(&self, probe: Probe, candidate: Rect) -> Placement {
        Placement {
            x: candidate.x0,
            y: candidate.y0,
            rotation_degrees: probe.rotation_degrees(self.config.rotation_amplitude),
            forced: false,
            attempts: probe.attempt,
        }
    }
}

/// Farthest the spiral point can be from the center with a note of `size`
/// still inside `bounds`.
fn reach(bounds: Rect, size: Size) -> f64 {
    let half_x = ((bounds.width() - size.width) / 2.0).max(0.0);
    let half_y = ((bounds.height() - size.height) / 2.0).max(0.0);
    Vec2::new(half_x, half_y).hypot()
}
