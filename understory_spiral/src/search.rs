// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded golden-angle spiral candidate generator.
//!
//! [`SpiralSearch`] yields polar probes around the canvas center. The caller
//! tests each probe and reports why it was rejected with
//! [`SpiralSearch::reject`]; the next probe then advances by the step that
//! matches the rejection. Bounds rejections move further around the spiral
//! than overlap rejections, and every
//! [`radius_growth_interval`](PlacementConfig::radius_growth_interval)
//! attempts the radius grows. The angle is never wrapped, so the spiral only
//! expands.
//!
//! The generator stops after [`max_attempts`](PlacementConfig::max_attempts)
//! probes, or earlier once the radius passes an optional
//! [radius limit](SpiralSearch::with_radius_limit): since the radius never
//! shrinks, every probe from then on would miss the canvas.
//! [`SpiralSearch::fallback`] gives the probe used once the search ends.

use core::iter::FusedIterator;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Size};

use crate::config::PlacementConfig;

/// Why a probe was turned down.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The note would cross the padded canvas edge.
    Bounds,
    /// The note's padded rect intersects a placed note's padded rect.
    Overlap,
}

/// A candidate spiral point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Probe {
    /// Polar angle in radians. Unbounded; it only grows.
    pub angle: f64,
    /// Distance from the canvas center.
    pub radius: f64,
    /// 1-based attempt number. The fallback probe carries `max_attempts`.
    ///
    /// The engine reports the probes actually drawn for forced placements.
    pub attempt: u32,
}

impl Probe {
    /// The spiral point around `center`.
    #[inline]
    pub fn point(&self, center: Point) -> Point {
        Point::new(
            center.x + self.radius * self.angle.cos(),
            center.y + self.radius * self.angle.sin(),
        )
    }

    /// Top-left corner that centers a note of `size` on the spiral point.
    #[inline]
    pub fn origin_for(&self, center: Point, size: Size) -> Point {
        let p = self.point(center);
        Point::new(p.x - size.width / 2.0, p.y - size.height / 2.0)
    }

    /// Cosmetic tilt for a note accepted at this probe.
    #[inline]
    pub fn rotation_degrees(&self, amplitude: f64) -> f64 {
        self.angle.sin() * amplitude
    }
}

/// Lazy, restartable sequence of spiral probes for one note.
#[derive(Clone, Debug)]
pub struct SpiralSearch {
    config: PlacementConfig,
    seed_angle: f64,
    seed_radius: f64,
    angle: f64,
    radius: f64,
    radius_limit: f64,
    attempts: u32,
    pending: Option<Rejection>,
}

impl SpiralSearch {
    /// Start a search for the note at `index`.
    pub fn new(index: usize, config: &PlacementConfig) -> Self {
        let seed_angle = seed_angle(index, config);
        let seed_radius = config.base_radius + (index as f64).sqrt() * config.radius_spacing;
        Self {
            config: *config,
            seed_angle,
            seed_radius,
            angle: seed_angle,
            radius: seed_radius,
            radius_limit: f64::INFINITY,
            attempts: 0,
            pending: None,
        }
    }

    /// End the search once the radius exceeds `limit`.
    ///
    /// Use the farthest distance from the center at which a probe can still
    /// pass the bounds test. A seed already past `limit` yields nothing.
    #[must_use]
    pub fn with_radius_limit(mut self, limit: f64) -> Self {
        self.radius_limit = limit;
        self
    }

    /// The probe used when the budget is spent without an accepted candidate.
    ///
    /// It sits on the seed angle at the enlarged radius
    /// `base_radius + sqrt(index + fallback_offset) * radius_spacing`.
    pub fn fallback(index: usize, config: &PlacementConfig) -> Probe {
        let radius = config.base_radius
            + (index as f64 + config.fallback_offset).sqrt() * config.radius_spacing;
        Probe {
            angle: seed_angle(index, config),
            radius,
            attempt: config.max_attempts,
        }
    }

    /// Report why the most recent probe was rejected.
    ///
    /// The step is applied when the next probe is drawn. Calling this twice
    /// for the same probe keeps only the latest reason.
    pub fn reject(&mut self, reason: Rejection) {
        debug_assert!(self.attempts > 0, "reject called before the first probe");
        self.pending = Some(reason);
    }

    /// Rewind to the seed probe with the full budget.
    pub fn restart(&mut self) {
        self.angle = self.seed_angle;
        self.radius = self.seed_radius;
        self.attempts = 0;
        self.pending = None;
    }

    /// Probes drawn so far.
    #[inline]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Probes left in the budget.
    #[inline]
    pub const fn remaining(&self) -> u32 {
        self.config.max_attempts.saturating_sub(self.attempts)
    }

    /// Whether the budget is spent.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Whether the spiral has grown past the radius limit.
    #[inline]
    pub fn has_left_reach(&self) -> bool {
        self.radius > self.radius_limit
    }

    fn advance(&mut self, reason: Rejection) {
        let (step, growth) = match reason {
            Rejection::Bounds => (self.config.bounds_angle_step, self.config.bounds_radius_growth),
            Rejection::Overlap => (
                self.config.overlap_angle_step,
                self.config.overlap_radius_growth,
            ),
        };
        self.angle += step;
        if self.attempts.is_multiple_of(self.config.radius_growth_interval) {
            self.radius += growth;
        }
    }
}

impl Iterator for SpiralSearch {
    type Item = Probe;

    fn next(&mut self) -> Option<Probe> {
        if self.is_exhausted() {
            return None;
        }
        if let Some(reason) = self.pending.take() {
            self.advance(reason);
        }
        if self.has_left_reach() {
            return None;
        }
        self.attempts += 1;
        Some(Probe {
            angle: self.angle,
            radius: self.radius,
            attempt: self.attempts,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining() as usize;
        if self.radius_limit.is_finite() {
            (0, Some(n))
        } else {
            (n, Some(n))
        }
    }
}

impl FusedIterator for SpiralSearch {}

#[inline]
fn seed_angle(index: usize, config: &PlacementConfig) -> f64 {
    index as f64 * config.golden_angle
}
