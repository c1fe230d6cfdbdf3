// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contract violations reported by the engine.
//!
//! Running out of search budget is not an error; see [`Placement::forced`][crate::Placement::forced].

use core::fmt;

/// A [`PlacementConfig`][crate::PlacementConfig] value that cannot drive a search.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The field is NaN or infinite.
    NonFinite {
        /// Field name.
        field: &'static str,
    },
    /// The field must be zero or greater.
    Negative {
        /// Field name.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// The field must be strictly greater than zero.
    NonPositive {
        /// Field name.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// `max_attempts` is zero.
    ZeroAttempts,
    /// `radius_growth_interval` is zero.
    ZeroGrowthInterval,
    /// `rotation_amplitude` exceeds [`MAX_ROTATION_AMPLITUDE`][crate::config::MAX_ROTATION_AMPLITUDE].
    RotationTooLarge {
        /// Offending amplitude in degrees.
        amplitude: f64,
    },
    /// `overlap_angle_step` is larger than `bounds_angle_step`.
    StepOrder {
        /// Angle step after a bounds rejection.
        bounds: f64,
        /// Angle step after an overlap rejection.
        overlap: f64,
    },
    /// `overlap_radius_growth` is larger than `bounds_radius_growth`.
    GrowthOrder {
        /// Radius growth on a bounds rejection.
        bounds: f64,
        /// Radius growth on an overlap rejection.
        overlap: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field } => write!(f, "{field} must be finite"),
            Self::Negative { field, value } => write!(f, "{field} must be >= 0 (got {value})"),
            Self::NonPositive { field, value } => write!(f, "{field} must be > 0 (got {value})"),
            Self::ZeroAttempts => f.write_str("max_attempts must be at least 1"),
            Self::ZeroGrowthInterval => f.write_str("radius_growth_interval must be at least 1"),
            Self::RotationTooLarge { amplitude } => write!(
                f,
                "rotation_amplitude {amplitude} exceeds the cosmetic limit"
            ),
            Self::StepOrder { bounds, overlap } => write!(
                f,
                "overlap_angle_step ({overlap}) must not exceed bounds_angle_step ({bounds})"
            ),
            Self::GrowthOrder { bounds, overlap } => write!(
                f,
                "overlap_radius_growth ({overlap}) must not exceed bounds_radius_growth ({bounds})"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

/// A caller broke the placement contract.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PlacementError {
    /// A note's measured width or height is not a positive finite number.
    InvalidSize {
        /// Supplied width.
        width: f64,
        /// Supplied height.
        height: f64,
    },
    /// The canvas width or height is not a positive finite number.
    InvalidCanvas {
        /// Supplied width.
        width: f64,
        /// Supplied height.
        height: f64,
    },
    /// Index 0 was passed to [`SpiralEngine::place_next`][crate::SpiralEngine::place_next].
    ///
    /// The first note is always centered with
    /// [`SpiralEngine::place_first`][crate::SpiralEngine::place_first].
    FirstIndex,
    /// The engine configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => write!(
                f,
                "note size must be positive and finite (got {width}x{height})"
            ),
            Self::InvalidCanvas { width, height } => write!(
                f,
                "canvas size must be positive and finite (got {width}x{height})"
            ),
            Self::FirstIndex => f.write_str("index 0 is placed with place_first, not place_next"),
            Self::Config(err) => write!(f, "invalid placement config: {err}"),
        }
    }
}

impl core::error::Error for PlacementError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for PlacementError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}
