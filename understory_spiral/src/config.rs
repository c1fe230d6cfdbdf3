// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Search parameters and their defaults.

use crate::error::ConfigError;

/// The golden angle in radians (about 137.5°).
///
/// Seeding each index at a multiple of this angle spreads notes around the
/// center with no periodic alignment.
pub const GOLDEN_ANGLE: f64 = 2.399963229728653;

/// Largest accepted [`PlacementConfig::rotation_amplitude`], in degrees.
pub const MAX_ROTATION_AMPLITUDE: f64 = 5.0;

/// Default [`PlacementConfig::max_attempts`].
pub const DEFAULT_MAX_ATTEMPTS: u32 = 4096;

/// Parameters of the spiral search.
///
/// All lengths are in canvas units (typically logical pixels); angles are
/// radians unless the name says otherwise.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementConfig {
    /// Margin each box is inflated by before overlap tests.
    ///
    /// Since both boxes are inflated, neighbouring notes end up at least
    /// twice this far apart.
    pub min_distance: f64,
    /// Margin kept between every note and the canvas edges.
    pub padding: f64,
    /// Spiral radius at index 0.
    pub base_radius: f64,
    /// Radius added per `sqrt(index)`.
    ///
    /// Growth is sub-linear in the index so early rings stay dense.
    pub radius_spacing: f64,
    /// Angle added per index when seeding a search.
    pub golden_angle: f64,
    /// Angle advance after a probe left the canvas bounds.
    pub bounds_angle_step: f64,
    /// Angle advance after a probe overlapped a placed note.
    ///
    /// Must not exceed [`bounds_angle_step`](Self::bounds_angle_step).
    pub overlap_angle_step: f64,
    /// Every this many attempts the radius grows.
    pub radius_growth_interval: u32,
    /// Radius growth when the cadence lands on a bounds rejection.
    pub bounds_radius_growth: f64,
    /// Radius growth when the cadence lands on an overlap rejection.
    ///
    /// Must not exceed [`bounds_radius_growth`](Self::bounds_radius_growth).
    pub overlap_radius_growth: f64,
    /// Probes tried per note before the fallback position is used.
    pub max_attempts: u32,
    /// Extra index added when computing the fallback radius.
    pub fallback_offset: f64,
    /// Maximum cosmetic tilt in degrees.
    pub rotation_amplitude: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            min_distance: 15.0,
            padding: 10.0,
            base_radius: 60.0,
            radius_spacing: 40.0,
            golden_angle: GOLDEN_ANGLE,
            bounds_angle_step: GOLDEN_ANGLE / 4.0,
            overlap_angle_step: GOLDEN_ANGLE / 8.0,
            radius_growth_interval: 16,
            bounds_radius_growth: 18.0,
            overlap_radius_growth: 12.0,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            fallback_offset: 8.0,
            rotation_amplitude: 3.0,
        }
    }
}

impl PlacementConfig {
    /// Check that every field can drive a terminating search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("min_distance", self.min_distance)?;
        non_negative("padding", self.padding)?;
        non_negative("base_radius", self.base_radius)?;
        positive("radius_spacing", self.radius_spacing)?;
        positive("golden_angle", self.golden_angle)?;
        positive("bounds_angle_step", self.bounds_angle_step)?;
        positive("overlap_angle_step", self.overlap_angle_step)?;
        non_negative("bounds_radius_growth", self.bounds_radius_growth)?;
        non_negative("overlap_radius_growth", self.overlap_radius_growth)?;
        non_negative("fallback_offset", self.fallback_offset)?;
        non_negative("rotation_amplitude", self.rotation_amplitude)?;

        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if self.radius_growth_interval == 0 {
            return Err(ConfigError::ZeroGrowthInterval);
        }
        if self.rotation_amplitude > MAX_ROTATION_AMPLITUDE {
            return Err(ConfigError::RotationTooLarge {
                amplitude: self.rotation_amplitude,
            });
        }
        if self.overlap_angle_step > self.bounds_angle_step {
            return Err(ConfigError::StepOrder {
                bounds: self.bounds_angle_step,
                overlap: self.overlap_angle_step,
            });
        }
        if self.overlap_radius_growth > self.bounds_radius_growth {
            return Err(ConfigError::GrowthOrder {
                bounds: self.bounds_radius_growth,
                overlap: self.overlap_radius_growth,
            });
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(PlacementConfig::default().validate(), Ok(()));
    }

    #[test]
    fn bounds_step_escalates_faster_by_default() {
        let cfg = PlacementConfig::default();
        assert!(cfg.bounds_angle_step > cfg.overlap_angle_step);
        assert!(cfg.bounds_radius_growth >= cfg.overlap_radius_growth);
    }

    #[test]
    fn rejects_bad_fields() {
        let cfg = PlacementConfig {
            min_distance: -1.0,
            ..PlacementConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::Negative {
                field: "min_distance",
                value: -1.0
            })
        );

        let cfg = PlacementConfig {
            radius_spacing: f64::NAN,
            ..PlacementConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NonFinite {
                field: "radius_spacing"
            })
        );

        let cfg = PlacementConfig {
            max_attempts: 0,
            ..PlacementConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroAttempts));

        let cfg = PlacementConfig {
            radius_growth_interval: 0,
            ..PlacementConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroGrowthInterval));

        let cfg = PlacementConfig {
            rotation_amplitude: 45.0,
            ..PlacementConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::RotationTooLarge { amplitude: 45.0 })
        );
    }

    #[test]
    fn rotation_cap_stays_cosmetic() {
        let at_cap = PlacementConfig {
            rotation_amplitude: MAX_ROTATION_AMPLITUDE,
            ..PlacementConfig::default()
        };
        assert_eq!(at_cap.validate(), Ok(()));

        let over = PlacementConfig {
            rotation_amplitude: 5.5,
            ..PlacementConfig::default()
        };
        assert_eq!(
            over.validate(),
            Err(ConfigError::RotationTooLarge { amplitude: 5.5 })
        );
    }

    #[test]
    fn overlap_step_may_not_outrun_bounds_step() {
        let cfg = PlacementConfig {
            bounds_angle_step: 0.2,
            overlap_angle_step: 0.4,
            ..PlacementConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::StepOrder {
                bounds: 0.2,
                overlap: 0.4
            })
        );
    }

    #[test]
    fn overlap_growth_may_not_outrun_bounds_growth() {
        let cfg = PlacementConfig {
            bounds_radius_growth: 0.0,
            overlap_radius_growth: 50.0,
            ..PlacementConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::GrowthOrder {
                bounds: 0.0,
                overlap: 50.0
            })
        );

        let equal = PlacementConfig {
            bounds_radius_growth: 12.0,
            overlap_radius_growth: 12.0,
            ..PlacementConfig::default()
        };
        assert_eq!(equal.validate(), Ok(()));
    }
}
