//! Overlay configuration: orbit tuning, layering and motion policy.
//!
//! Every field has a default, so an empty JSON object is a valid config. The
//! browser binding reads an optional override from the container's
//! `data-fleet` attribute.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ESCORTS, OVERLAY_Z_INDEX};
use crate::error::OverlayError;
use crate::orbit::OrbitParameters;
use crate::surface::SurfaceLayer;

/// Whether the fleet moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionMode {
    /// Continuous animation, one frame per display refresh.
    #[default]
    Animate,
    /// A single frame at `t = 0`, redrawn only on resize.
    Still,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverlayConfig {
    pub orbit: OrbitParameters,
    pub z_index: i32,
    pub motion: MotionMode,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self { orbit: OrbitParameters::default(), z_index: OVERLAY_Z_INDEX, motion: MotionMode::Animate }
    }
}

impl OverlayConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` for malformed JSON and `InvalidConfig` for
    /// out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, OverlayError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the orbit invariants: fractions in `(0, 1]`, escort ratios in
    /// `(0, 1)`, at most [`MAX_ESCORTS`] escorts, finite rates, non-negative
    /// scales and wobble amplitude.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<(), OverlayError> {
        let orbit = &self.orbit;
        for (name, value) in [
            ("radiusFraction", orbit.radius_fraction),
            ("verticalSquash", orbit.vertical_squash),
            ("centerXFraction", orbit.center_x_fraction),
            ("centerYFraction", orbit.center_y_fraction),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(OverlayError::InvalidConfig(format!("{name} must be in (0, 1], got {value}")));
            }
        }

        // Escorts fly strictly inside and flatter than the mothership.
        for (name, value) in
            [("escortRadiusRatio", orbit.escort_radius_ratio), ("escortSquashRatio", orbit.escort_squash_ratio)]
        {
            if !(value > 0.0 && value < 1.0) {
                return Err(OverlayError::InvalidConfig(format!("{name} must be in (0, 1), got {value}")));
            }
        }

        if orbit.escort_count > MAX_ESCORTS {
            return Err(OverlayError::InvalidConfig(format!(
                "escortCount must be at most {MAX_ESCORTS}, got {}",
                orbit.escort_count
            )));
        }

        let wobble = orbit.escort_angular_velocity_perturbation;
        for (name, value) in [
            ("angularVelocityPrimary", orbit.angular_velocity_primary),
            ("perturbation.frequency", wobble.frequency),
            ("hueDeg", orbit.hue_deg),
            ("hueDriftDegPerSec", orbit.hue_drift_deg_per_sec),
        ] {
            if !value.is_finite() {
                return Err(OverlayError::InvalidConfig(format!("{name} must be finite, got {value}")));
            }
        }

        for (name, value) in [
            ("primaryScale", orbit.primary_scale),
            ("escortScale", orbit.escort_scale),
            ("perturbation.amplitude", wobble.amplitude),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(OverlayError::InvalidConfig(format!("{name} must be finite and >= 0, got {value}")));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn layer(&self) -> SurfaceLayer {
        SurfaceLayer { z_index: self.z_index }
    }
}

/// Resolve a config from an optional JSON override, falling back to the
/// defaults (with a warning) when the override is invalid.
#[must_use]
pub fn config_from_attribute(raw: Option<&str>) -> OverlayConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return OverlayConfig::default();
    };
    match OverlayConfig::from_json(raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("fleet: ignoring config override: {err}");
            OverlayConfig::default()
        }
    }
}
