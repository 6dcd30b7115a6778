//! Orbit model: where every ship is at time `t`.
//!
//! Pure functions only. [`positions_at`] has no hidden state and no
//! randomness, so identical inputs always produce bit-identical output. All
//! coordinates are CSS pixels relative to the surface's top-left corner.

#[cfg(test)]
#[path = "orbit_test.rs"]
mod orbit_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ESCORTS, TAU};

/// Size of the drawing surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    /// Build a viewport, clamping negative or non-finite dimensions to zero.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width: sanitize_extent(width), height: sanitize_extent(height) }
    }

    /// The shorter of the two sides.
    #[must_use]
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

fn sanitize_extent(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// One ship for one frame. Never stored across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    /// Hue in degrees, always in `[0, 360)`.
    pub hue_deg: f64,
}

/// The mothership and its escorts, escorts in index order.
#[derive(Debug, Clone, PartialEq)]
pub struct Formation {
    pub primary: Body,
    pub escorts: Vec<Body>,
}

/// Sinusoidal wobble applied to each escort's angle so the formation
/// "breathes" instead of rotating rigidly.
///
/// Escort `i` is offset by `amplitude · sin(t · frequency + i)` radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Perturbation {
    /// Peak angular offset in radians.
    pub amplitude: f64,
    /// Angular frequency in radians per second.
    pub frequency: f64,
}

impl Default for Perturbation {
    fn default() -> Self {
        Self { amplitude: 0.08, frequency: 0.9 }
    }
}

impl Perturbation {
    /// Angular offset for escort `index` at time `t`.
    #[must_use]
    pub fn offset(&self, t: f64, index: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let phase = index as f64;
        self.amplitude * (t * self.frequency + phase).sin()
    }
}

/// Shape and motion of the fleet's orbit.
///
/// Fractions are relative to the viewport: the centre is placed at
/// `(width · center_x_fraction, height · center_y_fraction)` and the radius is
/// `min(width, height) · radius_fraction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrbitParameters {
    /// Mothership angular velocity in radians per second.
    pub angular_velocity_primary: f64,
    pub escort_count: u32,
    pub escort_angular_velocity_perturbation: Perturbation,
    pub radius_fraction: f64,
    /// Ellipse flatten factor for the mothership orbit.
    pub vertical_squash: f64,
    pub center_x_fraction: f64,
    pub center_y_fraction: f64,
    /// Escort orbit radius as a fraction of the mothership's.
    pub escort_radius_ratio: f64,
    /// Escort squash as a fraction of the mothership's squash.
    pub escort_squash_ratio: f64,
    pub primary_scale: f64,
    pub escort_scale: f64,
    pub hue_deg: f64,
    pub hue_drift_deg_per_sec: f64,
}

impl Default for OrbitParameters {
    fn default() -> Self {
        Self {
            angular_velocity_primary: 0.2,
            escort_count: 5,
            escort_angular_velocity_perturbation: Perturbation::default(),
            radius_fraction: 0.45,
            vertical_squash: 0.2,
            center_x_fraction: 0.5,
            center_y_fraction: 0.15,
            escort_radius_ratio: 0.8,
            escort_squash_ratio: 0.6,
            primary_scale: 1.0,
            escort_scale: 0.55,
            hue_deg: 190.0,
            hue_drift_deg_per_sec: 0.0,
        }
    }
}

impl OrbitParameters {
    /// Angular spacing between neighbouring escorts: `2π / escort_count`.
    ///
    /// Zero when there are no escorts.
    #[must_use]
    pub fn escort_angular_offset_step(&self) -> f64 {
        match self.escorts() {
            0 => 0.0,
            n => TAU / f64::from(n),
        }
    }

    /// Escorts actually placed: `escort_count` capped at [`MAX_ESCORTS`].
    #[must_use]
    pub fn escorts(&self) -> u32 {
        self.escort_count.min(MAX_ESCORTS)
    }

    /// Orbit centre for `viewport`.
    #[must_use]
    pub fn center(&self, viewport: ViewportSize) -> (f64, f64) {
        (viewport.width * self.center_x_fraction, viewport.height * self.center_y_fraction)
    }

    /// Mothership orbit radius for `viewport`.
    #[must_use]
    pub fn radius(&self, viewport: ViewportSize) -> f64 {
        viewport.min_side() * self.radius_fraction
    }

    /// Shared hue at time `t`, wrapped into `[0, 360)`.
    #[must_use]
    pub fn hue_at(&self, t: f64) -> f64 {
        let hue = (self.hue_deg + t * self.hue_drift_deg_per_sec).rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs.
        if hue >= 360.0 || !hue.is_finite() { 0.0 } else { hue }
    }
}

/// Compute the fleet's positions at time `t` (seconds since the loop started).
///
/// A zero-sized viewport collapses every body onto the orbit centre. A
/// non-finite `t` is treated as `0`.
#[must_use]
pub fn positions_at(t: f64, params: &OrbitParameters, viewport: ViewportSize) -> Formation {
    let t = if t.is_finite() { t } else { 0.0 };
    let viewport = ViewportSize::new(viewport.width, viewport.height);

    let (cx, cy) = params.center(viewport);
    let radius = params.radius(viewport);
    let angle = t * params.angular_velocity_primary;
    let hue_deg = params.hue_at(t);

    let primary = Body {
        x: cx + radius * angle.cos(),
        y: cy + radius * params.vertical_squash * angle.sin(),
        scale: params.primary_scale,
        hue_deg,
    };

    let step = params.escort_angular_offset_step();
    let escort_radius = radius * params.escort_radius_ratio;
    let escort_squash = params.vertical_squash * params.escort_squash_ratio;
    let wobble = params.escort_angular_velocity_perturbation;

    let escorts = (0..params.escorts() as usize)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let slot = i as f64;
            let escort_angle = angle + slot * step + wobble.offset(t, i);
            Body {
                x: cx + escort_radius * escort_angle.cos(),
                y: cy + escort_radius * escort_squash * escort_angle.sin(),
                scale: params.escort_scale,
                hue_deg,
            }
        })
        .collect();

    Formation { primary, escorts }
}
