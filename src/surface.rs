//! Drawing primitive surface.
//!
//! [`DrawSurface`] is the narrow slice of a 2D raster context the overlay
//! needs. The browser implementation lives in [`crate::web`]; tests use a
//! recording fake. [`SavedState`] is the scoped transform acquisition used by
//! every ship routine: `save()` on creation, `restore()` on drop.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::ops::{Deref, DerefMut};

use crate::consts::OVERLAY_Z_INDEX;
use crate::error::OverlayError;
use crate::orbit::ViewportSize;

/// A 2D raster drawing target.
///
/// Coordinates are CSS pixels once [`DrawSurface::reset_transform`] has been
/// applied with the current pixel ratio.
pub trait DrawSurface {
    /// Resize the backing store to `size × pixel_ratio` device pixels.
    fn resize(&mut self, size: ViewportSize, pixel_ratio: f64);

    /// Backing store size in device pixels.
    fn backing_size(&self) -> (u32, u32);

    /// Replace the current transform with a uniform `pixel_ratio` scale.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the host rejects the transform.
    fn reset_transform(&mut self, pixel_ratio: f64) -> Result<(), OverlayError>;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn save(&mut self);

    fn restore(&mut self);

    /// # Errors
    ///
    /// Returns `Err` if the host rejects the transform.
    fn translate(&mut self, x: f64, y: f64) -> Result<(), OverlayError>;

    /// # Errors
    ///
    /// Returns `Err` if the host rejects the transform.
    fn scale(&mut self, x: f64, y: f64) -> Result<(), OverlayError>;

    fn set_shadow_blur(&mut self, blur: f64);

    fn set_shadow_color(&mut self, color: &str);

    fn set_fill_color(&mut self, color: &str);

    fn begin_path(&mut self);

    fn close_path(&mut self);

    /// Add an axis-aligned full ellipse centred at `(x, y)` to the current path.
    ///
    /// # Errors
    ///
    /// Returns `Err` for negative radii or a host failure.
    fn ellipse(&mut self, x: f64, y: f64, radius_x: f64, radius_y: f64) -> Result<(), OverlayError>;

    fn fill(&mut self);
}

/// Drawing state saved on creation and restored on drop.
///
/// Dereferences to the wrapped surface so drawing code reads naturally. The
/// restore runs on every exit path, including early returns through `?`.
pub struct SavedState<'a, S: DrawSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: DrawSurface + ?Sized> SavedState<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: DrawSurface + ?Sized> Deref for SavedState<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: DrawSurface + ?Sized> DerefMut for SavedState<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: DrawSurface + ?Sized> Drop for SavedState<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

/// How the overlay surface sits in its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceLayer {
    pub z_index: i32,
}

impl Default for SurfaceLayer {
    fn default() -> Self {
        Self { z_index: OVERLAY_Z_INDEX }
    }
}

impl SurfaceLayer {
    /// Inline style for a full-bleed surface that never intercepts pointer input.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "position:absolute;inset:0;width:100%;height:100%;display:block;pointer-events:none;z-index:{}",
            self.z_index
        )
    }
}

/// Convert a CSS extent to a device-pixel backing dimension.
#[must_use]
pub fn device_pixels(css: f64, pixel_ratio: f64) -> u32 {
    let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 { pixel_ratio } else { 1.0 };
    let scaled = (css * ratio).round();
    if !scaled.is_finite() || scaled <= 0.0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pixels = scaled.min(f64::from(u32::MAX)) as u32;
    pixels
}

/// Surface size and pixel ratio, written together on resize and read together
/// at the start of each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMetrics {
    pub size: ViewportSize,
    pub pixel_ratio: f64,
}

impl Default for SurfaceMetrics {
    fn default() -> Self {
        Self { size: ViewportSize::default(), pixel_ratio: 1.0 }
    }
}

impl SurfaceMetrics {
    #[must_use]
    pub fn new(size: ViewportSize, pixel_ratio: f64) -> Self {
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 { pixel_ratio } else { 1.0 };
        Self { size, pixel_ratio }
    }
}
