//! Ship glyph rendering.
//!
//! Each routine translates to the body's position, applies its scale, draws in
//! local unit coordinates and restores the previous drawing state. Drawing
//! failures are logged and swallowed; a missing surface is a no-op.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{
    DOME_OFFSET_Y, DOME_RADIUS_X, DOME_RADIUS_Y, ESCORT_RADIUS_X, ESCORT_RADIUS_Y, GLOW_BLUR, HULL_RADIUS_X,
    HULL_RADIUS_Y, LIGHT_COUNT, LIGHT_GLOW_BLUR, LIGHT_OFFSET_Y, LIGHT_RADIUS, LIGHT_SPAN_X,
};
use crate::error::OverlayError;
use crate::orbit::Body;
use crate::surface::{DrawSurface, SavedState};

/// Draw the mothership: halo, hull, dome and the light row.
pub fn draw_primary<S: DrawSurface + ?Sized>(surface: Option<&mut S>, body: &Body) {
    let Some(surface) = surface else {
        return;
    };
    let mut ctx = SavedState::new(surface);
    if let Err(err) = paint_primary(&mut *ctx, body) {
        log::warn!("fleet: mothership draw failed: {err}");
    }
}

/// Draw an escort: halo and a single small hull.
pub fn draw_escort<S: DrawSurface + ?Sized>(surface: Option<&mut S>, body: &Body) {
    let Some(surface) = surface else {
        return;
    };
    let mut ctx = SavedState::new(surface);
    if let Err(err) = paint_escort(&mut *ctx, body) {
        log::warn!("fleet: escort draw failed: {err}");
    }
}

fn paint_primary<S: DrawSurface + ?Sized>(ctx: &mut S, body: &Body) -> Result<(), OverlayError> {
    place(ctx, body)?;

    // Hull with halo.
    ctx.set_shadow_blur(GLOW_BLUR);
    ctx.set_shadow_color(&hsla(body.hue_deg, 100.0, 65.0, 0.85));
    ctx.set_fill_color(&hsla(body.hue_deg, 45.0, 38.0, 0.95));
    fill_ellipse(ctx, 0.0, 0.0, HULL_RADIUS_X, HULL_RADIUS_Y)?;

    // Dome sits on top of the hull.
    ctx.set_fill_color(&hsla(body.hue_deg, 85.0, 72.0, 0.8));
    fill_ellipse(ctx, 0.0, -DOME_OFFSET_Y, DOME_RADIUS_X, DOME_RADIUS_Y)?;

    ctx.set_shadow_blur(LIGHT_GLOW_BLUR);
    ctx.set_fill_color(&hsla(body.hue_deg + 30.0, 100.0, 80.0, 1.0));
    for x in light_positions() {
        fill_ellipse(ctx, x, LIGHT_OFFSET_Y, LIGHT_RADIUS, LIGHT_RADIUS)?;
    }
    Ok(())
}

fn paint_escort<S: DrawSurface + ?Sized>(ctx: &mut S, body: &Body) -> Result<(), OverlayError> {
    place(ctx, body)?;

    ctx.set_shadow_blur(GLOW_BLUR);
    ctx.set_shadow_color(&hsla(body.hue_deg, 100.0, 65.0, 0.7));
    ctx.set_fill_color(&hsla(body.hue_deg, 40.0, 48.0, 0.9));
    fill_ellipse(ctx, 0.0, 0.0, ESCORT_RADIUS_X, ESCORT_RADIUS_Y)
}

fn place<S: DrawSurface + ?Sized>(ctx: &mut S, body: &Body) -> Result<(), OverlayError> {
    ctx.translate(body.x, body.y)?;
    ctx.scale(body.scale, body.scale)
}

fn fill_ellipse<S: DrawSurface + ?Sized>(
    ctx: &mut S,
    x: f64,
    y: f64,
    radius_x: f64,
    radius_y: f64,
) -> Result<(), OverlayError> {
    ctx.begin_path();
    ctx.ellipse(x, y, radius_x, radius_y)?;
    ctx.close_path();
    ctx.fill();
    Ok(())
}

/// X offsets of the hull lights, evenly spaced and symmetric about the centre.
fn light_positions() -> impl Iterator<Item = f64> {
    #[allow(clippy::cast_precision_loss)]
    let gaps = LIGHT_COUNT.saturating_sub(1).max(1) as f64;
    let start = if LIGHT_COUNT > 1 { -LIGHT_SPAN_X / 2.0 } else { 0.0 };
    (0..LIGHT_COUNT).map(move |i| {
        #[allow(clippy::cast_precision_loss)]
        let step = i as f64;
        start + step * LIGHT_SPAN_X / gaps
    })
}

/// CSS `hsla()` string; hue wraps into `[0, 360)`.
fn hsla(hue_deg: f64, saturation_pct: f64, lightness_pct: f64, alpha: f64) -> String {
    let hue = hue_deg.rem_euclid(360.0);
    format!("hsla({hue:.1}, {saturation_pct:.0}%, {lightness_pct:.0}%, {alpha:.2})")
}
