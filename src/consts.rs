//! Shared numeric constants for the fleet overlay.

// ── Math ────────────────────────────────────────────────────────

/// One full turn in radians.
pub const TAU: f64 = std::f64::consts::TAU;

// ── Layering ────────────────────────────────────────────────────

/// Default stacking order of the overlay surface: above the globe and page
/// background, below HUD panels and dialogs.
pub const OVERLAY_Z_INDEX: i32 = 5;

// ── Fleet ───────────────────────────────────────────────────────

/// Upper bound on escorts; larger configs are rejected.
pub const MAX_ESCORTS: u32 = 64;

// ── Ship geometry (local unit coordinates, before body scale) ───

/// Half-width of the mothership hull ellipse.
pub const HULL_RADIUS_X: f64 = 28.0;

/// Half-height of the mothership hull ellipse.
pub const HULL_RADIUS_Y: f64 = 8.0;

/// Half-width of the dome ellipse.
pub const DOME_RADIUS_X: f64 = 11.0;

/// Half-height of the dome ellipse.
pub const DOME_RADIUS_Y: f64 = 7.0;

/// Upward offset of the dome centre from the hull centre.
pub const DOME_OFFSET_Y: f64 = 6.0;

/// Number of lights along the hull's lower edge.
pub const LIGHT_COUNT: usize = 5;

/// Horizontal span covered by the light row, end light to end light.
pub const LIGHT_SPAN_X: f64 = 36.0;

/// Downward offset of the light row from the hull centre.
pub const LIGHT_OFFSET_Y: f64 = 3.5;

/// Radius of a single hull light.
pub const LIGHT_RADIUS: f64 = 1.6;

/// Half-width of an escort hull ellipse.
pub const ESCORT_RADIUS_X: f64 = 16.0;

/// Half-height of an escort hull ellipse.
pub const ESCORT_RADIUS_Y: f64 = 5.0;

// ── Glow ────────────────────────────────────────────────────────

/// Shadow blur for the hull halo, in surface pixels.
pub const GLOW_BLUR: f64 = 18.0;

/// Shadow blur for hull lights.
pub const LIGHT_GLOW_BLUR: f64 = 6.0;

// ── Time ────────────────────────────────────────────────────────

/// Host frame timestamps are milliseconds; orbit time is seconds.
pub const MS_PER_SECOND: f64 = 1000.0;
