use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn fleet_visible_by_default() {
    let state = UiState::default();
    assert!(state.fleet_visible);
    assert!(!state.reduced_motion);
}

#[test]
fn default_motion_animates() {
    assert_eq!(UiState::default().motion(), MotionMode::Animate);
}

// =============================================================
// Reduced motion
// =============================================================

#[test]
fn reduced_motion_selects_still_mode() {
    let state = UiState::with_reduced_motion(true);
    assert_eq!(state.motion(), MotionMode::Still);
    assert!(state.fleet_visible);
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_flips_visibility_and_label() {
    let mut state = UiState::default();
    assert_eq!(state.toggle_label(), "Hide fleet");
    assert!(!state.toggle_fleet());
    assert_eq!(state.toggle_label(), "Show fleet");
    assert!(state.toggle_fleet());
    assert!(state.fleet_visible);
}

#[test]
fn toggle_keeps_motion_preference() {
    let mut state = UiState::with_reduced_motion(true);
    state.toggle_fleet();
    assert!(state.reduced_motion);
}
