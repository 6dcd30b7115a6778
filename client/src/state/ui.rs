//! Presentation state for the Mission Control page.
//!
//! DESIGN
//! ======
//! Kept separate from the overlay so the overlay's lifecycle is driven by
//! plain data: flip `fleet_visible` and the mount component attaches or
//! detaches.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use fleet::config::MotionMode;

/// UI state shared through Leptos context as `RwSignal<UiState>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    /// Whether the fleet overlay is mounted.
    pub fleet_visible: bool,
    /// The user asked the system for reduced motion.
    pub reduced_motion: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { fleet_visible: true, reduced_motion: false }
    }
}

impl UiState {
    /// Initial state for a user with the given motion preference.
    pub fn with_reduced_motion(reduced_motion: bool) -> Self {
        Self { reduced_motion, ..Self::default() }
    }

    /// Flip overlay visibility, returning the new value.
    pub fn toggle_fleet(&mut self) -> bool {
        self.fleet_visible = !self.fleet_visible;
        self.fleet_visible
    }

    /// Motion mode the overlay should run in.
    pub fn motion(&self) -> MotionMode {
        if self.reduced_motion { MotionMode::Still } else { MotionMode::Animate }
    }

    /// Label for the visibility toggle.
    pub fn toggle_label(&self) -> &'static str {
        if self.fleet_visible { "Hide fleet" } else { "Show fleet" }
    }
}
