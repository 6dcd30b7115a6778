//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write `UiState` from Leptos context. Only
//! `fleet_overlay` talks to the `fleet` crate.

pub mod fleet_overlay;
pub mod fleet_toggle;
