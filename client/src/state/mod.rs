//! Client-side reactive state.

pub mod ui;
