//! Browser environment helpers.

pub mod reduced_motion;
