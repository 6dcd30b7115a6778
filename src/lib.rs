//! Orbiting-fleet overlay for the Mission Control portfolio site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It paints a
//! mothership and its escort ships circling above the page content on a
//! full-bleed, pointer-transparent canvas. The host UI only decides *when* an
//! overlay exists: it calls [`lifecycle::attach`] (or
//! [`web::attach_to_element`]) on mount and drops or detaches the returned
//! [`lifecycle::OverlayHandle`] on unmount. Everything after that is
//! imperative and never touches the component tree.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`orbit`] | Pure orbit model: bodies at time `t` for a viewport |
//! | [`render`] | Ship glyph drawing routines |
//! | [`driver`] | Per-frame render loop bound to the host paint cycle |
//! | [`lifecycle`] | Surface creation, resize tracking and teardown |
//! | [`surface`] | Drawing primitive trait and scoped save/restore |
//! | [`host`] | Host timing and container abstractions |
//! | [`web`] | `web-sys` implementations of the host traits |
//! | [`config`] | Overlay configuration and validation |
//! | [`consts`] | Shared numeric constants (geometry, glow, z-order) |
//! | [`error`] | Crate error type |

pub mod config;
pub mod consts;
pub mod driver;
pub mod error;
pub mod host;
pub mod lifecycle;
pub mod orbit;
pub mod render;
pub mod surface;
pub mod web;

#[cfg(test)]
#[path = "fakes_test.rs"]
pub(crate) mod fakes;
