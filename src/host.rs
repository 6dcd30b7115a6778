//! Host environment abstractions.
//!
//! The overlay needs three things from its runtime: a paint-synchronized
//! frame callback ([`FrameScheduler`]), a container it can measure and attach
//! a surface to ([`OverlayContainer`]), and a resize signal for that container
//! ([`OverlayContainer::observe_resize`]). The browser implementations live in
//! [`crate::web`].

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use std::fmt;

use crate::error::OverlayError;
use crate::orbit::ViewportSize;
use crate::surface::{DrawSurface, SurfaceLayer};

/// Frame callback. The argument is the host's monotonic timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Paint-synchronized scheduling, one callback per display refresh.
///
/// Implementations must never run a callback synchronously from inside
/// [`FrameScheduler::request_frame`].
pub trait FrameScheduler {
    type Handle: Copy + Eq + fmt::Debug + 'static;

    /// Schedule `callback` for the next paint.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the host refuses to schedule a frame.
    fn request_frame(&self, callback: FrameCallback) -> Result<Self::Handle, OverlayError>;

    /// Cancel a pending callback. Unknown or already-fired handles are ignored.
    fn cancel_frame(&self, handle: Self::Handle);
}

/// The element an overlay is mounted into.
pub trait OverlayContainer {
    type Surface: DrawSurface + 'static;

    /// Current padding-box size in CSS pixels.
    fn measure(&self) -> ViewportSize;

    /// Device pixels per CSS pixel.
    fn pixel_ratio(&self) -> f64 {
        1.0
    }

    /// Create a detached drawing surface styled for `layer`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the surface or its 2D context cannot be created.
    fn create_surface(&self, layer: SurfaceLayer) -> Result<Self::Surface, OverlayError>;

    /// Insert `surface` into the container.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the host rejects the insertion.
    fn append_surface(&self, surface: &Self::Surface) -> Result<(), OverlayError>;

    /// Remove `surface` from the container if it is still attached.
    fn remove_surface(&self, surface: &Self::Surface);

    /// Invoke `callback` whenever the container's size may have changed.
    ///
    /// # Errors
    ///
    /// Returns `Err` if no resize signal can be registered.
    fn observe_resize(&self, callback: Box<dyn FnMut()>) -> Result<Subscription, OverlayError>;
}

/// Registration for a host callback; unsubscribes exactly once, on
/// [`Subscription::unsubscribe`] or drop.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    pub fn unsubscribe(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}
