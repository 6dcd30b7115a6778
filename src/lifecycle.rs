//! Surface lifecycle: attach an overlay to a container and tear it down.
//!
//! [`attach`] creates the surface, sizes it to the container, inserts it,
//! subscribes to container resizes and starts the [`FrameDriver`]. The
//! returned [`OverlayHandle`] owns all of that for one container. Releasing
//! it (explicitly via [`OverlayHandle::detach`] or implicitly on drop) stops
//! the loop, drops the resize subscription and removes the surface.
//!
//! Setup never fails loudly. A missing container or a host refusal yields an
//! inert handle that does nothing and is safe to detach any number of times.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::config::{MotionMode, OverlayConfig};
use crate::driver::{DriverState, FrameDriver, SharedMetrics, SurfaceSlot, WeakFrameDriver};
use crate::error::OverlayError;
use crate::host::{FrameScheduler, OverlayContainer, Subscription};
use crate::surface::{DrawSurface, SurfaceMetrics};

/// Owner of one mounted overlay. Inert when setup did not complete.
pub struct OverlayHandle<C: OverlayContainer, H: FrameScheduler> {
    attached: Option<Attached<C, H>>,
}

struct Attached<C: OverlayContainer, H: FrameScheduler> {
    container: Rc<C>,
    surface: SurfaceSlot<C::Surface>,
    metrics: SharedMetrics,
    driver: FrameDriver<H, C::Surface>,
    resize: Option<Subscription>,
}

/// Mount an overlay into `container` and start animating.
///
/// Returns an inert handle when `container` is `None` or the host refuses to
/// create or insert the surface.
pub fn attach<C, H>(container: Option<C>, scheduler: H, config: &OverlayConfig) -> OverlayHandle<C, H>
where
    C: OverlayContainer + 'static,
    H: FrameScheduler + 'static,
{
    let Some(container) = container else {
        log::debug!("fleet: no container, overlay disabled");
        return OverlayHandle::inert();
    };
    match try_attach(Rc::new(container), scheduler, config) {
        Ok(attached) => OverlayHandle { attached: Some(attached) },
        Err(err) => {
            log::warn!("fleet: overlay setup skipped: {err}");
            OverlayHandle::inert()
        }
    }
}

/// Release an overlay. Same as [`OverlayHandle::detach`].
pub fn detach<C: OverlayContainer, H: FrameScheduler>(handle: &mut OverlayHandle<C, H>) {
    handle.detach();
}

fn try_attach<C, H>(container: Rc<C>, scheduler: H, config: &OverlayConfig) -> Result<Attached<C, H>, OverlayError>
where
    C: OverlayContainer + 'static,
    H: FrameScheduler + 'static,
{
    let initial = SurfaceMetrics::new(container.measure(), container.pixel_ratio());
    let mut surface = container.create_surface(config.layer())?;
    surface.resize(initial.size, initial.pixel_ratio);
    container.append_surface(&surface)?;

    let surface: SurfaceSlot<C::Surface> = Rc::new(RefCell::new(Some(surface)));
    let metrics: SharedMetrics = Rc::new(Cell::new(initial));
    let driver = FrameDriver::new(scheduler, Rc::clone(&surface), Rc::clone(&metrics), config.orbit.clone());

    let on_resize = ResizeSync {
        container: Rc::downgrade(&container),
        surface: Rc::downgrade(&surface),
        metrics: Rc::downgrade(&metrics),
        driver: driver.downgrade(),
        motion: config.motion,
    };
    let resize = match container.observe_resize(Box::new(move || on_resize.sync())) {
        Ok(subscription) => Some(subscription),
        Err(err) => {
            log::warn!("fleet: resize tracking unavailable: {err}");
            None
        }
    };

    match config.motion {
        MotionMode::Animate => driver.start(),
        MotionMode::Still => driver.start_still(),
    }
    log::debug!(
        "fleet: overlay attached at {}x{} css px (ratio {})",
        initial.size.width,
        initial.size.height,
        initial.pixel_ratio
    );

    Ok(Attached { container, surface, metrics, driver, resize })
}

/// Resize listener state. Holds only weak references so a listener that
/// outlives its overlay does nothing.
struct ResizeSync<C: OverlayContainer, H: FrameScheduler> {
    container: Weak<C>,
    surface: Weak<RefCell<Option<C::Surface>>>,
    metrics: Weak<Cell<SurfaceMetrics>>,
    driver: WeakFrameDriver<H, C::Surface>,
    motion: MotionMode,
}

impl<C, H> ResizeSync<C, H>
where
    C: OverlayContainer + 'static,
    H: FrameScheduler + 'static,
{
    fn sync(&self) {
        let (Some(container), Some(metrics)) = (self.container.upgrade(), self.metrics.upgrade()) else {
            return;
        };
        let next = SurfaceMetrics::new(container.measure(), container.pixel_ratio());
        if next == metrics.get() {
            return;
        }
        metrics.set(next);

        if let Some(cell) = self.surface.upgrade()
            && let Ok(mut slot) = cell.try_borrow_mut()
            && let Some(surface) = slot.as_mut()
        {
            surface.resize(next.size, next.pixel_ratio);
        }
        log::debug!("fleet: resized to {}x{} css px", next.size.width, next.size.height);

        // Resizing clears the surface; a still overlay has no next frame to repaint it.
        if self.motion == MotionMode::Still
            && let Some(driver) = self.driver.upgrade()
        {
            driver.start_still();
        }
    }
}

impl<C: OverlayContainer, H: FrameScheduler> OverlayHandle<C, H> {
    /// A handle that owns nothing.
    #[must_use]
    pub fn inert() -> Self {
        Self { attached: None }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.attached.is_some()
    }

    /// Latest measured surface metrics.
    #[must_use]
    pub fn metrics(&self) -> Option<SurfaceMetrics> {
        self.attached.as_ref().map(|a| a.metrics.get())
    }

    /// Backing store size of the live surface in device pixels.
    #[must_use]
    pub fn backing_size(&self) -> Option<(u32, u32)> {
        let attached = self.attached.as_ref()?;
        let Ok(slot) = attached.surface.try_borrow() else {
            return None;
        };
        slot.as_ref().map(DrawSurface::backing_size)
    }

    /// Stop the loop, drop the resize listener and remove the surface.
    ///
    /// Safe to call repeatedly and on an inert handle.
    pub fn detach(&mut self) {
        let Some(mut attached) = self.attached.take() else {
            return;
        };
        attached.driver.stop();
        if let Some(mut subscription) = attached.resize.take() {
            subscription.unsubscribe();
        }

        let surface = match attached.surface.try_borrow_mut() {
            Ok(mut slot) => slot.take(),
            Err(err) => {
                log::warn!("fleet: surface busy during detach: {err}");
                None
            }
        };
        if let Some(surface) = surface {
            attached.container.remove_surface(&surface);
        }
        log::debug!("fleet: overlay detached after {} frames", attached.driver.frames_drawn());
    }

    #[must_use]
    pub fn driver_state(&self) -> DriverState {
        self.attached.as_ref().map_or(DriverState::Stopped, |a| a.driver.state())
    }

    #[must_use]
    pub fn frames_drawn(&self) -> u64 {
        self.attached.as_ref().map_or(0, |a| a.driver.frames_drawn())
    }
}

impl<C: OverlayContainer, H: FrameScheduler> Drop for OverlayHandle<C, H> {
    fn drop(&mut self) {
        self.detach();
    }
}
