//! Frame driver: the persistent render loop.
//!
//! The driver is `Stopped` until [`FrameDriver::start`], then `Running` until
//! [`FrameDriver::stop`]. While running, exactly one frame callback is pending
//! with the host at any time. Every scheduled callback carries a
//! [`LoopToken`]; a tick whose token is no longer the live one returns
//! immediately, so a callback that fires after cancellation draws nothing.
//!
//! The driver never owns the surface. It borrows it from the lifecycle's slot
//! for the duration of one frame and skips drawing when the slot is empty.

#[cfg(test)]
#[path = "driver_test.rs"]
mod driver_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::consts::MS_PER_SECOND;
use crate::host::{FrameCallback, FrameScheduler};
use crate::orbit::{OrbitParameters, positions_at};
use crate::render;
use crate::surface::{DrawSurface, SurfaceMetrics};

/// Surface storage shared between the lifecycle (owner) and the driver (borrower).
pub type SurfaceSlot<S> = Rc<RefCell<Option<S>>>;

/// Metrics cell written by the resize path and read at the start of each tick.
pub type SharedMetrics = Rc<Cell<SurfaceMetrics>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Stopped,
    Running,
}

/// Identity of one scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopToken(u64);

struct LoopState<Handle> {
    state: DriverState,
    /// `false` for a single still frame.
    continuous: bool,
    /// Host timestamp of the first frame after the last start.
    start_ms: Option<f64>,
    next_token: u64,
    pending: Option<(LoopToken, Handle)>,
    frames_drawn: u64,
}

struct Inner<H: FrameScheduler, S> {
    scheduler: H,
    surface: SurfaceSlot<S>,
    metrics: SharedMetrics,
    params: OrbitParameters,
    loop_state: RefCell<LoopState<H::Handle>>,
}

pub struct FrameDriver<H: FrameScheduler, S: DrawSurface> {
    inner: Rc<Inner<H, S>>,
}

/// Non-owning reference to a driver, for host callbacks that must not keep it alive.
pub struct WeakFrameDriver<H: FrameScheduler, S: DrawSurface> {
    inner: Weak<Inner<H, S>>,
}

impl<H: FrameScheduler, S: DrawSurface> WeakFrameDriver<H, S> {
    #[must_use]
    pub fn upgrade(&self) -> Option<FrameDriver<H, S>> {
        self.inner.upgrade().map(|inner| FrameDriver { inner })
    }
}

impl<H, S> FrameDriver<H, S>
where
    H: FrameScheduler + 'static,
    S: DrawSurface + 'static,
{
    #[must_use]
    pub fn new(scheduler: H, surface: SurfaceSlot<S>, metrics: SharedMetrics, params: OrbitParameters) -> Self {
        let loop_state = LoopState {
            state: DriverState::Stopped,
            continuous: true,
            start_ms: None,
            next_token: 0,
            pending: None,
            frames_drawn: 0,
        };
        Self { inner: Rc::new(Inner { scheduler, surface, metrics, params, loop_state: RefCell::new(loop_state) }) }
    }

    /// Start the continuous loop with a fresh animation phase.
    ///
    /// No-op while already running.
    pub fn start(&self) {
        self.begin(true);
    }

    /// Render a single frame at `t = 0`, then return to `Stopped`.
    ///
    /// No-op while already running.
    pub fn start_still(&self) {
        self.begin(false);
    }

    fn begin(&self, continuous: bool) {
        {
            let mut st = self.inner.loop_state.borrow_mut();
            if st.state == DriverState::Running {
                return;
            }
            st.state = DriverState::Running;
            st.continuous = continuous;
            st.start_ms = None;
        }
        log::debug!("fleet: driver started (continuous: {continuous})");
        schedule_next(&self.inner);
    }
}

impl<H: FrameScheduler, S: DrawSurface> FrameDriver<H, S> {
    /// Cancel the pending frame, if any. Idempotent.
    pub fn stop(&self) {
        let pending = {
            let mut st = self.inner.loop_state.borrow_mut();
            if st.state == DriverState::Running {
                log::debug!("fleet: driver stopped after {} frames", st.frames_drawn);
            }
            st.state = DriverState::Stopped;
            st.start_ms = None;
            st.pending.take()
        };
        if let Some((_, handle)) = pending {
            self.inner.scheduler.cancel_frame(handle);
        }
    }

    #[must_use]
    pub fn state(&self) -> DriverState {
        self.inner.loop_state.borrow().state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state() == DriverState::Running
    }

    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        self.inner.loop_state.borrow().pending.is_some()
    }

    #[must_use]
    pub fn frames_drawn(&self) -> u64 {
        self.inner.loop_state.borrow().frames_drawn
    }

    #[must_use]
    pub fn downgrade(&self) -> WeakFrameDriver<H, S> {
        WeakFrameDriver { inner: Rc::downgrade(&self.inner) }
    }
}

fn schedule_next<H, S>(inner: &Rc<Inner<H, S>>)
where
    H: FrameScheduler + 'static,
    S: DrawSurface + 'static,
{
    let token = {
        let mut st = inner.loop_state.borrow_mut();
        let token = LoopToken(st.next_token);
        st.next_token += 1;
        token
    };

    let weak = Rc::downgrade(inner);
    let callback: FrameCallback = Box::new(move |timestamp_ms| {
        if let Some(inner) = weak.upgrade() {
            tick(&inner, token, timestamp_ms);
        }
    });

    match inner.scheduler.request_frame(callback) {
        Ok(handle) => inner.loop_state.borrow_mut().pending = Some((token, handle)),
        Err(err) => {
            log::warn!("fleet: frame request refused, stopping: {err}");
            inner.loop_state.borrow_mut().state = DriverState::Stopped;
        }
    }
}

fn tick<H, S>(inner: &Rc<Inner<H, S>>, token: LoopToken, timestamp_ms: f64)
where
    H: FrameScheduler + 'static,
    S: DrawSurface + 'static,
{
    let t = {
        let mut st = inner.loop_state.borrow_mut();
        let live = st.pending.map(|(live, _)| live);
        if st.state != DriverState::Running || live != Some(token) {
            return;
        }
        st.pending = None;
        let start_ms = *st.start_ms.get_or_insert(timestamp_ms);
        ((timestamp_ms - start_ms) / MS_PER_SECOND).max(0.0)
    };

    let painted = inner.draw_frame(t);

    let keep_going = {
        let mut st = inner.loop_state.borrow_mut();
        if painted {
            st.frames_drawn += 1;
        }
        if st.continuous && st.state == DriverState::Running {
            true
        } else {
            st.state = DriverState::Stopped;
            st.start_ms = None;
            false
        }
    };
    if keep_going {
        schedule_next(inner);
    }
}

impl<H: FrameScheduler, S: DrawSurface> Inner<H, S> {
    /// Paint one frame. Returns `false` when there was no surface to paint on.
    fn draw_frame(&self, t: f64) -> bool {
        let metrics = self.metrics.get();
        let Ok(mut slot) = self.surface.try_borrow_mut() else {
            log::warn!("fleet: surface busy, frame skipped");
            return false;
        };
        let Some(surface) = slot.as_mut() else {
            return false;
        };

        if let Err(err) = surface.reset_transform(metrics.pixel_ratio) {
            log::warn!("fleet: transform reset failed: {err}");
        }
        surface.clear_rect(0.0, 0.0, metrics.size.width, metrics.size.height);

        let formation = positions_at(t, &self.params, metrics.size);
        render::draw_primary(Some(&mut *surface), &formation.primary);
        for escort in &formation.escorts {
            render::draw_escort(Some(&mut *surface), escort);
        }
        true
    }
}
