//! Browser implementations of the host traits.
//!
//! This module is the only place that touches `web_sys`. It is compiled on
//! every target but only callable inside a browser; native tests exercise
//! the same logic through the fakes.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement, ResizeObserver, Window};

use crate::config::{OverlayConfig, config_from_attribute};
use crate::consts::TAU;
use crate::error::OverlayError;
use crate::host::{FrameCallback, FrameScheduler, OverlayContainer, Subscription};
use crate::lifecycle::{self, OverlayHandle};
use crate::orbit::ViewportSize;
use crate::surface::{DrawSurface, SurfaceLayer, device_pixels};

/// Attribute on the host container holding an optional JSON config override.
pub const CONFIG_ATTRIBUTE: &str = "data-fleet";

/// Overlay mounted into a DOM element and driven by `requestAnimationFrame`.
pub type WebOverlay = OverlayHandle<ElementContainer, AnimationFrameScheduler>;

/// Mount an overlay into `element`.
///
/// Returns an inert handle outside a browser or when `element` is `None`.
pub fn attach_to_element(element: Option<HtmlElement>, config: &OverlayConfig) -> WebOverlay {
    let Some(window) = web_sys::window() else {
        log::warn!("fleet: no window, overlay disabled");
        return OverlayHandle::inert();
    };
    let container = match element.map(|element| ElementContainer::new(element, &window)) {
        Some(Ok(container)) => Some(container),
        Some(Err(err)) => {
            log::warn!("fleet: {err}");
            None
        }
        None => None,
    };
    lifecycle::attach(container, AnimationFrameScheduler::new(window), config)
}

/// Overlay config for `element`, honouring its `data-fleet` override.
#[must_use]
pub fn config_from_element(element: &Element) -> OverlayConfig {
    config_from_attribute(element.get_attribute(CONFIG_ATTRIBUTE).as_deref())
}

// =============================================================
// Surface
// =============================================================

/// A `<canvas>` element and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl DrawSurface for CanvasSurface {
    fn resize(&mut self, size: ViewportSize, pixel_ratio: f64) {
        self.canvas.set_width(device_pixels(size.width, pixel_ratio));
        self.canvas.set_height(device_pixels(size.height, pixel_ratio));
    }

    fn backing_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn reset_transform(&mut self, pixel_ratio: f64) -> Result<(), OverlayError> {
        self.ctx.set_transform(pixel_ratio, 0.0, 0.0, pixel_ratio, 0.0, 0.0)?;
        Ok(())
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), OverlayError> {
        self.ctx.translate(x, y)?;
        Ok(())
    }

    fn scale(&mut self, x: f64, y: f64) -> Result<(), OverlayError> {
        self.ctx.scale(x, y)?;
        Ok(())
    }

    fn set_shadow_blur(&mut self, blur: f64) {
        self.ctx.set_shadow_blur(blur);
    }

    fn set_shadow_color(&mut self, color: &str) {
        self.ctx.set_shadow_color(color);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn ellipse(&mut self, x: f64, y: f64, radius_x: f64, radius_y: f64) -> Result<(), OverlayError> {
        self.ctx.ellipse(x, y, radius_x, radius_y, 0.0, 0.0, TAU)?;
        Ok(())
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }
}

// =============================================================
// Container
// =============================================================

/// A DOM element hosting the overlay canvas.
///
/// The canvas is absolutely positioned with `inset: 0`, so it covers the
/// element's padding box; the element itself must be a positioned box.
pub struct ElementContainer {
    element: HtmlElement,
    window: Window,
    document: Document,
}

impl ElementContainer {
    /// # Errors
    ///
    /// Returns `ContainerUnavailable` when the window has no document.
    pub fn new(element: HtmlElement, window: &Window) -> Result<Self, OverlayError> {
        let document = window.document().ok_or(OverlayError::ContainerUnavailable)?;
        Ok(Self { element, window: window.clone(), document })
    }
}

impl OverlayContainer for ElementContainer {
    type Surface = CanvasSurface;

    fn measure(&self) -> ViewportSize {
        ViewportSize::new(f64::from(self.element.client_width()), f64::from(self.element.client_height()))
    }

    fn pixel_ratio(&self) -> f64 {
        self.window.device_pixel_ratio()
    }

    fn create_surface(&self, layer: SurfaceLayer) -> Result<CanvasSurface, OverlayError> {
        let canvas = self
            .document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| OverlayError::Host("created element is not a canvas".into()))?;
        canvas.set_attribute("style", &layer.css())?;
        canvas.set_attribute("aria-hidden", "true")?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or(OverlayError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| OverlayError::ContextUnavailable)?;
        Ok(CanvasSurface { canvas, ctx })
    }

    fn append_surface(&self, surface: &CanvasSurface) -> Result<(), OverlayError> {
        self.element.append_child(&surface.canvas)?;
        Ok(())
    }

    fn remove_surface(&self, surface: &CanvasSurface) {
        if surface.canvas.parent_node().is_some() {
            surface.canvas.remove();
        }
    }

    fn observe_resize(&self, callback: Box<dyn FnMut()>) -> Result<Subscription, OverlayError> {
        let closure = Closure::wrap(callback);
        match ResizeObserver::new(closure.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&self.element);
                Ok(Subscription::new(move || {
                    observer.disconnect();
                    drop(closure);
                }))
            }
            Err(err) => {
                log::debug!("fleet: ResizeObserver unavailable ({err:?}), falling back to window resize");
                let window = self.window.clone();
                window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
                Ok(Subscription::new(move || {
                    if let Err(err) =
                        window.remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                    {
                        log::warn!("fleet: failed to remove resize listener: {err:?}");
                    }
                }))
            }
        }
    }
}

// =============================================================
// Scheduler
// =============================================================

/// `requestAnimationFrame` / `cancelAnimationFrame`.
///
/// Each pending callback's closure is kept alive in `pending` until it fires
/// or is cancelled.
pub struct AnimationFrameScheduler {
    window: Window,
    pending: Rc<RefCell<HashMap<i32, Closure<dyn FnMut(f64)>>>>,
}

impl AnimationFrameScheduler {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window, pending: Rc::new(RefCell::new(HashMap::new())) }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    type Handle = i32;

    fn request_frame(&self, callback: FrameCallback) -> Result<i32, OverlayError> {
        let id_slot: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let id_for_cb = Rc::clone(&id_slot);
        let pending = Rc::clone(&self.pending);
        let mut callback = Some(callback);

        let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            // Hold our own closure until the frame body returns.
            let this = id_for_cb.get().and_then(|id| pending.borrow_mut().remove(&id));
            if let Some(callback) = callback.take() {
                callback(timestamp_ms);
            }
            drop(this);
        }) as Box<dyn FnMut(f64)>);

        let id = self.window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        id_slot.set(Some(id));
        self.pending.borrow_mut().insert(id, closure);
        Ok(id)
    }

    fn cancel_frame(&self, handle: i32) {
        if let Err(err) = self.window.cancel_animation_frame(handle) {
            log::warn!("fleet: cancelAnimationFrame failed: {err:?}");
        }
        self.pending.borrow_mut().remove(&handle);
    }
}
