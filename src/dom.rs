// Browser binding: forwards DOM input events on an element to a GestureTransformController.
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    AddEventListenerOptions, Event, EventTarget, HtmlElement, MouseEvent, TouchEvent, TouchList,
    WheelEvent,
};

use crate::config::{ZoomCallbacks, ZoomConfig};
use crate::controller::{GestureTransformController, MouseButton, Propagation};
use crate::error::PinchZoomError;
use crate::geometry::Point;

/// Dataset key read by [`PinchZoom::attach_from_dataset`] (`data-pinch-zoom` in markup).
pub const DATASET_KEY: &str = "pinchZoom";

type SharedController = Rc<RefCell<GestureTransformController<HtmlElement>>>;
type DragSlot = Rc<RefCell<Option<DragSubscription>>>;

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
    attached: bool,
}

impl Listener {
    // Non-passive so the handlers may call preventDefault on touch and wheel input.
    fn register(
        target: &EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, PinchZoomError> {
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref::<Function>(),
                &options,
            )
            .map_err(|err| PinchZoomError::Listener {
                event,
                message: format!("{err:?}"),
            })?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
            attached: true,
        })
    }

    fn remove(&mut self) {
        if self.attached {
            let _ = self.target.remove_event_listener_with_callback(
                self.event,
                self.callback.as_ref().unchecked_ref::<Function>(),
            );
            self.attached = false;
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.remove();
    }
}

// Document-level mousemove/mouseup listeners that exist only while this
// instance's mouse drag is active. Released listeners are removed from the
// document right away; the closures are freed when the slot is next reused,
// since a closure cannot be dropped while it is running.
struct DragSubscription {
    listeners: Vec<Listener>,
}

impl DragSubscription {
    fn is_live(&self) -> bool {
        self.listeners.iter().any(|l| l.attached)
    }

    fn release(&mut self) {
        for listener in &mut self.listeners {
            listener.remove();
        }
    }
}

/// Pinch/pan/wheel zoom attached to a DOM element.
///
/// Dropping the handle (or calling [`PinchZoom::destroy`]) removes every listener it
/// registered and restores the element's styles. Callbacks run while the
/// controller is borrowed and must not call back into the same handle.
pub struct PinchZoom {
    controller: SharedController,
    listeners: Vec<Listener>,
    drag: DragSlot,
}

impl PinchZoom {
    pub fn attach(
        element: HtmlElement,
        config: ZoomConfig,
        callbacks: ZoomCallbacks,
    ) -> Result<Self, PinchZoomError> {
        let document: EventTarget = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(PinchZoomError::NoDocument)?
            .into();
        let mut controller = GestureTransformController::new(config)?.with_callbacks(callbacks);
        controller.attach(element.clone());
        let controller: SharedController = Rc::new(RefCell::new(controller));
        let drag: DragSlot = Rc::new(RefCell::new(None));

        let target: &EventTarget = element.as_ref();
        let listeners = vec![
            Listener::register(target, "touchstart", touch_start_handler(&controller, &drag))?,
            Listener::register(target, "touchmove", touch_move_handler(&controller))?,
            Listener::register(target, "touchend", touch_end_handler(&controller))?,
            Listener::register(target, "touchcancel", touch_end_handler(&controller))?,
            Listener::register(target, "wheel", wheel_handler(&controller))?,
            Listener::register(
                target,
                "mousedown",
                mouse_down_handler(&controller, &drag, document),
            )?,
        ];
        log::debug!("pinch zoom attached");
        Ok(Self {
            controller,
            listeners,
            drag,
        })
    }

    /// Like [`PinchZoom::attach`], reading the configuration from the element's
    /// `data-pinch-zoom` JSON attribute (defaults when absent).
    pub fn attach_from_dataset(
        element: HtmlElement,
        callbacks: ZoomCallbacks,
    ) -> Result<Self, PinchZoomError> {
        let config = match element.dataset().get(DATASET_KEY) {
            Some(raw) => ZoomConfig::from_json(&raw)?,
            None => ZoomConfig::default(),
        };
        Self::attach(element, config, callbacks)
    }

    pub fn set_scale(&self, scale: f64) {
        self.controller.borrow_mut().set_scale(scale);
    }

    pub fn set_translate(&self, x: f64, y: f64) {
        self.controller.borrow_mut().set_translate(x, y);
    }

    pub fn reset(&self) {
        self.controller.borrow_mut().reset();
        release_drag(&Rc::downgrade(&self.drag));
    }

    pub fn scale(&self) -> f64 {
        self.controller.borrow().scale()
    }

    pub fn translate(&self) -> Point {
        self.controller.borrow().translate()
    }

    pub fn transform_css(&self) -> String {
        self.controller.borrow().transform_css()
    }

    pub fn destroy(self) {
        drop(self);
    }

    fn teardown(&mut self) {
        self.listeners.clear();
        if let Ok(mut slot) = self.drag.try_borrow_mut() {
            slot.take();
        }
        if let Ok(mut controller) = self.controller.try_borrow_mut() {
            controller.detach();
        }
    }
}

impl Drop for PinchZoom {
    fn drop(&mut self) {
        self.teardown();
        log::debug!("pinch zoom destroyed");
    }
}

impl std::fmt::Debug for PinchZoom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinchZoom")
            .field("listeners", &self.listeners.len())
            .field("dragging", &self.drag.borrow().as_ref().is_some_and(DragSubscription::is_live))
            .finish()
    }
}

fn touch_points(list: &TouchList) -> Vec<Point> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())))
        .collect()
}

fn client_point(e: &MouseEvent) -> Point {
    Point::new(f64::from(e.client_x()), f64::from(e.client_y()))
}

fn finish(event: &Event, propagation: Propagation) {
    if propagation == Propagation::Suppress {
        event.prevent_default();
    }
}

fn touch_start_handler(controller: &SharedController, drag: &DragSlot) -> Closure<dyn FnMut(Event)> {
    let controller = controller.clone();
    let drag = Rc::downgrade(drag);
    Closure::wrap(Box::new(move |event: Event| {
        let e = event.unchecked_ref::<TouchEvent>();
        let (propagation, mouse_dragging) = {
            let mut c = controller.borrow_mut();
            let propagation = c.handle_touch_start(&touch_points(&e.touches()));
            (propagation, c.is_mouse_dragging())
        };
        // A pinch ends any mouse drag, so its document listeners go too.
        if !mouse_dragging {
            release_drag(&drag);
        }
        finish(&event, propagation);
    }) as Box<dyn FnMut(Event)>)
}

fn touch_move_handler(controller: &SharedController) -> Closure<dyn FnMut(Event)> {
    let controller = controller.clone();
    Closure::wrap(Box::new(move |event: Event| {
        let e = event.unchecked_ref::<TouchEvent>();
        let propagation = controller
            .borrow_mut()
            .handle_touch_move(&touch_points(&e.touches()));
        finish(&event, propagation);
    }) as Box<dyn FnMut(Event)>)
}

fn touch_end_handler(controller: &SharedController) -> Closure<dyn FnMut(Event)> {
    let controller = controller.clone();
    Closure::wrap(Box::new(move |event: Event| {
        let e = event.unchecked_ref::<TouchEvent>();
        let propagation = controller
            .borrow_mut()
            .handle_touch_end(&touch_points(&e.touches()));
        finish(&event, propagation);
    }) as Box<dyn FnMut(Event)>)
}

fn wheel_handler(controller: &SharedController) -> Closure<dyn FnMut(Event)> {
    let controller = controller.clone();
    Closure::wrap(Box::new(move |event: Event| {
        let e = event.unchecked_ref::<WheelEvent>();
        let propagation = controller
            .borrow_mut()
            .handle_wheel(e.delta_y(), client_point(e));
        finish(&event, propagation);
    }) as Box<dyn FnMut(Event)>)
}

fn mouse_down_handler(
    controller: &SharedController,
    drag: &DragSlot,
    document: EventTarget,
) -> Closure<dyn FnMut(Event)> {
    let controller = controller.clone();
    let drag = drag.clone();
    Closure::wrap(Box::new(move |event: Event| {
        let e = event.unchecked_ref::<MouseEvent>();
        let (propagation, started) = {
            let mut c = controller.borrow_mut();
            let propagation = c.handle_mouse_down(MouseButton::from(e.button()), client_point(e));
            (propagation, c.is_mouse_dragging())
        };
        if started {
            if let Err(err) = subscribe_drag(&document, &controller, &drag) {
                log::warn!("drag continuation unavailable: {err}");
            }
        }
        finish(&event, propagation);
    }) as Box<dyn FnMut(Event)>)
}

fn subscribe_drag(
    document: &EventTarget,
    controller: &SharedController,
    slot: &DragSlot,
) -> Result<(), PinchZoomError> {
    if slot.borrow().as_ref().is_some_and(DragSubscription::is_live) {
        return Ok(());
    }
    let on_move = {
        let controller = controller.clone();
        let slot = Rc::downgrade(slot);
        Closure::wrap(Box::new(move |event: Event| {
            let e = event.unchecked_ref::<MouseEvent>();
            let still_dragging = {
                let mut c = controller.borrow_mut();
                c.handle_mouse_move(client_point(e));
                c.is_mouse_dragging()
            };
            if !still_dragging {
                release_drag(&slot);
            }
        }) as Box<dyn FnMut(Event)>)
    };
    let on_up = {
        let controller = controller.clone();
        let slot = Rc::downgrade(slot);
        Closure::wrap(Box::new(move |_event: Event| {
            controller.borrow_mut().handle_mouse_up();
            release_drag(&slot);
        }) as Box<dyn FnMut(Event)>)
    };
    let subscription = DragSubscription {
        listeners: vec![
            Listener::register(document, "mousemove", on_move)?,
            Listener::register(document, "mouseup", on_up)?,
        ],
    };
    *slot.borrow_mut() = Some(subscription);
    Ok(())
}

fn release_drag(slot: &Weak<RefCell<Option<DragSubscription>>>) {
    if let Some(slot) = slot.upgrade() {
        if let Some(subscription) = slot.borrow_mut().as_mut() {
            subscription.release();
        }
    }
}
