//! Gesture recognition and transform bookkeeping.
//!
//! [`GestureTransformController`] is headless: it is fed plain input records
//! in viewport coordinates and writes the resulting transform to whatever
//! [`Surface`] it is attached to. `dom::PinchZoom` wires it to browser events.

use crate::config::{ZoomCallbacks, ZoomConfig};
use crate::error::ConfigError;
use crate::geometry::{Point, two_finger_geometry};
use crate::state::{GestureState, PointerKind, TransformState};
use crate::surface::{self, Surface};

pub const WHEEL_ZOOM_IN: f64 = 1.1;
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

const CURSOR_IDLE: &str = "grab";
const CURSOR_DRAGGING: &str = "grabbing";

/// Whether the host should let the browser run its default action for the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Allow,
    Suppress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Other(i16),
}

impl From<i16> for MouseButton {
    fn from(button: i16) -> Self {
        match button {
            0 => MouseButton::Primary,
            other => MouseButton::Other(other),
        }
    }
}

#[derive(Debug)]
pub struct GestureTransformController<S> {
    config: ZoomConfig,
    callbacks: ZoomCallbacks,
    transform: TransformState,
    gesture: GestureState,
    surface: Option<S>,
}

impl<S: Surface> GestureTransformController<S> {
    pub fn new(config: ZoomConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let scale = config.clamp(config.initial_scale);
        if scale != config.initial_scale {
            log::debug!(
                "initial scale {} clamped to {scale}",
                config.initial_scale
            );
        }
        Ok(Self {
            config,
            callbacks: ZoomCallbacks::default(),
            transform: TransformState::with_scale(scale),
            gesture: GestureState::Idle,
            surface: None,
        })
    }

    pub fn with_callbacks(mut self, callbacks: ZoomCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Take over interaction styling on `surface` and write the current transform.
    /// A previously attached surface is detached first.
    pub fn attach(&mut self, mut surface: S) -> Option<S> {
        let previous = self.detach();
        surface.set_style(surface::TOUCH_ACTION, "none");
        surface.set_style(surface::USER_SELECT, "none");
        surface.set_style(surface::TRANSFORM_ORIGIN, "0 0");
        surface.set_style(surface::TRANSFORM, &self.transform.to_css());
        surface.set_style(surface::CURSOR, CURSOR_IDLE);
        self.surface = Some(surface);
        previous
    }

    /// Undo everything `attach` wrote and hand the surface back.
    pub fn detach(&mut self) -> Option<S> {
        let mut surface = self.surface.take()?;
        for property in surface::OWNED_PROPERTIES {
            surface.clear_style(property);
        }
        self.gesture = GestureState::Idle;
        Some(surface)
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    pub fn translate(&self) -> Point {
        self.transform.translate()
    }

    pub fn transform(&self) -> TransformState {
        self.transform
    }

    pub fn transform_css(&self) -> String {
        self.transform.to_css()
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn is_mouse_dragging(&self) -> bool {
        self.gesture.is_dragging_with(PointerKind::Mouse)
    }

    pub fn to_content(&self, screen: Point) -> Point {
        self.transform.to_content(screen)
    }

    pub fn to_screen(&self, content: Point) -> Point {
        self.transform.to_screen(content)
    }

    pub fn set_scale(&mut self, scale: f64) {
        if !scale.is_finite() {
            log::warn!("ignoring non-finite scale {scale}");
            return;
        }
        self.transform.scale = self.config.clamp(scale);
        self.commit_zoom();
    }

    pub fn set_translate(&mut self, x: f64, y: f64) {
        if !Point::new(x, y).is_finite() {
            log::warn!("ignoring non-finite translation ({x}, {y})");
            return;
        }
        self.transform.translate_x = x;
        self.transform.translate_y = y;
        self.commit_pan();
    }

    pub fn reset(&mut self) {
        self.gesture = GestureState::Idle;
        self.transform = TransformState::with_scale(self.config.clamp(1.0));
        self.write_transform();
        self.set_cursor(CURSOR_IDLE);
        self.callbacks.emit_zoom(self.transform.scale);
        self.callbacks.emit_pan(0.0, 0.0);
    }

    pub fn handle_touch_start(&mut self, touches: &[Point]) -> Propagation {
        match touches.len() {
            2 => {
                if let Some((distance, center)) = self.pinch_geometry(touches) {
                    log::debug!("pinch start: distance {distance}");
                    self.set_cursor_if_mouse_dragging();
                    self.gesture = GestureState::Pinching { distance, center };
                }
                Propagation::Suppress
            }
            1 if matches!(self.gesture, GestureState::Idle) => {
                let last = self.to_local(touches[0]);
                self.gesture = GestureState::Dragging {
                    pointer: PointerKind::Touch,
                    last,
                };
                Propagation::Allow
            }
            _ => Propagation::Allow,
        }
    }

    pub fn handle_touch_move(&mut self, touches: &[Point]) -> Propagation {
        match touches.len() {
            2 if self.gesture.is_pinching() => {
                if let Some((distance, center)) = self.pinch_geometry(touches) {
                    self.continue_pinch(distance, center);
                }
                Propagation::Suppress
            }
            1 if !self.gesture.is_pinching() => {
                let position = self.to_local(touches[0]);
                match self.gesture {
                    GestureState::Idle => {
                        self.gesture = GestureState::Dragging {
                            pointer: PointerKind::Touch,
                            last: position,
                        };
                    }
                    _ => {
                        if let Some(delta) = self.gesture.advance_drag(PointerKind::Touch, position) {
                            self.transform.pan_by(delta.x, delta.y);
                            self.commit_pan();
                        }
                    }
                }
                Propagation::Allow
            }
            _ => Propagation::Allow,
        }
    }

    /// `remaining` holds the touches still down after the end/cancel.
    pub fn handle_touch_end(&mut self, remaining: &[Point]) -> Propagation {
        if remaining.len() >= 2 {
            return Propagation::Allow;
        }
        if self.gesture.is_pinching() {
            log::debug!("pinch end: {} touches left", remaining.len());
        }
        match (self.gesture, remaining) {
            (GestureState::Dragging { pointer: PointerKind::Mouse, .. }, _) => {}
            (GestureState::Pinching { .. }, [touch]) => {
                self.gesture = GestureState::Dragging {
                    pointer: PointerKind::Touch,
                    last: self.to_local(*touch),
                };
            }
            (GestureState::Pinching { .. } | GestureState::Dragging { .. }, []) => {
                self.gesture = GestureState::Idle;
            }
            _ => {}
        }
        Propagation::Allow
    }

    pub fn handle_mouse_down(&mut self, button: MouseButton, position: Point) -> Propagation {
        if button != MouseButton::Primary || self.gesture.is_pinching() {
            return Propagation::Allow;
        }
        self.gesture = GestureState::Dragging {
            pointer: PointerKind::Mouse,
            last: position,
        };
        self.set_cursor(CURSOR_DRAGGING);
        Propagation::Allow
    }

    pub fn handle_mouse_move(&mut self, position: Point) -> Propagation {
        if let Some(delta) = self.gesture.advance_drag(PointerKind::Mouse, position) {
            self.transform.pan_by(delta.x, delta.y);
            self.commit_pan();
        }
        Propagation::Allow
    }

    pub fn handle_mouse_up(&mut self) -> Propagation {
        if self.is_mouse_dragging() {
            self.gesture = GestureState::Idle;
            self.set_cursor(CURSOR_IDLE);
        }
        Propagation::Allow
    }

    /// Fixed-step zoom about the cursor. Anything but a positive `delta_y` zooms in.
    pub fn handle_wheel(&mut self, delta_y: f64, position: Point) -> Propagation {
        let factor = if delta_y > 0.0 { WHEEL_ZOOM_OUT } else { WHEEL_ZOOM_IN };
        let anchor = self.to_local(position);
        self.zoom_about(anchor, self.transform.scale * factor);
        Propagation::Suppress
    }

    fn continue_pinch(&mut self, distance: f64, center: Point) {
        let Some(previous) = self.gesture.advance_pinch(distance, center) else {
            return;
        };
        if previous <= 0.0 {
            return;
        }
        self.zoom_about(center, self.transform.scale * (distance / previous));
    }

    fn zoom_about(&mut self, anchor: Point, requested: f64) {
        let new_scale = self.config.clamp(requested);
        self.transform.zoom_about(anchor, new_scale);
        self.commit_zoom();
    }

    fn pinch_geometry(&self, touches: &[Point]) -> Option<(f64, Point)> {
        two_finger_geometry(touches).map(|(distance, mid)| (distance, self.to_local(mid)))
    }

    fn to_local(&self, viewport: Point) -> Point {
        match &self.surface {
            Some(surface) => surface.bounds().to_local(viewport),
            None => viewport,
        }
    }

    fn commit_zoom(&mut self) {
        self.write_transform();
        self.callbacks.emit_zoom(self.transform.scale);
    }

    fn commit_pan(&mut self) {
        self.write_transform();
        self.callbacks
            .emit_pan(self.transform.translate_x, self.transform.translate_y);
    }

    fn write_transform(&mut self) {
        let css = self.transform.to_css();
        if let Some(surface) = self.surface.as_mut() {
            surface.set_style(surface::TRANSFORM, &css);
        }
    }

    fn set_cursor(&mut self, cursor: &str) {
        if let Some(surface) = self.surface.as_mut() {
            surface.set_style(surface::CURSOR, cursor);
        }
    }

    fn set_cursor_if_mouse_dragging(&mut self) {
        if self.is_mouse_dragging() {
            self.set_cursor(CURSOR_IDLE);
        }
    }
}
