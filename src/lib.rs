//! Pinch-zoom and pan for a single element.
//!
//! Touch pinch, single-touch drag, mouse drag and wheel input become a uniform
//! scale plus translation, written as `translate(Xpx, Ypx) scale(S)` with the
//! transform origin at the top-left corner. Zooming keeps the content point
//! under the fingers or cursor in place.
//!
//! [`GestureTransformController`] holds the state and math and runs without a
//! browser; [`dom::PinchZoom`] attaches it to an `HtmlElement`.

pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod geometry;
pub mod state;
pub mod surface;

#[cfg(test)]
mod test_utils;

pub use config::{ZoomCallbacks, ZoomConfig};
pub use controller::{GestureTransformController, MouseButton, Propagation};
pub use dom::PinchZoom;
pub use error::{ConfigError, PinchZoomError};
pub use geometry::{Point, Rect};
pub use state::{GestureState, PointerKind, TransformState};
pub use surface::Surface;
