use web_sys::HtmlElement;

use crate::geometry::Rect;

pub const TOUCH_ACTION: &str = "touch-action";
pub const USER_SELECT: &str = "user-select";
pub const TRANSFORM_ORIGIN: &str = "transform-origin";
pub const TRANSFORM: &str = "transform";
pub const CURSOR: &str = "cursor";

/// Every style property the controller may write; cleared again on detach.
pub const OWNED_PROPERTIES: [&str; 5] = [TOUCH_ACTION, USER_SELECT, TRANSFORM_ORIGIN, TRANSFORM, CURSOR];

/// The element a controller transforms.
pub trait Surface {
    /// Bounding box in viewport coordinates.
    fn bounds(&self) -> Rect;
    fn set_style(&mut self, property: &str, value: &str);
    fn clear_style(&mut self, property: &str);
}

impl Surface for HtmlElement {
    fn bounds(&self) -> Rect {
        let rect = self.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top())
    }

    fn set_style(&mut self, property: &str, value: &str) {
        if let Err(err) = self.style().set_property(property, value) {
            log::warn!("failed to set {property}: {err:?}");
        }
    }

    fn clear_style(&mut self, property: &str) {
        if let Err(err) = self.style().remove_property(property) {
            log::warn!("failed to clear {property}: {err:?}");
        }
    }
}
