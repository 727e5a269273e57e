use std::collections::BTreeMap;

use crate::geometry::Rect;
use crate::surface::Surface;

/// In-memory surface that remembers the last value written per style property.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub rect: Rect,
    pub styles: BTreeMap<String, String>,
}

impl RecordingSurface {
    pub fn at(rect: Rect) -> Self {
        Self {
            rect,
            styles: BTreeMap::new(),
        }
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }
}

impl Surface for RecordingSurface {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn set_style(&mut self, property: &str, value: &str) {
        self.styles.insert(property.to_owned(), value.to_owned());
    }

    fn clear_style(&mut self, property: &str) {
        self.styles.remove(property);
    }
}
