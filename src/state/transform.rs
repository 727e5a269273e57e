use crate::geometry::Point;

// Transform state: uniform scale plus translation, rendered as
// `translate(tx, ty) scale(s)` with the origin pinned to the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }
}

impl TransformState {
    pub fn with_scale(scale: f64) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    pub fn translate(&self) -> Point {
        Point::new(self.translate_x, self.translate_y)
    }

    /// Content-space point currently shown at the surface-local `screen` point.
    pub fn to_content(&self, screen: Point) -> Point {
        Point::new(
            screen.x / self.scale - self.translate_x,
            screen.y / self.scale - self.translate_y,
        )
    }

    /// Inverse of [`TransformState::to_content`].
    pub fn to_screen(&self, content: Point) -> Point {
        Point::new(
            (content.x + self.translate_x) * self.scale,
            (content.y + self.translate_y) * self.scale,
        )
    }

    /// Switch to `new_scale` while keeping the content point under `anchor` in place.
    ///
    /// The anchor is resolved in content space at the old scale, then the
    /// translation is solved at the new scale. `new_scale` must already be clamped.
    pub fn zoom_about(&mut self, anchor: Point, new_scale: f64) {
        let content = self.to_content(anchor);
        self.translate_x = anchor.x / new_scale - content.x;
        self.translate_y = anchor.y / new_scale - content.y;
        self.scale = new_scale;
    }

    /// Pan by a screen-space delta; the step is divided by the scale so the
    /// content moves at the same rate at every zoom level.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.translate_x += dx / self.scale;
        self.translate_y += dy / self.scale;
    }

    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn zoom_about_keeps_anchor_content_point() {
        let anchors = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(-40.0, 250.5),
        ];
        for anchor in anchors {
            for new_scale in [0.5, 0.75, 1.0, 2.0, 3.3, 5.0] {
                let mut t = TransformState {
                    scale: 1.7,
                    translate_x: -12.0,
                    translate_y: 33.0,
                };
                let before = t.to_content(anchor);
                t.zoom_about(anchor, new_scale);
                let after = t.to_content(anchor);
                assert_close(before.x, after.x);
                assert_close(before.y, after.y);
                assert_eq!(t.scale, new_scale);
            }
        }
    }

    #[test]
    fn wheel_step_from_identity() {
        let mut t = TransformState::default();
        t.zoom_about(Point::new(100.0, 100.0), 1.1);
        assert_close(t.translate_x, 100.0 / 1.1 - 100.0);
        assert_close(t.translate_y, 100.0 / 1.1 - 100.0);
    }

    #[test]
    fn pan_is_divided_by_scale() {
        for scale in [0.5, 1.0, 2.0, 4.0] {
            let mut t = TransformState::with_scale(scale);
            t.pan_by(10.0, -6.0);
            assert_close(t.translate_x, 10.0 / scale);
            assert_close(t.translate_y, -6.0 / scale);
        }
    }

    #[test]
    fn screen_and_content_conversions_invert() {
        let t = TransformState {
            scale: 2.5,
            translate_x: 4.0,
            translate_y: -8.0,
        };
        let p = Point::new(17.0, 3.0);
        let back = t.to_screen(t.to_content(p));
        assert_close(back.x, p.x);
        assert_close(back.y, p.y);
    }

    #[test]
    fn css_is_translate_then_scale() {
        let t = TransformState {
            scale: 2.0,
            translate_x: 1.5,
            translate_y: -3.0,
        };
        assert_eq!(t.to_css(), "translate(1.5px, -3px) scale(2)");
        assert_eq!(
            TransformState::default().to_css(),
            "translate(0px, 0px) scale(1)"
        );
    }
}
