use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

// Gesture recognition state. Baselines only live inside the variant that uses them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Single-pointer pan. `last` is in the pointer's own coordinate space
    /// (client coordinates for the mouse, surface-local for touches).
    Dragging { pointer: PointerKind, last: Point },
    /// Two-finger pinch. `center` is surface-local.
    Pinching { distance: f64, center: Point },
}

impl GestureState {
    pub fn is_pinching(&self) -> bool {
        matches!(self, GestureState::Pinching { .. })
    }

    pub fn is_dragging_with(&self, kind: PointerKind) -> bool {
        matches!(self, GestureState::Dragging { pointer, .. } if *pointer == kind)
    }

    /// Replace the single-pointer baseline and return the delta from the previous one.
    ///
    /// Returns `None` (and leaves the state alone) unless a drag by `kind` is active.
    pub fn advance_drag(&mut self, kind: PointerKind, position: Point) -> Option<Point> {
        match self {
            GestureState::Dragging { pointer, last } if *pointer == kind => {
                let delta = position.offset_from(*last);
                *last = position;
                Some(delta)
            }
            _ => None,
        }
    }

    /// Replace the pinch baseline and return the previous distance.
    pub fn advance_pinch(&mut self, new_distance: f64, new_center: Point) -> Option<f64> {
        match self {
            GestureState::Pinching { distance, center } => {
                let previous = *distance;
                *distance = new_distance;
                *center = new_center;
                Some(previous)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_delta_only_for_matching_pointer() {
        let mut g = GestureState::Dragging {
            pointer: PointerKind::Mouse,
            last: Point::new(5.0, 5.0),
        };
        assert_eq!(g.advance_drag(PointerKind::Touch, Point::new(9.0, 9.0)), None);
        assert_eq!(
            g.advance_drag(PointerKind::Mouse, Point::new(8.0, 1.0)),
            Some(Point::new(3.0, -4.0))
        );
        assert!(g.is_dragging_with(PointerKind::Mouse));
        assert!(!g.is_pinching());
    }

    #[test]
    fn pinch_baseline_rolls_forward() {
        let mut g = GestureState::Pinching {
            distance: 100.0,
            center: Point::ORIGIN,
        };
        assert_eq!(g.advance_pinch(150.0, Point::new(1.0, 1.0)), Some(100.0));
        assert_eq!(g.advance_pinch(120.0, Point::new(1.0, 1.0)), Some(150.0));
        assert_eq!(GestureState::Idle.advance_pinch(1.0, Point::ORIGIN), None);
    }
}
