pub mod gesture;
pub mod transform;

pub use gesture::{GestureState, PointerKind};
pub use transform::TransformState;
