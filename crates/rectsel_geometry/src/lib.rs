pub mod handle;
pub mod types;

pub use handle::{HandleId, HandleKind, available_handles, handle_positions};
pub use types::{AspectMode, Axis, Point, Rect, Side, Size};
