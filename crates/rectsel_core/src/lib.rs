pub mod aspect;
pub mod clamp;
pub mod error;
pub mod notifier;
pub mod resize;
pub mod selection;
pub mod selector;
pub mod session;
pub mod state;
pub mod translate;

pub use clamp::{Constraints, effective_minimum_size, normalize};
pub use error::SelectorError;
pub use notifier::{ListenerId, Notifier, SelectionListener};
pub use selection::{Action, Effect, Model};
pub use selector::RectangleSelector;
pub use session::{DragPhase, DragSample, DragSession, Resolution};
pub use state::RectangleState;

pub use rectsel_geometry::{AspectMode, HandleId, HandleKind, Point, Rect, Size};
pub use rectsel_settings::{HandleConfig, HandleConfigs, HandleStyle, SelectorSettings};
