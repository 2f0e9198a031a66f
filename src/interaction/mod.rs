pub mod drag;
pub mod edit;

pub use drag::{DragSession, DropTarget, MoveRequest};
pub use edit::{EditOutcome, TitleEdit};
