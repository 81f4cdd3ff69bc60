//! Status bar domain models

mod display_state;
mod editor_event;

pub use display_state::DisplayState;
pub use editor_event::{EditorEvent, EditorId};
