//! Status Bar Feature
//!
//! Host-facing glue: editor events in, displayed `(label, name)` out.
//!
//! ## Structure
//! - `domain/` - EditorId, EditorEvent, DisplayState
//! - `ports/` - DocumentSource, UpdateSink
//! - `application/` - StatusBarWidget
//! - `infrastructure/` - InMemoryDocuments, ChannelNotifier

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::StatusBarWidget;
pub use domain::{DisplayState, EditorEvent, EditorId};
pub use infrastructure::{ChannelNotifier, InMemoryDocuments};
pub use ports::{DocumentSource, UpdateSink, WidgetUpdate};
