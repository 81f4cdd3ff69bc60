//! Ports - what the status bar needs from the host editor

use crate::features::parsing::SyntaxTree;
use crate::features::status_bar::domain::EditorId;

/// Supplies the current syntax tree of an editor's document
pub trait DocumentSource {
    /// Tree valid at the moment of the call, `None` when the editor has no
    /// parsed document
    fn syntax_tree(&self, editor: &EditorId) -> Option<&SyntaxTree>;
}

/// Displayed content after a change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetUpdate {
    pub editor: EditorId,
    pub label: String,
    pub name: String,
    pub tooltip: String,
}

/// Receives a signal every time the displayed content changes
pub trait UpdateSink {
    fn widget_changed(&mut self, update: WidgetUpdate);
}

/// Discards updates, for hosts that poll the widget instead
impl UpdateSink for () {
    fn widget_changed(&mut self, _update: WidgetUpdate) {}
}
