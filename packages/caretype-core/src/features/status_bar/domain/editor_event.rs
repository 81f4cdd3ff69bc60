//! Editor notifications consumed by the status bar

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one open editor
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EditorId(String);

impl EditorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EditorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EditorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Caret and selection events, delivered in editor order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// Primary caret moved to `offset`
    CaretMoved {
        editor: EditorId,
        offset: usize,
        caret_count: usize,
    },
    /// A caret was added; `offset` is the primary caret
    CaretAdded {
        editor: EditorId,
        offset: usize,
        caret_count: usize,
    },
    CaretRemoved {
        editor: EditorId,
        caret_count: usize,
    },
    SelectionChanged { editor: EditorId },
}

impl EditorEvent {
    pub fn editor(&self) -> &EditorId {
        match self {
            EditorEvent::CaretMoved { editor, .. }
            | EditorEvent::CaretAdded { editor, .. }
            | EditorEvent::CaretRemoved { editor, .. }
            | EditorEvent::SelectionChanged { editor } => editor,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            EditorEvent::CaretMoved { .. } => "caret_moved",
            EditorEvent::CaretAdded { .. } => "caret_added",
            EditorEvent::CaretRemoved { .. } => "caret_removed",
            EditorEvent::SelectionChanged { .. } => "selection_changed",
        }
    }

    /// Offset to infer at, when the event asks for inference at all
    pub fn inference_offset(&self) -> Option<usize> {
        match self {
            EditorEvent::CaretMoved {
                offset,
                caret_count,
                ..
            }
            | EditorEvent::CaretAdded {
                offset,
                caret_count,
                ..
            } if *caret_count == 1 => Some(*offset),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(caret_count: usize) -> EditorEvent {
        EditorEvent::CaretMoved {
            editor: "main.py".into(),
            offset: 7,
            caret_count,
        }
    }

    #[test]
    fn test_single_caret_requests_inference() {
        assert_eq!(moved(1).inference_offset(), Some(7));
    }

    #[test]
    fn test_multiple_carets_suppress_inference() {
        assert_eq!(moved(2).inference_offset(), None);
        let added = EditorEvent::CaretAdded {
            editor: "main.py".into(),
            offset: 3,
            caret_count: 2,
        };
        assert_eq!(added.inference_offset(), None);
    }

    #[test]
    fn test_clearing_events() {
        let removed = EditorEvent::CaretRemoved {
            editor: "a.py".into(),
            caret_count: 1,
        };
        assert_eq!(removed.inference_offset(), None);
        assert_eq!(removed.event_type(), "caret_removed");

        let selection = EditorEvent::SelectionChanged { editor: "a.py".into() };
        assert_eq!(selection.editor().as_str(), "a.py");
        assert_eq!(selection.inference_offset(), None);
    }
}
