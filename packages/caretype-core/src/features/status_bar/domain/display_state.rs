//! What the status bar shows for one editor

use crate::features::type_hint::InferenceResult;

/// Displayed `(label, name)` pair; both empty when nothing is shown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    current: Option<InferenceResult>,
}

impl DisplayState {
    pub fn label(&self) -> Option<&str> {
        self.current.as_ref().map(|r| r.type_label.as_str())
    }

    pub fn name(&self) -> Option<&str> {
        self.current.as_ref().map(|r| r.variable_name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Replace the state wholesale; returns whether anything changed
    pub fn replace(&mut self, next: Option<InferenceResult>) -> bool {
        if self.current == next {
            return false;
        }
        self.current = next;
        true
    }

    pub fn clear(&mut self) -> bool {
        self.replace(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_reports_changes() {
        let mut state = DisplayState::default();
        assert!(state.is_empty());
        assert!(state.replace(Some(InferenceResult::new("int", "x"))));
        assert!(!state.replace(Some(InferenceResult::new("int", "x"))));
        assert_eq!(state.label(), Some("int"));
        assert_eq!(state.name(), Some("x"));
        assert!(state.clear());
        assert!(!state.clear());
        assert_eq!(state.label(), None);
    }
}
