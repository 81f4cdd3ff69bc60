//! Result of one inference call

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label and name of the variable under the cursor
///
/// Produced fresh on every cursor event; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceResult {
    pub type_label: String,
    pub variable_name: String,
}

impl InferenceResult {
    pub fn new(type_label: impl Into<String>, variable_name: impl Into<String>) -> Self {
        Self {
            type_label: type_label.into(),
            variable_name: variable_name.into(),
        }
    }
}

impl fmt::Display for InferenceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.variable_name, self.type_label)
    }
}
