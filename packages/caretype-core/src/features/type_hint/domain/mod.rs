//! Type hint domain models

mod inference_result;
mod type_label;

pub use inference_result::InferenceResult;
pub use type_label::TypeLabel;
