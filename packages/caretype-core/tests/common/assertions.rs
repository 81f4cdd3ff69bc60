//! Custom assertions for inference results

use caretype_core::{infer, InferenceResult};
use pretty_assertions::assert_eq;

use super::fixtures::{offset_of, parse};

/// Infer at the `nth` occurrence of `needle`
pub fn infer_at_text(source: &str, needle: &str, nth: usize) -> Option<InferenceResult> {
    let tree = parse(source);
    infer(&tree, offset_of(source, needle, nth))
}

/// Assert the `(label, name)` shown with the cursor on `needle`
pub fn assert_hint(source: &str, needle: &str, nth: usize, label: &str, name: &str) {
    assert_eq!(
        infer_at_text(source, needle, nth),
        Some(InferenceResult::new(label, name)),
        "cursor on occurrence {nth} of {needle:?} in {source:?}"
    );
}

/// Assert that the cursor on `needle` shows nothing
pub fn assert_no_hint(source: &str, needle: &str, nth: usize) {
    assert_eq!(
        infer_at_text(source, needle, nth),
        None,
        "cursor on occurrence {nth} of {needle:?} in {source:?}"
    );
}
