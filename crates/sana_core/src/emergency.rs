//! Emergency phrase detection.
//!
//! Runs first for every turn; a hit fully replaces ordinary matching.

use crate::knowledge::KnowledgeBase;
use crate::normalize::normalize;

/// Return the first emergency phrase (declared order) contained in the
/// normalized text.
///
/// Substring test, not token test: a phrase matches even when embedded in a
/// longer token run. Recall is what matters for this check.
pub fn detect_emergency<'a>(kb: &'a KnowledgeBase, text: &str) -> Option<&'a str> {
    let normalized = normalize(text);
    kb.emergency_phrases()
        .iter()
        .find(|phrase| normalized.contains(phrase.as_str()))
        .map(String::as_str)
}
