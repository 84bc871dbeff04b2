//! Case-insensitive substring matching primitives.
//!
//! Every rubric dimension and per-message signal is defined in terms of
//! these two queries, which keeps the scoring auditable: a human can
//! point at the phrase that produced any given score.

/// Lowercase a text for matching. The single normalization point for
/// all case-insensitive comparisons in the scoring pipeline.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Returns true if any phrase occurs as a substring of `text`.
///
/// First match wins; the phrase set is OR-combined. `text` must
/// already be normalized; phrases are expected pre-lowercased.
pub fn contains_any(text: &str, phrases: &[String]) -> bool {
    phrases.iter().any(|p| text.contains(p.as_str()))
}

/// Counts how many *distinct* keywords occur as substrings of `text`.
///
/// Multiple occurrences of the same keyword count once. `text` must
/// already be normalized; keywords are expected pre-lowercased.
pub fn count_distinct(text: &str, keywords: &[String]) -> usize {
    keywords.iter().filter(|k| text.contains(k.as_str())).count()
}
