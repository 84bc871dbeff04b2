use coach_lexicon::matching::{contains_any, normalize};

use crate::scorer::DimensionScorer;
use crate::types::{Dimension, FeatureBundle, Message, Sender};

/// Scores whether the customer stated an identifiable problem.
///
/// All customer messages are concatenated (space-joined, in order) and
/// searched for any problem phrase: 1.0 on the first match anywhere in
/// that scope, 0.0 on none. No customer messages scores 0.0.
pub struct ProblemScorer {
    phrases: Vec<String>,
}

impl ProblemScorer {
    pub fn new(phrases: Vec<String>) -> Self {
        Self { phrases }
    }
}

impl DimensionScorer for ProblemScorer {
    fn dimension(&self) -> Dimension {
        Dimension::ProblemIdentification
    }

    fn score(&self, messages: &[Message], _features: &[FeatureBundle]) -> f64 {
        match joined_text(messages, Sender::Customer) {
            Some(text) if contains_any(&text, &self.phrases) => 1.0,
            _ => 0.0,
        }
    }
}

/// Space-join the normalized text of every message from `sender`,
/// preserving conversation order. `None` when no such message exists,
/// so callers can distinguish "no match" from "nothing to match".
pub(crate) fn joined_text(messages: &[Message], sender: Sender) -> Option<String> {
    let parts: Vec<String> = messages
        .iter()
        .filter(|m| m.sender == sender)
        .map(|m| normalize(&m.text))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
