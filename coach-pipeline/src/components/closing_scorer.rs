use coach_lexicon::matching::{contains_any, normalize};

use crate::scorer::DimensionScorer;
use crate::types::{Dimension, FeatureBundle, Message, Sender};

/// Scores whether the conversation ends with an agent closing.
///
/// Only the last message is examined, and only when the agent sent it.
/// In a single-message conversation the same message is evaluated here
/// and by `GreetingScorer`; the two dimensions are independent.
pub struct ClosingScorer {
    phrases: Vec<String>,
}

impl ClosingScorer {
    pub fn new(phrases: Vec<String>) -> Self {
        Self { phrases }
    }
}

impl DimensionScorer for ClosingScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Closing
    }

    fn score(&self, messages: &[Message], _features: &[FeatureBundle]) -> f64 {
        match messages.last() {
            Some(last) if last.sender == Sender::Agent => {
                if contains_any(&normalize(&last.text), &self.phrases) {
                    1.0
                } else {
                    0.0
                }
            }
            _ => 0.0,
        }
    }
}
