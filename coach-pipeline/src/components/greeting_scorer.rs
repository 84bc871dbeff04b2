use coach_lexicon::matching::{contains_any, normalize};

use crate::scorer::DimensionScorer;
use crate::types::{Dimension, FeatureBundle, Message, Sender};

/// Scores whether the conversation opens with an agent greeting.
///
/// Only the first message is examined, and only when the agent sent
/// it: 1.0 if any greeting phrase appears, 0.0 otherwise. An empty
/// conversation or a customer-first conversation scores 0.0.
pub struct GreetingScorer {
    phrases: Vec<String>,
}

impl GreetingScorer {
    pub fn new(phrases: Vec<String>) -> Self {
        Self { phrases }
    }
}

impl DimensionScorer for GreetingScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Greeting
    }

    fn score(&self, messages: &[Message], _features: &[FeatureBundle]) -> f64 {
        match messages.first() {
            Some(first) if first.sender == Sender::Agent => {
                if contains_any(&normalize(&first.text), &self.phrases) {
                    1.0
                } else {
                    0.0
                }
            }
            _ => 0.0,
        }
    }
}
