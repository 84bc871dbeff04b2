use coach_lexicon::matching::contains_any;

use crate::components::problem_scorer::joined_text;
use crate::scorer::DimensionScorer;
use crate::types::{Dimension, FeatureBundle, Message, Sender};

/// Scores whether the agent delivered a solution.
///
/// Mirror of `ProblemScorer` over the agent side: all agent messages
/// are concatenated and searched for any solution phrase. No agent
/// messages scores 0.0.
pub struct SolutionScorer {
    phrases: Vec<String>,
}

impl SolutionScorer {
    pub fn new(phrases: Vec<String>) -> Self {
        Self { phrases }
    }
}

impl DimensionScorer for SolutionScorer {
    fn dimension(&self) -> Dimension {
        Dimension::SolutionDelivery
    }

    fn score(&self, messages: &[Message], _features: &[FeatureBundle]) -> f64 {
        match joined_text(messages, Sender::Agent) {
            Some(text) if contains_any(&text, &self.phrases) => 1.0,
            _ => 0.0,
        }
    }
}
