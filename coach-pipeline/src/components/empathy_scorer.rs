use crate::scorer::DimensionScorer;
use crate::types::{Dimension, FeatureBundle, Message, Sender};
use crate::util;

/// Scores conversation-level empathy.
///
/// Arithmetic mean of the per-message `empathy_score` across agent
/// feature bundles. The per-message scores are already extracted, so
/// this component only aggregates. No agent messages scores 0.0, a
/// defined floor rather than an error.
pub struct EmpathyScorer;

impl DimensionScorer for EmpathyScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Empathy
    }

    fn score(&self, messages: &[Message], features: &[FeatureBundle]) -> f64 {
        util::mean(
            messages
                .iter()
                .zip(features)
                .filter(|(m, _)| m.sender == Sender::Agent)
                .map(|(_, f)| f.empathy_score),
        )
    }
}
