//! The rubric scorer and its dimension-scorer seam.

use crate::config::{RubricConfig, RubricWeights};
use crate::error::ConfigError;
use crate::types::{Dimension, FeatureBundle, Message, QualityScores};
use crate::util;

use crate::components::closing_scorer::ClosingScorer;
use crate::components::empathy_scorer::EmpathyScorer;
use crate::components::greeting_scorer::GreetingScorer;
use crate::components::problem_scorer::ProblemScorer;
use crate::components::solution_scorer::SolutionScorer;

/// One rubric dimension's scoring rule.
///
/// Implementations are pure and deterministic: given the ordered
/// message list and its positionally aligned feature bundles, produce
/// a sub-score in [0.0, 1.0]. No implementation may fail; degenerate
/// input (empty conversation, missing sender kinds) scores 0.0.
pub trait DimensionScorer: Send + Sync {
    /// Which rubric dimension this scorer produces.
    fn dimension(&self) -> Dimension;

    /// Score the conversation on this dimension.
    fn score(&self, messages: &[Message], features: &[FeatureBundle]) -> f64;

    /// Returns a stable name for logging.
    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}

/// Runs all five dimension scorers and folds them into one weighted
/// overall score.
///
/// Each dimension has a concrete component plugged in, all built from
/// one validated config.
pub struct RubricScorer {
    weights: RubricWeights,
    scorers: Vec<Box<dyn DimensionScorer>>,
}

impl RubricScorer {
    /// Build the scorer from a configuration. Fails fast on an
    /// invalid config; a constructed scorer can always score.
    pub fn new(config: RubricConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let config = config.normalized();

        let scorers: Vec<Box<dyn DimensionScorer>> = vec![
            Box::new(GreetingScorer::new(config.greeting_phrases.clone())),
            Box::new(ProblemScorer::new(config.problem_phrases.clone())),
            Box::new(SolutionScorer::new(config.solution_phrases.clone())),
            Box::new(ClosingScorer::new(config.closing_phrases.clone())),
            Box::new(EmpathyScorer),
        ];

        Ok(Self {
            weights: config.weights,
            scorers,
        })
    }

    /// Score a conversation. `features` must be positionally aligned
    /// with `messages`; the pipeline guarantees this.
    pub fn score(&self, messages: &[Message], features: &[FeatureBundle]) -> QualityScores {
        debug_assert_eq!(messages.len(), features.len());

        let mut scores = QualityScores::default();
        let mut overall = 0.0;
        for scorer in &self.scorers {
            let dimension = scorer.dimension();
            let sub_score = util::clamp01(scorer.score(messages, features));
            log::debug!("{}: {} = {:.3}", scorer.name(), dimension, sub_score);
            scores.set(dimension, sub_score);
            overall += sub_score * self.weights.get(dimension);
        }
        scores.overall_score = util::clamp01(overall);
        scores
    }
}
