//! Pipeline error types.
//!
//! Every failure mode has a named variant. No stringly-typed errors.
//! The taxonomy is narrow because scoring is total over its input
//! domain: the only runtime failure is an unreachable capability.

use thiserror::Error;

use coach_lexicon::CapabilityError;

use crate::types::Dimension;

/// Rubric configuration rejected at startup, before any scoring.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("rubric weights must sum to 1.0 (got {sum}, tolerance {tolerance})")]
    WeightSum { sum: f64, tolerance: f64 },

    #[error("rubric weight for {dimension} is negative: {weight}")]
    NegativeWeight { dimension: Dimension, weight: f64 },

    #[error("phrase set '{set}' must not be empty")]
    EmptyPhraseSet { set: &'static str },
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid rubric configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("capability failure: {0}")]
    Capability(#[from] CapabilityError),
}

/// Result type alias for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
