//! Rubric configuration.
//!
//! Weights and vocabularies used to be module-level constants reached
//! into ad hoc in the original prototype; here they are one immutable
//! struct handed to the scorer at construction and validated exactly
//! once. Validation failure is fatal before any conversation is
//! scored, so a miscalibrated overall score cannot be produced
//! silently.

use serde::{Deserialize, Serialize};

use coach_lexicon::phrases;
use coach_lexicon::thresholds::WEIGHT_SUM_TOLERANCE;

use crate::error::ConfigError;
use crate::types::Dimension;

/// Per-dimension weights. Must sum to 1.0 within tolerance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RubricWeights {
    pub greeting: f64,
    pub problem_identification: f64,
    pub solution_delivery: f64,
    pub closing: f64,
    pub empathy: f64,
}

impl RubricWeights {
    /// Read a weight by dimension.
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Greeting => self.greeting,
            Dimension::ProblemIdentification => self.problem_identification,
            Dimension::SolutionDelivery => self.solution_delivery,
            Dimension::Closing => self.closing,
            Dimension::Empathy => self.empathy,
        }
    }

    pub fn sum(&self) -> f64 {
        Dimension::ALL.iter().map(|d| self.get(*d)).sum()
    }
}

impl Default for RubricWeights {
    /// Reference calibration from the original deployment.
    fn default() -> Self {
        Self {
            greeting: 0.15,
            problem_identification: 0.25,
            solution_delivery: 0.35,
            closing: 0.15,
            empathy: 0.10,
        }
    }
}

/// Immutable scoring configuration: weight table plus the phrase and
/// keyword vocabularies every dimension scorer matches against.
///
/// Serde-deserializable so deployments can load a custom rubric from
/// JSON; always re-validate after changing any field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RubricConfig {
    pub weights: RubricWeights,
    pub greeting_phrases: Vec<String>,
    pub problem_phrases: Vec<String>,
    pub solution_phrases: Vec<String>,
    pub closing_phrases: Vec<String>,
    pub empathy_keywords: Vec<String>,
    pub politeness_markers: Vec<String>,
}

impl Default for RubricConfig {
    fn default() -> Self {
        Self {
            weights: RubricWeights::default(),
            greeting_phrases: phrases::to_owned_set(phrases::GREETING_PHRASES),
            problem_phrases: phrases::to_owned_set(phrases::PROBLEM_PHRASES),
            solution_phrases: phrases::to_owned_set(phrases::SOLUTION_PHRASES),
            closing_phrases: phrases::to_owned_set(phrases::CLOSING_PHRASES),
            empathy_keywords: phrases::to_owned_set(phrases::EMPATHY_KEYWORDS),
            politeness_markers: phrases::to_owned_set(phrases::POLITENESS_MARKERS),
        }
    }
}

impl RubricConfig {
    /// Validate the configuration. Called once at pipeline
    /// construction; scoring never runs against an unvalidated config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for dimension in Dimension::ALL {
            let weight = self.weights.get(dimension);
            if weight < 0.0 {
                return Err(ConfigError::NegativeWeight { dimension, weight });
            }
        }

        let sum = self.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum {
                sum,
                tolerance: WEIGHT_SUM_TOLERANCE,
            });
        }

        for (name, set) in [
            ("greeting_phrases", &self.greeting_phrases),
            ("problem_phrases", &self.problem_phrases),
            ("solution_phrases", &self.solution_phrases),
            ("closing_phrases", &self.closing_phrases),
            ("empathy_keywords", &self.empathy_keywords),
            ("politeness_markers", &self.politeness_markers),
        ] {
            if set.is_empty() {
                return Err(ConfigError::EmptyPhraseSet { set: name });
            }
        }

        Ok(())
    }

    /// Lowercase every vocabulary entry so scorers match against
    /// normalized text without re-normalizing per message.
    pub fn normalized(mut self) -> Self {
        for set in [
            &mut self.greeting_phrases,
            &mut self.problem_phrases,
            &mut self.solution_phrases,
            &mut self.closing_phrases,
            &mut self.empathy_keywords,
            &mut self.politeness_markers,
        ] {
            for entry in set.iter_mut() {
                *entry = entry.to_lowercase();
            }
        }
        self
    }
}
