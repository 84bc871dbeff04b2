//! Injected NLP capability seams.
//!
//! The scoring core consumes tokenization and sentiment analysis but
//! does not implement them: both are interchangeable backends behind
//! small traits, so the deterministic rubric logic never couples to a
//! particular NLP library or service. Any conformant implementation is
//! acceptable as long as it is deterministic for identical input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of an injected capability (e.g. a model server is down).
///
/// The core has no recovery policy for these; they propagate to the
/// caller, who owns the backend.
#[derive(Debug, Error)]
pub enum CapabilityError {
    #[error("{capability} capability unavailable: {reason}")]
    Unavailable { capability: String, reason: String },
}

/// A named entity attached to a message. Supplementary output only:
/// absence never affects scoring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
}

/// Sentiment of a single message.
///
/// `compound` is always present, in [-1.0, 1.0]. Polarity and
/// subjectivity are optional backend extras; when absent they
/// contribute 0.0 wherever consumed downstream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub compound: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polarity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjectivity: Option<f64>,
}

impl SentimentScores {
    /// A neutral score, for backends that cannot rate a text.
    pub fn neutral() -> Self {
        Self {
            compound: 0.0,
            polarity: None,
            subjectivity: None,
        }
    }
}

/// Linguistic tokenization capability.
pub trait Tokenizer: Send + Sync {
    /// Split a text into an ordered token sequence. Must be
    /// deterministic: the same input always yields the same tokens.
    fn tokenize(&self, text: &str) -> Result<Vec<String>, CapabilityError>;

    /// Extract named entities from a text. Optional; backends without
    /// entity recognition return an empty list.
    fn entities(&self, _text: &str) -> Result<Vec<Entity>, CapabilityError> {
        Ok(Vec::new())
    }
}

/// Sentiment analysis capability.
pub trait SentimentAnalyzer: Send + Sync {
    /// Rate a text. `compound` must land in [-1.0, 1.0].
    fn analyze(&self, text: &str) -> Result<SentimentScores, CapabilityError>;
}
