//! Deterministic rubric scoring for support-chat transcripts.
//!
//! Scores a completed or in-progress conversation snapshot against a
//! five-dimension communication rubric (greeting, problem
//! identification, solution delivery, closing, empathy) and derives a
//! weighted overall score, plus per-message linguistic features
//! consumed downstream for classifier training and coaching
//! suggestions.
//!
//! The scoring rules are substring and keyword matches over fixed,
//! configurable vocabularies, deliberately simple so a human can
//! explain every score. NLP concerns (tokenization, sentiment) are
//! injected capabilities, not implemented here.

pub mod components;
pub mod config;
pub mod error;
pub mod extractor;
pub mod pipeline;
pub mod scorer;
pub mod types;
pub mod util;

pub use config::{RubricConfig, RubricWeights};
pub use error::{ConfigError, PipelineError, PipelineResult};
pub use extractor::FeatureExtractor;
pub use pipeline::ConversationPipeline;
pub use scorer::{DimensionScorer, RubricScorer};
pub use types::{
    Conversation, Dimension, FeatureBundle, Message, ProcessedConversation, ProcessedMessage,
    QualityScores, Sender, UNKNOWN_CONVERSATION_ID,
};
