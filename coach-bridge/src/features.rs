//! Classifier feature flattening.
//!
//! The response-quality classifier consumes each agent message as a
//! flat numeric vector plus a binary quality label. The layout and
//! normalization constants are part of the contract with the training
//! collaborator: reordering columns or changing a divisor invalidates
//! every previously trained model.

use serde::Serialize;

use coach_pipeline::{ProcessedConversation, ProcessedMessage, Sender};

use coach_lexicon::thresholds::{
    QUALITY_LABEL_THRESHOLD, RESPONSE_TIME_NORM_MS, TOKEN_COUNT_NORM,
};

/// Number of columns in a flattened feature vector.
pub const FEATURE_DIM: usize = 7;

/// Column order, for consumers that want named columns.
pub const FEATURE_COLUMNS: [&str; FEATURE_DIM] = [
    "sentiment_compound",
    "sentiment_polarity",
    "sentiment_subjectivity",
    "empathy_score",
    "politeness_score",
    "response_time_norm",
    "token_count_norm",
];

/// One training example: an agent message's features and its label.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrainingRow {
    pub features: [f64; FEATURE_DIM],
    /// 1 when the message's heuristic quality exceeds the label
    /// threshold, 0 otherwise.
    pub label: u8,
}

/// Flatten one processed message into the classifier's column layout.
///
/// Absent polarity/subjectivity contribute 0.0; response time is
/// normalized against a one-minute ceiling and capped at 1.0; token
/// count is scaled but deliberately left uncapped, matching the
/// original feature extraction.
pub fn feature_vector(message: &ProcessedMessage) -> [f64; FEATURE_DIM] {
    [
        message.sentiment.compound,
        message.sentiment.polarity.unwrap_or(0.0),
        message.sentiment.subjectivity.unwrap_or(0.0),
        message.empathy_score,
        message.politeness_score,
        (message.response_time_ms / RESPONSE_TIME_NORM_MS).min(1.0),
        message.tokens.len() as f64 / TOKEN_COUNT_NORM,
    ]
}

/// Heuristic per-message quality used to label training examples:
/// the mean of empathy, politeness, and compound sentiment shifted
/// into [0, 1].
pub fn message_quality(message: &ProcessedMessage) -> f64 {
    (message.empathy_score + message.politeness_score + (message.sentiment.compound + 1.0) / 2.0)
        / 3.0
}

/// Produce one training row per agent message of a processed
/// conversation. Customer messages are never training examples.
pub fn training_rows(processed: &ProcessedConversation) -> Vec<TrainingRow> {
    processed
        .messages
        .iter()
        .filter(|m| m.sender == Sender::Agent)
        .map(|m| TrainingRow {
            features: feature_vector(m),
            label: u8::from(message_quality(m) > QUALITY_LABEL_THRESHOLD),
        })
        .collect()
}
