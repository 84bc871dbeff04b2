//! Centralized heuristic constants for conversation quality scoring.
//!
//! These values are ported from the original Python prototype
//! (config.py, data_processing.py, train_classifier.py,
//! suggestion_engine.py). Changing a constant here affects BOTH
//! feature extraction (in `coach-pipeline/extractor.rs`) and the
//! classifier feature flattening (in `coach-bridge/features.rs`).

/// Distinct empathy keywords needed for a message to saturate at 1.0.
pub const EMPATHY_SATURATION: f64 = 3.0;

/// Distinct politeness markers needed for a message to saturate at 1.0.
pub const POLITENESS_SATURATION: f64 = 2.0;

/// Response-time placeholder for the opening message of a conversation.
pub const FIRST_MESSAGE_RESPONSE_MS: f64 = 0.0;

/// Response-time placeholder for even-indexed follow-up messages.
/// Stand-in for real timestamp deltas, which the transcript format
/// does not carry.
pub const EVEN_INDEX_RESPONSE_MS: f64 = 15_000.0;

/// Response-time placeholder for odd-indexed follow-up messages.
pub const ODD_INDEX_RESPONSE_MS: f64 = 10_000.0;

/// Response-time normalization ceiling for classifier features (1 minute).
/// Normalized response time is capped at 1.0 above this.
pub const RESPONSE_TIME_NORM_MS: f64 = 60_000.0;

/// Token-count divisor for classifier features.
pub const TOKEN_COUNT_NORM: f64 = 50.0;

/// Per-message quality above this threshold labels an agent message
/// as a positive training example.
pub const QUALITY_LABEL_THRESHOLD: f64 = 0.6;

/// Messages retained when rendering a suggestion context window.
pub const CONTEXT_HISTORY_LIMIT: usize = 20;

/// Whitespace-token cap for a rendered suggestion context.
pub const CONTEXT_MAX_TOKENS: usize = 512;

/// Allowed deviation of the rubric weight sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;
