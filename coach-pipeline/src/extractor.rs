//! Per-message feature extraction.

use coach_lexicon::matching::{count_distinct, normalize};
use coach_lexicon::thresholds::{
    EMPATHY_SATURATION, EVEN_INDEX_RESPONSE_MS, FIRST_MESSAGE_RESPONSE_MS, ODD_INDEX_RESPONSE_MS,
    POLITENESS_SATURATION,
};
use coach_lexicon::{CapabilityError, SentimentAnalyzer, Tokenizer};

use crate::types::FeatureBundle;

/// Converts one message's raw text into a fixed-shape feature bundle.
///
/// Tokenization and sentiment come from injected capabilities; the
/// empathy/politeness signals and the response-time placeholder are
/// computed here. Extraction is total over text input: any string,
/// including the empty string, yields a valid (possibly all-zero)
/// bundle, so the only failure mode is a capability error, which is
/// propagated untouched.
pub struct FeatureExtractor {
    tokenizer: Box<dyn Tokenizer>,
    analyzer: Box<dyn SentimentAnalyzer>,
    empathy_keywords: Vec<String>,
    politeness_markers: Vec<String>,
}

impl FeatureExtractor {
    /// `empathy_keywords` and `politeness_markers` must already be
    /// lowercased (see `RubricConfig::normalized`).
    pub fn new(
        tokenizer: Box<dyn Tokenizer>,
        analyzer: Box<dyn SentimentAnalyzer>,
        empathy_keywords: Vec<String>,
        politeness_markers: Vec<String>,
    ) -> Self {
        Self {
            tokenizer,
            analyzer,
            empathy_keywords,
            politeness_markers,
        }
    }

    /// Extract the feature bundle for the message at `index`.
    pub fn extract(&self, index: usize, text: &str) -> Result<FeatureBundle, CapabilityError> {
        let tokens = self.tokenizer.tokenize(text)?;
        let entities = self.tokenizer.entities(text)?;
        let sentiment = self.analyzer.analyze(text)?;

        let lowered = normalize(text);
        let empathy_score = saturating_ratio(
            count_distinct(&lowered, &self.empathy_keywords),
            EMPATHY_SATURATION,
        );
        let politeness_score = saturating_ratio(
            count_distinct(&lowered, &self.politeness_markers),
            POLITENESS_SATURATION,
        );

        Ok(FeatureBundle {
            tokens,
            entities,
            sentiment,
            empathy_score,
            politeness_score,
            response_time_ms: estimate_response_time(index),
        })
    }
}

/// `min(count / divisor, 1.0)`, the saturation rule shared by the
/// empathy and politeness signals.
fn saturating_ratio(count: usize, divisor: f64) -> f64 {
    (count as f64 / divisor).min(1.0)
}

/// Placeholder response-time estimate keyed off message position.
///
/// The transcript format carries no timestamps, so this alternates two
/// fixed values by index parity: an approximation, not a measurement.
/// When real timestamps become available, compute the delta here and
/// retire the parity rule.
fn estimate_response_time(index: usize) -> f64 {
    if index == 0 {
        FIRST_MESSAGE_RESPONSE_MS
    } else if index % 2 == 0 {
        EVEN_INDEX_RESPONSE_MS
    } else {
        ODD_INDEX_RESPONSE_MS
    }
}
