//! The conversation scoring pipeline.
//!
//! Pipeline flow:
//! 1. `FeatureExtractor` maps over every message positionally
//! 2. `RubricScorer` folds messages + feature bundles into sub-scores
//!    and the weighted overall score
//! 3. The processed conversation is assembled for downstream consumers
//!
//! Control flow is one-directional and synchronous; no stage calls
//! back into an earlier one. `process` is a pure function of its
//! input: no shared mutable state, no caching between calls, so
//! repeated calls on the same snapshot are bit-identical and parallel
//! calls on independent conversations need no synchronization.

use rayon::prelude::*;

use coach_lexicon::{LexiconSentimentAnalyzer, SentimentAnalyzer, Tokenizer, WhitespaceTokenizer};

use crate::config::RubricConfig;
use crate::error::PipelineResult;
use crate::extractor::FeatureExtractor;
use crate::scorer::RubricScorer;
use crate::types::{Conversation, FeatureBundle, ProcessedConversation, ProcessedMessage};

pub struct ConversationPipeline {
    extractor: FeatureExtractor,
    scorer: RubricScorer,
}

impl ConversationPipeline {
    /// Create a pipeline with explicit NLP backends. The config is
    /// validated here; construction is the fail-fast point for a bad
    /// weight table or an empty vocabulary.
    pub fn new(
        config: RubricConfig,
        tokenizer: Box<dyn Tokenizer>,
        analyzer: Box<dyn SentimentAnalyzer>,
    ) -> PipelineResult<Self> {
        let scorer = RubricScorer::new(config.clone())?;
        let config = config.normalized();
        let extractor = FeatureExtractor::new(
            tokenizer,
            analyzer,
            config.empathy_keywords,
            config.politeness_markers,
        );
        Ok(Self { extractor, scorer })
    }

    /// Create a pipeline with the reference backends and default
    /// rubric. This is the primary constructor for offline use.
    pub fn with_defaults() -> PipelineResult<Self> {
        Self::new(
            RubricConfig::default(),
            Box::new(WhitespaceTokenizer),
            Box::new(LexiconSentimentAnalyzer),
        )
    }

    /// Score one conversation snapshot.
    ///
    /// An empty conversation is not an error: it yields an empty
    /// message list and all-zero quality scores.
    pub fn process(&self, conversation: &Conversation) -> PipelineResult<ProcessedConversation> {
        let features: Vec<FeatureBundle> = conversation
            .messages
            .iter()
            .enumerate()
            .map(|(index, message)| self.extractor.extract(index, &message.text))
            .collect::<Result<_, _>>()?;

        let quality_scores = self.scorer.score(&conversation.messages, &features);
        log::debug!(
            "conversation_id={} scored overall={:.3} over {} messages",
            conversation.conversation_id,
            quality_scores.overall_score,
            conversation.messages.len()
        );

        let messages = conversation
            .messages
            .iter()
            .zip(features)
            .map(|(message, bundle)| ProcessedMessage::from_parts(message, bundle))
            .collect();

        Ok(ProcessedConversation {
            conversation_id: conversation.conversation_id.clone(),
            messages,
            quality_scores,
        })
    }

    /// Score a batch of independent conversations in parallel, one
    /// task per conversation. Output order matches input order, and
    /// each result is identical to what `process` would return.
    pub fn process_batch(
        &self,
        conversations: &[Conversation],
    ) -> PipelineResult<Vec<ProcessedConversation>> {
        conversations
            .par_iter()
            .map(|conversation| self.process(conversation))
            .collect()
    }
}
