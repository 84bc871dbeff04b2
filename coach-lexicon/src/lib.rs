//! Vocabularies, matching primitives, thresholds, and the injected
//! NLP capability seams shared by the scoring pipeline and the bridge.

pub mod capability;
pub mod matching;
pub mod phrases;
pub mod sentiment;
pub mod thresholds;
pub mod tokenize;

pub use capability::{CapabilityError, Entity, SentimentAnalyzer, SentimentScores, Tokenizer};
pub use matching::{contains_any, count_distinct, normalize};
pub use sentiment::LexiconSentimentAnalyzer;
pub use tokenize::WhitespaceTokenizer;
