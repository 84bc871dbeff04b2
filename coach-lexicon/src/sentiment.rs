//! Reference sentiment backend.
//!
//! A small fixed valence lexicon scored the way VADER scores its own:
//! word valences in [-4.0, 4.0] are summed and squashed into a
//! compound score via `x / sqrt(x² + 15)`. Deterministic stand-in for
//! the lexicon analyzers the original system injected; production
//! deployments swap in a real backend via `SentimentAnalyzer`.
//!
//! # Outputs
//!
//! - `compound`: squashed valence sum, in [-1.0, 1.0]
//! - `polarity`: mean valence of matched words, scaled to [-1.0, 1.0]
//! - `subjectivity`: fraction of words carrying any valence, in [0.0, 1.0]

use crate::capability::{CapabilityError, SentimentAnalyzer, SentimentScores};

/// VADER normalization constant.
const SQUASH_ALPHA: f64 = 15.0;

/// Maximum word valence magnitude, used to scale polarity into [-1, 1].
const MAX_VALENCE: f64 = 4.0;

/// Word valences, VADER-style. Small on purpose: enough signal for
/// support-chat phrasing without pretending to be a full lexicon.
const VALENCES: &[(&str, f64)] = &[
    ("appreciate", 2.0),
    ("awesome", 3.1),
    ("bad", -2.5),
    ("broken", -2.1),
    ("delighted", 2.9),
    ("excellent", 2.7),
    ("fail", -2.5),
    ("failed", -2.5),
    ("frustrated", -2.4),
    ("frustrating", -2.4),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("hate", -2.7),
    ("helpful", 1.8),
    ("issue", -1.3),
    ("love", 3.2),
    ("nice", 1.8),
    ("perfect", 2.7),
    ("pleased", 2.2),
    ("problem", -1.7),
    ("resolved", 1.6),
    ("sorry", -0.3),
    ("terrible", -3.1),
    ("thank", 1.9),
    ("thanks", 1.9),
    ("unhappy", -1.8),
    ("upset", -2.3),
    ("welcome", 1.5),
    ("wonderful", 2.7),
    ("worst", -3.1),
    ("wrong", -2.1),
];

/// Lexicon-based sentiment analyzer over the fixed valence table.
#[derive(Clone, Copy, Debug, Default)]
pub struct LexiconSentimentAnalyzer;

impl LexiconSentimentAnalyzer {
    fn valence_of(word: &str) -> Option<f64> {
        VALENCES.iter().find(|(w, _)| *w == word).map(|(_, v)| *v)
    }
}

impl SentimentAnalyzer for LexiconSentimentAnalyzer {
    fn analyze(&self, text: &str) -> Result<SentimentScores, CapabilityError> {
        let words: Vec<String> = text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|w| !w.is_empty())
            .map(|w| w.trim_matches('\'').to_string())
            .collect();

        if words.is_empty() {
            return Ok(SentimentScores::neutral());
        }

        let mut sum = 0.0;
        let mut matched = 0usize;
        for word in &words {
            if let Some(v) = Self::valence_of(word) {
                sum += v;
                matched += 1;
            }
        }

        let compound = sum / (sum * sum + SQUASH_ALPHA).sqrt();
        let polarity = if matched > 0 {
            (sum / matched as f64 / MAX_VALENCE).clamp(-1.0, 1.0)
        } else {
            0.0
        };
        let subjectivity = matched as f64 / words.len() as f64;

        Ok(SentimentScores {
            compound,
            polarity: Some(polarity),
            subjectivity: Some(subjectivity),
        })
    }
}
