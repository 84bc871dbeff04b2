use std::fmt;

use serde::{Deserialize, Serialize};

use coach_lexicon::{Entity, SentimentScores};

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Who sent a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Agent,
    Customer,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::Agent => write!(f, "agent"),
            Sender::Customer => write!(f, "customer"),
        }
    }
}

/// One turn in a conversation.
///
/// A message's position in the conversation is its index in the
/// message list; first/last checks and the response-time heuristic
/// both key off that order. Empty or whitespace-only text is a valid
/// degenerate case and never fails extraction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
        }
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(Sender::Agent, text)
    }

    pub fn customer(text: impl Into<String>) -> Self {
        Self::new(Sender::Customer, text)
    }
}

/// Sentinel identifier for transcripts that arrive without one.
pub const UNKNOWN_CONVERSATION_ID: &str = "unknown";

fn unknown_conversation_id() -> String {
    UNKNOWN_CONVERSATION_ID.to_string()
}

/// An ordered support-chat transcript snapshot.
///
/// Insertion order is semantically meaningful. The pipeline never
/// mutates a conversation; every `process` call recomputes features
/// and scores from scratch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(default = "unknown_conversation_id")]
    pub conversation_id: String,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new(conversation_id: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            messages,
        }
    }
}

// ---------------------------------------------------------------------------
// Derived types
// ---------------------------------------------------------------------------

/// Per-message linguistic features, immutable once computed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureBundle {
    /// Ordered token sequence from the injected tokenizer.
    pub tokens: Vec<String>,
    /// Named entities, supplementary output only.
    pub entities: Vec<Entity>,
    /// Sentiment from the injected analyzer.
    pub sentiment: SentimentScores,
    /// Distinct empathy keywords / 3, capped at 1.0.
    pub empathy_score: f64,
    /// Distinct politeness markers / 2, capped at 1.0.
    pub politeness_score: f64,
    /// Index-parity placeholder standing in for real timestamp deltas.
    pub response_time_ms: f64,
}

/// The rubric dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Greeting,
    ProblemIdentification,
    SolutionDelivery,
    Closing,
    Empathy,
}

impl Dimension {
    /// All dimensions, in rubric order.
    pub const ALL: [Dimension; 5] = [
        Dimension::Greeting,
        Dimension::ProblemIdentification,
        Dimension::SolutionDelivery,
        Dimension::Closing,
        Dimension::Empathy,
    ];
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Greeting => write!(f, "greeting"),
            Dimension::ProblemIdentification => write!(f, "problem_identification"),
            Dimension::SolutionDelivery => write!(f, "solution_delivery"),
            Dimension::Closing => write!(f, "closing"),
            Dimension::Empathy => write!(f, "empathy"),
        }
    }
}

/// Rubric result for one conversation. Every field is in [0.0, 1.0]
/// regardless of input; an empty conversation scores all zeros.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityScores {
    pub greeting: f64,
    pub problem_identification: f64,
    pub solution_delivery: f64,
    pub closing: f64,
    pub empathy: f64,
    /// Weighted sum of the five sub-scores.
    pub overall_score: f64,
}

impl QualityScores {
    /// Read a sub-score by dimension.
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Greeting => self.greeting,
            Dimension::ProblemIdentification => self.problem_identification,
            Dimension::SolutionDelivery => self.solution_delivery,
            Dimension::Closing => self.closing,
            Dimension::Empathy => self.empathy,
        }
    }

    pub(crate) fn set(&mut self, dimension: Dimension, value: f64) {
        match dimension {
            Dimension::Greeting => self.greeting = value,
            Dimension::ProblemIdentification => self.problem_identification = value,
            Dimension::SolutionDelivery => self.solution_delivery = value,
            Dimension::Closing => self.closing = value,
            Dimension::Empathy => self.empathy = value,
        }
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// A message joined with its feature bundle: one entry of the
/// interchange document consumed by downstream collaborators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessedMessage {
    pub sender: Sender,
    pub text: String,
    pub tokens: Vec<String>,
    pub entities: Vec<Entity>,
    pub sentiment: SentimentScores,
    pub empathy_score: f64,
    pub politeness_score: f64,
    pub response_time_ms: f64,
}

impl ProcessedMessage {
    pub fn from_parts(message: &Message, features: FeatureBundle) -> Self {
        Self {
            sender: message.sender,
            text: message.text.clone(),
            tokens: features.tokens,
            entities: features.entities,
            sentiment: features.sentiment,
            empathy_score: features.empathy_score,
            politeness_score: features.politeness_score,
            response_time_ms: features.response_time_ms,
        }
    }
}

/// The pipeline's final product: the scored conversation, serializable
/// for persistence, suggestion generation, and classifier training.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessedConversation {
    pub conversation_id: String,
    pub messages: Vec<ProcessedMessage>,
    pub quality_scores: QualityScores,
}
