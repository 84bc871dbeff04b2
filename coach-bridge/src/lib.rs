//! Bridge: the interface layer between the scoring core and its
//! external collaborators.
//!
//! The core produces `ProcessedConversation` values; this crate owns
//! every adapter a collaborator needs to consume them or to feed the
//! core:
//! - strict JSON transcript parsing (missing fields are rejected at
//!   parse time, never silently defaulted)
//! - interchange serialization with the stable field-name contract
//! - flat feature vectors + labels for classifier training
//! - sender-tagged context windows for suggestion prompting
//!
//! The collaborators themselves (LLM prompting, model training, UI,
//! persistence) live outside this repository.

pub mod context;
pub mod error;
pub mod features;
pub mod transcript;

pub use context::ContextWindow;
pub use error::{BridgeError, BridgeResult};
pub use features::{feature_vector, message_quality, training_rows, TrainingRow, FEATURE_DIM};
pub use transcript::{load_transcripts, load_transcripts_file, parse_conversation, to_json};
