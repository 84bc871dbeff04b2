//! Transcript parsing and interchange serialization.
//!
//! Collaborators exchange conversations as JSON documents. Parsing is
//! strict: a message missing `sender` or `text`, or carrying a sender
//! tag other than "agent"/"customer", is rejected at parse time rather
//! than silently defaulted. The one permitted absence is
//! `conversation_id`, which falls back to the "unknown" sentinel the
//! original dataset used.
//!
//! Expected document shape:
//!   { "conversation_id": "...",
//!     "messages": [ { "sender": "agent", "text": "..." }, ... ] }

use std::io::Read;

use coach_pipeline::{Conversation, ProcessedConversation};

use crate::error::{BridgeError, BridgeResult};

/// Parse a single conversation document.
pub fn parse_conversation(raw_json: &str) -> BridgeResult<Conversation> {
    serde_json::from_str(raw_json).map_err(|e| BridgeError::MalformedTranscript {
        reason: e.to_string(),
    })
}

/// Load a JSON array of conversations from a reader.
///
/// Each element is validated independently so a parse error names the
/// offending conversation's position in the array.
pub fn load_transcripts<R: Read>(reader: R) -> BridgeResult<Vec<Conversation>> {
    let documents: Vec<serde_json::Value> = serde_json::from_reader(reader)?;

    let mut conversations = Vec::with_capacity(documents.len());
    for (index, document) in documents.into_iter().enumerate() {
        let conversation: Conversation = serde_json::from_value(document).map_err(|e| {
            BridgeError::MalformedTranscriptAt {
                index,
                reason: e.to_string(),
            }
        })?;
        conversations.push(conversation);
    }

    log::info!("loaded {} conversations", conversations.len());
    Ok(conversations)
}

/// Load a JSON array of conversations from a file path.
pub fn load_transcripts_file(path: &str) -> BridgeResult<Vec<Conversation>> {
    let file = std::fs::File::open(path).map_err(|e| BridgeError::Io {
        path: path.to_string(),
        source: e,
    })?;
    load_transcripts(file)
}

/// Serialize a processed conversation to the interchange document
/// consumed by persistence, suggestion, and training collaborators.
pub fn to_json(processed: &ProcessedConversation) -> BridgeResult<String> {
    Ok(serde_json::to_string(processed)?)
}

/// Pretty-printed variant of [`to_json`], for files meant to be read
/// by humans (the original pipeline wrote its processed dataset
/// indented).
pub fn to_json_pretty(processed: &ProcessedConversation) -> BridgeResult<String> {
    Ok(serde_json::to_string_pretty(processed)?)
}
