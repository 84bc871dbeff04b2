//! Suggestion context rendering.
//!
//! The coaching-suggestion collaborator prompts an LLM with the recent
//! conversation as sender-tagged plain text. It only needs that text;
//! scoring internals never leak into the prompt.

use coach_lexicon::thresholds::{CONTEXT_HISTORY_LIMIT, CONTEXT_MAX_TOKENS};
use coach_pipeline::{Conversation, Sender};

/// Rolling window over the tail of a conversation.
#[derive(Clone, Copy, Debug)]
pub struct ContextWindow {
    /// Messages retained from the end of the conversation.
    pub history_limit: usize,
    /// Whitespace-token cap applied after rendering; the *last*
    /// tokens are kept, since the newest turns matter most.
    pub max_tokens: usize,
}

impl Default for ContextWindow {
    fn default() -> Self {
        Self {
            history_limit: CONTEXT_HISTORY_LIMIT,
            max_tokens: CONTEXT_MAX_TOKENS,
        }
    }
}

impl ContextWindow {
    /// Render the window as prompt-ready text: one line per message,
    /// prefixed "Agent: " or "Customer: ", newline-joined, truncated
    /// to the trailing `max_tokens` whitespace tokens.
    pub fn render(&self, conversation: &Conversation) -> String {
        let start = conversation.messages.len().saturating_sub(self.history_limit);
        let mut lines = Vec::with_capacity(conversation.messages.len() - start);
        for message in &conversation.messages[start..] {
            let prefix = match message.sender {
                Sender::Agent => "Agent: ",
                Sender::Customer => "Customer: ",
            };
            lines.push(format!("{}{}", prefix, message.text));
        }
        truncate_to_last_tokens(&lines.join("\n"), self.max_tokens)
    }
}

/// Keep the last `max_tokens` whitespace tokens of a rendered context.
/// Token-approximate truncation, matching the prompt budget the
/// suggestion collaborator enforces.
fn truncate_to_last_tokens(text: &str, max_tokens: usize) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() <= max_tokens {
        return text.to_string();
    }
    tokens[tokens.len() - max_tokens..].join(" ")
}
