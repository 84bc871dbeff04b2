//! Reference tokenizer backend.

use crate::capability::{CapabilityError, Tokenizer};

/// Whitespace tokenizer with punctuation splitting.
///
/// Splits on whitespace, then peels leading and trailing punctuation
/// off each chunk into tokens of their own, so "Hello!" becomes
/// ["Hello", "!"]. A deterministic stand-in for a full linguistic
/// tokenizer; swap in a real NLP backend via the `Tokenizer` trait
/// when token boundaries matter beyond counting.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, CapabilityError> {
        let mut tokens = Vec::new();
        for chunk in text.split_whitespace() {
            split_chunk(chunk, &mut tokens);
        }
        Ok(tokens)
    }
}

/// Split one whitespace-delimited chunk into word and punctuation tokens.
fn split_chunk(chunk: &str, tokens: &mut Vec<String>) {
    let core_start = chunk
        .find(|c: char| !is_splittable_punct(c))
        .unwrap_or(chunk.len());
    let (leading, rest) = chunk.split_at(core_start);
    for c in leading.chars() {
        tokens.push(c.to_string());
    }

    let core_end = rest
        .rfind(|c: char| !is_splittable_punct(c))
        .map(|i| i + rest[i..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(0);
    let (core, trailing) = rest.split_at(core_end);
    if !core.is_empty() {
        tokens.push(core.to_string());
    }
    for c in trailing.chars() {
        tokens.push(c.to_string());
    }
}

fn is_splittable_punct(c: char) -> bool {
    // Word-internal characters like apostrophes and hyphens are kept;
    // only edge punctuation becomes its own token.
    c.is_ascii_punctuation() && c != '\'' && c != '-'
}
