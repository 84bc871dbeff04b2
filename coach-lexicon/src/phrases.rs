//! Fixed scoring vocabularies.
//!
//! Ported from the original Python prototype's keyword sets. All
//! entries are stored pre-lowercased: matching always runs against
//! normalized text, and a mixed-case entry (the prototype carried a
//! literal "may I") can never match.

/// Keywords signalling empathy in a message.
pub const EMPATHY_KEYWORDS: &[&str] = &[
    "sorry",
    "apologize",
    "understand",
    "frustrating",
    "help",
    "assist",
    "resolve",
    "appreciate",
    "thank",
    "welcome",
];

/// Markers signalling politeness in a message.
pub const POLITENESS_MARKERS: &[&str] = &[
    "please",
    "thank you",
    "thanks",
    "would you",
    "could you",
    "may i",
    "appreciate",
    "kindly",
    "welcome",
];

/// Phrases that qualify an opening agent message as a greeting.
pub const GREETING_PHRASES: &[&str] = &[
    "hello",
    "hi",
    "good morning",
    "good afternoon",
    "greetings",
];

/// Phrases indicating the customer has stated a problem.
pub const PROBLEM_PHRASES: &[&str] = &[
    "issue",
    "problem",
    "trouble",
    "error",
    "not working",
    "help with",
];

/// Phrases indicating the agent has delivered a solution.
pub const SOLUTION_PHRASES: &[&str] = &[
    "fix",
    "resolve",
    "solution",
    "answer",
    "help you",
    "assist with",
];

/// Phrases that qualify a final agent message as a closing.
pub const CLOSING_PHRASES: &[&str] = &[
    "thank you",
    "thanks",
    "goodbye",
    "have a nice day",
    "welcome",
];

/// Materialize a static vocabulary as owned strings for a config struct.
pub fn to_owned_set(set: &[&str]) -> Vec<String> {
    set.iter().map(|s| s.to_string()).collect()
}
