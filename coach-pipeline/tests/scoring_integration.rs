use coach_lexicon::{
    CapabilityError, LexiconSentimentAnalyzer, SentimentAnalyzer, SentimentScores, Tokenizer,
    WhitespaceTokenizer,
};
use coach_pipeline::{
    ConfigError, Conversation, ConversationPipeline, Message, PipelineError, RubricConfig,
    RubricWeights,
};

// ---------------------------------------------------------------------------
// Test data fixtures
// ---------------------------------------------------------------------------

/// A textbook conversation that satisfies every phrase-based dimension.
fn textbook_conversation() -> Conversation {
    Conversation::new(
        "conv-textbook",
        vec![
            Message::agent("Hello! How can I help you?"),
            Message::customer("I have a problem with my internet."),
            Message::agent("I will help you fix that."),
            Message::agent("Thank you, have a nice day!"),
        ],
    )
}

/// A single customer message, no agent present.
fn customer_only_conversation() -> Conversation {
    Conversation::new("conv-customer-only", vec![Message::customer("hi")])
}

/// One agent message that is simultaneously first and last.
fn single_agent_conversation() -> Conversation {
    Conversation::new(
        "conv-single-agent",
        vec![Message::agent("Hello, I have an issue with my order.")],
    )
}

fn pipeline() -> ConversationPipeline {
    ConversationPipeline::with_defaults().unwrap()
}

const EPS: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Rubric scenario tests
// ---------------------------------------------------------------------------

#[test]
fn textbook_conversation_scores_full_marks() {
    let processed = pipeline().process(&textbook_conversation()).unwrap();
    let scores = &processed.quality_scores;

    assert_eq!(scores.greeting, 1.0, "opens with an agent greeting");
    assert_eq!(scores.problem_identification, 1.0, "customer states a problem");
    assert_eq!(scores.solution_delivery, 1.0, "agent offers a fix");
    assert_eq!(scores.closing, 1.0, "agent closes with thanks");
    assert!(
        (0.0..=1.0).contains(&scores.empathy),
        "empathy must stay in range, got {}",
        scores.empathy
    );

    // Each agent message carries exactly one empathy keyword
    // ("help", "help", "thank"), so the mean is 1/3.
    assert!(
        (scores.empathy - 1.0 / 3.0).abs() < EPS,
        "expected empathy 1/3, got {}",
        scores.empathy
    );

    // overall = 0.15 + 0.25 + 0.35 + 0.15 + 0.10/3 with reference weights.
    let expected_overall = 0.9 + 0.10 / 3.0;
    assert!(
        (scores.overall_score - expected_overall).abs() < EPS,
        "expected overall {}, got {}",
        expected_overall,
        scores.overall_score
    );
}

#[test]
fn customer_only_conversation_scores_agent_dimensions_zero() {
    let processed = pipeline().process(&customer_only_conversation()).unwrap();
    let scores = &processed.quality_scores;

    assert_eq!(scores.greeting, 0.0, "first message is not agent-sent");
    assert_eq!(scores.solution_delivery, 0.0, "no agent messages");
    assert_eq!(scores.closing, 0.0, "last message is not agent-sent");
    assert_eq!(scores.empathy, 0.0, "empathy floor with no agent messages");
    assert_eq!(scores.problem_identification, 0.0, "'hi' states no problem");
}

#[test]
fn problem_identification_does_not_require_agent_presence() {
    // Per-dimension rules apply uniformly: a customer-only transcript
    // can still identify a problem.
    let conversation = Conversation::new(
        "conv-problem-no-agent",
        vec![Message::customer("My account login is not working.")],
    );
    let processed = pipeline().process(&conversation).unwrap();
    assert_eq!(processed.quality_scores.problem_identification, 1.0);
    assert_eq!(processed.quality_scores.solution_delivery, 0.0);
}

#[test]
fn single_agent_message_is_both_first_and_last() {
    let processed = pipeline().process(&single_agent_conversation()).unwrap();
    let scores = &processed.quality_scores;

    assert_eq!(scores.greeting, 1.0, "contains 'hello'");
    assert_eq!(scores.closing, 0.0, "no closing phrase in the same message");
    assert_eq!(scores.solution_delivery, 0.0, "no solution phrase");
    assert_eq!(scores.problem_identification, 0.0, "no customer messages");
}

#[test]
fn empty_conversation_scores_all_zero() {
    let processed = pipeline()
        .process(&Conversation::new("conv-empty", vec![]))
        .unwrap();
    let scores = &processed.quality_scores;

    assert!(processed.messages.is_empty());
    assert_eq!(scores.greeting, 0.0);
    assert_eq!(scores.problem_identification, 0.0);
    assert_eq!(scores.solution_delivery, 0.0);
    assert_eq!(scores.closing, 0.0);
    assert_eq!(scores.empathy, 0.0);
    assert_eq!(scores.overall_score, 0.0);
}

#[test]
fn whitespace_only_text_does_not_crash_scoring() {
    let conversation = Conversation::new(
        "conv-degenerate",
        vec![
            Message::agent(""),
            Message::customer("   \t"),
            Message::agent("\n"),
        ],
    );
    let processed = pipeline().process(&conversation).unwrap();
    assert_eq!(processed.messages.len(), 3);
    for message in &processed.messages {
        assert!(message.tokens.is_empty());
        assert_eq!(message.empathy_score, 0.0);
        assert_eq!(message.politeness_score, 0.0);
    }
}

#[test]
fn all_scores_stay_in_range_across_fixtures() {
    let pipeline = pipeline();
    for conversation in [
        textbook_conversation(),
        customer_only_conversation(),
        single_agent_conversation(),
        Conversation::new("conv-empty", vec![]),
    ] {
        let scores = pipeline.process(&conversation).unwrap().quality_scores;
        for (name, value) in [
            ("greeting", scores.greeting),
            ("problem_identification", scores.problem_identification),
            ("solution_delivery", scores.solution_delivery),
            ("closing", scores.closing),
            ("empathy", scores.empathy),
            ("overall_score", scores.overall_score),
        ] {
            assert!(
                (0.0..=1.0).contains(&value),
                "{} out of range for {}: {}",
                name,
                conversation.conversation_id,
                value
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Determinism and ordering tests
// ---------------------------------------------------------------------------

#[test]
fn processing_is_idempotent() {
    let pipeline = pipeline();
    let conversation = textbook_conversation();
    let first = pipeline.process(&conversation).unwrap();
    let second = pipeline.process(&conversation).unwrap();
    assert_eq!(
        first, second,
        "identical input must yield bit-identical output"
    );
}

#[test]
fn swapping_first_two_messages_changes_greeting_target() {
    let pipeline = pipeline();
    let conversation = textbook_conversation();
    let greeting_before = pipeline
        .process(&conversation)
        .unwrap()
        .quality_scores
        .greeting;

    let mut swapped = conversation;
    swapped.messages.swap(0, 1);
    let greeting_after = pipeline.process(&swapped).unwrap().quality_scores.greeting;

    assert_eq!(greeting_before, 1.0);
    assert_eq!(
        greeting_after, 0.0,
        "greeting is evaluated on the first message only"
    );
}

#[test]
fn batch_processing_matches_sequential_and_preserves_order() {
    let pipeline = pipeline();
    let conversations = vec![
        textbook_conversation(),
        customer_only_conversation(),
        single_agent_conversation(),
        Conversation::new("conv-empty", vec![]),
    ];

    let sequential: Vec<_> = conversations
        .iter()
        .map(|c| pipeline.process(c).unwrap())
        .collect();
    let batch = pipeline.process_batch(&conversations).unwrap();

    assert_eq!(batch, sequential);
    let ids: Vec<_> = batch.iter().map(|p| p.conversation_id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["conv-textbook", "conv-customer-only", "conv-single-agent", "conv-empty"]
    );
}

// ---------------------------------------------------------------------------
// Feature extraction tests
// ---------------------------------------------------------------------------

#[test]
fn processed_messages_align_positionally_with_input() {
    let conversation = textbook_conversation();
    let processed = pipeline().process(&conversation).unwrap();
    assert_eq!(processed.messages.len(), conversation.messages.len());
    for (input, output) in conversation.messages.iter().zip(&processed.messages) {
        assert_eq!(input.sender, output.sender);
        assert_eq!(input.text, output.text);
    }
}

#[test]
fn response_time_alternates_by_index_parity() {
    let processed = pipeline().process(&textbook_conversation()).unwrap();
    let times: Vec<f64> = processed
        .messages
        .iter()
        .map(|m| m.response_time_ms)
        .collect();
    assert_eq!(times, vec![0.0, 10_000.0, 15_000.0, 10_000.0]);
}

#[test]
fn empathy_score_saturates_at_three_distinct_keywords() {
    let pipeline = pipeline();
    let cases = [
        ("I am sorry, I understand, let me help.", 1.0),
        ("Let me help with that.", 1.0 / 3.0),
        ("The sky is blue.", 0.0),
        // Five distinct keywords still cap at 1.0.
        ("Sorry, I understand, I can help, assist, and resolve this.", 1.0),
    ];
    for (text, expected) in cases {
        let conversation = Conversation::new("conv-empathy", vec![Message::agent(text)]);
        let processed = pipeline.process(&conversation).unwrap();
        let actual = processed.messages[0].empathy_score;
        assert!(
            (actual - expected).abs() < EPS,
            "empathy for '{}' expected {}, got {}",
            text,
            expected,
            actual
        );
    }
}

#[test]
fn politeness_score_saturates_at_two_distinct_markers() {
    let pipeline = pipeline();
    let cases = [
        ("Could you please check again?", 1.0),
        ("Please wait.", 0.5),
        ("Checking now.", 0.0),
    ];
    for (text, expected) in cases {
        let conversation = Conversation::new("conv-politeness", vec![Message::agent(text)]);
        let processed = pipeline.process(&conversation).unwrap();
        let actual = processed.messages[0].politeness_score;
        assert!(
            (actual - expected).abs() < EPS,
            "politeness for '{}' expected {}, got {}",
            text,
            expected,
            actual
        );
    }
}

#[test]
fn repeated_keyword_counts_once() {
    let conversation = Conversation::new(
        "conv-repeat",
        vec![Message::agent("help help help help")],
    );
    let processed = pipeline().process(&conversation).unwrap();
    assert!(
        (processed.messages[0].empathy_score - 1.0 / 3.0).abs() < EPS,
        "repeated occurrences of one keyword count once"
    );
}

// ---------------------------------------------------------------------------
// Configuration validation tests
// ---------------------------------------------------------------------------

fn pipeline_with_config(config: RubricConfig) -> Result<ConversationPipeline, PipelineError> {
    ConversationPipeline::new(
        config,
        Box::new(WhitespaceTokenizer),
        Box::new(LexiconSentimentAnalyzer),
    )
}

#[test]
fn weight_sum_violation_fails_fast_at_construction() {
    let config = RubricConfig {
        weights: RubricWeights {
            greeting: 0.5,
            problem_identification: 0.5,
            solution_delivery: 0.5,
            closing: 0.0,
            empathy: 0.0,
        },
        ..RubricConfig::default()
    };
    let err = pipeline_with_config(config).err().expect("must reject");
    assert!(
        matches!(err, PipelineError::Config(ConfigError::WeightSum { .. })),
        "unexpected error: {err}"
    );
}

#[test]
fn negative_weight_fails_fast_at_construction() {
    let config = RubricConfig {
        weights: RubricWeights {
            greeting: -0.1,
            problem_identification: 0.35,
            solution_delivery: 0.35,
            closing: 0.25,
            empathy: 0.15,
        },
        ..RubricConfig::default()
    };
    let err = pipeline_with_config(config).err().expect("must reject");
    assert!(matches!(
        err,
        PipelineError::Config(ConfigError::NegativeWeight { .. })
    ));
}

#[test]
fn empty_phrase_set_fails_fast_at_construction() {
    let config = RubricConfig {
        closing_phrases: vec![],
        ..RubricConfig::default()
    };
    let err = pipeline_with_config(config).err().expect("must reject");
    assert!(matches!(
        err,
        PipelineError::Config(ConfigError::EmptyPhraseSet { set: "closing_phrases" })
    ));
}

#[test]
fn reference_weights_pass_validation() {
    assert!((RubricWeights::default().sum() - 1.0).abs() < EPS);
    assert!(RubricConfig::default().validate().is_ok());
}

#[test]
fn custom_weights_shift_the_overall_score() {
    // All weight on solution delivery: the textbook conversation
    // scores a perfect 1.0 overall.
    let config = RubricConfig {
        weights: RubricWeights {
            greeting: 0.0,
            problem_identification: 0.0,
            solution_delivery: 1.0,
            closing: 0.0,
            empathy: 0.0,
        },
        ..RubricConfig::default()
    };
    let pipeline = pipeline_with_config(config).unwrap();
    let processed = pipeline.process(&textbook_conversation()).unwrap();
    assert!((processed.quality_scores.overall_score - 1.0).abs() < EPS);
}

#[test]
fn rubric_config_loads_from_json() {
    let raw = r#"{
        "weights": {
            "greeting": 0.2,
            "problem_identification": 0.2,
            "solution_delivery": 0.2,
            "closing": 0.2,
            "empathy": 0.2
        },
        "greeting_phrases": ["hello"],
        "problem_phrases": ["problem"],
        "solution_phrases": ["fix"],
        "closing_phrases": ["goodbye"],
        "empathy_keywords": ["sorry"],
        "politeness_markers": ["please"]
    }"#;
    let config: RubricConfig = serde_json::from_str(raw).unwrap();
    assert!(config.validate().is_ok());
    assert!(pipeline_with_config(config).is_ok());
}

#[test]
fn mixed_case_config_vocabulary_is_normalized() {
    let config = RubricConfig {
        greeting_phrases: vec!["HELLO".to_string()],
        ..RubricConfig::default()
    };
    let pipeline = pipeline_with_config(config).unwrap();
    let processed = pipeline
        .process(&Conversation::new(
            "conv-case",
            vec![Message::agent("hello there")],
        ))
        .unwrap();
    assert_eq!(processed.quality_scores.greeting, 1.0);
}

// ---------------------------------------------------------------------------
// Capability failure tests
// ---------------------------------------------------------------------------

/// Tokenizer standing in for an unreachable NLP service.
struct UnreachableTokenizer;

impl Tokenizer for UnreachableTokenizer {
    fn tokenize(&self, _text: &str) -> Result<Vec<String>, CapabilityError> {
        Err(CapabilityError::Unavailable {
            capability: "tokenizer".to_string(),
            reason: "connection refused".to_string(),
        })
    }
}

/// Analyzer standing in for a crashed sentiment model.
struct UnreachableAnalyzer;

impl SentimentAnalyzer for UnreachableAnalyzer {
    fn analyze(&self, _text: &str) -> Result<SentimentScores, CapabilityError> {
        Err(CapabilityError::Unavailable {
            capability: "sentiment".to_string(),
            reason: "model not loaded".to_string(),
        })
    }
}

#[test]
fn tokenizer_failure_propagates() {
    let pipeline = ConversationPipeline::new(
        RubricConfig::default(),
        Box::new(UnreachableTokenizer),
        Box::new(LexiconSentimentAnalyzer),
    )
    .unwrap();
    let err = pipeline
        .process(&customer_only_conversation())
        .err()
        .expect("capability failure must propagate");
    assert!(matches!(err, PipelineError::Capability(_)));
}

#[test]
fn analyzer_failure_propagates() {
    let pipeline = ConversationPipeline::new(
        RubricConfig::default(),
        Box::new(WhitespaceTokenizer),
        Box::new(UnreachableAnalyzer),
    )
    .unwrap();
    let err = pipeline
        .process(&customer_only_conversation())
        .err()
        .expect("capability failure must propagate");
    assert!(matches!(err, PipelineError::Capability(_)));
}

#[test]
fn capability_failure_does_not_occur_for_empty_conversation() {
    // No messages, no capability calls: even a broken backend cannot
    // fail an empty snapshot.
    let pipeline = ConversationPipeline::new(
        RubricConfig::default(),
        Box::new(UnreachableTokenizer),
        Box::new(UnreachableAnalyzer),
    )
    .unwrap();
    assert!(pipeline
        .process(&Conversation::new("conv-empty", vec![]))
        .is_ok());
}
