//! Pipeline behavior against scripted stub providers — no network involved.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use pretty_assertions::assert_eq;

use trivia_core::{Language, TriviaQuestion};
use trivia_engine::{
    GateOutcome, check_similarity, generate_question, index_question, refine_question,
};
use trivia_providers::{
    CompletionProvider, EmbeddingProvider, ProviderError, RetryConfig, SimilarQuestion,
    StructuredRequest, VectorStore,
};

/// Completion stub that replays a fixed script of responses and records the
/// schema name of every request it sees.
struct ScriptedProvider {
    script: Mutex<VecDeque<Result<serde_json::Value, String>>>,
    seen: Mutex<Vec<&'static str>>,
}

impl ScriptedProvider {
    fn new(script: Vec<Result<serde_json::Value, String>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    fn seen_schemas(&self) -> Vec<&'static str> {
        self.seen.lock().unwrap().clone()
    }
}

impl CompletionProvider for ScriptedProvider {
    async fn complete_structured(
        &self,
        request: &StructuredRequest,
    ) -> Result<serde_json::Value, ProviderError> {
        self.seen.lock().unwrap().push(request.schema_name);
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .expect("script exhausted: unexpected provider call");
        next.map_err(ProviderError::Http)
    }
}

struct StubEmbedder;

impl EmbeddingProvider for StubEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, ProviderError> {
        Ok(vec![0.1, 0.2, 0.3])
    }
}

struct StubStore {
    matches: Vec<SimilarQuestion>,
    inserts: AtomicU32,
}

impl StubStore {
    fn with_matches(matches: Vec<SimilarQuestion>) -> Self {
        Self {
            matches,
            inserts: AtomicU32::new(0),
        }
    }
}

impl VectorStore for StubStore {
    async fn insert(&self, _question: &str, _embedding: &[f32]) -> Result<(), ProviderError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn match_similar(
        &self,
        _embedding: &[f32],
        _threshold: f32,
        _count: u32,
    ) -> Result<Vec<SimilarQuestion>, ProviderError> {
        Ok(self.matches.clone())
    }
}

fn question_json() -> serde_json::Value {
    serde_json::json!({
        "question": "Which planet is known as the Red Planet?",
        "options": ["Mars", "Venus", "Jupiter", "Mercury"],
        "correctAnswer": 0,
        "explanation": "Iron oxide on the surface gives Mars its color.",
        "hint": "Named after the Roman god of war.",
    })
}

fn question() -> TriviaQuestion {
    serde_json::from_value(question_json()).unwrap()
}

fn evaluation_json(verdict: &str) -> serde_json::Value {
    serde_json::json!({
        "clarity": 8,
        "difficulty": 6,
        "uniqueness": if verdict == "pass" { 9 } else { 4 },
        "explanationQuality": 8,
        "hintQuality": 7,
        "overallVerdict": verdict,
    })
}

// Real 1s delay; these tests run under a paused tokio clock so sleeps
// auto-advance.
fn retry_cfg() -> RetryConfig {
    RetryConfig {
        max_attempts: 3,
        delay: Duration::from_secs(1),
    }
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn generates_a_valid_question_for_a_fresh_topic() {
    let provider = ScriptedProvider::new(vec![Ok(question_json())]);

    let generated = generate_question(&provider, &retry_cfg(), "astronomy", &[], Language::En)
        .await
        .expect("generation succeeds");

    assert!(!generated.question.is_empty());
    assert_eq!(generated.options.len(), 4);
    let mut options = generated.options.clone();
    options.sort();
    options.dedup();
    assert_eq!(options.len(), 4, "options must be distinct");
    assert!(generated.correct_answer < 4);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn two_failures_then_success_returns_the_success() {
    let provider = ScriptedProvider::new(vec![
        Err("connection reset".into()),
        Err("502 bad gateway".into()),
        Ok(question_json()),
    ]);

    let generated = generate_question(&provider, &retry_cfg(), "astronomy", &[], Language::En)
        .await
        .expect("third attempt succeeds");

    assert_eq!(generated, question());
    assert_eq!(provider.calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn three_failures_exhaust_the_budget() {
    let provider = ScriptedProvider::new(vec![
        Err("down".into()),
        Err("down".into()),
        Err("down".into()),
    ]);

    let result = generate_question(&provider, &retry_cfg(), "astronomy", &[], Language::En).await;

    assert!(result.is_err());
    assert_eq!(provider.calls(), 3, "exactly 3 attempts, not more or fewer");
}

#[tokio::test(start_paused = true)]
async fn schema_invalid_body_consumes_an_attempt_like_any_failure() {
    let provider = ScriptedProvider::new(vec![
        Ok(serde_json::json!({ "question": "broken" })),
        Ok(question_json()),
        Ok(question_json()),
    ]);

    let generated = generate_question(&provider, &retry_cfg(), "astronomy", &[], Language::En)
        .await
        .expect("second attempt succeeds");

    assert_eq!(generated, question());
    assert_eq!(provider.calls(), 2);
}

// ---------------------------------------------------------------------------
// Quality gate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn first_cycle_pass_returns_question_unchanged_without_optimizer() {
    let provider = ScriptedProvider::new(vec![Ok(evaluation_json("pass"))]);

    let (refined, outcome) = refine_question(&provider, question(), &[], 2).await;

    assert_eq!(outcome, GateOutcome::Accepted);
    assert_eq!(refined, question(), "passing question must come back as-is");
    assert_eq!(provider.seen_schemas(), vec!["question_evaluation"]);
}

#[tokio::test]
async fn gate_never_exceeds_two_optimize_cycles() {
    // Evaluator fails every time it is asked; the optimizer always answers.
    let provider = ScriptedProvider::new(vec![
        Ok(evaluation_json("fail")),
        Ok(question_json()),
        Ok(evaluation_json("fail")),
        Ok(question_json()),
    ]);

    let (_, outcome) = refine_question(&provider, question(), &[], 2).await;

    assert_eq!(outcome, GateOutcome::AcceptedUnverified);
    assert_eq!(
        provider.seen_schemas(),
        vec![
            "question_evaluation",
            "trivia_question",
            "question_evaluation",
            "trivia_question",
        ],
        "two evaluate/optimize cycles and then stop"
    );
}

#[tokio::test]
async fn second_cycle_pass_accepts_the_revision() {
    let mut revised = question_json();
    revised["hint"] = serde_json::json!("It appears red to the naked eye.");

    let provider = ScriptedProvider::new(vec![
        Ok(evaluation_json("fail")),
        Ok(revised.clone()),
        Ok(evaluation_json("pass")),
    ]);

    let (refined, outcome) = refine_question(&provider, question(), &[], 2).await;

    assert_eq!(outcome, GateOutcome::Accepted);
    assert_eq!(refined.hint, "It appears red to the naked eye.");
}

#[tokio::test]
async fn unusable_evaluator_output_degrades_to_the_input_question() {
    let provider = ScriptedProvider::new(vec![Ok(serde_json::json!({ "verdict": "maybe" }))]);

    let (refined, outcome) = refine_question(&provider, question(), &[], 2).await;

    assert_eq!(outcome, GateOutcome::AcceptedUnverified);
    assert_eq!(refined, question());
}

#[tokio::test]
async fn unusable_optimizer_output_degrades_to_the_last_good_question() {
    let provider = ScriptedProvider::new(vec![
        Ok(evaluation_json("fail")),
        Ok(serde_json::json!({ "options": ["only", "two"] })),
    ]);

    let (refined, outcome) = refine_question(&provider, question(), &[], 2).await;

    assert_eq!(outcome, GateOutcome::AcceptedUnverified);
    assert_eq!(refined, question());
}

#[tokio::test]
async fn failed_evaluator_call_degrades_instead_of_erroring() {
    let provider = ScriptedProvider::new(vec![Err("evaluator down".into())]);

    let (refined, outcome) = refine_question(&provider, question(), &[], 2).await;

    assert_eq!(outcome, GateOutcome::AcceptedUnverified);
    assert_eq!(refined, question());
}

// ---------------------------------------------------------------------------
// Similarity
// ---------------------------------------------------------------------------

#[tokio::test]
async fn no_matches_means_not_similar() {
    let store = StubStore::with_matches(vec![]);

    let report = check_similarity(&StubEmbedder, &store, "Is water wet?", 0.8, 5)
        .await
        .expect("lookup succeeds");

    assert!(!report.is_similar);
    assert!(report.similar_questions.is_empty());
}

#[tokio::test]
async fn any_match_means_similar() {
    let store = StubStore::with_matches(vec![SimilarQuestion {
        question: "Is water wet?".into(),
        similarity: 0.93,
    }]);

    let report = check_similarity(&StubEmbedder, &store, "Would water be wet?", 0.8, 5)
        .await
        .expect("lookup succeeds");

    assert!(report.is_similar);
    assert_eq!(report.similar_questions.len(), 1);
}

#[tokio::test]
async fn indexing_stores_one_embedding() {
    let store = StubStore::with_matches(vec![]);

    index_question(&StubEmbedder, &store, "Which planet is red?")
        .await
        .expect("insert succeeds");

    assert_eq!(store.inserts.load(Ordering::SeqCst), 1);
}
