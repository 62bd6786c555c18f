//! # trivia-engine
//!
//! The question pipeline: generate a schema-constrained question from a
//! language model, optionally pass it through the evaluate/optimize quality
//! gate, and check/index question embeddings for duplicate detection.
//!
//! Every step takes its provider as an argument (trait from
//! `trivia-providers`), so the whole pipeline runs against scripted stubs in
//! tests. Steps within one request execute strictly sequentially; each
//! depends on the previous step's output.

pub mod error;
pub mod generator;
pub mod prompts;
pub mod quality;
pub mod similarity;

pub use error::EngineError;
pub use generator::generate_question;
pub use quality::{GateOutcome, refine_question};
pub use similarity::{SimilarityReport, check_similarity, index_question};
