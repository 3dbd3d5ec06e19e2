/// This crate is a resume screening engine built on a two-document TF-IDF vector space.
pub mod config;
pub mod error;
pub mod logging;
pub mod screening;
pub mod utils;
pub mod vectorizer;

/// Batch Screener
/// The top-level struct of this crate. It screens a batch of candidate documents
/// against a primary job description and a set of role references.
///
/// For every candidate it produces:
/// - A similarity score in `[0, 100]`
/// - Matched and missing reference terms
/// - A coarse experience level
/// - Rule-based advice
/// - A bias audit of the raw text
/// - Per-role scores and the best-fit role
///
/// and aggregates recruiter analytics over the batch.
///
/// Candidates are analyzed independently, in parallel on the rayon pool
/// unless disabled in `ScreeningConfig`.
pub use screening::pipeline::{BatchScreener, ReferenceSet};

/// Screening Records
/// Value objects flowing through and out of the batch.
/// All of them serialize with serde (JSON, CBOR).
pub use screening::model::{
    AnalyticsSummary, BatchReport, BiasAudit, BiasFinding, CandidateDocument, CandidateResult,
    ExperienceLevel, MatchExplanation, ReferenceDocument, RoleScores,
};

/// Screening Configuration
/// Deserializable from JSON; every field has a default.
pub use config::ScreeningConfig;

/// Error type of the crate
/// Only configuration problems are errors. Empty or unreadable text degrades
/// to neutral results instead.
pub use error::{Result, ScreenError};

/// Text Normalizer
/// Redacts personal attributes and reduces raw text to a canonical,
/// space-joined lemma stream. Normalization is idempotent.
///
/// Stop words and the lemma table come from an injected `LinguisticResources`.
pub use utils::{linguistic::LinguisticResources, normalizer::TextNormalizer};

/// Similarity Scorer
/// Cosine similarity of two TF-IDF vectors built over just the two documents,
/// as a percentage rounded to two decimals.
pub use vectorizer::evaluate::scoring::{similarity_score, SimilarityScorer};

/// Two-document vector space
/// Lexicographically ordered vocabulary and L2-normalized TF-IDF vectors for
/// one (candidate, reference) pair.
///
/// `VectorSpace<N, E>` has the following generic parameters:
/// - `N`: weight type (f32, f64)
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
pub use vectorizer::VectorSpace;

/// TF IDF Calculation Engine Trait
/// Defines how tf and idf vectors are computed over a vocabulary.
/// `DefaultTFIDFEngine` uses raw counts and smoothed idf.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};
