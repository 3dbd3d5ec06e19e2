use tracing::debug;

use crate::{
    utils::scaler::unit_to_percent,
    vectorizer::{analyzer::TermAnalyzer, VectorSpace},
};

/// Lexical similarity of a candidate to a reference
///
/// Builds a fresh two-document `VectorSpace` for every call and maps the
/// cosine of the two TF-IDF vectors to a percentage in `[0, 100]`,
/// rounded half-to-even to two decimals.
/// Nothing is cached between calls, so scores against different references
/// never share IDF statistics.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityScorer {
    analyzer: TermAnalyzer,
}

impl SimilarityScorer {
    pub fn new() -> Self {
        Self {
            analyzer: TermAnalyzer::new(),
        }
    }

    /// Score a candidate against a reference
    ///
    /// # Arguments
    /// * `candidate` - normalized candidate text
    /// * `reference` - normalized reference text
    ///
    /// # Returns
    /// * `f64` - similarity percentage, 0.0 when either side has no terms
    pub fn score(&self, candidate: &str, reference: &str) -> f64 {
        let space: VectorSpace = VectorSpace::build(&self.analyzer, candidate, reference);
        let score = unit_to_percent(space.cosine_similarity());
        debug!(vocab = space.vocabulary().len(), score, "similarity");
        score
    }
}

/// Shorthand for `SimilarityScorer::new().score(candidate, reference)`
#[inline]
pub fn similarity_score(candidate: &str, reference: &str) -> f64 {
    SimilarityScorer::new().score(candidate, reference)
}
