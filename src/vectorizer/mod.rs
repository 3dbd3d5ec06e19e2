pub mod analyzer;
pub mod compute;
pub mod corpus;
pub mod evaluate;
pub mod term;
pub mod tfidf;

use std::marker::PhantomData;

use num::Float;

use crate::{
    utils::math::vector::ZeroSpVec,
    vectorizer::{
        analyzer::TermAnalyzer,
        compute::compare::{Compare, DefaultCompare},
        corpus::Corpus,
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
    },
};

/// Which of the two documents of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Candidate,
    Reference,
}

/// Two-document TF-IDF vector space
///
/// Built for exactly one (candidate, reference) pair and thrown away after.
/// The vocabulary is the union of both documents' terms in lexicographic
/// order; each document vector holds tf × idf weights, L2-normalized.
/// Scores from different spaces are not comparable term by term, so nothing
/// here is shared between comparisons.
///
/// `VectorSpace<N, E>` generic parameters:
/// - `N`: weight type (f32, f64)
/// - `E`: TF-IDF calculation engine
#[derive(Debug, Clone)]
pub struct VectorSpace<N = f64, E = DefaultTFIDFEngine>
where
    N: Float,
    E: TFIDFEngine<N>,
{
    vocabulary: Vec<Box<str>>,
    candidate: ZeroSpVec<N>,
    reference: ZeroSpVec<N>,
    _marker: PhantomData<E>,
}

impl<N, E> VectorSpace<N, E>
where
    N: Float,
    E: TFIDFEngine<N>,
{
    /// Build the space for one comparison
    ///
    /// # Arguments
    /// * `analyzer` - term splitter applied to both documents
    /// * `candidate` - candidate text (first document)
    /// * `reference` - reference text (second document)
    pub fn build(analyzer: &TermAnalyzer, candidate: &str, reference: &str) -> Self {
        let candidate_freq = analyzer.term_frequency(candidate);
        let reference_freq = analyzer.term_frequency(reference);

        // 2文書だけのコーパス
        let mut corpus = Corpus::new();
        corpus.add_set(&candidate_freq.term_set_ref_str());
        corpus.add_set(&reference_freq.term_set_ref_str());

        let vocabulary = corpus.sorted_vocabulary();
        let idf = E::idf_vec(&corpus, &vocabulary);
        let candidate = Self::weigh(E::tf_vec(&candidate_freq, &vocabulary), &idf);
        let reference = Self::weigh(E::tf_vec(&reference_freq, &vocabulary), &idf);

        Self {
            vocabulary,
            candidate,
            reference,
            _marker: PhantomData,
        }
    }

    /// tf × idf, then L2 normalization
    fn weigh(tf: ZeroSpVec<N>, idf: &[N]) -> ZeroSpVec<N> {
        let mut weighted = ZeroSpVec::with_capacity(tf.nnz());
        for (i, &w) in idf.iter().enumerate() {
            weighted.push(tf.get(i) * w);
        }
        let norm = weighted.norm_sq::<N>().sqrt();
        if norm > N::zero() {
            weighted.div_scalar(norm);
        }
        weighted
    }

    /// Vocabulary in lexicographic order
    pub fn vocabulary(&self) -> &[Box<str>] {
        &self.vocabulary
    }

    pub fn vector(&self, side: Side) -> &ZeroSpVec<N> {
        match side {
            Side::Candidate => &self.candidate,
            Side::Reference => &self.reference,
        }
    }

    /// Weight of `term` in one document, zero when the term is not in the vocabulary
    pub fn weight(&self, side: Side, term: &str) -> N {
        match self.vocabulary.binary_search_by(|t| (**t).cmp(term)) {
            Ok(index) => self.vector(side).get(index),
            Err(_) => N::zero(),
        }
    }

    /// `(term, candidate weight, reference weight)` in vocabulary order
    pub fn iter_weights(&self) -> impl Iterator<Item = (&str, N, N)> + '_ {
        self.vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (&**term, self.candidate.get(i), self.reference.get(i)))
    }

    /// Cosine of the candidate and reference vectors; 0.0 if either is all zero
    pub fn cosine_similarity(&self) -> f64
    where
        DefaultCompare: Compare<N>,
    {
        DefaultCompare::cosine_similarity(self.candidate.raw_iter(), self.reference.raw_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_is_union_in_sorted_order() {
        let space: VectorSpace = VectorSpace::build(&TermAnalyzer::new(), "sql python", "python excel");
        let vocab: Vec<&str> = space.vocabulary().iter().map(|t| &**t).collect();
        assert_eq!(vocab, vec!["excel", "python", "sql"]);
    }

    #[test]
    fn vectors_are_unit_length() {
        let space: VectorSpace = VectorSpace::build(&TermAnalyzer::new(), "sql python sql", "python excel");
        for side in [Side::Candidate, Side::Reference] {
            let norm: f64 = space.vector(side).norm_sq();
            assert!((norm - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn shared_terms_weigh_less_than_unique_ones() {
        let space: VectorSpace = VectorSpace::build(&TermAnalyzer::new(), "python sql", "python excel");
        assert!(space.weight(Side::Candidate, "python") < space.weight(Side::Candidate, "sql"));
        assert_eq!(space.weight(Side::Candidate, "excel"), 0.0);
        assert_eq!(space.weight(Side::Reference, "java"), 0.0);
    }

    #[test]
    fn empty_document_is_a_zero_vector() {
        let space: VectorSpace = VectorSpace::build(&TermAnalyzer::new(), "", "python excel");
        assert_eq!(space.vector(Side::Candidate).nnz(), 0);
        assert_eq!(space.cosine_similarity(), 0.0);
    }

    #[test]
    fn f32_space_agrees_with_f64() {
        let a: VectorSpace<f32> = VectorSpace::build(&TermAnalyzer::new(), "rust sql go", "rust go java");
        let b: VectorSpace<f64> = VectorSpace::build(&TermAnalyzer::new(), "rust sql go", "rust go java");
        assert!((a.cosine_similarity() - b.cosine_similarity()).abs() < 1e-6);
    }
}
