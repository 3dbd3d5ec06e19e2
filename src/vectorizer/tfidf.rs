use num::{Float, NumCast};

use crate::{utils::math::vector::ZeroSpVec, vectorizer::{corpus::Corpus, term::TermFrequency}};

pub trait TFIDFEngine<N>
where
    N: Float,
{
    /// IDFベクトルを生成する
    /// # Arguments
    /// * `corpus` - コーパス
    /// * `vocabulary` - 次元の並び
    /// # Returns
    /// * `Vec<N>` - one IDF value per vocabulary term
    fn idf_vec(corpus: &Corpus, vocabulary: &[Box<str>]) -> Vec<N>;

    /// TFベクトルを生成する
    /// # Arguments
    /// * `freq` - document term counts
    /// * `vocabulary` - 次元の並び
    /// # Returns
    /// * `ZeroSpVec<N>` - term weight before IDF, sparse
    fn tf_vec(freq: &TermFrequency, vocabulary: &[Box<str>]) -> ZeroSpVec<N>;
}

/// デフォルトのTF-IDFエンジン
///
/// * tf  = raw term count
/// * idf = ln((1 + n) / (1 + df)) + 1
///
/// The smoothed idf never reaches zero, so a term shared by every document
/// still carries weight, only less than a term unique to one document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl<N> TFIDFEngine<N> for DefaultTFIDFEngine
where
    N: Float,
{
    fn idf_vec(corpus: &Corpus, vocabulary: &[Box<str>]) -> Vec<N> {
        let doc_num = corpus.get_doc_num() as f64;
        vocabulary
            .iter()
            .map(|term| {
                let doc_freq = corpus.get_term_count(term) as f64;
                let idf = ((1.0 + doc_num) / (1.0 + doc_freq)).ln() + 1.0;
                <N as NumCast>::from(idf).unwrap_or_else(N::zero)
            })
            .collect()
    }

    fn tf_vec(freq: &TermFrequency, vocabulary: &[Box<str>]) -> ZeroSpVec<N> {
        let mut tf_vec = ZeroSpVec::with_capacity(freq.term_num());
        for term in vocabulary {
            let count = freq.term_count(term);
            tf_vec.push(<N as NumCast>::from(count).unwrap_or_else(N::zero));
        }
        tf_vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(terms: &[&str]) -> Vec<Box<str>> {
        terms.iter().map(|t| Box::<str>::from(*t)).collect()
    }

    #[test]
    fn idf_downweights_shared_terms() {
        let mut corpus = Corpus::new();
        corpus.add_set(&["python", "sql"]);
        corpus.add_set(&["sql"]);
        let idf: Vec<f64> = DefaultTFIDFEngine::idf_vec(&corpus, &vocab(&["python", "sql"]));
        assert!((idf[0] - ((3.0_f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
        assert!((idf[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn tf_is_raw_count_and_sparse() {
        let freq: TermFrequency = ["sql", "sql", "python"].into_iter().collect();
        let tf: ZeroSpVec<f32> = DefaultTFIDFEngine::tf_vec(&freq, &vocab(&["excel", "python", "sql"]));
        assert_eq!(tf.len(), 3);
        assert_eq!(tf.nnz(), 2);
        assert_eq!(tf.get(0), 0.0);
        assert_eq!(tf.get(2), 2.0);
    }
}
