use tracing::debug;

use crate::{
    config::ExplainConfig,
    screening::model::MatchExplanation,
    vectorizer::{analyzer::TermAnalyzer, VectorSpace},
};

/// Term-level explanation of a similarity score
///
/// Uses its own two-document vector space. A reference term with nonzero
/// weight is `matched` when the candidate also weighs it, `missing`
/// otherwise. Both lists keep vocabulary (lexicographic) order and are cut
/// to `top_n` after classification, so the first `top_n` terms
/// alphabetically win, not the heaviest ones.
#[derive(Debug, Clone, Copy)]
pub struct MatchExplainer {
    analyzer: TermAnalyzer,
    top_n: usize,
}

impl MatchExplainer {
    pub fn new(config: &ExplainConfig) -> Self {
        let analyzer = if config.filter_stop_words {
            TermAnalyzer::with_stop_words()
        } else {
            TermAnalyzer::new()
        };
        Self {
            analyzer,
            top_n: config.top_n,
        }
    }

    /// Explain how `candidate` covers `reference`
    ///
    /// # Arguments
    /// * `candidate` - normalized candidate text
    /// * `reference` - normalized reference text
    pub fn explain(&self, candidate: &str, reference: &str) -> MatchExplanation {
        let space: VectorSpace = VectorSpace::build(&self.analyzer, candidate, reference);
        let mut explanation = MatchExplanation::default();
        for (term, cand_w, ref_w) in space.iter_weights() {
            if ref_w > 0.0 {
                if cand_w > 0.0 {
                    explanation.matched.push(term.to_string());
                } else {
                    explanation.missing.push(term.to_string());
                }
            }
        }
        debug!(
            matched = explanation.matched.len(),
            missing = explanation.missing.len(),
            top_n = self.top_n,
            "explain"
        );
        explanation.matched.truncate(self.top_n);
        explanation.missing.truncate(self.top_n);
        explanation
    }
}

impl Default for MatchExplainer {
    fn default() -> Self {
        Self::new(&ExplainConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_reference_terms_by_coverage() {
        let ex = MatchExplainer::default().explain(
            "python sql excel",
            "python sql tableau visualization",
        );
        assert_eq!(ex.matched, vec!["python", "sql"]);
        assert_eq!(ex.missing, vec!["tableau", "visualization"]);
    }

    #[test]
    fn candidate_only_terms_are_ignored() {
        let ex = MatchExplainer::default().explain("python kubernetes", "python");
        assert_eq!(ex.matched, vec!["python"]);
        assert!(ex.missing.is_empty());
    }

    #[test]
    fn empty_reference_explains_nothing() {
        let ex = MatchExplainer::default().explain("python sql", "");
        assert_eq!(ex, MatchExplanation::default());
    }

    #[test]
    fn truncation_keeps_vocabulary_order() {
        let config = ExplainConfig {
            top_n: 2,
            filter_stop_words: true,
        };
        let ex = MatchExplainer::new(&config).explain("", "zeta alpha gamma beta");
        assert!(ex.matched.is_empty());
        assert_eq!(ex.missing, vec!["alpha", "beta"]);
    }

    #[test]
    fn analyzer_stop_words_are_optional() {
        let filtered = MatchExplainer::default().explain("", "system design");
        assert_eq!(filtered.missing, vec!["design"]);

        let config = ExplainConfig {
            top_n: 10,
            filter_stop_words: false,
        };
        let unfiltered = MatchExplainer::new(&config).explain("", "system design");
        assert_eq!(unfiltered.missing, vec!["design", "system"]);
    }
}
