//! Stop-word and lemma dictionaries injected into the text normalizer.
//!
//! Nothing here is fetched at runtime. Callers pick the built-in English
//! resources, the degraded resources (no stop words, identity lemmas), or
//! parse their own lists.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::utils::pii;

/// English stop words (same list the NLTK `english` corpus ships)
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Noun lemmas for vocabulary that shows up in resumes and job descriptions.
/// (inflected, lemma)
pub const ENGLISH_LEMMAS: &[(&str, &str)] = &[
    ("abilities", "ability"),
    ("achievements", "achievement"),
    ("algorithms", "algorithm"),
    ("analyses", "analysis"),
    ("analysts", "analyst"),
    ("apis", "api"),
    ("applications", "application"),
    ("architectures", "architecture"),
    ("awards", "award"),
    ("businesses", "business"),
    ("candidates", "candidate"),
    ("certificates", "certificate"),
    ("certifications", "certification"),
    ("classes", "class"),
    ("clients", "client"),
    ("companies", "company"),
    ("competitions", "competition"),
    ("courses", "course"),
    ("customers", "customer"),
    ("dashboards", "dashboard"),
    ("databases", "database"),
    ("datasets", "dataset"),
    ("degrees", "degree"),
    ("deployments", "deployment"),
    ("designs", "design"),
    ("developers", "developer"),
    ("engineers", "engineer"),
    ("environments", "environment"),
    ("experiences", "experience"),
    ("experiments", "experiment"),
    ("features", "feature"),
    ("frameworks", "framework"),
    ("goals", "goal"),
    ("graduates", "graduate"),
    ("hackathons", "hackathon"),
    ("insights", "insight"),
    ("internships", "internship"),
    ("languages", "language"),
    ("libraries", "library"),
    ("managers", "manager"),
    ("methods", "method"),
    ("metrics", "metric"),
    ("models", "model"),
    ("months", "month"),
    ("networks", "network"),
    ("pipelines", "pipeline"),
    ("platforms", "platform"),
    ("processes", "process"),
    ("products", "product"),
    ("projects", "project"),
    ("queries", "query"),
    ("reports", "report"),
    ("requirements", "requirement"),
    ("responsibilities", "responsibility"),
    ("results", "result"),
    ("roles", "role"),
    ("sciences", "science"),
    ("scientists", "scientist"),
    ("services", "service"),
    ("skills", "skill"),
    ("solutions", "solution"),
    ("statistics", "statistic"),
    ("stakeholders", "stakeholder"),
    ("students", "student"),
    ("studies", "study"),
    ("systems", "system"),
    ("tasks", "task"),
    ("teams", "team"),
    ("technologies", "technology"),
    ("techniques", "technique"),
    ("tests", "test"),
    ("tools", "tool"),
    ("universities", "university"),
    ("users", "user"),
    ("visualizations", "visualization"),
    ("years", "year"),
];

/// Stop-word set and lemma dictionary used by the text normalizer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinguisticResources {
    stop_words: HashSet<String>,
    lemmas: HashMap<String, String>,
}

impl LinguisticResources {
    /// Build resources from raw entries.
    ///
    /// The lemma table is sanitized so that normalizing twice changes nothing:
    /// chains are followed to their end, and entries whose final lemma could
    /// not survive normalization (non `a-z`, shorter than 3, a stop word, or
    /// a gendered term) are dropped.
    pub fn new<S, L, K, V>(stop_words: S, lemmas: L) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        L: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let stop_words: HashSet<String> = stop_words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        let raw: HashMap<String, String> = lemmas
            .into_iter()
            .map(|(k, v)| (k.as_ref().trim().to_lowercase(), v.as_ref().trim().to_lowercase()))
            .filter(|(k, v)| !k.is_empty() && !v.is_empty() && k != v)
            .collect();

        let mut lemmas = HashMap::with_capacity(raw.len());
        for (word, first) in &raw {
            let Some(lemma) = resolve_chain(&raw, first) else {
                debug!(word = %word, "lemma chain is cyclic, entry dropped");
                continue;
            };
            if !survives_normalization(&lemma, &stop_words) {
                debug!(word = %word, lemma = %lemma, "lemma would not survive normalization, entry dropped");
                continue;
            }
            lemmas.insert(word.clone(), lemma);
        }

        Self { stop_words, lemmas }
    }

    /// Built-in English stop words and noun lemmas
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS.iter().copied(), ENGLISH_LEMMAS.iter().copied())
    }

    /// No stop words, identity lemmatization
    pub fn degraded() -> Self {
        Self::default()
    }

    /// Parse plain-text lists.
    ///
    /// `stop_words`: one word per line. `lemmas`: `inflected lemma` per line,
    /// separated by any whitespace. Blank lines and lines starting with `#`
    /// are skipped, as are lemma lines without exactly two fields.
    pub fn from_lists(stop_words: &str, lemmas: &str) -> Self {
        let stops = content_lines(stop_words);
        let pairs = content_lines(lemmas).filter_map(|line| {
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next(), fields.next()) {
                (Some(word), Some(lemma), None) => Some((word, lemma)),
                _ => {
                    debug!(line = %line, "malformed lemma line skipped");
                    None
                }
            }
        });
        Self::new(stops, pairs)
    }

    #[inline]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Dictionary base form, or the word itself
    #[inline]
    pub fn lemmatize<'a>(&'a self, word: &'a str) -> &'a str {
        self.lemmas.get(word).map(String::as_str).unwrap_or(word)
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    pub fn lemma_count(&self) -> usize {
        self.lemmas.len()
    }
}

fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Follow `word -> lemma -> lemma ...` until a word with no entry.
/// None on a cycle.
fn resolve_chain(raw: &HashMap<String, String>, start: &str) -> Option<String> {
    let mut current = start;
    for _ in 0..=raw.len() {
        match raw.get(current) {
            Some(next) => current = next,
            None => return Some(current.to_string()),
        }
    }
    None
}

fn survives_normalization(lemma: &str, stop_words: &HashSet<String>) -> bool {
    lemma.len() > 2
        && lemma.bytes().all(|b| b.is_ascii_lowercase())
        && !stop_words.contains(lemma)
        && !pii::is_gender_term(lemma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::normalizer::TextNormalizer;
    use proptest::prelude::*;

    // 小さいアルファベットで表のキーと本文の語をぶつける
    const WORD: &str = "[a-d]{1,5}|male|his|her|the|caf\u{e9}|ab1cd";

    #[test]
    fn english_resources_cover_common_words() {
        let res = LinguisticResources::english();
        assert!(res.is_stop_word("the"));
        assert!(res.is_stop_word("with"));
        assert!(!res.is_stop_word("python"));
        assert_eq!(res.lemmatize("years"), "year");
        assert_eq!(res.lemmatize("technologies"), "technology");
        assert_eq!(res.lemmatize("python"), "python");
    }

    #[test]
    fn degraded_resources_are_identity() {
        let res = LinguisticResources::degraded();
        assert!(!res.is_stop_word("the"));
        assert_eq!(res.lemmatize("years"), "years");
        assert_eq!(res.stop_word_count(), 0);
        assert_eq!(res.lemma_count(), 0);
    }

    #[test]
    fn chains_are_resolved_to_the_end() {
        let res = LinguisticResources::new(Vec::<&str>::new(), vec![("aaaa", "bbbb"), ("bbbb", "cccc")]);
        assert_eq!(res.lemmatize("aaaa"), "cccc");
        assert_eq!(res.lemmatize("bbbb"), "cccc");
    }

    #[test]
    fn unsafe_lemmas_are_dropped() {
        let res = LinguisticResources::new(
            vec!["the"],
            vec![
                ("thes", "the"),        // stop word
                ("has", "ha"),          // too short
                ("males", "male"),      // gendered
                ("cafes", "café"),      // not a-z
                ("loopa", "loopb"),     // cycle
                ("loopb", "loopa"),
                ("graphs", "graph"),
            ],
        );
        assert_eq!(res.lemmatize("thes"), "thes");
        assert_eq!(res.lemmatize("has"), "has");
        assert_eq!(res.lemmatize("males"), "males");
        assert_eq!(res.lemmatize("cafes"), "cafes");
        assert_eq!(res.lemmatize("loopa"), "loopa");
        assert_eq!(res.lemmatize("graphs"), "graph");
        assert_eq!(res.lemma_count(), 1);
    }

    #[test]
    fn lists_are_parsed_with_comments() {
        let res = LinguisticResources::from_lists(
            "# stop words\nthe\n\n  And \n",
            "# lemmas\nyears year\nbroken line here\nteams\tteam\n",
        );
        assert!(res.is_stop_word("the"));
        assert!(res.is_stop_word("and"));
        assert_eq!(res.stop_word_count(), 2);
        assert_eq!(res.lemmatize("years"), "year");
        assert_eq!(res.lemmatize("teams"), "team");
        assert_eq!(res.lemma_count(), 2);
    }

    proptest! {
        #[test]
        fn any_table_keeps_normalization_idempotent(
            stop_words in prop::collection::vec(WORD, 0..8),
            lemmas in prop::collection::vec((WORD, WORD), 0..24),
            words in prop::collection::vec(WORD, 0..40),
            sep in "[ ,.@1\n]{1,2}",
        ) {
            let n = TextNormalizer::new(LinguisticResources::new(stop_words, lemmas));
            let once = n.normalize(&words.join(&sep));
            prop_assert_eq!(n.normalize(&once), once);
        }
    }
}
