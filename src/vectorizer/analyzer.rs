use once_cell::sync::Lazy;
use regex::Regex;

use crate::vectorizer::term::TermFrequency;

/// runs of two or more word characters
static TERM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Stop words dropped by the analyzer when filtering is on.
/// This is the classic English list used by term-weighting tools, distinct
/// from (and larger than) the normalizer's list.
pub const ANALYZER_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here", "hereafter",
    "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his", "how", "however",
    "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its",
    "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd", "made", "many", "may",
    "me", "meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly", "move",
    "much", "must", "my", "myself", "name", "namely", "neither", "never", "nevertheless", "next",
    "nine", "no", "nobody", "none", "noone", "nor", "not", "nothing", "now", "nowhere", "of",
    "off", "often", "on", "once", "one", "only", "onto", "or", "other", "others", "otherwise",
    "our", "ours", "ourselves", "out", "over", "own", "part", "per", "perhaps", "please", "put",
    "rather", "re", "same", "see", "seem", "seemed", "seeming", "seems", "serious", "several",
    "she", "should", "show", "side", "since", "sincere", "six", "sixty", "so", "some", "somehow",
    "someone", "something", "sometime", "sometimes", "somewhere", "still", "such", "system",
    "take", "ten", "than", "that", "the", "their", "them", "themselves", "then", "thence", "there",
    "thereafter", "thereby", "therefore", "therein", "thereupon", "these", "they", "thick", "thin",
    "third", "this", "those", "though", "three", "through", "throughout", "thru", "thus", "to",
    "together", "too", "top", "toward", "towards", "twelve", "twenty", "two", "un", "under",
    "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were", "what", "whatever",
    "when", "whence", "whenever", "where", "whereafter", "whereas", "whereby", "wherein",
    "whereupon", "wherever", "whether", "which", "while", "whither", "who", "whoever", "whole",
    "whom", "whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your",
    "yours", "yourself", "yourselves",
];

/// Splits a document into vector-space terms.
///
/// Lower-cases, then takes every run of two or more word characters.
/// Optionally drops `ANALYZER_STOP_WORDS`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TermAnalyzer {
    filter_stop_words: bool,
}

impl TermAnalyzer {
    /// Analyzer that keeps every term
    pub fn new() -> Self {
        Self { filter_stop_words: false }
    }

    /// Analyzer that drops the English stop words
    pub fn with_stop_words() -> Self {
        Self { filter_stop_words: true }
    }

    /// Terms in document order
    pub fn terms(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        TERM_RE
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|term| !self.filter_stop_words || !is_analyzer_stop_word(term))
            .map(str::to_string)
            .collect()
    }

    /// Term counts of one document
    pub fn term_frequency(&self, text: &str) -> TermFrequency {
        let mut freq = TermFrequency::new();
        freq.add_terms(&self.terms(text));
        freq
    }
}

#[inline]
pub fn is_analyzer_stop_word(term: &str) -> bool {
    ANALYZER_STOP_WORDS.binary_search(&term).is_ok()
}
