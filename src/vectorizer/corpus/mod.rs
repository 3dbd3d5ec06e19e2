use indexmap::IndexMap;

/// keep document count and per-term document frequency
///
/// Built fresh for every comparison. It does not store document text, only
/// how many documents were added and in how many of them each term occurs.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    doc_num: u64,
    term_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document's distinct terms to the corpus
    pub fn add_set<T>(&mut self, terms: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for term in terms {
            *self.term_counts.entry(term.as_ref().into()).or_insert(0) += 1;
        }
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Number of documents containing `term`
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    /// Vocabulary in byte-wise lexicographic order
    pub fn sorted_vocabulary(&self) -> Vec<Box<str>> {
        let mut vocab: Vec<Box<str>> = self.term_counts.keys().cloned().collect();
        vocab.sort_unstable();
        vocab
    }
}
