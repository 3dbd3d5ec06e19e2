use crate::utils::{linguistic::LinguisticResources, pii};

/// Text normalizer
/// Reduces raw resume / job description text to a canonical token stream.
///
/// Steps, in order:
/// 1. redact emails, 10-digit numbers and gendered terms (see `utils::pii`)
/// 2. lower-case
/// 3. replace everything outside `a-z` and whitespace with a space
/// 4. split on whitespace
/// 5. drop stop words, tokens shorter than 3 chars and leftover gendered terms
/// 6. lemmatize
/// 7. join with a single space
///
/// Output is ASCII only and byte-identical for identical input and resources.
/// Normalizing already-normalized text returns it unchanged.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    resources: LinguisticResources,
}

impl TextNormalizer {
    pub fn new(resources: LinguisticResources) -> Self {
        Self { resources }
    }

    /// Normalize into a token stream
    ///
    /// # Arguments
    /// * `raw` - raw text, may be empty
    ///
    /// # Returns
    /// * `Vec<String>` - surviving lemmas in input order
    pub fn tokens(&self, raw: &str) -> Vec<String> {
        if raw.is_empty() {
            return Vec::new();
        }
        let redacted = pii::redact(raw);
        let lowered = redacted.to_lowercase();
        // a-z と空白以外はすべて空白へ
        let letters: String = lowered
            .chars()
            .map(|c| if c.is_ascii_lowercase() || c.is_whitespace() { c } else { ' ' })
            .collect();

        letters
            .split_whitespace()
            // "male1" escapes the whole-word redaction and only becomes "male"
            // after step 3, so gendered terms are filtered again here
            .filter(|tok| tok.len() > 2 && !self.resources.is_stop_word(tok) && !pii::is_gender_term(tok))
            .map(|tok| self.resources.lemmatize(tok).to_string())
            .collect()
    }

    /// Normalize into a single space-joined string
    pub fn normalize(&self, raw: &str) -> String {
        self.tokens(raw).join(" ")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(LinguisticResources::english())
    }
}
