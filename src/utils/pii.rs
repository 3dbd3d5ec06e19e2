//! Personal-attribute patterns shared by the text normalizer (which redacts
//! them) and the bias auditor (which reports them).
//!
//! They are matched against raw text. Normalized text has already lost the
//! `@`, the digits and the casing these patterns look for.

use once_cell::sync::Lazy;
use regex::Regex;

/// Gendered pronouns and adjectives removed before scoring
pub const GENDER_TERMS: [&str; 6] = ["male", "female", "he", "she", "his", "her"];

/// contiguous non-whitespace run containing `@`
pub static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+").unwrap());

/// exactly ten digits bounded by word boundaries
pub static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{10}\b").unwrap());

/// any gendered term as a whole word, case-insensitive
pub static GENDER_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = GENDER_TERMS.join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).unwrap()
});

#[inline]
pub fn contains_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

#[inline]
pub fn contains_phone(text: &str) -> bool {
    PHONE_RE.is_match(text)
}

#[inline]
pub fn contains_gender_term(text: &str) -> bool {
    GENDER_RE.is_match(text)
}

/// Whether `word` (already lower-cased) is one of the gendered terms
#[inline]
pub fn is_gender_term(word: &str) -> bool {
    GENDER_TERMS.contains(&word)
}

/// Replace every email, phone number and gendered term with a single space,
/// in that order.
pub fn redact(text: &str) -> String {
    let text = EMAIL_RE.replace_all(text, " ");
    let text = PHONE_RE.replace_all(&text, " ");
    GENDER_RE.replace_all(&text, " ").into_owned()
}
