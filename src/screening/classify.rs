use crate::screening::model::ExperienceLevel;

/// Substrings that mark a candidate as experienced
pub const EXPERIENCE_KEYWORDS: [&str; 5] = ["year", "years", "experience", "worked", "company"];

/// Coarse seniority from normalized text
///
/// Plain substring containment, so "yearly" or "companyx" also count.
/// Empty text is `Fresher`.
pub fn classify_experience(normalized: &str) -> ExperienceLevel {
    if EXPERIENCE_KEYWORDS.iter().any(|kw| normalized.contains(kw)) {
        ExperienceLevel::Experienced
    } else {
        ExperienceLevel::Fresher
    }
}
