use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A document under evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDocument {
    pub id: String,
    /// raw text, possibly empty
    pub text: String,
}

impl CandidateDocument {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A job description
///
/// `id` is usually a file name; role names are derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceDocument {
    pub id: String,
    pub text: String,
}

impl ReferenceDocument {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Reference terms the candidate covers and lacks, in vocabulary order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchExplanation {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Experienced,
    Fresher,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Experienced => "Experienced",
            ExperienceLevel::Fresher => "Fresher",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a bias audit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiasFinding {
    EmailMasked,
    PhoneMasked,
    GenderTermsRemoved,
    NameRemoved,
    ScreeningBasis,
}

impl BiasFinding {
    pub fn message(&self) -> &'static str {
        match self {
            BiasFinding::EmailMasked => "Email detected and masked",
            BiasFinding::PhoneMasked => "Phone number detected and masked",
            BiasFinding::GenderTermsRemoved => "Gender-related terms removed",
            BiasFinding::NameRemoved => "Name removed (heuristic-based)",
            BiasFinding::ScreeningBasis => "Screening performed using skills and experience only",
        }
    }
}

impl fmt::Display for BiasFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Ordered bias findings of one candidate
///
/// Always ends with `NameRemoved, ScreeningBasis`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BiasAudit(pub Vec<BiasFinding>);

impl BiasAudit {
    pub fn findings(&self) -> &[BiasFinding] {
        &self.0
    }

    pub fn contains(&self, finding: BiasFinding) -> bool {
        self.0.contains(&finding)
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.0.iter().map(BiasFinding::message).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Role name -> score, in reference enumeration order
pub type RoleScores = IndexMap<String, f64>;

/// Everything the batch knows about one candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateResult {
    pub id: String,
    pub score: f64,
    pub skills: Vec<String>,
    pub experience: ExperienceLevel,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub advice: Vec<String>,
    pub bias_audit: BiasAudit,
    pub role_scores: RoleScores,
    pub best_role: String,
}

/// Batch-level statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total_resumes: usize,
    pub average_score: f64,
    pub strong_hires: usize,
    /// `(term, count)`, most frequent first
    pub top_missing_skills: Vec<(String, usize)>,
    /// best role -> number of candidates, in first-seen order
    pub role_distribution: IndexMap<String, usize>,
}

/// A candidate left out of a batch because its analysis ran over budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedCandidate {
    pub id: String,
    pub elapsed_ms: u64,
    pub budget_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// ranked by score, highest first
    pub results: Vec<CandidateResult>,
    pub analytics: AnalyticsSummary,
    pub skipped: Vec<SkippedCandidate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_level_displays_plain_words() {
        assert_eq!(ExperienceLevel::Experienced.to_string(), "Experienced");
        assert_eq!(ExperienceLevel::Fresher.to_string(), "Fresher");
    }

    #[test]
    fn audit_serializes_as_a_list() {
        let audit = BiasAudit(vec![BiasFinding::NameRemoved, BiasFinding::ScreeningBasis]);
        let json = serde_json::to_string(&audit).unwrap();
        assert_eq!(json, r#"["NameRemoved","ScreeningBasis"]"#);
        assert_eq!(
            audit.messages(),
            vec!["Name removed (heuristic-based)", "Screening performed using skills and experience only"]
        );
    }
}
