use indexmap::IndexMap;

use crate::{
    config::AnalyticsConfig,
    screening::model::{AnalyticsSummary, CandidateResult},
    utils::scaler::round2,
};

/// Batch statistics over screened candidates
#[derive(Debug, Clone, Default)]
pub struct AnalyticsAggregator {
    config: AnalyticsConfig,
}

impl AnalyticsAggregator {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Summarize `results`
    ///
    /// * average: mean score, two decimals, 0 for no results
    /// * strong hires: scores at or above the threshold
    /// * top missing: most frequent missing terms, ties in first-seen order
    /// * role distribution: best-role counts in first-seen order
    pub fn summarize(&self, results: &[CandidateResult]) -> AnalyticsSummary {
        if results.is_empty() {
            return AnalyticsSummary::default();
        }
        let total = results.len();
        let average = round2(results.iter().map(|r| r.score).sum::<f64>() / total as f64);
        let strong = results
            .iter()
            .filter(|r| r.score >= self.config.strong_threshold)
            .count();

        let mut missing_counts: IndexMap<&str, usize> = IndexMap::new();
        for term in results.iter().flat_map(|r| r.missing.iter()) {
            *missing_counts.entry(term.as_str()).or_insert(0) += 1;
        }
        let mut top_missing: Vec<(String, usize)> = missing_counts
            .into_iter()
            .map(|(term, count)| (term.to_string(), count))
            .collect();
        // stable: 同数は初出順
        top_missing.sort_by(|a, b| b.1.cmp(&a.1));
        top_missing.truncate(self.config.top_missing);

        let mut role_distribution: IndexMap<String, usize> = IndexMap::new();
        for r in results {
            *role_distribution.entry(r.best_role.clone()).or_insert(0) += 1;
        }

        AnalyticsSummary {
            total_resumes: total,
            average_score: average,
            strong_hires: strong,
            top_missing_skills: top_missing,
            role_distribution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::model::{BiasAudit, ExperienceLevel, RoleScores};

    fn result(score: f64, missing: &[&str], best_role: &str) -> CandidateResult {
        CandidateResult {
            id: format!("{best_role}-{score}"),
            score,
            skills: Vec::new(),
            experience: ExperienceLevel::Fresher,
            matched: Vec::new(),
            missing: missing.iter().map(|s| s.to_string()).collect(),
            advice: Vec::new(),
            bias_audit: BiasAudit::default(),
            role_scores: RoleScores::new(),
            best_role: best_role.to_string(),
        }
    }

    #[test]
    fn two_candidate_batch() {
        let results = vec![
            result(80.0, &["sql"], "Data Analyst"),
            result(60.0, &["visualization"], "Ml Engineer"),
        ];
        let summary = AnalyticsAggregator::default().summarize(&results);
        assert_eq!(summary.total_resumes, 2);
        assert_eq!(summary.average_score, 70.0);
        assert_eq!(summary.strong_hires, 1);
        assert_eq!(
            summary.top_missing_skills,
            vec![("sql".to_string(), 1), ("visualization".to_string(), 1)]
        );
        assert_eq!(
            summary.role_distribution.into_iter().collect::<Vec<_>>(),
            vec![("Data Analyst".to_string(), 1), ("Ml Engineer".to_string(), 1)]
        );
    }

    #[test]
    fn empty_batch_is_all_zero() {
        let summary = AnalyticsAggregator::default().summarize(&[]);
        assert_eq!(summary.total_resumes, 0);
        assert_eq!(summary.average_score, 0.0);
        assert_eq!(summary.strong_hires, 0);
        assert!(summary.top_missing_skills.is_empty());
        assert!(summary.role_distribution.is_empty());
    }

    #[test]
    fn threshold_is_inclusive() {
        let results = vec![result(75.0, &[], "A"), result(74.99, &[], "A")];
        assert_eq!(AnalyticsAggregator::default().summarize(&results).strong_hires, 1);
    }

    #[test]
    fn top_missing_ranks_by_count_then_first_seen() {
        let results = vec![
            result(10.0, &["go", "aws", "sql"], "A"),
            result(20.0, &["sql", "rust", "aws"], "B"),
            result(30.0, &["sql", "kafka", "java", "docker"], "A"),
        ];
        let summary = AnalyticsAggregator::default().summarize(&results);
        let names: Vec<&str> = summary.top_missing_skills.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(names, vec!["sql", "aws", "go", "rust", "kafka"]);
        assert_eq!(summary.top_missing_skills[0].1, 3);
        assert_eq!(summary.average_score, 20.0);
        assert_eq!(summary.role_distribution["A"], 2);
    }

    #[test]
    fn average_is_rounded() {
        let results = vec![result(33.33, &[], "A"), result(33.33, &[], "A"), result(33.34, &[], "A")];
        assert_eq!(AnalyticsAggregator::default().summarize(&results).average_score, 33.33);
    }
}
