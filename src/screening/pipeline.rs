use std::{
    fs,
    path::Path,
    time::{Duration, Instant},
};

use rayon::prelude::*;
use tracing::{info, instrument, warn};

use crate::{
    config::ScreeningConfig,
    error::{Result, ScreenError},
    screening::{
        advice::AdviceGenerator,
        analytics::AnalyticsAggregator,
        audit::audit_bias,
        classify::classify_experience,
        explain::MatchExplainer,
        model::{BatchReport, CandidateDocument, CandidateResult, ReferenceDocument, SkippedCandidate},
        roles::{role_name_from_id, RoleOptimizer},
        skills::SkillCatalogue,
    },
    utils::{linguistic::LinguisticResources, normalizer::TextNormalizer},
    vectorizer::evaluate::scoring::SimilarityScorer,
};

/// Source of raw document text
///
/// Extraction never fails: anything unreadable is reported as empty text,
/// which downstream scores as 0.
pub trait TextSupplier {
    type Handle: ?Sized;

    fn extract_text(&self, handle: &Self::Handle) -> String;
}

/// Reads UTF-8 text files
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextSupplier;

impl TextSupplier for PlainTextSupplier {
    type Handle = Path;

    fn extract_text(&self, handle: &Path) -> String {
        match fs::read_to_string(handle) {
            Ok(text) => text,
            Err(err) => {
                warn!(path = %handle.display(), error = %err, "unreadable document, using empty text");
                String::new()
            }
        }
    }
}

/// References for one batch
///
/// `primary` is the job description candidates are ranked against. Without
/// it, each candidate is scored and explained against its best-fit role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceSet {
    pub primary: Option<ReferenceDocument>,
    pub roles: Vec<ReferenceDocument>,
}

impl ReferenceSet {
    pub fn new(primary: Option<ReferenceDocument>, roles: Vec<ReferenceDocument>) -> Self {
        Self { primary, roles }
    }
}

/// References after normalization, ready for scoring
#[derive(Debug, Clone)]
pub struct PreparedReferences {
    primary: Option<String>,
    roles: Vec<ReferenceDocument>,
    role_names: Vec<String>,
}

impl PreparedReferences {
    pub fn roles(&self) -> &[ReferenceDocument] {
        &self.roles
    }

    /// Normalized text of the role named `name`.
    /// With several identifiers mapping to the name, the last one, whose
    /// score is the one kept.
    fn role_text(&self, name: &str) -> Option<&str> {
        self.role_names
            .iter()
            .zip(self.roles.iter())
            .rev()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, r)| r.text.as_str())
    }
}

enum Outcome {
    Screened(CandidateResult),
    Skipped(SkippedCandidate),
}

/// Batch entry point
///
/// Per candidate: bias audit on the raw text, normalization, skills, role
/// fit, similarity score, explanation, experience level and advice.
/// Candidates are independent and run on the rayon pool unless
/// `ScreeningConfig::parallel` is off. Results are ranked by score, highest
/// first; equal scores keep input order.
#[derive(Debug, Clone)]
pub struct BatchScreener {
    config: ScreeningConfig,
    normalizer: TextNormalizer,
    scorer: SimilarityScorer,
    explainer: MatchExplainer,
    roles: RoleOptimizer,
    advice: AdviceGenerator,
    analytics: AnalyticsAggregator,
    skills: SkillCatalogue,
}

impl BatchScreener {
    /// # Errors
    /// * `ScreenError::InvalidConfig` - `config` does not validate
    pub fn new(config: ScreeningConfig, resources: LinguisticResources) -> Result<Self> {
        config.validate()?;
        let scorer = SimilarityScorer::new();
        let skills = match &config.skills {
            Some(list) => SkillCatalogue::new(list),
            None => SkillCatalogue::default(),
        };
        Ok(Self {
            normalizer: TextNormalizer::new(resources),
            scorer,
            explainer: MatchExplainer::new(&config.explain),
            roles: RoleOptimizer::new(scorer),
            advice: AdviceGenerator::new(config.advice_missing_cap),
            analytics: AnalyticsAggregator::new(config.analytics.clone()),
            skills,
            config,
        })
    }

    pub fn config(&self) -> &ScreeningConfig {
        &self.config
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Normalize every reference once
    ///
    /// # Errors
    /// * `ScreenError::NoReferenceDocuments` - no roles
    pub fn prepare(&self, references: &ReferenceSet) -> Result<PreparedReferences> {
        if references.roles.is_empty() {
            return Err(ScreenError::NoReferenceDocuments);
        }
        let primary = references.primary.as_ref().map(|r| self.normalizer.normalize(&r.text));
        let roles: Vec<ReferenceDocument> = references
            .roles
            .iter()
            .map(|r| ReferenceDocument::new(r.id.clone(), self.normalizer.normalize(&r.text)))
            .collect();
        let role_names = roles.iter().map(|r| role_name_from_id(&r.id)).collect();
        Ok(PreparedReferences {
            primary,
            roles,
            role_names,
        })
    }

    /// Analyze one candidate against prepared references
    #[instrument(level = "debug", skip_all, fields(id = %candidate.id))]
    pub fn screen_candidate(
        &self,
        candidate: &CandidateDocument,
        references: &PreparedReferences,
    ) -> Result<CandidateResult> {
        let bias_audit = audit_bias(&candidate.text);
        let normalized = self.normalizer.normalize(&candidate.text);
        let skills = self.skills.extract(&normalized);
        let (role_scores, best_role) = self.roles.optimize(&normalized, &references.roles)?;

        let (score, reference) = match &references.primary {
            Some(primary) => (self.scorer.score(&normalized, primary), primary.as_str()),
            None => {
                let score = role_scores.get(&best_role).copied().unwrap_or(0.0);
                (score, references.role_text(&best_role).unwrap_or(""))
            }
        };
        let explanation = self.explainer.explain(&normalized, reference);
        let experience = classify_experience(&normalized);
        let advice = self.advice.advise(&explanation.missing, experience);

        Ok(CandidateResult {
            id: candidate.id.clone(),
            score,
            skills,
            experience,
            matched: explanation.matched,
            missing: explanation.missing,
            advice,
            bias_audit,
            role_scores,
            best_role,
        })
    }

    fn screen_within_budget(
        &self,
        candidate: &CandidateDocument,
        references: &PreparedReferences,
    ) -> Result<Outcome> {
        let started = Instant::now();
        let result = self.screen_candidate(candidate, references)?;
        Ok(self.apply_budget(result, started.elapsed()))
    }

    /// A result whose analysis took longer than the candidate budget is
    /// dropped in favour of a skip record
    fn apply_budget(&self, result: CandidateResult, elapsed: Duration) -> Outcome {
        match self.config.candidate_budget() {
            Some(budget) if elapsed > budget => {
                warn!(id = %result.id, elapsed_ms = elapsed.as_millis() as u64, "candidate over budget, skipped");
                Outcome::Skipped(SkippedCandidate {
                    id: result.id,
                    elapsed_ms: elapsed.as_millis() as u64,
                    budget_ms: budget.as_millis() as u64,
                })
            }
            _ => Outcome::Screened(result),
        }
    }

    /// Rank screened candidates and aggregate analytics over them only
    fn assemble(&self, outcomes: Vec<Outcome>) -> BatchReport {
        let mut results = Vec::with_capacity(outcomes.len());
        let mut skipped = Vec::new();
        for outcome in outcomes {
            match outcome {
                Outcome::Screened(r) => results.push(r),
                Outcome::Skipped(s) => skipped.push(s),
            }
        }
        // stable sort, 同点は入力順
        results.sort_by(|a, b| b.score.total_cmp(&a.score));

        let analytics = self.analytics.summarize(&results);
        BatchReport {
            results,
            analytics,
            skipped,
        }
    }

    /// Screen a batch and aggregate analytics
    ///
    /// # Errors
    /// * `ScreenError::NoReferenceDocuments` - `references.roles` is empty
    pub fn screen_batch(
        &self,
        candidates: &[CandidateDocument],
        references: &ReferenceSet,
    ) -> Result<BatchReport> {
        let prepared = self.prepare(references)?;
        info!(
            candidates = candidates.len(),
            roles = prepared.roles.len(),
            primary = prepared.primary.is_some(),
            parallel = self.config.parallel,
            "screening batch"
        );

        let outcomes: Vec<Outcome> = if self.config.parallel {
            candidates
                .par_iter()
                .map(|c| self.screen_within_budget(c, &prepared))
                .collect::<Result<_>>()?
        } else {
            candidates
                .iter()
                .map(|c| self.screen_within_budget(c, &prepared))
                .collect::<Result<_>>()?
        };

        let report = self.assemble(outcomes);
        info!(
            screened = report.results.len(),
            skipped = report.skipped.len(),
            average = report.analytics.average_score,
            strong = report.analytics.strong_hires,
            "batch done"
        );
        Ok(report)
    }
}

impl Default for BatchScreener {
    fn default() -> Self {
        let config = ScreeningConfig::default();
        let scorer = SimilarityScorer::new();
        Self {
            normalizer: TextNormalizer::default(),
            scorer,
            explainer: MatchExplainer::new(&config.explain),
            roles: RoleOptimizer::new(scorer),
            advice: AdviceGenerator::new(config.advice_missing_cap),
            analytics: AnalyticsAggregator::new(config.analytics.clone()),
            skills: SkillCatalogue::default(),
            config,
        }
    }
}

/// Screen with default configuration and English resources
pub fn screen_batch(candidates: &[CandidateDocument], references: &ReferenceSet) -> Result<BatchReport> {
    BatchScreener::default().screen_batch(candidates, references)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::model::{BiasFinding, ExperienceLevel};

    fn roles() -> Vec<ReferenceDocument> {
        vec![
            ReferenceDocument::new("data_analyst.txt", "SQL, Excel, Tableau and data visualization."),
            ReferenceDocument::new("ml_engineer.txt", "Python, machine learning, TensorFlow, deep learning."),
        ]
    }

    #[test]
    fn no_roles_is_an_error() {
        let refs = ReferenceSet::new(Some(ReferenceDocument::new("jd.txt", "python")), Vec::new());
        let err = screen_batch(&[CandidateDocument::new("a", "python")], &refs).unwrap_err();
        assert!(matches!(err, ScreenError::NoReferenceDocuments));
    }

    #[test]
    fn candidate_record_is_complete() {
        let refs = ReferenceSet::new(
            Some(ReferenceDocument::new("jd.txt", "Looking for a Data Scientist with Python, Machine Learning and SQL.")),
            roles(),
        );
        let candidate = CandidateDocument::new(
            "john.txt",
            "John Doe | Male | john@gmail.com | 9876543210\nPython, SQL & 3 years of Machine-Learning!",
        );
        let report = screen_batch(&[candidate], &refs).unwrap();
        let r = &report.results[0];
        assert_eq!(r.id, "john.txt");
        assert!(r.score > 0.0 && r.score < 100.0);
        assert_eq!(r.experience, ExperienceLevel::Experienced);
        assert!(r.skills.contains(&"python".to_string()));
        assert!(r.matched.contains(&"python".to_string()));
        assert!(r.missing.contains(&"scientist".to_string()));
        assert!(r.bias_audit.contains(BiasFinding::EmailMasked));
        assert!(r.bias_audit.contains(BiasFinding::PhoneMasked));
        assert!(r.bias_audit.contains(BiasFinding::GenderTermsRemoved));
        assert_eq!(r.best_role, "Ml Engineer");
        assert_eq!(r.role_scores.len(), 2);
        assert_eq!(r.advice.last().map(String::as_str), Some(crate::screening::advice::ATS_ADVICE));
    }

    #[test]
    fn without_primary_best_role_is_the_reference() {
        let refs = ReferenceSet::new(None, roles());
        let candidate = CandidateDocument::new("a", "python machine learning");
        let report = screen_batch(&[candidate], &refs).unwrap();
        let r = &report.results[0];
        assert_eq!(r.best_role, "Ml Engineer");
        assert_eq!(r.score, r.role_scores["Ml Engineer"]);
        assert!(r.missing.contains(&"tensorflow".to_string()));
    }

    #[test]
    fn sequential_and_parallel_agree() {
        let refs = ReferenceSet::new(None, roles());
        let candidates: Vec<CandidateDocument> = (0..8)
            .map(|i| CandidateDocument::new(format!("c{i}"), if i % 2 == 0 { "python sql" } else { "excel tableau" }))
            .collect();
        let parallel = screen_batch(&candidates, &refs).unwrap();
        let config = ScreeningConfig {
            parallel: false,
            ..ScreeningConfig::default()
        };
        let sequential = BatchScreener::new(config, LinguisticResources::english())
            .unwrap()
            .screen_batch(&candidates, &refs)
            .unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let refs = ReferenceSet::new(None, roles());
        let candidates = vec![
            CandidateDocument::new("first", "gardening"),
            CandidateDocument::new("second", "cooking"),
            CandidateDocument::new("third", "python machine learning"),
        ];
        let report = screen_batch(&candidates, &refs).unwrap();
        let ids: Vec<&str> = report.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["third", "first", "second"]);
    }

    fn budgeted(ms: u64) -> BatchScreener {
        let config = ScreeningConfig {
            candidate_budget_ms: Some(ms),
            ..ScreeningConfig::default()
        };
        BatchScreener::new(config, LinguisticResources::english()).unwrap()
    }

    fn screened(screener: &BatchScreener, id: &str, text: &str) -> CandidateResult {
        let prepared = screener.prepare(&ReferenceSet::new(None, roles())).unwrap();
        screener
            .screen_candidate(&CandidateDocument::new(id, text), &prepared)
            .unwrap()
    }

    #[test]
    fn over_budget_candidate_is_skipped() {
        let screener = budgeted(10);
        let slow = screened(&screener, "slow", "python sql machine learning");
        let outcome = screener.apply_budget(slow, Duration::from_millis(50));
        let report = screener.assemble(vec![outcome]);
        assert!(report.results.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].id, "slow");
        assert_eq!(report.skipped[0].elapsed_ms, 50);
        assert_eq!(report.skipped[0].budget_ms, 10);
        assert_eq!(report.analytics.total_resumes, 0);
        assert!(report.analytics.role_distribution.is_empty());
    }

    #[test]
    fn skipped_candidates_stay_out_of_analytics() {
        let screener = budgeted(10);
        let fast = screened(&screener, "fast", "excel tableau sql");
        let slow = screened(&screener, "slow", "python machine learning tensorflow");
        let outcomes = vec![
            screener.apply_budget(slow, Duration::from_millis(11)),
            screener.apply_budget(fast, Duration::from_millis(10)),
        ];
        let report = screener.assemble(outcomes);
        let ids: Vec<&str> = report.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["fast"]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].id, "slow");
        assert_eq!(report.analytics.total_resumes, 1);
        assert_eq!(report.analytics.average_score, report.results[0].score);
        assert_eq!(report.analytics.role_distribution.len(), 1);
        assert_eq!(report.analytics.role_distribution.get("Data Analyst"), Some(&1));
    }

    #[test]
    fn zero_budget_skips_a_real_batch() {
        let refs = ReferenceSet::new(None, roles());
        let text = "python sql machine learning tableau excel ".repeat(2000);
        let report = budgeted(0)
            .screen_batch(&[CandidateDocument::new("slow", text)], &refs)
            .unwrap();
        assert!(report.results.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].id, "slow");
        assert_eq!(report.analytics.total_resumes, 0);
    }

    #[test]
    fn without_budget_nothing_is_skipped() {
        let screener = BatchScreener::default();
        let result = screened(&screener, "a", "python");
        let report = screener.assemble(vec![screener.apply_budget(result, Duration::from_secs(3600))]);
        assert_eq!(report.results.len(), 1);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn unreadable_file_is_empty_text() {
        let text = PlainTextSupplier.extract_text(Path::new("/definitely/not/here.txt"));
        assert!(text.is_empty());
    }
}
