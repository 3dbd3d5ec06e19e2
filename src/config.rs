use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScreenError};

pub const ENV_TOP_N: &str = "SCREENER_TOP_N";
pub const ENV_STRONG_THRESHOLD: &str = "SCREENER_STRONG_THRESHOLD";

/// Settings for term-level match explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplainConfig {
    /// cap for both the matched and the missing list
    pub top_n: usize,
    /// drop the analyzer's English stop words before building the vocabulary
    pub filter_stop_words: bool,
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            filter_stop_words: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// scores at or above this count as strong hires
    pub strong_threshold: f64,
    /// how many of the most frequent missing terms to report
    pub top_missing: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            strong_threshold: 75.0,
            top_missing: 5,
        }
    }
}

/// Batch screening configuration
///
/// Every field has a default, so a partial JSON document (or `{}`) is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreeningConfig {
    pub explain: ExplainConfig,
    pub analytics: AnalyticsConfig,
    /// how many missing terms the first advice line names
    pub advice_missing_cap: usize,
    /// analyze candidates on the rayon pool
    pub parallel: bool,
    /// per-candidate time budget; slower candidates are reported as skipped
    pub candidate_budget_ms: Option<u64>,
    /// custom skill catalogue, replaces the built-in one
    pub skills: Option<Vec<String>>,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            explain: ExplainConfig::default(),
            analytics: AnalyticsConfig::default(),
            advice_missing_cap: 5,
            parallel: true,
            candidate_budget_ms: None,
            skills: None,
        }
    }
}

impl ScreeningConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ScreenError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Override selected values from `SCREENER_*` environment variables.
    /// Unparsable values are rejected rather than ignored.
    pub fn apply_env(mut self) -> Result<Self> {
        self.apply_overrides(
            std::env::var(ENV_TOP_N).ok().as_deref(),
            std::env::var(ENV_STRONG_THRESHOLD).ok().as_deref(),
        )?;
        self.validate()?;
        Ok(self)
    }

    fn apply_overrides(&mut self, top_n: Option<&str>, strong_threshold: Option<&str>) -> Result<()> {
        if let Some(raw) = top_n {
            self.explain.top_n = raw.trim().parse().map_err(|_| {
                ScreenError::InvalidConfig(format!("{ENV_TOP_N} must be a positive integer, got {raw:?}"))
            })?;
        }
        if let Some(raw) = strong_threshold {
            self.analytics.strong_threshold = raw.trim().parse().map_err(|_| {
                ScreenError::InvalidConfig(format!("{ENV_STRONG_THRESHOLD} must be a number, got {raw:?}"))
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.explain.top_n == 0 {
            return Err(ScreenError::InvalidConfig("explain.top_n must be at least 1".into()));
        }
        if self.advice_missing_cap == 0 {
            return Err(ScreenError::InvalidConfig("advice_missing_cap must be at least 1".into()));
        }
        if !self.analytics.strong_threshold.is_finite() {
            return Err(ScreenError::InvalidConfig(
                "analytics.strong_threshold must be a finite number".into(),
            ));
        }
        Ok(())
    }

    pub fn candidate_budget(&self) -> Option<Duration> {
        self.candidate_budget_ms.map(Duration::from_millis)
    }
}
