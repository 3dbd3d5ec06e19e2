use tracing::debug;

use crate::{
    error::{Result, ScreenError},
    screening::model::{ReferenceDocument, RoleScores},
    vectorizer::evaluate::scoring::SimilarityScorer,
};

/// Human-readable role name from a reference identifier
///
/// `"ml_engineer.txt"` -> `"Ml Engineer"`: the extension is dropped,
/// underscores become spaces and every letter run is title-cased (first
/// letter upper, rest lower; a letter after a digit or punctuation starts a
/// new run).
pub fn role_name_from_id(id: &str) -> String {
    let stem = match id.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => id,
    };
    let mut name = String::with_capacity(stem.len());
    let mut prev_letter = false;
    for c in stem.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_letter {
                name.extend(c.to_lowercase());
            } else {
                name.extend(c.to_uppercase());
            }
            prev_letter = true;
        } else {
            name.push(c);
            prev_letter = false;
        }
    }
    name
}

/// Scores a candidate against every reference role
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleOptimizer {
    scorer: SimilarityScorer,
}

impl RoleOptimizer {
    pub fn new(scorer: SimilarityScorer) -> Self {
        Self { scorer }
    }

    /// Score `candidate` against each role and pick the best one
    ///
    /// # Arguments
    /// * `candidate` - normalized candidate text
    /// * `roles` - references in enumeration order, texts already normalized
    ///
    /// # Returns
    /// * `(RoleScores, String)` - per-role scores in enumeration order and the best role.
    ///   On equal scores the role enumerated first wins.
    ///   Identifiers mapping to the same name share one entry: the later
    ///   score replaces the value, the position stays where the name first appeared.
    ///
    /// # Errors
    /// * `ScreenError::NoReferenceDocuments` - `roles` is empty
    pub fn optimize(&self, candidate: &str, roles: &[ReferenceDocument]) -> Result<(RoleScores, String)> {
        if roles.is_empty() {
            return Err(ScreenError::NoReferenceDocuments);
        }
        let mut scores = RoleScores::with_capacity(roles.len());
        for role in roles {
            let score = self.scorer.score(candidate, &role.text);
            scores.insert(role_name_from_id(&role.id), score);
        }

        // 最初に最大値へ到達したロールを採用
        let mut best: Option<(&String, f64)> = None;
        for (name, &score) in scores.iter() {
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((name, score)),
            }
        }
        let best_role = best.map(|(name, _)| name.clone()).ok_or(ScreenError::NoReferenceDocuments)?;
        debug!(roles = scores.len(), best_role = %best_role, "role fit");
        Ok((scores, best_role))
    }
}

/// Shorthand for `RoleOptimizer::default().optimize(candidate, roles)`
pub fn optimize_roles(candidate: &str, roles: &[ReferenceDocument]) -> Result<(RoleScores, String)> {
    RoleOptimizer::default().optimize(candidate, roles)
}
