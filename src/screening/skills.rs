/// Built-in skill catalogue, matched against normalized text
///
/// Entries are written the way normalization leaves them: lower-case
/// letters and spaces only.
pub const DEFAULT_SKILLS: &[&str] = &[
    "python", "java", "javascript", "typescript", "rust", "golang", "kotlin", "scala", "swift",
    "sql", "mysql", "postgresql", "mongodb", "redis", "excel", "tableau", "power",
    "machine learning", "deep learning", "data analysis", "data science", "statistic",
    "visualization", "nlp", "computer vision", "tensorflow", "pytorch", "keras", "pandas",
    "numpy", "scikit", "spark", "hadoop", "airflow", "flask", "django", "fastapi", "react",
    "angular", "node", "html", "css", "docker", "kubernetes", "aws", "azure", "gcp", "linux",
    "git", "jenkins", "terraform", "rest api", "microservice", "agile",
];

/// Looks up catalogue skills in normalized text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCatalogue {
    skills: Vec<String>,
}

impl SkillCatalogue {
    /// Custom catalogue; blank entries and repeats are dropped
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list: Vec<String> = Vec::new();
        for skill in skills {
            let skill = skill.as_ref().trim().to_lowercase();
            if !skill.is_empty() && !list.contains(&skill) {
                list.push(skill);
            }
        }
        Self { skills: list }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Catalogue skills occurring as substrings of `normalized`, in catalogue order
    pub fn extract(&self, normalized: &str) -> Vec<String> {
        if normalized.is_empty() {
            return Vec::new();
        }
        self.skills
            .iter()
            .filter(|skill| normalized.contains(skill.as_str()))
            .cloned()
            .collect()
    }
}

impl Default for SkillCatalogue {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_catalogue_order() {
        let skills = SkillCatalogue::default().extract("docker python machine learning sql aws");
        assert_eq!(skills, vec!["python", "sql", "machine learning", "docker", "aws"]);
    }

    #[test]
    fn substring_matching_is_loose() {
        // "javascript" contains "java"
        let skills = SkillCatalogue::default().extract("javascript");
        assert_eq!(skills, vec!["java", "javascript"]);
    }

    #[test]
    fn custom_catalogue_is_deduplicated() {
        let catalogue = SkillCatalogue::new(["SQL", "sql", " ", "excel"]);
        assert_eq!(catalogue.skills(), &["sql".to_string(), "excel".to_string()]);
        assert_eq!(catalogue.extract("excel sql"), vec!["sql", "excel"]);
    }

    #[test]
    fn empty_text_has_no_skills() {
        assert!(SkillCatalogue::default().extract("").is_empty());
    }
}
