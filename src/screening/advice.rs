use crate::screening::model::ExperienceLevel;

pub const ATS_ADVICE: &str =
    "Ensure your resume is ATS-friendly: use standard headings, bullet points, and avoid images.";

const FRESHER_ADVICE: [&str; 2] = [
    "Add academic projects, internships, or certifications to strengthen your profile.",
    "Use strong action verbs and clearly mention technologies used in projects.",
];

const EXPERIENCED_ADVICE: [&str; 2] = [
    "Quantify your achievements using metrics (e.g., improved accuracy by 20%).",
    "Highlight leadership, system design, or optimization work.",
];

/// Rule-based resume advice
///
/// 1. when terms are missing and `missing_cap` is non-zero, one line naming
///    the first `missing_cap` of them
/// 2. two lines for the experience level
/// 3. the ATS formatting line
#[derive(Debug, Clone, Copy)]
pub struct AdviceGenerator {
    missing_cap: usize,
}

impl AdviceGenerator {
    pub fn new(missing_cap: usize) -> Self {
        Self { missing_cap }
    }

    pub fn advise(&self, missing: &[String], level: ExperienceLevel) -> Vec<String> {
        let mut advice = Vec::with_capacity(4);
        if !missing.is_empty() && self.missing_cap > 0 {
            let named = &missing[..missing.len().min(self.missing_cap)];
            advice.push(format!(
                "Consider adding projects or experience related to: {}.",
                named.join(", ")
            ));
        }
        let level_advice = match level {
            ExperienceLevel::Fresher => FRESHER_ADVICE,
            ExperienceLevel::Experienced => EXPERIENCED_ADVICE,
        };
        advice.extend(level_advice.iter().map(|s| s.to_string()));
        advice.push(ATS_ADVICE.to_string());
        advice
    }
}

impl Default for AdviceGenerator {
    fn default() -> Self {
        Self::new(5)
    }
}
