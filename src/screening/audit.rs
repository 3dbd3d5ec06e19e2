use crate::{
    screening::model::{BiasAudit, BiasFinding},
    utils::pii,
};

/// Audit raw text for personal attributes
///
/// Must see the text before normalization; normalized text no longer
/// carries the `@`, digits or casing the patterns look for.
/// The name and screening-basis notices are unconditional.
pub fn audit_bias(raw: &str) -> BiasAudit {
    let mut findings = Vec::with_capacity(5);
    if pii::contains_email(raw) {
        findings.push(BiasFinding::EmailMasked);
    }
    if pii::contains_phone(raw) {
        findings.push(BiasFinding::PhoneMasked);
    }
    if pii::contains_gender_term(raw) {
        findings.push(BiasFinding::GenderTermsRemoved);
    }
    findings.push(BiasFinding::NameRemoved);
    findings.push(BiasFinding::ScreeningBasis);
    BiasAudit(findings)
}
