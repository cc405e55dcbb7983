use std::collections::BTreeSet;

use crate::core::criteria::lowered;
use crate::core::vocabulary::{Vocabulary, OTHER_DOMAIN};
use crate::models::{ApplicantProfile, ApplicantRecord};

/// Normalize an applicant profile for scoring
///
/// Skills are the union of resume-extracted and self-declared skills. The domain is guessed
/// from the parsed resume text with the same keyword tables used for postings.
pub fn extract_applicant(applicant: &ApplicantRecord, vocabulary: &Vocabulary) -> ApplicantProfile {
    let nlp = applicant.nlp.as_ref();

    let extracted = nlp
        .and_then(|nlp| nlp.extracted.as_ref())
        .map(|extracted| extracted.skills.as_slice())
        .unwrap_or_default();
    let skills: BTreeSet<String> = extracted
        .iter()
        .chain(applicant.skills.iter())
        .map(|skill| skill.to_lowercase())
        .collect();

    let education_strings = applicant
        .education
        .iter()
        .map(|entry| {
            format!(
                "{} {}",
                entry.degree.as_deref().unwrap_or_default(),
                entry.specialization.as_deref().unwrap_or_default()
            )
            .trim()
            .to_lowercase()
        })
        .collect();

    let resume_text = nlp.map(|nlp| lowered(&nlp.parsed_text)).unwrap_or_default();
    let domain = vocabulary
        .best_domain(&resume_text)
        .unwrap_or(OTHER_DOMAIN)
        .to_string();

    ApplicantProfile {
        skills,
        education_strings,
        domain,
        preferred_location: lowered(&applicant.preferred_location),
    }
}
