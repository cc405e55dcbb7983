use crate::core::vocabulary::Vocabulary;
use crate::models::{PostingCriteria, PostingRecord, Qualification};

/// Industry label used when a posting declares none and no keyword category hits
pub const DEFAULT_INDUSTRY: &str = "Other";

/// Mine a posting into comparable criteria
///
/// Declared skills come first in their original order, followed by skills spotted in the
/// description, title and tags. Never fails: missing fields read as empty.
pub fn extract_posting_criteria(posting: &PostingRecord, vocabulary: &Vocabulary) -> PostingCriteria {
    let scan_text = scan_text(posting);

    let mut skills: Vec<String> = Vec::new();
    let declared = posting.skills_required.iter().map(|s| s.to_lowercase());
    for skill in declared.chain(vocabulary.find_skills(&scan_text)) {
        if !skills.contains(&skill) {
            skills.push(skill);
        }
    }

    let domain = match vocabulary.best_domain(&scan_text) {
        Some(domain) => domain.to_string(),
        None => posting
            .industry
            .as_deref()
            .filter(|industry| !industry.is_empty())
            .unwrap_or(DEFAULT_INDUSTRY)
            .to_string(),
    };

    PostingCriteria {
        skills,
        domain,
        qualifications: detect_qualifications(&scan_text, vocabulary),
        mode: lowered(&posting.mode),
        location: lowered(&posting.location),
        eligibility_text: lowered(&posting.eligibility),
    }
}

/// Lower-cased description, title and space-joined tags, in that order
fn scan_text(posting: &PostingRecord) -> String {
    let tags = posting
        .tags
        .iter()
        .map(|tag| tag.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    [lowered(&posting.description), lowered(&posting.title), tags].join(" ")
}

fn detect_qualifications(text: &str, vocabulary: &Vocabulary) -> Vec<Qualification> {
    let mut qualifications = Vec::new();
    if vocabulary.mentions_bachelor(text) {
        qualifications.push(Qualification::Bachelor);
    }
    if vocabulary.mentions_master(text) {
        qualifications.push(Qualification::Master);
    }
    if text.contains("fresher") {
        qualifications.push(Qualification::Freshers);
    }
    if text.contains("experience") {
        qualifications.push(Qualification::Experienced);
    }
    qualifications
}

pub(crate) fn lowered(field: &Option<String>) -> String {
    field.as_deref().unwrap_or_default().to_lowercase()
}
