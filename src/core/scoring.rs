use crate::core::vocabulary::Vocabulary;
use crate::models::{ApplicantProfile, MatchResult, PostingCriteria, Qualification, ScoringWeights};

/// Calculate the compatibility score (0-100) between posting criteria and an applicant
///
/// Scoring formula:
/// score = round((
///     skill_score * 0.6 +          # share of posting skills the applicant has
///     domain_score * 0.2 +         # same domain category
///     qualification_score * 0.1 +  # requested degree level found in education
///     preference_score * 0.1       # online mode / location soft match
/// ) * 100)
///
/// Skill, domain and qualification outcomes are tagged into `matched` / `unmatched`.
/// The preference term only moves the score.
pub fn compute_match_score(
    criteria: &PostingCriteria,
    applicant: &ApplicantProfile,
    weights: &ScoringWeights,
    vocabulary: &Vocabulary,
) -> MatchResult {
    let mut matched = Vec::new();
    let mut unmatched = Vec::new();

    // Skill overlap
    let mut skill_matches = 0usize;
    for skill in &criteria.skills {
        if applicant.skills.contains(skill) {
            matched.push(format!("skill:{skill}"));
            skill_matches += 1;
        } else {
            unmatched.push(format!("skill:{skill}"));
        }
    }
    let skill_score = if criteria.skills.is_empty() {
        0.0
    } else {
        skill_matches as f64 / criteria.skills.len() as f64
    };

    // Domain relevance
    let domain_score = calculate_domain_score(&criteria.domain, &applicant.domain);
    let domain_tag = format!("domain:{}", criteria.domain);
    if domain_score > 0.0 {
        matched.push(domain_tag);
    } else {
        unmatched.push(domain_tag);
    }

    // Qualification hint
    let qualification_score = calculate_qualification_score(criteria, applicant, vocabulary);
    if qualification_score > 0.0 {
        matched.push("qualification".to_string());
    } else if !criteria.qualifications.is_empty() {
        unmatched.push("qualification".to_string());
    }

    let preference_score = calculate_preference_score(criteria, applicant);

    let total = (weights.skills * skill_score
        + weights.domain * domain_score
        + weights.qualification * qualification_score
        + weights.preference * preference_score)
        * 100.0;

    MatchResult {
        score: total.round().clamp(0.0, 100.0) as u8,
        matched,
        unmatched,
    }
}

/// 1.0 when both domains are set and equal ignoring case
#[inline]
fn calculate_domain_score(posting_domain: &str, applicant_domain: &str) -> f64 {
    if !posting_domain.is_empty()
        && !applicant_domain.is_empty()
        && posting_domain.to_lowercase() == applicant_domain.to_lowercase()
    {
        1.0
    } else {
        0.0
    }
}

/// Master's is checked first; bachelor's only when the master's check misses
#[inline]
fn calculate_qualification_score(
    criteria: &PostingCriteria,
    applicant: &ApplicantProfile,
    vocabulary: &Vocabulary,
) -> f64 {
    let education = applicant.education_strings.join(" ");

    if criteria.requires(Qualification::Master) && vocabulary.holds_master(&education) {
        1.0
    } else if criteria.requires(Qualification::Bachelor) && vocabulary.holds_bachelor(&education) {
        1.0
    } else {
        0.0
    }
}

/// Half for an online posting, half when the posting location contains the applicant's
/// preferred location
#[inline]
fn calculate_preference_score(criteria: &PostingCriteria, applicant: &ApplicantProfile) -> f64 {
    let mut score = 0.0;
    if criteria.mode == "online" {
        score += 0.5;
    }
    if !criteria.location.is_empty()
        && !applicant.preferred_location.is_empty()
        && criteria.location.contains(applicant.preferred_location.as_str())
    {
        score += 0.5;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn create_criteria(skills: &[&str], domain: &str, qualifications: Vec<Qualification>) -> PostingCriteria {
        PostingCriteria {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            domain: domain.to_string(),
            qualifications,
            mode: String::new(),
            location: String::new(),
            eligibility_text: String::new(),
        }
    }

    fn create_applicant(skills: &[&str], domain: &str) -> ApplicantProfile {
        ApplicantProfile {
            skills: skills.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
            education_strings: vec![],
            domain: domain.to_string(),
            preferred_location: String::new(),
        }
    }

    fn score(criteria: &PostingCriteria, applicant: &ApplicantProfile) -> MatchResult {
        compute_match_score(criteria, applicant, &ScoringWeights::default(), &Vocabulary::default())
    }

    #[test]
    fn test_full_skill_match() {
        let criteria = create_criteria(&["react", "node.js"], "ecommerce", vec![]);
        let applicant = create_applicant(&["node.js", "react"], "other");

        let result = score(&criteria, &applicant);

        assert_eq!(result.score, 60);
        assert_eq!(result.matched, vec!["skill:react", "skill:node.js"]);
        assert_eq!(result.unmatched, vec!["domain:ecommerce"]);
    }

    #[test]
    fn test_tag_order_follows_posting_skills() {
        let criteria = create_criteria(&["sql", "aws", "java"], "finance", vec![]);
        let applicant = create_applicant(&["java", "sql"], "finance");

        let result = score(&criteria, &applicant);

        assert_eq!(result.matched, vec!["skill:sql", "skill:java", "domain:finance"]);
        assert_eq!(result.unmatched, vec!["skill:aws"]);
        // 0.6 * 2/3 + 0.2 = 0.6
        assert_eq!(result.score, 60);
    }

    #[test]
    fn test_no_posting_skills_contributes_nothing() {
        let criteria = create_criteria(&[], "marketing", vec![]);
        let applicant = create_applicant(&["react", "seo"], "technology");

        let result = score(&criteria, &applicant);

        assert_eq!(result.score, 0);
        assert!(result.matched.is_empty());
    }

    #[test]
    fn test_domain_match_ignores_case() {
        let criteria = create_criteria(&[], "Other", vec![]);
        let applicant = create_applicant(&[], "other");

        let result = score(&criteria, &applicant);

        assert_eq!(result.score, 20);
        assert_eq!(result.matched, vec!["domain:Other"]);
    }

    #[test]
    fn test_master_checked_before_bachelor() {
        let criteria = create_criteria(&[], "x", vec![Qualification::Bachelor, Qualification::Master]);
        let mut applicant = create_applicant(&[], "y");
        applicant.education_strings = vec!["m.tech data science".to_string()];

        let result = score(&criteria, &applicant);

        assert_eq!(result.score, 10);
        assert_eq!(result.matched, vec!["qualification"]);
    }

    #[test]
    fn test_unmet_qualification_tagged_only_when_requested() {
        let applicant = create_applicant(&[], "y");

        let requested = create_criteria(&[], "x", vec![Qualification::Bachelor]);
        assert_eq!(score(&requested, &applicant).unmatched, vec!["domain:x", "qualification"]);

        let not_requested = create_criteria(&[], "x", vec![Qualification::Freshers]);
        assert_eq!(score(&not_requested, &applicant).unmatched, vec!["domain:x"]);
    }

    #[test]
    fn test_preference_score_is_untagged() {
        let mut criteria = create_criteria(&[], "x", vec![]);
        criteria.mode = "online".to_string();
        criteria.location = "bengaluru, karnataka".to_string();
        let mut applicant = create_applicant(&[], "y");
        applicant.preferred_location = "bengaluru".to_string();

        let result = score(&criteria, &applicant);

        assert_eq!(result.score, 10);
        assert!(result.matched.is_empty());
        assert_eq!(result.unmatched, vec!["domain:x"]);
    }

    #[test]
    fn test_empty_preferred_location_never_matches() {
        let mut criteria = create_criteria(&[], "x", vec![]);
        criteria.location = "remote".to_string();
        let applicant = create_applicant(&[], "y");

        assert_eq!(score(&criteria, &applicant).score, 0);
    }

    #[test]
    fn test_perfect_score() {
        let mut criteria = create_criteria(&["python"], "education", vec![Qualification::Bachelor]);
        criteria.mode = "online".to_string();
        criteria.location = "delhi".to_string();
        let mut applicant = create_applicant(&["python"], "education");
        applicant.education_strings = vec!["bachelor of science".to_string()];
        applicant.preferred_location = "delhi".to_string();

        assert_eq!(score(&criteria, &applicant).score, 100);
    }
}
