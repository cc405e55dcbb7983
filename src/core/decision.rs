use crate::models::Decision;

/// Default score needed to route an application to a recruiter
pub const DEFAULT_THRESHOLD: u8 = 80;

/// Skill tags listed per side of the summary
const SUMMARY_SKILL_LIMIT: usize = 5;

const SKILL_TAG_PREFIX: &str = "skill:";

/// Route an application by score. A score equal to the threshold proceeds.
pub fn decide_action(score: u8, threshold: u8) -> Decision {
    if score >= threshold {
        Decision::ProceedToRecruiter
    } else {
        Decision::AutoRejected
    }
}

/// Render the one-line screening rationale shown to recruiters
pub fn build_summary(applicant_name: &str, score: u8, matched: &[String], unmatched: &[String]) -> String {
    let name = if applicant_name.is_empty() {
        "Applicant"
    } else {
        applicant_name
    };

    format!(
        "{} match score {}%. Matched: {}. Missing: {}.",
        name,
        score,
        skill_list(matched),
        skill_list(unmatched)
    )
}

/// Joined skill names, or "none" when the joined text is empty (a lone blank skill included)
fn skill_list(tags: &[String]) -> String {
    let joined = tags
        .iter()
        .filter_map(|tag| tag.strip_prefix(SKILL_TAG_PREFIX))
        .take(SUMMARY_SKILL_LIMIT)
        .collect::<Vec<_>>()
        .join(", ");

    if joined.is_empty() {
        "none".to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(decide_action(79, 80), Decision::AutoRejected);
        assert_eq!(decide_action(80, 80), Decision::ProceedToRecruiter);
        assert_eq!(decide_action(0, 0), Decision::ProceedToRecruiter);
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(
            build_summary("", 55, &[], &[]),
            "Applicant match score 55%. Matched: none. Missing: none."
        );
    }

    #[test]
    fn test_summary_lists_only_skill_tags() {
        let matched = tags(&["skill:react", "domain:technology", "qualification", "skill:sql"]);
        let unmatched = tags(&["skill:aws"]);

        assert_eq!(
            build_summary("Asha", 72, &matched, &unmatched),
            "Asha match score 72%. Matched: react, sql. Missing: aws."
        );
    }

    #[test]
    fn test_blank_skill_renders_none() {
        let unmatched = tags(&["skill:", "domain:Other"]);

        assert_eq!(
            build_summary("", 20, &[], &unmatched),
            "Applicant match score 20%. Matched: none. Missing: none."
        );
    }

    #[test]
    fn test_two_blank_skills_keep_separator() {
        let unmatched = tags(&["skill:", "skill:"]);

        assert!(build_summary("", 0, &[], &unmatched).ends_with("Missing: , ."));
    }

    #[test]
    fn test_summary_caps_at_five_skills() {
        let matched = tags(&[
            "skill:a", "skill:b", "skill:c", "skill:d", "skill:e", "skill:f",
        ]);

        let summary = build_summary("Ravi", 90, &matched, &[]);

        assert!(summary.contains("Matched: a, b, c, d, e."));
        assert!(!summary.contains(", f"));
    }
}
