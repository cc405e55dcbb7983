use crate::core::{
    applicant::extract_applicant,
    criteria::extract_posting_criteria,
    decision::{build_summary, decide_action, DEFAULT_THRESHOLD},
    scoring::compute_match_score,
    vocabulary::Vocabulary,
};
use crate::models::{
    ApplicantProfile, ApplicantRecord, MatchEvaluation, MatchResult, PostingCriteria,
    PostingRecord, RankedApplicant, RankedApplicants, ScoringWeights,
};

/// Longest summary the portal stores on an application
pub const MAX_SUMMARY_CHARS: usize = 1000;

/// Screening orchestrator - runs the four-stage pipeline
///
/// # Pipeline Stages
/// 1. Posting criteria extraction
/// 2. Applicant feature extraction
/// 3. Weighted scoring
/// 4. Decision and summary rendering
///
/// Holds only read-only configuration; every call is independent, so one `Matcher`
/// can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    vocabulary: Vocabulary,
    weights: ScoringWeights,
    threshold: u8,
}

impl Matcher {
    pub fn new(vocabulary: Vocabulary, weights: ScoringWeights, threshold: u8) -> Self {
        Self {
            vocabulary,
            weights,
            threshold,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(Vocabulary::default(), ScoringWeights::default(), DEFAULT_THRESHOLD)
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn extract_posting_criteria(&self, posting: &PostingRecord) -> PostingCriteria {
        extract_posting_criteria(posting, &self.vocabulary)
    }

    pub fn extract_applicant(&self, applicant: &ApplicantRecord) -> ApplicantProfile {
        extract_applicant(applicant, &self.vocabulary)
    }

    pub fn compute_match_score(
        &self,
        criteria: &PostingCriteria,
        applicant: &ApplicantProfile,
    ) -> MatchResult {
        compute_match_score(criteria, applicant, &self.weights, &self.vocabulary)
    }

    /// Screen one applicant against one posting with the configured threshold
    pub fn evaluate(&self, posting: &PostingRecord, applicant: &ApplicantRecord) -> MatchEvaluation {
        self.evaluate_with_threshold(posting, applicant, self.threshold)
    }

    /// Screen one applicant against one posting with a caller-supplied threshold
    pub fn evaluate_with_threshold(
        &self,
        posting: &PostingRecord,
        applicant: &ApplicantRecord,
        threshold: u8,
    ) -> MatchEvaluation {
        let criteria = self.extract_posting_criteria(posting);
        self.evaluate_against(criteria, applicant, threshold)
    }

    /// Screen a batch of applicants for one posting, best score first
    ///
    /// Criteria are extracted once. Equal scores keep input order. `proceed_count`
    /// covers every evaluated applicant, not just the returned ones.
    pub fn rank(
        &self,
        posting: &PostingRecord,
        applicants: &[ApplicantRecord],
        threshold: u8,
        limit: usize,
    ) -> RankedApplicants {
        let criteria = self.extract_posting_criteria(posting);

        let mut results: Vec<RankedApplicant> = applicants
            .iter()
            .map(|applicant| RankedApplicant {
                applicant_id: applicant.id.clone(),
                name: applicant.name.clone(),
                evaluation: self.evaluate_against(criteria.clone(), applicant, threshold),
            })
            .collect();

        let proceed_count = results
            .iter()
            .filter(|ranked| ranked.evaluation.decision.proceeds())
            .count();

        // sort_by is stable, so ties stay in submission order
        results.sort_by(|a, b| b.evaluation.score.cmp(&a.evaluation.score));
        results.truncate(limit);

        tracing::debug!(
            "Ranked {} applicants ({} proceed), returning {}",
            applicants.len(),
            proceed_count,
            results.len()
        );

        RankedApplicants {
            results,
            total_applicants: applicants.len(),
            proceed_count,
        }
    }

    fn evaluate_against(
        &self,
        criteria: PostingCriteria,
        applicant: &ApplicantRecord,
        threshold: u8,
    ) -> MatchEvaluation {
        let profile = self.extract_applicant(applicant);
        let MatchResult {
            score,
            matched,
            unmatched,
        } = self.compute_match_score(&criteria, &profile);

        let decision = decide_action(score, threshold);
        let mut summary = build_summary(
            applicant.name.as_deref().unwrap_or_default(),
            score,
            &matched,
            &unmatched,
        );
        truncate_chars(&mut summary, MAX_SUMMARY_CHARS);

        tracing::debug!(
            applicant = applicant.id.as_deref().unwrap_or("-"),
            score,
            %decision,
            "Evaluated applicant"
        );

        MatchEvaluation {
            score,
            matched,
            unmatched,
            decision,
            summary,
            criteria,
            profile,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn truncate_chars(text: &mut String, max_chars: usize) {
    if let Some((index, _)) = text.char_indices().nth(max_chars) {
        text.truncate(index);
    }
}
