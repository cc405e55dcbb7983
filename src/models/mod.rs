// Model exports
pub mod domain;
pub mod lenient;
pub mod requests;
pub mod responses;

pub use domain::{
    ApplicantProfile, ApplicantRecord, Decision, EducationEntry, ExtractedData, MatchEvaluation,
    MatchResult, NlpData, PostingCriteria, PostingRecord, Qualification, RankedApplicant,
    RankedApplicants, ScoringWeights,
};
pub use requests::{EvaluateMatchRequest, RankApplicantsRequest};
pub use responses::{ErrorResponse, HealthResponse};
