use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{ApplicantRecord, PostingRecord};

/// Request to screen one applicant against one posting
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EvaluateMatchRequest {
    #[serde(default)]
    pub posting: PostingRecord,
    #[serde(default)]
    pub applicant: ApplicantRecord,
    #[validate(range(max = 100))]
    #[serde(default)]
    pub threshold: Option<u8>,
}

/// Request to screen and rank a batch of applicants for one posting
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankApplicantsRequest {
    #[serde(default)]
    pub posting: PostingRecord,
    #[validate(length(min = 1))]
    pub applicants: Vec<ApplicantRecord>,
    #[validate(range(max = 100))]
    #[serde(default)]
    pub threshold: Option<u8>,
    #[validate(range(min = 1, max = 500))]
    #[serde(default)]
    pub limit: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let req: EvaluateMatchRequest =
            serde_json::from_str(r#"{"posting": {}, "applicant": {}, "threshold": 101}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_batch_rejected() {
        let req: RankApplicantsRequest =
            serde_json::from_str(r#"{"posting": {}, "applicants": []}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_defaults_accepted() {
        let req: EvaluateMatchRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validate().is_ok());
        assert!(req.threshold.is_none());
    }
}
