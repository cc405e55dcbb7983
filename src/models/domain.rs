use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::lenient;

/// Raw internship posting as stored by the portal
///
/// Every field is optional; absent or mistyped fields are treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostingRecord {
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub tags: Vec<String>,
    #[serde(rename = "skillsRequired", default, deserialize_with = "lenient::string_list")]
    pub skills_required: Vec<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<String>,
}

/// Raw applicant profile, including any resume text already parsed upstream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    #[serde(alias = "_id", default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient::object_list")]
    pub education: Vec<EducationEntry>,
    #[serde(rename = "preferredLocation", default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub preferred_location: Option<String>,
    #[serde(default, deserialize_with = "lenient::object", skip_serializing_if = "Option::is_none")]
    pub nlp: Option<NlpData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

/// Output of the upstream resume parser
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NlpData {
    #[serde(rename = "parsedText", default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub parsed_text: Option<String>,
    #[serde(default, deserialize_with = "lenient::object", skip_serializing_if = "Option::is_none")]
    pub extracted: Option<ExtractedData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedData {
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
}

/// Qualification hints detected in a posting's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Qualification {
    Bachelor,
    Master,
    Freshers,
    Experienced,
}

impl Qualification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Qualification::Bachelor => "bachelor",
            Qualification::Master => "master",
            Qualification::Freshers => "freshers",
            Qualification::Experienced => "experienced",
        }
    }
}

/// Normalized requirements mined from a posting
///
/// `skills` keeps insertion order: declared skills first, then skills found in the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingCriteria {
    pub skills: Vec<String>,
    pub domain: String,
    pub qualifications: Vec<Qualification>,
    pub mode: String,
    pub location: String,
    pub eligibility_text: String,
}

impl PostingCriteria {
    pub fn requires(&self, qualification: Qualification) -> bool {
        self.qualifications.contains(&qualification)
    }
}

/// Normalized applicant features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantProfile {
    pub skills: BTreeSet<String>,
    pub education_strings: Vec<String>,
    pub domain: String,
    pub preferred_location: String,
}

/// Score plus the tagged feature hits and misses that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u8,
    pub matched: Vec<String>,
    pub unmatched: Vec<String>,
}

/// Routing decision for an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    #[serde(rename = "Proceed to Recruiter")]
    ProceedToRecruiter,
    #[serde(rename = "Auto-Rejected")]
    AutoRejected,
}

impl Decision {
    pub fn label(&self) -> &'static str {
        match self {
            Decision::ProceedToRecruiter => "Proceed to Recruiter",
            Decision::AutoRejected => "Auto-Rejected",
        }
    }

    pub fn proceeds(&self) -> bool {
        matches!(self, Decision::ProceedToRecruiter)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the portal stores on an application after screening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvaluation {
    #[serde(rename = "matchScore")]
    pub score: u8,
    pub matched: Vec<String>,
    pub unmatched: Vec<String>,
    pub decision: Decision,
    pub summary: String,
    pub criteria: PostingCriteria,
    pub profile: ApplicantProfile,
}

/// One applicant's place in a ranked batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedApplicant {
    #[serde(rename = "applicantId")]
    pub applicant_id: Option<String>,
    pub name: Option<String>,
    #[serde(flatten)]
    pub evaluation: MatchEvaluation,
}

/// Applicants for one posting, best score first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedApplicants {
    pub results: Vec<RankedApplicant>,
    pub total_applicants: usize,
    pub proceed_count: usize,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skills: f64,
    pub domain: f64,
    pub qualification: f64,
    pub preference: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.6,
            domain: 0.2,
            qualification: 0.1,
            preference: 0.1,
        }
    }
}
