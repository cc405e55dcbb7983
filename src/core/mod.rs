// Core engine exports
pub mod applicant;
pub mod criteria;
pub mod decision;
pub mod matcher;
pub mod scoring;
pub mod vocabulary;

pub use applicant::extract_applicant;
pub use criteria::extract_posting_criteria;
pub use decision::{build_summary, decide_action, DEFAULT_THRESHOLD};
pub use matcher::Matcher;
pub use scoring::compute_match_score;
pub use vocabulary::{DomainKeywords, Vocabulary};
