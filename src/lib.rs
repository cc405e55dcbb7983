//! Intern Match - candidate-to-posting matching engine for the internship portal
//!
//! Mines a posting and an applicant profile into comparable features, computes a weighted
//! compatibility score, and renders a routing decision with a short rationale. The engine
//! is pure and stateless; the portal owns storage and display.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{build_summary, decide_action, Matcher, Vocabulary};
pub use models::{
    ApplicantProfile, ApplicantRecord, Decision, MatchEvaluation, MatchResult, PostingCriteria,
    PostingRecord, ScoringWeights,
};
