//! Candidate screening core.
//!
//! Takes an uploaded résumé document and a job requirement record, extracts
//! and normalizes the résumé text, asks an LLM to distill a structured
//! candidate profile, and computes a weighted fit score with a category
//! label. The HTTP surface, persistence, and file storage around this live
//! in the embedding application.
//!
//! Entry point: [`pipeline::ScreeningPipeline`]. Each stage
//! ([`extraction`], [`analysis`], [`scoring`]) is also usable on its own.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod llm_client;
pub mod models;
pub mod pipeline;
pub mod scoring;

pub use crate::analysis::{FailurePolicy, ProfileAnalyzer};
pub use crate::config::Config;
pub use crate::errors::ScreeningError;
pub use crate::llm_client::{CompletionService, LlmClient, LlmError};
pub use crate::models::{
    CandidateProfile, DocumentFormat, JobRequirements, MatchCategory, RawDocument, ScoreBreakdown,
};
pub use crate::pipeline::{ScreeningPipeline, ScreeningReport};
