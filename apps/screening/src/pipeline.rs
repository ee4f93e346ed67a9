//! Screening pipeline — extraction → analysis → scoring.
//!
//! One invocation per submission; no state survives the call, so a single
//! pipeline value can serve concurrent submissions.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::info;

use crate::analysis::{FailurePolicy, ProfileAnalyzer};
use crate::config::Config;
use crate::errors::ScreeningError;
use crate::extraction;
use crate::llm_client::{CompletionService, LlmClient};
use crate::models::{CandidateProfile, JobRequirements, RawDocument, ScoreBreakdown};
use crate::scoring;

/// Everything a screening run produces: the cleaned résumé text (for the
/// persistence layer to store), the extracted profile, and the score.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReport {
    pub resume_text: String,
    pub profile: CandidateProfile,
    pub score: ScoreBreakdown,
}

pub struct ScreeningPipeline {
    analyzer: ProfileAnalyzer,
    max_document_bytes: usize,
}

impl ScreeningPipeline {
    /// Builds a pipeline backed by the real completion API.
    pub fn from_config(config: &Config) -> Self {
        let llm = LlmClient::new(
            config.anthropic_api_key.clone(),
            config.model.clone(),
            Duration::from_secs(config.llm_timeout_secs),
        );
        Self::new(
            Arc::new(llm),
            config.failure_policy(),
            config.max_file_size_bytes(),
        )
    }

    pub fn new(
        completion: Arc<dyn CompletionService>,
        policy: FailurePolicy,
        max_document_bytes: usize,
    ) -> Self {
        Self {
            analyzer: ProfileAnalyzer::new(completion, policy),
            max_document_bytes,
        }
    }

    /// Screens one résumé against one job.
    ///
    /// Fails only when the document itself cannot be read (format, size,
    /// extraction) or — in strict mode — when the completion service is
    /// unavailable. Malformed model output and scoring defects degrade
    /// rather than fail.
    pub async fn screen(
        &self,
        document: &RawDocument,
        job: &JobRequirements,
    ) -> Result<ScreeningReport, ScreeningError> {
        if document.bytes.len() > self.max_document_bytes {
            return Err(ScreeningError::DocumentTooLarge {
                size: document.bytes.len(),
                limit: self.max_document_bytes,
            });
        }

        let resume_text = extraction::extract(document)?;
        let profile = self.analyzer.analyze(&resume_text, job).await?;
        let score = scoring::score(&profile, job);

        info!(
            "Resume analyzed - match score: {:.2} ({})",
            score.overall_score, score.category
        );

        Ok(ScreeningReport {
            resume_text,
            profile,
            score,
        })
    }
}
