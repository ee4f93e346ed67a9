//! Resume analysis — turns résumé text plus job requirements into a typed
//! `CandidateProfile` via one completion call.
//!
//! The parse side never fails: fenced output is unwrapped, missing keys fill
//! with per-field defaults, and an unparseable response degrades to the
//! fallback profile with the job's full skill list marked missing. Only the
//! completion call itself can fail, and only in strict mode.

pub mod prompts;

use std::sync::Arc;

use tracing::error;

use crate::llm_client::{CompletionService, LlmError};
use crate::models::{CandidateProfile, JobRequirements};

use self::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};

/// What to do when the completion service itself is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Propagate the failure to the caller.
    Strict,
    /// Substitute the fallback profile and keep the run alive.
    #[default]
    Degraded,
}

/// Stateless analysis client. Holds the injected completion service and the
/// upstream-failure policy; safe to share across concurrent runs.
pub struct ProfileAnalyzer {
    completion: Arc<dyn CompletionService>,
    policy: FailurePolicy,
}

impl ProfileAnalyzer {
    pub fn new(completion: Arc<dyn CompletionService>, policy: FailurePolicy) -> Self {
        Self { completion, policy }
    }

    /// Analyzes a résumé against job requirements.
    ///
    /// Malformed model output never fails this call; an `Err` means the
    /// completion service was unreachable and the policy is `Strict`.
    pub async fn analyze(
        &self,
        resume_text: &str,
        job: &JobRequirements,
    ) -> Result<CandidateProfile, LlmError> {
        let prompt = build_analysis_prompt(resume_text, job);

        match self.completion.complete(ANALYSIS_SYSTEM, &prompt).await {
            Ok(raw) => Ok(parse_profile(&raw, job)),
            Err(e) => match self.policy {
                FailurePolicy::Strict => Err(e),
                FailurePolicy::Degraded => {
                    error!("Completion service unavailable, substituting fallback profile: {e}");
                    Ok(fallback_profile(job, &format!("Error: {e}"), &e.to_string()))
                }
            },
        }
    }
}

/// Fills the analysis template. Deterministic: the same inputs always
/// produce the same prompt.
pub fn build_analysis_prompt(resume_text: &str, job: &JobRequirements) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_title}", &job.title)
        .replace("{required_skills}", &job.skills.join(", "))
        .replace("{minimum_experience}", &job.minimum_experience)
        .replace("{description}", job.description.as_deref().unwrap_or("N/A"))
}

/// Parses a completion response into a profile. Total: an unparseable
/// response yields the fallback profile, never an error.
pub fn parse_profile(raw: &str, job: &JobRequirements) -> CandidateProfile {
    let cleaned = strip_code_fences(raw);

    match serde_json::from_str::<CandidateProfile>(cleaned) {
        Ok(profile) => profile,
        Err(e) => {
            error!("Failed to parse analysis response as JSON: {e}");
            error!(
                "Response content: {}",
                cleaned.chars().take(500).collect::<String>()
            );
            fallback_profile(job, "Error parsing AI response", &e.to_string())
        }
    }
}

/// Strips a markdown code fence from model output: split on the fence
/// delimiter, take the segment between the fences, drop a leading `json`
/// language tag. Text without a leading fence passes through trimmed.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    if !text.starts_with("```") {
        return text;
    }
    let Some(inner) = text.split("```").nth(1) else {
        return text;
    };
    inner.strip_prefix("json").unwrap_or(inner).trim()
}

/// The profile substituted when the model response is unusable. Worst-case
/// assumption: nothing could be verified, so every required skill is missing.
pub fn fallback_profile(job: &JobRequirements, summary: &str, error: &str) -> CandidateProfile {
    CandidateProfile {
        skills: Vec::new(),
        experience_years: 0,
        education_level: "Unknown".to_string(),
        key_achievements: Vec::new(),
        summary: summary.to_string(),
        matched_skills: Vec::new(),
        missing_skills: job.skills.clone(),
        extraction_error: Some(error.to_string()),
    }
}
