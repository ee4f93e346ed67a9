use anyhow::{Context, Result};

use crate::analysis::FailurePolicy;
use crate::llm_client::DEFAULT_MODEL;

/// Library configuration loaded from environment variables.
/// Only `ANTHROPIC_API_KEY` is required; everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub model: String,
    pub llm_timeout_secs: u64,
    pub max_file_size_mb: usize,
    /// When set, upstream completion failures propagate to the caller
    /// instead of degrading to the fallback profile.
    pub strict_analysis: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            model: std::env::var("ANTHROPIC_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a positive integer")?,
            max_file_size_mb: std::env::var("MAX_FILE_SIZE_MB")
                .unwrap_or_else(|_| "5".to_string())
                .parse::<usize>()
                .context("MAX_FILE_SIZE_MB must be a positive integer")?,
            strict_analysis: std::env::var("STRICT_ANALYSIS")
                .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE"))
                .unwrap_or(false),
        })
    }

    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        if self.strict_analysis {
            FailurePolicy::Strict
        } else {
            FailurePolicy::Degraded
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_file_size_converts_to_bytes() {
        let config = Config {
            anthropic_api_key: "key".to_string(),
            model: DEFAULT_MODEL.to_string(),
            llm_timeout_secs: 120,
            max_file_size_mb: 5,
            strict_analysis: false,
        };
        assert_eq!(config.max_file_size_bytes(), 5 * 1024 * 1024);
    }

    #[test]
    fn test_failure_policy_follows_strict_flag() {
        let mut config = Config {
            anthropic_api_key: "key".to_string(),
            model: DEFAULT_MODEL.to_string(),
            llm_timeout_secs: 120,
            max_file_size_mb: 5,
            strict_analysis: false,
        };
        assert_eq!(config.failure_policy(), FailurePolicy::Degraded);
        config.strict_analysis = true;
        assert_eq!(config.failure_policy(), FailurePolicy::Strict);
    }
}
