use thiserror::Error;

use crate::llm_client::LlmError;

/// Pipeline-level error type.
///
/// Only conditions that abort a screening run appear here. Malformed model
/// output and scoring defects are recovered locally (fallback profile,
/// worst-case breakdown) and never surface as errors.
#[derive(Debug, Error)]
pub enum ScreeningError {
    /// The document format is not handled at all; no fallback text exists.
    #[error("Unsupported document format: {0}. Supported formats: .pdf, .docx")]
    UnsupportedFormat(String),

    /// Every extraction strategy for a supported format failed or produced
    /// no usable text.
    #[error("Text extraction failed: {0}")]
    Extraction(#[from] anyhow::Error),

    /// Rejected before extraction; the upload layer should enforce the same
    /// limit but the core does not rely on it.
    #[error("Document too large: {size} bytes (limit {limit})")]
    DocumentTooLarge { size: usize, limit: usize },

    /// The completion call itself could not be completed. Surfaced only when
    /// the analyzer runs in strict mode.
    #[error("Analysis service unavailable: {0}")]
    Upstream(#[from] LlmError),
}
