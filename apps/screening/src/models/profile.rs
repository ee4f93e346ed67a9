use serde::{Deserialize, Serialize};

/// Structured candidate profile extracted from a résumé.
///
/// Every field carries a serde default so a model response that omits keys
/// still deserializes; a key present with the wrong type fails the whole
/// parse and the caller substitutes the fallback profile instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default = "default_education_level")]
    pub education_level: String,
    #[serde(default)]
    pub key_achievements: Vec<String>,
    #[serde(default)]
    pub summary: String,
    /// Required skills the model found in the résumé.
    #[serde(default)]
    pub matched_skills: Vec<String>,
    /// Required skills the model did not find in the résumé.
    #[serde(default)]
    pub missing_skills: Vec<String>,
    /// Set when this profile was substituted for an unusable model response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extraction_error: Option<String>,
}

fn default_education_level() -> String {
    "Unknown".to_string()
}

impl Default for CandidateProfile {
    fn default() -> Self {
        Self {
            skills: Vec::new(),
            experience_years: 0,
            education_level: default_education_level(),
            key_achievements: Vec::new(),
            summary: String::new(),
            matched_skills: Vec::new(),
            missing_skills: Vec::new(),
            extraction_error: None,
        }
    }
}
