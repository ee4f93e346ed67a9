use serde::{Deserialize, Serialize};

/// Requirements for an open position, as provided by the job-management layer.
/// Immutable input to analysis and scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequirements {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Required skills. May be empty, in which case the skills sub-score is a
    /// perfect match by definition.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Free text, e.g. "3+ years" or "no experience required".
    #[serde(default)]
    pub minimum_experience: String,
    #[serde(default)]
    pub education_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_with_optional_fields_absent() {
        let json = r#"{"title": "Backend Developer"}"#;
        let job: JobRequirements = serde_json::from_str(json).unwrap();
        assert_eq!(job.title, "Backend Developer");
        assert!(job.description.is_none());
        assert!(job.skills.is_empty());
        assert!(job.minimum_experience.is_empty());
        assert!(job.education_level.is_none());
    }

    #[test]
    fn test_deserializes_full_record() {
        let json = r#"{
            "title": "Backend Developer",
            "description": "Build APIs",
            "skills": ["Python", "FastAPI", "PostgreSQL"],
            "minimum_experience": "3+ years",
            "education_level": "Bachelor's"
        }"#;
        let job: JobRequirements = serde_json::from_str(json).unwrap();
        assert_eq!(job.skills.len(), 3);
        assert_eq!(job.minimum_experience, "3+ years");
        assert_eq!(job.education_level.as_deref(), Some("Bachelor's"));
    }
}
