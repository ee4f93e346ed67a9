// Prompt constants for resume analysis. Placeholders are `{token}` markers
// filled with str::replace before sending.

/// System prompt — establishes the recruiter persona and the JSON-only
/// constraint.
pub const ANALYSIS_SYSTEM: &str =
    "You are an expert HR recruiter. Always respond with valid JSON only.";

/// Analysis prompt template. Replace `{resume_text}`, `{job_title}`,
/// `{required_skills}`, `{minimum_experience}`, `{description}` before
/// sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert HR recruiter analyzing resumes. Analyze the following resume and extract structured information.

RESUME TEXT:
{resume_text}

JOB REQUIREMENTS:
- Job Title: {job_title}
- Required Skills: {required_skills}
- Minimum Experience: {minimum_experience}
- Description: {description}

TASK:
Extract and return ONLY a valid JSON object with the following structure (no additional text):
{
  "skills": ["skill1", "skill2", ...],
  "experience_years": <number>,
  "education_level": "High School/Bachelor's/Master's/PhD/Other",
  "key_achievements": ["achievement1", "achievement2", ...],
  "summary": "Brief 2-3 sentence candidate summary",
  "matched_skills": ["skill1", "skill2", ...],
  "missing_skills": ["skill1", "skill2", ...]
}

INSTRUCTIONS:
1. Extract ALL technical and soft skills mentioned in the resume
2. Calculate total years of professional experience (return as integer)
3. Identify highest education level
4. List 3-5 key achievements or accomplishments
5. Compare resume skills with required skills
6. List matched skills (skills in both resume and requirements)
7. List missing skills (required skills not found in resume)

Return ONLY the JSON object, no other text."#;
