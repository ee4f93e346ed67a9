//! Match scoring — candidate profile vs job requirements.
//!
//! Three independent sub-scores (skills, experience, education), each in
//! [0.0, 1.0], combined with fixed weights and classified into a category.
//! Pure and total: a screening run always gets a comparable number.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::models::{CandidateProfile, JobRequirements, MatchCategory, ScoreBreakdown};

// Weights must sum to exactly 1.0.
pub const SKILLS_WEIGHT: f64 = 0.50;
pub const EXPERIENCE_WEIGHT: f64 = 0.30;
pub const EDUCATION_WEIGHT: f64 = 0.20;

/// Education ranking table. Matched by case-insensitive substring
/// containment; first match in table order wins.
const EDUCATION_LEVELS: [(&str, u32); 8] = [
    ("high school", 1),
    ("associate", 2),
    ("bachelor", 3),
    ("bachelor's", 3),
    ("master", 4),
    ("master's", 4),
    ("phd", 5),
    ("doctorate", 5),
];

/// Computes the full score breakdown for a candidate against a job.
pub fn score(profile: &CandidateProfile, job: &JobRequirements) -> ScoreBreakdown {
    let skills_score = skills_score(&profile.skills, &job.skills);
    let experience_score = experience_score(profile.experience_years, &job.minimum_experience);
    let education_score =
        education_score(&profile.education_level, job.education_level.as_deref());

    let overall_score = round2(
        skills_score * SKILLS_WEIGHT
            + experience_score * EXPERIENCE_WEIGHT
            + education_score * EDUCATION_WEIGHT,
    );

    if !overall_score.is_finite() {
        warn!("Score computation produced a non-finite value, substituting worst case");
        return ScoreBreakdown::worst_case();
    }

    info!(
        "Match scores - skills: {skills_score:.2}, experience: {experience_score:.2}, \
         education: {education_score:.2}, overall: {overall_score:.2}"
    );

    ScoreBreakdown {
        skills_score,
        experience_score,
        education_score,
        overall_score,
        category: MatchCategory::from_score(overall_score),
    }
}

/// Fraction of required skills the candidate covers, after normalizing both
/// sides (lowercase + trim). No requirements is a perfect match; no candidate
/// skills against any requirement is zero.
pub fn skills_score(candidate_skills: &[String], required_skills: &[String]) -> f64 {
    if required_skills.is_empty() {
        return 1.0;
    }
    if candidate_skills.is_empty() {
        return 0.0;
    }

    let candidate: HashSet<String> = candidate_skills.iter().map(|s| normalize_skill(s)).collect();
    let required: HashSet<String> = required_skills.iter().map(|s| normalize_skill(s)).collect();

    let matched = candidate.intersection(&required).count();
    (matched as f64 / required.len() as f64).min(1.0)
}

fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Tiered experience score against a free-text requirement.
///
/// Exceeding the bar is rewarded beyond merely meeting it, and zero
/// experience still earns a small floor. An unparseable requirement scores
/// a fixed neutral 0.5 rather than penalizing the candidate.
pub fn experience_score(candidate_years: u32, required_experience: &str) -> f64 {
    if required_experience.is_empty()
        || required_experience.eq_ignore_ascii_case("no experience required")
    {
        return 1.0;
    }

    let Some(required_years) = parse_required_years(required_experience) else {
        return 0.5;
    };

    let candidate = f64::from(candidate_years);
    let required = f64::from(required_years);

    if candidate >= required {
        let bonus = ((candidate - required) * 0.05).min(0.2);
        (0.8 + bonus).min(1.0)
    } else if candidate >= required * 0.75 {
        0.8
    } else if candidate >= required * 0.5 {
        0.6
    } else if candidate_years > 0 {
        0.4
    } else {
        0.2
    }
}

/// Extracts the first integer substring from free text, e.g. "3+ years" → 3.
/// Returns `None` when the text contains no digits (or the run overflows).
pub fn parse_required_years(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: String = text[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Ranks candidate and required education against the fixed level table.
/// Without a requirement, a bachelor's degree alone is a perfect score.
pub fn education_score(candidate_education: &str, required_education: Option<&str>) -> f64 {
    let candidate_rank = education_rank(candidate_education);

    let required = required_education
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let Some(required) = required else {
        return (f64::from(candidate_rank) / 3.0).min(1.0);
    };

    let required_rank = education_rank(required);
    if candidate_rank >= required_rank {
        1.0
    } else if candidate_rank + 1 >= required_rank {
        0.7
    } else if candidate_rank > 0 {
        0.4
    } else {
        0.0
    }
}

fn education_rank(text: &str) -> u32 {
    let lower = text.to_lowercase();
    EDUCATION_LEVELS
        .iter()
        .find(|(name, _)| lower.contains(name))
        .map(|&(_, rank)| rank)
        .unwrap_or(0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn job(required_skills: &[&str], minimum_experience: &str, education: Option<&str>) -> JobRequirements {
        JobRequirements {
            title: "Backend Developer".to_string(),
            description: None,
            skills: skills(required_skills),
            minimum_experience: minimum_experience.to_string(),
            education_level: education.map(str::to_string),
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert_eq!(SKILLS_WEIGHT + EXPERIENCE_WEIGHT + EDUCATION_WEIGHT, 1.0);
    }

    #[test]
    fn test_skills_no_requirements_is_perfect() {
        assert_eq!(skills_score(&skills(&["Python"]), &[]), 1.0);
        assert_eq!(skills_score(&[], &[]), 1.0);
    }

    #[test]
    fn test_skills_empty_candidate_is_zero() {
        assert_eq!(skills_score(&[], &skills(&["Python"])), 0.0);
    }

    #[test]
    fn test_skills_normalization_ignores_case_and_whitespace() {
        let candidate = skills(&["  python ", "FASTAPI"]);
        let required = skills(&["Python", "FastAPI"]);
        assert_eq!(skills_score(&candidate, &required), 1.0);
    }

    #[test]
    fn test_skills_partial_match() {
        let candidate = skills(&["Python", "Docker"]);
        let required = skills(&["Python", "FastAPI", "PostgreSQL", "Kubernetes"]);
        assert!((skills_score(&candidate, &required) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_skills_score_monotonic_in_intersection() {
        let required = skills(&["Python", "FastAPI", "PostgreSQL"]);
        let one = skills_score(&skills(&["Python"]), &required);
        let two = skills_score(&skills(&["Python", "FastAPI"]), &required);
        let three = skills_score(&skills(&["Python", "FastAPI", "PostgreSQL"]), &required);
        assert!(one < two && two < three);
        assert_eq!(three, 1.0);
    }

    #[test]
    fn test_skills_duplicates_in_requirements_deduplicate() {
        let candidate = skills(&["Python"]);
        let required = skills(&["Python", "python", " PYTHON "]);
        assert_eq!(skills_score(&candidate, &required), 1.0);
    }

    #[test]
    fn test_experience_no_requirement_is_perfect() {
        assert_eq!(experience_score(0, ""), 1.0);
        assert_eq!(experience_score(0, "No Experience Required"), 1.0);
    }

    #[test]
    fn test_experience_unparseable_requirement_is_neutral() {
        assert_eq!(experience_score(4, "some prior exposure preferred"), 0.5);
    }

    #[test]
    fn test_experience_meets_requirement_exactly() {
        assert_eq!(experience_score(3, "3+ years"), 0.8);
    }

    #[test]
    fn test_experience_exceeding_earns_bonus() {
        // 5 vs 3 required: 0.8 + min(2 * 0.05, 0.2) = 0.9
        assert!((experience_score(5, "3+ years") - 0.9).abs() < f64::EPSILON);
        // Bonus caps at 0.2.
        assert_eq!(experience_score(20, "3+ years"), 1.0);
    }

    #[test]
    fn test_experience_tiers_below_requirement() {
        // 3 vs 4 required: 0.75 ratio → 0.8
        assert_eq!(experience_score(3, "4 years"), 0.8);
        // 2 vs 4 required: 0.5 ratio → 0.6
        assert_eq!(experience_score(2, "4 years"), 0.6);
        // 1 vs 4 required: below half but nonzero → 0.4
        assert_eq!(experience_score(1, "4 years"), 0.4);
    }

    #[test]
    fn test_experience_zero_years_keeps_floor() {
        assert_eq!(experience_score(0, "3+ years"), 0.2);
    }

    #[test]
    fn test_parse_required_years_first_integer_wins() {
        assert_eq!(parse_required_years("3+ years"), Some(3));
        assert_eq!(parse_required_years("minimum 10 years, ideally 15"), Some(10));
        assert_eq!(parse_required_years("entry level"), None);
        assert_eq!(parse_required_years(""), None);
    }

    #[test]
    fn test_parse_required_years_overflow_is_none() {
        assert_eq!(parse_required_years("99999999999999999999 years"), None);
    }

    #[test]
    fn test_education_without_requirement_scales_to_bachelor() {
        assert_eq!(education_score("Bachelor's in Computer Science", None), 1.0);
        assert_eq!(education_score("PhD in Physics", None), 1.0);
        assert!((education_score("Associate degree", None) - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(education_score("", None), 0.0);
    }

    #[test]
    fn test_education_blank_requirement_scores_like_none() {
        assert_eq!(education_score("Master's", Some("  ")), 1.0);
    }

    #[test]
    fn test_education_meets_or_exceeds_requirement() {
        assert_eq!(education_score("Master of Science", Some("Bachelor's")), 1.0);
        assert_eq!(education_score("Bachelor's", Some("Bachelor's")), 1.0);
    }

    #[test]
    fn test_education_one_level_below() {
        assert_eq!(education_score("Bachelor's", Some("Master's")), 0.7);
    }

    #[test]
    fn test_education_distant_but_present() {
        assert_eq!(education_score("High School Diploma", Some("PhD")), 0.4);
    }

    #[test]
    fn test_education_unrecognized_candidate_against_requirement() {
        assert_eq!(education_score("bootcamp graduate", Some("Bachelor's")), 0.0);
    }

    #[test]
    fn test_education_table_order_prefers_first_match() {
        // "master's" contains "master"; both rank 4.
        assert_eq!(education_score("Master's degree", Some("master")), 1.0);
    }

    #[test]
    fn test_overall_end_to_end_scenario() {
        let profile = CandidateProfile {
            skills: skills(&["Python", "FastAPI", "PostgreSQL", "Docker"]),
            experience_years: 5,
            education_level: "Bachelor's in Computer Science".to_string(),
            ..CandidateProfile::default()
        };
        let job = job(&["Python", "FastAPI", "PostgreSQL"], "3+ years", None);

        let breakdown = score(&profile, &job);
        assert_eq!(breakdown.skills_score, 1.0);
        assert!((breakdown.experience_score - 0.9).abs() < f64::EPSILON);
        assert_eq!(breakdown.education_score, 1.0);
        // 1.0*0.5 + 0.9*0.3 + 1.0*0.2 = 0.97
        assert!((breakdown.overall_score - 0.97).abs() < f64::EPSILON);
        assert_eq!(breakdown.category, MatchCategory::Excellent);
    }

    #[test]
    fn test_overall_stays_in_unit_interval() {
        let profile = CandidateProfile {
            skills: skills(&["Python"]),
            experience_years: 40,
            education_level: "PhD".to_string(),
            ..CandidateProfile::default()
        };
        let breakdown = score(&profile, &job(&["Python"], "1+ years", Some("Bachelor's")));
        assert!(breakdown.overall_score <= 1.0);
        assert!(breakdown.overall_score >= 0.0);
    }

    #[test]
    fn test_fallback_profile_scores_poorly_but_comparably() {
        let profile = CandidateProfile {
            missing_skills: skills(&["Python", "FastAPI"]),
            extraction_error: Some("Error parsing AI response".to_string()),
            ..CandidateProfile::default()
        };
        let breakdown = score(&profile, &job(&["Python", "FastAPI"], "3+ years", None));
        assert_eq!(breakdown.skills_score, 0.0);
        assert_eq!(breakdown.experience_score, 0.2);
        // Unknown education, no requirement → 0.0
        assert_eq!(breakdown.education_score, 0.0);
        assert!((breakdown.overall_score - 0.06).abs() < f64::EPSILON);
        assert_eq!(breakdown.category, MatchCategory::Poor);
    }

    #[test]
    fn test_overall_rounds_to_two_decimals() {
        let profile = CandidateProfile {
            skills: skills(&["Python", "FastAPI", "PostgreSQL"]),
            experience_years: 1,
            education_level: "High School".to_string(),
            ..CandidateProfile::default()
        };
        // skills 2/3, experience 0.4, education 1/3:
        // 0.666..*0.5 + 0.4*0.3 + 0.333..*0.2 = 0.52
        let breakdown = score(
            &profile,
            &job(&["Python", "FastAPI", "Kubernetes"], "4 years", None),
        );
        assert_eq!(breakdown.overall_score, 0.52);
        assert_eq!(breakdown.category, MatchCategory::Fair);
    }
}
