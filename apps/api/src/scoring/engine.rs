//! ATS score computation.
//!
//! One pure entry point: [`calculate_ats_score`]. Each rubric category is
//! scored independently against its own point budget, the awards are
//! summed, and the total is clamped to 100. Failing a category appends a
//! fixed issue string (projects and keyword match append suggestions
//! instead). The engine never fails and never mutates its input.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::resume::{ResumeDocument, ScoreResult};
use crate::scoring::formatting::check_formatting;
use crate::scoring::keywords::keyword_match_ratio;

// ────────────────────────────────────────────────────────────────────────────
// Rubric configuration
// ────────────────────────────────────────────────────────────────────────────

/// Point budgets and thresholds for every rubric category.
///
/// The defaults are the canonical rubric; tests assert against these
/// named fields rather than repeating the numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRubric {
    pub contact_points: u32,
    pub summary_points: u32,
    /// Summary must be strictly longer than this many characters.
    pub summary_min_chars: usize,
    pub skills_points: u32,
    pub min_skills: usize,
    pub experience_points: u32,
    pub action_verb_points: u32,
    pub metrics_points: u32,
    pub education_points: u32,
    pub projects_points: u32,
    /// Maximum points from keyword matching: floor(ratio * this).
    pub keyword_points: u32,
    pub formatting_bonus: u32,
    /// Keyword match ratios below this trigger a suggestion.
    pub keyword_target: f64,
    pub max_score: u32,
}

impl Default for ScoreRubric {
    fn default() -> Self {
        Self {
            contact_points: 15,
            summary_points: 10,
            summary_min_chars: 50,
            skills_points: 20,
            min_skills: 5,
            experience_points: 15,
            action_verb_points: 5,
            metrics_points: 5,
            education_points: 10,
            projects_points: 10,
            keyword_points: 10,
            formatting_bonus: 5,
            keyword_target: 0.7,
            max_score: 100,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fixed issue / suggestion text
// ────────────────────────────────────────────────────────────────────────────

pub const MISSING_CONTACT_ISSUE: &str = "Missing essential contact information";
pub const SUMMARY_TOO_SHORT_ISSUE: &str = "Professional summary too short or missing";
pub const TOO_FEW_SKILLS_ISSUE: &str = "Need at least 5 relevant skills";
pub const MISSING_EXPERIENCE_ISSUE: &str = "Missing work experience section";
pub const MISSING_EDUCATION_ISSUE: &str = "Missing education section";
pub const ADD_PROJECTS_SUGGESTION: &str = "Add relevant projects to strengthen your profile";

lazy_static! {
    /// Achievement-oriented verbs that signal strong experience bullets.
    static ref ACTION_VERB_RE: Regex = Regex::new(
        r"(?i)\b(developed|implemented|managed|created|improved|increased|reduced|led|designed|built)\b"
    )
    .unwrap();

    /// Quantified impact: percentages, "10+" counts, or outcome verbs.
    static ref METRIC_RE: Regex =
        Regex::new(r"(?i)\d+%|\d+\+|increased|improved|reduced|saved").unwrap();
}

/// Curated action verbs surfaced to users writing experience bullets.
/// Broader than the set the scorer matches on.
pub const SUGGESTED_ACTION_VERBS: &[&str] = &[
    "Achieved",
    "Administered",
    "Analyzed",
    "Built",
    "Created",
    "Delivered",
    "Developed",
    "Designed",
    "Enhanced",
    "Established",
    "Executed",
    "Generated",
    "Implemented",
    "Improved",
    "Increased",
    "Led",
    "Managed",
    "Optimized",
    "Organized",
    "Reduced",
    "Resolved",
    "Streamlined",
    "Supervised",
    "Transformed",
];

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores a resume against the default rubric. An empty `job_description`
/// skips keyword analysis.
pub fn calculate_ats_score(resume: &ResumeDocument, job_description: &str) -> ScoreResult {
    score_with_rubric(resume, job_description, &ScoreRubric::default())
}

/// Scores a resume against an explicit rubric.
pub fn score_with_rubric(
    resume: &ResumeDocument,
    job_description: &str,
    rubric: &ScoreRubric,
) -> ScoreResult {
    let mut score = 0u32;
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    // Contact information
    let contact = &resume.personal_info;
    if !contact.full_name.is_empty() && !contact.email.is_empty() && !contact.phone.is_empty() {
        score += rubric.contact_points;
    } else {
        issues.push(MISSING_CONTACT_ISSUE.to_string());
    }

    // Professional summary
    if resume.summary.chars().count() > rubric.summary_min_chars {
        score += rubric.summary_points;
    } else {
        issues.push(SUMMARY_TOO_SHORT_ISSUE.to_string());
    }

    // Skills
    if resume.skills.len() >= rubric.min_skills {
        score += rubric.skills_points;
    } else {
        issues.push(TOO_FEW_SKILLS_ISSUE.to_string());
    }

    // Work experience, with bonuses for action verbs and quantified impact
    if !resume.experience.is_empty() {
        score += rubric.experience_points;
        if resume
            .experience
            .iter()
            .any(|exp| ACTION_VERB_RE.is_match(&exp.description))
        {
            score += rubric.action_verb_points;
        }
        if resume
            .experience
            .iter()
            .any(|exp| METRIC_RE.is_match(&exp.description))
        {
            score += rubric.metrics_points;
        }
    } else {
        issues.push(MISSING_EXPERIENCE_ISSUE.to_string());
    }

    // Education
    if !resume.education.is_empty() {
        score += rubric.education_points;
    } else {
        issues.push(MISSING_EDUCATION_ISSUE.to_string());
    }

    // Projects are optional enough that their absence is a suggestion
    if !resume.projects.is_empty() {
        score += rubric.projects_points;
    } else {
        suggestions.push(ADD_PROJECTS_SUGGESTION.to_string());
    }

    // Keyword matching, only when a job description was supplied
    let keyword_match = keyword_match_ratio(resume, job_description);
    if !job_description.is_empty() {
        score += (keyword_match * rubric.keyword_points as f64).floor() as u32;
        if keyword_match < rubric.keyword_target {
            let pct = (keyword_match * 100.0).round() as u32;
            let target_pct = (rubric.keyword_target * 100.0).round() as u32;
            suggestions.push(format!("Keyword match: {pct}%. Aim for {target_pct}%+"));
        }
    }

    // Formatting bonus when no date-format issues were found
    let format_issues = check_formatting(resume);
    if format_issues.is_empty() {
        score += rubric.formatting_bonus;
    } else {
        issues.extend(format_issues);
    }

    ScoreResult {
        score: score.min(rubric.max_score),
        issues,
        suggestions,
        keyword_match,
    }
}

/// Human-readable band for a score, for display alongside the number.
pub fn score_label(score: u32) -> &'static str {
    if score >= 90 {
        "Excellent"
    } else if score >= 70 {
        "Good"
    } else if score >= 50 {
        "Fair"
    } else {
        "Needs Improvement"
    }
}
