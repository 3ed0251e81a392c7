//! Formatting consistency checks over a resume's date fields.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::resume::ResumeDocument;

lazy_static! {
    /// Accepts "03/2024" style or "March 2024" style dates.
    static ref DATE_FORMAT_RE: Regex = Regex::new(r"\d{2}/\d{4}|\w+ \d{4}").unwrap();
}

pub const DATE_FORMAT_ISSUE: &str = "Use consistent date format (MM/YYYY or Month YYYY)";

/// Checks date formatting across the whole document.
///
/// All date-bearing fields are joined into a single blob and the blob is
/// tested once: if it is non-empty and contains no recognizable date, one
/// issue is emitted. This is intentionally coarse — it cannot pinpoint
/// which entry is wrong, and one well-formed date can mask malformed ones
/// elsewhere. An entry whose dates are all blank still makes the blob
/// non-empty (the joining spaces survive), so it triggers the issue.
pub fn check_formatting(resume: &ResumeDocument) -> Vec<String> {
    let mut parts = Vec::new();
    for exp in &resume.experience {
        parts.push(format!("{} {}", exp.start_date, exp.end_date));
    }
    for edu in &resume.education {
        parts.push(edu.graduation_date.clone());
    }
    for project in &resume.projects {
        parts.push(project.date.clone());
    }
    let all_dates = parts.join(" ");

    let mut issues = Vec::new();
    if !all_dates.is_empty() && !DATE_FORMAT_RE.is_match(&all_dates) {
        issues.push(DATE_FORMAT_ISSUE.to_string());
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry, ProjectEntry};

    fn resume_with_experience_dates(start: &str, end: &str) -> ResumeDocument {
        ResumeDocument {
            experience: vec![ExperienceEntry {
                start_date: start.to_string(),
                end_date: end.to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_no_dates_no_issue() {
        assert!(check_formatting(&ResumeDocument::default()).is_empty());
    }

    #[test]
    fn test_numeric_date_format_accepted() {
        let resume = resume_with_experience_dates("03/2021", "11/2023");
        assert!(check_formatting(&resume).is_empty());
    }

    #[test]
    fn test_month_name_format_accepted() {
        let resume = resume_with_experience_dates("March 2021", "Present");
        assert!(check_formatting(&resume).is_empty());
    }

    #[test]
    fn test_unrecognized_dates_flagged() {
        let resume = resume_with_experience_dates("2021", "now");
        assert_eq!(check_formatting(&resume), vec![DATE_FORMAT_ISSUE]);
    }

    #[test]
    fn test_blank_experience_dates_flagged() {
        // The blob becomes a single space: non-empty, no date pattern.
        let resume = resume_with_experience_dates("", "");
        assert_eq!(check_formatting(&resume), vec![DATE_FORMAT_ISSUE]);
    }

    #[test]
    fn test_one_good_date_masks_bad_ones() {
        let mut resume = resume_with_experience_dates("sometime", "whenever");
        resume.education.push(EducationEntry {
            graduation_date: "05/2023".to_string(),
            ..Default::default()
        });
        assert!(check_formatting(&resume).is_empty());
    }

    #[test]
    fn test_project_date_participates() {
        let resume = ResumeDocument {
            projects: vec![ProjectEntry {
                date: "June 2024".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert!(check_formatting(&resume).is_empty());
    }

    #[test]
    fn test_education_only_blank_date_is_empty_blob() {
        // A single education entry with no date joins to an empty string,
        // which counts as "no dates present".
        let resume = ResumeDocument {
            education: vec![EducationEntry::default()],
            ..Default::default()
        };
        assert!(check_formatting(&resume).is_empty());
    }
}
