use serde::{Deserialize, Serialize};

/// Contact block of a resume. Only `full_name`, `email`, and `phone`
/// participate in scoring; the rest ride along for the callers that
/// render or export the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub graduation_date: String,
    pub gpa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub technologies: String,
    /// Optional completion date. Read by the formatting check when set.
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

/// A full resume as the editor collaborator owns it.
///
/// Every field defaults to empty, so an absent field and an empty one
/// are indistinguishable by the time the scoring engine sees the
/// document. The engine only reads; it never mutates a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
}

/// Output of one scoring pass. Constructed fresh on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Total awarded points, clamped to 0–100.
    pub score: u32,
    /// Hard problems an ATS filter would likely penalize.
    pub issues: Vec<String>,
    /// Soft improvements worth making.
    pub suggestions: Vec<String>,
    /// Fraction of job-description keywords found in the resume.
    /// 0.0 when no job description was supplied.
    pub keyword_match: f64,
}
