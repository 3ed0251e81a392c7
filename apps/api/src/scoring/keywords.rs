//! Keyword extraction and job-description match ratio.
//!
//! Deliberately simple: lowercase tokenization, a fixed stop-word list,
//! exact-token membership. No stemming, no synonyms, no fuzzy matching —
//! real ATS filters are closer to this than to anything clever.

use std::collections::HashSet;

use crate::models::resume::ResumeDocument;

/// Function words excluded from keyword extraction.
const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is", "are",
    "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "may", "might", "must", "can", "shall", "a", "an",
];

/// Extracts distinct keywords from free text.
///
/// Lowercases, replaces every non-alphanumeric character with a space,
/// splits on whitespace, drops tokens of one or two characters and stop
/// words, and deduplicates keeping first-seen order. The order carries
/// no meaning downstream but keeps the output deterministic.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut seen = HashSet::new();
    let mut keywords = Vec::new();
    for token in cleaned.split_whitespace() {
        if token.chars().count() <= 2 || STOP_WORDS.contains(&token) {
            continue;
        }
        if seen.insert(token) {
            keywords.push(token.to_string());
        }
    }
    keywords
}

/// Joins every text field that counts as "resume content" for keyword
/// matching: summary, skills, experience title/company/description, and
/// project name/description. Dates, contact info, and certifications
/// stay out.
pub fn resume_corpus(resume: &ResumeDocument) -> String {
    let mut parts = vec![resume.summary.clone(), resume.skills.join(" ")];
    for exp in &resume.experience {
        parts.push(format!("{} {} {}", exp.title, exp.company, exp.description));
    }
    for project in &resume.projects {
        parts.push(format!("{} {}", project.name, project.description));
    }
    parts.join(" ")
}

/// Fraction of job-description keywords present anywhere in the resume.
///
/// Returns 0.0 when the job description is empty or yields no keywords.
/// Membership is exact-token only.
pub fn keyword_match_ratio(resume: &ResumeDocument, job_description: &str) -> f64 {
    if job_description.is_empty() {
        return 0.0;
    }

    let jd_keywords = extract_keywords(job_description);
    if jd_keywords.is_empty() {
        return 0.0;
    }

    let resume_keywords: HashSet<String> = extract_keywords(&resume_corpus(resume))
        .into_iter()
        .collect();

    let matches = jd_keywords
        .iter()
        .filter(|kw| resume_keywords.contains(kw.as_str()))
        .count();

    matches as f64 / jd_keywords.len() as f64
}
