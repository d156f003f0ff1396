//! Rule-based job-description structurer.
//!
//! Segments loosely-structured JD text into semantic fields via heading
//! detection, regex matching, and list-item normalization. Deterministic and
//! total: every field falls back to an empty or sentinel value, so any input
//! string (including empty) produces a fully-populated record in one pass.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::text::{extract_email, extract_phone, normalize, top_tokens};

/// Placed in `diversity_statement` when no diversity/EO phrase is found.
/// Distinguishes "absent" from "present but blank".
pub const NO_DIVERSITY_STATEMENT: &str = "Not present in the JD.";

/// Placed in `recruiter_info` when neither an email nor a phone is found.
pub const NO_RECRUITER_INFO: &str = "Not provided.";

/// Soft-skill indicator substrings, matched against lowercased lines.
const SOFT_SKILL_TERMS: &[&str] = &[
    "communication",
    "team",
    "leadership",
    "ownership",
    "collaborat",
    "initiative",
    "adaptability",
    "problem-solving",
    "critical thinking",
];

lazy_static! {
    static ref LINE_SPLIT: Regex = Regex::new(r"\n+").unwrap();
    static ref PARAGRAPH_SPLIT: Regex = Regex::new(r"\n\s*\n").unwrap();

    // Single-line labeled fields.
    static ref JOB_TITLE: Regex = Regex::new(r"(?i)job\s*title\s*:\s*(.+)").unwrap();
    static ref COMPANY: Regex = Regex::new(r"(?i)company\s*:\s*(.+)").unwrap();
    static ref LOCATION: Regex = Regex::new(r"(?i)location\s*:\s*(.+)").unwrap();
    static ref WORK_TYPE: Regex =
        Regex::new(r"(?i)(work|employment)\s*type\s*:\s*(.+)").unwrap();
    static ref EXPERIENCE: Regex =
        Regex::new(r"(?i)(\d+\+?\s*(?:years|yrs).+experience)").unwrap();
    static ref EDUCATION: Regex =
        Regex::new(r"(?i)(bachelor|master|phd|degree|b\.tech|bsc|msc)[^\n]+").unwrap();
    static ref DIVERSITY: Regex =
        Regex::new(r"(?i)(equal opportunity|diversity|inclusive|inclusion)[^\n]+").unwrap();

    // Section headings. Substring search, not anchored to line start.
    static ref OVERVIEW_HEADINGS: Vec<Regex> = compile_headings(&[
        r"about\s+us",
        r"about\s+the\s+company",
    ]);
    static ref RESPONSIBILITY_HEADINGS: Vec<Regex> = compile_headings(&[
        r"responsibilit",
        r"what\s+you\s+will\s+do",
        r"duties",
    ]);
    static ref REQUIRED_HEADINGS: Vec<Regex> = compile_headings(&[
        r"required\s+skills",
        r"requirements",
        r"must\s+have",
    ]);
    static ref PREFERRED_HEADINGS: Vec<Regex> = compile_headings(&[
        r"preferred\s+skills",
        r"nice\s+to\s+have",
        r"bonus",
    ]);

    // List-item markers: hyphen, bullet, asterisk, or leading digits/periods.
    static ref LIST_MARKER: Regex = Regex::new(r"^[-•*\d]").unwrap();
    static ref LIST_MARKER_STRIP: Regex = Regex::new(r"^[-•*\d.\s]+").unwrap();
    static ref SKILL_DELIMITER: Regex = Regex::new(r"[,;]\s*").unwrap();
}

fn compile_headings(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).unwrap())
        .collect()
}

/// Structured representation of a job description. Built once per
/// extraction; absent fields stay empty (or carry their sentinel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredJobDescription {
    pub job_title: String,
    pub company_name: String,
    pub location: String,
    pub work_type: String,
    pub experience_required: String,
    pub company_overview: String,
    pub role_summary: String,
    pub key_responsibilities: Vec<String>,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub education: String,
    pub soft_skills: Vec<String>,
    pub diversity_statement: String,
    pub recruiter_info: String,
    pub keywords_for_ats: Vec<String>,
}

impl Default for StructuredJobDescription {
    fn default() -> Self {
        Self {
            job_title: String::new(),
            company_name: String::new(),
            location: String::new(),
            work_type: String::new(),
            experience_required: String::new(),
            company_overview: String::new(),
            role_summary: String::new(),
            key_responsibilities: Vec::new(),
            required_skills: Vec::new(),
            preferred_skills: Vec::new(),
            education: String::new(),
            soft_skills: Vec::new(),
            diversity_statement: NO_DIVERSITY_STATEMENT.to_string(),
            recruiter_info: String::new(),
            keywords_for_ats: Vec::new(),
        }
    }
}

/// Extracts all sections from raw JD text. Never fails; unmatched fields
/// keep their empty/sentinel defaults.
pub fn extract_sections(raw_text: &str) -> StructuredJobDescription {
    let cleaned_text = normalize(raw_text);
    let lines: Vec<String> = LINE_SPLIT
        .split(raw_text)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    let paragraphs: Vec<String> = PARAGRAPH_SPLIT
        .split(raw_text)
        .map(str::trim)
        .filter(|para| !para.is_empty())
        .map(str::to_string)
        .collect();

    let mut structured = StructuredJobDescription::default();

    if let Some(caps) = JOB_TITLE.captures(raw_text) {
        structured.job_title = normalize(&caps[1]);
    } else if let Some(first) = lines.first() {
        structured.job_title = first.clone();
    }

    if let Some(caps) = COMPANY.captures(raw_text) {
        structured.company_name = normalize(&caps[1]);
    }

    if let Some(caps) = LOCATION.captures(raw_text) {
        structured.location = normalize(&caps[1]);
    }

    if let Some(caps) = WORK_TYPE.captures(raw_text) {
        structured.work_type = normalize(&caps[2]);
    }

    if let Some(caps) = EXPERIENCE.captures(raw_text) {
        structured.experience_required = normalize(&caps[1]);
    }

    if let Some(idx) = find_heading(&lines, &OVERVIEW_HEADINGS) {
        let overview = collect_after_heading(&lines, idx);
        structured.company_overview = overview
            .into_iter()
            .take(3)
            .collect::<Vec<_>>()
            .join(" ");
    }

    if paragraphs.len() > 1 {
        structured.role_summary = paragraphs[1].clone();
    }

    if let Some(idx) = find_heading(&lines, &RESPONSIBILITY_HEADINGS) {
        structured.key_responsibilities = collect_after_heading(&lines, idx);
    }

    if let Some(idx) = find_heading(&lines, &REQUIRED_HEADINGS) {
        structured.required_skills = split_skill_items(&collect_after_heading(&lines, idx));
    }

    if let Some(idx) = find_heading(&lines, &PREFERRED_HEADINGS) {
        structured.preferred_skills = split_skill_items(&collect_after_heading(&lines, idx));
    }

    if let Some(m) = EDUCATION.find(raw_text) {
        structured.education = normalize(m.as_str());
    }

    structured.soft_skills = lines
        .iter()
        .filter(|line| {
            let lowered = line.to_lowercase();
            SOFT_SKILL_TERMS.iter().any(|term| lowered.contains(term))
        })
        .cloned()
        .collect();

    if let Some(m) = DIVERSITY.find(raw_text) {
        structured.diversity_statement = normalize(m.as_str());
    }

    let mut contact_parts = Vec::new();
    if let Some(email) = extract_email(raw_text) {
        contact_parts.push(format!("Email: {email}"));
    }
    if let Some(phone) = extract_phone(raw_text) {
        contact_parts.push(format!("Phone: {phone}"));
    }
    structured.recruiter_info = if contact_parts.is_empty() {
        NO_RECRUITER_INFO.to_string()
    } else {
        contact_parts.join(" | ")
    };

    structured.keywords_for_ats = top_tokens(&cleaned_text, 25);

    structured
}

/// Index of the first line matched by any of the heading patterns.
fn find_heading(lines: &[String], patterns: &[Regex]) -> Option<usize> {
    lines
        .iter()
        .position(|line| patterns.iter().any(|p| p.is_match(line)))
}

/// Gathers the lines following a heading, stripping list markers. Stops at
/// the first blank entry; `lines` as built here contains none, so in
/// practice collection runs until the end of the document.
fn collect_after_heading(lines: &[String], start_idx: usize) -> Vec<String> {
    let mut collected = Vec::new();
    for line in lines.iter().skip(start_idx + 1) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }
        if LIST_MARKER.is_match(trimmed) {
            collected.push(LIST_MARKER_STRIP.replace(trimmed, "").to_string());
        } else {
            collected.push(trimmed.to_string());
        }
    }
    collected
}

/// Splits collected skill lines on commas/semicolons into individual skills.
fn split_skill_items(items: &[String]) -> Vec<String> {
    let mut skills = Vec::new();
    for item in items {
        for part in SKILL_DELIMITER.split(item) {
            let part = part.trim();
            if !part.is_empty() {
                skills.push(part.to_string());
            }
        }
    }
    skills
}
