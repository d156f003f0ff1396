//! Content validation for uploaded or pasted text.
//!
//! Every check is state-free and returns a fresh `ValidationOutcome`; a
//! failed check is a normal value, not an error. HTTP handlers decide
//! whether a failure becomes a 400.

use std::path::Path;

use serde::Serialize;

use crate::constants::ALLOWED_EXTENSIONS;
use crate::text::normalize;

pub const MIN_CV_CHAR_LENGTH: usize = 300;
pub const MIN_JD_CHAR_LENGTH: usize = 200;

const CV_KEYWORDS: &[&str] = &[
    "experience",
    "education",
    "project",
    "work",
    "intern",
    "skills",
];

const JD_KEYWORDS: &[&str] = &["responsibilities", "requirements", "skills", "job", "role"];

/// Pass/fail plus a user-facing message. Immutable, no identity beyond its
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationOutcome {
    fn valid(message: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            message: message.into(),
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// Lowercased filename suffix including the leading dot, or "" when the
/// filename has no usable extension.
pub fn file_suffix(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

pub fn validate_file_extension(filename: &str) -> ValidationOutcome {
    let suffix = file_suffix(filename);
    if ALLOWED_EXTENSIONS.contains(&suffix.as_str()) {
        ValidationOutcome::valid("Valid file extension.")
    } else {
        ValidationOutcome::invalid(format!("Unsupported file type: {suffix}."))
    }
}

pub fn validate_file_size(size_bytes: u64, max_size_mb: u64) -> ValidationOutcome {
    if size_bytes <= max_size_mb * 1024 * 1024 {
        ValidationOutcome::valid("File size within limits.")
    } else {
        ValidationOutcome::invalid(format!(
            "File exceeds maximum allowed size of {max_size_mb} MB."
        ))
    }
}

pub fn validate_text_length(text: &str, min_len: usize) -> ValidationOutcome {
    let cleaned = normalize(text);
    if cleaned.is_empty() {
        return ValidationOutcome::invalid("Text content is empty after cleaning.");
    }
    if cleaned.chars().count() < min_len {
        return ValidationOutcome::invalid(format!(
            "Text content must be at least {min_len} characters."
        ));
    }
    ValidationOutcome::valid("Text content length is sufficient.")
}

pub fn validate_cv(text: &str) -> ValidationOutcome {
    let length = validate_text_length(text, MIN_CV_CHAR_LENGTH);
    if !length.is_valid {
        return length;
    }
    let lowered = normalize(text).to_lowercase();
    if !CV_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        return ValidationOutcome::invalid("CV must mention experience, education, or skills.");
    }
    ValidationOutcome::valid("CV looks valid.")
}

pub fn validate_job_description(text: &str) -> ValidationOutcome {
    let length = validate_text_length(text, MIN_JD_CHAR_LENGTH);
    if !length.is_valid {
        return length;
    }
    let lowered = normalize(text).to_lowercase();
    if !JD_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        return ValidationOutcome::invalid(
            "Job description must mention responsibilities or requirements.",
        );
    }
    ValidationOutcome::valid("Job description looks valid.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filler(prefix: &str, len: usize) -> String {
        let mut text = String::from(prefix);
        while text.chars().count() < len {
            text.push_str(" lorem ipsum dolor sit amet");
        }
        text
    }

    #[test]
    fn test_allowed_extensions_pass() {
        for name in ["cv.pdf", "cv.docx", "cv.txt"] {
            assert!(validate_file_extension(name).is_valid, "{name}");
        }
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        assert!(validate_file_extension("Resume.PDF").is_valid);
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let outcome = validate_file_extension("cv.exe");
        assert!(!outcome.is_valid);
        assert_eq!(outcome.message, "Unsupported file type: .exe.");
    }

    #[test]
    fn test_missing_extension_rejected() {
        assert!(!validate_file_extension("resume").is_valid);
    }

    #[test]
    fn test_file_size_boundary_is_inclusive() {
        assert!(validate_file_size(5 * 1024 * 1024, 5).is_valid);
        assert!(!validate_file_size(5 * 1024 * 1024 + 1, 5).is_valid);
    }

    #[test]
    fn test_text_length_empty_after_cleaning() {
        let outcome = validate_text_length("  \n\t ", 10);
        assert!(!outcome.is_valid);
        assert_eq!(outcome.message, "Text content is empty after cleaning.");
    }

    #[test]
    fn test_text_length_below_minimum() {
        let outcome = validate_text_length("too short", 50);
        assert!(!outcome.is_valid);
        assert_eq!(
            outcome.message,
            "Text content must be at least 50 characters."
        );
    }

    #[test]
    fn test_text_length_sufficient() {
        assert!(validate_text_length("long enough text", 5).is_valid);
    }

    #[test]
    fn test_validate_cv_empty_is_invalid_with_message() {
        let outcome = validate_cv("");
        assert!(!outcome.is_valid);
        assert!(!outcome.message.is_empty());
    }

    #[test]
    fn test_validate_cv_accepts_experience_text() {
        let text = filler("Ten years of experience shipping backend services.", 320);
        assert!(validate_cv(&text).is_valid);
    }

    #[test]
    fn test_validate_cv_rejects_text_without_keywords() {
        let outcome = validate_cv(&filler("General prose about nothing in particular.", 320));
        assert!(!outcome.is_valid);
        assert_eq!(
            outcome.message,
            "CV must mention experience, education, or skills."
        );
    }

    #[test]
    fn test_validate_cv_rejects_short_text_even_with_keywords() {
        assert!(!validate_cv("experience").is_valid);
    }

    #[test]
    fn test_validate_jd_rejects_short_text_regardless_of_keywords() {
        assert!(!validate_job_description("responsibilities and requirements").is_valid);
    }

    #[test]
    fn test_validate_jd_accepts_role_text() {
        let text = filler(
            "We are hiring for a backend role with clear responsibilities.",
            220,
        );
        assert!(validate_job_description(&text).is_valid);
    }

    #[test]
    fn test_validate_jd_rejects_text_without_keywords() {
        let outcome =
            validate_job_description(&filler("A very long narrative without the magic words.", 220));
        assert!(!outcome.is_valid);
        assert_eq!(
            outcome.message,
            "Job description must mention responsibilities or requirements."
        );
    }
}
