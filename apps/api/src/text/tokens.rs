//! Word tokenization, frequency ranking, and contact-detail extraction.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"[A-Za-z0-9']+").unwrap();
    static ref EMAIL: Regex =
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap();
    /// Loose on purpose: optional country code, optional area code, 3-then-4
    /// digit groups. Matches some non-phone numeric runs; callers accept that.
    static ref PHONE: Regex =
        Regex::new(r"(?:\+?\d{1,3}[\s-]?)?(?:\(?\d{3}\)?[\s-]?)?\d{3}[\s-]?\d{4}").unwrap();
}

/// Splits text into lowercased alphanumeric word tokens, left to right.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD.find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Number of word tokens in the text.
pub fn count_words(text: &str) -> usize {
    tokenize(text).len()
}

/// Up to `limit` distinct tokens ranked by frequency, most frequent first.
/// Ties keep first-encountered order.
pub fn top_tokens(text: &str, limit: usize) -> Vec<String> {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for token in tokens {
        match index.get(&token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token.clone(), counts.len());
                counts.push((token, 1));
            }
        }
    }

    // Stable sort preserves first-encountered order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(token, _)| token)
        .collect()
}

/// First email address in the text, if any.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

/// First phone-shaped number in the text, if any.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_in_order() {
        assert_eq!(tokenize("Hello World"), vec!["hello", "world"]);
    }

    #[test]
    fn test_tokenize_keeps_digits_and_apostrophes() {
        assert_eq!(
            tokenize("we're hiring 3 engineers"),
            vec!["we're", "hiring", "3", "engineers"]
        );
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("!!! ---").is_empty());
    }

    #[test]
    fn test_count_words_hello_world() {
        assert_eq!(count_words("Hello World"), 2);
    }

    #[test]
    fn test_top_tokens_ranked_by_frequency() {
        let text = "rust rust rust kafka kafka tokio";
        assert_eq!(top_tokens(text, 10), vec!["rust", "kafka", "tokio"]);
    }

    #[test]
    fn test_top_tokens_tie_break_is_first_seen() {
        let text = "alpha beta alpha beta gamma";
        assert_eq!(top_tokens(text, 10), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_top_tokens_respects_limit() {
        let text = "a a a b b c";
        assert_eq!(top_tokens(text, 2), vec!["a", "b"]);
    }

    #[test]
    fn test_top_tokens_empty_text() {
        assert!(top_tokens("", 25).is_empty());
    }

    #[test]
    fn test_extract_email_first_match() {
        let text = "Apply to jobs@acme.dev or hr@acme.dev today";
        assert_eq!(extract_email(text), Some("jobs@acme.dev".to_string()));
    }

    #[test]
    fn test_extract_email_with_dots_and_hyphens() {
        let text = "contact first.last+tag@sub-domain.example.co";
        assert_eq!(
            extract_email(text),
            Some("first.last+tag@sub-domain.example.co".to_string())
        );
    }

    #[test]
    fn test_extract_email_none() {
        assert_eq!(extract_email("no contact details here"), None);
    }

    #[test]
    fn test_extract_phone_international_format() {
        let text = "Call +1 (415) 555-0188 for details";
        assert_eq!(extract_phone(text), Some("+1 (415) 555-0188".to_string()));
    }

    #[test]
    fn test_extract_phone_hyphenated() {
        assert_eq!(
            extract_phone("reach us at 415-555-0188"),
            Some("415-555-0188".to_string())
        );
    }

    #[test]
    fn test_extract_phone_matches_bare_seven_digit_run() {
        // Known looseness of the pattern: a plain 7-digit sequence counts.
        assert_eq!(extract_phone("ref 5550188"), Some("5550188".to_string()));
    }

    #[test]
    fn test_extract_phone_none_for_short_runs() {
        assert_eq!(extract_phone("suite 401, floor 12"), None);
    }
}
