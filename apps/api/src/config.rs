use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Constructed once at startup and carried in `AppState`; read-only after.
///
/// The four `enforce_*` flags are reserved for the scoring phase: they are
/// loaded and exposed via `/api/v1/rules` but nothing consumes them yet.
#[derive(Debug, Clone)]
pub struct Config {
    pub app_title: String,
    pub max_file_size_mb: u64,
    pub enforce_unique_words: bool,
    pub enforce_stopword_ban: bool,
    pub enforce_banned_terms: bool,
    pub enforce_min_word_count: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            app_title: std::env::var("APP_TITLE").unwrap_or_else(|_| "JobSift".to_string()),
            max_file_size_mb: std::env::var("MAX_FILE_SIZE_MB")
                .unwrap_or_else(|_| "5".to_string())
                .parse::<u64>()
                .context("MAX_FILE_SIZE_MB must be a whole number of megabytes")?,
            enforce_unique_words: env_bool("ENFORCE_UNIQUE_WORDS", true),
            enforce_stopword_ban: env_bool("ENFORCE_STOPWORD_BAN", false),
            enforce_banned_terms: env_bool("ENFORCE_BANNED_TERMS", true),
            enforce_min_word_count: env_bool("ENFORCE_MIN_WORD_COUNT", true),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb * 1024 * 1024
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(value) => matches!(
            value.trim().to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_bool_default_when_unset() {
        assert!(env_bool("JOBSIFT_TEST_UNSET_FLAG", true));
        assert!(!env_bool("JOBSIFT_TEST_UNSET_FLAG", false));
    }

    #[test]
    fn test_max_file_size_bytes() {
        let config = Config {
            app_title: "t".to_string(),
            max_file_size_mb: 5,
            enforce_unique_words: true,
            enforce_stopword_ban: false,
            enforce_banned_terms: true,
            enforce_min_word_count: true,
            port: 8080,
            rust_log: "info".to_string(),
        };
        assert_eq!(config.max_file_size_bytes(), 5 * 1024 * 1024);
    }
}
