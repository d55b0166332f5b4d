use anyhow::{Context, Result};

/// Service configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Request body limit for document uploads.
    pub max_upload_bytes: usize,
    /// Trimmed extracted text shorter than this is rejected as "not a real CV".
    pub min_text_chars: usize,
    /// Enables the LLM review endpoint when present.
    pub anthropic_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            rust_log: "info".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
            min_text_chars: 50,
            anthropic_api_key: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            min_text_chars: parse_env("MIN_TEXT_CHARS", defaults.min_text_chars)?,
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.max_upload_bytes, 10_485_760);
        assert_eq!(config.min_text_chars, 50);
        assert!(config.anthropic_api_key.is_none());
    }

    #[test]
    fn test_parse_env_missing_uses_default() {
        let value: usize = parse_env("CVSCAN_TEST_UNSET_VARIABLE", 7).unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("CVSCAN_TEST_BAD_PORT", "eighty");
        let err = parse_env::<u16>("CVSCAN_TEST_BAD_PORT", 80).unwrap_err();
        assert!(err.to_string().contains("CVSCAN_TEST_BAD_PORT"));
        std::env::remove_var("CVSCAN_TEST_BAD_PORT");
    }
}
