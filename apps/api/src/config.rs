use anyhow::{Context, Result};

/// Default cap on the number of bullets fed into one mapping run.
pub const DEFAULT_MAPPING_MAX_BULLETS: usize = 500;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on bullets per mapping run; scoring is |items| × |bullets|.
    pub mapping_max_bullets: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            mapping_max_bullets: match std::env::var("MAPPING_MAX_BULLETS") {
                Ok(raw) => parse_max_bullets(&raw)?,
                Err(_) => DEFAULT_MAPPING_MAX_BULLETS,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_max_bullets(raw: &str) -> Result<usize> {
    let value = raw
        .trim()
        .parse::<usize>()
        .context("MAPPING_MAX_BULLETS must be a positive integer")?;
    anyhow::ensure!(value > 0, "MAPPING_MAX_BULLETS must be greater than zero");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_max_bullets_accepts_positive() {
        assert_eq!(parse_max_bullets(" 250 ").unwrap(), 250);
    }

    #[test]
    fn test_parse_max_bullets_rejects_zero_and_garbage() {
        assert!(parse_max_bullets("0").is_err());
        assert!(parse_max_bullets("-3").is_err());
        assert!(parse_max_bullets("lots").is_err());
    }
}
