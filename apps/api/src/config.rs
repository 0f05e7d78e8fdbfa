use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    /// Origin used to build public survey links, e.g. `https://surveys.example.com`.
    pub public_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u32>()
                .context("DB_MAX_CONNECTIONS must be a positive integer")?,
            public_base_url: normalize_base_url(
                &std::env::var("PUBLIC_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            ),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Public link respondents use to open a survey.
    pub fn share_url(&self, survey_id: &str) -> String {
        format!("{}/survey/{}", self.public_base_url, survey_id)
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_base(base: &str) -> Config {
        Config {
            database_url: "postgres://localhost/surveyor".to_string(),
            db_max_connections: 10,
            public_base_url: normalize_base_url(base),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_share_url_format() {
        let config = config_with_base("https://surveys.example.com");
        assert_eq!(
            config.share_url("survey-abc123def"),
            "https://surveys.example.com/survey/survey-abc123def"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = config_with_base("http://localhost:3000/ ");
        assert_eq!(config.share_url("survey-x"), "http://localhost:3000/survey/survey-x");
    }
}
