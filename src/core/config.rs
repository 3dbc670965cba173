use std::env;

use url::Url;

use crate::errors::SummarizerError;

pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: Url,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, SummarizerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so callers can supply
    /// values without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SummarizerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                SummarizerError::Config(
                    "GEMINI_API_KEY is not set. Please set it in .env or as an environment variable."
                        .to_string(),
                )
            })?;

        let port = match lookup("PORT").filter(|p| !p.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| SummarizerError::Config(format!("PORT: {e}")))?,
            None => DEFAULT_PORT,
        };

        let gemini_model = lookup("GEMINI_MODEL")
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        let mut gemini_api_base = Url::parse(
            lookup("GEMINI_API_BASE")
                .as_deref()
                .unwrap_or(DEFAULT_GEMINI_API_BASE),
        )?;
        // Endpoints are joined onto the base; a missing trailing slash would
        // drop the last path segment of a proxy prefix.
        if !gemini_api_base.path().ends_with('/') {
            let path = format!("{}/", gemini_api_base.path());
            gemini_api_base.set_path(&path);
        }

        Ok(Self {
            port,
            gemini_api_key,
            gemini_model,
            gemini_api_base,
        })
    }

    #[must_use]
    pub fn masked_api_key(&self) -> String {
        mask_secret(&self.gemini_api_key)
    }
}

/// Keeps the first and last five characters of a secret for log output.
#[must_use]
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 10 {
        return "*****".to_string();
    }

    let head: String = chars[..5].iter().collect();
    let tail: String = chars[chars.len() - 5..].iter().collect();
    format!("{head}...{tail}")
}
