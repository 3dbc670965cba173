use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to access Gemini API: {0}")]
    GeminiError(String),

    #[error("Gemini returned no usable candidates")]
    EmptyResponse,
}

impl From<reqwest::Error> for SummarizerError {
    fn from(error: reqwest::Error) -> Self {
        SummarizerError::HttpError(error.to_string())
    }
}

impl From<url::ParseError> for SummarizerError {
    fn from(error: url::ParseError) -> Self {
        SummarizerError::Config(format!("invalid URL: {error}"))
    }
}
