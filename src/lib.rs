//! Gentle Story Summarizer - an HTTP service that writes compassionate
//! summaries of personal stories using Google Gemini.
//!
//! Each `POST /api/summarize` request is relayed to Gemini with a fixed
//! empathetic prompt. The generated summary is then annotated with:
//! - an emotional tone (positive / negative / neutral) scored on the summary
//! - trigger warning categories scanned on the original text
//!
//! # Architecture
//!
//! The system uses:
//! - axum and tower-http for the HTTP surface
//! - reqwest for the Gemini `generateContent` API
//! - static keyword tables for tone and trigger heuristics
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use gentle_summarizer::ai::GeminiClient;
//! use gentle_summarizer::core::config::AppConfig;
//! use gentle_summarizer::features::Summarizer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     gentle_summarizer::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let summarizer = Summarizer::new(Arc::new(GeminiClient::new(&config)?));
//!
//!     let result = summarizer
//!         .summarize("I lost my grandmother last spring and still miss her.")
//!         .await?;
//!     println!("{} ({:?})", result.summary, result.emotional_tone);
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod analysis;
pub mod api;
pub mod core;
pub mod errors;
pub mod features;
pub mod prompt;

/// Configure structured JSON logging.
///
/// The level filter comes from `RUST_LOG` and defaults to `info`. Calling this
/// more than once is a no-op.
///
/// # Example
///
/// ```
/// gentle_summarizer::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
