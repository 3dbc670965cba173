use std::net::SocketAddr;
use std::sync::Arc;

use gentle_summarizer::ai::GeminiClient;
use gentle_summarizer::api::{AppState, handler, router};
use gentle_summarizer::core::config::AppConfig;
use gentle_summarizer::features::Summarizer;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_loaded = dotenvy::dotenv().is_ok();
    gentle_summarizer::setup_logging();

    if !dotenv_loaded {
        info!("No .env file found. Using system environment variables.");
    }

    // A missing GEMINI_API_KEY stops the process here
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        e
    })?;
    info!(api_key = %config.masked_api_key(), model = %config.gemini_model, "Using Gemini API key (masked)");

    let gemini = GeminiClient::new(&config)?;
    let state = AppState::new(Summarizer::new(Arc::new(gemini)));
    let app = router(state);

    for (method, path) in handler::ROUTES {
        info!("Registered Route: {} {}", method, path);
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting Gentle Story Summarizer on http://{}", addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
