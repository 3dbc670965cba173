//! HTTP API and request processing

pub mod handler;
pub mod helpers;

// Re-export the router for convenience
pub use handler::{AppState, router};
