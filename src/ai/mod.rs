//! Upstream text generation

pub mod client;

// Re-export main types for convenience
pub use client::{GeminiClient, TextGenerator};
