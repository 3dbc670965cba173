pub mod summarize;

pub use summarize::Summarizer;
