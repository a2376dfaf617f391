//! Content Analyzer: keyword matching over fixed tables.

mod analyzer;
pub mod keywords;
mod tokenizer;

pub use analyzer::analyze;
pub use tokenizer::tokenize;
