//! # nbsa
//!
//! A small multinomial Naive Bayes text classifier for Rust.
//!
//! ## Features
//!
//! - Pluggable tokenizers (regex, word/punctuation, Unicode words, whitespace)
//! - Deterministic class ordering and tie-breaking
//! - CSV, TSV, JSON Lines and JSON dataset loading
//! - Sequential or parallel evaluation

pub mod analysis;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod naive_bayes;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
