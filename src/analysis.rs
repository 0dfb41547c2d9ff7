//! Text analysis module for nbsa.
//!
//! Provides the tokenizer capability shared by training and inference.

pub mod token;
pub mod tokenizer;

pub use token::{Token, TokenStream};
pub use tokenizer::{RegexTokenizer, Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer};
