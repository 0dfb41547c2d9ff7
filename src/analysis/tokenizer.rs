//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split raw text into word tokens. The classifier uses the same
//! tokenizer for training and inference, so every implementation here is
//! deterministic and purely lexical: no stemming, case-folding or stop-word
//! removal.
//!
//! # Available Tokenizers
//!
//! - [`regex::RegexTokenizer`] - Regex-based tokenization (default: `\w+`)
//! - [`unicode_word::UnicodeWordTokenizer`] - Uses Unicode word boundaries
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//!
//! # Examples
//!
//! ```
//! use nbsa::analysis::tokenizer::Tokenizer;
//! use nbsa::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared by the
/// parallel evaluator.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use nbsa::analysis::token::{Token, TokenStream};
/// use nbsa::analysis::tokenizer::Tokenizer;
/// use nbsa::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
///
/// let words = CommaTokenizer.words("a, b,c").unwrap();
/// assert_eq!(words, vec!["a", "b", "c"]);
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Perform any one-time setup this tokenizer needs before use.
    ///
    /// Must be idempotent. Callers invoke it once before training or
    /// inference; tokenizers never initialize themselves lazily inside
    /// [`tokenize`](Tokenizer::tokenize).
    fn ensure_ready(&self) -> Result<()> {
        Ok(())
    }

    /// Tokenize the given text and keep only the token texts.
    fn words(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.tokenize(text)?.map(|token| token.text).collect())
    }
}

// Individual tokenizer modules
pub mod regex;
pub mod unicode_word;
pub mod whitespace;

pub use regex::RegexTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
pub use whitespace::WhitespaceTokenizer;
