//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
///
/// Punctuation stays attached to the neighbouring word, so `"cats!"` and
/// `"cats"` are different tokens.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;

        for (idx, ch) in text.char_indices() {
            match (ch.is_whitespace(), start) {
                (true, Some(s)) => {
                    tokens.push(Token::with_offsets(&text[s..idx], tokens.len(), s, idx));
                    start = None;
                }
                (false, None) => start = Some(idx),
                _ => {}
            }
        }

        if let Some(s) = start {
            tokens.push(Token::with_offsets(
                &text[s..],
                tokens.len(),
                s,
                text.len(),
            ));
        }

        Ok(tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello  world\ttest").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].start_offset, 7);
        assert_eq!(tokens[2].text, "test");
        assert_eq!(tokens[2].end_offset, 17);
    }

    #[test]
    fn test_punctuation_stays_attached() {
        let tokenizer = WhitespaceTokenizer::new();
        let words = tokenizer.words("  I love cats! ").unwrap();
        assert_eq!(words, vec!["I", "love", "cats!"]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
