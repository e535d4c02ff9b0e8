//! Token model and the hidden-token lookups the locator consumes.
//!
//! Hidden tokens (whitespace, comments) stay in the stream next to the
//! significant ones, so the trivia around any index can be recovered.

use anyhow::{bail, Result};

/// A single lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Position in the stream
    pub index: usize,
    /// 1-based
    pub line: usize,
    /// 0-based, in chars
    pub column: usize,
    /// Not part of the grammar (whitespace, comments)
    pub hidden: bool,
}

/// Hidden-token queries over a token stream.
pub trait TokenStream {
    /// Hidden tokens between the previous significant token and `index`,
    /// in source order.
    fn hidden_tokens_to_left(&self, index: usize) -> Result<Vec<&Token>>;

    /// Hidden tokens between `index` and the next significant token,
    /// in source order.
    fn hidden_tokens_to_right(&self, index: usize) -> Result<Vec<&Token>>;
}

/// A fully materialized token stream.
#[derive(Debug, Clone, Default)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
}

impl TokenBuffer {
    /// Build a buffer from tokens already in stream order.
    ///
    /// Token indices are reassigned to match their position.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        for (i, token) in tokens.iter_mut().enumerate() {
            token.index = i;
        }
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Index of the nearest significant token before `index`.
    pub fn previous_significant(&self, index: usize) -> Option<usize> {
        self.tokens[..index.min(self.tokens.len())]
            .iter()
            .rposition(|t| !t.hidden)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.tokens.len() {
            bail!(
                "token index {} out of range (stream has {} tokens)",
                index,
                self.tokens.len()
            );
        }
        Ok(())
    }
}

impl TokenStream for TokenBuffer {
    fn hidden_tokens_to_left(&self, index: usize) -> Result<Vec<&Token>> {
        self.check_index(index)?;
        let mut run: Vec<&Token> = self.tokens[..index]
            .iter()
            .rev()
            .take_while(|t| t.hidden)
            .collect();
        run.reverse();
        Ok(run)
    }

    fn hidden_tokens_to_right(&self, index: usize) -> Result<Vec<&Token>> {
        self.check_index(index)?;
        Ok(self.tokens[index + 1..]
            .iter()
            .take_while(|t| t.hidden)
            .collect())
    }
}
