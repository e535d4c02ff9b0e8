//! Find the documentation comment attached to a declaration.
//!
//! Declarations are often preceded by license headers, TODOs and blank
//! lines. Of all documentation comments adjacent to the anchor, the one with
//! the largest token index (the nearest) is the one attached to it.

use crate::classify::{Classifier, DocCommentClassifier};
use crate::lexer;
use crate::model::{DocComment, Location};
use crate::parser::{self, ParamMode};
use crate::token::{Token, TokenStream};
use anyhow::Result;

/// Looks up documentation comments by anchor token index.
///
/// Lookups never fail: a malformed stream, an out-of-range index and an
/// undocumented declaration all yield `None`.
#[derive(Debug, Clone, Default)]
pub struct CommentLocator<C = DocCommentClassifier> {
    classifier: C,
    param_mode: ParamMode,
}

impl CommentLocator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Classifier> CommentLocator<C> {
    /// Use a different rule for recognizing documentation comments.
    pub fn with_classifier(classifier: C) -> Self {
        Self {
            classifier,
            param_mode: ParamMode::default(),
        }
    }

    pub fn with_param_mode(mut self, mode: ParamMode) -> Self {
        self.param_mode = mode;
        self
    }

    /// Source span of the comment attached to `anchor`, without decoding it.
    pub fn locate_address<S>(&self, stream: &S, anchor: usize) -> Option<Location>
    where
        S: TokenStream + ?Sized,
    {
        let found = self
            .select(stream, anchor)
            .and_then(|token| token.map(Location::from_token).transpose());
        settle(found, anchor)
    }

    /// Fully decoded comment attached to `anchor`.
    pub fn locate_comment<S>(&self, stream: &S, anchor: usize) -> Option<DocComment>
    where
        S: TokenStream + ?Sized,
    {
        let found = self
            .select(stream, anchor)
            .and_then(|token| token.map(|t| parser::decode(t, self.param_mode)).transpose());
        settle(found, anchor)
    }

    /// Tokenize `source` and look up the span for `anchor`.
    pub fn locate_address_in_source(&self, source: &str, anchor: usize) -> Option<Location> {
        let stream = settle(lexer::tokenize(source).map(Some), anchor)?;
        self.locate_address(&stream, anchor)
    }

    /// Tokenize `source` and decode the comment for `anchor`.
    pub fn locate_comment_in_source(&self, source: &str, anchor: usize) -> Option<DocComment> {
        let stream = settle(lexer::tokenize(source).map(Some), anchor)?;
        self.locate_comment(&stream, anchor)
    }

    /// Pick the nearest documentation comment around `anchor`.
    fn select<'s, S>(&self, stream: &'s S, anchor: usize) -> Result<Option<&'s Token>>
    where
        S: TokenStream + ?Sized,
    {
        let mut candidates = stream.hidden_tokens_to_left(anchor)?;
        if anchor > 0 {
            // Overlaps the left run; duplicates are harmless under max-by-index.
            candidates.extend(stream.hidden_tokens_to_right(anchor - 1)?);
        }

        Ok(candidates
            .into_iter()
            .filter(|t| self.classifier.is_doc_comment(&t.text))
            .max_by_key(|t| t.index))
    }
}

/// Collapse a lookup result, logging any failure.
fn settle<T>(result: Result<Option<T>>, anchor: usize) -> Option<T> {
    match result {
        Ok(found) => found,
        Err(err) => {
            tracing::debug!(anchor, error = %err, "documentation lookup failed");
            None
        }
    }
}

/// [`CommentLocator::locate_address`] with the default configuration.
pub fn locate_address<S>(stream: &S, anchor: usize) -> Option<Location>
where
    S: TokenStream + ?Sized,
{
    CommentLocator::new().locate_address(stream, anchor)
}

/// [`CommentLocator::locate_comment`] with the default configuration.
pub fn locate_comment<S>(stream: &S, anchor: usize) -> Option<DocComment>
where
    S: TokenStream + ?Sized,
{
    CommentLocator::new().locate_comment(stream, anchor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenBuffer;

    fn tok(text: &str, line: usize, hidden: bool) -> Token {
        Token {
            text: text.to_string(),
            index: 0,
            line,
            column: 0,
            hidden,
        }
    }

    /// `x ; /** first */ \n\n /** second */ \n fn`
    fn two_docs() -> TokenBuffer {
        TokenBuffer::new(vec![
            tok(";", 1, false),
            tok("\n", 1, true),
            tok("/** first */", 2, true),
            tok("\n\n", 2, true),
            tok("/** second */", 4, true),
            tok("\n", 4, true),
            tok("fn", 5, false),
        ])
    }

    #[test]
    fn nearest_comment_wins() {
        let doc = locate_comment(&two_docs(), 6).unwrap();
        assert_eq!(doc.description, "second");
        assert_eq!(doc.location.start_line, 4);
    }

    #[test]
    fn address_matches_comment_location() {
        let stream = two_docs();
        let address = locate_address(&stream, 6).unwrap();
        assert_eq!(address, locate_comment(&stream, 6).unwrap().location);
    }

    #[test]
    fn ordinary_comments_are_skipped() {
        let stream = TokenBuffer::new(vec![
            tok("/** doc */", 1, true),
            tok("\n", 1, true),
            tok("// TODO", 2, true),
            tok("\n", 2, true),
            tok("fn", 3, false),
        ]);
        assert_eq!(locate_comment(&stream, 4).unwrap().description, "doc");
    }

    #[test]
    fn nothing_within_reach() {
        let stream = TokenBuffer::new(vec![
            tok("/** stale */", 1, true),
            tok("int", 2, false),
            tok(" ", 2, true),
            tok("x", 2, false),
        ]);
        assert_eq!(locate_address(&stream, 3), None);
        assert_eq!(locate_comment(&stream, 3), None);
    }

    #[test]
    fn anchor_zero_has_no_comment() {
        let stream = TokenBuffer::new(vec![tok("fn", 1, false)]);
        assert_eq!(locate_comment(&stream, 0), None);
    }

    #[test]
    fn out_of_range_anchor_is_absent() {
        assert_eq!(locate_address(&two_docs(), 40), None);
        assert_eq!(locate_comment(&two_docs(), 40), None);
    }

    #[test]
    fn malformed_token_is_absent() {
        let stream = TokenBuffer::new(vec![tok("/** doc */", 0, true), tok("fn", 1, false)]);
        assert_eq!(locate_comment(&stream, 1), None);
        assert_eq!(locate_address(&stream, 1), None);
    }

    #[test]
    fn custom_classifier_can_reject() {
        let locator = CommentLocator::with_classifier(|text: &str| text.starts_with("///"));
        assert_eq!(locator.locate_comment(&two_docs(), 6), None);
    }

    #[test]
    fn lookups_are_repeatable() {
        let stream = two_docs();
        assert_eq!(locate_comment(&stream, 6), locate_comment(&stream, 6));
        assert_eq!(locate_address(&stream, 6), locate_address(&stream, 6));
    }

    #[test]
    fn source_wrapper_tokenizes() {
        let source = "/** Adds.\n * @param a left\n */\nint add(int a);";
        // tokens: comment, newline, `int`
        let doc = CommentLocator::new()
            .locate_comment_in_source(source, 2)
            .unwrap();
        assert_eq!(doc.description, "Adds.");
        assert_eq!(doc.params.get("a").map(String::as_str), Some("left"));
        assert_eq!(
            CommentLocator::new().locate_address_in_source(source, 2),
            Some(doc.location)
        );
    }

    #[test]
    fn source_wrapper_swallows_lexer_errors() {
        assert_eq!(
            CommentLocator::new().locate_comment_in_source("/** open\nint x;", 1),
            None
        );
    }
}
