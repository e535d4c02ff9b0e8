//! Source tokenizer for C-family languages.
//!
//! Raw tokenization is done by logos. A follow-up pass merges runs of
//! consecutive `///` lines into a single hidden token so a triple-slash
//! block is decoded as one comment.

use crate::token::{Token, TokenBuffer};
use anyhow::{bail, Result};
use logos::{Lexer, Logos};
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Rest of a char literal after its opening quote: one char or one escape
/// sequence (`\n`, `\x41`, `\u{1F600}`), then the closing quote.
static RE_CHAR_REST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\\.[^'\n]{0,9}|[^\\'\n])'").unwrap());

/// Raw token kinds produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\r\n\x0C]+")]
    Whitespace,

    #[regex(r"///[^\n]*", priority = 6)]
    DocLine,

    #[regex(r"//[^\n]*", priority = 4)]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[0-9][A-Za-z0-9_.]*")]
    Number,

    #[token("\"", string_literal)]
    Str,

    /// A char literal, or a lone `'` (Rust lifetimes and labels)
    #[token("'", char_literal)]
    Char,

    #[regex(r#"[^ \t\r\n\x0CA-Za-z0-9_"']"#)]
    Punct,
}

impl TokenKind {
    /// Whitespace and comments are off the grammar channel.
    pub fn is_hidden(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::DocLine
                | TokenKind::LineComment
                | TokenKind::BlockComment
        )
    }
}

fn block_comment(lex: &mut Lexer<TokenKind>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => false,
    }
}

fn string_literal(lex: &mut Lexer<TokenKind>) -> bool {
    let mut escaped = false;
    for (i, c) in lex.remainder().char_indices() {
        match c {
            '\\' if !escaped => escaped = true,
            '"' if !escaped => {
                lex.bump(i + 1);
                return true;
            }
            _ => escaped = false,
        }
    }
    false
}

fn char_literal(lex: &mut Lexer<TokenKind>) -> bool {
    if let Some(m) = RE_CHAR_REST.find(lex.remainder()) {
        lex.bump(m.end());
    }
    true
}

/// Tokenize `source` into a buffer with 1-based lines and 0-based char
/// columns.
pub fn tokenize(source: &str) -> Result<TokenBuffer> {
    let raw = tokenize_with_spans(source)?;
    let merged = merge_doc_lines(raw, source);
    let index = LineIndex::new(source);

    let tokens = merged
        .into_iter()
        .enumerate()
        .map(|(i, (kind, span))| {
            let (line, column) = index.position(source, span.start);
            Token {
                text: source[span].to_string(),
                index: i,
                line,
                column,
                hidden: kind.is_hidden(),
            }
        })
        .collect();

    Ok(TokenBuffer::new(tokens))
}

fn tokenize_with_spans(source: &str) -> Result<Vec<(TokenKind, Range<usize>)>> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => tokens.push((kind, lexer.span())),
            Err(()) => {
                let (line, column) = LineIndex::new(source).position(source, lexer.span().start);
                bail!(
                    "unrecognized input {:?} at line {}, column {}",
                    lexer.slice(),
                    line,
                    column
                );
            }
        }
    }

    Ok(tokens)
}

/// Join `///` lines separated only by a single line break (plus indentation).
///
/// Only a `///` that opens its own line can start or extend a run; a
/// trailing `///` after code stays a separate token.
fn merge_doc_lines(
    raw: Vec<(TokenKind, Range<usize>)>,
    source: &str,
) -> Vec<(TokenKind, Range<usize>)> {
    let mut out: Vec<(TokenKind, Range<usize>)> = Vec::with_capacity(raw.len());

    for (kind, span) in raw {
        if kind == TokenKind::DocLine {
            let joined_start = match out.as_slice() {
                [.., (TokenKind::DocLine, prev), (TokenKind::Whitespace, gap)]
                    if source[gap.clone()].matches('\n').count() == 1
                        && opens_line(source, prev.start) =>
                {
                    Some(prev.start)
                }
                _ => None,
            };
            if let Some(start) = joined_start {
                out.truncate(out.len() - 2);
                out.push((TokenKind::DocLine, start..span.end));
                continue;
            }
        }
        out.push((kind, span));
    }

    out
}

/// Whether only whitespace precedes `offset` on its line.
fn opens_line(source: &str, offset: usize) -> bool {
    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    source[line_start..offset].trim().is_empty()
}

/// Byte offsets of line starts, for offset → (line, column) lookups.
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(source.match_indices('\n').map(|(i, _)| i + 1));
        Self { starts }
    }

    fn position(&self, source: &str, offset: usize) -> (usize, usize) {
        let line = self.starts.partition_point(|&s| s <= offset);
        let line_start = self.starts[line - 1];
        let column = source[line_start..offset].chars().count();
        (line, column)
    }
}
