//! Data model for extracted documentation, independent of output format.

use crate::token::Token;
use anyhow::{bail, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Source span of a comment token.
///
/// Lines are 1-based, columns are 0-based char offsets. `end_column` is
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl Location {
    /// Compute the span of a token from its start position and the line
    /// breaks embedded in its text.
    pub fn from_token(token: &Token) -> Result<Self> {
        if token.line == 0 {
            bail!("token {} reports line 0", token.index);
        }

        let breaks = token.text.matches('\n').count();
        let end_column = match token.text.rfind('\n') {
            Some(pos) => token.text[pos + 1..].chars().count(),
            None => token.column + token.text.chars().count(),
        };

        Ok(Self {
            start_line: token.line,
            start_column: token.column,
            end_line: token.line + breaks,
            end_column,
        })
    }
}

/// A decoded documentation comment.
///
/// Built fresh on every lookup and never mutated afterwards. It carries no
/// link back to the declaration it was found for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocComment {
    pub location: Location,
    /// Free text before the first tag line (may be empty)
    pub description: String,
    /// `@param` entries: name → description
    pub params: BTreeMap<String, String>,
    /// `@return`
    pub return_description: Option<String>,
    /// `@author`
    pub author: Option<String>,
    /// `@deprecated`
    pub deprecated: Option<String>,
    /// Every tag by name; a repeated name keeps its last value
    pub tags: BTreeMap<String, String>,
}
