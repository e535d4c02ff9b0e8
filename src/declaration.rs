//! Heuristic declaration discovery.
//!
//! There is no grammar here, so a declaration is any line whose first
//! significant token follows a statement or block boundary, or follows a
//! `#` directive line. Lines inside a function body are skipped: only the
//! top level and the bodies of type or module blocks hold declarations.

use crate::token::TokenBuffer;
use serde::Serialize;

/// Significant tokens after which a new declaration may start.
const BOUNDARIES: &[&str] = &[";", "{", "}", "]"];

/// Significant tokens that end a declaration's signature.
const SIGNATURE_END: &[&str] = &["{", ";", "="];

/// Keywords whose `{` opens a block of member declarations.
const CONTAINER_KEYWORDS: &[&str] = &[
    "class",
    "struct",
    "union",
    "enum",
    "interface",
    "trait",
    "impl",
    "mod",
    "namespace",
    "extern",
];

/// A declaration found in a token stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// Index of the first significant token
    pub anchor: usize,
    pub line: usize,
    /// Significant tokens of the first line, up to `{`, `;` or `=`
    pub signature: String,
}

/// Brace nesting seen so far.
#[derive(Default)]
struct Nesting {
    /// One entry per open `{`: whether it opened a container block
    open: Vec<bool>,
    /// A container keyword appeared in the current statement before any `(`
    container_head: bool,
    /// A `(` appeared in the current statement
    saw_paren: bool,
}

impl Nesting {
    /// Declarations live at the top level or directly inside a container.
    fn holds_declarations(&self) -> bool {
        self.open.last().copied().unwrap_or(true)
    }

    fn advance(&mut self, text: &str) {
        match text {
            "{" => {
                self.open.push(self.container_head);
                self.reset_statement();
            }
            "}" => {
                self.open.pop();
                self.reset_statement();
            }
            ";" => self.reset_statement(),
            "(" => self.saw_paren = true,
            word if !self.saw_paren && CONTAINER_KEYWORDS.contains(&word) => {
                self.container_head = true;
            }
            _ => {}
        }
    }

    fn reset_statement(&mut self) {
        self.container_head = false;
        self.saw_paren = false;
    }
}

/// Find declaration anchors in stream order.
pub fn find_declarations(buffer: &TokenBuffer) -> Vec<Declaration> {
    let mut found = Vec::new();
    let mut nesting = Nesting::default();
    let mut last_line = 0;
    // Whether the line holding the previous significant token began with `#`
    let mut in_directive = false;

    for token in buffer.tokens().iter().filter(|t| !t.hidden) {
        let starts_line = token.line != last_line;
        last_line = token.line;
        let prev_in_directive = in_directive;
        if starts_line {
            in_directive = token.text == "#";
        }

        if starts_line
            && nesting.holds_declarations()
            && !BOUNDARIES.contains(&token.text.as_str())
        {
            let after_boundary = match buffer.previous_significant(token.index) {
                Some(prev) => {
                    prev_in_directive
                        || buffer
                            .get(prev)
                            .is_some_and(|p| BOUNDARIES.contains(&p.text.as_str()))
                }
                None => true,
            };
            if after_boundary {
                found.push(Declaration {
                    anchor: token.index,
                    line: token.line,
                    signature: signature(buffer, token.index),
                });
            }
        }

        nesting.advance(&token.text);
    }

    found
}

fn signature(buffer: &TokenBuffer, anchor: usize) -> String {
    let Some(line) = buffer.get(anchor).map(|t| t.line) else {
        return String::new();
    };

    let mut out = String::new();
    for token in &buffer.tokens()[anchor..] {
        if token.line != line || SIGNATURE_END.contains(&token.text.as_str()) {
            break;
        }
        if token.hidden {
            if !token.text.trim().is_empty() {
                continue;
            }
            out.push(' ');
        } else {
            out.push_str(&token.text);
        }
    }
    out.trim().to_string()
}
