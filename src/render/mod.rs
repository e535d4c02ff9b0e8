//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;
mod toc;

use crate::classify::Classifier;
use crate::declaration::{find_declarations, Declaration};
use crate::locate::CommentLocator;
use crate::model::{DocComment, Location};
use crate::token::TokenBuffer;
use anyhow::{anyhow, Result};
use serde::Serialize;

/// Documentation found for one source file.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub source: String,
    pub entries: Vec<Entry>,
}

/// One declaration and whatever was found for it.
///
/// In address-only mode `comment` stays empty and only `location` is set.
#[derive(Debug, Serialize)]
pub struct Entry {
    pub declaration: Declaration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<DocComment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Report {
    /// Look up documentation for every declaration in `buffer`.
    ///
    /// With `address_only` the comment bodies are not decoded.
    pub fn collect<C: Classifier>(
        source: &str,
        buffer: &TokenBuffer,
        locator: &CommentLocator<C>,
        address_only: bool,
    ) -> Self {
        let entries = find_declarations(buffer)
            .into_iter()
            .map(|declaration| {
                let anchor = declaration.anchor;
                if address_only {
                    Entry {
                        declaration,
                        comment: None,
                        location: locator.locate_address(buffer, anchor),
                    }
                } else {
                    Entry {
                        declaration,
                        comment: locator.locate_comment(buffer, anchor),
                        location: None,
                    }
                }
            })
            .collect();

        Self {
            source: source.to_string(),
            entries,
        }
    }

    /// Drop declarations with nothing attached.
    pub fn retain_documented(&mut self) {
        self.entries.retain(Entry::is_documented);
    }
}

impl Entry {
    pub fn is_documented(&self) -> bool {
        self.comment.is_some() || self.location.is_some()
    }
}

/// Trait for rendering a Report into a specific output format.
pub trait Renderer {
    fn render(&self, report: &Report) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use markdown or json", format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats() {
        assert_eq!(create_renderer("md").unwrap().file_extension(), "md");
        assert_eq!(create_renderer("json").unwrap().file_extension(), "json");
    }

    const SOURCE: &str = "/** Documented. */\nint a;\n\nint b;\n";

    #[test]
    fn collect_decodes_comments() {
        let buf = crate::lexer::tokenize(SOURCE).unwrap();
        let report = Report::collect("t.c", &buf, &CommentLocator::new(), false);
        assert_eq!(report.entries.len(), 2);
        let first = report.entries[0].comment.as_ref().unwrap();
        assert_eq!(first.description, "Documented.");
        assert!(report.entries[0].location.is_none());
        assert!(!report.entries[1].is_documented());
    }

    #[test]
    fn collect_address_only() {
        let buf = crate::lexer::tokenize(SOURCE).unwrap();
        let mut report = Report::collect("t.c", &buf, &CommentLocator::new(), true);
        report.retain_documented();
        assert_eq!(report.entries.len(), 1);
        assert!(report.entries[0].comment.is_none());
        assert_eq!(report.entries[0].location.unwrap().end_column, 18);
    }

    #[test]
    fn unknown_format() {
        let err = create_renderer("xml").err().unwrap();
        assert!(err.to_string().contains("unknown format: xml"));
    }
}
