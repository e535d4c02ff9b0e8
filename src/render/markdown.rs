//! GitHub-flavored markdown renderer.

use crate::model::{DocComment, Location};
use crate::render::toc;
use crate::render::{Entry, Renderer, Report};
use anyhow::Result;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        if !report.entries.is_empty() {
            output.push_str("## Index\n\n");
            let mut slugger = toc::Slugger::default();
            for entry in &report.entries {
                output.push_str(&slugger.toc_item(&entry.declaration.signature));
                output.push('\n');
            }
            output.push('\n');
        }

        for entry in &report.entries {
            output.push_str(&render_entry(entry));
            output.push('\n');
        }

        Ok(output)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Render a single declaration's documentation block.
fn render_entry(entry: &Entry) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### {}\n", entry.declaration.signature));

    match (&entry.comment, &entry.location) {
        (Some(doc), _) => render_comment(&mut lines, doc),
        (None, Some(location)) => {
            lines.push(format!("_Documented at {}._", render_location(location)));
            lines.push(String::new());
        }
        (None, None) => {
            lines.push("_Undocumented._".to_string());
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

fn render_comment(lines: &mut Vec<String>, doc: &DocComment) {
    if let Some(ref deprecated) = doc.deprecated {
        lines.push(format!("> **Deprecated:** {}", deprecated));
        lines.push(String::new());
    }

    if !doc.description.is_empty() {
        lines.push(doc.description.clone());
        lines.push(String::new());
    }

    if !doc.params.is_empty() {
        lines.push("#### Parameters\n".to_string());
        for (name, desc) in &doc.params {
            if desc.is_empty() {
                lines.push(format!("* **{}**", name));
            } else {
                lines.push(format!("* **{}**: {}", name, desc));
            }
        }
        lines.push(String::new());
    }

    if let Some(ref ret) = doc.return_description {
        lines.push("#### Returns\n".to_string());
        lines.push(ret.clone());
        lines.push(String::new());
    }

    if let Some(ref author) = doc.author {
        lines.push("#### Author\n".to_string());
        lines.push(author.clone());
        lines.push(String::new());
    }

    // Tags without a dedicated section above
    let other: Vec<_> = doc
        .tags
        .iter()
        .filter(|(name, _)| !matches!(name.as_str(), "param" | "return" | "author" | "deprecated"))
        .collect();
    if !other.is_empty() {
        lines.push("#### Tags\n".to_string());
        for (name, value) in other {
            lines.push(format!("* `@{}` {}", name, value));
        }
        lines.push(String::new());
    }

    lines.push(format!("_Source: {}_", render_location(&doc.location)));
    lines.push(String::new());
}

/// `3:0-5:3`
fn render_location(loc: &Location) -> String {
    format!(
        "{}:{}-{}:{}",
        loc.start_line, loc.start_column, loc.end_line, loc.end_column
    )
}
