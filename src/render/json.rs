//! JSON renderer — structured output for tooling integration.

use crate::render::{Renderer, Report};
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, report: &Report) -> Result<String> {
        let mut out = serde_json::to_string_pretty(report)
            .with_context(|| format!("failed to serialize report for {}", report.source))?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::find_declarations;
    use crate::lexer::tokenize;
    use crate::locate::locate_comment;
    use crate::render::Entry;
    use serde_json::Value;

    #[test]
    fn renders_comment_fields() {
        let buf = tokenize("/** Adds.\n * @return sum\n */\nint add();").unwrap();
        let entries = find_declarations(&buf)
            .into_iter()
            .map(|declaration| Entry {
                comment: locate_comment(&buf, declaration.anchor),
                location: None,
                declaration,
            })
            .collect();
        let report = Report {
            source: "add.c".to_string(),
            entries,
        };

        let out = JsonRenderer.render(&report).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        let entry = &value["entries"][0];
        assert_eq!(entry["declaration"]["signature"], "int add()");
        assert_eq!(entry["comment"]["description"], "Adds.");
        assert_eq!(entry["comment"]["return_description"], "sum");
        assert_eq!(entry["comment"]["location"]["start_line"], 1);
        assert!(entry.get("location").is_none());
    }
}
