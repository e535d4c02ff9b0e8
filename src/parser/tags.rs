//! Structured fields derived from a comment's tag lines.

use super::body::CommentBody;
use std::collections::BTreeMap;

/// How `@param` lines are turned into parameter docs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParamMode {
    /// Read the single `param` entry of the last-wins tag mapping, so only
    /// the last `@param` line survives.
    #[default]
    LastOnly,
    /// Read every `@param` line in order. A repeated name keeps its last
    /// description.
    All,
}

/// Fields extracted from tags.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TagFields {
    pub params: BTreeMap<String, String>,
    pub return_description: Option<String>,
    pub author: Option<String>,
    pub deprecated: Option<String>,
}

pub fn extract(body: &CommentBody, mode: ParamMode) -> TagFields {
    let tags = body.tags();

    let params = match mode {
        ParamMode::LastOnly => tags
            .get("param")
            .map(|raw| split_param(raw.as_str()))
            .into_iter()
            .collect(),
        ParamMode::All => body.values("param").map(split_param).collect(),
    };

    TagFields {
        params,
        return_description: non_empty(&tags, "return"),
        author: non_empty(&tags, "author"),
        deprecated: non_empty(&tags, "deprecated"),
    }
}

/// Split `"name rest of text"` on the first whitespace run.
fn split_param(raw: &str) -> (String, String) {
    match raw.split_once(char::is_whitespace) {
        Some((name, desc)) => (name.to_string(), desc.trim_start().to_string()),
        None => (raw.to_string(), String::new()),
    }
}

fn non_empty(tags: &BTreeMap<String, String>, name: &str) -> Option<String> {
    tags.get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
