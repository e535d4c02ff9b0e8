//! Comment body decoding: delimiter stripping and tag splitting.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static RE_TAG_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@(\w+) +(.*)$").unwrap());

/// Decoded comment body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentBody {
    description: String,
    /// Every tag line in source order
    entries: Vec<(String, String)>,
}

impl CommentBody {
    /// Text before the first tag line, space-joined.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// One value per tag name; a repeated name keeps its last value.
    pub fn tags(&self) -> BTreeMap<String, String> {
        self.entries.iter().cloned().collect()
    }

    /// Every `(name, value)` tag line, in source order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Values of every tag line named `name`, in source order.
    pub fn values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Accumulator for the line scan.
#[derive(Default)]
struct Scan {
    description: Vec<String>,
    entries: Vec<(String, String)>,
}

/// Split a raw comment into its description and tag lines.
pub fn parse_body(raw: &str) -> CommentBody {
    let body = raw
        .lines()
        .map(strip_delimiters)
        .collect::<Vec<_>>()
        .join("\n");

    let scan = body.trim().lines().fold(Scan::default(), |mut scan, line| {
        if let Some(caps) = RE_TAG_LINE.captures(line) {
            scan.entries
                .push((caps[1].to_string(), caps[2].trim().to_string()));
        } else if scan.entries.is_empty() && !line.trim().is_empty() {
            scan.description.push(line.trim().to_string());
        }
        // Non-tag lines after the first tag are dropped.
        scan
    });

    CommentBody {
        description: scan.description.join(" ").trim().to_string(),
        entries: scan.entries,
    }
}

/// Strip comment markers from one line of a comment.
fn strip_delimiters(line: &str) -> &str {
    let mut s = line.trim();
    if let Some(rest) = s.strip_prefix("/**") {
        // `/**/` shares its star between opener and closer.
        s = if rest == "/" { "" } else { rest };
    }
    if let Some(rest) = s.strip_suffix("*/") {
        s = rest;
    }
    if let Some(rest) = s.strip_prefix('*') {
        s = rest;
    }
    if let Some(rest) = s.strip_prefix("///") {
        s = rest;
    }
    s.trim()
}
