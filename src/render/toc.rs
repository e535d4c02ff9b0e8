//! GitHub-flavored markdown anchor/slug generation for the index.

use std::collections::HashMap;

/// Hands out heading anchors in document order, suffixing repeats with
/// `-1`, `-2`, ... the way GitHub does.
#[derive(Debug, Default)]
pub struct Slugger {
    /// Slug → highest suffix handed out for it so far
    seen: HashMap<String, usize>,
}

impl Slugger {
    /// Anchor for the next heading titled `title`.
    pub fn slug(&mut self, title: &str) -> String {
        let base = github_slug(title);
        let mut slug = base.clone();
        if let Some(&used) = self.seen.get(&base) {
            let mut n = used;
            loop {
                n += 1;
                slug = format!("{}-{}", base, n);
                if !self.seen.contains_key(&slug) {
                    break;
                }
            }
            self.seen.insert(base, n);
        }
        self.seen.insert(slug.clone(), 0);
        slug
    }

    /// Table-of-contents list item linking to the next heading titled `title`.
    pub fn toc_item(&mut self, title: &str) -> String {
        format!("* [{}](#{})", escape_link_text(title), self.slug(title))
    }
}

/// GitHub heading anchor slug generation.
///
/// - lowercase
/// - remove all chars that aren't alphanumeric, `_`, space, or hyphen
/// - replace spaces with hyphens
pub fn github_slug(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|&c| c.is_alphanumeric() || matches!(c, '_' | '-' | ' '))
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}

fn escape_link_text(text: &str) -> String {
    text.replace('[', "\\[").replace(']', "\\]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_strips_punctuation() {
        assert_eq!(github_slug("int add(int a, int b)"), "int-addint-a-int-b");
    }

    #[test]
    fn slug_keeps_hyphens_and_underscores() {
        assert_eq!(github_slug("my-func"), "my-func");
        assert_eq!(
            github_slug("double distance_sq(struct point a)"),
            "double-distance_sqstruct-point-a"
        );
    }

    #[test]
    fn toc_item_links_heading() {
        assert_eq!(Slugger::default().toc_item("fn main()"), "* [fn main()](#fn-main)");
    }

    #[test]
    fn toc_item_escapes_brackets() {
        assert_eq!(Slugger::default().toc_item("#[test]"), "* [#\\[test\\]](#test)");
    }

    #[test]
    fn repeated_titles_get_numbered_suffixes() {
        let mut slugger = Slugger::default();
        assert_eq!(slugger.slug("int f(void)"), "int-fvoid");
        assert_eq!(slugger.slug("int f(void)"), "int-fvoid-1");
        assert_eq!(slugger.slug("int f(void)"), "int-fvoid-2");
        assert_eq!(slugger.slug("int g(void)"), "int-gvoid");
    }

    #[test]
    fn suffix_skips_a_slug_already_taken() {
        let mut slugger = Slugger::default();
        assert_eq!(slugger.slug("a-1"), "a-1");
        assert_eq!(slugger.slug("a"), "a");
        assert_eq!(slugger.slug("a"), "a-2");
    }
}
