//! Decide whether a hidden token is a documentation comment.

/// Marker reserved for a documentation format that is not specified yet.
///
/// Matched anywhere in the token text, not just as a prefix, so comments
/// written ahead of the format are picked up whatever their surface syntax
/// turns out to be.
pub const RESERVED_MARKER: &str = "@@doc";

/// Classifies hidden-token text.
pub trait Classifier {
    fn is_doc_comment(&self, text: &str) -> bool;
}

/// `/** ... */` blocks, `///` lines, and anything carrying
/// [`RESERVED_MARKER`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DocCommentClassifier;

impl Classifier for DocCommentClassifier {
    fn is_doc_comment(&self, text: &str) -> bool {
        let trimmed = text.trim();
        trimmed.starts_with("/**") || trimmed.starts_with("///") || text.contains(RESERVED_MARKER)
    }
}

impl<F> Classifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_doc_comment(&self, text: &str) -> bool {
        self(text)
    }
}
