//! Parser module — turn a comment token into a [`DocComment`].

pub mod body;
pub mod tags;

use crate::model::{DocComment, Location};
use crate::token::Token;
use anyhow::Result;

pub use body::{parse_body, CommentBody};
pub use tags::ParamMode;

/// Decode a documentation comment token.
///
/// All or nothing: an error leaves no partial result behind.
pub fn decode(token: &Token, mode: ParamMode) -> Result<DocComment> {
    let location = Location::from_token(token)?;
    let body = parse_body(&token.text);
    let fields = tags::extract(&body, mode);

    Ok(DocComment {
        location,
        description: body.description().to_string(),
        params: fields.params,
        return_description: fields.return_description,
        author: fields.author,
        deprecated: fields.deprecated,
        tags: body.tags(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(text: &str) -> Token {
        Token {
            text: text.to_string(),
            index: 0,
            line: 1,
            column: 0,
            hidden: true,
        }
    }

    #[test]
    fn decode_block_comment() {
        let doc = decode(
            &comment("/** Description line.\n@param x the x value\n@return the result\n*/"),
            ParamMode::LastOnly,
        )
        .unwrap();
        assert_eq!(doc.description, "Description line.");
        assert_eq!(doc.params.len(), 1);
        assert_eq!(doc.params.get("x").map(String::as_str), Some("the x value"));
        assert_eq!(doc.return_description.as_deref(), Some("the result"));
        assert_eq!(doc.author, None);
        assert_eq!(doc.location.end_line, 4);
    }

    #[test]
    fn decode_triple_slash_block() {
        let doc = decode(
            &comment("/// Line one\n/// @author Jane Doe"),
            ParamMode::LastOnly,
        )
        .unwrap();
        assert_eq!(doc.description, "Line one");
        assert_eq!(doc.author.as_deref(), Some("Jane Doe"));
        assert_eq!(doc.tags.len(), 1);
    }

    #[test]
    fn decode_empty_block() {
        let doc = decode(&comment("/**/"), ParamMode::LastOnly).unwrap();
        assert_eq!(doc.description, "");
        assert!(doc.tags.is_empty());
        assert!(doc.params.is_empty());
    }

    #[test]
    fn tags_stay_last_wins_in_all_mode() {
        let doc = decode(
            &comment("/**\n * @param a desc-a\n * @param b desc-b\n */"),
            ParamMode::All,
        )
        .unwrap();
        assert_eq!(doc.params.len(), 2);
        assert_eq!(doc.tags.get("param").map(String::as_str), Some("b desc-b"));
    }

    #[test]
    fn bad_position_fails_whole_decode() {
        let mut token = comment("/** fine text */");
        token.line = 0;
        assert!(decode(&token, ParamMode::LastOnly).is_err());
    }
}
