//! docanchor: find and decode the documentation comment attached to a
//! declaration.
//!
//! Given a token stream that keeps hidden tokens (whitespace, comments) and
//! the index of a declaration's first significant token, the locator picks
//! the nearest documentation comment in front of it and decodes it into a
//! description plus `@tag` fields.
//!
//! ```ignore
//! let buffer = docanchor::lexer::tokenize(source)?;
//! let doc = docanchor::locate_comment(&buffer, anchor);
//! ```

pub mod classify;
pub mod declaration;
pub mod lexer;
pub mod locate;
pub mod model;
pub mod parser;
pub mod render;
pub mod token;

pub use classify::{Classifier, DocCommentClassifier};
pub use locate::{locate_address, locate_comment, CommentLocator};
pub use model::{DocComment, Location};
pub use parser::ParamMode;
pub use token::{Token, TokenBuffer, TokenStream};
