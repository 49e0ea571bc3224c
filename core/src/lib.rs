//! Syntax highlighting for JavaScript and JSX.
//!
//! [`highlight`] classifies byte ranges of a source into [`Highlight`]
//! categories in a single pass, resolving regex/division, template
//! substitutions and embedded JSX as it goes.

pub mod diagnostics;
pub mod errors;
pub mod lexer;
pub mod options;
pub mod render;

pub use errors::{DecodeError, HighlightError};
pub use lexer::token::{Highlight, Token};
pub use lexer::{highlight, highlight_to_vec};
pub use options::HighlightOptions;
