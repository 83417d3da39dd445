//! Tree notation parser and writer.
//!
//! This module provides [TreeNotationParser] to parse tree notation
//! strings into [LabeledTree]s and [to_notation] to write them back.
//! Parsing runs in two stages: [tokenize] turns the text into a flat
//! sequence of [Token]s, and [build] folds them into a tree with a single
//! cursor.
//!
//! # Quick API
//! For simple use cases with default settings:
//! * [`parse_str`] - parses a single string, returns a [LabeledTree]
//!
//! # Full API
//! For more control, configure a [TreeNotationParser]:
//! * [`TreeNotationParser::parse_str`] - parse a single tree
//! * [`TreeNotationParser::build`] - fold tokens into a tree
//!
//! # Format
//! Tree notation has the following simple grammar:
//! * `tree ::= label [ '(' tree { ' ' tree } ')' ]`
//! * `label ::= plain_label | quoted_label`
//! * `plain_label ::= (alphanumeric | '_' | '-')+`
//! * `quoted_label ::= "'" { any character except "'" } "'"`
//!
//! Furthermore:
//! * Whitespace (space, tab, newline) separates trees and may appear
//!   around brackets; it cannot occur within a plain label
//! * Quoted labels are taken verbatim, there is no escaping
//! * An empty quoted label `''` becomes the sentinel label `_`
//!
//! Examples: `A`, `A(A1 A2 A3)`, `A(A1(A11 A12) A2)`.
//!
//! Writing a tree and parsing the result gives back a tree with the same
//! labels in the same shape.

mod builder;
mod parser;
mod token;
mod tokenizer;
mod writer;

pub use builder::build;
pub use parser::TreeNotationParser;
pub use token::{Token, TokenKind};
pub use tokenizer::tokenize;
pub use writer::to_notation;

use crate::model::LabeledTree;
use crate::parser::ParsingError;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses a single tree notation string to obtain a [LabeledTree].
///
/// This is a convenience function using default settings and thus not
/// requiring configuration of a parser: ids start at 0, unclosed brackets
/// are closed implicitly, and the tree is rooted at its first label.
///
/// # Arguments
/// * `text` - The tree notation string to parse
///
/// # Returns
/// * [LabeledTree] - Tree parsed from the string
/// * [ParsingError] - If the string is not valid tree notation
///
/// # Example
/// ```
/// use treemaker::notation::parse_str;
///
/// let tree = parse_str("Kiwi(Tokoeka Rowi(Okarito))")?;
/// assert_eq!(tree.depth(), 3);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_str<S: AsRef<str>>(text: S) -> Result<LabeledTree, ParsingError> {
    TreeNotationParser::new().parse_str(text.as_ref())
}
