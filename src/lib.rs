//! Treemaker is a library for labeled trees with a compact, round-trippable
//! textual form ("tree notation").
//!
//! Core functionality provided:
//! - Tree model: [LabeledTree] stores labeled nodes with ordered children
//!   and parent links, using the arena pattern, so no direct node
//!   references are stored, only node indices. See [crate::model].
//! - Metrics: depth, size, and pre-order flattening of any subtree.
//! - Tree notation: parse (`A(A1(A11 A12) A2)`) and write trees; writing a
//!   tree and parsing it again gives back the same tree.
//!   See [crate::notation].
//! - Diagram export: node ids, labels, and edges for diagram renderers,
//!   including a Mermaid flowchart description. See [crate::diagram].
//! - Configurability: id source, strict bracket matching, and access to
//!   the synthetic root via [TreeNotationParser](crate::notation::TreeNotationParser).
//!
//! # Usage patterns
//! 1. [parse_tree_str] parses a string with default settings.
//! 2. Configure a [TreeNotationParser](crate::notation::TreeNotationParser)
//!    for full control.
//! 3. Build a tree by hand with [LabeledTree::new_node] and
//!    [LabeledTree::add_child].
//!
//! ## Example
//! ```
//! use treemaker::parse_tree_str;
//!
//! let tree = parse_tree_str("A(A1(A11 A12) A2)")?;
//! assert_eq!(tree.depth(), 3);
//! assert_eq!(tree.size(), 5);
//! assert_eq!(tree.labels(), ["A", "A1", "A11", "A12", "A2"]);
//! assert_eq!(tree.to_notation(), "A(A1(A11 A12) A2)");
//! # Ok::<(), treemaker::parser::ParsingError>(())
//! ```
//!
//! ## Example Parser Configuration
//! ```
//! use treemaker::model::IdCounter;
//! use treemaker::notation::TreeNotationParser;
//!
//! let mut parser = TreeNotationParser::new()
//!     .with_id_counter(IdCounter::starting_at(100))
//!     .with_require_balanced();
//!
//! let tree = parser.parse_str("A(B C)")?;
//! assert!(tree.root().id().value() > 100);
//! # Ok::<(), treemaker::parser::ParsingError>(())
//! ```

pub mod diagram;
pub mod model;
pub mod notation;
pub mod parser;

use crate::model::LabeledTree;
use crate::parser::ParsingError;

// ============================================================================
// Quick API
// ============================================================================
/// Parse a tree notation string using default settings,
/// returning a [LabeledTree] rooted at its first label.
///
/// See [`notation::parse_str`] for full documentation.
pub fn parse_tree_str<S: AsRef<str>>(text: S) -> Result<LabeledTree, ParsingError> {
    notation::parse_str(text)
}
