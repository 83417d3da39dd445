//! Second parsing stage: folding tokens into a tree.
//!
//! The builder keeps a single cursor, the "current parent", starting at a
//! synthetic root node with the sentinel label. Labels are attached to the
//! cursor, `(` moves the cursor down to the label just attached, and `)`
//! moves it back up. There is no recursion and no backtracking.

use crate::model::{IdCounter, LabeledTree};
use crate::notation::token::{Token, TokenKind};
use crate::parser::parsing_error::ParsingError;
use tracing::{debug, trace};

/// Folds a token sequence into a tree rooted at a synthetic root.
///
/// The synthetic root has the sentinel label `_`; the parsed tree (or
/// trees) hang below it. Unclosed left brackets are closed implicitly.
///
/// # Errors
/// `MalformedTree` if a left bracket does not follow a label, or if a right
/// bracket would ascend past the synthetic root.
///
/// # Example
/// ```
/// use treemaker::notation::{build, tokenize};
///
/// let tree = build(&tokenize("A(A1 A2)")?)?;
/// assert_eq!(tree.root().label(), "_");
/// assert_eq!(tree.to_notation(), "_(A(A1 A2))");
/// # Ok::<(), treemaker::parser::ParsingError>(())
/// ```
pub fn build(tokens: &[Token]) -> Result<LabeledTree, ParsingError> {
    fold_tokens(tokens, IdCounter::new(), false)
}

/// Folds a token sequence into a tree rooted at a synthetic root,
/// drawing node ids from `ids`.
///
/// With `require_balanced`, a left bracket still open after the last token
/// is a `MalformedTree` error.
pub(crate) fn fold_tokens(
    tokens: &[Token],
    ids: IdCounter,
    require_balanced: bool,
) -> Result<LabeledTree, ParsingError> {
    let mut tree = LabeledTree::with_id_counter("", ids).map_err(|e| ParsingError::tree(e, 0))?;
    let mut cursor = tree.root_index();
    // Positions of left brackets not closed yet, for error reporting only
    let mut open_brackets = Vec::new();

    for token in tokens {
        trace!(%token, cursor, "folding token");
        match token.kind() {
            TokenKind::Node(label) | TokenKind::Literal(label) => {
                tree.add_leaf(cursor, label)
                    .map_err(|e| ParsingError::tree(e, token.position()))?;
            }
            TokenKind::BrackL => {
                cursor = tree[cursor].last_child().ok_or_else(|| {
                    ParsingError::malformed_tree(
                        "expected a node before left bracket",
                        token.position(),
                    )
                })?;
                open_brackets.push(token.position());
            }
            TokenKind::BrackR => {
                cursor = tree.parent_of(cursor).ok_or_else(|| {
                    ParsingError::malformed_tree("cannot ascend past root", token.position())
                })?;
                open_brackets.pop();
            }
        }
    }

    if require_balanced {
        if let Some(&position) = open_brackets.last() {
            return Err(ParsingError::malformed_tree("unclosed left bracket", position));
        }
    }

    debug!(num_nodes = tree.num_nodes(), "built tree from tokens");
    Ok(tree)
}
