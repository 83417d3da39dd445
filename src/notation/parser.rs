//! Configurable parser for tree notation.
//!
//! This module provides the [TreeNotationParser] struct, which runs the
//! tokenizer and the builder and unwraps the parsed tree from the
//! synthetic root.

use crate::model::{IdCounter, LabeledTree};
use crate::notation::builder::fold_tokens;
use crate::notation::token::{Token, TokenKind};
use crate::notation::tokenizer::tokenize;
use crate::parser::parsing_error::ParsingError;
use tracing::debug;

// =#========================================================================#=
// TREE NOTATION PARSER
// =#========================================================================$=
/// Parser (configuration) for tree notation strings.
///
/// # Construction
/// * [`new()`](Self::new) - default configuration, ids starting at 0
///
/// # Configuration
/// * [`with_id_counter(ids)`](Self::with_id_counter)
///     - Draws node ids from the given counter. The parser keeps the
///       counter between calls, so ids stay unique across parsed trees.
/// * [`with_require_balanced()`](Self::with_require_balanced)
///     - Rejects input with unclosed left brackets instead of closing
///       them implicitly.
/// * [`keep_synthetic_root()`](Self::keep_synthetic_root)
///     - Returns the tree rooted at the synthetic `_` root the builder
///       starts from, instead of unwrapping its single child.
///
/// # Parsing
/// * [`parse_str`](Self::parse_str) - Parse a single tree
/// * [`build`](Self::build) - Fold already tokenized input
///
/// # Example
/// ```
/// use treemaker::notation::TreeNotationParser;
///
/// let mut parser = TreeNotationParser::new().with_require_balanced();
/// let tree = parser.parse_str("A(A1(A11 A12) A2)")?;
/// assert_eq!(tree.root().label(), "A");
/// assert_eq!(tree.size(), 5);
/// assert!(parser.parse_str("A(A1").is_err());
/// # Ok::<(), treemaker::parser::ParsingError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeNotationParser {
    ids: IdCounter,
    require_balanced: bool,
    keep_synthetic_root: bool,
}

// ============================================================================
// Construction & Configuration (pub)
// ============================================================================
impl TreeNotationParser {
    /// Creates a new [TreeNotationParser] with default settings:
    /// - ids start at 0
    /// - unclosed left brackets are closed implicitly
    /// - the parsed tree is unwrapped from the synthetic root
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the counter node ids are drawn from.
    pub fn with_id_counter(mut self, ids: IdCounter) -> Self {
        self.ids = ids;
        self
    }

    /// Configures the parser to reject unclosed left brackets.
    pub fn with_require_balanced(mut self) -> Self {
        self.require_balanced = true;
        self
    }

    /// Configures the parser to return the synthetic root.
    pub fn keep_synthetic_root(mut self) -> Self {
        self.keep_synthetic_root = true;
        self
    }

    /// Returns the current state of the id counter.
    pub fn id_counter(&self) -> IdCounter {
        self.ids
    }

    /// Restores the id counter to zero.
    ///
    /// Trees parsed before and after the reset share ids.
    pub fn reset_ids(&mut self) {
        self.ids.reset();
    }
}

// ============================================================================
// API Parsing (pub)
// ============================================================================
impl TreeNotationParser {
    /// Parses a single tree from tree notation.
    ///
    /// # Returns
    /// * `Ok(LabeledTree)` - The parsed tree; rooted at its first label, or at
    ///   the synthetic root if so configured
    /// * `Err(ParsingError)` - If tokenizing or building failed, or if the
    ///   input holds no tree or several top-level trees (unless the
    ///   synthetic root is kept)
    pub fn parse_str(&mut self, text: &str) -> Result<LabeledTree, ParsingError> {
        debug!(num_chars = text.chars().count(), "parsing tree notation");
        let tokens = tokenize(text)?;
        let synthetic = self.build(&tokens).map_err(|e| e.with_input_context(text))?;

        if self.keep_synthetic_root {
            return Ok(synthetic);
        }

        match synthetic.root().children() {
            [top] => synthetic
                .subtree(*top)
                .map_err(|e| ParsingError::tree(e, 0).with_input_context(text)),
            [] => Err(ParsingError::malformed_tree("empty tree notation", 0)),
            tops => {
                let position = top_level_label_positions(&tokens)
                    .get(1)
                    .copied()
                    .unwrap_or(0);
                Err(ParsingError::malformed_tree(
                    format!("expected a single root node, found {}", tops.len()),
                    position,
                )
                .with_input_context(text))
            }
        }
    }

    /// Folds already tokenized input into a tree rooted at the synthetic
    /// root, with this parser's id counter and bracket configuration.
    pub fn build(&mut self, tokens: &[Token]) -> Result<LabeledTree, ParsingError> {
        let tree = fold_tokens(tokens, self.ids, self.require_balanced)?;
        self.ids = tree.id_counter();
        Ok(tree)
    }
}

/// Returns the positions of labels outside of any brackets.
fn top_level_label_positions(tokens: &[Token]) -> Vec<usize> {
    let mut depth = 0usize;
    let mut positions = Vec::new();
    for token in tokens {
        match token.kind() {
            TokenKind::BrackL => depth += 1,
            TokenKind::BrackR => depth = depth.saturating_sub(1),
            TokenKind::Node(_) | TokenKind::Literal(_) => {
                if depth == 0 {
                    positions.push(token.position());
                }
            }
        }
    }
    positions
}
