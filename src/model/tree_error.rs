//! Errors raised while constructing a tree.

use crate::model::tree::NodeIndex;
use thiserror::Error;

/// Errors of tree construction operations such as
/// [LabeledTree::new_node](crate::model::LabeledTree::new_node) and
/// [LabeledTree::add_child](crate::model::LabeledTree::add_child).
///
/// A failing operation leaves the tree unchanged.
#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum TreeError {
    /// Label cannot be represented in tree notation
    #[error("Invalid label {label:?} - {reason}")]
    InvalidLabel {
        /// Offending label
        label: String,
        /// Why it was rejected
        reason: String,
    },

    /// Argument does not refer to a node of this tree
    #[error("Invalid argument - {0}")]
    InvalidArgument(String),

    /// Child already has a parent
    #[error("Node {child} is already attached to node {parent}")]
    AlreadyAttached {
        /// Node that was to be attached
        child: NodeIndex,
        /// Its current parent
        parent: NodeIndex,
    },

    /// The root of a tree cannot become a child
    #[error("Root node {root} cannot be attached to node {parent}")]
    RootAsChild {
        /// Root of the tree
        root: NodeIndex,
        /// Requested parent
        parent: NodeIndex,
    },

    /// Attaching would make a node its own ancestor
    #[error("Attaching node {child} to node {parent} would create a cycle")]
    WouldCreateCycle {
        /// Node that was to be attached
        child: NodeIndex,
        /// Requested parent
        parent: NodeIndex,
    },
}
