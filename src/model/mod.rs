//! Data model for labeled trees.
//!
//! # Tree representation
//! Trees are represented by [LabeledTree], which uses the arena pattern to
//! store [TreeNode]s referenced by [NodeIndex]. Each node has a non-empty
//! label, an ordered list of children, and a back-reference to its parent.
//!
//! # Building trees
//! Trees are either built by hand, creating nodes with
//! [LabeledTree::new_node] and attaching them with
//! [LabeledTree::add_child], or parsed from tree notation
//! (see [crate::notation]).
//!
//! # Ids
//! Each node carries a [NodeId] drawn from an [IdCounter]. The counter is
//! owned by whoever builds trees and can be passed on or reset, so tests
//! can number nodes deterministically.

pub mod label;
pub mod node_id;
pub mod tree;
pub mod tree_error;
pub mod tree_node;

pub use node_id::{IdCounter, NodeId};
pub use tree::{LabeledTree, NodeIndex, PostOrderIter, PreOrderIter};
pub use tree_error::TreeError;
pub use tree_node::TreeNode;
