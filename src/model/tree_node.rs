//! Node of a labeled tree.

use crate::model::node_id::NodeId;
use crate::model::tree::NodeIndex;

// =#========================================================================#=
// TREE NODE
// =#========================================================================#=
/// A labeled node with an ordered list of children and an upward link to
/// its parent.
///
/// Nodes live in the arena of a [LabeledTree](crate::model::LabeledTree)
/// and refer to each other by [NodeIndex]. The children are owned by the
/// node (in the sense that the tree only reaches them through it), while
/// the parent index is a plain back-reference used for upward traversal.
///
/// # Invariants
/// - `index` is the position of the node in its tree's arena
/// - `label` is never empty (an empty label is replaced by
///   [SENTINEL_LABEL](crate::model::label::SENTINEL_LABEL))
/// - `parent` is `None` until the node is attached as a child,
///   and is set exactly once
/// - `children` keep the order in which they were attached
///
/// Equality compares everything but the id.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Index of this node in the tree arena
    index: NodeIndex,
    /// Unique id, used for diagram identifiers only
    id: NodeId,
    /// Non-empty label
    label: String,
    /// Index of the parent node, if attached
    parent: Option<NodeIndex>,
    /// Indices of the child nodes, in attachment order
    children: Vec<NodeIndex>,
}

impl TreeNode {
    /// Creates a new, unattached node without children.
    ///
    /// The caller is responsible for passing a normalized label.
    pub(crate) fn new(index: NodeIndex, id: NodeId, label: String) -> Self {
        debug_assert!(!label.is_empty());
        Self {
            index,
            id,
            label,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Returns the index of this node.
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// Returns the id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the label of this node.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the index of the parent, or `None` if unattached.
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Returns whether the node has been attached to a parent.
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Returns the child indices in attachment order.
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    /// Returns the most recently attached child, if any.
    pub fn last_child(&self) -> Option<NodeIndex> {
        self.children.last().copied()
    }

    /// Returns the number of children.
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Returns whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn set_parent(&mut self, parent: NodeIndex) {
        self.parent = Some(parent);
    }

    pub(crate) fn push_child(&mut self, child: NodeIndex) {
        self.children.push(child);
    }
}

impl PartialEq for TreeNode {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && self.label == other.label
            && self.parent == other.parent
            && self.children == other.children
    }
}

impl Eq for TreeNode {}
