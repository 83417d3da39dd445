//! Arena-based labeled tree.
//!
//! Provides [LabeledTree], which owns all of its [TreeNode]s in a single
//! vector and links them via [NodeIndex], together with traversal
//! iterators and the derived metrics (depth, size, pre-order flattening).

use crate::model::label::{QUOTE, normalize_label};
use crate::model::node_id::IdCounter;
use crate::model::tree_error::TreeError;
use crate::model::tree_node::TreeNode;
use crate::notation;
use std::fmt;
use tracing::trace;

/// Index of a node in a tree (arena).
pub type NodeIndex = usize;

/// Marks arena slots that have no counterpart when copying a subtree.
const NO_INDEX: NodeIndex = usize::MAX;

// =$========================================================================$=
// LABELED TREE
// =$========================================================================$=
/// A rooted, ordered tree of labeled nodes, represented using the arena
/// pattern on [TreeNode].
///
/// Nodes are stored in a contiguous vector and referenced by [NodeIndex].
/// The tree is created with a root; further nodes are created unattached
/// with [new_node](Self::new_node) and then attached with
/// [add_child](Self::add_child) or [add_children](Self::add_children).
/// Nodes are never removed.
///
/// # Structure
/// - The root sits at index 0 and never has a parent.
/// - A node gets its parent exactly once; attaching an already attached
///   node, or attaching a node below itself, is rejected.
/// - Nodes created but never attached stay in the arena, outside the
///   tree reachable from the root. Metrics, traversal, and serialization
///   only see the nodes reachable from the node they start at.
/// - Every node gets a fresh [NodeId](crate::model::NodeId) from the
///   tree's [IdCounter].
///
/// # Example
/// ```
/// use treemaker::model::LabeledTree;
///
/// let mut tree = LabeledTree::new("A")?;
/// let root = tree.root_index();
/// let a1 = tree.add_leaf(root, "A1")?;
/// tree.add_leaf(a1, "A11")?;
/// tree.add_leaf(root, "A2")?;
///
/// assert_eq!(tree.to_notation(), "A(A1(A11) A2)");
/// assert_eq!(tree.depth(), 3);
/// assert_eq!(tree.size(), 4);
/// # Ok::<(), treemaker::model::TreeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LabeledTree {
    /// Nodes of this tree (arena pattern)
    nodes: Vec<TreeNode>,

    /// Index of the root of this tree
    root_index: NodeIndex,

    /// Source of node ids
    ids: IdCounter,
}

// ============================================================================
// New, Construction (pub)
// ============================================================================
impl LabeledTree {
    /// Creates a new tree consisting of a root with the given label,
    /// drawing ids from a fresh [IdCounter].
    ///
    /// # Errors
    /// [TreeError::InvalidLabel] if the label contains a single quote.
    pub fn new(root_label: &str) -> Result<Self, TreeError> {
        Self::with_id_counter(root_label, IdCounter::new())
    }

    /// Creates a new tree consisting of a root with the given label,
    /// drawing ids from the given counter.
    ///
    /// # Errors
    /// [TreeError::InvalidLabel] if the label contains a single quote.
    pub fn with_id_counter(root_label: &str, ids: IdCounter) -> Result<Self, TreeError> {
        let mut tree = LabeledTree {
            nodes: Vec::new(),
            root_index: 0,
            ids,
        };
        tree.root_index = tree.new_node(root_label)?;
        Ok(tree)
    }

    /// Creates a fresh node that is not attached to any other node yet
    /// and returns its index.
    ///
    /// An empty label is replaced by
    /// [SENTINEL_LABEL](crate::model::label::SENTINEL_LABEL).
    ///
    /// # Errors
    /// [TreeError::InvalidLabel] if the label contains a single quote,
    /// as it could not be written in tree notation.
    pub fn new_node(&mut self, label: &str) -> Result<NodeIndex, TreeError> {
        if label.contains(QUOTE) {
            return Err(TreeError::InvalidLabel {
                label: label.to_string(),
                reason: "labels must not contain a single quote".to_string(),
            });
        }

        let index = self.nodes.len();
        let id = self.ids.next_id();
        self.nodes
            .push(TreeNode::new(index, id, normalize_label(label)));
        Ok(index)
    }

    /// Attaches `child` as last child of `parent`.
    ///
    /// Appends `child` to the children of `parent` and sets the parent of
    /// `child`. Nothing changes if an error is returned.
    ///
    /// # Errors
    /// * [TreeError::InvalidArgument] - if an index is not a node of this tree
    /// * [TreeError::RootAsChild] - if `child` is the root of this tree
    /// * [TreeError::AlreadyAttached] - if `child` already has a parent
    /// * [TreeError::WouldCreateCycle] - if `child` is `parent` or one of its ancestors
    pub fn add_child(&mut self, parent: NodeIndex, child: NodeIndex) -> Result<(), TreeError> {
        self.check_index(parent)?;
        self.check_index(child)?;

        // Unattached nodes have no path up to the root, so the
        // ancestor walk below would not catch this
        if child == self.root_index {
            return Err(TreeError::RootAsChild {
                root: child,
                parent,
            });
        }

        if let Some(current) = self.nodes[child].parent() {
            return Err(TreeError::AlreadyAttached {
                child,
                parent: current,
            });
        }
        // A leaf can only be an ancestor of itself
        let may_be_ancestor = child == parent || !self.nodes[child].is_leaf();
        if may_be_ancestor && self.is_ancestor_or_self(child, parent) {
            return Err(TreeError::WouldCreateCycle { child, parent });
        }

        trace!(parent, child, "attaching child");
        self.nodes[parent].push_child(child);
        self.nodes[child].set_parent(parent);
        Ok(())
    }

    /// Attaches each of `children` to `parent`, in order.
    ///
    /// There is no rollback: if the n-th child fails, the first n-1
    /// children remain attached.
    ///
    /// # Errors
    /// The first error returned by [add_child](Self::add_child).
    pub fn add_children(
        &mut self,
        parent: NodeIndex,
        children: &[NodeIndex],
    ) -> Result<(), TreeError> {
        for &child in children {
            self.add_child(parent, child)?;
        }
        Ok(())
    }

    /// Creates a node with the given label and attaches it to `parent`,
    /// returning its index.
    ///
    /// # Errors
    /// See [new_node](Self::new_node) and [add_child](Self::add_child).
    pub fn add_leaf(&mut self, parent: NodeIndex, label: &str) -> Result<NodeIndex, TreeError> {
        self.check_index(parent)?;
        let child = self.new_node(label)?;
        self.add_child(parent, child)?;
        Ok(child)
    }

    /// Returns a copy of the tree rooted at `index`, with the same labels
    /// and ids.
    ///
    /// Nodes are renumbered in pre-order, so the new root sits at index 0.
    /// The id counter carries over, so new nodes of the copy keep getting
    /// fresh ids.
    ///
    /// # Errors
    /// [TreeError::InvalidArgument] if `index` is not a node of this tree.
    pub fn subtree(&self, index: NodeIndex) -> Result<LabeledTree, TreeError> {
        self.check_index(index)?;

        let order: Vec<NodeIndex> = self.pre_order_iter_from(index).map(|n| n.index()).collect();
        let mut new_index = vec![NO_INDEX; self.nodes.len()];
        for (new, &old) in order.iter().enumerate() {
            new_index[old] = new;
        }

        let mut nodes = Vec::with_capacity(order.len());
        for &old in &order {
            let node = &self.nodes[old];
            let mut copy = TreeNode::new(new_index[old], node.id(), node.label().to_string());
            if old != index {
                if let Some(parent) = node.parent() {
                    copy.set_parent(new_index[parent]);
                }
            }
            for &child in node.children() {
                copy.push_child(new_index[child]);
            }
            nodes.push(copy);
        }

        Ok(LabeledTree {
            nodes,
            root_index: 0,
            ids: self.ids,
        })
    }
}

// ============================================================================
// Getters / Accessors (pub)
// ============================================================================
impl LabeledTree {
    /// Returns a reference to the root node.
    pub fn root(&self) -> &TreeNode {
        &self.nodes[self.root_index]
    }

    /// Returns the index of the root.
    pub fn root_index(&self) -> NodeIndex {
        self.root_index
    }

    /// Returns a reference to the node at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node(&self, index: NodeIndex) -> &TreeNode {
        &self[index]
    }

    /// Returns a reference to the node at the given index,
    /// or `None` if there is no such node.
    pub fn get(&self, index: NodeIndex) -> Option<&TreeNode> {
        self.nodes.get(index)
    }

    /// Returns the index of the parent of the given node.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn parent_of(&self, index: NodeIndex) -> Option<NodeIndex> {
        self[index].parent()
    }

    /// Returns the children of the given node in attachment order.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn children_of(&self, index: NodeIndex) -> &[NodeIndex] {
        self[index].children()
    }

    /// Returns the number of nodes in the arena,
    /// including nodes not (yet) attached to the tree.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the id counter of this tree, e.g. to continue numbering
    /// in another tree.
    pub fn id_counter(&self) -> IdCounter {
        self.ids
    }
}

// ============================================================================
// Metrics (pub)
// ============================================================================
impl LabeledTree {
    /// Returns the depth of the tree, that is, the number of nodes on a
    /// longest path from the root to a leaf. A single node has depth 1.
    pub fn depth(&self) -> usize {
        self.depth_of(self.root_index)
    }

    /// Returns the depth of the subtree rooted at the given node:
    /// 1 for a leaf, otherwise 1 plus the maximal depth of its children.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn depth_of(&self, index: NodeIndex) -> usize {
        // Depth of each visited node, filled bottom-up
        let mut depths = vec![0; self.nodes.len()];
        for node in self.post_order_iter_from(index) {
            depths[node.index()] = 1 + node
                .children()
                .iter()
                .map(|&child| depths[child])
                .max()
                .unwrap_or(0);
        }
        depths[index]
    }

    /// Returns the number of nodes in the tree.
    pub fn size(&self) -> usize {
        self.size_of(self.root_index)
    }

    /// Returns the number of nodes in the subtree rooted at the given node,
    /// including the node itself.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn size_of(&self, index: NodeIndex) -> usize {
        self.pre_order_iter_from(index).count()
    }

    /// Returns all nodes of the tree in pre-order.
    pub fn nodes(&self) -> Vec<&TreeNode> {
        self.nodes_of(self.root_index)
    }

    /// Returns the nodes of the subtree rooted at the given node in
    /// pre-order: the node itself, then the flattened subtrees of its
    /// children, left to right.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn nodes_of(&self, index: NodeIndex) -> Vec<&TreeNode> {
        self.pre_order_iter_from(index).collect()
    }

    /// Returns the labels of all nodes of the tree in pre-order.
    pub fn labels(&self) -> Vec<&str> {
        self.pre_order_iter().map(|node| node.label()).collect()
    }
}

// ============================================================================
// Serialization (pub)
// ============================================================================
impl LabeledTree {
    /// Returns the tree notation of this tree, e.g. `A(A1(A11 A12) A2)`.
    ///
    /// See [crate::notation] for the format.
    pub fn to_notation(&self) -> String {
        notation::to_notation(self, self.root_index)
    }

    /// Returns the tree notation of the subtree rooted at the given node.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn notation_of(&self, index: NodeIndex) -> String {
        notation::to_notation(self, index)
    }
}

impl fmt::Display for LabeledTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}

/// Trees are equal if they have the same labels in the same shape;
/// ids, arena layout, and unattached nodes are ignored.
impl PartialEq for LabeledTree {
    fn eq(&self, other: &Self) -> bool {
        let shape = |node: &TreeNode| (node.label().to_string(), node.num_children());
        self.pre_order_iter()
            .map(shape)
            .eq(other.pre_order_iter().map(shape))
    }
}

impl Eq for LabeledTree {}

// ============================================================================
// Validation (pub)
// ============================================================================
impl LabeledTree {
    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - Root index is valid and the root has no parent
    /// - All node indices match their position in the arena
    /// - All labels are non-empty and free of single quotes
    /// - All child indices are valid, point back to the correct parent,
    ///   and every node is listed as child at most once
    /// - All parent indices are valid and list this node as child
    /// - No node is its own ancestor
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        let num_nodes = self.nodes.len();

        if self.root_index >= num_nodes || self.nodes[self.root_index].has_parent() {
            return false;
        }

        let mut listed_as_child = vec![false; num_nodes];

        for (index, node) in self.nodes.iter().enumerate() {
            if node.index() != index {
                return false;
            }

            if node.label().is_empty() || node.label().contains(QUOTE) {
                return false;
            }

            for &child in node.children() {
                if child >= num_nodes || listed_as_child[child] {
                    return false;
                }
                listed_as_child[child] = true;

                if self.nodes[child].parent() != Some(index) {
                    return false;
                }
            }

            if let Some(parent) = node.parent() {
                if parent >= num_nodes || !self.nodes[parent].children().contains(&index) {
                    return false;
                }
            }
        }

        // With consistent links, nodes on a cycle are the ones
        // not reachable from any node without parent
        let reachable: usize = self
            .nodes
            .iter()
            .filter(|node| !node.has_parent())
            .map(|node| self.size_of(node.index()))
            .sum();

        reachable == num_nodes
    }
}

impl std::ops::Index<NodeIndex> for LabeledTree {
    type Output = TreeNode;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index]
    }
}

// ============================================================================
// Helpers (private)
// ============================================================================
impl LabeledTree {
    fn check_index(&self, index: NodeIndex) -> Result<(), TreeError> {
        if index < self.nodes.len() {
            Ok(())
        } else {
            Err(TreeError::InvalidArgument(format!(
                "no node with index {index} in tree of {} nodes",
                self.nodes.len()
            )))
        }
    }

    /// Checks whether `ancestor` lies on the path from `index` up to the top.
    fn is_ancestor_or_self(&self, ancestor: NodeIndex, index: NodeIndex) -> bool {
        let mut current = Some(index);
        while let Some(i) = current {
            if i == ancestor {
                return true;
            }
            current = self.nodes[i].parent();
        }
        false
    }
}

// ============================================================================
// Printing (pub)
// ============================================================================
impl LabeledTree {
    /// Returns a visual representation of the tree.
    ///
    /// Meant for debugging small trees: every line repeats the indentation
    /// of its ancestors, so the output grows quadratically with the depth.
    ///
    /// # Example Output
    /// ```text
    /// Tree with 5 nodes (depth 3):
    /// [0] A
    ///   ├─ [1] A1
    ///   │   ├─ [2] A11
    ///   │   └─ [3] A12
    ///   └─ [4] A2
    /// ```
    pub fn format_tree(&self) -> String {
        let mut out = format!("Tree with {} nodes (depth {}):\n", self.size(), self.depth());

        // (index, prefix of its line, is last child)
        let mut stack = vec![(self.root_index, String::new(), true)];
        while let Some((index, prefix, is_last)) = stack.pop() {
            let node = &self.nodes[index];

            let connector = if prefix.is_empty() {
                ""
            } else if is_last {
                "└─ "
            } else {
                "├─ "
            };
            out.push_str(&format!("{}{}[{}] {}\n", prefix, connector, index, node.label()));

            let child_prefix = if prefix.is_empty() {
                "  ".to_string()
            } else {
                format!("{}{}   ", prefix, if is_last { " " } else { "│" })
            };

            // Push in reverse, so leftmost child is printed first
            let num_children = node.num_children();
            for (i, &child) in node.children().iter().enumerate().rev() {
                stack.push((child, child_prefix.clone(), i + 1 == num_children));
            }
        }
        out
    }

    /// Prints [format_tree](Self::format_tree) to the console.
    pub fn print_tree(&self) {
        print!("{}", self.format_tree());
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl LabeledTree {
    /// Returns an iterator over the tree in pre-order (parents before children,
    /// children left to right).
    ///
    /// # Example
    /// ```
    /// use treemaker::parse_tree_str;
    ///
    /// let tree = parse_tree_str("A(A1(A11 A12) A2)")?;
    /// let labels: Vec<_> = tree.pre_order_iter().map(|n| n.label()).collect();
    /// assert_eq!(labels, ["A", "A1", "A11", "A12", "A2"]);
    /// # Ok::<(), treemaker::parser::ParsingError>(())
    /// ```
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self, self.root_index)
    }

    /// Returns a pre-order iterator over the subtree rooted at `index`.
    pub fn pre_order_iter_from(&self, index: NodeIndex) -> PreOrderIter<'_> {
        PreOrderIter::new(self, index)
    }

    /// Returns an iterator over the tree in post-order (children before parents).
    ///
    /// # Example
    /// ```
    /// use treemaker::parse_tree_str;
    ///
    /// let tree = parse_tree_str("A(A1(A11 A12) A2)")?;
    /// let labels: Vec<_> = tree.post_order_iter().map(|n| n.label()).collect();
    /// assert_eq!(labels, ["A11", "A12", "A1", "A2", "A"]);
    /// # Ok::<(), treemaker::parser::ParsingError>(())
    /// ```
    pub fn post_order_iter(&self) -> PostOrderIter<'_> {
        PostOrderIter::new(self, self.root_index)
    }

    /// Returns a post-order iterator over the subtree rooted at `index`.
    pub fn post_order_iter_from(&self, index: NodeIndex) -> PostOrderIter<'_> {
        PostOrderIter::new(self, index)
    }
}

/// Iterator for post-order traversal (children before parents).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each node is visited after all its descendants have been visited.
pub struct PostOrderIter<'a> {
    tree: &'a LabeledTree,
    stack: Vec<(NodeIndex, bool)>, // (index, children_visited)
}

impl<'a> PostOrderIter<'a> {
    fn new(tree: &'a LabeledTree, start: NodeIndex) -> Self {
        PostOrderIter {
            tree,
            stack: vec![(start, false)],
        }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, children_visited)) = self.stack.pop() {
            let node = &self.tree[index];

            if children_visited || node.is_leaf() {
                return Some(node);
            }

            self.stack.push((index, true));

            // Push children in reverse, so leftmost is processed first
            for &child in node.children().iter().rev() {
                self.stack.push((child, false));
            }
        }
        None
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each node is visited before any of its descendants.
pub struct PreOrderIter<'a> {
    tree: &'a LabeledTree,
    stack: Vec<NodeIndex>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a LabeledTree, start: NodeIndex) -> Self {
        PreOrderIter {
            tree,
            stack: vec![start],
        }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.tree[index];

        // Push children in reverse, so leftmost is processed first
        for &child in node.children().iter().rev() {
            self.stack.push(child);
        }

        Some(node)
    }
}
