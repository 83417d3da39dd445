//! Tree notation writing.

use crate::model::label::push_label;
use crate::model::tree::{LabeledTree, NodeIndex};

/// Extra characters per node in the notation length estimate
/// (brackets, separator, quotes)
const CHARS_PER_NODE: usize = 3;

/// Returns the tree notation of the subtree rooted at `index`.
///
/// A leaf is written as its label; a node with children as
/// `label(child1 child2 ... childN)`, children separated by single spaces.
/// Labels that are not plain are wrapped in single quotes.
///
/// # Panics
/// Panics if `index` is out of bounds.
///
/// # Example
/// ```
/// use treemaker::model::LabeledTree;
/// use treemaker::notation::to_notation;
///
/// let mut tree = LabeledTree::new("A")?;
/// let root = tree.root_index();
/// let a1 = tree.add_leaf(root, "A1")?;
/// tree.add_leaf(a1, "Little kiwi")?;
/// tree.add_leaf(root, "A2")?;
///
/// assert_eq!(to_notation(&tree, root), "A(A1('Little kiwi') A2)");
/// assert_eq!(to_notation(&tree, a1), "A1('Little kiwi')");
/// # Ok::<(), treemaker::model::TreeError>(())
/// ```
pub fn to_notation(tree: &LabeledTree, index: NodeIndex) -> String {
    /// Pending output steps; the stack replaces recursion
    enum Step {
        Node(NodeIndex),
        Separator,
        Close,
    }

    let mut notation = String::with_capacity(estimate_notation_len(tree, index));
    let mut stack = vec![Step::Node(index)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Node(i) => {
                let node = &tree[i];
                push_label(&mut notation, node.label());
                if node.is_leaf() {
                    continue;
                }

                notation.push('(');
                stack.push(Step::Close);
                // Push in reverse, so leftmost child is written first
                for (k, &child) in node.children().iter().enumerate().rev() {
                    stack.push(Step::Node(child));
                    if k > 0 {
                        stack.push(Step::Separator);
                    }
                }
            }
            Step::Separator => notation.push(' '),
            Step::Close => notation.push(')'),
        }
    }

    notation
}

/// Estimates the length of the notation of the subtree rooted at `index`.
fn estimate_notation_len(tree: &LabeledTree, index: NodeIndex) -> usize {
    tree.pre_order_iter_from(index)
        .map(|node| node.label().len() + CHARS_PER_NODE)
        .sum()
}
