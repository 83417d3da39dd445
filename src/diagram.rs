//! Diagram export of labeled trees.
//!
//! A [DiagramGraph] is everything a diagram renderer needs from a tree:
//! the nodes with their ids and labels and the parent-child edges, both
//! in pre-order. [DiagramGraph::to_flowchart] turns it into a Mermaid
//! flowchart description; rendering or encoding it for an image service
//! is left to the caller.

use crate::model::{LabeledTree, NodeId};
use std::fmt;

/// Prefix of node identifiers in flowchart descriptions
const NODE_ID_PREFIX: &str = "n";

/// Node of a diagram: the id of a tree node and its label.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct DiagramNode {
    pub id: NodeId,
    pub label: String,
}

/// Edge of a diagram, from a parent to one of its children.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct DiagramEdge {
    pub parent: NodeId,
    pub child: NodeId,
}

/// Direction a flowchart is laid out in.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub enum FlowDirection {
    /// Root at the top
    #[default]
    TopDown,
    /// Root at the bottom
    BottomUp,
    /// Root on the left
    LeftRight,
    /// Root on the right
    RightLeft,
}

impl fmt::Display for FlowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            FlowDirection::TopDown => "TD",
            FlowDirection::BottomUp => "BT",
            FlowDirection::LeftRight => "LR",
            FlowDirection::RightLeft => "RL",
        };
        f.write_str(code)
    }
}

/// Nodes and edges of a tree, in pre-order.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct DiagramGraph {
    nodes: Vec<DiagramNode>,
    edges: Vec<DiagramEdge>,
}

impl DiagramGraph {
    /// Collects the nodes and edges of a tree.
    ///
    /// Nodes are listed in pre-order, and so are edges
    /// (ordered by their child).
    ///
    /// # Example
    /// ```
    /// use treemaker::diagram::DiagramGraph;
    /// use treemaker::parse_tree_str;
    ///
    /// let tree = parse_tree_str("A(A1 A2)")?;
    /// let graph = DiagramGraph::from_tree(&tree);
    /// assert_eq!(graph.nodes().len(), 3);
    /// assert_eq!(graph.edges().len(), 2);
    /// # Ok::<(), treemaker::parser::ParsingError>(())
    /// ```
    pub fn from_tree(tree: &LabeledTree) -> Self {
        let mut graph = DiagramGraph::default();
        for node in tree.pre_order_iter() {
            graph.nodes.push(DiagramNode {
                id: node.id(),
                label: node.label().to_string(),
            });
            if let Some(parent) = node.parent() {
                graph.edges.push(DiagramEdge {
                    parent: tree[parent].id(),
                    child: node.id(),
                });
            }
        }
        graph
    }

    /// Returns the nodes in pre-order.
    pub fn nodes(&self) -> &[DiagramNode] {
        &self.nodes
    }

    /// Returns the edges in pre-order of their child.
    pub fn edges(&self) -> &[DiagramEdge] {
        &self.edges
    }

    /// Returns a Mermaid flowchart description of this graph.
    ///
    /// Each node is declared as `n<id>["label"]`, followed by one
    /// `n<parent> --> n<child>` line per edge.
    ///
    /// # Example
    /// ```
    /// use treemaker::diagram::{DiagramGraph, FlowDirection};
    /// use treemaker::parse_tree_str;
    ///
    /// let tree = parse_tree_str("A(B)")?;
    /// let flowchart = DiagramGraph::from_tree(&tree).to_flowchart(FlowDirection::LeftRight);
    /// assert_eq!(flowchart, "flowchart LR\n    n1[\"A\"]\n    n2[\"B\"]\n    n1 --> n2\n");
    /// # Ok::<(), treemaker::parser::ParsingError>(())
    /// ```
    pub fn to_flowchart(&self, direction: FlowDirection) -> String {
        let mut out = format!("flowchart {direction}\n");
        for node in &self.nodes {
            out.push_str(&format!(
                "    {NODE_ID_PREFIX}{}[\"{}\"]\n",
                node.id,
                escape_flowchart_label(&node.label)
            ));
        }
        for edge in &self.edges {
            out.push_str(&format!(
                "    {NODE_ID_PREFIX}{} --> {NODE_ID_PREFIX}{}\n",
                edge.parent, edge.child
            ));
        }
        out
    }
}

/// Escapes the characters that would end a quoted flowchart label or
/// its line. Line breaks become `<br>`.
fn escape_flowchart_label(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.replace("\r\n", "\n").chars() {
        match c {
            '"' => escaped.push_str("#quot;"),
            '\n' | '\r' => escaped.push_str("<br>"),
            c => escaped.push(c),
        }
    }
    escaped
}
