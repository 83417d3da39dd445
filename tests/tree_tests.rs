mod common;

use common::init_test_setup;
use treemaker::model::{IdCounter, LabeledTree, TreeError};
use treemaker::parse_tree_str;

/// Builds `A(A1(A11 A12) A2 A3(A31) A4)` node by node.
fn build_example_tree() -> LabeledTree {
    let mut tree = LabeledTree::new("A").unwrap();
    let root = tree.root_index();
    let children: Vec<_> = ["A1", "A2", "A3", "A4"]
        .iter()
        .map(|label| tree.new_node(label).unwrap())
        .collect();
    tree.add_children(root, &children).unwrap();
    tree.add_leaf(children[0], "A11").unwrap();
    tree.add_leaf(children[0], "A12").unwrap();
    tree.add_leaf(children[2], "A31").unwrap();
    tree
}

// ============= Construction Tests =============

#[test]
fn test_building_tree() {
    init_test_setup();
    let mut tree = LabeledTree::new("A").unwrap();
    let root = tree.root_index();
    let a1 = tree.new_node("A1").unwrap();
    let a2 = tree.new_node("A2").unwrap();
    tree.add_child(root, a1).unwrap();
    tree.add_child(root, a2).unwrap();

    // Counts
    assert_eq!(tree.num_nodes(), 3);
    assert_eq!(tree.size(), 3);

    // Root
    let root_node = tree.root();
    assert_eq!(root_node.label(), "A");
    assert_eq!(root_node.parent(), None);
    assert_eq!(root_node.children(), &[a1, a2]);

    // Children point back
    assert_eq!(tree.parent_of(a1), Some(root));
    assert_eq!(tree.parent_of(a2), Some(root));
    assert!(tree[a1].is_leaf());
    assert!(tree.is_valid());
}

#[test]
fn test_add_children_keeps_order() {
    let tree = build_example_tree();
    assert_eq!(tree.to_notation(), "A(A1(A11 A12) A2 A3(A31) A4)");
}

#[test]
fn test_add_children_after_the_fact() {
    let mut tree = build_example_tree();
    let a1 = tree.children_of(tree.root_index())[0];
    let a12 = tree.children_of(a1)[1];
    let a3 = tree.children_of(tree.root_index())[2];

    let grandchildren: Vec<_> = ["A121", "A122", "A123"]
        .iter()
        .map(|label| tree.new_node(label).unwrap())
        .collect();
    tree.add_children(a12, &grandchildren).unwrap();
    let a32 = tree.new_node("A32").unwrap();
    let a33 = tree.new_node("A33").unwrap();
    tree.add_children(a3, &[a32, a33]).unwrap();

    assert_eq!(
        tree.to_notation(),
        "A(A1(A11 A12(A121 A122 A123)) A2 A3(A31 A32 A33) A4)"
    );
    assert!(tree.is_valid());
}

#[test]
fn test_empty_label_becomes_sentinel() {
    let mut tree = LabeledTree::new("").unwrap();
    let child = tree.add_leaf(tree.root_index(), "").unwrap();
    assert_eq!(tree.root().label(), "_");
    assert_eq!(tree[child].label(), "_");
    assert_eq!(tree.to_notation(), "_(_)");
}

#[test]
fn test_label_with_quote_is_rejected() {
    let mut tree = LabeledTree::new("A").unwrap();
    let err = tree.new_node("Baillon's crake").unwrap_err();
    assert!(matches!(err, TreeError::InvalidLabel { .. }));
    assert_eq!(tree.num_nodes(), 1);

    assert!(matches!(
        LabeledTree::new("it's").unwrap_err(),
        TreeError::InvalidLabel { .. }
    ));
}

#[test]
fn test_add_child_with_unknown_index() {
    let mut tree = LabeledTree::new("A").unwrap();
    let err = tree.add_child(tree.root_index(), 42).unwrap_err();
    assert!(matches!(err, TreeError::InvalidArgument(_)));
    assert!(tree.root().is_leaf());

    let err = tree.add_leaf(7, "B").unwrap_err();
    assert!(matches!(err, TreeError::InvalidArgument(_)));
    assert_eq!(tree.num_nodes(), 1);
}

#[test]
fn test_reattaching_is_rejected() {
    let mut tree = LabeledTree::new("A").unwrap();
    let root = tree.root_index();
    let b = tree.add_leaf(root, "B").unwrap();
    let c = tree.add_leaf(root, "C").unwrap();

    let err = tree.add_child(c, b).unwrap_err();
    assert_eq!(err, TreeError::AlreadyAttached { child: b, parent: root });

    // Nothing changed
    assert!(tree[c].is_leaf());
    assert_eq!(tree.parent_of(b), Some(root));
    assert_eq!(tree.to_notation(), "A(B C)");
}

#[test]
fn test_cycles_are_rejected() {
    let mut tree = LabeledTree::new("A").unwrap();
    let root = tree.root_index();
    let b = tree.add_leaf(root, "B").unwrap();

    assert_eq!(
        tree.add_child(b, b).unwrap_err(),
        TreeError::AlreadyAttached { child: b, parent: root }
    );

    let loose = tree.new_node("Loose").unwrap();
    assert_eq!(
        tree.add_child(loose, loose).unwrap_err(),
        TreeError::WouldCreateCycle { child: loose, parent: loose }
    );

    let below_loose = tree.add_leaf(loose, "BelowLoose").unwrap();
    assert_eq!(
        tree.add_child(below_loose, loose).unwrap_err(),
        TreeError::WouldCreateCycle { child: loose, parent: below_loose }
    );
    assert!(tree.is_valid());
}

#[test]
fn test_root_cannot_be_attached() {
    let mut tree = LabeledTree::new("A").unwrap();
    let root = tree.root_index();
    let b = tree.add_leaf(root, "B").unwrap();
    let floating = tree.new_node("X").unwrap();

    for parent in [floating, b] {
        assert_eq!(
            tree.add_child(parent, root).unwrap_err(),
            TreeError::RootAsChild { root, parent }
        );
    }

    // Nothing changed
    assert_eq!(tree.root().parent(), None);
    assert!(tree[floating].is_leaf());
    assert_eq!(tree.notation_of(floating), "X");
    assert_eq!(tree.to_notation(), "A(B)");
    assert!(tree.is_valid());
}

#[test]
fn test_add_children_without_rollback() {
    let mut tree = LabeledTree::new("A").unwrap();
    let root = tree.root_index();
    let b = tree.new_node("B").unwrap();
    let c = tree.new_node("C").unwrap();

    let err = tree.add_children(root, &[b, 99, c]).unwrap_err();
    assert!(matches!(err, TreeError::InvalidArgument(_)));
    assert_eq!(tree.children_of(root), &[b]);
    assert!(!tree[c].has_parent());
}

#[test]
fn test_unattached_nodes_are_not_part_of_tree() {
    let mut tree = LabeledTree::new("A").unwrap();
    tree.add_leaf(tree.root_index(), "B").unwrap();
    tree.new_node("Floating").unwrap();

    assert_eq!(tree.num_nodes(), 3);
    assert_eq!(tree.size(), 2);
    assert_eq!(tree.labels(), ["A", "B"]);
    assert!(tree.is_valid());
}

#[test]
#[should_panic]
fn test_get_node_out_of_bounds() {
    let tree = LabeledTree::new("A").unwrap();
    let _ = &tree[55];
}

#[test]
fn test_get_node_checked() {
    let tree = LabeledTree::new("A").unwrap();
    assert!(tree.get(0).is_some());
    assert!(tree.get(1).is_none());
}

// ============= Id Tests =============

#[test]
fn test_ids_are_unique_and_increasing() {
    let tree = build_example_tree();
    let ids: Vec<_> = (0..tree.num_nodes()).map(|i| tree[i].id().value()).collect();
    assert_eq!(ids, (0..8).collect::<Vec<u64>>());
}

#[test]
fn test_id_counter_is_handed_on() {
    let first = LabeledTree::with_id_counter("A", IdCounter::starting_at(10)).unwrap();
    assert_eq!(first.root().id().value(), 10);

    let mut second = LabeledTree::with_id_counter("B", first.id_counter()).unwrap();
    let child = second.add_leaf(second.root_index(), "C").unwrap();
    assert_eq!(second.root().id().value(), 11);
    assert_eq!(second[child].id().value(), 12);

    let mut ids = second.id_counter();
    ids.reset();
    let third = LabeledTree::with_id_counter("D", ids).unwrap();
    assert_eq!(third.root().id().value(), 0);
}

#[test]
fn test_ids_do_not_affect_notation() {
    let a = LabeledTree::with_id_counter("A", IdCounter::starting_at(3)).unwrap();
    let b = LabeledTree::new("A").unwrap();
    assert_eq!(a.to_notation(), b.to_notation());
}

// ============= Metrics Tests =============

#[test]
fn test_depth_of_leaf() {
    let tree = LabeledTree::new("A").unwrap();
    assert_eq!(tree.depth(), 1);
    assert_eq!(tree.size(), 1);
}

#[test]
fn test_depth_and_size_of_subtrees() {
    let tree = build_example_tree();
    let root = tree.root_index();
    let a1 = tree.children_of(root)[0];
    let a2 = tree.children_of(root)[1];

    assert_eq!(tree.depth(), 3);
    assert_eq!(tree.size(), 8);
    assert_eq!(tree.depth_of(a1), 2);
    assert_eq!(tree.size_of(a1), 3);
    assert_eq!(tree.depth_of(a2), 1);
    assert_eq!(tree.size_of(a2), 1);
}

#[test]
fn test_nodes_in_pre_order() {
    let tree = parse_tree_str("A(A1(A11 A12) A2)").unwrap();
    let labels: Vec<_> = tree.nodes().iter().map(|n| n.label()).collect();
    assert_eq!(labels, ["A", "A1", "A11", "A12", "A2"]);
    assert_eq!(tree.nodes().len(), tree.size());

    let a1 = tree.children_of(tree.root_index())[0];
    let labels: Vec<_> = tree.nodes_of(a1).iter().map(|n| n.label()).collect();
    assert_eq!(labels, ["A1", "A11", "A12"]);
}

#[test]
fn test_post_order() {
    let tree = parse_tree_str("A(A1(A11 A12) A2)").unwrap();
    let labels: Vec<_> = tree.post_order_iter().map(|n| n.label()).collect();
    assert_eq!(labels, ["A11", "A12", "A1", "A2", "A"]);
}

#[test]
fn test_deep_chain_does_not_overflow() {
    let mut tree = LabeledTree::new("N0").unwrap();
    let mut current = tree.root_index();
    for i in 1..100_000 {
        current = tree.add_leaf(current, &format!("N{i}")).unwrap();
    }

    assert_eq!(tree.depth(), 100_000);
    assert_eq!(tree.size(), 100_000);
    assert!(tree.to_notation().ends_with("N99999))"));
}

// ============= Subtree Tests =============

#[test]
fn test_subtree_keeps_labels_and_ids() {
    let tree = build_example_tree();
    let a1 = tree.children_of(tree.root_index())[0];

    let subtree = tree.subtree(a1).unwrap();
    assert_eq!(subtree.to_notation(), "A1(A11 A12)");
    assert_eq!(subtree.root_index(), 0);
    assert_eq!(subtree.root().parent(), None);
    assert_eq!(subtree.root().id(), tree[a1].id());
    assert!(subtree.is_valid());

    // Counter carries over
    assert_eq!(subtree.id_counter(), tree.id_counter());
}

#[test]
fn test_subtree_of_unknown_index() {
    let tree = build_example_tree();
    assert!(matches!(
        tree.subtree(100).unwrap_err(),
        TreeError::InvalidArgument(_)
    ));
}

// ============= Printing Tests =============

#[test]
fn test_format_tree() {
    let tree = parse_tree_str("A(A1(A11 A12) A2)").unwrap();
    let expected = "Tree with 5 nodes (depth 3):\n\
                    [0] A\n  \
                    ├─ [1] A1\n  \
                    │   ├─ [2] A11\n  \
                    │   └─ [3] A12\n  \
                    └─ [4] A2\n";
    assert_eq!(tree.format_tree(), expected);
}

#[test]
fn test_format_deep_chain() {
    let mut tree = LabeledTree::new("N0").unwrap();
    let mut current = tree.root_index();
    for i in 1..3_000 {
        current = tree.add_leaf(current, &format!("N{i}")).unwrap();
    }

    let formatted = tree.format_tree();
    assert_eq!(formatted.lines().count(), 3_001);
    assert!(formatted.ends_with("└─ [2999] N2999\n"));
}

#[test]
fn test_print_tree() {
    let tree = build_example_tree();
    tree.print_tree();
}

#[test]
fn test_display_is_notation() {
    let tree = build_example_tree();
    assert_eq!(format!("{tree}"), tree.to_notation());
}
