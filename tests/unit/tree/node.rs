use super::*;
use crate::layout::alignment::VerticalAlignment;

fn sample() -> (ViewTree, NodeId, NodeId, NodeId) {
    let mut tree = ViewTree::new(DrawableKind::Root);
    let root = tree.root();
    let stack = tree.add_child(
        root,
        DrawableKind::HStack {
            alignment: VerticalAlignment::Center,
            spacing: None,
        },
    );
    let a = tree.add_child(stack, DrawableKind::Spacer);
    let b = tree.add_child(stack, DrawableKind::Spacer);
    (tree, stack, a, b)
}

#[test]
fn add_child_links_both_directions() {
    let (tree, stack, a, b) = sample();
    assert_eq!(tree.parent(tree.root()), None);
    assert_eq!(tree.parent(stack), Some(tree.root()));
    assert_eq!(tree.children(stack), &[a, b]);
    for (id, _) in tree.iter() {
        if let Some(p) = tree.parent(id) {
            assert_eq!(
                tree.children(p).iter().filter(|&&c| c == id).count(),
                1,
                "{id:?} must appear once in its parent's children"
            );
        }
    }
}

#[test]
fn degree_and_branch_queries() {
    let (tree, stack, a, _) = sample();
    assert_eq!(tree.degree(stack), 2);
    assert!(tree.is_branch(stack));
    assert!(tree.has_children(tree.root()));
    assert_eq!(tree.degree(a), 0);
    assert!(!tree.has_children(a));
}

#[test]
fn ancestors_walk_to_root_and_restart() {
    let (tree, stack, a, _) = sample();
    let walk = tree.ancestors(a);
    let first: Vec<_> = walk.clone().collect();
    let second: Vec<_> = walk.collect();
    assert_eq!(first, vec![stack, tree.root()]);
    assert_eq!(first, second);
    assert_eq!(tree.ancestors(tree.root()).count(), 0);
}

#[test]
fn iter_is_document_order_with_depth() {
    let (mut tree, stack, a, b) = sample();
    let tail = tree.add_child(tree.root(), DrawableKind::Spacer);
    let got: Vec<_> = tree.iter().collect();
    assert_eq!(
        got,
        vec![(tree.root(), 0), (stack, 1), (a, 2), (b, 2), (tail, 1)]
    );
}

#[test]
fn invalidate_resets_geometry_and_cache() {
    let (mut tree, stack, _, _) = sample();
    tree.drawable_mut(stack).size = Size::new(3.0, 4.0);
    tree.drawable_mut(stack).origin = Point::new(1.0, 2.0);
    tree.node_mut(stack).cache = LayoutCache::Resolving;
    tree.invalidate_layout();
    assert_eq!(tree.drawable(stack).size, Size::ZERO);
    assert_eq!(tree.drawable(stack).origin, Point::ZERO);
    assert_eq!(tree.node(stack).cache, LayoutCache::Unresolved);
}

#[test]
fn display_indents_by_depth() {
    let (tree, _, _, _) = sample();
    let dump = tree.to_string();
    let lines: Vec<_> = dump.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Root ["));
    assert!(lines[1].starts_with("  HStack {alignment: Center"));
    assert!(lines[2].starts_with("    Spacer ["));
}
