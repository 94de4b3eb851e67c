use super::*;
use crate::{
    assets::PreparedImage,
    foundation::{core::Rgba8, error::ViewError},
    view::{color::Color, dsl::*, font::Font},
};

fn names(tree: &ViewTree) -> Vec<(usize, &'static str)> {
    tree.iter()
        .map(|(id, depth)| (depth, tree.kind(id).name()))
        .collect()
}

fn build(view: &View) -> ViewTree {
    TreeBuilder::new(&AssetStore::new()).build(view).unwrap()
}

#[test]
fn stacks_nest_under_the_root() {
    let tree = build(&vstack(vec![
        text("title").into(),
        hstack(vec![circle(), spacer(), rectangle()]),
    ]));
    assert_eq!(
        names(&tree),
        vec![
            (0, "Root"),
            (1, "VStack"),
            (2, "Text"),
            (2, "HStack"),
            (3, "Circle"),
            (3, "Spacer"),
            (3, "Rectangle"),
        ]
    );
}

#[test]
fn groups_flatten_into_stacks_and_drop_absent_members() {
    let tree = build(&hstack(vec![
        color(Color::Red),
        group(vec![Some(spacer()), None, Some(group(vec![Some(circle())]))]),
        color(Color::Blue),
    ]));
    assert_eq!(
        names(&tree),
        vec![
            (0, "Root"),
            (1, "HStack"),
            (2, "Color"),
            (2, "Spacer"),
            (2, "Circle"),
            (2, "Color"),
        ]
    );
}

#[test]
fn groups_elsewhere_become_tuples() {
    let tree = build(&group(vec![Some(spacer()), Some(circle())]).padding_all(4.0));
    assert_eq!(
        names(&tree),
        vec![
            (0, "Root"),
            (1, "Padding"),
            (2, "Tuple"),
            (3, "Spacer"),
            (3, "Circle"),
        ]
    );
}

#[test]
fn dividers_run_across_the_enclosing_stack() {
    let tree = build(&vstack(vec![
        divider(),
        hstack(vec![divider().padding(), zstack(vec![divider()])]),
    ]));
    let axes: Vec<Axis> = tree
        .iter()
        .filter_map(|(id, _)| match tree.kind(id) {
            DrawableKind::Divider { axis } => Some(*axis),
            _ => None,
        })
        .collect();
    assert_eq!(
        axes,
        vec![Axis::Horizontal, Axis::Vertical, Axis::Horizontal]
    );
}

#[test]
fn text_overrides_are_carried() {
    let tree = build(&text("hi").font(Font::system(30.0)).color(Color::Pink).into());
    let leaf = tree.children(tree.root())[0];
    assert_eq!(
        tree.kind(leaf),
        &DrawableKind::Text {
            content: "hi".into(),
            font: Some(Font::system(30.0)),
            color: Some(Color::Pink),
        }
    );
}

#[test]
fn images_take_their_size_from_the_store() {
    let mut assets = AssetStore::new();
    assets.insert("logo.png", PreparedImage::solid(12, 7, Rgba8::opaque(1, 2, 3)));

    let tree = TreeBuilder::new(&assets).build(&image("logo.png")).unwrap();
    let leaf = tree.children(tree.root())[0];
    assert_eq!(
        tree.kind(leaf),
        &DrawableKind::Image {
            asset: "logo.png".into(),
            width: 12,
            height: 7,
        }
    );

    let err = TreeBuilder::new(&assets)
        .build(&image("missing.png"))
        .unwrap_err();
    assert!(matches!(err, ViewError::Validation(_)), "{err}");
}

#[test]
fn invalid_views_are_rejected_before_building() {
    let err = TreeBuilder::new(&AssetStore::new())
        .build(&hstack_aligned(
            crate::layout::alignment::VerticalAlignment::Center,
            Some(f64::NAN),
            vec![],
        ))
        .unwrap_err();
    assert!(matches!(err, ViewError::Validation(_)), "{err}");
}
