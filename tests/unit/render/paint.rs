use super::*;
use crate::{
    foundation::core::EdgeInsets,
    layout::{Axis, alignment::VerticalAlignment, config::LayoutConfig, engine::LayoutEngine},
    text::EstimatingMeasurer,
    view::color::ColorScheme,
};

fn laid_out(tree: &mut ViewTree, width: f64, height: f64) {
    let mut text = EstimatingMeasurer::default();
    let root = tree.root();
    LayoutEngine::new(LayoutConfig::default(), &mut text)
        .layout(tree, root, width, height)
        .unwrap();
}

fn light(c: Color) -> Rgba8 {
    c.resolve(ColorScheme::Light)
}

fn plain_text(content: &str) -> DrawableKind {
    DrawableKind::Text {
        content: content.into(),
        font: None,
        color: None,
    }
}

#[test]
fn padding_offsets_accumulate_down_the_tree() {
    let mut tree = ViewTree::new(DrawableKind::Root);
    let outer = tree.add_child(
        tree.root(),
        DrawableKind::Modified(Modifier::Padding(EdgeInsets::uniform(10.0))),
    );
    let inner = tree.add_child(
        outer,
        DrawableKind::Modified(Modifier::Padding(EdgeInsets::new(5.0, 5.0, 5.0, 5.0))),
    );
    tree.add_child(inner, DrawableKind::ColorFill(Color::Red));
    laid_out(&mut tree, 200.0, 100.0);

    let ops = collect_draw_ops(&tree, &RenderSettings::default());
    assert_eq!(
        ops,
        vec![DrawOp::FillRect {
            rect: Rect::new(15.0, 15.0, 185.0, 85.0),
            color: light(Color::Red),
        }]
    );
}

#[test]
fn stack_children_are_placed_absolutely() {
    let mut tree = ViewTree::new(DrawableKind::Root);
    let stack = tree.add_child(
        tree.root(),
        DrawableKind::HStack {
            alignment: VerticalAlignment::Center,
            spacing: Some(0.0),
        },
    );
    tree.add_child(stack, DrawableKind::ColorFill(Color::Red));
    tree.add_child(stack, DrawableKind::ColorFill(Color::Blue));
    laid_out(&mut tree, 100.0, 40.0);

    let ops = collect_draw_ops(&tree, &RenderSettings::default());
    assert_eq!(
        ops,
        vec![
            DrawOp::FillRect {
                rect: Rect::new(0.0, 0.0, 50.0, 40.0),
                color: light(Color::Red),
            },
            DrawOp::FillRect {
                rect: Rect::new(50.0, 0.0, 100.0, 40.0),
                color: light(Color::Blue),
            },
        ]
    );
}

#[test]
fn text_color_prefers_own_then_foreground_then_primary() {
    let mut tree = ViewTree::new(DrawableKind::Root);
    let stack = tree.add_child(
        tree.root(),
        DrawableKind::VStack {
            alignment: crate::layout::alignment::HorizontalAlignment::Leading,
            spacing: Some(0.0),
        },
    );
    tree.add_child(stack, plain_text("a"));
    let fg = tree.add_child(
        stack,
        DrawableKind::Modified(Modifier::ForegroundColor(Color::Green)),
    );
    tree.add_child(fg, plain_text("b"));
    tree.add_child(
        fg,
        DrawableKind::Text {
            content: "c".into(),
            font: None,
            color: Some(Color::Orange),
        },
    );
    laid_out(&mut tree, 300.0, 300.0);

    let colors: Vec<Rgba8> = collect_draw_ops(&tree, &RenderSettings::default())
        .into_iter()
        .filter_map(|op| match op {
            DrawOp::Text { color, .. } => Some(color),
            _ => None,
        })
        .collect();
    assert_eq!(
        colors,
        vec![light(Color::Primary), light(Color::Green), light(Color::Orange)]
    );
}

#[test]
fn scheme_comes_from_settings_unless_overridden() {
    let mut tree = ViewTree::new(DrawableKind::Root);
    let stack = tree.add_child(
        tree.root(),
        DrawableKind::HStack {
            alignment: VerticalAlignment::Center,
            spacing: Some(0.0),
        },
    );
    tree.add_child(stack, DrawableKind::Shape(ShapeKind::Rectangle));
    let light_env = tree.add_child(
        stack,
        DrawableKind::Modified(Modifier::ColorScheme(ColorScheme::Light)),
    );
    tree.add_child(light_env, DrawableKind::Shape(ShapeKind::Rectangle));
    laid_out(&mut tree, 100.0, 10.0);

    let settings = RenderSettings::default().with_color_scheme(ColorScheme::Dark);
    let colors: Vec<Rgba8> = collect_draw_ops(&tree, &settings)
        .into_iter()
        .filter_map(|op| match op {
            DrawOp::FillRect { color, .. } => Some(color),
            _ => None,
        })
        .collect();
    assert_eq!(
        colors,
        vec![
            Color::Primary.resolve(ColorScheme::Dark),
            Color::Primary.resolve(ColorScheme::Light),
        ]
    );
}

#[test]
fn circles_are_centered_and_dividers_default_to_gray() {
    let mut tree = ViewTree::new(DrawableKind::Root);
    tree.add_child(tree.root(), DrawableKind::Shape(ShapeKind::Circle));
    tree.add_child(
        tree.root(),
        DrawableKind::Divider {
            axis: Axis::Horizontal,
        },
    );
    laid_out(&mut tree, 200.0, 100.0);

    let ops = collect_draw_ops(&tree, &RenderSettings::default());
    assert_eq!(
        ops,
        vec![
            DrawOp::FillEllipse {
                rect: Rect::new(50.0, 0.0, 150.0, 100.0),
                color: light(Color::Primary),
            },
            DrawOp::FillRect {
                rect: Rect::new(0.0, 49.5, 200.0, 50.5),
                color: light(Color::Gray),
            },
        ]
    );
}

#[test]
fn backgrounds_paint_before_their_content() {
    let mut tree = ViewTree::new(DrawableKind::Root);
    let bg = tree.add_child(
        tree.root(),
        DrawableKind::Modified(Modifier::Background(Color::Yellow)),
    );
    tree.add_child(
        bg,
        DrawableKind::Image {
            asset: "a.png".into(),
            width: 20,
            height: 10,
        },
    );
    laid_out(&mut tree, 100.0, 100.0);

    let ops = collect_draw_ops(&tree, &RenderSettings::default());
    let rect = Rect::new(40.0, 45.0, 60.0, 55.0);
    assert_eq!(
        ops,
        vec![
            DrawOp::FillRect {
                rect,
                color: light(Color::Yellow),
            },
            DrawOp::Image {
                rect,
                asset: "a.png".into(),
            },
        ]
    );
}

#[test]
fn empty_nodes_and_their_subtrees_are_skipped() {
    let mut tree = ViewTree::new(DrawableKind::Root);
    let stack = tree.add_child(
        tree.root(),
        DrawableKind::HStack {
            alignment: VerticalAlignment::Center,
            spacing: Some(0.0),
        },
    );
    tree.add_child(
        stack,
        DrawableKind::Image {
            asset: "wide.png".into(),
            width: 120,
            height: 10,
        },
    );
    let squeezed = tree.add_child(stack, DrawableKind::Modified(Modifier::Background(Color::Red)));
    tree.add_child(squeezed, DrawableKind::ColorFill(Color::Blue));
    laid_out(&mut tree, 100.0, 10.0);

    assert_eq!(tree.drawable(squeezed).size.width, 0.0);
    let ops = collect_draw_ops(&tree, &RenderSettings::default());
    assert_eq!(ops.len(), 1);
    assert!(matches!(ops[0], DrawOp::Image { .. }));
}

#[test]
fn debug_views_outline_every_visible_node() {
    let mut tree = ViewTree::new(DrawableKind::Root);
    tree.add_child(tree.root(), DrawableKind::Spacer);
    laid_out(&mut tree, 30.0, 20.0);

    let settings = RenderSettings::default().with_debug_views(true);
    let ops = collect_draw_ops(&tree, &settings);
    let outlines = ops
        .iter()
        .filter(|op| matches!(op, DrawOp::DebugStroke { .. }))
        .count();
    assert_eq!(outlines, 2);
}
