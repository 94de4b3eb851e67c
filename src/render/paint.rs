//! Display list generation from a laid out [`ViewTree`].

use crate::{
    foundation::core::{Point, Rect, Rgba8, Size},
    render::RenderSettings,
    tree::{
        drawable::{DrawableKind, ShapeKind},
        node::{NodeId, ViewTree},
    },
    view::{
        color::Color,
        font::Font,
        model::Modifier,
    },
};

/// One drawing command in absolute canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill a rectangle.
    FillRect {
        /// Target rectangle.
        rect: Rect,
        /// Straight-alpha fill color.
        color: Rgba8,
    },
    /// Fill the ellipse inscribed in `rect`.
    FillEllipse {
        /// Bounding rectangle of the ellipse.
        rect: Rect,
        /// Straight-alpha fill color.
        color: Rgba8,
    },
    /// Draw an image at its pixel size with its top-left corner at `rect.origin()`.
    Image {
        /// Node rectangle.
        rect: Rect,
        /// Asset key.
        asset: String,
    },
    /// Set text inside `rect`, wrapping at its width.
    Text {
        /// Node rectangle.
        rect: Rect,
        /// The string.
        content: String,
        /// Resolved font.
        font: Font,
        /// Straight-alpha text color.
        color: Rgba8,
    },
    /// Outline a rectangle one unit wide.
    DebugStroke {
        /// Outlined rectangle.
        rect: Rect,
        /// Straight-alpha line color.
        color: Rgba8,
    },
}

/// Walk the tree in document order and emit its drawing commands.
///
/// Absolute positions accumulate every ancestor's origin plus every ancestor's padding. A node
/// with a non-positive width or height is skipped together with its subtree.
#[tracing::instrument(skip_all, fields(nodes = tree.len()))]
pub fn collect_draw_ops(tree: &ViewTree, settings: &RenderSettings) -> Vec<DrawOp> {
    let mut ops = Vec::new();
    visit(tree, tree.root(), Point::ZERO, settings, &mut ops);
    tracing::debug!(ops = ops.len(), "collected draw ops");
    ops
}

fn visit(
    tree: &ViewTree,
    id: NodeId,
    content_origin: Point,
    settings: &RenderSettings,
    ops: &mut Vec<DrawOp>,
) {
    let drawable = tree.drawable(id);
    let size = drawable.size;
    if size.width <= 0.0 || size.height <= 0.0 {
        return;
    }
    let origin = content_origin + drawable.origin.to_vec2();
    let rect = Rect::from_origin_size(origin, size);
    let scheme = tree.color_scheme_or(id, settings.color_scheme);
    let foreground = |fallback: Color| tree.foreground_color(id).unwrap_or(fallback).resolve(scheme);

    match &drawable.kind {
        DrawableKind::ColorFill(c) => ops.push(DrawOp::FillRect {
            rect,
            color: c.resolve(scheme),
        }),
        DrawableKind::Modified(Modifier::Background(c)) => ops.push(DrawOp::FillRect {
            rect,
            color: c.resolve(scheme),
        }),
        DrawableKind::Text { content, color, .. } => ops.push(DrawOp::Text {
            rect,
            content: content.clone(),
            font: tree.resolved_font(id),
            color: match color {
                Some(c) => c.resolve(scheme),
                None => foreground(Color::Primary),
            },
        }),
        DrawableKind::Image { asset, .. } => ops.push(DrawOp::Image {
            rect,
            asset: asset.clone(),
        }),
        DrawableKind::Shape(ShapeKind::Circle) => ops.push(DrawOp::FillEllipse {
            rect: centered_square(rect),
            color: foreground(Color::Primary),
        }),
        DrawableKind::Shape(ShapeKind::Rectangle) => ops.push(DrawOp::FillRect {
            rect,
            color: foreground(Color::Primary),
        }),
        DrawableKind::Divider { .. } => ops.push(DrawOp::FillRect {
            rect,
            color: foreground(Color::Gray),
        }),
        DrawableKind::Root
        | DrawableKind::HStack { .. }
        | DrawableKind::VStack { .. }
        | DrawableKind::Layered { .. }
        | DrawableKind::Spacer
        | DrawableKind::Modified(_)
        | DrawableKind::Tuple => {}
    }

    if settings.debug_views {
        ops.push(DrawOp::DebugStroke {
            rect,
            color: Color::Purple.resolve(scheme),
        });
    }

    let child_origin = match drawable.kind.padding() {
        Some(padding) => origin + padding.content_offset(),
        None => origin,
    };
    for &child in tree.children(id) {
        visit(tree, child, child_origin, settings, ops);
    }
}

/// Largest square centered in `rect`.
fn centered_square(rect: Rect) -> Rect {
    let side = rect.width().min(rect.height());
    Rect::from_center_size(rect.center(), Size::new(side, side))
}

#[cfg(test)]
#[path = "../../tests/unit/render/paint.rs"]
mod tests;
