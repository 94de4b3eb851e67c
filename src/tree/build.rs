//! Turns a [`View`] description into a [`ViewTree`] under a root node.

use crate::{
    assets::AssetStore,
    foundation::error::ViewResult,
    layout::Axis,
    tree::{
        drawable::{DrawableKind, ShapeKind},
        node::{NodeId, ViewTree},
    },
    view::model::View,
};

/// Emits drawable nodes for a view description.
///
/// Image nodes take their pixel size from the asset store, so every image key must be registered
/// before building.
#[derive(Clone, Copy, Debug)]
pub struct TreeBuilder<'a> {
    assets: &'a AssetStore,
}

/// Where a view is being emitted.
#[derive(Clone, Copy, Debug)]
struct Scope {
    parent: NodeId,
    /// Direction dividers run in: vertical inside a horizontal stack.
    divider_axis: Axis,
}

impl<'a> TreeBuilder<'a> {
    /// Builder resolving image sizes against `assets`.
    pub fn new(assets: &'a AssetStore) -> Self {
        Self { assets }
    }

    /// Validate `view` and build its tree under a [`DrawableKind::Root`].
    #[tracing::instrument(skip_all)]
    pub fn build(&self, view: &View) -> ViewResult<ViewTree> {
        view.validate()?;
        let mut tree = ViewTree::new(DrawableKind::Root);
        let scope = Scope {
            parent: tree.root(),
            divider_axis: Axis::Horizontal,
        };
        self.emit(&mut tree, scope, view)?;
        tracing::debug!(nodes = tree.len(), "built view tree");
        Ok(tree)
    }

    fn emit(&self, tree: &mut ViewTree, scope: Scope, view: &View) -> ViewResult<()> {
        let kind = match view {
            View::Text(t) => DrawableKind::Text {
                content: t.content.clone(),
                font: t.font_override(),
                color: t.color_override(),
            },
            View::Image { asset } => {
                let image = self.assets.get(asset)?;
                DrawableKind::Image {
                    asset: asset.clone(),
                    width: image.width,
                    height: image.height,
                }
            }
            View::Color(c) => DrawableKind::ColorFill(*c),
            View::Circle => DrawableKind::Shape(ShapeKind::Circle),
            View::Rectangle => DrawableKind::Shape(ShapeKind::Rectangle),
            View::Divider => DrawableKind::Divider {
                axis: scope.divider_axis,
            },
            View::Spacer => DrawableKind::Spacer,
            View::HStack(s) => {
                let node = tree.add_child(
                    scope.parent,
                    DrawableKind::HStack {
                        alignment: s.alignment,
                        spacing: s.spacing,
                    },
                );
                return self.emit_all(tree, Self::nested(node, Axis::Vertical), &s.children);
            }
            View::VStack(s) => {
                let node = tree.add_child(
                    scope.parent,
                    DrawableKind::VStack {
                        alignment: s.alignment,
                        spacing: s.spacing,
                    },
                );
                return self.emit_all(tree, Self::nested(node, Axis::Horizontal), &s.children);
            }
            View::ZStack(s) => {
                let node = tree.add_child(
                    scope.parent,
                    DrawableKind::Layered {
                        alignment: s.alignment,
                    },
                );
                return self.emit_all(tree, Self::nested(node, Axis::Horizontal), &s.children);
            }
            View::Group(members) => {
                let parent = if Self::absorbs_groups(tree.kind(scope.parent)) {
                    scope.parent
                } else {
                    tree.add_child(scope.parent, DrawableKind::Tuple)
                };
                let inner = Scope { parent, ..scope };
                for member in members.iter().flatten() {
                    self.emit(tree, inner, member)?;
                }
                return Ok(());
            }
            View::Modified { content, modifier } => {
                let node = tree.add_child(scope.parent, DrawableKind::Modified(*modifier));
                return self.emit(tree, Scope { parent: node, ..scope }, content);
            }
        };
        tree.add_child(scope.parent, kind);
        Ok(())
    }

    fn emit_all(&self, tree: &mut ViewTree, scope: Scope, views: &[View]) -> ViewResult<()> {
        views.iter().try_for_each(|v| self.emit(tree, scope, v))
    }

    fn nested(parent: NodeId, divider_axis: Axis) -> Scope {
        Scope {
            parent,
            divider_axis,
        }
    }

    /// Group members become direct children of these parents.
    fn absorbs_groups(kind: &DrawableKind) -> bool {
        matches!(
            kind,
            DrawableKind::HStack { .. }
                | DrawableKind::VStack { .. }
                | DrawableKind::Layered { .. }
                | DrawableKind::Tuple
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tree/build.rs"]
mod tests;
