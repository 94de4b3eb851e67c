//! Wanted-size queries: what a node would like to be along one axis for a given proposal.

use crate::{
    foundation::{core::Size, error::ViewResult},
    layout::{Axis, engine::LayoutEngine},
    tree::{
        drawable::{DrawableKind, LayoutCache},
        node::{NodeId, ViewTree},
    },
};

impl LayoutEngine<'_> {
    /// Wanted width for `proposed` width; `height_hint` is the height the caller expects to give.
    pub fn wanted_width(
        &mut self,
        tree: &mut ViewTree,
        node: NodeId,
        proposed: f64,
        height_hint: Option<f64>,
    ) -> ViewResult<f64> {
        self.wanted(tree, node, Axis::Horizontal, proposed, height_hint)
    }

    /// Wanted height for `proposed` height; `width_hint` is the width the caller expects to give.
    pub fn wanted_height(
        &mut self,
        tree: &mut ViewTree,
        node: NodeId,
        proposed: f64,
        width_hint: Option<f64>,
    ) -> ViewResult<f64> {
        self.wanted(tree, node, Axis::Vertical, proposed, width_hint)
    }

    /// Wanted extent of `node` along `axis`.
    ///
    /// Leaves answer from their intrinsic policy and touch nothing. Every other kind is laid out
    /// (through the node's cache) at the proposal, and the resulting extent is its answer; the
    /// cross extent of that layout is `hint`, else the cross extent the node last resolved to,
    /// else unbounded.
    pub(crate) fn wanted(
        &mut self,
        tree: &mut ViewTree,
        node: NodeId,
        axis: Axis,
        proposed: f64,
        hint: Option<f64>,
    ) -> ViewResult<f64> {
        let leaf = match tree.kind(node) {
            DrawableKind::ColorFill(_) | DrawableKind::Shape(_) | DrawableKind::Spacer => {
                Some(proposed.max(0.0))
            }
            DrawableKind::Image { width, height, .. } => Some(match axis {
                Axis::Horizontal => f64::from(*width),
                Axis::Vertical => f64::from(*height),
            }),
            DrawableKind::Divider { axis: runs } => Some(if *runs == axis {
                proposed.max(0.0)
            } else {
                1.0
            }),
            DrawableKind::Text { .. } => Some(self.text_wanted(tree, node, axis, proposed, hint)?),
            DrawableKind::Root
            | DrawableKind::HStack { .. }
            | DrawableKind::VStack { .. }
            | DrawableKind::Layered { .. }
            | DrawableKind::Modified(_)
            | DrawableKind::Tuple => None,
        };
        if let Some(extent) = leaf {
            return Ok(extent);
        }

        let cross = match (hint, tree.node(node).cache) {
            (Some(h), _) => h,
            (None, LayoutCache::Resolved { size, .. }) => axis.cross().of(size),
            (None, _) => f64::INFINITY,
        };
        let size = self.layout_node(tree, node, axis.size(proposed, cross))?;
        Ok(axis.of(size))
    }

    fn text_wanted(
        &mut self,
        tree: &ViewTree,
        node: NodeId,
        axis: Axis,
        proposed: f64,
        hint: Option<f64>,
    ) -> ViewResult<f64> {
        let DrawableKind::Text { content, .. } = tree.kind(node) else {
            return Ok(0.0);
        };
        let font = tree.resolved_font(node);
        let other = hint.unwrap_or(f64::INFINITY);
        let bounds = axis.size(proposed, other);
        let measured = self
            .text
            .measure(content, font, bounds.width, bounds.height)?;
        Ok(axis.of(measured).max(0.0))
    }

    /// Both extents of a leaf at `proposal`, each queried with the other as its hint.
    pub(crate) fn leaf_size(
        &mut self,
        tree: &mut ViewTree,
        node: NodeId,
        proposal: Size,
    ) -> ViewResult<Size> {
        let width = self.wanted(
            tree,
            node,
            Axis::Horizontal,
            proposal.width,
            Some(proposal.height),
        )?;
        let height = self.wanted(
            tree,
            node,
            Axis::Vertical,
            proposal.height,
            Some(proposal.width),
        )?;
        Ok(Size::new(width, height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/measure.rs"]
mod tests;
