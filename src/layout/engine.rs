use crate::{
    foundation::{
        core::{EdgeInsets, Point, Size},
        error::{ViewError, ViewResult},
    },
    layout::{
        Axis,
        alignment::{AlignKind, Alignment},
        config::LayoutConfig,
    },
    text::TextMeasurer,
    tree::{
        drawable::{DrawableKind, LayoutCache},
        node::{NodeId, ViewTree},
    },
};

/// Sizes and positions the nodes of a [`ViewTree`].
///
/// A pass proposes a size to a node; the node's kind decides how that proposal is divided among
/// its children, recursively, and each node ends with a final `size` and an `origin` relative to
/// its parent's content box. Stacks resolve children in three passes: children with intrinsic
/// extents first, then children that want less than a fair share (repeated until none do), then
/// an even split of what is left.
pub struct LayoutEngine<'a> {
    config: LayoutConfig,
    pub(crate) text: &'a mut dyn TextMeasurer,
}

impl<'a> LayoutEngine<'a> {
    /// Engine that measures text with `text`.
    pub fn new(config: LayoutConfig, text: &'a mut dyn TextMeasurer) -> Self {
        Self { config, text }
    }

    /// Spacing and fit settings in use.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out the subtree at `node` for the given extents.
    ///
    /// All geometry and memos in `tree` are discarded first, so repeated calls with the same
    /// input produce identical results.
    ///
    /// Fails with [`ViewError::Layout`] when `node` does not belong to `tree` or an extent is NaN.
    #[tracing::instrument(skip(self, tree), fields(nodes = tree.len()))]
    pub fn layout(
        &mut self,
        tree: &mut ViewTree,
        node: NodeId,
        given_width: f64,
        given_height: f64,
    ) -> ViewResult<()> {
        if node.index() >= tree.len() {
            return Err(ViewError::layout(format!(
                "node {} is not part of a tree of {} nodes",
                node.0,
                tree.len()
            )));
        }
        if given_width.is_nan() || given_height.is_nan() {
            return Err(ViewError::layout("given extents must not be NaN"));
        }
        tree.invalidate_layout();
        let size = self.layout_node(tree, node, Size::new(given_width, given_height))?;
        tracing::debug!(width = size.width, height = size.height, "layout finished");
        Ok(())
    }

    /// Lay out `node` at `proposal`, write its size, and return it.
    ///
    /// Memoized per node on the exact proposal. A node asked for its layout while its own layout
    /// is still running answers with the clamped proposal instead of recursing.
    pub(crate) fn layout_node(
        &mut self,
        tree: &mut ViewTree,
        node: NodeId,
        proposal: Size,
    ) -> ViewResult<Size> {
        let key = LayoutCache::key(proposal);
        match tree.node(node).cache {
            LayoutCache::Resolved {
                proposal: cached,
                size,
            } if cached == key => return Ok(size),
            LayoutCache::Resolving => {
                tracing::warn!(
                    node = node.0,
                    "re-entrant layout query, answering with the proposal"
                );
                return Ok(Size::new(proposal.width.max(0.0), proposal.height.max(0.0)));
            }
            LayoutCache::Resolved { .. } | LayoutCache::Unresolved => {}
        }

        tree.node_mut(node).cache = LayoutCache::Resolving;
        let size = match *tree.kind(node) {
            DrawableKind::HStack { alignment, spacing } => {
                let align = AlignKind::try_from(alignment)?;
                self.layout_stack(tree, node, Axis::Horizontal, proposal, spacing, align)?
            }
            DrawableKind::VStack { alignment, spacing } => {
                let align = AlignKind::from(alignment);
                self.layout_stack(tree, node, Axis::Vertical, proposal, spacing, align)?
            }
            DrawableKind::Layered { alignment } => {
                self.layout_layered(tree, node, proposal, alignment)?
            }
            _ => self.layout_layered(tree, node, proposal, Alignment::CENTER)?,
        };

        let entry = tree.node_mut(node);
        entry.drawable.size = size;
        entry.cache = LayoutCache::Resolved {
            proposal: key,
            size,
        };
        tracing::trace!(
            node = node.0,
            proposed_w = proposal.width,
            proposed_h = proposal.height,
            width = size.width,
            height = size.height,
            "sized"
        );
        Ok(size)
    }

    fn layout_stack(
        &mut self,
        tree: &mut ViewTree,
        node: NodeId,
        axis: Axis,
        given: Size,
        spacing: Option<f64>,
        align: AlignKind,
    ) -> ViewResult<Size> {
        let spacing = spacing.unwrap_or(self.config.default_spacing);
        let cross_axis = axis.cross();
        let children = tree.children(node).to_vec();
        let given_cross = cross_axis.of(given);
        let total_spacing = spacing * children.len().saturating_sub(1) as f64;

        let mut remaining = axis.of(given) - total_spacing;
        let mut remaining_children = children.len();
        let mut sizes: Vec<Option<Size>> = vec![None; children.len()];

        // Intrinsic children claim their extent before anyone else competes.
        for (i, &child) in children.iter().enumerate() {
            let proposal = match tree.kind(child) {
                DrawableKind::Image { .. } => Size::new(f64::INFINITY, f64::INFINITY),
                DrawableKind::Divider { .. } => given,
                _ => continue,
            };
            let size = self.layout_node(tree, child, proposal)?;
            remaining -= axis.of(size);
            remaining_children -= 1;
            sizes[i] = Some(size);
            tracing::trace!(child = child.0, main = axis.of(size), remaining, "fixed");
        }

        // Best fit: commit every child that wants less than an even share, until none does.
        let fit = self.config.fit;
        let mut committed = true;
        while committed && remaining_children > 0 {
            committed = false;
            for (i, &child) in children.iter().enumerate() {
                if sizes[i].is_some() {
                    continue;
                }
                let share = remaining / remaining_children as f64;
                let wanted_main = self.wanted(tree, child, axis, share, Some(given_cross))?;
                if !fit.fits(wanted_main, share) {
                    continue;
                }
                let wanted_cross =
                    self.wanted(tree, child, cross_axis, given_cross, Some(wanted_main))?;
                let size = self.layout_node(tree, child, axis.size(wanted_main, wanted_cross))?;
                remaining -= axis.of(size);
                remaining_children -= 1;
                sizes[i] = Some(size);
                committed = true;
                tracing::trace!(child = child.0, share, main = axis.of(size), remaining, "fit");
            }
        }

        // Whatever is left is split evenly among the children that wanted more.
        if remaining_children > 0 {
            let share = remaining / remaining_children as f64;
            for (i, &child) in children.iter().enumerate() {
                if sizes[i].is_some() {
                    continue;
                }
                let cross = self.wanted(tree, child, cross_axis, given_cross, Some(share))?;
                let size = self.layout_node(tree, child, axis.size(share, cross))?;
                sizes[i] = Some(size);
                tracing::trace!(child = child.0, share, main = axis.of(size), "forced");
            }
        }

        let sizes: Vec<Size> = sizes.into_iter().flatten().collect();
        let main_total = sizes.iter().map(|s| axis.of(*s)).sum::<f64>() + total_spacing;
        let cross_total = sizes
            .iter()
            .map(|s| cross_axis.of(*s))
            .fold(0.0, f64::max);

        let mut cursor = 0.0;
        for (&child, size) in children.iter().zip(&sizes) {
            let cross_offset = align.offset(cross_total, cross_axis.of(*size));
            tree.drawable_mut(child).origin = axis.point(cursor, cross_offset);
            cursor += axis.of(*size) + spacing;
        }

        Ok(axis.size(main_total, cross_total))
    }

    /// Every child gets the whole (padding-reduced) proposal; the node wraps the largest.
    fn layout_layered(
        &mut self,
        tree: &mut ViewTree,
        node: NodeId,
        given: Size,
        alignment: Alignment,
    ) -> ViewResult<Size> {
        let kind = tree.kind(node);
        match kind {
            DrawableKind::ColorFill(_)
            | DrawableKind::Text { .. }
            | DrawableKind::Image { .. }
            | DrawableKind::Shape(_)
            | DrawableKind::Divider { .. }
            | DrawableKind::Spacer => return self.leaf_size(tree, node, given),
            DrawableKind::Root
            | DrawableKind::HStack { .. }
            | DrawableKind::VStack { .. }
            | DrawableKind::Layered { .. }
            | DrawableKind::Modified(_)
            | DrawableKind::Tuple => {}
        }
        let is_root = matches!(kind, DrawableKind::Root);
        let padding = kind.padding().unwrap_or(EdgeInsets::ZERO);
        let h_align = AlignKind::from(alignment.horizontal);
        let v_align = AlignKind::try_from(alignment.vertical)?;

        let offered = Size::new(
            given.width - padding.horizontal(),
            given.height - padding.vertical(),
        );
        let children = tree.children(node).to_vec();
        let mut sizes = Vec::with_capacity(children.len());
        let mut content = Size::ZERO;
        for &child in &children {
            let size = self.layout_node(tree, child, offered)?;
            content.width = content.width.max(size.width);
            content.height = content.height.max(size.height);
            sizes.push(size);
        }
        if is_root {
            content = given;
        }

        for (&child, size) in children.iter().zip(&sizes) {
            tree.drawable_mut(child).origin = Point::new(
                h_align.offset(content.width, size.width),
                v_align.offset(content.height, size.height),
            );
        }

        Ok(Size::new(
            content.width + padding.horizontal(),
            content.height + padding.vertical(),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
