use std::fmt;

use crate::{
    foundation::core::{Point, Size},
    tree::drawable::{Drawable, DrawableKind, LayoutCache},
};

/// Index of a node inside its [`ViewTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) drawable: Drawable,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) cache: LayoutCache,
}

/// Append-only arena of drawable nodes.
///
/// Every node except the root has exactly one parent, recorded as an index; the child lists are
/// the only ownership edges. Trees are built once per render and discarded.
#[derive(Clone, Debug)]
pub struct ViewTree {
    nodes: Vec<Node>,
}

impl ViewTree {
    /// Tree holding a single root node of `kind`.
    pub fn new(kind: DrawableKind) -> Self {
        Self {
            nodes: vec![Node {
                drawable: Drawable::new(kind),
                parent: None,
                children: Vec::new(),
                cache: LayoutCache::Unresolved,
            }],
        }
    }

    /// The node the tree was created with.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a new child of `kind` as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, kind: DrawableKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            drawable: Drawable::new(kind),
            parent: Some(parent),
            children: Vec::new(),
            cache: LayoutCache::Unresolved,
        });
        self.node_mut(parent).children.push(id);
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Payload of `id`.
    pub fn drawable(&self, id: NodeId) -> &Drawable {
        &self.node(id).drawable
    }

    /// Mutable payload of `id`.
    pub fn drawable_mut(&mut self, id: NodeId) -> &mut Drawable {
        &mut self.node_mut(id).drawable
    }

    /// Shorthand for `drawable(id).kind`.
    pub fn kind(&self, id: NodeId) -> &DrawableKind {
        &self.node(id).drawable.kind
    }

    /// Parent of `id`; `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Children in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Number of children.
    pub fn degree(&self, id: NodeId) -> usize {
        self.node(id).children.len()
    }

    /// Whether `id` has at least one child.
    pub fn has_children(&self, id: NodeId) -> bool {
        !self.node(id).children.is_empty()
    }

    /// Same as [`Self::has_children`].
    pub fn is_branch(&self, id: NodeId) -> bool {
        self.has_children(id)
    }

    /// Lazy walk from the immediate parent up to the root.
    ///
    /// The iterator is `Clone`, so a walk can be restarted from any point.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// Depth-first pre-order walk yielding `(node, depth)`, root at depth 0.
    pub fn iter(&self) -> DocumentOrder<'_> {
        DocumentOrder {
            tree: self,
            stack: vec![(self.root(), 0)],
        }
    }

    /// Forget all geometry and layout memos.
    pub fn invalidate_layout(&mut self) {
        for node in &mut self.nodes {
            node.cache = LayoutCache::Unresolved;
            node.drawable.origin = Point::ZERO;
            node.drawable.size = Size::ZERO;
        }
    }
}

/// Iterator returned by [`ViewTree::ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    tree: &'a ViewTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

/// Iterator returned by [`ViewTree::iter`].
#[derive(Clone, Debug)]
pub struct DocumentOrder<'a> {
    tree: &'a ViewTree,
    stack: Vec<(NodeId, usize)>,
}

impl Iterator for DocumentOrder<'_> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<(NodeId, usize)> {
        let (id, depth) = self.stack.pop()?;
        self.stack.extend(
            self.tree
                .children(id)
                .iter()
                .rev()
                .map(|&child| (child, depth + 1)),
        );
        Some((id, depth))
    }
}

/// Line-based dump, one node per line, indented by depth.
impl fmt::Display for ViewTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, depth) in self.iter() {
            let d = self.drawable(id);
            writeln!(
                f,
                "{:indent$}{} [({}, {}), ({} x {})]",
                "",
                d.kind,
                d.origin.x,
                d.origin.y,
                d.size.width,
                d.size.height,
                indent = depth * 2
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tree/node.rs"]
mod tests;
