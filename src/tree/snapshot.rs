use crate::{
    foundation::error::{ViewError, ViewResult},
    tree::node::ViewTree,
};

/// One node of a laid out tree, flattened.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SnapshotNode {
    /// Depth below the root (root is 0).
    pub depth: usize,
    /// Kind name, as in tree dumps.
    pub kind: String,
    /// Origin x, relative to the parent's content origin.
    pub x: f64,
    /// Origin y, relative to the parent's content origin.
    pub y: f64,
    /// Resolved width.
    pub width: f64,
    /// Resolved height.
    pub height: f64,
}

/// Serializable geometry of every node in document order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutSnapshot {
    /// Nodes in depth-first pre-order.
    pub nodes: Vec<SnapshotNode>,
}

impl LayoutSnapshot {
    /// Record the current geometry of `tree`.
    pub fn capture(tree: &ViewTree) -> Self {
        let nodes = tree
            .iter()
            .map(|(id, depth)| {
                let d = tree.drawable(id);
                SnapshotNode {
                    depth,
                    kind: d.kind.name().to_string(),
                    x: d.origin.x,
                    y: d.origin.y,
                    width: d.size.width,
                    height: d.size.height,
                }
            })
            .collect();
        Self { nodes }
    }

    /// Pretty-printed JSON.
    pub fn to_json_string_pretty(&self) -> ViewResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ViewError::serde(e.to_string()))
    }
}
