//! The node tree: drawable payloads in an arena, built from a view description.

pub(crate) mod build;
pub(crate) mod drawable;
pub(crate) mod environment;
pub(crate) mod node;
pub(crate) mod snapshot;

pub use build::TreeBuilder;
pub use drawable::{Drawable, DrawableKind, ShapeKind};
pub use node::{Ancestors, DocumentOrder, NodeId, ViewTree};
pub use snapshot::{LayoutSnapshot, SnapshotNode};
