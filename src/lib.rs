//! viewkit lays out declarative view trees and paints them on the CPU.
//!
//! The pipeline has three steps:
//!
//! - Describe a [`View`] in code (see [`dsl`]) or load it from JSON
//! - Build a [`ViewTree`] of drawable nodes and lay it out with a [`LayoutEngine`]
//! - Collect [`DrawOp`]s from the laid out tree and rasterize them into a [`FrameRGBA`]
//!
//! [`HostingContext`] runs all three for a fixed canvas.
//!
//! Stacks negotiate sizes with their children: intrinsic children (images, dividers) are sized
//! first, then children that want less than an even share of the remaining space, then the rest
//! split what is left evenly.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod assets;
mod foundation;
mod host;
mod layout;
mod render;
mod text;
mod tree;
mod view;

pub use crate::assets::{AssetStore, PreparedImage};
pub use crate::foundation::core::{Canvas, EdgeInsets, Point, Rect, Rgba8, Size, Vec2};
pub use crate::foundation::error::{ViewError, ViewResult};
pub use crate::host::HostingContext;
pub use crate::layout::Axis;
pub use crate::layout::alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use crate::layout::config::{FitComparison, LayoutConfig};
pub use crate::layout::engine::LayoutEngine;
pub use crate::render::{
    CpuBackend, DrawOp, FrameRGBA, RenderBackend, RenderSettings, collect_draw_ops,
};
pub use crate::text::{EstimatingMeasurer, ParleyTextEngine, TextEngine, TextMeasurer};
pub use crate::tree::{
    Ancestors, DocumentOrder, Drawable, DrawableKind, LayoutSnapshot, NodeId, ShapeKind,
    SnapshotNode, TreeBuilder, ViewTree,
};
pub use crate::view::color::{Color, ColorScheme};
pub use crate::view::dsl;
pub use crate::view::font::{Font, TextStyle};
pub use crate::view::model::{
    Edges, HStackView, Modifier, TextModifier, TextView, VStackView, View, ZStackView,
};
