use std::fmt;

use crate::{
    foundation::core::{EdgeInsets, Point, Size},
    layout::{
        Axis,
        alignment::{Alignment, HorizontalAlignment, VerticalAlignment},
    },
    view::{color::Color, font::Font, model::Modifier},
};

/// Filled shape drawn into a node's rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Largest circle centered in the rectangle.
    Circle,
    /// The whole rectangle.
    Rectangle,
}

/// Payload kind of a tree node.
///
/// Layout and paint dispatch on this with exhaustive matches.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawableKind {
    /// Top of every built tree; sized to the canvas.
    Root,
    /// Children laid out left to right.
    HStack {
        /// Vertical placement of children.
        alignment: VerticalAlignment,
        /// Gap between children; `None` uses the layout default.
        spacing: Option<f64>,
    },
    /// Children laid out top to bottom.
    VStack {
        /// Horizontal placement of children.
        alignment: HorizontalAlignment,
        /// Gap between children; `None` uses the layout default.
        spacing: Option<f64>,
    },
    /// Children overlaid in the same rectangle.
    Layered {
        /// Placement of children inside the rectangle.
        alignment: Alignment,
    },
    /// Solid color filling whatever it is offered.
    ColorFill(Color),
    /// Text with its own optional font and color.
    Text {
        /// The string.
        content: String,
        /// Font override; the font environment applies when `None`.
        font: Option<Font>,
        /// Color override; the foreground environment applies when `None`.
        color: Option<Color>,
    },
    /// Raster image with fixed pixel dimensions.
    Image {
        /// Asset key.
        asset: String,
        /// Pixel width.
        width: u32,
        /// Pixel height.
        height: u32,
    },
    /// Filled shape.
    Shape(ShapeKind),
    /// One-unit line; `axis` is the direction the line runs.
    Divider {
        /// Direction of the line.
        axis: Axis,
    },
    /// Flexible empty space.
    Spacer,
    /// Wraps exactly one child.
    Modified(Modifier),
    /// Group of siblings under a non-stack parent.
    Tuple,
}

impl DrawableKind {
    /// Short kind name used in dumps and snapshots.
    pub fn name(&self) -> &'static str {
        match self {
            DrawableKind::Root => "Root",
            DrawableKind::HStack { .. } => "HStack",
            DrawableKind::VStack { .. } => "VStack",
            DrawableKind::Layered { .. } => "Layered",
            DrawableKind::ColorFill(_) => "Color",
            DrawableKind::Text { .. } => "Text",
            DrawableKind::Image { .. } => "Image",
            DrawableKind::Shape(ShapeKind::Circle) => "Circle",
            DrawableKind::Shape(ShapeKind::Rectangle) => "Rectangle",
            DrawableKind::Divider { .. } => "Divider",
            DrawableKind::Spacer => "Spacer",
            DrawableKind::Modified(m) => match m {
                Modifier::Padding(_) => "Padding",
                Modifier::Background(_) => "Background",
                Modifier::ForegroundColor(_) => "ForegroundColor",
                Modifier::Font(_) => "Font",
                Modifier::ColorScheme(_) => "ColorScheme",
            },
            DrawableKind::Tuple => "Tuple",
        }
    }

    /// Padding insets when this is a padding modifier.
    pub fn padding(&self) -> Option<EdgeInsets> {
        match self {
            DrawableKind::Modified(Modifier::Padding(insets)) => Some(*insets),
            _ => None,
        }
    }
}

impl fmt::Display for DrawableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        match self {
            DrawableKind::HStack { alignment, spacing } => {
                write!(f, " {{alignment: {alignment:?}, spacing: {spacing:?}}}")
            }
            DrawableKind::VStack { alignment, spacing } => {
                write!(f, " {{alignment: {alignment:?}, spacing: {spacing:?}}}")
            }
            DrawableKind::Layered { alignment } => write!(
                f,
                " {{alignment: {:?}/{:?}}}",
                alignment.horizontal, alignment.vertical
            ),
            DrawableKind::ColorFill(c) => write!(f, " {{{c:?}}}"),
            DrawableKind::Text { content, font, .. } => {
                write!(f, " {{text: {content:?}")?;
                if let Some(font) = font {
                    write!(f, ", font: {}px/{}", font.size_px, font.weight)?;
                }
                f.write_str("}")
            }
            DrawableKind::Image {
                asset,
                width,
                height,
            } => write!(f, " {{{asset} {width}x{height}}}"),
            DrawableKind::Divider { axis } => write!(f, " {{{axis:?}}}"),
            DrawableKind::Modified(m) => match m {
                Modifier::Padding(i) => write!(
                    f,
                    " {{top: {}, leading: {}, bottom: {}, trailing: {}}}",
                    i.top, i.leading, i.bottom, i.trailing
                ),
                Modifier::Background(c) | Modifier::ForegroundColor(c) => write!(f, " {{{c:?}}}"),
                Modifier::Font(font) => write!(f, " {{{}px/{}}}", font.size_px, font.weight),
                Modifier::ColorScheme(s) => write!(f, " {{{s:?}}}"),
            },
            DrawableKind::Root
            | DrawableKind::Shape(_)
            | DrawableKind::Spacer
            | DrawableKind::Tuple => Ok(()),
        }
    }
}

/// Node payload: kind plus the geometry written by layout.
///
/// `origin` is relative to the parent's content origin (the parent's origin shifted by the
/// parent's own padding, if any).
#[derive(Clone, Debug, PartialEq)]
pub struct Drawable {
    /// What this node is.
    pub kind: DrawableKind,
    /// Position relative to the parent's content origin.
    pub origin: Point,
    /// Resolved size; zero until layout runs.
    pub size: Size,
}

impl Drawable {
    /// Payload with zero geometry.
    pub fn new(kind: DrawableKind) -> Self {
        Self {
            kind,
            origin: Point::ZERO,
            size: Size::ZERO,
        }
    }
}

/// Per-node memo of the layout pass.
///
/// Container measurement runs the container's layout; the cache keeps that from happening twice
/// for the same proposal and breaks re-entrant cycles.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) enum LayoutCache {
    #[default]
    Unresolved,
    /// Layout of this node is on the stack.
    Resolving,
    /// Laid out for `proposal` (bit patterns of width and height).
    Resolved { proposal: (u64, u64), size: Size },
}

impl LayoutCache {
    pub(crate) fn key(proposal: Size) -> (u64, u64) {
        (proposal.width.to_bits(), proposal.height.to_bits())
    }
}
