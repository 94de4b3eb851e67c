//! Builder functions for assembling a [`View`] in code.
//!
//! ```
//! use viewkit::dsl::*;
//! use viewkit::{Color, Font, VerticalAlignment};
//!
//! let view = hstack_aligned(
//!     VerticalAlignment::Bottom,
//!     Some(10.0),
//!     vec![
//!         text("Hello").font(Font::body().bold()).into(),
//!         spacer(),
//!         color(Color::Red).padding(),
//!     ],
//! );
//! assert!(view.validate().is_ok());
//! ```

use crate::{
    foundation::core::EdgeInsets,
    layout::alignment::{Alignment, HorizontalAlignment, VerticalAlignment},
    view::color::{Color, ColorScheme},
    view::font::Font,
    view::model::{
        Edges, HStackView, Modifier, TextModifier, TextView, VStackView, View, ZStackView,
    },
};

/// Text with no modifiers.
pub fn text(content: impl Into<String>) -> TextView {
    TextView {
        content: content.into(),
        modifiers: Vec::new(),
    }
}

/// Image referenced by asset key.
pub fn image(asset: impl Into<String>) -> View {
    View::Image {
        asset: asset.into(),
    }
}

/// Fill with `color`.
pub fn color(color: Color) -> View {
    View::Color(color)
}

/// Circle inscribed in the offered square.
pub fn circle() -> View {
    View::Circle
}

/// Rectangle filling the offered size.
pub fn rectangle() -> View {
    View::Rectangle
}

/// One-unit line; its direction follows the enclosing stack.
pub fn divider() -> View {
    View::Divider
}

/// Empty flexible space.
pub fn spacer() -> View {
    View::Spacer
}

/// Horizontal stack, centered, with the default spacing.
pub fn hstack(children: Vec<View>) -> View {
    hstack_aligned(VerticalAlignment::Center, None, children)
}

/// Horizontal stack with explicit cross alignment and spacing.
pub fn hstack_aligned(
    alignment: VerticalAlignment,
    spacing: Option<f64>,
    children: Vec<View>,
) -> View {
    View::HStack(HStackView {
        alignment,
        spacing,
        children,
    })
}

/// Vertical stack, centered, with the default spacing.
pub fn vstack(children: Vec<View>) -> View {
    vstack_aligned(HorizontalAlignment::Center, None, children)
}

/// Vertical stack with explicit cross alignment and spacing.
pub fn vstack_aligned(
    alignment: HorizontalAlignment,
    spacing: Option<f64>,
    children: Vec<View>,
) -> View {
    View::VStack(VStackView {
        alignment,
        spacing,
        children,
    })
}

/// Layered stack, centered.
pub fn zstack(children: Vec<View>) -> View {
    zstack_aligned(Alignment::CENTER, children)
}

/// Layered stack aligned on both axes.
pub fn zstack_aligned(alignment: Alignment, children: Vec<View>) -> View {
    View::ZStack(ZStackView {
        alignment,
        children,
    })
}

/// Sibling views; `None` members are skipped when the tree is built.
pub fn group(members: Vec<Option<View>>) -> View {
    View::Group(members)
}

impl TextView {
    /// Font for this text, overriding the font environment.
    pub fn font(mut self, font: Font) -> Self {
        self.modifiers.push(TextModifier::Font(font));
        self
    }

    /// Color for this text, overriding the foreground environment.
    pub fn color(mut self, color: Color) -> Self {
        self.modifiers.push(TextModifier::Color(color));
        self
    }
}

impl From<TextView> for View {
    fn from(value: TextView) -> Self {
        View::Text(value)
    }
}

impl View {
    /// Wrap in a modifier.
    pub fn modifier(self, modifier: Modifier) -> View {
        View::Modified {
            content: Box::new(self),
            modifier,
        }
    }

    /// Default padding on all edges.
    pub fn padding(self) -> View {
        self.padding_edges(Edges::All, None)
    }

    /// `length` on all edges.
    pub fn padding_all(self, length: f64) -> View {
        self.padding_edges(Edges::All, Some(length))
    }

    /// `length` (or the default) on the given edges.
    pub fn padding_edges(self, edges: Edges, length: Option<f64>) -> View {
        self.padding_insets(edges.insets(length))
    }

    /// Padding with explicit insets.
    pub fn padding_insets(self, insets: EdgeInsets) -> View {
        self.modifier(Modifier::Padding(insets))
    }

    /// Fill behind the content.
    pub fn background(self, color: Color) -> View {
        self.modifier(Modifier::Background(color))
    }

    /// Foreground environment for descendant text and shapes.
    pub fn foreground_color(self, color: Color) -> View {
        self.modifier(Modifier::ForegroundColor(color))
    }

    /// Font environment for descendant text.
    pub fn font(self, font: Font) -> View {
        self.modifier(Modifier::Font(font))
    }

    /// Color scheme environment for the subtree.
    pub fn color_scheme(self, scheme: ColorScheme) -> View {
        self.modifier(Modifier::ColorScheme(scheme))
    }
}
