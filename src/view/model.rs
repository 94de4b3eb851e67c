use crate::{
    foundation::core::EdgeInsets,
    foundation::error::{ViewError, ViewResult},
    layout::alignment::{Alignment, HorizontalAlignment, VerticalAlignment},
    view::color::{Color, ColorScheme},
    view::font::Font,
};

/// Declarative description of a view hierarchy.
///
/// `View` is plain data: it can be built in code with the functions in [`crate::dsl`] or loaded
/// from JSON. The JSON form is externally tagged with snake_case variant names, for example
/// `{"hstack": {"spacing": 10, "children": ["spacer", {"color": "red"}]}}`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// A run of text.
    Text(TextView),
    /// A raster image referenced by asset key (a path relative to the asset root).
    Image {
        /// Asset key.
        asset: String,
    },
    /// A solid color that fills whatever it is offered.
    Color(Color),
    /// The largest circle centered in the offered rectangle.
    Circle,
    /// A filled rectangle.
    Rectangle,
    /// A one-unit line across the enclosing stack.
    Divider,
    /// Flexible empty space.
    Spacer,
    /// Children laid out left to right.
    #[serde(rename = "hstack")]
    HStack(HStackView),
    /// Children laid out top to bottom.
    #[serde(rename = "vstack")]
    VStack(VStackView),
    /// Children overlaid on each other.
    #[serde(rename = "zstack")]
    ZStack(ZStackView),
    /// A group of sibling views. `None` members are conditional views that are absent.
    Group(Vec<Option<View>>),
    /// A view wrapped by a modifier.
    Modified {
        /// Wrapped view.
        content: Box<View>,
        /// Applied modifier.
        modifier: Modifier,
    },
}

/// Text content with text-specific modifiers.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextView {
    /// The string to draw.
    pub content: String,
    /// Modifiers in application order; later entries win.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<TextModifier>,
}

/// Modifiers that only apply to text.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextModifier {
    /// Font for this text only.
    Font(Font),
    /// Color for this text only.
    Color(Color),
}

impl TextView {
    /// The last font modifier, if any.
    pub fn font_override(&self) -> Option<Font> {
        self.modifiers.iter().rev().find_map(|m| match m {
            TextModifier::Font(f) => Some(*f),
            TextModifier::Color(_) => None,
        })
    }

    /// The last color modifier, if any.
    pub fn color_override(&self) -> Option<Color> {
        self.modifiers.iter().rev().find_map(|m| match m {
            TextModifier::Color(c) => Some(*c),
            TextModifier::Font(_) => None,
        })
    }
}

/// Horizontal stack parameters.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HStackView {
    /// Vertical placement of children.
    #[serde(default)]
    pub alignment: VerticalAlignment,
    /// Gap between children; the layout default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f64>,
    /// Children in document order.
    #[serde(default)]
    pub children: Vec<View>,
}

/// Vertical stack parameters.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VStackView {
    /// Horizontal placement of children.
    #[serde(default)]
    pub alignment: HorizontalAlignment,
    /// Gap between children; the layout default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f64>,
    /// Children in document order.
    #[serde(default)]
    pub children: Vec<View>,
}

/// Layered stack parameters.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ZStackView {
    /// Placement of children inside the stack.
    #[serde(default)]
    pub alignment: Alignment,
    /// Children in document order.
    #[serde(default)]
    pub children: Vec<View>,
}

/// Modifier applied to exactly one wrapped view.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    /// Insets the content; the modified view grows by the insets.
    Padding(EdgeInsets),
    /// Fills the modified view's rectangle behind its content.
    Background(Color),
    /// Foreground color environment for descendants.
    ForegroundColor(Color),
    /// Font environment for descendant text.
    Font(Font),
    /// Color scheme environment for descendants.
    ColorScheme(ColorScheme),
}

/// Set of rectangle edges a padding applies to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edges {
    /// Every edge.
    #[default]
    All,
    /// Leading and trailing.
    Horizontal,
    /// Top and bottom.
    Vertical,
    /// Top only.
    Top,
    /// Leading only.
    Leading,
    /// Bottom only.
    Bottom,
    /// Trailing only.
    Trailing,
}

impl Edges {
    /// Padding used when no explicit length is given.
    pub const DEFAULT_LENGTH: f64 = 20.0;

    /// Insets of `length` (or [`Self::DEFAULT_LENGTH`]) on the edges in this set.
    pub fn insets(self, length: Option<f64>) -> EdgeInsets {
        let l = length.unwrap_or(Self::DEFAULT_LENGTH);
        match self {
            Edges::All => EdgeInsets::uniform(l),
            Edges::Horizontal => EdgeInsets::new(0.0, l, 0.0, l),
            Edges::Vertical => EdgeInsets::new(l, 0.0, l, 0.0),
            Edges::Top => EdgeInsets::new(l, 0.0, 0.0, 0.0),
            Edges::Leading => EdgeInsets::new(0.0, l, 0.0, 0.0),
            Edges::Bottom => EdgeInsets::new(0.0, 0.0, l, 0.0),
            Edges::Trailing => EdgeInsets::new(0.0, 0.0, 0.0, l),
        }
    }
}

impl View {
    /// Parse a view description from JSON and validate it.
    pub fn from_json_str(s: &str) -> ViewResult<Self> {
        let view: View = serde_json::from_str(s).map_err(|e| ViewError::serde(e.to_string()))?;
        view.validate()?;
        Ok(view)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string_pretty(&self) -> ViewResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ViewError::serde(e.to_string()))
    }

    /// Check values the layout engine cannot work with.
    ///
    /// Baseline alignment is not rejected here; it surfaces as
    /// [`ViewError::Unsupported`] when the stack is laid out.
    pub fn validate(&self) -> ViewResult<()> {
        match self {
            View::Text(t) => {
                for m in &t.modifiers {
                    if let TextModifier::Font(f) = m
                        && !f.is_valid()
                    {
                        return Err(ViewError::validation(format!(
                            "text font must have finite size_px > 0 and weight in 1..=1000, got {f:?}"
                        )));
                    }
                }
                Ok(())
            }
            View::Image { asset } => {
                if asset.trim().is_empty() {
                    return Err(ViewError::validation("image asset key must be non-empty"));
                }
                Ok(())
            }
            View::Color(_)
            | View::Circle
            | View::Rectangle
            | View::Divider
            | View::Spacer => Ok(()),
            View::HStack(s) => {
                validate_spacing(s.spacing)?;
                s.children.iter().try_for_each(View::validate)
            }
            View::VStack(s) => {
                validate_spacing(s.spacing)?;
                s.children.iter().try_for_each(View::validate)
            }
            View::ZStack(s) => s.children.iter().try_for_each(View::validate),
            View::Group(members) => members.iter().flatten().try_for_each(View::validate),
            View::Modified { content, modifier } => {
                match modifier {
                    Modifier::Padding(insets) if !insets.is_finite() => {
                        return Err(ViewError::validation("padding insets must be finite"));
                    }
                    Modifier::Font(f) if !f.is_valid() => {
                        return Err(ViewError::validation(format!(
                            "font modifier must have finite size_px > 0 and weight in 1..=1000, got {f:?}"
                        )));
                    }
                    _ => {}
                }
                content.validate()
            }
        }
    }

    /// Visit every image asset key in document order.
    pub(crate) fn for_each_image(&self, f: &mut impl FnMut(&str)) {
        match self {
            View::Image { asset } => f(asset),
            View::HStack(s) => s.children.iter().for_each(|c| c.for_each_image(f)),
            View::VStack(s) => s.children.iter().for_each(|c| c.for_each_image(f)),
            View::ZStack(s) => s.children.iter().for_each(|c| c.for_each_image(f)),
            View::Group(members) => members.iter().flatten().for_each(|c| c.for_each_image(f)),
            View::Modified { content, .. } => content.for_each_image(f),
            View::Text(_)
            | View::Color(_)
            | View::Circle
            | View::Rectangle
            | View::Divider
            | View::Spacer => {}
        }
    }
}

fn validate_spacing(spacing: Option<f64>) -> ViewResult<()> {
    match spacing {
        Some(s) if !s.is_finite() => Err(ViewError::validation("stack spacing must be finite")),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/model.rs"]
mod tests;
