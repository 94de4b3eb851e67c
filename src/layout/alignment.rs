use crate::foundation::error::{ViewError, ViewResult};

/// Cross-axis anchor for children of a vertical stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlignment {
    /// Align to the leading (left) edge.
    Leading,
    /// Center in the available width.
    #[default]
    Center,
    /// Align to the trailing (right) edge.
    Trailing,
}

/// Cross-axis anchor for children of a horizontal stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlignment {
    /// Align to the top edge.
    Top,
    /// Center in the available height.
    #[default]
    Center,
    /// Align to the bottom edge.
    Bottom,
    /// Align on the first text baseline. Not supported by the layout engine.
    FirstTextBaseline,
    /// Align on the last text baseline. Not supported by the layout engine.
    LastTextBaseline,
}

/// Two-dimensional anchor used by layered stacks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Alignment {
    /// Anchor along the x axis.
    #[serde(default)]
    pub horizontal: HorizontalAlignment,
    /// Anchor along the y axis.
    #[serde(default)]
    pub vertical: VerticalAlignment,
}

impl Alignment {
    /// Centered on both axes.
    pub const CENTER: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Center);
    /// Leading edge, vertically centered.
    pub const LEADING: Self = Self::new(HorizontalAlignment::Leading, VerticalAlignment::Center);
    /// Trailing edge, vertically centered.
    pub const TRAILING: Self = Self::new(HorizontalAlignment::Trailing, VerticalAlignment::Center);
    /// Top edge, horizontally centered.
    pub const TOP: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Top);
    /// Bottom edge, horizontally centered.
    pub const BOTTOM: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Bottom);
    /// Top-leading corner.
    pub const TOP_LEADING: Self = Self::new(HorizontalAlignment::Leading, VerticalAlignment::Top);
    /// Top-trailing corner.
    pub const TOP_TRAILING: Self = Self::new(HorizontalAlignment::Trailing, VerticalAlignment::Top);
    /// Bottom-leading corner.
    pub const BOTTOM_LEADING: Self =
        Self::new(HorizontalAlignment::Leading, VerticalAlignment::Bottom);
    /// Bottom-trailing corner.
    pub const BOTTOM_TRAILING: Self =
        Self::new(HorizontalAlignment::Trailing, VerticalAlignment::Bottom);

    /// Pair a horizontal and a vertical anchor.
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Axis-independent anchor the stack algorithms position with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AlignKind {
    Start,
    Center,
    End,
}

impl AlignKind {
    /// Offset of `content` inside `container`.
    ///
    /// An oversized child gets a negative offset so that it overhangs evenly. An unbounded
    /// container or child has no defined offset and is anchored at the start.
    pub(crate) fn offset(self, container: f64, content: f64) -> f64 {
        let offset = match self {
            AlignKind::Start => 0.0,
            AlignKind::Center => (container - content) / 2.0,
            AlignKind::End => container - content,
        };
        if offset.is_finite() { offset } else { 0.0 }
    }
}

impl From<HorizontalAlignment> for AlignKind {
    fn from(value: HorizontalAlignment) -> Self {
        match value {
            HorizontalAlignment::Leading => AlignKind::Start,
            HorizontalAlignment::Center => AlignKind::Center,
            HorizontalAlignment::Trailing => AlignKind::End,
        }
    }
}

impl TryFrom<VerticalAlignment> for AlignKind {
    type Error = ViewError;

    fn try_from(value: VerticalAlignment) -> ViewResult<Self> {
        match value {
            VerticalAlignment::Top => Ok(AlignKind::Start),
            VerticalAlignment::Center => Ok(AlignKind::Center),
            VerticalAlignment::Bottom => Ok(AlignKind::End),
            VerticalAlignment::FirstTextBaseline | VerticalAlignment::LastTextBaseline => Err(
                ViewError::unsupported(format!("{value:?} alignment has no defined semantics")),
            ),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/alignment.rs"]
mod tests;
