/// Font request carried by text views and the font environment.
///
/// Only size and weight influence layout; the family comes from whichever text backend measures
/// and draws the glyphs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Font {
    /// Em size in pixels.
    pub size_px: f32,
    /// CSS-style weight (100..=900).
    #[serde(default = "default_weight")]
    pub weight: u16,
}

fn default_weight() -> u16 {
    Font::REGULAR
}

/// Semantic text styles with fixed sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    /// 34 px.
    LargeTitle,
    /// 28 px.
    Title,
    /// 17 px, bold.
    Headline,
    /// 15 px.
    Subheadline,
    /// 17 px.
    Body,
    /// 16 px.
    Callout,
    /// 13 px.
    Footnote,
    /// 12 px.
    Caption,
}

impl Font {
    /// Regular weight.
    pub const REGULAR: u16 = 400;
    /// Bold weight.
    pub const BOLD: u16 = 700;

    /// Regular-weight font at `size_px`.
    pub fn system(size_px: f32) -> Self {
        Self {
            size_px,
            weight: Self::REGULAR,
        }
    }

    /// Font for a semantic text style.
    pub fn style(style: TextStyle) -> Self {
        match style {
            TextStyle::LargeTitle => Self::system(34.0),
            TextStyle::Title => Self::system(28.0),
            TextStyle::Headline => Self::system(17.0).bold(),
            TextStyle::Subheadline => Self::system(15.0),
            TextStyle::Body => Self::system(17.0),
            TextStyle::Callout => Self::system(16.0),
            TextStyle::Footnote => Self::system(13.0),
            TextStyle::Caption => Self::system(12.0),
        }
    }

    /// Default font for text without a font modifier or font environment.
    pub fn body() -> Self {
        Self::style(TextStyle::Body)
    }

    /// Same size, bold weight.
    pub fn bold(self) -> Self {
        self.weight(Self::BOLD)
    }

    /// Same size, explicit weight.
    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    pub(crate) fn is_valid(self) -> bool {
        self.size_px.is_finite() && self.size_px > 0.0 && (1..=1000).contains(&self.weight)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::body()
    }
}

impl From<TextStyle> for Font {
    fn from(style: TextStyle) -> Self {
        Self::style(style)
    }
}
