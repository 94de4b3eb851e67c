use crate::foundation::core::Rgba8;

/// Light or dark appearance used to resolve semantic colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    /// Dark content on a light background.
    #[default]
    Light,
    /// Light content on a dark background.
    Dark,
}

/// A color value in a view description.
///
/// Named colors are resolved against the active [`ColorScheme`] at paint time; `Rgba` is used
/// verbatim in both schemes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Fully transparent.
    Clear,
    /// Black in both schemes.
    Black,
    /// White in both schemes.
    White,
    /// Neutral gray; the default divider color.
    Gray,
    /// System red.
    Red,
    /// System green.
    Green,
    /// System blue.
    Blue,
    /// System orange.
    Orange,
    /// System yellow.
    Yellow,
    /// System pink.
    Pink,
    /// System purple; also used for debug outlines.
    Purple,
    /// Default foreground for text and shapes.
    Primary,
    /// De-emphasized foreground.
    Secondary,
    /// Straight-alpha RGBA8.
    Rgba([u8; 4]),
}

impl Color {
    /// Resolve to concrete channels for `scheme`.
    pub fn resolve(self, scheme: ColorScheme) -> Rgba8 {
        let dark = scheme == ColorScheme::Dark;
        match self {
            Color::Clear => Rgba8::transparent(),
            Color::Black => Rgba8::opaque(0, 0, 0),
            Color::White => Rgba8::opaque(255, 255, 255),
            Color::Gray => Rgba8::opaque(142, 142, 147),
            Color::Red if dark => Rgba8::opaque(255, 69, 58),
            Color::Red => Rgba8::opaque(255, 59, 48),
            Color::Green if dark => Rgba8::opaque(48, 209, 88),
            Color::Green => Rgba8::opaque(52, 199, 89),
            Color::Blue if dark => Rgba8::opaque(10, 132, 255),
            Color::Blue => Rgba8::opaque(0, 122, 255),
            Color::Orange if dark => Rgba8::opaque(255, 159, 10),
            Color::Orange => Rgba8::opaque(255, 149, 0),
            Color::Yellow if dark => Rgba8::opaque(255, 214, 10),
            Color::Yellow => Rgba8::opaque(255, 204, 0),
            Color::Pink if dark => Rgba8::opaque(255, 55, 95),
            Color::Pink => Rgba8::opaque(255, 45, 85),
            Color::Purple if dark => Rgba8::opaque(191, 90, 242),
            Color::Purple => Rgba8::opaque(175, 82, 222),
            Color::Primary if dark => Rgba8::opaque(255, 255, 255),
            Color::Primary => Rgba8::opaque(0, 0, 0),
            Color::Secondary if dark => Rgba8::new(235, 235, 245, 153),
            Color::Secondary => Rgba8::new(60, 60, 67, 153),
            Color::Rgba([r, g, b, a]) => Rgba8::new(r, g, b, a),
        }
    }
}
