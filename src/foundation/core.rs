use crate::foundation::error::{ViewError, ViewResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Fixed-size drawing target in whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting empty dimensions.
    pub fn new(width: u32, height: u32) -> ViewResult<Self> {
        if width == 0 || height == 0 {
            return Err(ViewError::validation("canvas width and height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Canvas extent as a layout proposal.
    pub fn size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha; 255 is opaque.
    pub a: u8,
}

impl Rgba8 {
    /// Build a color from straight-alpha channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent black.
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Channels multiplied by alpha, rounded to nearest.
    pub fn to_premul(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

/// Insets on each edge of a rectangle, in layout units.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EdgeInsets {
    /// Inset from the top edge.
    #[serde(default)]
    pub top: f64,
    /// Inset from the leading (left) edge.
    #[serde(default)]
    pub leading: f64,
    /// Inset from the bottom edge.
    #[serde(default)]
    pub bottom: f64,
    /// Inset from the trailing (right) edge.
    #[serde(default)]
    pub trailing: f64,
}

impl EdgeInsets {
    /// No insets on any edge.
    pub const ZERO: Self = Self {
        top: 0.0,
        leading: 0.0,
        bottom: 0.0,
        trailing: 0.0,
    };

    /// Build insets edge by edge.
    pub const fn new(top: f64, leading: f64, bottom: f64, trailing: f64) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    /// Same inset on all four edges.
    pub const fn uniform(length: f64) -> Self {
        Self::new(length, length, length, length)
    }

    /// Sum of leading and trailing insets.
    pub fn horizontal(self) -> f64 {
        self.leading + self.trailing
    }

    /// Sum of top and bottom insets.
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }

    /// Offset from a rectangle's origin to its content origin.
    pub fn content_offset(self) -> Vec2 {
        Vec2::new(self.leading, self.top)
    }

    pub(crate) fn is_finite(self) -> bool {
        self.top.is_finite()
            && self.leading.is_finite()
            && self.bottom.is_finite()
            && self.trailing.is_finite()
    }
}
