//! Painting a laid out tree: a display list, then a CPU rasterizer.

pub(crate) mod cpu;
pub(crate) mod paint;

use crate::{
    assets::AssetStore,
    foundation::{core::Canvas, error::ViewResult},
    text::ParleyTextEngine,
    view::color::ColorScheme,
};

pub use cpu::CpuBackend;
pub use paint::{DrawOp, collect_draw_ops};

/// A rendered frame as RGBA8 pixels.
///
/// Frames are premultiplied alpha; the flag makes that explicit at API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Premultiplied RGBA of the pixel at `(x, y)`, if inside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Paint options shared by the display list and the rasterizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderSettings {
    /// If set, the frame is cleared to this straight-alpha color before drawing.
    pub clear_rgba: Option<[u8; 4]>,
    /// Outline every node's rectangle.
    pub debug_views: bool,
    /// Scheme used where no ancestor sets one.
    pub color_scheme: ColorScheme,
}

impl RenderSettings {
    /// Settings with a clear color.
    pub fn with_clear_rgba(mut self, clear: Option<[u8; 4]>) -> Self {
        self.clear_rgba = clear;
        self
    }

    /// Settings with debug outlines on or off.
    pub fn with_debug_views(mut self, on: bool) -> Self {
        self.debug_views = on;
        self
    }

    /// Settings with a base color scheme.
    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self
    }
}

/// Something that turns a display list into pixels.
pub trait RenderBackend {
    /// Rasterize `ops` onto a frame of `canvas` size.
    ///
    /// Text ops are drawn with `text` when given; without a shaping engine they are skipped.
    fn render_ops(
        &mut self,
        ops: &[DrawOp],
        canvas: Canvas,
        assets: &AssetStore,
        text: Option<&mut ParleyTextEngine>,
    ) -> ViewResult<FrameRGBA>;
}
