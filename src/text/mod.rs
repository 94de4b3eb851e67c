//! Text measurement backends.

pub(crate) mod parley_engine;

use crate::{
    foundation::{core::Size, error::ViewResult},
    view::font::Font,
};

pub use parley_engine::ParleyTextEngine;

/// Measures the bounding box of a string set in a font.
///
/// `max_width` may be infinite (no wrapping) or non-positive (wrap at every opportunity).
/// Implementations must return non-negative extents. The height is not clamped to `max_height`.
pub trait TextMeasurer {
    /// Bounding size of `text` laid out in `font` within `max_width` by `max_height`.
    fn measure(
        &mut self,
        text: &str,
        font: Font,
        max_width: f64,
        max_height: f64,
    ) -> ViewResult<Size>;
}

/// Font-free measurer using fixed per-character advances.
///
/// Every character advances `advance_ratio * size_px` and every line is
/// `line_height_ratio * size_px` tall. Words wrap greedily at spaces; a word wider than the
/// available width overflows on its own line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EstimatingMeasurer {
    /// Advance per character, as a fraction of the font size.
    pub advance_ratio: f64,
    /// Line height, as a fraction of the font size.
    pub line_height_ratio: f64,
}

impl Default for EstimatingMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.5,
            line_height_ratio: 1.25,
        }
    }
}

impl TextMeasurer for EstimatingMeasurer {
    fn measure(
        &mut self,
        text: &str,
        font: Font,
        max_width: f64,
        _max_height: f64,
    ) -> ViewResult<Size> {
        if text.is_empty() {
            return Ok(Size::ZERO);
        }
        let size = f64::from(font.size_px);
        let advance = size * self.advance_ratio;
        let line_height = size * self.line_height_ratio;
        let max_width = max_width.max(0.0);

        let mut widest = 0.0_f64;
        let mut lines = 0_usize;
        for paragraph in text.split('\n') {
            let mut line_chars = 0_usize;
            lines += 1;
            for word in paragraph.split_whitespace() {
                let word_chars = word.chars().count();
                if line_chars == 0 {
                    line_chars = word_chars;
                    continue;
                }
                let extended = line_chars + 1 + word_chars;
                if extended as f64 * advance <= max_width {
                    line_chars = extended;
                } else {
                    widest = widest.max(line_chars as f64 * advance);
                    lines += 1;
                    line_chars = word_chars;
                }
            }
            widest = widest.max(line_chars as f64 * advance);
        }

        Ok(Size::new(widest, lines as f64 * line_height))
    }
}

/// The text backend a host lays out and paints with.
#[derive(Debug)]
pub enum TextEngine {
    /// Deterministic estimates; text is measured but not drawn.
    Estimating(EstimatingMeasurer),
    /// Shaped text from a registered font.
    Parley(Box<ParleyTextEngine>),
}

impl Default for TextEngine {
    fn default() -> Self {
        TextEngine::Estimating(EstimatingMeasurer::default())
    }
}

impl TextEngine {
    /// Shaping engine, when one is configured.
    pub fn parley_mut(&mut self) -> Option<&mut ParleyTextEngine> {
        match self {
            TextEngine::Estimating(_) => None,
            TextEngine::Parley(engine) => Some(engine.as_mut()),
        }
    }
}

impl TextMeasurer for TextEngine {
    fn measure(
        &mut self,
        text: &str,
        font: Font,
        max_width: f64,
        max_height: f64,
    ) -> ViewResult<Size> {
        match self {
            TextEngine::Estimating(m) => m.measure(text, font, max_width, max_height),
            TextEngine::Parley(m) => m.measure(text, font, max_width, max_height),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/estimate.rs"]
mod tests;
