use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::{
    foundation::{
        core::Size,
        error::{ViewError, ViewResult},
    },
    text::TextMeasurer,
    view::font::Font,
};

/// RGBA8 brush color carried through Parley layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

/// Text shaping and line breaking over one registered font file.
///
/// Measurement and painting share this engine so that painted glyphs fill exactly the boxes
/// layout measured.
pub struct ParleyTextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
    font_bytes: Arc<Vec<u8>>,
}

impl std::fmt::Debug for ParleyTextEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParleyTextEngine")
            .field("family_name", &self.family_name)
            .field("font_bytes", &self.font_bytes.len())
            .finish()
    }
}

impl ParleyTextEngine {
    /// Register `font_bytes` (TTF/OTF) and use its first family for all text.
    pub fn new(font_bytes: Vec<u8>) -> ViewResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| ViewError::validation("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| ViewError::validation("registered font family has no name"))?
            .to_string();

        tracing::debug!(family = %family_name, bytes = font_bytes.len(), "registered font");
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font_bytes: Arc::new(font_bytes),
        })
    }

    /// Read a font file and register it.
    pub fn from_path(path: impl AsRef<Path>) -> ViewResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("read font file '{}'", path.display()))?;
        Self::new(bytes)
    }

    /// Family name of the registered font.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub(crate) fn font_data(&self) -> vello_cpu::peniko::FontData {
        vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(self.font_bytes.as_ref().clone()),
            0,
        )
    }

    /// Shape and break `text`; `max_width` of `None` means a single line per paragraph.
    pub(crate) fn layout(
        &mut self,
        text: &str,
        font: Font,
        brush: TextBrushRgba8,
        max_width: Option<f32>,
    ) -> ViewResult<parley::Layout<TextBrushRgba8>> {
        if !font.size_px.is_finite() || font.size_px <= 0.0 {
            return Err(ViewError::validation("text size_px must be finite and > 0"));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font.size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::new(f32::from(font.weight)),
        ));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(max_width);
        layout.align(
            max_width,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );
        Ok(layout)
    }
}

impl TextMeasurer for ParleyTextEngine {
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
        let max_width = max_width.is_finite().then(|| max_width.max(0.0) as f32);
        let layout = self.layout(text, font, TextBrushRgba8::default(), max_width)?;
        Ok(Size::new(
            f64::from(layout.width()).max(0.0),
            f64::from(layout.height()).max(0.0),
        ))
    }
}
