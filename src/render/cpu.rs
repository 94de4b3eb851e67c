use std::{collections::HashMap, sync::Arc};

use crate::{
    assets::{AssetStore, PreparedImage},
    foundation::{
        core::{Canvas, Rect, Rgba8},
        error::{ViewError, ViewResult},
    },
    render::{DrawOp, FrameRGBA, RenderBackend, RenderSettings},
    text::{ParleyTextEngine, parley_engine::TextBrushRgba8},
};

/// CPU rasterizer powered by `vello_cpu`.
///
/// Keeps its render context between frames of the same size.
pub struct CpuBackend {
    settings: RenderSettings,
    ctx: Option<vello_cpu::RenderContext>,
}

impl std::fmt::Debug for CpuBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuBackend")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
struct ImagePaint {
    paint: vello_cpu::Image,
    w: u32,
    h: u32,
}

impl CpuBackend {
    /// Backend drawing with `settings` (clear color and debug outlines).
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            ctx: None,
        }
    }

    /// Settings this backend was created with.
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> ViewResult<R>,
    ) -> ViewResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(skip_all, fields(ops = ops.len(), width = canvas.width, height = canvas.height))]
    fn render_ops(
        &mut self,
        ops: &[DrawOp],
        canvas: Canvas,
        assets: &AssetStore,
        mut text: Option<&mut ParleyTextEngine>,
    ) -> ViewResult<FrameRGBA> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| ViewError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| ViewError::render("canvas height exceeds u16"))?;
        let clear = self.settings.clear_rgba;
        let mut pixmap = vello_cpu::Pixmap::new(width, height);

        self.with_ctx_mut(width, height, |ctx| {
            ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
            if let Some([r, g, b, a]) = clear {
                ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    f64::from(width),
                    f64::from(height),
                ));
            }

            let mut images = HashMap::<&str, ImagePaint>::new();
            let mut skipped_text = 0_usize;
            for op in ops {
                match op {
                    DrawOp::FillRect { rect, color } => {
                        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                        set_solid(ctx, *color);
                        ctx.fill_rect(&rect_to_cpu(*rect));
                    }
                    DrawOp::FillEllipse { rect, color } => {
                        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                        set_solid(ctx, *color);
                        ctx.fill_path(&ellipse_path(*rect));
                    }
                    DrawOp::DebugStroke { rect, color } => {
                        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                        set_solid(ctx, *color);
                        for edge in outline_edges(*rect) {
                            ctx.fill_rect(&rect_to_cpu(edge));
                        }
                    }
                    DrawOp::Image { rect, asset } => {
                        let p = match images.get(asset.as_str()) {
                            Some(p) => p.clone(),
                            None => {
                                let p = image_paint(assets.get(asset)?)?;
                                images.insert(asset.as_str(), p.clone());
                                p
                            }
                        };
                        ctx.set_transform(vello_cpu::kurbo::Affine::translate((rect.x0, rect.y0)));
                        ctx.set_paint(p.paint);
                        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                            0.0,
                            0.0,
                            f64::from(p.w),
                            f64::from(p.h),
                        ));
                    }
                    DrawOp::Text {
                        rect,
                        content,
                        font,
                        color,
                    } => {
                        let Some(engine) = text.as_deref_mut() else {
                            skipped_text += 1;
                            continue;
                        };
                        let brush = TextBrushRgba8 {
                            r: color.r,
                            g: color.g,
                            b: color.b,
                            a: color.a,
                        };
                        let layout =
                            engine.layout(content, *font, brush, Some(rect.width() as f32))?;
                        let font_data = engine.font_data();
                        ctx.set_transform(vello_cpu::kurbo::Affine::translate((rect.x0, rect.y0)));
                        for line in layout.lines() {
                            for item in line.items() {
                                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item
                                else {
                                    continue;
                                };
                                let brush = run.style().brush;
                                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                                    brush.r, brush.g, brush.b, brush.a,
                                ));
                                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                                    id: g.id,
                                    x: g.x,
                                    y: g.y,
                                });
                                ctx.glyph_run(&font_data)
                                    .font_size(run.run().font_size())
                                    .fill_glyphs(glyphs);
                            }
                        }
                    }
                }
            }
            if skipped_text > 0 {
                tracing::warn!(skipped_text, "no font configured, text was not drawn");
            }

            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;

        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn set_solid(ctx: &mut vello_cpu::RenderContext, c: Rgba8) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn ellipse_path(r: Rect) -> vello_cpu::kurbo::BezPath {
    use kurbo::Shape;

    let mut p = vello_cpu::kurbo::BezPath::new();
    for el in kurbo::Ellipse::from_rect(r).path_elements(0.1) {
        p.push(el);
    }
    p
}

/// Four one-unit strips along the inside of `r`.
fn outline_edges(r: Rect) -> [Rect; 4] {
    let t = 1.0_f64.min(r.width()).min(r.height());
    [
        Rect::new(r.x0, r.y0, r.x1, r.y0 + t),
        Rect::new(r.x0, r.y1 - t, r.x1, r.y1),
        Rect::new(r.x0, r.y0, r.x0 + t, r.y1),
        Rect::new(r.x1 - t, r.y0, r.x1, r.y1),
    ]
}

fn image_paint(prepared: &PreparedImage) -> ViewResult<ImagePaint> {
    let pixmap =
        pixmap_from_premul_bytes(&prepared.rgba8_premul, prepared.width, prepared.height)?;
    Ok(ImagePaint {
        paint: vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        },
        w: prepared.width,
        h: prepared.height,
    })
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> ViewResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| ViewError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| ViewError::render("image height exceeds u16"))?;
    if bytes.len() != (width as usize) * (height as usize) * 4 {
        return Err(ViewError::render("image byte length mismatch"));
    }
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| {
            vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]])
        })
        .collect::<Vec<_>>();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels, w, h, true,
    ))
}
