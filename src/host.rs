//! One-call pipeline: view description to laid out tree to pixels.

use crate::{
    assets::AssetStore,
    foundation::{core::Canvas, error::ViewResult},
    layout::{config::LayoutConfig, engine::LayoutEngine},
    render::{CpuBackend, FrameRGBA, RenderBackend, RenderSettings, collect_draw_ops},
    text::TextEngine,
    tree::{TreeBuilder, ViewTree},
    view::model::View,
};

/// Owns everything needed to turn a [`View`] into a frame of a fixed canvas size.
///
/// Layout and painting share one [`TextEngine`], so text is drawn into the boxes it was measured
/// for.
#[derive(Debug)]
pub struct HostingContext {
    canvas: Canvas,
    config: LayoutConfig,
    text: TextEngine,
    assets: AssetStore,
    backend: CpuBackend,
}

impl HostingContext {
    /// Context with default layout config, estimated text, no images, default render settings.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            config: LayoutConfig::default(),
            text: TextEngine::default(),
            assets: AssetStore::new(),
            backend: CpuBackend::new(RenderSettings::default()),
        }
    }

    /// Use `config` for layout.
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Measure (and draw) text with `text`.
    pub fn with_text_engine(mut self, text: TextEngine) -> Self {
        self.text = text;
        self
    }

    /// Resolve images from `assets`.
    pub fn with_assets(mut self, assets: AssetStore) -> Self {
        self.assets = assets;
        self
    }

    /// Paint with `settings`.
    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.backend = CpuBackend::new(settings);
        self
    }

    /// Target canvas.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Layout configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Prepared images.
    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    /// Paint settings.
    pub fn settings(&self) -> &RenderSettings {
        self.backend.settings()
    }

    /// Build the node tree for `view` without laying it out.
    pub fn build(&self, view: &View) -> ViewResult<ViewTree> {
        TreeBuilder::new(&self.assets).build(view)
    }

    /// Build and lay out `view`; the root fills the canvas.
    #[tracing::instrument(skip_all)]
    pub fn layout(&mut self, view: &View) -> ViewResult<ViewTree> {
        let mut tree = self.build(view)?;
        self.layout_tree(&mut tree)?;
        tracing::debug!("laid out tree:\n{tree}");
        Ok(tree)
    }

    /// Lay out an already built tree at the canvas size.
    pub fn layout_tree(&mut self, tree: &mut ViewTree) -> ViewResult<()> {
        let size = self.canvas.size();
        let root = tree.root();
        LayoutEngine::new(self.config, &mut self.text).layout(tree, root, size.width, size.height)
    }

    /// Build, lay out and paint `view`.
    #[tracing::instrument(skip_all, fields(width = self.canvas.width, height = self.canvas.height))]
    pub fn render(&mut self, view: &View) -> ViewResult<FrameRGBA> {
        let tree = self.layout(view)?;
        self.render_tree(&tree)
    }

    /// Paint a laid out tree.
    pub fn render_tree(&mut self, tree: &ViewTree) -> ViewResult<FrameRGBA> {
        let ops = collect_draw_ops(tree, self.backend.settings());
        self.backend
            .render_ops(&ops, self.canvas, &self.assets, self.text.parley_mut())
    }
}
