use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;

use crate::{
    assets::decode,
    foundation::{
        core::Rgba8,
        error::{ViewError, ViewResult},
    },
    view::model::View,
};

/// Raster image in premultiplied RGBA8 form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major premultiplied RGBA8 pixels.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl PreparedImage {
    /// Image of one flat color.
    pub fn solid(width: u32, height: u32, color: Rgba8) -> Self {
        let px = color.to_premul();
        let count = width as usize * height as usize;
        Self {
            width,
            height,
            rgba8_premul: Arc::new(px.repeat(count)),
        }
    }
}

/// Immutable map from view image keys to decoded images.
///
/// Built once before layout: image nodes take their intrinsic size from here, and the
/// rasterizer reads pixels from here.
#[derive(Clone, Debug, Default)]
pub struct AssetStore {
    root: Option<PathBuf>,
    images: HashMap<String, PreparedImage>,
}

impl AssetStore {
    /// Empty store; images are added with [`AssetStore::insert`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode every image `view` references, reading keys as paths relative to `root`.
    #[tracing::instrument(skip(view, root))]
    pub fn prepare(view: &View, root: impl Into<PathBuf>) -> ViewResult<Self> {
        let mut out = Self {
            root: Some(root.into()),
            images: HashMap::new(),
        };

        let mut keys = Vec::<String>::new();
        view.for_each_image(&mut |key| {
            if !keys.iter().any(|k| k == key) {
                keys.push(key.to_string());
            }
        });

        for key in keys {
            let norm = normalize_rel_path(&key)?;
            let bytes = out.read_bytes(&norm)?;
            let image = decode::decode_image(&bytes)?;
            tracing::debug!(key = %key, width = image.width, height = image.height, "prepared image");
            out.images.insert(key, image);
        }
        Ok(out)
    }

    /// Register (or replace) an image under `key`.
    pub fn insert(&mut self, key: impl Into<String>, image: PreparedImage) {
        self.images.insert(key.into(), image);
    }

    /// Directory keys were resolved against, if the store was prepared from disk.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Image registered under `key`.
    pub fn get(&self, key: &str) -> ViewResult<&PreparedImage> {
        self.images
            .get(key)
            .ok_or_else(|| ViewError::validation(format!("unknown image asset '{key}'")))
    }

    /// Whether an image is registered under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.images.contains_key(key)
    }

    /// Number of registered images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether no images are registered.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    fn read_bytes(&self, norm_path: &str) -> ViewResult<Vec<u8>> {
        let path = match &self.root {
            Some(root) => root.join(Path::new(norm_path)),
            None => PathBuf::from(norm_path),
        };
        std::fs::read(&path)
            .with_context(|| format!("read image bytes from '{}'", path.display()))
            .map_err(ViewError::from)
    }
}

/// Normalize a relative asset path to `/`-separated segments.
///
/// Drops `.` and empty segments; rejects absolute paths and `..`.
pub(crate) fn normalize_rel_path(source: &str) -> ViewResult<String> {
    let s = source.replace('\\', "/");
    if s.is_empty() {
        return Err(ViewError::validation("asset path must be non-empty"));
    }
    if s.starts_with('/') {
        return Err(ViewError::validation("asset paths must be relative"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        match part {
            "" | "." => {}
            ".." => return Err(ViewError::validation("asset paths must not contain '..'")),
            _ => out.push(part),
        }
    }
    if out.is_empty() {
        return Err(ViewError::validation("asset path must contain a file name"));
    }
    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
