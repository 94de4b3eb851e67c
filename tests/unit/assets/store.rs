use std::io::Cursor;

use super::*;
use crate::view::dsl;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("viewkit-store-{}-{name}", std::process::id()));
    std::fs::create_dir_all(dir.join("img")).unwrap();
    dir
}

fn write_png(path: &Path, width: u32, height: u32) {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    std::fs::write(path, buf).unwrap();
}

#[test]
fn normalize_path_slash_normalization() {
    assert_eq!(normalize_rel_path("a/b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("a\\b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("./a//b.png").unwrap(), "a/b.png");
    assert!(normalize_rel_path("../x.png").is_err());
    assert!(normalize_rel_path("/abs.png").is_err());
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path("./").is_err());
}

#[test]
fn solid_images_are_premultiplied() {
    let img = PreparedImage::solid(2, 3, Rgba8::new(255, 0, 0, 128));
    assert_eq!(img.rgba8_premul.len(), 2 * 3 * 4);
    assert_eq!(&img.rgba8_premul[..4], &[128, 0, 0, 128]);
}

#[test]
fn unknown_keys_are_validation_errors() {
    let mut store = AssetStore::new();
    store.insert("a.png", PreparedImage::solid(1, 1, Rgba8::opaque(0, 0, 0)));
    assert!(store.contains("a.png"));
    assert_eq!(store.len(), 1);
    let err = store.get("b.png").unwrap_err();
    assert!(matches!(err, ViewError::Validation(_)), "{err}");
}

#[test]
fn prepare_decodes_every_referenced_key() {
    let dir = scratch_dir("prepare");
    write_png(&dir.join("img/a.png"), 4, 2);
    write_png(&dir.join("b.png"), 3, 5);

    let view = dsl::hstack(vec![
        dsl::image("img/a.png"),
        dsl::image("b.png"),
        dsl::image("img\\a.png"),
    ]);
    let store = AssetStore::prepare(&view, &dir).unwrap();

    assert_eq!(store.root(), Some(dir.as_path()));
    assert_eq!(store.len(), 3);
    let a = store.get("img/a.png").unwrap();
    assert_eq!((a.width, a.height), (4, 2));
    assert_eq!(store.get("img\\a.png").unwrap(), a);
    let b = store.get("b.png").unwrap();
    assert_eq!((b.width, b.height), (3, 5));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn prepare_reports_missing_files_and_bad_paths() {
    let dir = scratch_dir("missing");
    let err = AssetStore::prepare(&dsl::image("nope.png"), &dir).unwrap_err();
    assert!(matches!(err, ViewError::Other(_)), "{err}");

    let err = AssetStore::prepare(&dsl::image("../escape.png"), &dir).unwrap_err();
    assert!(matches!(err, ViewError::Validation(_)), "{err}");

    std::fs::remove_dir_all(&dir).ok();
}
