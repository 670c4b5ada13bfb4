use std::io::Cursor;

use image::{Rgba, RgbaImage};

use super::*;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]));
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_empty_recipe_list_rejected() {
    assert!(matches!(
        TransformEngine::new(Vec::new()),
        Err(TransformError::NoRecipes)
    ));
}

#[test]
fn test_backdrop_one_file_per_recipe() {
    let dir = tempfile::tempdir().unwrap();
    let engine = TransformEngine::with_default_recipes();

    let written = engine
        .transform(&png_bytes(64, 36), Role::Backdrop, "The Matrix", dir.path())
        .unwrap()
        .written;

    assert_eq!(
        file_names(&written),
        vec![
            "The_Matrix_240x135.png",
            "The_Matrix_800x450.png",
            "The_Matrix_1280x480.png",
            "The_Matrix_640x360.webp",
        ]
    );
    for path in &written {
        assert!(path.starts_with(dir.path().join("backdrop")));
    }
}

#[test]
fn test_backdrop_stretched_to_exact_size() {
    let dir = tempfile::tempdir().unwrap();
    let engine = TransformEngine::with_default_recipes();

    // Square source, wide targets: no aspect preservation.
    let written = engine
        .transform(&png_bytes(50, 50), Role::Backdrop, "Square", dir.path())
        .unwrap()
        .written;

    for (path, recipe) in written.iter().zip(engine.recipes()) {
        let (w, h) = image::image_dimensions(path).unwrap();
        assert_eq!((w, h), (recipe.width, recipe.height));
    }
}

#[test]
fn test_webp_output_is_webp() {
    let dir = tempfile::tempdir().unwrap();
    let engine = TransformEngine::new(vec![TransformRecipe::new(32, 18, ImageFormat::Webp)]).unwrap();

    let written = engine
        .transform(&png_bytes(64, 36), Role::Backdrop, "W", dir.path())
        .unwrap()
        .written;

    let bytes = std::fs::read(&written[0]).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::WebP);
}

#[test]
fn test_logo_single_file_original_size() {
    let dir = tempfile::tempdir().unwrap();
    let engine = TransformEngine::with_default_recipes();

    let written = engine
        .transform(&png_bytes(300, 100), Role::Logos, "The Matrix", dir.path())
        .unwrap()
        .written;

    assert_eq!(file_names(&written), vec!["The_Matrix.png"]);
    assert!(written[0].starts_with(dir.path().join("logos")));
    assert_eq!(image::image_dimensions(&written[0]).unwrap(), (300, 100));
}

#[test]
fn test_logo_uses_first_recipe_format() {
    let dir = tempfile::tempdir().unwrap();
    let engine = TransformEngine::new(vec![
        TransformRecipe::new(10, 10, ImageFormat::Jpeg),
        TransformRecipe::new(20, 20, ImageFormat::Png),
    ])
    .unwrap();

    let written = engine
        .transform(&png_bytes(40, 20), Role::Logos, "Jaws", dir.path())
        .unwrap()
        .written;

    assert_eq!(file_names(&written), vec!["Jaws.jpg"]);
    assert_eq!(image::image_dimensions(&written[0]).unwrap(), (40, 20));
}

#[test]
fn test_undecodable_payload_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let engine = TransformEngine::with_default_recipes();

    let result = engine.transform(b"<html>not an image</html>", Role::Backdrop, "Bad", dir.path());

    assert!(matches!(result, Err(TransformError::Image(_))));
    assert!(!dir.path().join("backdrop").exists());
}

#[test]
fn test_overlay_flag_is_inert() {
    let dir = tempfile::tempdir().unwrap();
    let plain = TransformRecipe::new(16, 9, ImageFormat::Png);
    let flagged = plain.with_logo_overlay();

    let a = TransformEngine::new(vec![plain]).unwrap();
    let b = TransformEngine::new(vec![flagged]).unwrap();
    let src = png_bytes(32, 18);

    let pa = a.transform(&src, Role::Backdrop, "A", dir.path()).unwrap().written;
    let pb = b.transform(&src, Role::Backdrop, "B", dir.path()).unwrap().written;

    let ia = image::open(&pa[0]).unwrap().to_rgba8();
    let ib = image::open(&pb[0]).unwrap().to_rgba8();
    assert_eq!(ia.as_raw(), ib.as_raw());
}

#[test]
fn test_unwritable_variant_reported_others_written() {
    let dir = tempfile::tempdir().unwrap();
    let engine = TransformEngine::with_default_recipes();

    // A directory squatting on one output path makes that single write fail.
    std::fs::create_dir_all(dir.path().join("backdrop").join("Blocked_800x450.png")).unwrap();

    let output = engine
        .transform(&png_bytes(64, 36), Role::Backdrop, "Blocked", dir.path())
        .unwrap();

    assert_eq!(output.written.len(), 3);
    assert_eq!(output.failures.len(), 1);
    assert!(output.failures[0].0.ends_with("Blocked_800x450.png"));
}

#[test]
fn test_absolute_title_never_leaves_role_dir() {
    let dir = tempfile::tempdir().unwrap();
    let elsewhere = tempfile::tempdir().unwrap();
    let engine = TransformEngine::with_default_recipes();
    let title = format!("{}/Evil", elsewhere.path().display());

    let backdrop = engine
        .transform(&png_bytes(64, 36), Role::Backdrop, &title, dir.path())
        .unwrap();
    let logo = engine
        .transform(&png_bytes(64, 36), Role::Logos, &title, dir.path())
        .unwrap();

    assert!(backdrop.written.is_empty());
    assert!(logo.written.is_empty());
    assert_eq!(backdrop.failures.len(), 4);
    assert_eq!(logo.failures.len(), 1);
    assert!(matches!(logo.failures[0].1, TransformError::UnsafeFileName(_)));
    assert_eq!(std::fs::read_dir(elsewhere.path()).unwrap().count(), 0);
}

#[test]
fn test_parent_dir_title_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("out");
    let engine = TransformEngine::with_default_recipes();

    let output = engine
        .transform(&png_bytes(64, 36), Role::Logos, "../Evil", &root)
        .unwrap();

    assert!(output.written.is_empty());
    assert!(matches!(output.failures[0].1, TransformError::UnsafeFileName(_)));
    assert!(!root.join("Evil.png").exists());
    assert!(!dir.path().join("Evil.png").exists());
}

#[test]
fn test_dots_inside_title_are_fine() {
    let dir = tempfile::tempdir().unwrap();
    let engine = TransformEngine::with_default_recipes();

    let written = engine
        .transform(&png_bytes(40, 20), Role::Logos, "Mr. & Mrs. Smith..", dir.path())
        .unwrap()
        .written;

    assert_eq!(file_names(&written), vec!["Mr._&_Mrs._Smith...png"]);
}
