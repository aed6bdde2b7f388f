//! Validates preview rendering: canvas sizing, swatch fallback, clipping,
//! and export directory creation

use std::fs;

use stickerfield::assets::catalog::StickerAsset;
use stickerfield::io::image::{export_zone_preview, render_zone_preview};
use stickerfield::spatial::surface::{MemorySurface, PlacedSticker, Surface};

fn surface_with_sticker(width: f64, height: f64, position: [f64; 2]) -> MemorySurface {
    let mut surface = MemorySurface::new(width, height);
    surface.attach(PlacedSticker {
        asset: StickerAsset::new(3),
        position,
    });
    surface
}

#[test]
fn test_canvas_matches_zone_extent() {
    let surface = MemorySurface::new(320.0, 200.0);

    let canvas = render_zone_preview(&surface, None).unwrap();
    assert_eq!(canvas.dimensions(), (320, 200));
}

#[test]
fn test_swatch_fallback_marks_sticker_origin() {
    let surface = surface_with_sticker(200.0, 200.0, [50.0, 60.0]);

    let canvas = render_zone_preview(&surface, None).unwrap();
    assert_eq!(canvas.get_pixel(50, 60)[3], 255, "swatch origin is opaque");
    assert_eq!(canvas.get_pixel(0, 0)[3], 0, "background stays transparent");
}

#[test]
fn test_out_of_canvas_positions_clip_without_panicking() {
    let surface = surface_with_sticker(100.0, 100.0, [-500.0, -500.0]);

    let canvas = render_zone_preview(&surface, None).unwrap();
    assert!(
        canvas.pixels().all(|pixel| pixel[3] == 0),
        "fully off-canvas sticker leaves the canvas untouched"
    );
}

#[test]
fn test_missing_artwork_directory_entry_falls_back_to_swatch() {
    let assets = tempfile::tempdir().unwrap();
    let surface = surface_with_sticker(200.0, 200.0, [10.0, 10.0]);

    // Directory exists but holds no sticker_03.png
    let canvas = render_zone_preview(&surface, Some(assets.path())).unwrap();
    assert_eq!(canvas.get_pixel(10, 10)[3], 255);
}

#[test]
fn test_export_creates_parent_directories() {
    let out = tempfile::tempdir().unwrap();
    let surface = surface_with_sticker(120.0, 120.0, [30.0, 30.0]);

    let output_path = out.path().join("nested").join("zone_preview.png");
    export_zone_preview(&surface, None, &output_path).unwrap();

    assert!(output_path.exists(), "preview written under created parent");
    assert!(
        fs::metadata(&output_path).map(|m| m.len() > 0).unwrap_or(false),
        "preview is non-empty"
    );
}
