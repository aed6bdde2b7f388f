//! Zone preview rendering with artwork compositing and swatch fallback

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::io::configuration::PREVIEW_STICKER_SIZE;
use crate::io::error::{PlacerError, Result};
use crate::spatial::surface::{MemorySurface, PlacedSticker, Surface};

/// Render a zone's stickers onto a transparent RGBA canvas
///
/// Stickers are drawn with their top-left corner at the committed position.
/// When an assets directory is supplied and holds the referenced artwork, the
/// artwork is composited; otherwise a fixed-size color swatch keyed to the
/// artwork index stands in. Positions outside the canvas are clipped pixel by
/// pixel rather than rejected, so degenerate placements still render.
///
/// # Errors
///
/// Returns an error if an artwork file exists but cannot be decoded.
pub fn render_zone_preview(
    surface: &MemorySurface,
    assets_dir: Option<&Path>,
) -> Result<RgbaImage> {
    let [width, height] = surface.extent();
    // Zero-extent zones clamp to one pixel so the encoder always accepts the canvas
    let canvas_width = width.ceil().max(1.0) as u32;
    let canvas_height = height.ceil().max(1.0) as u32;
    let mut canvas = RgbaImage::from_pixel(canvas_width, canvas_height, Rgba([0, 0, 0, 0]));

    for sticker in surface.stickers() {
        match load_artwork(assets_dir, sticker)? {
            Some(artwork) => blit(&mut canvas, &artwork, sticker.position),
            None => draw_swatch(&mut canvas, sticker),
        }
    }

    Ok(canvas)
}

/// Render a zone preview and save it as a PNG
///
/// # Errors
///
/// Returns an error if artwork decoding fails, the parent directory cannot be
/// created, or the image cannot be written.
pub fn export_zone_preview(
    surface: &MemorySurface,
    assets_dir: Option<&Path>,
    output_path: &Path,
) -> Result<()> {
    let canvas = render_zone_preview(surface, assets_dir)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PlacerError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .save(output_path)
        .map_err(|e| PlacerError::PreviewExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

// Missing artwork degrades to the swatch fallback; a file that exists but
// fails to decode is a real error and propagates.
fn load_artwork(assets_dir: Option<&Path>, sticker: &PlacedSticker) -> Result<Option<RgbaImage>> {
    let Some(dir) = assets_dir else {
        return Ok(None);
    };

    let path = dir.join(sticker.asset.file_name());
    if !path.exists() {
        return Ok(None);
    }

    let artwork = image::open(&path).map_err(|e| PlacerError::AssetLoad { path, source: e })?;
    Ok(Some(artwork.to_rgba8()))
}

// Artwork pixels copy straight over the canvas; fully transparent source
// pixels are skipped so cut-out sticker shapes keep the page background.
fn blit(canvas: &mut RgbaImage, artwork: &RgbaImage, position: [f64; 2]) {
    let origin_x = position[0].round() as i64;
    let origin_y = position[1].round() as i64;

    for (dx, dy, pixel) in artwork.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }

        let x = origin_x + i64::from(dx);
        let y = origin_y + i64::from(dy);
        if x < 0 || y < 0 {
            continue;
        }

        if let Some(target) = canvas.get_pixel_mut_checked(x as u32, y as u32) {
            *target = *pixel;
        }
    }
}

fn draw_swatch(canvas: &mut RgbaImage, sticker: &PlacedSticker) {
    let color = swatch_color(sticker.asset.index());
    let origin_x = sticker.position[0].round() as i64;
    let origin_y = sticker.position[1].round() as i64;

    for dy in 0..PREVIEW_STICKER_SIZE {
        for dx in 0..PREVIEW_STICKER_SIZE {
            let x = origin_x + i64::from(dx);
            let y = origin_y + i64::from(dy);
            if x < 0 || y < 0 {
                continue;
            }

            if let Some(target) = canvas.get_pixel_mut_checked(x as u32, y as u32) {
                *target = color;
            }
        }
    }
}

// Golden-angle hue walk keeps neighboring artwork indices visually distinct
fn swatch_color(index: u32) -> Rgba<u8> {
    let hue = (f64::from(index) * 137.508) % 360.0;
    let (r, g, b) = hue_to_rgb(hue);
    Rgba([r, g, b, 255])
}

// Hue-only HSV conversion with full saturation and value
fn hue_to_rgb(hue: f64) -> (u8, u8, u8) {
    let sector = hue / 60.0;
    let fraction = sector - sector.floor();
    let falling = ((1.0 - fraction) * 255.0).round() as u8;
    let rising = (fraction * 255.0).round() as u8;

    match sector.floor() as u32 % 6 {
        0 => (255, rising, 0),
        1 => (falling, 255, 0),
        2 => (0, 255, rising),
        3 => (0, falling, 255),
        4 => (rising, 0, 255),
        _ => (255, 0, falling),
    }
}
