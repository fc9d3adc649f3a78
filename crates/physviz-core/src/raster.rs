// File: crates/physviz-core/src/raster.rs
// Summary: CPU raster surfaces, PNG encoding, RGBA readback and file output.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use skia_safe as skia;
use tracing::info;

use crate::chart::RenderOptions;

/// Pixel dimensions for `opts`: logical size times the output scale.
pub fn pixel_size(opts: &RenderOptions) -> (i32, i32) {
    let w = (opts.width as f32 * opts.scale).round().max(1.0) as i32;
    let h = (opts.height as f32 * opts.scale).round().max(1.0) as i32;
    (w, h)
}

/// Create a raster surface, clear it to the theme background and run `draw`
/// with the canvas scaled to logical units.
pub(crate) fn draw_surface<F>(opts: &RenderOptions, draw: F) -> Result<skia::Surface>
where
    F: FnOnce(&skia::Canvas),
{
    let (w, h) = pixel_size(opts);
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
    {
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);
        canvas.save();
        canvas.scale((opts.scale, opts.scale));
        draw(canvas);
        canvas.restore();
    }
    Ok(surface)
}

pub(crate) fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Unpremultiplied RGBA8 pixels: `(pixels, width, height, stride)`.
pub(crate) fn read_rgba8(surface: &mut skia::Surface) -> Result<(Vec<u8>, u32, u32, usize)> {
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new(
        (w, h),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None::<skia::ColorSpace>,
    );
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(anyhow!("reading {w}x{h} RGBA pixels failed"));
    }
    Ok((pixels, w as u32, h as u32, stride))
}

pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote PNG");
    Ok(())
}
