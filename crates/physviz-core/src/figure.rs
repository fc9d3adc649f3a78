// File: crates/physviz-core/src/figure.rs
// Summary: Multi-panel figure sized in inches at a fixed DPI; lays out charts and figure-level text.

use std::path::Path;

use anyhow::Result;
use skia_safe as skia;

use crate::annotate::{BoxAnchor, Overlay, OverlayKind};
use crate::chart::{draw_text_box, Chart, RenderOptions};
use crate::geometry::RectF;
use crate::raster;
use crate::text::TextShaper;
use crate::types::{Insets, DEFAULT_DPI, UNITS_PER_INCH};

/// A chart placed at a figure fraction `[left, bottom, width, height]`.
#[derive(Clone, Debug)]
pub struct Panel {
    pub chart: Chart,
    pub frac: [f32; 4],
    /// Margins for this panel; `None` uses the render options' insets.
    pub insets: Option<Insets>,
}

#[derive(Clone, Debug)]
pub struct Figure {
    pub width_in: f32,
    pub height_in: f32,
    pub dpi: f32,
    pub panels: Vec<Panel>,
    /// Figure-level text boxes (`OverlayKind::TextBox`, fractions of the page).
    pub texts: Vec<Overlay>,
}

impl Figure {
    pub fn new(width_in: f32, height_in: f32) -> Self {
        Self { width_in, height_in, dpi: DEFAULT_DPI, panels: Vec::new(), texts: Vec::new() }
    }

    /// One chart filling the page.
    pub fn single(width_in: f32, height_in: f32, chart: Chart) -> Self {
        let mut fig = Self::new(width_in, height_in);
        fig.add_panel(chart, [0.0, 0.0, 1.0, 1.0]);
        fig
    }

    /// Charts side by side with equal widths.
    pub fn row(width_in: f32, height_in: f32, charts: Vec<Chart>) -> Self {
        let mut fig = Self::new(width_in, height_in);
        let n = charts.len().max(1) as f32;
        for (i, chart) in charts.into_iter().enumerate() {
            fig.add_panel(chart, [i as f32 / n, 0.0, 1.0 / n, 1.0]);
        }
        fig
    }

    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn add_panel(&mut self, chart: Chart, frac: [f32; 4]) {
        self.panels.push(Panel { chart, frac, insets: None });
    }

    /// Small chart drawn over earlier panels. `frac` places the plot area
    /// itself; compact margins for ticks and labels are added around it.
    pub fn add_inset(&mut self, chart: Chart, frac: [f32; 4]) {
        let insets = Insets::new(40.0, 6.0, 20.0, 30.0);
        self.panels.push(Panel { chart, frac, insets: Some(insets) });
    }

    /// Boxed text at page fraction `(fx, fy)`, bottom-left origin.
    pub fn add_text_box(&mut self, overlay: Overlay) {
        self.texts.push(overlay);
    }

    /// Render options for this figure's size and resolution on top of `base`.
    pub fn options(&self, base: &RenderOptions) -> RenderOptions {
        RenderOptions {
            width: (self.width_in * UNITS_PER_INCH).round() as i32,
            height: (self.height_in * UNITS_PER_INCH).round() as i32,
            scale: self.dpi / UNITS_PER_INCH,
            ..*base
        }
    }

    /// Output size in pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        raster::pixel_size(&self.options(&RenderOptions::default()))
    }

    pub fn render_to_png(&self, base: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(base)?;
        raster::write_file(path.as_ref(), &bytes)
    }

    pub fn render_to_png_bytes(&self, base: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(base)?;
        raster::encode_png(&mut surface)
    }

    /// Unpremultiplied RGBA8: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, base: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(base)?;
        raster::read_rgba8(&mut surface)
    }

    fn render_surface(&self, base: &RenderOptions) -> Result<skia::Surface> {
        let opts = self.options(base);
        let shaper = TextShaper::new();
        let page = RectF::from_ltwh(0.0, 0.0, opts.width as f32, opts.height as f32);
        raster::draw_surface(&opts, |canvas| {
            for panel in &self.panels {
                let rect = page.fraction(panel.frac);
                match panel.insets {
                    Some(insets) => {
                        let outer = RectF::from_ltrb(
                            rect.left - insets.left,
                            rect.top - insets.top,
                            rect.right + insets.right,
                            rect.bottom + insets.bottom,
                        );
                        // Insets sit on top of other panels; paint their own page first
                        let mut bg = skia::Paint::default();
                        bg.set_color(opts.theme.background);
                        canvas.draw_rect(outer.to_skia(), &bg);
                        panel.chart.draw_into(canvas, outer, &insets, &opts, &shaper);
                    }
                    None => panel.chart.draw_into(canvas, rect, &opts.insets, &opts, &shaper),
                }
            }
            if opts.draw_labels {
                for t in &self.texts {
                    if let OverlayKind::TextBox { fx, fy, text, anchor } = &t.kind {
                        draw_text_box(canvas, &shaper, page, (*fx, *fy), text, *anchor, &t.style, &opts.theme);
                    }
                }
            }
        })
    }
}

/// Page-relative text box anchored at its bottom-left corner.
pub fn figure_text(fx: f64, fy: f64, text: impl Into<String>) -> Overlay {
    crate::annotate::text_box(fx, fy, text, BoxAnchor::Bottom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_size_follows_dpi() {
        let fig = Figure::new(14.0, 6.0);
        assert_eq!(fig.pixel_size(), (4200, 1800));
        let small = Figure::new(10.0, 6.0).with_dpi(50.0);
        assert_eq!(small.pixel_size(), (500, 300));
    }

    #[test]
    fn row_splits_width() {
        let fig = Figure::row(14.0, 6.0, vec![Chart::new(), Chart::new()]);
        assert_eq!(fig.panels.len(), 2);
        assert_eq!(fig.panels[1].frac, [0.5, 0.0, 0.5, 1.0]);
    }
}
