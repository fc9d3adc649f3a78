// File: crates/physviz-core/src/chart.rs
// Summary: Chart panel (axes, series, overlays, legend) and its Skia drawing pipeline.

use anyhow::Result;
use skia_safe as skia;

use crate::annotate::{BoxAnchor, Orientation, Overlay, OverlayKind};
use crate::axis::Axis;
use crate::bounds::DataBounds;
use crate::geometry::RectF;
use crate::raster;
use crate::scale::AxisScale;
use crate::series::{Series, SeriesType};
use crate::style::{MarkerShape, Style};
use crate::text::TextShaper;
use crate::theme::{with_alpha, Theme};
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Logical canvas width.
    pub width: i32,
    /// Logical canvas height.
    pub height: i32,
    /// Output pixels per logical unit.
    pub scale: f32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text rendering depends on installed fonts; tests switch it off.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            scale: 1.0,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendPosition {
    UpperRight,
    UpperLeft,
    Hidden,
}

/// Font sizes for one panel, logical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextSizes {
    pub title: f32,
    pub label: f32,
    pub tick: f32,
    pub legend: f32,
}

impl Default for TextSizes {
    fn default() -> Self {
        Self { title: 16.0, label: 14.0, tick: 10.0, legend: 10.0 }
    }
}

impl TextSizes {
    /// Compact sizes for inset panels.
    pub fn small() -> Self {
        Self { title: 10.0, label: 8.0, tick: 7.0, legend: 7.0 }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub series: Vec<Series>,
    pub overlays: Vec<Overlay>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub title: Option<String>,
    pub legend: LegendPosition,
    pub grid: bool,
    pub text: TextSizes,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            overlays: Vec::new(),
            x_axis: Axis::auto("x"),
            y_axis: Axis::auto("y"),
            title: None,
            legend: LegendPosition::UpperRight,
            grid: true,
            text: TextSizes::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn add_overlay(&mut self, overlay: Overlay) {
        self.overlays.push(overlay);
    }

    pub fn add_overlays(&mut self, overlays: impl IntoIterator<Item = Overlay>) {
        self.overlays.extend(overlays);
    }

    /// Fit both axes to the data, padding y by `margin` of its span.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let b = DataBounds::from_chart(self).pad_y(margin, self.y_axis.is_log());
        self.x_axis.min = b.x_min;
        self.x_axis.max = b.x_max;
        self.y_axis.min = b.y_min;
        self.y_axis.max = b.y_max;
    }

    /// Axes with auto ranges resolved against the current data.
    pub fn resolved_axes(&self) -> (Axis, Axis) {
        let mut x = self.x_axis.clone();
        let mut y = self.y_axis.clone();
        if x.auto || y.auto {
            let b = DataBounds::from_chart(self).pad_y(0.05, y.is_log());
            if x.auto {
                x.min = b.x_min;
                x.max = b.x_max;
            }
            if y.auto {
                y.min = b.y_min;
                y.max = b.y_max;
            }
        }
        (x, y)
    }

    /// Render this chart alone to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        raster::write_file(output_png_path.as_ref(), &bytes)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        raster::encode_png(&mut surface)
    }

    /// Render to unpremultiplied RGBA8: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        raster::read_rgba8(&mut surface)
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let shaper = TextShaper::new();
        let page = RectF::from_ltwh(0.0, 0.0, opts.width as f32, opts.height as f32);
        raster::draw_surface(opts, |canvas| self.draw_into(canvas, page, &opts.insets, opts, &shaper))
    }

    /// Draw the panel into `panel` (logical units) on an existing canvas.
    pub fn draw_into(
        &self,
        canvas: &skia::Canvas,
        panel: RectF,
        insets: &Insets,
        opts: &RenderOptions,
        shaper: &TextShaper,
    ) {
        let theme = &opts.theme;
        let (x_axis, y_axis) = self.resolved_axes();
        let plot = panel.inset(insets);
        let sx = AxisScale::for_axis(&x_axis, plot.left, plot.right);
        let sy = AxisScale::for_axis(&y_axis, plot.bottom, plot.top);
        let view = PlotView { plot, sx, sy };

        let mut bg = skia::Paint::default();
        bg.set_color(theme.plot_background);
        canvas.draw_rect(plot.to_skia(), &bg);

        if self.grid {
            draw_grid(canvas, &view, &x_axis, &y_axis, theme);
        }

        // Data layers, clipped to the plot area
        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        let mut layers: Vec<(u8, Layer)> = self
            .series
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| (1, Layer::Series(s)))
            .chain(self.overlays.iter().map(|o| (o.z(), Layer::Overlay(o))))
            .collect();
        layers.sort_by_key(|(z, _)| *z);
        for (_, layer) in &layers {
            match layer {
                Layer::Series(s) => draw_series(canvas, &view, s),
                Layer::Overlay(o) => draw_overlay(canvas, &view, o),
            }
        }
        canvas.restore();

        draw_frame(canvas, &view, &x_axis, &y_axis, theme);

        if opts.draw_labels {
            self.draw_labels(canvas, &view, panel, &x_axis, &y_axis, theme, shaper);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_labels(
        &self,
        canvas: &skia::Canvas,
        view: &PlotView,
        panel: RectF,
        x_axis: &Axis,
        y_axis: &Axis,
        theme: &Theme,
        shaper: &TextShaper,
    ) {
        let plot = view.plot;
        let sizes = &self.text;

        for t in x_axis.ticks() {
            let x = view.sx.to_px(t);
            shaper.draw_centered(canvas, &x_axis.tick_label(t), x, plot.bottom + 6.0, sizes.tick, theme.tick, true);
        }
        for t in y_axis.ticks() {
            let y = view.sy.to_px(t);
            shaper.draw_right_middle(canvas, &y_axis.tick_label(t), plot.left - 6.0, y, sizes.tick, theme.tick);
        }

        let cx = (plot.left + plot.right) * 0.5;
        shaper.draw_centered(canvas, &x_axis.label, cx, plot.bottom + 10.0 + sizes.tick * 1.4, sizes.label, theme.axis_label, false);
        let label_x = panel.left + sizes.label * 0.9;
        shaper.draw_vertical(canvas, &y_axis.label, label_x, (plot.top + plot.bottom) * 0.5, sizes.label, theme.axis_label);

        if let Some(title) = &self.title {
            let (_, h) = shaper.measure(title, sizes.title, false);
            shaper.draw_centered(canvas, title, cx, plot.top - h - 6.0, sizes.title, theme.title, false);
        }

        for o in &self.overlays {
            match &o.kind {
                OverlayKind::Contour { segments, inline_label: Some(text), .. } if !segments.is_empty() => {
                    // Label at the middle segment of the level
                    let [a, b] = segments[segments.len() / 2];
                    let x = view.sx.to_px(0.5 * (a.0 + b.0));
                    let y = view.sy.to_px(0.5 * (a.1 + b.1));
                    if plot.contains(x, y) {
                        shaper.draw_left(canvas, text, x + 3.0, y - 3.0, sizes.legend, with_alpha(o.style.color, 1.0));
                    }
                }
                OverlayKind::Text { x, y, text } => {
                    let px = view.sx.to_px(*x);
                    let py = view.sy.to_px(*y);
                    shaper.draw_left(canvas, text, px, py, o.style.font_size, o.style.resolved_color());
                }
                OverlayKind::TextBox { fx, fy, text, anchor } => {
                    draw_text_box(canvas, shaper, plot, (*fx, *fy), text, *anchor, &o.style, theme);
                }
                _ => {}
            }
        }

        if self.legend != LegendPosition::Hidden {
            draw_legend(canvas, shaper, plot, self, theme);
        }
    }
}

enum Layer<'a> {
    Series(&'a Series),
    Overlay(&'a Overlay),
}

struct PlotView {
    plot: RectF,
    sx: AxisScale,
    sy: AxisScale,
}

impl PlotView {
    #[inline]
    fn px(&self, x: f64, y: f64) -> (f32, f32) {
        (self.sx.to_px(x), self.sy.to_px(y))
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, view: &PlotView, x_axis: &Axis, y_axis: &Axis, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(0.8);

    let p = view.plot;
    for t in x_axis.ticks() {
        let x = view.sx.to_px(t);
        canvas.draw_line((x, p.top), (x, p.bottom), &paint);
    }
    for t in y_axis.ticks() {
        let y = view.sy.to_px(t);
        canvas.draw_line((p.left, y), (p.right, y), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, view: &PlotView, x_axis: &Axis, y_axis: &Axis, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.0);

    let p = view.plot;
    canvas.draw_rect(p.to_skia(), &axis_paint);

    // Outward tick marks
    for t in x_axis.ticks() {
        let x = view.sx.to_px(t);
        canvas.draw_line((x, p.bottom), (x, p.bottom + 4.0), &axis_paint);
    }
    for t in y_axis.ticks() {
        let y = view.sy.to_px(t);
        canvas.draw_line((p.left - 4.0, y), (p.left, y), &axis_paint);
    }
}

/// Polyline through `points`, breaking at non-finite values.
fn polyline(view: &PlotView, points: &[(f64, f64)]) -> skia::Path {
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for &(x, y) in points {
        if !(x.is_finite() && y.is_finite()) {
            pen_down = false;
            continue;
        }
        let p = view.px(x, y);
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }
    path
}

fn draw_series(canvas: &skia::Canvas, view: &PlotView, series: &Series) {
    match series.series_type {
        SeriesType::Line => {
            if series.data_xy.len() < 2 {
                return;
            }
            let path = polyline(view, &series.data_xy);
            canvas.draw_path(&path, &series.style.stroke_paint());
        }
        SeriesType::Scatter => draw_points(canvas, view, &series.data_xy, &series.style),
    }
}

fn draw_points(canvas: &skia::Canvas, view: &PlotView, points: &[(f64, f64)], style: &Style) {
    let paint = style.fill_paint();
    let r = style.marker_radius();
    for &(x, y) in points {
        let c = view.px(x, y);
        match style.marker {
            MarkerShape::Circle => {
                canvas.draw_circle(c, r, &paint);
            }
            MarkerShape::Star => {
                canvas.draw_path(&star_path(c, r), &paint);
            }
        }
    }
}

/// Five-pointed star centred on `c` with outer radius `r`.
fn star_path(c: (f32, f32), r: f32) -> skia::Path {
    let mut path = skia::Path::new();
    let inner = r * 0.382;
    for i in 0..10 {
        let radius = if i % 2 == 0 { r } else { inner };
        let angle = (-90.0 + 36.0 * i as f32).to_radians();
        let p = (c.0 + radius * angle.cos(), c.1 + radius * angle.sin());
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close();
    path
}

fn rect_path(path: &mut skia::Path, a: (f32, f32), b: (f32, f32)) {
    path.move_to((a.0, a.1));
    path.line_to((b.0, a.1));
    path.line_to((b.0, b.1));
    path.line_to((a.0, b.1));
    path.close();
}

fn draw_overlay(canvas: &skia::Canvas, view: &PlotView, overlay: &Overlay) {
    let style = &overlay.style;
    let p = view.plot;
    match &overlay.kind {
        OverlayKind::Threshold { orientation: Orientation::Horizontal, value } => {
            let y = view.sy.to_px(*value);
            canvas.draw_line((p.left, y), (p.right, y), &style.stroke_paint());
        }
        OverlayKind::Threshold { orientation: Orientation::Vertical, value } => {
            let x = view.sx.to_px(*value);
            canvas.draw_line((x, p.top), (x, p.bottom), &style.stroke_paint());
        }
        OverlayKind::Span { orientation, lo, hi } => {
            let mut path = skia::Path::new();
            match orientation {
                Orientation::Horizontal => {
                    rect_path(&mut path, (p.left, view.sy.to_px(*hi)), (p.right, view.sy.to_px(*lo)))
                }
                Orientation::Vertical => {
                    rect_path(&mut path, (view.sx.to_px(*lo), p.top), (view.sx.to_px(*hi), p.bottom))
                }
            }
            canvas.draw_path(&path, &style.fill_paint());
        }
        OverlayKind::Band { xs, lower, upper } => {
            if xs.len() < 2 {
                return;
            }
            let mut path = skia::Path::new();
            path.move_to(view.px(xs[0], upper[0]));
            for (&x, &y) in xs.iter().zip(upper).skip(1) {
                path.line_to(view.px(x, y));
            }
            for (&x, &y) in xs.iter().zip(lower).rev() {
                path.line_to(view.px(x, y));
            }
            path.close();
            canvas.draw_path(&path, &style.fill_paint());
        }
        OverlayKind::Contour { segments, .. } => {
            if segments.is_empty() {
                return;
            }
            let mut path = skia::Path::new();
            for [a, b] in segments {
                path.move_to(view.px(a.0, a.1));
                path.line_to(view.px(b.0, b.1));
            }
            canvas.draw_path(&path, &style.stroke_paint());
        }
        OverlayKind::Cells { rects } => {
            if rects.is_empty() {
                return;
            }
            // One path so overlapping cell edges do not stack alpha
            let mut path = skia::Path::new();
            for r in rects {
                rect_path(&mut path, view.px(r[0], r[3]), view.px(r[2], r[1]));
            }
            canvas.draw_path(&path, &style.fill_paint());
        }
        OverlayKind::Scatter { points } => draw_points(canvas, view, points, style),
        OverlayKind::Marker { x, y } => {
            draw_points(canvas, view, &[(*x, *y)], style);
        }
        // Text is drawn with the labels, outside the clip
        OverlayKind::Text { .. } | OverlayKind::TextBox { .. } => {}
    }
}

/// Boxed, rounded text anchored at an area fraction `(fx, fy)` (bottom-left origin).
#[allow(clippy::too_many_arguments)]
pub(crate) fn draw_text_box(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    area: RectF,
    (fx, fy): (f64, f64),
    text: &str,
    anchor: BoxAnchor,
    style: &Style,
    theme: &Theme,
) {
    let pad = style.font_size * 0.5;
    let (w, h) = shaper.measure(text, style.font_size, false);
    let x = area.left + fx as f32 * area.width();
    let y = area.bottom - fy as f32 * area.height();
    let top = match anchor {
        BoxAnchor::Top => y,
        BoxAnchor::Bottom => y - h - 2.0 * pad,
    };
    let rect = skia::Rect::from_xywh(x, top, w + 2.0 * pad, h + 2.0 * pad);

    canvas.draw_round_rect(rect, pad, pad, &style.fill_paint());
    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.axis_line);
    canvas.draw_round_rect(rect, pad, pad, &border);

    shaper.draw_top_left(canvas, text, x + pad, top + pad, style.font_size, theme.axis_label);
}

enum Swatch {
    Line,
    Fill,
    Marker,
}

fn legend_entries(chart: &Chart) -> Vec<(&str, &Style, Swatch)> {
    let mut out = Vec::new();
    // Nothing drawn, nothing listed
    for s in chart.series.iter().filter(|s| !s.is_empty()) {
        if let Some(label) = &s.label {
            let swatch = match s.series_type {
                SeriesType::Line => Swatch::Line,
                SeriesType::Scatter => Swatch::Marker,
            };
            out.push((label.as_str(), &s.style, swatch));
        }
    }
    for o in &chart.overlays {
        let Some(label) = &o.label else { continue };
        let swatch = match o.kind {
            OverlayKind::Threshold { .. } | OverlayKind::Contour { .. } => Swatch::Line,
            OverlayKind::Span { .. } | OverlayKind::Band { .. } | OverlayKind::Cells { .. } => Swatch::Fill,
            OverlayKind::Scatter { .. } | OverlayKind::Marker { .. } => Swatch::Marker,
            OverlayKind::Text { .. } | OverlayKind::TextBox { .. } => continue,
        };
        out.push((label.as_str(), &o.style, swatch));
    }
    out
}

fn draw_legend(canvas: &skia::Canvas, shaper: &TextShaper, plot: RectF, chart: &Chart, theme: &Theme) {
    let entries = legend_entries(chart);
    if entries.is_empty() {
        return;
    }
    let size = chart.text.legend;
    let row_h = size * 1.7;
    let swatch_w = size * 2.8;
    let pad = size * 0.6;
    let text_w = entries
        .iter()
        .map(|(label, _, _)| shaper.measure(label, size, false).0)
        .fold(0.0f32, f32::max);
    let box_w = pad * 3.0 + swatch_w + text_w;
    let box_h = pad * 2.0 + row_h * entries.len() as f32;
    let left = match chart.legend {
        LegendPosition::UpperLeft => plot.left + pad,
        _ => plot.right - pad - box_w,
    };
    let top = plot.top + pad;
    let rect = skia::Rect::from_xywh(left, top, box_w, box_h);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(theme.legend_fill);
    canvas.draw_round_rect(rect, 4.0, 4.0, &fill);
    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_color(theme.legend_border);
    canvas.draw_round_rect(rect, 4.0, 4.0, &border);

    for (i, (label, style, swatch)) in entries.iter().enumerate() {
        let cy = top + pad + row_h * (i as f32 + 0.5);
        let x0 = left + pad;
        match swatch {
            Swatch::Line => {
                canvas.draw_line((x0, cy), (x0 + swatch_w, cy), &style.stroke_paint());
            }
            Swatch::Fill => {
                let r = skia::Rect::from_xywh(x0, cy - size * 0.35, swatch_w, size * 0.7);
                canvas.draw_rect(r, &style.fill_paint());
            }
            Swatch::Marker => {
                // Keep faint scatter swatches visible
                let mut s = **style;
                s.alpha = s.alpha.max(0.6);
                s.marker_size = s.marker_size.clamp(16.0, 120.0);
                let paint = s.fill_paint();
                let c = (x0 + swatch_w * 0.5, cy);
                match s.marker {
                    MarkerShape::Circle => {
                        canvas.draw_circle(c, s.marker_radius(), &paint);
                    }
                    MarkerShape::Star => {
                        canvas.draw_path(&star_path(c, s.marker_radius()), &paint);
                    }
                }
            }
        }
        let (_, h) = shaper.measure(label, size, false);
        shaper.draw_top_left(canvas, label, x0 + swatch_w + pad, cy - h * 0.5, size, theme.axis_label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_skips_unlabelled_and_text() {
        let mut chart = Chart::new();
        chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 0.0), (1.0, 1.0)]).with_label("a"));
        chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 1.0), (1.0, 0.0)]));
        chart.add_overlay(crate::annotate::text(0.5, 0.5, "note").with_label("ignored"));
        chart.add_overlay(crate::annotate::span(Orientation::Horizontal, 0.2, 0.4).with_label("b"));
        let labels: Vec<&str> = legend_entries(&chart).into_iter().map(|(l, _, _)| l).collect();
        assert_eq!(labels, vec!["a", "b"]);
    }

    #[test]
    fn legend_skips_empty_series() {
        let mut chart = Chart::new();
        chart.add_series(Series::with_data(SeriesType::Line, Vec::new()).with_label("empty"));
        chart.add_series(Series::with_data(SeriesType::Scatter, vec![(0.5, 0.5)]).with_label("point"));
        let labels: Vec<&str> = legend_entries(&chart).into_iter().map(|(l, _, _)| l).collect();
        assert_eq!(labels, vec!["point"]);
    }

    #[test]
    fn auto_axes_follow_data() {
        let mut chart = Chart::new();
        chart.x_axis = Axis::auto("x");
        chart.y_axis = Axis::new("y", -1.0, 1.0);
        chart.add_series(Series::with_data(SeriesType::Line, vec![(2.0, 0.0), (4.0, 10.0)]));
        let (x, y) = chart.resolved_axes();
        assert_eq!((x.min, x.max), (2.0, 4.0));
        assert_eq!((y.min, y.max), (-1.0, 1.0));
    }
}
