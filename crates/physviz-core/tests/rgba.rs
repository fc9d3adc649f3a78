// File: crates/physviz-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use physviz_core::annotate::{self, Orientation};
use physviz_core::style::Style;
use physviz_core::theme::palette;
use physviz_core::{Axis, Chart, RenderOptions, Series, SeriesType, Theme};

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 0.0), (4.0, 4.0)]));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Check background alpha in top-left pixel (RGBA)
    let a = px[3];
    assert_eq!(a, 255);
}

#[test]
fn span_fills_plot_interior() {
    let mut chart = Chart::new();
    chart.grid = false;
    chart.x_axis = Axis::new("X", 0.0, 1.0);
    chart.y_axis = Axis::new("Y", 0.0, 1.0);
    chart.add_overlay(
        annotate::span(Orientation::Horizontal, 0.0, 1.0).with_style(Style::color(palette::red())),
    );

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");

    // Centre of the plot area
    let ins = opts.insets;
    let cx = (ins.left + (w as f32 - ins.hsum()) * 0.5) as usize;
    let cy = (ins.top + (h as f32 - ins.vsum()) * 0.5) as usize;
    let i = cy * stride + cx * 4;
    assert_eq!(&px[i..i + 4], &[255, 0, 0, 255]);
}

#[test]
fn dark_theme_paints_page_and_plot() {
    let mut chart = Chart::new();
    chart.grid = false;
    chart.x_axis = Axis::new("X", 0.0, 1.0);
    chart.y_axis = Axis::new("Y", 0.0, 1.0);

    let opts = RenderOptions { theme: Theme::dark(), draw_labels: false, ..RenderOptions::default() };
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    let bg = Theme::dark().background;
    assert_eq!(&px[0..4], &[bg.r(), bg.g(), bg.b(), 255]);

    let ins = opts.insets;
    let cx = (ins.left + (w as f32 - ins.hsum()) * 0.5) as usize;
    let cy = (ins.top + (h as f32 - ins.vsum()) * 0.5) as usize;
    let i = cy * stride + cx * 4;
    let plot = Theme::dark().plot_background;
    assert_eq!(&px[i..i + 4], &[plot.r(), plot.g(), plot.b(), 255]);
}
