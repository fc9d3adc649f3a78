// File: crates/physviz-core/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing PNGs for a chart and a multi-panel figure.

use physviz_core::annotate::{self, Orientation};
use physviz_core::{Axis, Chart, Figure, RenderOptions, Series, SeriesType};

fn sample_chart() -> Chart {
    let mut chart = Chart::new().with_title("smoke");
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data(
        SeriesType::Line,
        vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)],
    ).with_label("data"));
    chart.add_overlay(annotate::threshold(Orientation::Horizontal, 2.0).with_label("threshold"));
    chart.add_overlay(annotate::span(Orientation::Vertical, 1.0, 2.0));
    chart.add_overlay(annotate::intersection_marker(3.0, 3.0));
    chart.add_overlay(annotate::text(3.05, 3.05, "point"));
    chart
}

#[test]
fn render_smoke_png() {
    let chart = sample_chart();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn figure_png_has_dpi_size() {
    let mut fig = Figure::row(4.0, 2.0, vec![sample_chart(), sample_chart()]).with_dpi(50.0);
    fig.add_inset(sample_chart(), [0.65, 0.65, 0.25, 0.25]);
    fig.add_text_box(physviz_core::figure_text(0.02, 0.02, "note"));

    let bytes = fig.render_to_png_bytes(&RenderOptions::default()).expect("render figure");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (200, 100));
}
