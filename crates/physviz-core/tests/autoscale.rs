// File: crates/physviz-core/tests/autoscale.rs
// Purpose: Validate autoscale over series mixed with field-derived overlays.

use physviz_core::annotate;
use physviz_core::{Chart, Field1, Series, SeriesType};

#[test]
fn autoscale_series_and_band() {
    let mut chart = Chart::new();

    // XY series
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 1.0), (5.0, 3.0)]));

    // Band reaching beyond the series on both ends
    let field = Field1::new(vec![2.0, 3.0], vec![2.0, 5.5]).expect("field");
    chart.add_overlay(annotate::band(&field, 0.5));

    chart.autoscale_axes(0.0);

    // X spans 0..5 from the line vs 2..3 from the band => expect ~0..5
    assert!(chart.x_axis.min <= 0.0 + 1e-9);
    assert!(chart.x_axis.max >= 5.0 - 1e-9);

    // Y min from the line (1.0), max from the band upper edge (6.0)
    assert!(chart.y_axis.min <= 1.0 + 1e-9);
    assert!(chart.y_axis.max >= 6.0 - 1e-9);
}

#[test]
fn autoscale_ignores_empty_contours() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data(SeriesType::Line, vec![(1.0, 1.0), (2.0, 2.0)]));
    let x = physviz_core::ParameterAxis::linear("x", -10.0, 10.0, 5).expect("axis");
    let y = physviz_core::ParameterAxis::linear("y", -10.0, 10.0, 5).expect("axis");
    let field = physviz_core::sweep_2d(|_, _| 0.0, &x, &y);
    chart.add_overlays(annotate::contour(&field, &[1.0]));

    chart.autoscale_axes(0.0);
    assert!((chart.x_axis.min - 1.0).abs() < 1e-9);
    assert!((chart.x_axis.max - 2.0).abs() < 1e-9);
}
