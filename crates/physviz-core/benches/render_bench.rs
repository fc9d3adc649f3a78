use anyhow::Result;
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use physviz_core::annotate::{contour, filled_region, intersection_marker};
use physviz_core::model::relic_density_constraint;
use physviz_core::style::Style;
use physviz_core::theme::palette;
use physviz_core::{sweep_2d, Axis, Chart, Figure, ParameterAxis, RenderOptions};

fn build_chart(n: usize) -> Chart {
    let m = ParameterAxis::linear("M", 2.5, 4.0, n).expect("mass axis");
    let a = ParameterAxis::linear("alpha", 0.5, 1.2, n).expect("coupling axis");
    let field = sweep_2d(relic_density_constraint, &m, &a);

    let mut ch = Chart::new();
    ch.x_axis = Axis::new("M", 2.5, 4.0);
    ch.y_axis = Axis::new("alpha", 0.5, 1.2);
    ch.add_overlay(filled_region(&field, 0.10, 0.14).with_style(Style::color(palette::blue()).with_alpha(0.3)));
    ch.add_overlays(contour(&field, &[0.12]));
    ch.add_overlay(intersection_marker(3.2, 0.82));
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[100usize, 200usize] {
        group.bench_function(format!("constraint_{n}"), |b| {
            let fig = Figure::single(8.0, 5.0, build_chart(n)).with_dpi(100.0);
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = fig.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
