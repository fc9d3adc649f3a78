// File: crates/physviz-scripts/tests/studies.rs
// Purpose: End-to-end study runs at low DPI: PNG written with the figure's pixel size.

use std::path::{Path, PathBuf};

use approx::assert_relative_eq;
use physviz_scripts::{birefringence, convergence, dijet, relic};

const DPI: f32 = 20.0;

fn out(name: &str) -> PathBuf {
    PathBuf::from("target/test_out").join(name)
}

fn png_size(path: &Path) -> (u32, u32) {
    let bytes = std::fs::read(path).expect("read png");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    image::load_from_memory(&bytes).expect("decode png").to_rgba8().dimensions()
}

#[test]
fn birefringence_end_to_end() {
    let cfg = birefringence::Config { output: out("birefringence_prediction.png"), dpi: DPI, ..Default::default() };
    let fig = birefringence::run(&cfg).expect("run birefringence");
    assert_eq!(fig.panels.len(), 2);
    assert_eq!(png_size(&cfg.output), (280, 120));
}

#[test]
fn dijet_end_to_end() {
    let cfg = dijet::Config { output: out("dijet_angular_fig3.png"), dpi: DPI, ..Default::default() };
    let data = dijet::build(&cfg).expect("build dijet");
    for shape in [&data.qcd, &data.wprime, &data.contact] {
        assert_relative_eq!(shape.trapezoid(), 1.0, max_relative = 0.01);
    }
    let fig = dijet::run(&cfg).expect("run dijet");
    assert_eq!(fig.panels.len(), 2);
    assert_eq!(png_size(&cfg.output), (200, 120));
}

#[test]
fn relic_density_end_to_end() {
    let cfg = relic::Config {
        samples: (40, 40),
        output: out("relic_density_calculation.png"),
        dpi: DPI,
        ..Default::default()
    };
    let data = relic::build(&cfg).expect("build relic");
    assert_relative_eq!(data.x_f, 40.88117804894836, max_relative = 0.01);
    assert_relative_eq!(data.omega_h2, 3.470271130159e-10, max_relative = 0.01);
    relic::run(&cfg).expect("run relic");
    assert_eq!(png_size(&cfg.output), (240, 200));
}

#[test]
fn triple_convergence_end_to_end() {
    let cfg = convergence::Config {
        samples: (80, 80),
        output: out("triple_convergence_fig2.png"),
        dpi: DPI,
        ..Default::default()
    };
    let data = convergence::build(&cfg).expect("build convergence");
    assert!(data.viable_fraction() > 0.0 && data.viable_fraction() < 1.0);
    convergence::run(&cfg).expect("run convergence");
    assert_eq!(png_size(&cfg.output), (200, 160));
}

#[cfg(not(feature = "window"))]
#[test]
fn show_returns_immediately_when_headless() {
    let cfg = dijet::Config { dpi: DPI, ..Default::default() };
    let data = dijet::build(&cfg).expect("build dijet");
    let fig = dijet::figure(&data, &cfg);
    physviz_scripts::show(&fig, "Dijet").expect("headless show");
}
