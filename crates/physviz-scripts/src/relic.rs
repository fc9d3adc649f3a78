// File: crates/physviz-scripts/src/relic.rs
// Summary: Thermal relic density study over (M, α_d) with freeze-out contours and the WIMP-miracle point.
// Notes:
// - With the freeze-out constants used here Ωh² stays far below 0.10 on the
//   whole grid, so the level contours and the allowed region come out empty.
//   They are still derived and drawn (as nothing); the scatter is skipped.

use std::path::PathBuf;

use anyhow::Result;
use physviz_core::annotate::{self, BoxAnchor, RegionMask};
use physviz_core::model::{self, PREDICTION_ALPHA, PREDICTION_MASS, SIGMA_THERMAL};
use physviz_core::style::{LineDash, MarkerShape, Style};
use physviz_core::theme::palette;
use physviz_core::types::DEFAULT_DPI;
use physviz_core::{
    sweep_1d, sweep_2d, Axis, Chart, Field1, Field2, Figure, LegendPosition, ParameterAxis,
    PredictionSummary, Series,
};
use tracing::{debug, warn};

#[derive(Clone, Debug)]
pub struct Config {
    /// W′ mass range, TeV.
    pub mass: (f64, f64),
    pub alpha_d: (f64, f64),
    pub samples: (usize, usize),
    pub levels: Vec<f64>,
    /// Allowed Ωh² window.
    pub allowed: (f64, f64),
    /// ⟨σv⟩ of the thermal reference line, GeV⁻².
    pub sigma_thermal: f64,
    pub prediction: (f64, f64),
    pub output: PathBuf,
    pub dpi: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mass: (2.0, 5.0),
            alpha_d: (0.5, 1.5),
            samples: (100, 100),
            levels: vec![0.10, 0.12, 0.14],
            allowed: (0.10, 0.14),
            sigma_thermal: SIGMA_THERMAL,
            prediction: (PREDICTION_MASS, PREDICTION_ALPHA),
            output: PathBuf::from("relic_density_calculation.png"),
            dpi: DEFAULT_DPI,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Relic {
    pub omega: Field2,
    /// α_d implied by the thermal cross-section, over the mass axis.
    pub thermal: Field1,
    pub allowed: RegionMask,
    /// Freeze-out parameter and Ωh² at the prediction point.
    pub x_f: f64,
    pub omega_h2: f64,
}

pub fn build(cfg: &Config) -> Result<Relic> {
    let m = ParameterAxis::linear("M", cfg.mass.0, cfg.mass.1, cfg.samples.0)?;
    let a = ParameterAxis::linear("alpha_d", cfg.alpha_d.0, cfg.alpha_d.1, cfg.samples.1)?;

    let omega = sweep_2d(model::relic_density, &m, &a);
    let thermal = sweep_1d(|mass| model::thermal_coupling(mass, cfg.sigma_thermal), &m);
    let allowed = annotate::region_mask(&omega, cfg.allowed.0, cfg.allowed.1);
    if allowed.is_empty() {
        warn!(lo = cfg.allowed.0, hi = cfg.allowed.1, "no grid point inside the allowed Ωh² window");
    }

    let (pm, pa) = cfg.prediction;
    let x_f = model::freeze_out_parameter(pm, pa);
    let omega_h2 = model::relic_density(pm, pa);
    debug!(x_f, omega_h2, "prediction point");
    Ok(Relic { omega, thermal, allowed, x_f, omega_h2 })
}

fn details_text(data: &Relic, cfg: &Config) -> String {
    [
        "Ωh² ≈ (1.07×10⁹ / M_Pl) · x_f / √g*".to_string(),
        "x_f ≈ ln[0.038 g M_Pl M ⟨σv⟩ / √g*]".to_string(),
        "⟨σv⟩ ≈ π α_d² / M²".to_string(),
        String::new(),
        format!("For M={} TeV, α={}:", cfg.prediction.0, cfg.prediction.1),
        format!("  x_f ≈ {:.1}", data.x_f),
        format!("  Ωh² ≈ {:.3}", data.omega_h2),
    ]
    .join("\n")
}

fn chart(data: &Relic, cfg: &Config) -> Chart {
    let mut chart = Chart::new().with_title("Dark Matter Relic Density");
    chart.x_axis = Axis::new("M_W′ (TeV)", cfg.mass.0, cfg.mass.1);
    chart.y_axis = Axis::new("α_d = g_d²/4π", cfg.alpha_d.0, cfg.alpha_d.1);

    chart.add_overlay(
        annotate::filled_region(&data.omega, cfg.allowed.0, cfg.allowed.1)
            .with_style(Style::color(palette::orange()).with_alpha(0.2)),
    );
    // Middle level emphasised, outer levels in orange
    let middle = cfg.levels.len() / 2;
    for (i, overlay) in annotate::contour(&data.omega, &cfg.levels).into_iter().enumerate() {
        let (color, width) = if i == middle { (palette::red(), 3.0) } else { (palette::orange(), 2.0) };
        let label = format!("Ωh² = {:.2}", cfg.levels[i]);
        chart.add_overlay(overlay.with_style(Style::color(color).with_width(width)).with_inline_label(label));
    }

    let (pm, pa) = cfg.prediction;
    chart.add_overlay(
        annotate::intersection_marker(pm, pa)
            .with_style(Style::color(palette::red()).with_marker(MarkerShape::Star, 300.0))
            .with_label(format!("Prediction: M={pm} TeV, α={pa}")),
    );
    chart.add_overlay(
        annotate::text(pm + 0.05, pa + 0.03, "WIMP Miracle")
            .with_style(Style::color(palette::red()).with_font_size(12.0)),
    );
    chart.add_series(
        Series::from_field(&data.thermal)
            .with_style(Style::color(palette::blue()).with_width(2.0).with_dash(LineDash::Dashed))
            .with_label("⟨σv⟩ = 1 pb (thermal)"),
    );
    if !data.allowed.is_empty() {
        chart.add_overlay(
            annotate::scatter(data.allowed.points(&data.omega))
                .with_style(Style::color(palette::green()).with_alpha(0.1).with_marker(MarkerShape::Circle, 1.0))
                .with_label("Ωh² = 0.12±0.02"),
        );
    }
    chart.add_overlay(
        annotate::text_box(0.02, 0.98, details_text(data, cfg), BoxAnchor::Top)
            .with_style(Style::color(palette::wheat()).with_alpha(0.8).with_font_size(10.0)),
    );
    chart.legend = LegendPosition::UpperRight;
    chart
}

pub fn figure(data: &Relic, cfg: &Config) -> Figure {
    Figure::single(12.0, 10.0, chart(data, cfg)).with_dpi(cfg.dpi)
}

pub fn summary(data: &Relic, cfg: &Config) -> PredictionSummary {
    PredictionSummary::new("Relic density prediction for our parameters")
        .text("Figure", cfg.output.display().to_string())
        .blank()
        .text("M_W′", format!("{} TeV", cfg.prediction.0))
        .text("α_d", format!("{}", cfg.prediction.1))
        .value("Freeze-out parameter: x_f", data.x_f, 1)
        .value("Ωh²", data.omega_h2, 3)
        .text("Planck measurement", "Ωh² = 0.120 ± 0.001")
}

pub fn run(cfg: &Config) -> Result<Figure> {
    let data = build(cfg)?;
    let fig = figure(&data, cfg);
    crate::render(&fig, &cfg.output)?;
    summary(&data, cfg).report();
    Ok(fig)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Config {
        Config { samples: (25, 25), ..Config::default() }
    }

    #[test]
    fn allowed_region_is_empty_with_stock_constants() {
        let d = build(&small()).unwrap();
        assert!(d.allowed.is_empty());
        assert!(d.omega.values.iter().all(|&v| v < 1e-8));
    }

    #[test]
    fn summary_rounds_like_the_text_box() {
        let cfg = small();
        let d = build(&cfg).unwrap();
        let s = summary(&d, &cfg);
        assert_eq!(s.get("Freeze-out parameter: x_f"), Some("40.9"));
        assert_eq!(s.get("Ωh²"), Some("0.000"));
        assert!(details_text(&d, &cfg).contains("x_f ≈ 40.9"));
    }
}
