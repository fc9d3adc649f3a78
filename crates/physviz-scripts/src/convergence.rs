// File: crates/physviz-scripts/src/convergence.rs
// Summary: Triple-convergence study: relic-density, coupling-band and HL-LHC reach constraints on (M, α_d).

use std::path::PathBuf;

use anyhow::Result;
use physviz_core::annotate::{self, RegionMask};
use physviz_core::model::{self, HL_LHC_LUMINOSITY, OMEGA_TARGET, PREDICTION_ALPHA, PREDICTION_MASS};
use physviz_core::style::{LineDash, MarkerShape, Style};
use physviz_core::theme::palette;
use physviz_core::types::DEFAULT_DPI;
use physviz_core::{
    sweep_2d, Axis, Chart, Field2, Figure, LegendPosition, ParameterAxis, PredictionSummary,
};

#[derive(Clone, Debug)]
pub struct Config {
    pub mass: (f64, f64),
    pub alpha_d: (f64, f64),
    pub samples: (usize, usize),
    pub omega_window: (f64, f64),
    /// α_d = 0.82 ± 0.15 from the cosmological-constant solution.
    pub coupling_band: (f64, f64),
    /// Integrated luminosity, fb⁻¹.
    pub luminosity: f64,
    pub prediction: (f64, f64),
    pub output: PathBuf,
    pub dpi: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mass: (2.5, 4.0),
            alpha_d: (0.5, 1.2),
            samples: (200, 200),
            omega_window: (0.10, 0.14),
            coupling_band: (0.67, 0.97),
            luminosity: HL_LHC_LUMINOSITY,
            prediction: (PREDICTION_MASS, PREDICTION_ALPHA),
            output: PathBuf::from("triple_convergence_fig2.png"),
            dpi: DEFAULT_DPI,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Convergence {
    pub omega: Field2,
    /// 1 where the dilepton channel reaches 5σ, 0 elsewhere.
    pub reach: Field2,
    /// Nodes satisfying all three constraints.
    pub viable: RegionMask,
}

impl Convergence {
    /// Share of grid nodes inside all three constraints.
    pub fn viable_fraction(&self) -> f64 {
        let (rows, cols) = self.viable.shape();
        self.viable.count() as f64 / (rows * cols).max(1) as f64
    }
}

pub fn build(cfg: &Config) -> Result<Convergence> {
    let m = ParameterAxis::linear("M", cfg.mass.0, cfg.mass.1, cfg.samples.0)?;
    let a = ParameterAxis::linear("alpha_d", cfg.alpha_d.0, cfg.alpha_d.1, cfg.samples.1)?;
    let lumi = cfg.luminosity;

    let omega = sweep_2d(model::relic_density_constraint, &m, &a);
    let reach = sweep_2d(
        |mass, alpha| if model::lhc_discoverable(mass, alpha, lumi) { 1.0 } else { 0.0 },
        &m,
        &a,
    );
    let coupling = sweep_2d(|_, alpha| alpha, &m, &a);

    let viable = annotate::region_mask(&omega, cfg.omega_window.0, cfg.omega_window.1)
        .and(&annotate::region_mask(&coupling, cfg.coupling_band.0, cfg.coupling_band.1))?
        .and(&annotate::region_mask(&reach, 1.0, 1.0))?;
    Ok(Convergence { omega, reach, viable })
}

fn chart(data: &Convergence, cfg: &Config) -> Chart {
    let mut chart = Chart::new().with_title("Triple Convergence of Constraints");
    chart.x_axis = Axis::new("M_W′ (TeV)", cfg.mass.0, cfg.mass.1);
    chart.y_axis = Axis::new("α_d = g_d²/4π", cfg.alpha_d.0, cfg.alpha_d.1);

    let orange = Style::color(palette::orange());
    chart.add_overlay(
        annotate::filled_region(&data.omega, cfg.omega_window.0, cfg.omega_window.1)
            .with_style(orange.with_alpha(0.3))
            .with_label("Ωh² = 0.12±0.02"),
    );
    chart.add_overlays(
        annotate::contour(&data.omega, &[OMEGA_TARGET])
            .into_iter()
            .map(|o| o.with_style(orange.with_width(2.0))),
    );
    chart.add_overlay(
        annotate::band_constant(&data.omega.xs, cfg.coupling_band.0, cfg.coupling_band.1)
            .with_style(Style::color(palette::blue()).with_alpha(0.3))
            .with_label("α_d = 0.82±0.15 (Λ solution)"),
    );
    // Boolean field: the 0.5 level traces the discovery boundary
    chart.add_overlays(annotate::contour(&data.reach, &[0.5]).into_iter().map(|o| {
        o.with_style(Style::color(palette::green()).with_width(2.0).with_dash(LineDash::Dashed))
            .with_label("HL-LHC 5σ reach")
    }));

    let (pm, pa) = cfg.prediction;
    chart.add_overlay(
        annotate::intersection_marker(pm, pa)
            .with_style(Style::color(palette::red()).with_marker(MarkerShape::Star, 200.0))
            .with_label(format!("Prediction (M={pm} TeV, α={pa})")),
    );
    chart.add_overlay(
        annotate::text(pm + 0.05, pa + 0.03, "Triple Convergence")
            .with_style(Style::color(palette::red()).with_font_size(12.0)),
    );
    chart.legend = LegendPosition::UpperRight;
    chart
}

pub fn figure(data: &Convergence, cfg: &Config) -> Figure {
    Figure::single(10.0, 8.0, chart(data, cfg)).with_dpi(cfg.dpi)
}

pub fn summary(data: &Convergence, cfg: &Config) -> PredictionSummary {
    let (pm, pa) = cfg.prediction;
    let significance = model::discovery_significance(pm, pa, cfg.luminosity);
    let reach = if model::lhc_discoverable(pm, pa, cfg.luminosity) { "yes" } else { "no" };
    PredictionSummary::new(format!("Triple convergence at M = {pm} TeV, α_d = {pa}"))
        .text("Figure", cfg.output.display().to_string())
        .blank()
        .value("Ωh² constraint", model::relic_density_constraint(pm, pa), 3)
        .value("HL-LHC significance (σ)", significance, 2)
        .text("Within 5σ reach", reach)
        .value("Grid fraction satisfying all constraints", data.viable_fraction(), 3)
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

    #[test]
    fn viable_nodes_satisfy_every_constraint() {
        let cfg = Config { samples: (60, 60), ..Config::default() };
        let d = build(&cfg).unwrap();
        assert!(!d.viable.is_empty());
        for (r, c) in d.viable.indices() {
            let (m, a) = (d.omega.xs[c], d.omega.ys[r]);
            assert!((0.10..=0.14).contains(&d.omega.get(r, c)));
            assert!((0.67..=0.97).contains(&a));
            assert!(model::lhc_discoverable(m, a, cfg.luminosity));
        }
    }

    #[test]
    fn prediction_point_sits_just_outside_reach() {
        let cfg = Config::default();
        let d = build(&Config { samples: (10, 10), ..cfg.clone() }).unwrap();
        let s = summary(&d, &cfg);
        assert_eq!(s.get("Ωh² constraint"), Some("0.120"));
        assert_eq!(s.get("HL-LHC significance (σ)"), Some("4.86"));
        assert_eq!(s.get("Within 5σ reach"), Some("no"));
    }
}
