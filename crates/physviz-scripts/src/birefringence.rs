// File: crates/physviz-scripts/src/birefringence.rs
// Summary: Cosmic birefringence study: Δφ against α_d and the frequency dependence versus Faraday rotation.

use std::path::PathBuf;

use anyhow::Result;
use physviz_core::annotate::{self, Orientation};
use physviz_core::model::{
    self, BirefringenceParams, FaradayParams, CENTRAL_PREDICTION_RAD, CMB_S4_SENSITIVITY_RAD,
    PREDICTION_UNCERTAINTY_RAD,
};
use physviz_core::style::{LineDash, Style};
use physviz_core::theme::palette;
use physviz_core::types::DEFAULT_DPI;
use physviz_core::{
    figure_text, sweep_1d, Axis, Chart, Field1, Figure, LegendPosition, ParameterAxis,
    PredictionSummary, Series,
};

/// Milliradians per radian.
const MRAD: f64 = 1e3;

#[derive(Clone, Debug)]
pub struct Config {
    pub alpha_d: (f64, f64),
    pub alpha_samples: usize,
    /// Frequency sweep in Hz, sampled logarithmically.
    pub frequency: (f64, f64),
    pub frequency_samples: usize,
    pub birefringence: BirefringenceParams,
    pub faraday: FaradayParams,
    /// Shaded detection window, mrad.
    pub detection_range: (f64, f64),
    pub output: PathBuf,
    pub dpi: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alpha_d: (0.67, 0.97),
            alpha_samples: 100,
            frequency: (1e8, 1e12),
            frequency_samples: 100,
            birefringence: BirefringenceParams::default(),
            faraday: FaradayParams::default(),
            detection_range: (0.9, 1.5),
            output: PathBuf::from("birefringence_prediction.png"),
            dpi: DEFAULT_DPI,
        }
    }
}

/// Evaluated curves, all in mrad.
#[derive(Clone, Debug)]
pub struct Birefringence {
    /// Δφ over α_d with θ following the α_d correlation.
    pub delta_phi: Field1,
    pub faraday: Field1,
    pub flat: Field1,
}

pub fn build(cfg: &Config) -> Result<Birefringence> {
    let alpha = ParameterAxis::linear("alpha_d", cfg.alpha_d.0, cfg.alpha_d.1, cfg.alpha_samples)?;
    let delta_phi = sweep_1d(
        |a| model::cosmic_birefringence(model::theta_correlation(a), &cfg.birefringence) * MRAD,
        &alpha,
    );

    let nu = ParameterAxis::logarithmic("nu", cfg.frequency.0, cfg.frequency.1, cfg.frequency_samples)?;
    let faraday = sweep_1d(|nu| model::faraday_rotation(nu, &cfg.faraday), &nu);
    let flat = sweep_1d(model::birefringence_rotation, &nu);

    Ok(Birefringence { delta_phi, faraday, flat })
}

fn prediction_chart(data: &Birefringence, cfg: &Config) -> Chart {
    let mut chart = Chart::new().with_title("Cosmic Birefringence Prediction");
    chart.x_axis = Axis::new("α_d", cfg.alpha_d.0, cfg.alpha_d.1);
    chart.y_axis = Axis::auto("Δφ (mrad)");

    chart.add_series(
        Series::from_field(&data.delta_phi)
            .with_style(Style::color(palette::blue()).with_width(3.0))
            .with_label("Δφ(α_d)"),
    );
    chart.add_overlay(
        annotate::band(&data.delta_phi, PREDICTION_UNCERTAINTY_RAD * MRAD)
            .with_style(Style::color(palette::blue()).with_alpha(0.3))
            .with_label("Uncertainty"),
    );
    chart.add_overlay(
        annotate::threshold(Orientation::Horizontal, CENTRAL_PREDICTION_RAD * MRAD)
            .with_style(Style::color(palette::red()).with_width(2.0).with_dash(LineDash::Dashed))
            .with_label(format!("Central prediction: {:.1} mrad", CENTRAL_PREDICTION_RAD * MRAD)),
    );
    chart.add_overlay(
        annotate::threshold(Orientation::Horizontal, CMB_S4_SENSITIVITY_RAD * MRAD)
            .with_style(Style::color(palette::green()).with_width(2.0).with_dash(LineDash::Dotted))
            .with_label(format!("CMB-S4 sensitivity ({:.1} mrad)", CMB_S4_SENSITIVITY_RAD * MRAD)),
    );
    let (lo, hi) = cfg.detection_range;
    chart.add_overlay(
        annotate::span(Orientation::Horizontal, lo, hi)
            .with_style(Style::color(palette::yellow()).with_alpha(0.2))
            .with_label("Detection range"),
    );
    chart.legend = LegendPosition::UpperRight;
    chart
}

fn frequency_chart(data: &Birefringence) -> Chart {
    let mut chart = Chart::new().with_title("Frequency Dependence Comparison");
    chart.x_axis = Axis::auto("Frequency ν (Hz)").log10();
    chart.y_axis = Axis::new("Rotation angle (mrad)", 1e-2, 1e4).log10();

    chart.add_series(
        Series::from_field(&data.faraday)
            .with_style(Style::color(palette::orange()).with_width(3.0))
            .with_label("Faraday rotation (ν⁻²)"),
    );
    chart.add_series(
        Series::from_field(&data.flat)
            .with_style(Style::color(palette::purple()).with_width(3.0).with_dash(LineDash::Dashed))
            .with_label("Cosmic birefringence (ν⁰)"),
    );
    chart
}

fn prediction_text() -> String {
    [
        format!(
            "Δφ = ({:.1} ± {:.1}) × 10⁻³ rad",
            CENTRAL_PREDICTION_RAD * MRAD,
            PREDICTION_UNCERTAINTY_RAD * MRAD
        ),
        "Frequency independent".to_string(),
        format!("CMB-S4: σ ≈ {:.1} × 10⁻³ rad", CMB_S4_SENSITIVITY_RAD * MRAD),
        "~2σ detectable".to_string(),
    ]
    .join("\n")
}

/// Two panels side by side with the prediction box in the lower-left corner.
pub fn figure(data: &Birefringence, cfg: &Config) -> Figure {
    let mut fig = Figure::row(14.0, 6.0, vec![prediction_chart(data, cfg), frequency_chart(data)])
        .with_dpi(cfg.dpi);
    fig.add_text_box(
        figure_text(0.02, 0.02, prediction_text())
            .with_style(Style::color(palette::wheat()).with_alpha(0.8).with_font_size(10.0)),
    );
    fig
}

pub fn summary(cfg: &Config) -> PredictionSummary {
    let central = CENTRAL_PREDICTION_RAD * MRAD;
    let sigma = PREDICTION_UNCERTAINTY_RAD * MRAD;
    PredictionSummary::new("Predicted cosmic birefringence")
        .text("Figure", cfg.output.display().to_string())
        .blank()
        .text("Δφ", format!("({central:.1} ± {sigma:.1}) × 10⁻³ rad"))
        .text("", format!("  = {central:.1} ± {sigma:.1} mrad"))
        .blank()
        .text("CMB-S4 sensitivity", format!("{:.1} mrad", CMB_S4_SENSITIVITY_RAD * MRAD))
        .text("Expected significance", "~2σ")
}

/// Build, render to `cfg.output` and print the summary.
pub fn run(cfg: &Config) -> Result<Figure> {
    let data = build(cfg)?;
    let fig = figure(&data, cfg);
    crate::render(&fig, &cfg.output)?;
    summary(cfg).report();
    Ok(fig)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_curves_share_the_sweep() {
        let data = build(&Config::default()).unwrap();
        assert_eq!(data.faraday.xs, data.flat.xs);
        assert_eq!(data.delta_phi.len(), 100);
    }

    #[test]
    fn summary_reports_mrad_not_scaled_twice() {
        let s = summary(&Config::default());
        assert_eq!(s.get("Δφ"), Some("(1.2 ± 0.3) × 10⁻³ rad"));
        assert_eq!(s.get("CMB-S4 sensitivity"), Some("0.7 mrad"));
    }
}
