// File: crates/physviz-core/src/model.rs
// Summary: Closed-form physics models and elementwise evaluation over samples.
// Notes:
// - Every model is a total function on the domain its callers sweep. Edge
//   singularities (|cos θ*| = 1, α_d = 0) are avoided by bound choice.
// - Mass units follow the studies: the freeze-out and toy constraint formulas
//   take M in TeV exactly as the reference numbers were produced.

use std::f64::consts::PI;

use crate::sweep::fixed_point;

/// Evaluate a one-parameter model at every sample.
pub fn evaluate<F: Fn(f64) -> f64>(model: F, samples: &[f64]) -> Vec<f64> {
    samples.iter().map(|&x| model(x)).collect()
}

/// Evaluate `model(x, y)` over the grid `xs × ys`, row-major with one row per `y`.
pub fn evaluate_grid<F: Fn(f64, f64) -> f64>(model: F, xs: &[f64], ys: &[f64]) -> Vec<f64> {
    ys.iter()
        .flat_map(|&y| xs.iter().map(move |&x| (x, y)))
        .map(|(x, y)| model(x, y))
        .collect()
}

// ---- cosmic birefringence ---------------------------------------------------

/// Fine-structure constant.
pub const ALPHA_EM: f64 = 1.0 / 137.036;

/// Headline birefringence prediction, rad.
pub const CENTRAL_PREDICTION_RAD: f64 = 1.2e-3;
/// Illustrative half-width of the prediction band, rad.
pub const PREDICTION_UNCERTAINTY_RAD: f64 = 0.3e-3;
/// CMB-S4 polarization-angle sensitivity, rad.
pub const CMB_S4_SENSITIVITY_RAD: f64 = 0.7e-3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BirefringenceParams {
    /// Reduced Planck mass.
    pub m_pl: f64,
    /// Inverse Hubble constant.
    pub h0_inv: f64,
}

impl Default for BirefringenceParams {
    fn default() -> Self {
        Self { m_pl: 2.43e18, h0_inv: 1.56e38 }
    }
}

/// Rotation angle `(α/8π)(θ/M_Pl)H0⁻¹`: linear in θ, inverse in the mass scale.
pub fn cosmic_birefringence(theta: f64, p: &BirefringenceParams) -> f64 {
    (ALPHA_EM / (8.0 * PI)) * (theta / p.m_pl) * p.h0_inv
}

/// Linear θ(α_d) correlation: θ = 0.8 at α_d = 0.67, rising by 0.2 over 0.30.
pub fn theta_correlation(alpha_d: f64) -> f64 {
    0.8 + 0.2 * (alpha_d - 0.67) / 0.30
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaradayParams {
    /// Rotation at the reference frequency, mrad.
    pub amplitude_mrad: f64,
    /// Reference frequency, Hz.
    pub reference_hz: f64,
}

impl Default for FaradayParams {
    fn default() -> Self {
        Self { amplitude_mrad: 100.0, reference_hz: 1.4e9 }
    }
}

/// Faraday rotation in mrad; scales as ν⁻².
pub fn faraday_rotation(nu: f64, p: &FaradayParams) -> f64 {
    p.amplitude_mrad * (p.reference_hz / nu).powi(2)
}

/// Birefringence rotation in mrad; independent of frequency.
pub fn birefringence_rotation(_nu: f64) -> f64 {
    CENTRAL_PREDICTION_RAD * 1e3
}

// ---- dijet angular shapes ---------------------------------------------------

/// QCD dijet background; inverse square-root singularity at |c| = 1.
pub fn qcd_background(cos_theta: f64) -> f64 {
    1.0 / (1.0 - cos_theta * cos_theta).sqrt()
}

/// W′ t-channel exchange; Rutherford-like 1/(1-c)² rise toward c = 1.
pub fn wprime_signal(cos_theta: f64) -> f64 {
    1.0 / (1.0 - cos_theta).powi(2)
}

/// Contact interaction: flat.
pub fn contact_interaction(_cos_theta: f64) -> f64 {
    1.0
}

// ---- thermal relic ----------------------------------------------------------

/// Internal degrees of freedom of the SU(2) triplet.
pub const DOF: f64 = 3.0;
/// Relativistic degrees of freedom at freeze-out.
pub const G_STAR: f64 = 106.75;
/// Planck mass, GeV.
pub const M_PLANCK: f64 = 1.22e19;
/// Initial guess for x_f = M/T_f.
pub const FREEZE_OUT_GUESS: f64 = 20.0;
/// Number of substitutions in the freeze-out solve.
pub const FREEZE_OUT_ITERATIONS: usize = 10;
/// Thermal cross-section ⟨σv⟩ = 1 pb, GeV⁻².
pub const SIGMA_THERMAL: f64 = 1e-9;

/// ⟨σv⟩ ≈ π α_d² / M².
pub fn annihilation_cross_section(mass: f64, alpha_d: f64) -> f64 {
    PI * alpha_d * alpha_d / (mass * mass)
}

/// One substitution of `x_f = ln(0.038 g M_Pl M ⟨σv⟩ √x_f / √g*)`.
pub fn freeze_out_step(x: f64, mass: f64, alpha_d: f64) -> f64 {
    let sigma_v = annihilation_cross_section(mass, alpha_d);
    (0.038 * DOF * M_PLANCK * mass * sigma_v * x.sqrt() / G_STAR.sqrt()).ln()
}

/// Freeze-out parameter from a fixed number of substitutions (no convergence check).
pub fn freeze_out_parameter(mass: f64, alpha_d: f64) -> f64 {
    fixed_point(
        |x| freeze_out_step(x, mass, alpha_d),
        FREEZE_OUT_GUESS,
        FREEZE_OUT_ITERATIONS,
    )
}

/// Ωh² ≈ 1.07e9 x_f / (√g* M_Pl).
pub fn relic_density(mass: f64, alpha_d: f64) -> f64 {
    let x_f = freeze_out_parameter(mass, alpha_d);
    1.07e9 * x_f / (G_STAR.sqrt() * M_PLANCK)
}

/// Coupling implied by a fixed cross-section: α = √(σ M² / π).
pub fn thermal_coupling(mass: f64, sigma: f64) -> f64 {
    (sigma * mass * mass / PI).sqrt()
}

// ---- toy constraints --------------------------------------------------------

/// Reference prediction point (M in TeV, α_d).
pub const PREDICTION_MASS: f64 = 3.2;
pub const PREDICTION_ALPHA: f64 = 0.82;
/// Observed dark-matter abundance.
pub const OMEGA_TARGET: f64 = 0.12;
/// HL-LHC integrated luminosity, fb⁻¹.
pub const HL_LHC_LUMINOSITY: f64 = 3000.0;
/// Dilepton branching ratio.
pub const BR_DILEPTON: f64 = 0.01;
/// Expected background events above m_ll = 3 TeV.
pub const DILEPTON_BACKGROUND: f64 = 1.0;
/// Discovery threshold in units of σ.
pub const DISCOVERY_SIGMA: f64 = 5.0;

/// Ωh² scaled as α_d⁻² M⁻² from the reference point.
pub fn relic_density_constraint(mass: f64, alpha_d: f64) -> f64 {
    OMEGA_TARGET * (PREDICTION_ALPHA / alpha_d).powi(2) * (PREDICTION_MASS / mass).powi(2)
}

/// Production cross-section in fb, 0.82 fb at the reference point.
pub fn dilepton_cross_section(mass: f64, alpha_d: f64) -> f64 {
    0.82 * (alpha_d / PREDICTION_ALPHA) * (PREDICTION_MASS / mass).powi(2)
}

/// Counting significance N/√(N + B) for the dilepton channel.
pub fn discovery_significance(mass: f64, alpha_d: f64, luminosity: f64) -> f64 {
    let n = dilepton_cross_section(mass, alpha_d) * luminosity * BR_DILEPTON;
    n / (n + DILEPTON_BACKGROUND).sqrt()
}

pub fn lhc_discoverable(mass: f64, alpha_d: f64, luminosity: f64) -> bool {
    discovery_significance(mass, alpha_d, luminosity) >= DISCOVERY_SIGMA
}
