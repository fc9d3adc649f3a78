// File: crates/physviz-core/src/theme.rs
// Summary: Light/Dark theming for figure chrome plus the named colours studies draw with.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
}

impl Theme {
    /// White page, black spines; the look of a printed paper figure.
    pub fn light() -> Self {
        Self {
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(77, 176, 176, 176),
            axis_line: skia::Color::from_argb(255, 20, 20, 20),
            axis_label: skia::Color::from_argb(255, 20, 20, 20),
            tick: skia::Color::from_argb(255, 40, 40, 40),
            title: skia::Color::from_argb(255, 0, 0, 0),
            legend_fill: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
        }
    }

    /// Near-black page for on-screen viewing.
    pub fn dark() -> Self {
        Self {
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            legend_fill: skia::Color::from_argb(204, 30, 30, 34),
            legend_border: skia::Color::from_argb(255, 70, 70, 78),
        }
    }
}

/// Replace the alpha channel of `color` with `alpha` in `[0, 1]`.
pub fn with_alpha(color: skia::Color, alpha: f32) -> skia::Color {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    skia::Color::from_argb(a, color.r(), color.g(), color.b())
}

/// Named colours (CSS values, as a plotting library resolves them).
pub mod palette {
    use skia_safe as skia;

    pub fn blue() -> skia::Color { skia::Color::from_argb(255, 0, 0, 255) }
    pub fn red() -> skia::Color { skia::Color::from_argb(255, 255, 0, 0) }
    pub fn green() -> skia::Color { skia::Color::from_argb(255, 0, 128, 0) }
    pub fn orange() -> skia::Color { skia::Color::from_argb(255, 255, 165, 0) }
    pub fn purple() -> skia::Color { skia::Color::from_argb(255, 128, 0, 128) }
    pub fn gray() -> skia::Color { skia::Color::from_argb(255, 128, 128, 128) }
    pub fn black() -> skia::Color { skia::Color::from_argb(255, 0, 0, 0) }
    pub fn yellow() -> skia::Color { skia::Color::from_argb(255, 255, 255, 0) }
    pub fn wheat() -> skia::Color { skia::Color::from_argb(255, 245, 222, 179) }
}
