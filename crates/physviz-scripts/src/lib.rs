// File: crates/physviz-scripts/src/lib.rs
// Summary: Study pipelines (build, figure, render, report) shared by the binaries and tests.

use std::path::Path;

use anyhow::{Context, Result};
use physviz_core::{Figure, RenderOptions};
use tracing::info;

pub mod birefringence;
pub mod convergence;
pub mod dijet;
pub mod logging;
pub mod relic;
#[cfg(feature = "window")]
pub mod viewer;

/// Write `fig` as a PNG at its own size and DPI.
pub fn render(fig: &Figure, path: &Path) -> Result<()> {
    let (w, h) = fig.pixel_size();
    info!(path = %path.display(), width = w, height = h, dpi = fig.dpi, "rendering figure");
    fig.render_to_png(&RenderOptions::default(), path)
        .with_context(|| format!("rendering {}", path.display()))
}

/// Display `fig` interactively; blocks until the window closes.
/// Without the `window` feature this only logs.
#[cfg_attr(not(feature = "window"), allow(unused_variables))]
pub fn show(fig: &Figure, title: &str) -> Result<()> {
    #[cfg(feature = "window")]
    {
        viewer::show(fig, title)
    }
    #[cfg(not(feature = "window"))]
    {
        tracing::debug!(title, "built without the window feature; skipping display");
        Ok(())
    }
}
