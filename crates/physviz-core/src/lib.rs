// File: crates/physviz-core/src/lib.rs
// Summary: Core library entry point; exports models, sweeps, overlays, figure rendering and reports.

pub mod annotate;
pub mod axis;
pub mod bounds;
pub mod chart;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod grid;
pub mod model;
pub mod raster;
pub mod scale;
pub mod series;
pub mod style;
pub mod summary;
pub mod sweep;
pub mod text;
pub mod theme;
pub mod types;

pub use annotate::{BoxAnchor, Orientation, Overlay, OverlayKind, RegionMask};
pub use axis::{Axis, ScaleKind};
pub use chart::{Chart, LegendPosition, RenderOptions, TextSizes};
pub use error::VizError;
pub use figure::{figure_text, Figure, Panel};
pub use series::{Series, SeriesType};
pub use style::{LineDash, MarkerShape, Style};
pub use summary::PredictionSummary;
pub use sweep::{fixed_point, sweep_1d, sweep_2d, Field1, Field2, ParameterAxis, ParameterGrid, Spacing};
pub use text::TextShaper;
pub use theme::Theme;
pub use types::Insets;
