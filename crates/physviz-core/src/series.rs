// File: crates/physviz-core/src/series.rs
// Summary: Series model for line and scatter data drawn from evaluated fields.

use crate::style::Style;
use crate::sweep::Field1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Scatter,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,
    pub style: Style,
    pub label: Option<String>,
}

impl Series {
    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self { series_type, data_xy: data, style: Style::default(), label: None }
    }

    /// Line through the samples of an evaluated field.
    pub fn from_field(field: &Field1) -> Self {
        Self::with_data(SeriesType::Line, field.points())
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.data_xy.is_empty()
    }
}
