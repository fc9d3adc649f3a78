// File: crates/physviz-core/src/annotate.rs
// Summary: Reference overlays derived from evaluated fields: thresholds, bands, contours, masks, markers.
// Notes:
// - Every derivation is a pure function of its inputs. Overlays never feed
//   back into a model; they only describe what the renderer should draw.
// - Contours are extracted per grid cell with marching squares. A level that
//   no cell crosses produces an overlay without segments, which draws nothing.

use tracing::debug;

use crate::error::{Result, VizError};
use crate::style::{MarkerShape, Style};
use crate::sweep::{Field1, Field2};

/// Line segment in data coordinates.
pub type Segment = [(f64, f64); 2];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Vertical alignment of a text box against its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxAnchor {
    Top,
    Bottom,
}

#[derive(Clone, Debug, PartialEq)]
pub enum OverlayKind {
    /// Constant line across the whole plot.
    Threshold { orientation: Orientation, value: f64 },
    /// Shaded strip between two constants.
    Span { orientation: Orientation, lo: f64, hi: f64 },
    /// Shaded region between two curves sampled on `xs`.
    Band { xs: Vec<f64>, lower: Vec<f64>, upper: Vec<f64> },
    /// Iso-value segments of a 2-D field.
    Contour { level: f64, segments: Vec<Segment>, inline_label: Option<String> },
    /// Filled data-space rectangles `[x0, y0, x1, y1]`.
    Cells { rects: Vec<[f64; 4]> },
    Scatter { points: Vec<(f64, f64)> },
    Marker { x: f64, y: f64 },
    /// Text anchored at a data-space point (baseline-left).
    Text { x: f64, y: f64, text: String },
    /// Boxed text anchored at an axes fraction, `(0, 0)` bottom-left.
    TextBox { fx: f64, fy: f64, text: String, anchor: BoxAnchor },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    pub kind: OverlayKind,
    pub style: Style,
    /// Legend entry; `None` keeps the overlay out of the legend.
    pub label: Option<String>,
}

impl Overlay {
    pub fn new(kind: OverlayKind) -> Self {
        Self { kind, style: Style::default(), label: None }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Text drawn on the contour itself; ignored by other kinds.
    pub fn with_inline_label(mut self, text: impl Into<String>) -> Self {
        if let OverlayKind::Contour { inline_label, .. } = &mut self.kind {
            *inline_label = Some(text.into());
        }
        self
    }

    /// Draw layer: fills under series, lines over them, markers and text on top.
    pub fn z(&self) -> u8 {
        match self.kind {
            OverlayKind::Span { .. } | OverlayKind::Band { .. } | OverlayKind::Cells { .. } => 0,
            OverlayKind::Threshold { .. } | OverlayKind::Contour { .. } => 2,
            OverlayKind::Scatter { .. } => 2,
            OverlayKind::Marker { .. } | OverlayKind::Text { .. } | OverlayKind::TextBox { .. } => 3,
        }
    }

    /// Whether the overlay has anything to draw.
    pub fn is_empty(&self) -> bool {
        match &self.kind {
            OverlayKind::Band { xs, .. } => xs.is_empty(),
            OverlayKind::Contour { segments, .. } => segments.is_empty(),
            OverlayKind::Cells { rects } => rects.is_empty(),
            OverlayKind::Scatter { points } => points.is_empty(),
            _ => false,
        }
    }
}

pub fn threshold(orientation: Orientation, value: f64) -> Overlay {
    Overlay::new(OverlayKind::Threshold { orientation, value })
}

pub fn span(orientation: Orientation, lo: f64, hi: f64) -> Overlay {
    Overlay::new(OverlayKind::Span { orientation, lo: lo.min(hi), hi: lo.max(hi) })
}

/// Region between `field - half_width` and `field + half_width`.
pub fn band(field: &Field1, half_width: f64) -> Overlay {
    Overlay::new(OverlayKind::Band {
        xs: field.xs.clone(),
        lower: field.values.iter().map(|v| v - half_width).collect(),
        upper: field.values.iter().map(|v| v + half_width).collect(),
    })
}

/// Region between two explicit bound arrays sampled on `xs`.
pub fn band_between(xs: &[f64], lower: &[f64], upper: &[f64]) -> Result<Overlay> {
    for len in [lower.len(), upper.len()] {
        if len != xs.len() {
            return Err(VizError::ShapeMismatch { expected: xs.len(), actual: len });
        }
    }
    Ok(Overlay::new(OverlayKind::Band {
        xs: xs.to_vec(),
        lower: lower.to_vec(),
        upper: upper.to_vec(),
    }))
}

/// Region between two constants over the extent of `xs`.
pub fn band_constant(xs: &[f64], lo: f64, hi: f64) -> Overlay {
    Overlay::new(OverlayKind::Band {
        xs: xs.to_vec(),
        lower: vec![lo; xs.len()],
        upper: vec![hi; xs.len()],
    })
}

/// Fill from zero up to `scale * field` over the samples where `keep(x)` holds.
pub fn band_where<P: Fn(f64) -> bool>(field: &Field1, keep: P, scale: f64) -> Overlay {
    let (xs, upper): (Vec<f64>, Vec<f64>) = field
        .points()
        .into_iter()
        .filter(|&(x, _)| keep(x))
        .map(|(x, v)| (x, v * scale))
        .unzip();
    let lower = vec![0.0; xs.len()];
    Overlay::new(OverlayKind::Band { xs, lower, upper })
}

/// One contour overlay per level, in the order given.
pub fn contour(field: &Field2, levels: &[f64]) -> Vec<Overlay> {
    levels
        .iter()
        .map(|&level| {
            let segments = contour_segments(field, level);
            debug!(level, segments = segments.len(), "contour");
            Overlay::new(OverlayKind::Contour { level, segments, inline_label: None })
        })
        .collect()
}

/// Marching-squares iso-segments of `field` at `level`.
///
/// Nodes with `value >= level` count as inside. Saddle cells are resolved by
/// the mean of their four corners.
pub fn contour_segments(field: &Field2, level: f64) -> Vec<Segment> {
    let (rows, cols) = field.shape();
    let mut out = Vec::new();
    if rows < 2 || cols < 2 {
        return out;
    }

    for r in 0..rows - 1 {
        for c in 0..cols - 1 {
            let v00 = field.get(r, c);
            let v10 = field.get(r, c + 1);
            let v01 = field.get(r + 1, c);
            let v11 = field.get(r + 1, c + 1);
            if !(v00.is_finite() && v10.is_finite() && v01.is_finite() && v11.is_finite()) {
                continue;
            }

            let (x0, x1) = (field.xs[c], field.xs[c + 1]);
            let (y0, y1) = (field.ys[r], field.ys[r + 1]);

            // Edge order: bottom, right, top, left.
            let edges = [
                ((x0, y0, v00), (x1, y0, v10)),
                ((x1, y0, v10), (x1, y1, v11)),
                ((x0, y1, v01), (x1, y1, v11)),
                ((x0, y0, v00), (x0, y1, v01)),
            ];
            let mut hits: [Option<(f64, f64)>; 4] = [None; 4];
            for (slot, &(a, b)) in hits.iter_mut().zip(edges.iter()) {
                *slot = edge_crossing(a, b, level);
            }

            match hits {
                [Some(b), Some(r_), Some(t), Some(l)] => {
                    let center_in = (v00 + v10 + v01 + v11) * 0.25 >= level;
                    let diagonal_bl_tr = v00 >= level;
                    if center_in == diagonal_bl_tr {
                        out.push([b, r_]);
                        out.push([t, l]);
                    } else {
                        out.push([b, l]);
                        out.push([r_, t]);
                    }
                }
                _ => {
                    let pts: Vec<(f64, f64)> = hits.iter().flatten().copied().collect();
                    if pts.len() == 2 {
                        out.push([pts[0], pts[1]]);
                    }
                }
            }
        }
    }
    out
}

fn edge_crossing(a: (f64, f64, f64), b: (f64, f64, f64), level: f64) -> Option<(f64, f64)> {
    let (ax, ay, av) = a;
    let (bx, by, bv) = b;
    if (av >= level) == (bv >= level) {
        return None;
    }
    let t = (level - av) / (bv - av);
    Some((ax + t * (bx - ax), ay + t * (by - ay)))
}

/// Grid nodes of a 2-D field whose value lies in `[lower, upper]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionMask {
    rows: usize,
    cols: usize,
    mask: Vec<bool>,
}

impl RegionMask {
    pub fn shape(&self) -> (usize, usize) { (self.rows, self.cols) }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask[row * self.cols + col]
    }

    pub fn count(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }

    pub fn is_empty(&self) -> bool { self.count() == 0 }

    /// Selected `(row, col)` pairs in row-major order.
    pub fn indices(&self) -> Vec<(usize, usize)> {
        self.mask
            .iter()
            .enumerate()
            .filter(|(_, &m)| m)
            .map(|(i, _)| (i / self.cols, i % self.cols))
            .collect()
    }

    /// Selected nodes as `(x, y)` parameter points.
    pub fn points(&self, field: &Field2) -> Vec<(f64, f64)> {
        self.indices()
            .into_iter()
            .map(|(r, c)| (field.xs[c], field.ys[r]))
            .collect()
    }

    /// Node-wise conjunction; both masks must share a shape.
    pub fn and(&self, other: &RegionMask) -> Result<RegionMask> {
        if self.shape() != other.shape() {
            return Err(VizError::ShapeMismatch {
                expected: self.mask.len(),
                actual: other.mask.len(),
            });
        }
        let mask = self.mask.iter().zip(&other.mask).map(|(&a, &b)| a && b).collect();
        Ok(RegionMask { rows: self.rows, cols: self.cols, mask })
    }
}

/// Inclusive selection `lower <= value <= upper`.
pub fn region_mask(field: &Field2, lower: f64, upper: f64) -> RegionMask {
    let (rows, cols) = field.shape();
    let mask = field.values.iter().map(|&v| v >= lower && v <= upper).collect();
    RegionMask { rows, cols, mask }
}

pub fn scatter(points: Vec<(f64, f64)>) -> Overlay {
    Overlay::new(OverlayKind::Scatter { points })
}

/// Cell-filled region where `lower <= value <= upper`; each selected node
/// covers the rectangle halfway to its neighbours.
pub fn filled_region(field: &Field2, lower: f64, upper: f64) -> Overlay {
    let mask = region_mask(field, lower, upper);
    let rects = mask
        .indices()
        .into_iter()
        .map(|(r, c)| {
            let (x0, x1) = half_extent(&field.xs, c);
            let (y0, y1) = half_extent(&field.ys, r);
            [x0, y0, x1, y1]
        })
        .collect();
    Overlay::new(OverlayKind::Cells { rects })
}

fn half_extent(samples: &[f64], i: usize) -> (f64, f64) {
    let v = samples[i];
    let lo = if i > 0 { 0.5 * (samples[i - 1] + v) } else { v };
    let hi = if i + 1 < samples.len() { 0.5 * (v + samples[i + 1]) } else { v };
    (lo, hi)
}

/// Highlighted prediction point, independent of any field.
pub fn intersection_marker(x: f64, y: f64) -> Overlay {
    Overlay::new(OverlayKind::Marker { x, y })
        .with_style(Style::default().with_marker(MarkerShape::Star, 200.0))
}

pub fn text(x: f64, y: f64, text: impl Into<String>) -> Overlay {
    Overlay::new(OverlayKind::Text { x, y, text: text.into() })
}

pub fn text_box(fx: f64, fy: f64, text: impl Into<String>, anchor: BoxAnchor) -> Overlay {
    Overlay::new(OverlayKind::TextBox { fx, fy, text: text.into(), anchor })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::{sweep_2d, ParameterAxis};

    fn bowl() -> Field2 {
        let x = ParameterAxis::linear("x", -5.0, 5.0, 41).unwrap();
        let y = ParameterAxis::linear("y", -5.0, 5.0, 41).unwrap();
        sweep_2d(|x, y| x * x + y * y, &x, &y)
    }

    #[test]
    fn contour_of_bowl_tracks_radius() {
        let f = bowl();
        let segs = contour_segments(&f, 4.0);
        assert!(!segs.is_empty());
        for [a, b] in segs {
            for (x, y) in [a, b] {
                let r = (x * x + y * y).sqrt();
                assert!((r - 2.0).abs() < 0.1, "vertex at radius {r}");
            }
        }
    }

    #[test]
    fn level_outside_range_is_empty_not_error() {
        let f = bowl();
        let overlays = contour(&f, &[-1.0, 1e6]);
        assert_eq!(overlays.len(), 2);
        assert!(overlays.iter().all(Overlay::is_empty));
    }

    #[test]
    fn band_is_symmetric() {
        let f = Field1::new(vec![0.0, 1.0], vec![1.0, 2.0]).unwrap();
        match band(&f, 0.3).kind {
            OverlayKind::Band { lower, upper, .. } => {
                assert!((lower[1] - 1.7).abs() < 1e-12);
                assert!((upper[0] - 1.3).abs() < 1e-12);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn band_between_checks_lengths() {
        assert!(band_between(&[0.0, 1.0], &[0.0], &[1.0, 1.0]).is_err());
    }

    #[test]
    fn band_where_keeps_selected_samples() {
        let f = Field1::new(vec![0.8, 0.89, 0.9, 0.95], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        match band_where(&f, |x| x > 0.88 && x < 0.92, 1.3).kind {
            OverlayKind::Band { xs, lower, upper } => {
                assert_eq!(xs, vec![0.89, 0.9]);
                assert_eq!(lower, vec![0.0, 0.0]);
                assert!((upper[1] - 3.9).abs() < 1e-12);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn mask_and_requires_shape() {
        let f = bowl();
        let a = region_mask(&f, 0.0, 4.0);
        let b = region_mask(&f, 1.0, 100.0);
        let both = a.and(&b).unwrap();
        assert!(both.count() <= a.count());
        assert!(both.indices().iter().all(|&(r, c)| a.contains(r, c) && b.contains(r, c)));
    }

    #[test]
    fn filled_region_covers_selected_nodes() {
        let f = bowl();
        let n = region_mask(&f, 0.0, 1.0).count();
        match filled_region(&f, 0.0, 1.0).kind {
            OverlayKind::Cells { rects } => assert_eq!(rects.len(), n),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn inline_label_only_on_contours() {
        let t = threshold(Orientation::Horizontal, 1.0).with_inline_label("x");
        assert_eq!(t.kind, OverlayKind::Threshold { orientation: Orientation::Horizontal, value: 1.0 });
    }
}
