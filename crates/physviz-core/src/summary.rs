// File: crates/physviz-core/src/summary.rs
// Summary: Labelled, fixed-decimal prediction report printed after a figure is rendered.

use std::fmt;

/// One row of a report. `Blank` separates groups.
#[derive(Clone, Debug, PartialEq)]
enum Entry {
    Line { label: String, value: String },
    Blank,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PredictionSummary {
    pub title: String,
    entries: Vec<Entry>,
}

impl PredictionSummary {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), entries: Vec::new() }
    }

    /// Numeric entry with a fixed number of decimals.
    pub fn value(mut self, label: impl Into<String>, v: f64, decimals: usize) -> Self {
        self.entries.push(Entry::Line { label: label.into(), value: format!("{v:.decimals$}") });
        self
    }

    /// Pre-formatted entry.
    pub fn text(mut self, label: impl Into<String>, s: impl Into<String>) -> Self {
        self.entries.push(Entry::Line { label: label.into(), value: s.into() });
        self
    }

    pub fn blank(mut self) -> Self {
        self.entries.push(Entry::Blank);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Formatted value for `label`, first match.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries.iter().find_map(|e| match e {
            Entry::Line { label: l, value } if l == label => Some(value.as_str()),
            _ => None,
        })
    }

    /// Print to stdout.
    pub fn report(&self) {
        print!("{self}");
    }
}

impl fmt::Display for PredictionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        for e in &self.entries {
            match e {
                Entry::Line { label, value } if label.is_empty() => writeln!(f, "{value}")?,
                Entry::Line { label, value } => writeln!(f, "{label}: {value}")?,
                Entry::Blank => writeln!(f)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_use_fixed_decimals() {
        let s = PredictionSummary::new("Relic").value("x_f", 40.881, 1).value("Omega h^2", 0.1204, 3);
        assert_eq!(s.get("x_f"), Some("40.9"));
        assert_eq!(s.get("Omega h^2"), Some("0.120"));
        assert_eq!(s.get("missing"), None);
    }

    #[test]
    fn display_keeps_order_and_blanks() {
        let s = PredictionSummary::new("Dijet").text("a", "1").blank().text("", "note");
        assert_eq!(s.to_string(), "Dijet\n=====\na: 1\n\nnote\n");
        assert_eq!(s.len(), 3);
    }
}
