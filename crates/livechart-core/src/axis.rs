// File: crates/livechart-core/src/axis.rs
// Summary: Axis model with labels and ranges.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// X axis over sample positions.
    pub fn index() -> Self {
        Self::new("Index", 0.0, 1.0)
    }

    /// Y axis over sample values.
    pub fn value() -> Self {
        Self::new("Value", 0.0, 1.0)
    }

    /// Axis without a label (pie charts).
    pub fn unlabeled() -> Self {
        Self::new("", 0.0, 1.0)
    }
}
