// File: crates/livechart-core/src/overlay.rs
// Summary: Overlay trait plus the trend-line and two-cluster overlays drawn after a chart.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::chart::{Chart, Y_MARGIN};
use crate::model::{fit_linear, kmeans_1d, LinearFit};
use crate::series::{Series, SeriesRole, SeriesType};

pub const TREND_LABEL: &str = "Trend Line";
pub const CLUSTER_TITLE: &str = "Clustering";
/// Clustering always partitions into this many groups.
pub const CLUSTER_COUNT: usize = 2;

/// An additional drawing layer composited on top of a rendered chart.
/// Implementations only add draw calls; they never touch the samples.
pub trait Overlay {
    fn id(&self) -> &'static str;
    /// Draw on `chart`. Returns `false` when the overlay had nothing to draw.
    fn apply(&self, chart: &mut Chart, samples: &[f64]) -> bool;
}

/// OLS trend of value against index, drawn dashed over the chart.
pub struct TrendLineOverlay;

impl TrendLineOverlay {
    pub fn fit(samples: &[f64]) -> Option<LinearFit> {
        if samples.len() < 2 {
            return None;
        }
        let points: Vec<(f64, f64)> = samples.iter().enumerate().map(|(i, &v)| (i as f64, v)).collect();
        fit_linear(&points)
    }
}

impl Overlay for TrendLineOverlay {
    fn id(&self) -> &'static str { "trend_line" }

    fn apply(&self, chart: &mut Chart, samples: &[f64]) -> bool {
        let Some(fit) = Self::fit(samples) else { return false };
        let last = (samples.len() - 1) as f64;
        let line = vec![(0.0, fit.predict(0.0)), (last, fit.predict(last))];
        chart.add_series(
            Series::with_data(SeriesType::Line, line)
                .dashed()
                .with_role(SeriesRole::Trend)
                .with_label(TREND_LABEL),
        );
        debug!(slope = fit.slope, intercept = fit.intercept, r2 = fit.r_squared, "trend line fitted");
        true
    }
}

/// Two-way k-means partition using the sample index as the only feature.
///
/// Clusters therefore cover contiguous index ranges whatever the values are.
pub struct ClusterOverlay;

impl ClusterOverlay {
    pub fn labels(samples: &[f64]) -> Vec<usize> {
        if samples.len() < 2 {
            return Vec::new();
        }
        let features: Vec<f64> = (0..samples.len()).map(|i| i as f64).collect();
        kmeans_1d(&features, CLUSTER_COUNT)
    }
}

impl Overlay for ClusterOverlay {
    fn id(&self) -> &'static str { "clustering" }

    fn apply(&self, chart: &mut Chart, samples: &[f64]) -> bool {
        let labels = Self::labels(samples);
        if labels.is_empty() {
            return false;
        }
        // Cluster coloring replaces any plain scatter styling.
        chart.series.retain(|s| s.series_type != SeriesType::Scatter);
        chart.add_series(
            Series::indexed(SeriesType::Scatter, samples)
                .with_role(SeriesRole::Clusters)
                .with_groups(labels),
        );
        chart.title = CLUSTER_TITLE.to_string();
        true
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    #[default]
    None,
    TrendLine,
    Clustering,
}

impl OverlayKind {
    pub const ALL: [OverlayKind; 3] = [OverlayKind::None, OverlayKind::TrendLine, OverlayKind::Clustering];

    pub fn name(self) -> &'static str {
        match self {
            OverlayKind::None => "None",
            OverlayKind::TrendLine => "Trend Line",
            OverlayKind::Clustering => "Clustering",
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn overlay(self) -> Option<&'static dyn Overlay> {
        match self {
            OverlayKind::None => None,
            OverlayKind::TrendLine => Some(&TrendLineOverlay),
            OverlayKind::Clustering => Some(&ClusterOverlay),
        }
    }
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown overlay {0:?}; expected none, trend or clustering")]
pub struct UnknownOverlayKind(pub String);

impl FromStr for OverlayKind {
    type Err = UnknownOverlayKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(OverlayKind::None),
            "trend" | "trendline" | "trend-line" | "trend line" => Ok(OverlayKind::TrendLine),
            "cluster" | "clusters" | "clustering" => Ok(OverlayKind::Clustering),
            _ => Err(UnknownOverlayKind(s.to_string())),
        }
    }
}

/// Compose the selected overlay onto an already rendered chart, then refit the axes so
/// the overlay stays inside the plot area.
/// Pie charts have no index axis, so overlays are skipped there.
pub fn apply_overlay(chart: &mut Chart, samples: &[f64], kind: OverlayKind) {
    let Some(overlay) = kind.overlay() else { return };
    if chart.find(SeriesType::Pie).is_some() {
        debug!(overlay = overlay.id(), "overlay skipped on pie chart");
        return;
    }
    if !overlay.apply(chart, samples) {
        debug!(overlay = overlay.id(), samples = samples.len(), "overlay needs at least two samples");
        return;
    }
    if chart.show_axes {
        chart.autoscale_axes(Y_MARGIN);
    }
}
