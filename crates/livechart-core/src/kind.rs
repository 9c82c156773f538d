// File: crates/livechart-core/src/kind.rs
// Summary: Chart kinds and the dispatch table that turns samples into series on a Chart.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::axis::Axis;
use crate::chart::{Chart, Y_MARGIN};
use crate::error::RenderError;
use crate::series::{Series, SeriesType, Wedge};
use crate::stats::histogram;

/// Histogram bin count.
pub const HISTOGRAM_BINS: usize = 10;
/// Pie wedges start at 12 o'clock and proceed counter-clockwise.
pub const PIE_START_DEG: f64 = 90.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    Pie,
    Scatter,
    Histogram,
    Area,
}

type DrawFn = fn(&mut Chart, &[f64]);

impl ChartKind {
    pub const ALL: [ChartKind; 6] = [
        ChartKind::Line,
        ChartKind::Bar,
        ChartKind::Pie,
        ChartKind::Scatter,
        ChartKind::Histogram,
        ChartKind::Area,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Line => "Line",
            ChartKind::Bar => "Bar",
            ChartKind::Pie => "Pie",
            ChartKind::Scatter => "Scatter",
            ChartKind::Histogram => "Histogram",
            ChartKind::Area => "Area",
        }
    }

    /// `"<Kind> Chart"`, suffixed with the active column name.
    pub fn title(self, column: Option<&str>) -> String {
        match column {
            Some(col) => format!("{} Chart: {}", self.name(), col),
            None => format!("{} Chart", self.name()),
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn drawer(self) -> DrawFn {
        match self {
            ChartKind::Line => draw_line,
            ChartKind::Bar => draw_bar,
            ChartKind::Pie => draw_pie,
            ChartKind::Scatter => draw_scatter,
            ChartKind::Histogram => draw_histogram,
            ChartKind::Area => draw_area,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chart kind {0:?}; expected one of line, bar, pie, scatter, histogram, area")]
pub struct UnknownChartKind(pub String);

impl FromStr for ChartKind {
    type Err = UnknownChartKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownChartKind(s.to_string()))
    }
}

/// Clear `chart` and draw `samples` as `kind`.
///
/// Empty samples give an empty (but titled) chart. A pie with a negative sample is
/// rejected before the chart is touched.
pub fn render(chart: &mut Chart, samples: &[f64], kind: ChartKind, column: Option<&str>) -> Result<(), RenderError> {
    if kind == ChartKind::Pie {
        if let Some((index, &value)) = samples.iter().enumerate().find(|(_, v)| **v < 0.0) {
            return Err(RenderError::NegativePieValue { index, value });
        }
    }

    chart.clear();
    (kind.drawer())(chart, samples);
    chart.title = kind.title(column);
    if chart.show_axes {
        chart.autoscale_axes(Y_MARGIN);
    }
    debug!(kind = kind.name(), samples = samples.len(), "rendered chart");
    Ok(())
}

/// Wedges for a pie of `samples`; nothing when the samples sum to zero.
pub fn pie_wedges(samples: &[f64]) -> Vec<Wedge> {
    let total: f64 = samples.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return Vec::new();
    }
    let mut start = PIE_START_DEG;
    samples
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let fraction = value / total;
            let wedge = Wedge {
                label: format!("Data {}", i + 1),
                value,
                fraction,
                start_deg: start,
                sweep_deg: fraction * 360.0,
            };
            start += wedge.sweep_deg;
            wedge
        })
        .collect()
}

// ---- drawers ---------------------------------------------------------------

fn draw_line(chart: &mut Chart, samples: &[f64]) {
    chart.add_series(Series::indexed(SeriesType::Line, samples).with_markers());
}

fn draw_bar(chart: &mut Chart, samples: &[f64]) {
    chart.add_series(Series::indexed(SeriesType::Bar, samples).with_baseline(0.0));
}

fn draw_pie(chart: &mut Chart, samples: &[f64]) {
    chart.show_axes = false;
    chart.x_axis = Axis::unlabeled();
    chart.y_axis = Axis::unlabeled();
    chart.add_series(Series::from_wedges(pie_wedges(samples)));
}

fn draw_scatter(chart: &mut Chart, samples: &[f64]) {
    chart.add_series(Series::indexed(SeriesType::Scatter, samples));
}

fn draw_histogram(chart: &mut Chart, samples: &[f64]) {
    let bins = histogram(samples, HISTOGRAM_BINS);
    let width = bins.first().map_or(1.0, |b| b.width);
    let data = bins.iter().map(|b| (b.left, b.count as f64)).collect();
    chart.x_axis = Axis::new("Value", 0.0, 1.0);
    chart.y_axis = Axis::new("Frequency", 0.0, 1.0);
    chart.add_series(
        Series::with_data(SeriesType::Histogram, data)
            .with_bar_width(width)
            .with_baseline(0.0),
    );
}

fn draw_area(chart: &mut Chart, samples: &[f64]) {
    chart.add_series(Series::indexed(SeriesType::Area, samples).with_baseline(0.0));
}
