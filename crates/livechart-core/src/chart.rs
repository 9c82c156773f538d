// File: crates/livechart-core/src/chart.rs
// Summary: Chart struct: the retained drawing surface that renderers clear and fill.

use crate::axis::Axis;
use crate::series::{Series, SeriesType};
use crate::view::ViewState;

/// Vertical margin added by [`Chart::autoscale_axes`], as a fraction of the data span.
pub const Y_MARGIN: f64 = 0.02;

#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Cartesian frame, grid and tick labels. Off for pie charts.
    pub show_axes: bool,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::index(),
            y_axis: Axis::value(),
            show_axes: true,
        }
    }

    /// Drop every series and reset title and axes.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.data_xy.is_empty() && s.wedges.is_empty())
    }

    /// First series of the given type, if any.
    pub fn find(&self, series_type: SeriesType) -> Option<&Series> {
        self.series.iter().find(|s| s.series_type == series_type)
    }

    /// Fit both axes to the cartesian series, keeping their labels.
    pub fn autoscale_axes(&mut self, y_margin: f64) {
        ViewState::from_chart(self, y_margin).apply_to_chart(self);
    }

    /// Legend entries in draw order.
    pub fn legend(&self) -> Vec<(&str, &Series)> {
        self.series
            .iter()
            .filter_map(|s| s.label.as_deref().map(|l| (l, s)))
            .collect()
    }
}
