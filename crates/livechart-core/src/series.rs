// File: crates/livechart-core/src/series.rs
// Summary: Series model for line, bar, scatter, histogram, area and pie data.
// Notes:
// - One struct carries every payload; the `series_type` decides which vec is read.
// - Coordinates are chart-space: X is the sample index (value for histograms).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,      // polyline, optional point markers
    Bar,       // bars centered on x, rising from baseline
    Scatter,   // unconnected points
    Histogram, // bars whose x is the left bin edge
    Area,      // filled region between the curve and baseline
    Pie,       // wedges, no cartesian axes
}

/// What a series represents; the rasterizer picks colors from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesRole {
    Data,
    Trend,
    Clusters,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// One pie slice. Angles are degrees, counter-clockwise from the positive X axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Wedge {
    pub label: String,
    pub value: f64,
    pub fraction: f64,
    pub start_deg: f64,
    pub sweep_deg: f64,
}

impl Wedge {
    /// Percentage annotation drawn inside the wedge.
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.fraction * 100.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub series_type: SeriesType,
    pub role: SeriesRole,
    pub data_xy: Vec<(f64, f64)>, // used by every cartesian type
    pub wedges: Vec<Wedge>,       // used by Pie
    pub groups: Vec<usize>,       // per-point color group (cluster overlay)
    pub bar_width: f64,           // Bar/Histogram width in x units
    pub baseline: Option<f64>,    // Bar/Histogram/Area origin
    pub markers: bool,
    pub line_style: LineStyle,
    pub label: Option<String>, // legend entry
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self {
            series_type,
            role: SeriesRole::Data,
            data_xy: Vec::new(),
            wedges: Vec::new(),
            groups: Vec::new(),
            bar_width: 0.8,
            baseline: None,
            markers: false,
            line_style: LineStyle::Solid,
            label: None,
        }
    }

    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, ..Self::new(series_type) }
    }

    /// Points at `(index, value)` for every sample.
    pub fn indexed(series_type: SeriesType, samples: &[f64]) -> Self {
        let data = samples.iter().enumerate().map(|(i, &v)| (i as f64, v)).collect();
        Self::with_data(series_type, data)
    }

    pub fn from_wedges(wedges: Vec<Wedge>) -> Self {
        Self { wedges, ..Self::new(SeriesType::Pie) }
    }

    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = Some(baseline);
        self
    }

    pub fn with_bar_width(mut self, width: f64) -> Self {
        self.bar_width = width;
        self
    }

    pub fn with_markers(mut self) -> Self {
        self.markers = true;
        self
    }

    pub fn dashed(mut self) -> Self {
        self.line_style = LineStyle::Dashed;
        self
    }

    pub fn with_role(mut self, role: SeriesRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_groups(mut self, groups: Vec<usize>) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get baseline value or default (0.0) when not set.
    pub fn baseline_value(&self) -> f64 { self.baseline.unwrap_or(0.0) }

    /// Horizontal extent in chart units, including bar widths.
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        let (lo, hi) = minmax(self.data_xy.iter().map(|p| p.0))?;
        Some(match self.series_type {
            SeriesType::Bar => (lo - self.bar_width * 0.5, hi + self.bar_width * 0.5),
            SeriesType::Histogram => (lo, hi + self.bar_width),
            _ => (lo, hi),
        })
    }

    /// Vertical extent in chart units, including the baseline for filled types.
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        let (mut lo, mut hi) = minmax(self.data_xy.iter().map(|p| p.1))?;
        if matches!(self.series_type, SeriesType::Bar | SeriesType::Histogram | SeriesType::Area) {
            let b = self.baseline_value();
            lo = lo.min(b);
            hi = hi.max(b);
        }
        Some((lo, hi))
    }
}

fn minmax(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.filter(|v| v.is_finite()).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
