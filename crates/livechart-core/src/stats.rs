// File: crates/livechart-core/src/stats.rs
// Summary: Histogram binning and descriptive statistics for numeric/categorical columns.

use std::collections::HashMap;
use std::fmt;

/// One histogram bin over `[left, left + width)`; the last bin is closed on the right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bin {
    pub left: f64,
    pub width: f64,
    pub count: usize,
}

/// Equal-width bins over the sample range.
/// Empty input gives no bins; a constant input gives a single bin `[v - 0.5, v + 0.5]`.
pub fn histogram(samples: &[f64], bins: usize) -> Vec<Bin> {
    let finite: Vec<f64> = samples.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Vec::new();
    }
    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range == 0.0 {
        return vec![Bin { left: min - 0.5, width: 1.0, count: finite.len() }];
    }

    let width = range / bins as f64;
    let mut counts = vec![0usize; bins];
    for v in finite {
        let idx = (((v - min) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin { left: min + i as f64 * width, width, count })
        .collect()
}

/// Quantile `q` in `[0, 1]` of sorted data, interpolating linearly between ranks.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64))
}

/// Count/mean/std/min/quartiles/max of the non-missing values of a numeric column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1); NaN for fewer than two values.
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl Describe {
    pub fn of(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);
        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let std = if n > 1 {
            (sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64).sqrt()
        } else {
            f64::NAN
        };
        Some(Self {
            count: n,
            mean,
            std,
            min: sorted[0],
            q25: quantile(&sorted, 0.25)?,
            median: quantile(&sorted, 0.5)?,
            q75: quantile(&sorted, 0.75)?,
            max: sorted[n - 1],
        })
    }
}

impl fmt::Display for Describe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "count={} mean={:.4} std={:.4} min={:.4} 25%={:.4} 50%={:.4} 75%={:.4} max={:.4}",
            self.count, self.mean, self.std, self.min, self.q25, self.median, self.q75, self.max
        )
    }
}

/// Value frequencies, most frequent first; ties keep first-appearance order.
pub fn value_counts<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for v in values {
        let slot = counts.entry(v).or_insert(0);
        if *slot == 0 {
            order.push(v);
        }
        *slot += 1;
    }
    let mut out: Vec<(String, usize)> = order
        .into_iter()
        .map(|v| (v.to_string(), counts[v]))
        .collect();
    // Stable sort keeps first-appearance order among equal counts.
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}
