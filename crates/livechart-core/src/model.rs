// File: crates/livechart-core/src/model.rs
// Summary: Model fits behind the overlays: ordinary least squares and 1-D k-means.

use crate::grid::linspace;

/// Upper bound on Lloyd iterations; 1-D inputs converge long before this.
const KMEANS_MAX_ITER: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Ordinary least squares of `y` on `x`.
/// `None` for fewer than two points or when every `x` is the same.
pub fn fit_linear(points: &[(f64, f64)]) -> Option<LinearFit> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|p| p.0).sum();
    let sum_y: f64 = points.iter().map(|p| p.1).sum();
    let sum_xy: f64 = points.iter().map(|p| p.0 * p.1).sum();
    let sum_x2: f64 = points.iter().map(|p| p.0 * p.0).sum();

    let denom = n * sum_x2 - sum_x * sum_x;
    if denom.abs() < 1e-12 {
        return None;
    }
    let slope = (n * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / n;

    let mean_y = sum_y / n;
    let ss_tot: f64 = points.iter().map(|p| (p.1 - mean_y).powi(2)).sum();
    let ss_res: f64 = points.iter().map(|p| (p.1 - (slope * p.0 + intercept)).powi(2)).sum();
    let r_squared = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 1.0 };

    Some(LinearFit { slope, intercept, r_squared })
}

/// Lloyd's k-means over scalar features.
///
/// Centroids are seeded with evenly spaced order statistics, so the result is
/// deterministic. Labels are renumbered by ascending centroid: label 0 holds the
/// smallest values. Returns an empty vec when `k == 0` or there are fewer values than `k`.
pub fn kmeans_1d(values: &[f64], k: usize) -> Vec<usize> {
    if k == 0 || values.len() < k {
        return Vec::new();
    }
    if k == 1 {
        return vec![0; values.len()];
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mut centroids: Vec<f64> = linspace(0.0, (sorted.len() - 1) as f64, k)
        .into_iter()
        .map(|pos| sorted[pos.round() as usize])
        .collect();

    let mut labels = vec![usize::MAX; values.len()];
    for _ in 0..KMEANS_MAX_ITER {
        let mut changed = false;
        for (label, &v) in labels.iter_mut().zip(values) {
            let nearest = nearest_centroid(&centroids, v);
            if *label != nearest {
                *label = nearest;
                changed = true;
            }
        }
        if !changed {
            break;
        }

        let mut sums = vec![0.0; k];
        let mut counts = vec![0usize; k];
        for (&label, &v) in labels.iter().zip(values) {
            sums[label] += v;
            counts[label] += 1;
        }
        for c in 0..k {
            // An emptied cluster keeps its previous centroid.
            if counts[c] > 0 {
                centroids[c] = sums[c] / counts[c] as f64;
            }
        }
    }

    let mut order: Vec<usize> = (0..k).collect();
    order.sort_by(|&a, &b| centroids[a].total_cmp(&centroids[b]));
    let mut rank = vec![0; k];
    for (r, &c) in order.iter().enumerate() {
        rank[c] = r;
    }
    labels.into_iter().map(|l| rank[l]).collect()
}

// Ties go to the lower centroid index.
fn nearest_centroid(centroids: &[f64], v: f64) -> usize {
    let mut best = 0;
    let mut best_d = f64::INFINITY;
    for (i, c) in centroids.iter().enumerate() {
        let d = (v - c).abs();
        if d < best_d {
            best = i;
            best_d = d;
        }
    }
    best
}
