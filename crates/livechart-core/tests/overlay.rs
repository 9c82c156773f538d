// File: crates/livechart-core/tests/overlay.rs
// Purpose: Trend line and clustering overlays on top of rendered charts.

use livechart_core::overlay::{ClusterOverlay, TrendLineOverlay, CLUSTER_TITLE, TREND_LABEL};
use livechart_core::series::{LineStyle, SeriesRole};
use livechart_core::{apply_overlay, fit_linear, kmeans_1d, render, Chart, ChartKind, OverlayKind, SeriesType};

fn chart_with(samples: &[f64], kind: ChartKind, overlay: OverlayKind) -> Chart {
    let mut chart = Chart::new();
    render(&mut chart, samples, kind, None).expect("render");
    apply_overlay(&mut chart, samples, overlay);
    chart
}

#[test]
fn trend_of_a_ramp_is_exact() {
    let fit = TrendLineOverlay::fit(&[1.0, 2.0, 3.0, 4.0]).expect("fit");
    assert!((fit.slope - 1.0).abs() < 1e-12);
    assert!((fit.intercept - 1.0).abs() < 1e-12);
    assert!((fit.r_squared - 1.0).abs() < 1e-12);
}

#[test]
fn trend_line_spans_first_to_last_index() {
    let chart = chart_with(&[2.0, 4.0, 6.0], ChartKind::Bar, OverlayKind::TrendLine);
    let trend = chart.series.iter().find(|s| s.role == SeriesRole::Trend).expect("trend series");
    assert_eq!(trend.line_style, LineStyle::Dashed);
    assert_eq!(trend.data_xy.len(), 2);
    assert_eq!(trend.data_xy[0].0, 0.0);
    assert_eq!(trend.data_xy[1].0, 2.0);
    assert!((trend.data_xy[1].1 - 6.0).abs() < 1e-9);
    assert_eq!(chart.legend().iter().map(|(l, _)| *l).collect::<Vec<_>>(), vec![TREND_LABEL]);
}

#[test]
fn clustering_splits_by_index_not_value() {
    // Values alternate wildly; clusters still follow position.
    let samples = [100.0, 1.0, 100.0, 1.0, 100.0, 1.0];
    assert_eq!(ClusterOverlay::labels(&samples), vec![0, 0, 0, 1, 1, 1]);
}

#[test]
fn clustering_replaces_scatter_and_retitles() {
    let chart = chart_with(&[1.0, 2.0, 3.0, 4.0], ChartKind::Scatter, OverlayKind::Clustering);
    let scatters: Vec<_> = chart.series.iter().filter(|s| s.series_type == SeriesType::Scatter).collect();
    assert_eq!(scatters.len(), 1);
    assert_eq!(scatters[0].role, SeriesRole::Clusters);
    assert_eq!(scatters[0].groups, vec![0, 0, 1, 1]);
    assert_eq!(chart.title, CLUSTER_TITLE);
}

#[test]
fn too_few_samples_draw_nothing_extra() {
    for overlay in [OverlayKind::TrendLine, OverlayKind::Clustering] {
        for samples in [&[][..], &[5.0][..]] {
            let plain = chart_with(samples, ChartKind::Line, OverlayKind::None);
            let overlaid = chart_with(samples, ChartKind::Line, overlay);
            assert_eq!(plain, overlaid, "{overlay} on {} samples", samples.len());
        }
    }
}

#[test]
fn overlays_skip_pie() {
    let plain = chart_with(&[1.0, 2.0, 3.0], ChartKind::Pie, OverlayKind::None);
    let overlaid = chart_with(&[1.0, 2.0, 3.0], ChartKind::Pie, OverlayKind::TrendLine);
    assert_eq!(plain, overlaid);
}

#[test]
fn fit_rejects_vertical_points() {
    assert!(fit_linear(&[(1.0, 1.0), (1.0, 5.0)]).is_none());
}

#[test]
fn kmeans_degenerate_inputs() {
    assert!(kmeans_1d(&[1.0], 2).is_empty());
    assert_eq!(kmeans_1d(&[3.0, 1.0, 2.0], 1), vec![0, 0, 0]);
    assert_eq!(kmeans_1d(&[10.0, 0.0, 11.0, 1.0], 2), vec![1, 0, 1, 0]);
}

#[test]
fn overlay_names_parse() {
    assert_eq!("trend".parse::<OverlayKind>().unwrap(), OverlayKind::TrendLine);
    assert_eq!("Clustering".parse::<OverlayKind>().unwrap(), OverlayKind::Clustering);
    assert!("pca".parse::<OverlayKind>().is_err());
    assert_eq!(OverlayKind::Clustering.next(), OverlayKind::None);
}

fn assert_points_inside_axes(chart: &Chart) {
    for s in &chart.series {
        for &(x, y) in &s.data_xy {
            assert!(x >= chart.x_axis.min && x <= chart.x_axis.max, "x {x} outside axis in {:?}", s.label);
            assert!(y >= chart.y_axis.min && y <= chart.y_axis.max, "y {y} outside axis in {:?}", s.label);
        }
    }
}

#[test]
fn trend_line_stays_inside_axes() {
    // The fitted line undershoots the first sample, below the data range.
    let chart = chart_with(&[0.0, 0.0, 10.0], ChartKind::Line, OverlayKind::TrendLine);
    let trend = chart.series.iter().find(|s| s.role == SeriesRole::Trend).expect("trend series");
    assert!(trend.data_xy[0].1 < 0.0);
    assert_points_inside_axes(&chart);
}

#[test]
fn clusters_on_histogram_stay_inside_axes() {
    // Cluster points sit at raw values, well above the bin counts.
    let chart = chart_with(&[5.0, 6.0, 7.0, 8.0], ChartKind::Histogram, OverlayKind::Clustering);
    assert_eq!(chart.title, CLUSTER_TITLE);
    assert!(chart.y_axis.max >= 8.0);
    assert_points_inside_axes(&chart);
}
