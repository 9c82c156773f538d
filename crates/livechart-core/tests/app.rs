// File: crates/livechart-core/tests/app.rs
// Purpose: End-to-end flows through AppState: entry, import, kind/overlay switches, streaming.

use std::path::PathBuf;

use livechart_core::series::SeriesRole;
use livechart_core::{AppError, AppState, ChartKind, DataSource, OverlayKind, SeriesType};

fn fixture(name: &str, contents: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("app");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn update_from_manual_entry() {
    let mut app = AppState::default();
    app.set_entry("1, 2, 3");
    app.update().expect("update");
    assert_eq!(app.dataset().samples(), &[1.0, 2.0, 3.0]);
    assert_eq!(app.chart().title, "Line Chart");
}

#[test]
fn bad_entry_reports_and_keeps_chart() {
    let mut app = AppState::default();
    app.set_entry("4,5");
    app.update().unwrap();
    let before = app.chart().clone();

    app.set_entry("1,2,x");
    let err = app.update().unwrap_err();
    assert!(matches!(err, AppError::Parse(_)));
    assert!(app.status().contains("\"x\""));
    assert_eq!(app.chart(), &before);
    assert_eq!(app.dataset().samples(), &[4.0, 5.0]);
}

#[test]
fn import_selects_first_column() {
    let path = fixture("ab.csv", "a,b\n1,4\n2,5\n3,6\n");
    let mut app = AppState::default();
    app.import(&path).expect("import");

    assert_eq!(app.columns(), &["a".to_string(), "b".to_string()]);
    assert_eq!(app.selection().column.as_deref(), Some("a"));
    assert_eq!(app.dataset().samples(), &[1.0, 2.0, 3.0]);
    assert_eq!(app.chart().title, "Line Chart: a");

    assert_eq!(app.next_column(), Some("b"));
    app.update().unwrap();
    assert_eq!(app.dataset().samples(), &[4.0, 5.0, 6.0]);
    assert_eq!(app.dataset().source(), &DataSource::Column("b".into()));
}

#[test]
fn failed_import_keeps_previous_table() {
    let good = fixture("good.csv", "a\n1\n2\n");
    let bad = fixture("bad.csv", "a,b\n1,2\n3\n");
    let mut app = AppState::default();
    app.import(&good).unwrap();

    assert!(app.import(&bad).is_err());
    assert_eq!(app.columns(), &["a".to_string()]);
    assert_eq!(app.dataset().samples(), &[1.0, 2.0]);
}

#[test]
fn categorical_column_is_ignored_on_update() {
    let path = fixture("mixed.csv", "n,label\n1,x\n2,y\n");
    let mut app = AppState::default();
    app.import(&path).unwrap();

    app.select_column(Some("label".into()));
    app.update().expect("silently ignored");
    assert_eq!(app.dataset().samples(), &[1.0, 2.0]);
}

#[test]
fn pie_with_negative_reports_error() {
    let mut app = AppState::default();
    app.set_entry("3,-1");
    app.update().unwrap();

    let err = app.set_chart_kind(ChartKind::Pie).unwrap_err();
    assert!(matches!(err, AppError::Render(_)));
    assert!(app.status().contains("non-negative"));
    assert_eq!(app.chart().title, "Line Chart");
    assert_eq!(app.selection().chart_kind, ChartKind::Line);
}

#[test]
fn rejected_update_keeps_previous_samples() {
    let mut app = AppState::default();
    app.set_entry("1,2");
    app.update().unwrap();
    app.set_chart_kind(ChartKind::Pie).unwrap();
    let before = app.chart().clone();

    app.set_entry("3,-1");
    let err = app.update().unwrap_err();
    assert!(matches!(err, AppError::Render(_)));
    assert_eq!(app.dataset().samples(), &[1.0, 2.0]);
    assert_eq!(app.dataset().source(), &DataSource::Manual);
    assert_eq!(app.chart(), &before);
}

#[test]
fn unrenderable_import_keeps_previous_table() {
    let good = fixture("pie_good.csv", "a\n1\n2\n");
    let negative = fixture("pie_negative.csv", "x,y\n-1,2\n3,4\n");
    let mut app = AppState::default();
    app.import(&good).unwrap();
    app.set_chart_kind(ChartKind::Pie).unwrap();
    let before = app.chart().clone();

    assert!(app.import(&negative).is_err());
    assert_eq!(app.columns(), &["a".to_string()]);
    assert_eq!(app.selection().column.as_deref(), Some("a"));
    assert_eq!(app.dataset().samples(), &[1.0, 2.0]);
    assert_eq!(app.chart().title, "Pie Chart: a");
    assert_eq!(app.chart(), &before);

    // The restored table still serves column reads.
    app.update().unwrap();
    assert_eq!(app.dataset().source(), &DataSource::Column("a".into()));
}

#[test]
fn overlay_applies_on_kind_change() {
    let mut app = AppState::default();
    app.set_entry("1,2,3,4");
    app.update().unwrap();
    app.set_overlay(OverlayKind::TrendLine).unwrap();
    app.set_chart_kind(ChartKind::Bar).unwrap();

    let chart = app.chart();
    assert!(chart.find(SeriesType::Bar).is_some());
    assert!(chart.series.iter().any(|s| s.role == SeriesRole::Trend));
}

#[test]
fn streamed_samples_are_windowed_and_redrawn() {
    let mut app = AppState::default();
    app.set_streaming(true);
    assert!(app.stream_flag().is_enabled());

    for i in 0..25 {
        app.on_stream_sample(i as f64).unwrap();
    }
    assert_eq!(app.dataset().samples().len(), 20);
    assert_eq!(app.dataset().samples()[0], 5.0);
    let line = app.chart().find(SeriesType::Line).unwrap();
    assert_eq!(line.data_xy.len(), 20);

    assert!(!app.toggle_streaming());
    assert!(!app.stream_flag().is_enabled());
}

#[test]
fn streamed_sample_rejected_by_pie_is_dropped() {
    let mut app = AppState::default();
    app.set_entry("1,2");
    app.update().unwrap();
    app.set_chart_kind(ChartKind::Pie).unwrap();
    let before = app.chart().clone();

    assert!(app.on_stream_sample(-5.0).is_err());
    assert_eq!(app.dataset().samples(), &[1.0, 2.0]);
    assert_eq!(app.chart(), &before);

    app.on_stream_sample(3.0).unwrap();
    assert_eq!(app.dataset().samples(), &[1.0, 2.0, 3.0]);
}

#[test]
fn export_reports_saved_path() {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("app");
    let mut app = AppState::default();
    app.set_entry("1,2");
    app.update().unwrap();

    app.export(dir.join("out.png")).expect("export");
    assert!(app.status().starts_with("Saved"));

    assert!(app.export(dir.join("out.gif")).is_err());
    assert!(app.status().contains("gif"));
}
