// File: crates/livechart-core/tests/snapshot.rs
// Purpose: Golden snapshots for every chart kind, plus the two overlays.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, if a snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use livechart_core::{apply_overlay, render, Chart, ChartKind, OverlayKind, RenderOptions};

const SAMPLES: [f64; 8] = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_to_bytes(kind: ChartKind, overlay: OverlayKind) -> Vec<u8> {
    let mut chart = Chart::new();
    render(&mut chart, &SAMPLES, kind, None).expect("render");
    apply_overlay(&mut chart, &SAMPLES, overlay);

    let mut opts = RenderOptions::default();
    opts.width = 480;
    opts.height = 300;
    opts.draw_labels = false; // deterministic
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(format!("{name}.png"))
}

#[test]
fn golden_chart_kinds() {
    for kind in ChartKind::ALL {
        let bytes = render_to_bytes(kind, OverlayKind::None);
        assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
        write_or_compare(&snapshot_path(&kind.name().to_lowercase()), &bytes);
    }
}

#[test]
fn golden_trend_line() {
    let bytes = render_to_bytes(ChartKind::Scatter, OverlayKind::TrendLine);
    write_or_compare(&snapshot_path("scatter_trend"), &bytes);
}

#[test]
fn golden_clustering() {
    let bytes = render_to_bytes(ChartKind::Line, OverlayKind::Clustering);
    write_or_compare(&snapshot_path("line_clusters"), &bytes);
}
