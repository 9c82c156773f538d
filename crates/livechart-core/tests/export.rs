// File: crates/livechart-core/tests/export.rs
// Purpose: Export by file extension; raster outputs decode to the surface size.

use std::path::PathBuf;

use livechart_core::{export_chart, render, Chart, ChartKind, ExportError, ExportFormat, RenderOptions};

fn sample_chart() -> Chart {
    let mut chart = Chart::new();
    render(&mut chart, &[3.0, 1.0, 4.0, 1.0, 5.0], ChartKind::Line, None).unwrap();
    chart
}

fn out_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("export").join(name)
}

fn small_opts() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.width = 320;
    opts.height = 200;
    opts.draw_labels = false;
    opts
}

#[test]
fn png_decodes_to_surface_size() {
    let path = out_path("chart.png");
    let format = export_chart(&sample_chart(), &small_opts(), &path).expect("export png");
    assert_eq!(format, ExportFormat::Png);

    let img = image::open(&path).expect("decode png");
    assert_eq!((img.width(), img.height()), (320, 200));
}

#[test]
fn jpg_and_jpeg_are_jpeg() {
    for name in ["chart.jpg", "chart.JPEG"] {
        let path = out_path(name);
        let format = export_chart(&sample_chart(), &small_opts(), &path).expect("export jpeg");
        assert_eq!(format, ExportFormat::Jpeg);
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(&[0xFF, 0xD8]), "{name} should carry a JPEG SOI marker");
        let img = image::load_from_memory(&bytes).expect("decode jpeg");
        assert_eq!((img.width(), img.height()), (320, 200));
    }
}

#[test]
fn pdf_has_pdf_header() {
    let path = out_path("nested/dir/chart.pdf");
    let format = export_chart(&sample_chart(), &small_opts(), &path).expect("export pdf");
    assert_eq!(format, ExportFormat::Pdf);
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn unknown_extension_writes_nothing() {
    let path = out_path("chart.bmp");
    let err = export_chart(&sample_chart(), &small_opts(), &path).unwrap_err();
    assert!(matches!(err, ExportError::UnsupportedExtension { ref extension } if extension == "bmp"));
    assert!(!path.exists());
}

#[test]
fn empty_chart_still_exports() {
    let mut chart = Chart::new();
    render(&mut chart, &[], ChartKind::Pie, None).unwrap();
    let path = out_path("empty.png");
    export_chart(&chart, &small_opts(), &path).expect("export empty");
    assert!(path.exists());
}
