// File: crates/livechart-render/src/main.rs
// Summary: Headless renderer: loads manual or CSV data, applies chart kind and overlay,
//          optionally simulates streaming ticks, and writes PNG/JPG/PDF files.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use livechart_core::logging::init_tracing;
use livechart_core::stream::RandomSource;
use livechart_core::{AppConfig, AppState, ChartKind, OverlayKind};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "livechart-render", about = "Render charts of comma-separated or CSV data to image files")]
struct Args {
    /// Comma-separated numbers, e.g. "3,1,4,1,5".
    #[arg(long, conflicts_with = "csv")]
    data: Option<String>,

    /// CSV file with a header row.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Column to plot (defaults to the first column).
    #[arg(long, requires = "csv")]
    column: Option<String>,

    /// line, bar, pie, scatter, histogram or area.
    #[arg(long, default_value = "line")]
    kind: ChartKind,

    /// none, trend or clustering.
    #[arg(long, default_value = "none")]
    overlay: OverlayKind,

    /// Output file; the extension picks the format. Defaults to target/out/chart_<kind>.png.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Render every chart kind into target/out instead of a single file.
    #[arg(long)]
    all: bool,

    /// Append this many synthetic streaming samples before rendering.
    #[arg(long, default_value_t = 0)]
    stream_ticks: usize,

    /// Seed for the synthetic samples.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print the imported table's summary.
    #[arg(long, requires = "csv")]
    summary: bool,

    /// Theme preset: dark or light.
    #[arg(long, default_value = "dark")]
    theme: String,

    #[arg(long, default_value_t = 1024)]
    width: i32,

    #[arg(long, default_value_t = 640)]
    height: i32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing("info")?;

    let config = AppConfig::with_theme(&args.theme).with_size(args.width, args.height);
    let mut app = AppState::new(config);

    if let Some(path) = &args.csv {
        app.import(path).with_context(|| format!("failed to import '{}'", path.display()))?;
        if let Some(col) = &args.column {
            if !app.columns().iter().any(|c| c == col) {
                bail!("column {col:?} not found; available: {}", app.columns().join(", "));
            }
            app.select_column(Some(col.clone()));
            app.update()?;
        }
        if args.summary {
            if let Some(table) = app.dataset().table() {
                print!("{}", table.summary());
            }
        }
    } else if let Some(data) = &args.data {
        app.set_entry(data.as_str());
        app.update()?;
    }

    if args.stream_ticks > 0 {
        app.set_streaming(true);
        let source = RandomSource::seeded(args.seed, config.stream.low, config.stream.high);
        for sample in source.take(args.stream_ticks) {
            app.on_stream_sample(sample)?;
        }
        app.set_streaming(false);
        info!(ticks = args.stream_ticks, kept = app.dataset().samples().len(), "simulated streaming");
    }

    app.set_overlay(args.overlay)?;

    let kinds: Vec<ChartKind> = if args.all { ChartKind::ALL.to_vec() } else { vec![args.kind] };
    for kind in kinds {
        app.set_chart_kind(kind)?;
        let out = match (&args.out, args.all) {
            (Some(path), false) => path.clone(),
            _ => out_name_with(args.csv.as_deref(), kind),
        };
        app.export(&out)?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}

/// Produce output file name like target/out/chart_<stem>_<kind>.png
fn out_name_with(input: Option<&Path>, kind: ChartKind) -> PathBuf {
    let stem = input.and_then(|p| p.file_stem()).and_then(|s| s.to_str()).unwrap_or("");
    let kind = kind.name().to_lowercase();
    let mut out = PathBuf::from("target/out");
    if stem.is_empty() {
        out.push(format!("chart_{kind}.png"));
    } else {
        out.push(format!("chart_{stem}_{kind}.png"));
    }
    out
}
