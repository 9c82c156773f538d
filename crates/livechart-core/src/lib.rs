// File: crates/livechart-core/src/lib.rs
// Summary: Core library entry point; exports the dataset, chart, overlay, streaming and export API.

pub mod app;
pub mod axis;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod geometry;
pub mod grid;
pub mod import;
pub mod kind;
pub mod logging;
pub mod model;
pub mod overlay;
pub mod raster;
pub mod series;
pub mod stats;
pub mod stream;
pub mod table;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use app::{AppState, Selection};
pub use axis::Axis;
pub use chart::Chart;
pub use config::AppConfig;
pub use dataset::{Checkpoint, DataSource, Dataset};
pub use error::{AppError, ExportError, ImportError, ParseError, RenderError, SelectionError};
pub use export::{export_chart, ExportFormat};
pub use import::import_table;
pub use kind::{render, ChartKind};
pub use model::{fit_linear, kmeans_1d, LinearFit};
pub use overlay::{apply_overlay, Overlay, OverlayKind};
pub use raster::RenderOptions;
pub use series::{Series, SeriesRole, SeriesType, Wedge};
pub use stream::{SampleSink, StreamConfig, StreamDriver, StreamFlag};
pub use table::{Column, Table};
pub use theme::Theme;
pub use view::ViewState;
