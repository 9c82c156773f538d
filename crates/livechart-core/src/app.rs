// File: crates/livechart-core/src/app.rs
// Summary: Explicit application state: dataset, selections and the chart surface, with
//          every user action as a method. Only the owning thread calls these.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::chart::Chart;
use crate::config::AppConfig;
use crate::dataset::Dataset;
use crate::error::{AppError, RenderError};
use crate::export::{export_chart, ExportFormat};
use crate::import::import_table;
use crate::kind::{render, ChartKind};
use crate::overlay::{apply_overlay, OverlayKind};
use crate::stream::StreamFlag;

/// Transient UI selections read at redraw time.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    pub chart_kind: ChartKind,
    pub overlay: OverlayKind,
    /// Only meaningful while a table is loaded.
    pub column: Option<String>,
    pub streaming: StreamFlag,
}

pub struct AppState {
    config: AppConfig,
    dataset: Dataset,
    selection: Selection,
    columns: Vec<String>,
    chart: Chart,
    entry: String,
    status: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let mut state = Self {
            dataset: Dataset::with_capacity(config.stream.capacity),
            config,
            selection: Selection::default(),
            columns: Vec::new(),
            chart: Chart::new(),
            entry: String::new(),
            status: String::from("Enter comma-separated numbers"),
        };
        // An empty sequence renders for every kind, so this cannot fail.
        let _ = state.redraw();
        state
    }

    pub fn config(&self) -> &AppConfig { &self.config }
    pub fn dataset(&self) -> &Dataset { &self.dataset }
    pub fn selection(&self) -> &Selection { &self.selection }
    pub fn chart(&self) -> &Chart { &self.chart }
    pub fn entry(&self) -> &str { &self.entry }
    /// Last user-visible diagnostic or confirmation.
    pub fn status(&self) -> &str { &self.status }
    /// Column selector contents, in header order.
    pub fn columns(&self) -> &[String] { &self.columns }

    pub fn entry_mut(&mut self) -> &mut String {
        &mut self.entry
    }

    pub fn set_entry(&mut self, text: impl Into<String>) {
        self.entry = text.into();
    }

    /// Re-read the selected source (the chosen column, else the manual entry) and redraw.
    /// An unusable column is ignored and leaves the samples as they were. If the new
    /// samples cannot be drawn, the previous samples are kept.
    pub fn update(&mut self) -> Result<(), AppError> {
        let result = self.update_inner();
        self.diagnose(result)
    }

    fn update_inner(&mut self) -> Result<(), AppError> {
        let checkpoint = self.dataset.checkpoint();
        match self.selection.column.clone() {
            Some(column) if self.dataset.table().is_some() => {
                if let Err(e) = self.dataset.select_column(&column) {
                    debug!(error = %e, "column selection ignored");
                }
            }
            _ => self.dataset.set_from_manual_entry(&self.entry)?,
        }
        if let Err(e) = self.redraw() {
            self.dataset.restore(checkpoint);
            return Err(e.into());
        }
        self.status = format!("{} samples", self.dataset.samples().len());
        Ok(())
    }

    /// Render the current samples with the current selections, then the overlay.
    pub fn redraw(&mut self) -> Result<(), RenderError> {
        let samples = self.dataset.samples();
        render(&mut self.chart, samples, self.selection.chart_kind, self.dataset.active_column())?;
        apply_overlay(&mut self.chart, samples, self.selection.overlay);
        Ok(())
    }

    /// Switch chart kind and redraw. A kind that cannot draw the current samples is
    /// not selected.
    pub fn set_chart_kind(&mut self, kind: ChartKind) -> Result<(), AppError> {
        let previous = std::mem::replace(&mut self.selection.chart_kind, kind);
        let result = self.redraw().map_err(AppError::from);
        if result.is_err() {
            self.selection.chart_kind = previous;
        }
        self.diagnose(result)
    }

    pub fn set_overlay(&mut self, overlay: OverlayKind) -> Result<(), AppError> {
        self.selection.overlay = overlay;
        let result = self.redraw().map_err(AppError::from);
        self.diagnose(result)
    }

    /// Choose the column read by the next [`Self::update`]. `None` returns to manual entry.
    pub fn select_column(&mut self, column: Option<String>) {
        self.selection.column = column;
    }

    /// Cycle the column selector; returns the newly selected column.
    pub fn next_column(&mut self) -> Option<&str> {
        if self.columns.is_empty() {
            return None;
        }
        let next = match &self.selection.column {
            Some(cur) => self.columns.iter().position(|c| c == cur).map_or(0, |i| (i + 1) % self.columns.len()),
            None => 0,
        };
        self.selection.column = Some(self.columns[next].clone());
        self.selection.column.as_deref()
    }

    /// Load a CSV table, repopulate the column selector, select its first column and
    /// update. On failure the previous table and selections stay in place.
    pub fn import(&mut self, path: impl AsRef<Path>) -> Result<(), AppError> {
        let result = self.import_inner(path.as_ref());
        self.diagnose(result)
    }

    fn import_inner(&mut self, path: &Path) -> Result<(), AppError> {
        let table = import_table(path)?;
        info!(summary = %table.summary().trim_end(), "table summary");
        let columns = table.column_names();
        let first = columns.first().cloned();
        let prev_columns = std::mem::replace(&mut self.columns, columns);
        let prev_column = std::mem::replace(&mut self.selection.column, first);
        let prev_table = self.dataset.replace_table(table);

        if let Err(e) = self.update_inner() {
            self.dataset.restore_table(prev_table);
            self.selection.column = prev_column;
            self.columns = prev_columns;
            return Err(e);
        }
        self.status = format!("Imported {} ({} columns)", path.display(), self.columns.len());
        Ok(())
    }

    pub fn export(&mut self, path: impl AsRef<Path>) -> Result<ExportFormat, AppError> {
        let path = path.as_ref();
        let result = export_chart(&self.chart, &self.config.render, path).map_err(AppError::from);
        if result.is_ok() {
            self.status = format!("Saved {}", path.display());
        }
        self.diagnose(result)
    }

    /// Handle for the producer thread to poll.
    pub fn stream_flag(&self) -> StreamFlag {
        self.selection.streaming.clone()
    }

    pub fn set_streaming(&mut self, enabled: bool) {
        self.selection.streaming.set(enabled);
        self.status = if enabled { "Streaming on".into() } else { "Streaming off".into() };
    }

    pub fn toggle_streaming(&mut self) -> bool {
        let enabled = !self.selection.streaming.is_enabled();
        self.set_streaming(enabled);
        enabled
    }

    /// Owner-side half of the streaming driver: append one produced sample and redraw.
    /// A sample the current chart cannot draw is dropped and the window stays as it was.
    pub fn on_stream_sample(&mut self, sample: f64) -> Result<(), AppError> {
        let checkpoint = self.dataset.checkpoint();
        self.dataset.append_streaming_sample(sample);
        let result = self.redraw().map_err(AppError::from);
        if result.is_err() {
            self.dataset.restore(checkpoint);
        }
        self.diagnose(result)
    }

    fn diagnose<T>(&mut self, result: Result<T, AppError>) -> Result<T, AppError> {
        if let Err(e) = &result {
            warn!(error = %e, "action failed");
            self.status = e.to_string();
        }
        result
    }
}
