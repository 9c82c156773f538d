// File: crates/livechart-core/src/dataset.rs
// Summary: Dataset holder: the sample sequence, its source, and the imported table.

use crate::error::{ParseError, SelectionError};
use crate::table::Table;

/// Default streaming window.
pub const STREAM_CAPACITY: usize = 20;

/// What the sample sequence currently mirrors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DataSource {
    #[default]
    Empty,
    Manual,
    Column(String),
}

/// Saved samples and source; see [`Dataset::checkpoint`].
#[derive(Clone, Debug, PartialEq)]
pub struct Checkpoint {
    samples: Vec<f64>,
    source: DataSource,
}

#[derive(Clone, Debug)]
pub struct Dataset {
    samples: Vec<f64>,
    source: DataSource,
    table: Option<Table>,
    capacity: usize,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::with_capacity(STREAM_CAPACITY)
    }
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// `capacity` bounds the sequence while streaming (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self { samples: Vec::new(), source: DataSource::Empty, table: None, capacity: capacity.max(1) }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Active column name when the samples mirror a table column.
    pub fn active_column(&self) -> Option<&str> {
        match &self.source {
            DataSource::Column(name) => Some(name),
            _ => None,
        }
    }

    /// Replace the samples with comma-separated numbers. All-or-nothing: on error
    /// nothing changes. Blank input is accepted and changes nothing.
    pub fn set_from_manual_entry(&mut self, text: &str) -> Result<(), ParseError> {
        if text.trim().is_empty() {
            return Ok(());
        }
        let parsed = parse_samples(text)?;
        self.samples = parsed;
        self.source = DataSource::Manual;
        Ok(())
    }

    /// Replace the samples with the named numeric column of `table`; missing cells are
    /// dropped. On error nothing changes.
    pub fn set_from_column(&mut self, table: &Table, name: &str) -> Result<(), SelectionError> {
        let column = table
            .column(name)
            .ok_or_else(|| SelectionError::UnknownColumn { name: name.to_string() })?;
        let values = column
            .to_f64()
            .ok_or_else(|| SelectionError::NotNumeric { name: name.to_string() })?;
        self.samples = values;
        self.source = DataSource::Column(name.to_string());
        Ok(())
    }

    /// [`Self::set_from_column`] against the held table.
    pub fn select_column(&mut self, name: &str) -> Result<(), SelectionError> {
        let table = self.table.take().ok_or(SelectionError::NoTable)?;
        let result = self.set_from_column(&table, name);
        self.table = Some(table);
        result
    }

    /// Install a freshly imported table, replacing the previous one wholesale.
    /// The samples keep their current values until the next update. Returns the old table.
    pub fn replace_table(&mut self, table: Table) -> Option<Table> {
        self.table.replace(table)
    }

    /// Put back a table returned by [`Self::replace_table`].
    pub fn restore_table(&mut self, table: Option<Table>) {
        self.table = table;
    }

    /// Snapshot of the samples and their source, for rolling back a rejected change.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint { samples: self.samples.clone(), source: self.source.clone() }
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.samples = checkpoint.samples;
        self.source = checkpoint.source;
    }

    /// Append one value, evicting the oldest while above capacity.
    pub fn append_streaming_sample(&mut self, value: f64) {
        self.samples.push(value);
        if self.samples.len() > self.capacity {
            let excess = self.samples.len() - self.capacity;
            self.samples.drain(..excess);
        }
    }
}

/// Parse comma-separated finite numbers, reporting the first bad token.
pub fn parse_samples(text: &str) -> Result<Vec<f64>, ParseError> {
    text.split(',')
        .enumerate()
        .map(|(position, raw)| {
            let token = raw.trim();
            token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ParseError { token: token.to_string(), position })
        })
        .collect()
}
