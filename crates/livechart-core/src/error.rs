// File: crates/livechart-core/src/error.rs
// Summary: Error taxonomy for parsing, column selection, rendering, import and export.

use std::path::PathBuf;
use thiserror::Error;

/// Manual entry contained a token that is not a finite decimal number.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid number {token:?} at position {position}; enter comma-separated numbers")]
pub struct ParseError {
    /// The offending token, trimmed.
    pub token: String,
    /// Zero-based position of the token in the comma-separated list.
    pub position: usize,
}

/// A column could not be used as the sample source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no table has been imported")]
    NoTable,

    #[error("column {name:?} is not part of the imported table")]
    UnknownColumn { name: String },

    #[error("column {name:?} is not numeric")]
    NotNumeric { name: String },
}

/// Chart-level drawing precondition failures.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Pie wedges need non-negative sizes.
    #[error("pie chart needs non-negative values; sample {index} is {value}")]
    NegativePieValue { index: usize, value: f64 },

    /// Skia could not produce a surface or encode it.
    #[error(transparent)]
    Raster(#[from] anyhow::Error),
}

/// Loading an external table failed.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("unsupported import format {extension:?}; only .csv is accepted")]
    UnsupportedExtension { extension: String },

    #[error("failed to open {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed table: {0}")]
    Malformed(String),
}

impl ImportError {
    pub fn unsupported(extension: impl Into<String>) -> Self {
        Self::UnsupportedExtension { extension: extension.into() }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed(reason.into())
    }
}

/// Serializing the surface to a file failed.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unsupported export format {extension:?}; use .png, .jpg or .pdf")]
    UnsupportedExtension { extension: String },

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl ExportError {
    pub fn unsupported(extension: impl Into<String>) -> Self {
        Self::UnsupportedExtension { extension: extension.into() }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

/// Everything a user action on [`crate::AppState`] can report to the diagnostic channel.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
