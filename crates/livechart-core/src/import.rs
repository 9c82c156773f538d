// File: crates/livechart-core/src/import.rs
// Summary: CSV import into a classified Table.

use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::error::ImportError;
use crate::table::{Column, Table};

/// Load a `.csv` file (case-insensitive extension) with a header row.
pub fn import_table(path: impl AsRef<Path>) -> Result<Table, ImportError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if ext != "csv" {
        return Err(ImportError::unsupported(ext));
    }
    let file = std::fs::File::open(path).map_err(|source| ImportError::Io { path: path.to_path_buf(), source })?;
    let table = read_csv(file)?;
    info!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_names().len(),
        "imported table"
    );
    Ok(table)
}

/// Parse CSV text with a header row. Rows must all have the header's width.
pub fn read_csv(reader: impl Read) -> Result<Table, ImportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(ImportError::malformed("missing header row"));
    }

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for rec in rdr.records() {
        // The reader rejects ragged rows with an UnequalLengths error.
        let rec = rec?;
        for (col, value) in cells.iter_mut().zip(rec.iter()) {
            col.push(value.to_string());
        }
    }

    let mut table = Table::new();
    for (i, (name, col)) in headers.into_iter().zip(cells).enumerate() {
        let name = if name.is_empty() { format!("column_{}", i + 1) } else { name };
        if table.column(&name).is_some() {
            return Err(ImportError::malformed(format!("duplicate column {name:?}")));
        }
        table.push_column(name, Column::classify(col));
    }
    Ok(table)
}
