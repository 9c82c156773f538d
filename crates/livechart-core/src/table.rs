// File: crates/livechart-core/src/table.rs
// Summary: Imported tabular data with numeric/categorical column classification.

use std::fmt::Write as _;

use crate::stats::{value_counts, Describe};

#[derive(Clone, Debug, PartialEq)]
pub enum Column {
    /// Every non-empty cell parsed as a number; `None` marks a missing cell.
    Numeric(Vec<Option<f64>>),
    Categorical(Vec<String>),
}

impl Column {
    /// Classify raw cells: numeric when every non-empty cell parses as a finite `f64`
    /// and at least one cell is non-empty.
    pub fn classify(cells: Vec<String>) -> Self {
        let parsed: Option<Vec<Option<f64>>> = cells
            .iter()
            .map(|c| {
                let t = c.trim();
                if t.is_empty() {
                    Some(None)
                } else {
                    t.parse::<f64>().ok().filter(|v| v.is_finite()).map(Some)
                }
            })
            .collect();
        match parsed {
            Some(values) if values.iter().any(Option::is_some) => Column::Numeric(values),
            _ => Column::Categorical(cells),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Categorical(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Column::Numeric(_))
    }

    /// Non-missing values coerced to `f64`; `None` for categorical columns.
    pub fn to_f64(&self) -> Option<Vec<f64>> {
        match self {
            Column::Numeric(v) => Some(v.iter().flatten().copied().collect()),
            Column::Categorical(_) => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<(String, Column)>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column; a column with the same name is replaced in place.
    pub fn push_column(&mut self, name: impl Into<String>, column: Column) {
        let name = name.into();
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = column,
            None => self.columns.push((name, column)),
        }
    }

    /// Column names in header order.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns.iter().map(|(n, c)| (n.as_str(), c))
    }

    pub fn numeric_columns(&self) -> Vec<&str> {
        self.columns().filter(|(_, c)| c.is_numeric()).map(|(n, _)| n).collect()
    }

    pub fn categorical_columns(&self) -> Vec<&str> {
        self.columns().filter(|(_, c)| !c.is_numeric()).map(|(n, _)| n).collect()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |(_, c)| c.len())
    }

    pub fn describe(&self, name: &str) -> Option<Describe> {
        self.column(name)?.to_f64().and_then(|v| Describe::of(&v))
    }

    pub fn value_counts(&self, name: &str) -> Option<Vec<(String, usize)>> {
        match self.column(name)? {
            Column::Categorical(cells) => Some(value_counts(cells.iter().map(String::as_str))),
            Column::Numeric(_) => None,
        }
    }

    /// Text report: descriptive statistics for numeric columns, frequencies for the rest.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} rows x {} columns", self.row_count(), self.columns.len());
        for (name, column) in self.columns() {
            match column {
                Column::Numeric(_) => match self.describe(name) {
                    Some(d) => {
                        let _ = writeln!(out, "[numeric] {name}: {d}");
                    }
                    None => {
                        let _ = writeln!(out, "[numeric] {name}: no values");
                    }
                },
                Column::Categorical(_) => {
                    let counts = self.value_counts(name).unwrap_or_default();
                    let top: Vec<String> = counts.iter().take(5).map(|(v, c)| format!("{v:?}={c}")).collect();
                    let _ = writeln!(out, "[categorical] {name}: {} distinct; {}", counts.len(), top.join(", "));
                }
            }
        }
        out
    }
}
