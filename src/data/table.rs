// ============================================================
// Layer 4 — Column-Addressable Table
// ============================================================
// The one tabular representation every stage exchanges on disk.
// Cells are stored as strings (exactly what CSV gives us) and
// parsed to f64 lazily, only for the columns a stage actually
// needs. Row order is load order and is never reordered by any
// accessor — the combiner's positional merge depends on that.

use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::errors::PipelineError;

/// In-memory table: ordered column names plus rows of string cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given column names.
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns, rows: Vec::new() }
    }

    /// Build a table from equal-length f64 columns, in the given order.
    pub fn from_f64_columns(named: Vec<(String, Vec<f64>)>) -> Result<Self> {
        let n_rows = named.first().map(|(_, v)| v.len()).unwrap_or(0);
        for (name, values) in &named {
            if values.len() != n_rows {
                return Err(PipelineError::LengthMismatch {
                    expected: n_rows,
                    actual: values.len(),
                })
                .with_context(|| format!("column '{name}'"));
            }
        }
        let columns = named.iter().map(|(n, _)| n.clone()).collect();
        let rows = (0..n_rows)
            .map(|i| named.iter().map(|(_, v)| v[i].to_string()).collect())
            .collect();
        Ok(Self { columns, rows })
    }

    /// Append one row. The row must match the column count.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(PipelineError::LengthMismatch {
                expected: self.columns.len(),
                actual: row.len(),
            }
            .into());
        }
        self.rows.push(row);
        Ok(())
    }

    /// Number of data rows (header excluded).
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Column names, in table order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Raw rows, in load order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Index of a named column, or MissingColumn.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| PipelineError::MissingColumn(name.to_string()).into())
    }

    /// One named column as strings.
    pub fn column_str(&self, name: &str) -> Result<Vec<String>> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|r| r[idx].clone()).collect())
    }

    /// One named column parsed as f64.
    pub fn column_f64(&self, name: &str) -> Result<Vec<f64>> {
        let idx = self.column_index(name)?;
        self.rows
            .iter()
            .enumerate()
            .map(|(i, r)| {
                r[idx].parse::<f64>().with_context(|| {
                    format!("row {i}: cannot parse '{}' in column '{name}' as a number", r[idx])
                })
            })
            .collect()
    }

    /// Every cell parsed as f64, one Vec per row, column order preserved.
    /// Used to hand a feature table to the regressor.
    pub fn to_f64_rows(&self) -> Result<Vec<Vec<f64>>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .zip(&self.columns)
                    .map(|(cell, col)| {
                        cell.parse::<f64>().with_context(|| {
                            format!("row {i}: cannot parse '{cell}' in column '{col}' as a number")
                        })
                    })
                    .collect()
            })
            .collect()
    }

    /// New table containing the given rows (by index), in the given order.
    /// Indices must be in bounds; duplicates are honored as-is.
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: indices.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }

    // ── CSV round-trip ────────────────────────────────────────────────────────

    /// Read a CSV file with a header row.
    pub fn read_csv(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("cannot open CSV '{}'", path.display()))?;

        let columns: Vec<String> = reader
            .headers()
            .with_context(|| format!("cannot read CSV header from '{}'", path.display()))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let record = record
                .with_context(|| format!("cannot read row {i} from '{}'", path.display()))?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }

        Ok(Self { columns, rows })
    }

    /// Write the table as CSV with a header row.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("cannot create CSV '{}'", path.display()))?;

        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
