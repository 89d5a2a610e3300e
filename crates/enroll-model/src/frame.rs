use crate::error::{FrameError, Result};

/// Column-named table of string cells, the working representation between
/// pipeline steps. Every row has exactly one cell per column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Frame {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a frame from pre-assembled rows, rejecting width mismatches.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let width = columns.len();
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(FrameError::WidthMismatch {
                    row: idx,
                    expected: width,
                    found: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(FrameError::WidthMismatch {
                row: self.rows.len(),
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|cells| cells[idx].as_str())
    }

    pub fn set(&mut self, row: usize, column: &str, value: String) -> Result<()> {
        let idx = self
            .column_index(column)
            .ok_or_else(|| FrameError::UnknownColumn(column.to_string()))?;
        if let Some(cells) = self.rows.get_mut(row) {
            cells[idx] = value;
        }
        Ok(())
    }

    /// Rewrite one column cell-by-cell. The closure receives the row index
    /// and current value. Returns false when the column does not exist.
    pub fn update_column<F>(&mut self, column: &str, mut update: F) -> bool
    where
        F: FnMut(usize, &str) -> String,
    {
        let Some(idx) = self.column_index(column) else {
            return false;
        };
        for (row, cells) in self.rows.iter_mut().enumerate() {
            cells[idx] = update(row, &cells[idx]);
        }
        true
    }

    /// Append a column filled with copies of `fill`.
    pub fn push_column(&mut self, name: &str, fill: &str) {
        self.columns.push(name.to_string());
        for cells in &mut self.rows {
            cells.push(fill.to_string());
        }
    }

    /// Append a column with one value per row. Rows beyond the supplied
    /// values receive an empty cell.
    pub fn push_column_values(&mut self, name: &str, values: Vec<String>) {
        debug_assert_eq!(values.len(), self.rows.len());
        let mut values = values.into_iter();
        self.columns.push(name.to_string());
        for cells in &mut self.rows {
            cells.push(values.next().unwrap_or_default());
        }
    }

    pub fn drop_column(&mut self, name: &str) -> bool {
        let Some(idx) = self.column_index(name) else {
            return false;
        };
        self.columns.remove(idx);
        for cells in &mut self.rows {
            cells.remove(idx);
        }
        true
    }

    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        let Some(idx) = self.column_index(from) else {
            return false;
        };
        self.columns[idx] = to.to_string();
        true
    }

    /// Project to the named columns, in the given order.
    pub fn select(&self, names: &[&str]) -> Result<Frame> {
        let mut indices = Vec::with_capacity(names.len());
        for name in names {
            let idx = self
                .column_index(name)
                .ok_or_else(|| FrameError::UnknownColumn((*name).to_string()))?;
            indices.push(idx);
        }
        let columns = names.iter().map(|name| (*name).to_string()).collect();
        let rows = self
            .rows
            .iter()
            .map(|cells| indices.iter().map(|&idx| cells[idx].clone()).collect())
            .collect();
        Ok(Frame { columns, rows })
    }
}
