use std::collections::BTreeMap;

use crate::value::Value;

const MISSING: Value = Value::Missing;

/// One listing row: a column-name to cell mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub cells: BTreeMap<String, Value>,
}

impl Record {
    /// Cell for `column`, or `Missing` when the row has no such cell.
    pub fn get(&self, column: &str) -> &Value {
        self.cells.get(column).unwrap_or(&MISSING)
    }

    pub fn set(&mut self, column: &str, value: Value) {
        self.cells.insert(column.to_string(), value);
    }
}

impl<const N: usize> From<[(&str, Value); N]> for Record {
    fn from(cells: [(&str, Value); N]) -> Self {
        Self {
            cells: cells
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }
}

/// The in-memory tabular record set flowing through the cleaning pipeline.
///
/// `columns` fixes the serialization order; `rows` keep the source file's
/// order. Cleaning stages remove rows and rewrite columns but never reorder
/// or append rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    pub columns: Vec<String>,
    pub rows: Vec<Record>,
}

impl RecordSet {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Record) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Adds `name` to the column order if it is not already present.
    pub fn ensure_column(&mut self, name: &str) {
        if !self.has_column(name) {
            self.columns.push(name.to_string());
        }
    }

    /// Removes a column from the order and from every row. Absent columns
    /// are ignored.
    pub fn drop_column(&mut self, name: &str) {
        self.columns.retain(|c| c != name);
        for row in &mut self.rows {
            row.cells.remove(name);
        }
    }

    /// Keeps the rows whose flag is `true`, preserving relative order.
    /// `keep` must have one flag per row.
    pub fn retain_rows(&mut self, keep: &[bool]) {
        debug_assert_eq!(keep.len(), self.rows.len());
        let mut index = 0;
        self.rows.retain(|_| {
            let kept = keep.get(index).copied().unwrap_or(false);
            index += 1;
            kept
        });
    }
}
