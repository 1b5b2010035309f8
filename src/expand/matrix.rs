//! Sub-value matrix of one record

use crate::error::ExpandError;
use crate::model::{ColumnSet, Record};

/// Sub-values of each selected column, in selected-column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<'a> {
    rows: Vec<Vec<&'a str>>,
}

impl<'a> Matrix<'a> {
    /// Split every selected field of `record` on the literal `separator`
    ///
    /// Empty pieces are kept, so an empty field yields a single empty
    /// sub-value rather than none.
    pub fn build(
        record: &Record<'a>,
        columns: &ColumnSet,
        separator: &str,
    ) -> Result<Self, ExpandError> {
        if record.len() <= columns.max_index() {
            return Err(ExpandError::InsufficientColumns {
                fields: record.len(),
                required: columns.required_fields(),
            });
        }

        let rows = columns
            .indices()
            .iter()
            .map(|&index| record.fields()[index].split(separator).collect::<Vec<_>>())
            .collect();

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<&'a str>] {
        &self.rows
    }

    /// Sub-value count of each row
    pub fn row_lengths(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }

    /// Size of the full cartesian product, saturating on overflow
    pub fn product_len(&self) -> usize {
        self.rows
            .iter()
            .fold(1usize, |acc, row| acc.saturating_mul(row.len()))
    }

    pub fn into_rows(self) -> Vec<Vec<&'a str>> {
        self.rows
    }
}

impl<'a> From<Vec<Vec<&'a str>>> for Matrix<'a> {
    fn from(rows: Vec<Vec<&'a str>>) -> Self {
        Self { rows }
    }
}
