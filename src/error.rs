//! Error types for expandsets.
//!
//! - [`ColumnError`] - invalid column arguments
//! - [`ExpandError`] - a single record cannot be expanded
//! - [`StreamError`] - fatal conditions of a whole run
//!
//! Record-level failures are lifted into [`StreamError`] together with the
//! line number they occurred on.

use std::io;

use thiserror::Error;

/// Errors while parsing the selected columns.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColumnError {
    /// A column argument is not a positive integer.
    #[error("Invalid column index: {0}")]
    InvalidColumnIndex(String),

    /// No column was given.
    #[error("At least one column to expand is required")]
    NoColumns,
}

/// Errors while expanding one record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpandError {
    /// The record is too short for the largest selected column.
    #[error("Insufficient column number: record has {fields} fields but column {required} is selected")]
    InsufficientColumns { fields: usize, required: usize },

    /// The two sets differ in size in pairing mode.
    #[error(
        "The two sets to expand must have the same size when --pairs is indicated ({first} - {second})"
    )]
    PairingSizeMismatch { first: usize, second: usize },
}

/// Fatal errors of a run.
#[derive(Debug, Error)]
pub enum StreamError {
    /// Pairing mode requires exactly two columns.
    #[error("If --pairs is indicated then exactly 2 columns to expand are required (got {0})")]
    PairingColumnCount(usize),

    /// The separator is the empty string.
    #[error("The separator must not be empty")]
    EmptySeparator,

    /// A record failed to expand.
    #[error("line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: ExpandError,
    },

    /// Reading input failed.
    #[error("Failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    /// Writing output failed for a reason other than a closed consumer.
    #[error("Failed to write output: {0}")]
    Write(#[source] io::Error),
}

impl StreamError {
    /// Attach a 1-based line number to an expansion failure
    pub fn at_line(line: usize, source: ExpandError) -> Self {
        StreamError::Record { line, source }
    }

    /// The line number this error refers to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            StreamError::Record { line, .. } | StreamError::Read { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Whether an I/O error means the downstream consumer went away
pub fn is_broken_pipe(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::BrokenPipe
}
