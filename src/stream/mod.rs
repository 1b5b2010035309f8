//! Stream driver: reads records, expands them, writes rows in input order

mod reader;
mod writer;

use std::io::{self, BufRead, Write};

use tracing::{debug, trace};

use crate::config::{Config, ExpansionMode};
use crate::error::{is_broken_pipe, StreamError};
use crate::expand::RowExpander;
use crate::model::Record;

pub use reader::LineReader;
pub use writer::RowWriter;

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Input records expanded
    pub records: usize,
    /// Output rows written
    pub rows: usize,
    /// The consumer closed the output before all rows were written
    pub closed_early: bool,
}

/// Check the run-wide preconditions before any input is read
pub fn validate(config: &Config) -> Result<(), StreamError> {
    if config.separator.is_empty() {
        return Err(StreamError::EmptySeparator);
    }
    if config.mode == ExpansionMode::Pairs && config.columns.len() != 2 {
        return Err(StreamError::PairingColumnCount(config.columns.len()));
    }
    Ok(())
}

/// Expand every record of `input` into `output`
///
/// Any invalid record aborts the whole run. A consumer closing the output
/// early is not an error: the run stops and reports `closed_early`.
pub fn run<R, W>(config: &Config, input: R, output: W) -> Result<Summary, StreamError>
where
    R: BufRead,
    W: Write,
{
    validate(config)?;
    debug!(
        columns = ?config.columns.indices(),
        separator = %config.separator,
        mode = ?config.mode,
        "Starting expansion"
    );

    let expander = RowExpander::from_config(config);
    let mut reader = LineReader::new(input);
    let mut writer = RowWriter::new(output);
    let mut summary = Summary::default();
    let mut anchor: Option<usize> = None;

    while let Some((line, text)) = reader.next_line()? {
        let record = Record::from_line(text);

        // Field counts are only compared against the first line for diagnostics
        match anchor {
            None => {
                debug!(fields = record.len(), "First line field count");
                anchor = Some(record.len());
            }
            Some(expected) if expected != record.len() => {
                debug!(line, expected, found = record.len(), "Field count differs from first line");
            }
            Some(_) => {}
        }

        let expansion = expander
            .expand(&record)
            .map_err(|source| StreamError::at_line(line, source))?;
        trace!(line, rows = expansion.len_hint(), "Expanding record");
        summary.records += 1;

        for row in expansion {
            if let Err(err) = writer.write_row(&row) {
                return stop_on_closed(err, summary);
            }
            summary.rows += 1;
        }
    }

    if let Err(err) = writer.flush() {
        return stop_on_closed(err, summary);
    }

    debug!(
        lines = reader.lines_read(),
        records = summary.records,
        rows = summary.rows,
        "Expansion finished"
    );
    Ok(summary)
}

fn stop_on_closed(err: io::Error, mut summary: Summary) -> Result<Summary, StreamError> {
    if is_broken_pipe(&err) {
        debug!(rows = summary.rows, "Output closed by consumer, stopping");
        summary.closed_early = true;
        Ok(summary)
    } else {
        Err(StreamError::Write(err))
    }
}
