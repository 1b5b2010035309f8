//! Data model for tab-delimited records and selected columns

mod columns;
mod record;

pub use columns::ColumnSet;
pub use record::{Record, FIELD_DELIMITER};
