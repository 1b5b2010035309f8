//! expandsets - Expand multi-valued columns of tab-separated records
//!
//! Each input line is split on tabs; the selected columns are split again on a
//! separator and the record is emitted once per combination of sub-values
//! (cartesian product) or once per position (pairing mode).

pub mod config;
pub mod error;
pub mod expand;
pub mod logging;
pub mod model;
pub mod stream;

pub use config::{Config, ExpansionMode};
pub use error::{ColumnError, ExpandError, StreamError};
pub use expand::RowExpander;
pub use model::{ColumnSet, Record};
pub use stream::{run, Summary};
