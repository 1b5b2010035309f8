//! Configuration handling for expandsets

use crate::model::ColumnSet;

/// Default separator between sub-values of a column
pub const DEFAULT_SEPARATOR: &str = ";";

/// How the sub-values of the selected columns are combined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpansionMode {
    /// Every combination of one sub-value per selected column
    #[default]
    Cartesian,
    /// Positional pairing of exactly two equal-length sets
    Pairs,
}

/// Configuration for an expansion run
#[derive(Debug, Clone)]
pub struct Config {
    /// Columns whose fields are split into sub-values
    pub columns: ColumnSet,
    /// Literal separator between sub-values
    pub separator: String,
    /// Cartesian product or positional pairing
    pub mode: ExpansionMode,
}

impl Config {
    /// Create a new Config for the given columns with the default separator
    pub fn new(columns: ColumnSet) -> Self {
        Self {
            columns,
            separator: DEFAULT_SEPARATOR.to_string(),
            mode: ExpansionMode::default(),
        }
    }

    /// Set the sub-value separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the expansion mode
    pub fn with_mode(mut self, mode: ExpansionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Shorthand for switching pairing mode on or off
    pub fn with_pairs(self, pairs: bool) -> Self {
        let mode = if pairs {
            ExpansionMode::Pairs
        } else {
            ExpansionMode::Cartesian
        };
        self.with_mode(mode)
    }
}
