//! Tab-delimited records

/// Field delimiter of input and output lines
pub const FIELD_DELIMITER: char = '\t';

/// One input line split into its fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    fields: Vec<&'a str>,
}

impl<'a> Record<'a> {
    /// Split a raw line on tabs, dropping any trailing line terminator
    pub fn from_line(line: &'a str) -> Self {
        let line = line.trim_end_matches(&['\r', '\n'][..]);
        Self {
            fields: line.split(FIELD_DELIMITER).collect(),
        }
    }

    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false: splitting never yields zero fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get a field by 0-based index
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.fields.get(index).copied()
    }
}
