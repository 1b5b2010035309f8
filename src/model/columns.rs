//! Selected column handling

use crate::error::ColumnError;

/// Sorted 0-based indexes of the columns to expand
///
/// Built from the 1-based positions given on the command line. Duplicates
/// are kept as given; sorting only makes their order deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    indices: Vec<usize>,
}

impl ColumnSet {
    /// Parse 1-based column tokens into a sorted 0-based set
    pub fn parse<I, S>(tokens: I) -> Result<Self, ColumnError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut indices = tokens
            .into_iter()
            .map(|token| parse_column(token.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        if indices.is_empty() {
            return Err(ColumnError::NoColumns);
        }

        indices.sort_unstable();
        Ok(Self { indices })
    }

    /// Build a set directly from 0-based indexes
    pub fn from_indices(mut indices: Vec<usize>) -> Result<Self, ColumnError> {
        if indices.is_empty() {
            return Err(ColumnError::NoColumns);
        }
        indices.sort_unstable();
        Ok(Self { indices })
    }

    /// The 0-based indexes in ascending order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of selected columns, duplicates included
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Largest selected 0-based index
    pub fn max_index(&self) -> usize {
        // never empty once constructed
        self.indices.last().copied().unwrap_or(0)
    }

    /// Minimum field count a record needs
    pub fn required_fields(&self) -> usize {
        self.max_index() + 1
    }
}

/// Parse a single 1-based column token
fn parse_column(token: &str) -> Result<usize, ColumnError> {
    match token.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value - 1),
        _ => Err(ColumnError::InvalidColumnIndex(token.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sorts_and_shifts() {
        let set = ColumnSet::parse(["3", "1", "2"]).unwrap();
        assert_eq!(set.indices(), &[0, 1, 2]);
        assert_eq!(set.max_index(), 2);
        assert_eq!(set.required_fields(), 3);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let set = ColumnSet::parse(["4", "2", "4"]).unwrap();
        assert_eq!(set.indices(), &[1, 3, 3]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert_eq!(
            ColumnSet::parse(["0"]),
            Err(ColumnError::InvalidColumnIndex("0".to_string()))
        );
        assert_eq!(
            ColumnSet::parse(["2", "-1"]),
            Err(ColumnError::InvalidColumnIndex("-1".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            ColumnSet::parse(["two"]),
            Err(ColumnError::InvalidColumnIndex("two".to_string()))
        );
        assert_eq!(
            ColumnSet::parse(["1.5"]),
            Err(ColumnError::InvalidColumnIndex("1.5".to_string()))
        );
    }

    #[test]
    fn test_parse_empty() {
        let tokens: [&str; 0] = [];
        assert_eq!(ColumnSet::parse(tokens), Err(ColumnError::NoColumns));
        assert_eq!(ColumnSet::from_indices(vec![]), Err(ColumnError::NoColumns));
    }

    #[test]
    fn test_from_indices() {
        let set = ColumnSet::from_indices(vec![5, 0]).unwrap();
        assert_eq!(set.indices(), &[0, 5]);
    }
}
