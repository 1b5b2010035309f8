//! Row expansion: one input record into many output rows

mod matrix;
mod odometer;

use std::iter::Zip;
use std::vec::IntoIter;

use crate::config::{Config, ExpansionMode};
use crate::error::ExpandError;
use crate::model::{ColumnSet, Record};

pub use matrix::Matrix;
pub use odometer::Odometer;

/// Expands records according to a fixed column selection
#[derive(Debug, Clone, Copy)]
pub struct RowExpander<'c> {
    columns: &'c ColumnSet,
    separator: &'c str,
    mode: ExpansionMode,
}

impl<'c> RowExpander<'c> {
    pub fn new(columns: &'c ColumnSet, separator: &'c str, mode: ExpansionMode) -> Self {
        Self {
            columns,
            separator,
            mode,
        }
    }

    /// Create an expander from a run configuration
    pub fn from_config(config: &'c Config) -> Self {
        Self::new(&config.columns, &config.separator, config.mode)
    }

    /// Expand a single record into a lazy sequence of output rows
    ///
    /// Pairing is used only when requested and exactly two columns are
    /// selected; every other selection falls back to the cartesian product.
    pub fn expand<'a>(&self, record: &Record<'a>) -> Result<Expansion<'a, 'c>, ExpandError> {
        let matrix = Matrix::build(record, self.columns, self.separator)?;

        let combinations = match self.mode {
            ExpansionMode::Pairs => match <[Vec<&'a str>; 2]>::try_from(matrix.into_rows()) {
                Ok([first, second]) => {
                    if first.len() != second.len() {
                        return Err(ExpandError::PairingSizeMismatch {
                            first: first.len(),
                            second: second.len(),
                        });
                    }
                    Combinations::Pairs(first.into_iter().zip(second))
                }
                Err(rows) => Combinations::Cartesian(Odometer::new(Matrix::from(rows))),
            },
            ExpansionMode::Cartesian => Combinations::Cartesian(Odometer::new(matrix)),
        };

        Ok(Expansion {
            fields: record.fields().to_vec(),
            columns: self.columns.indices(),
            combinations,
        })
    }
}

#[derive(Debug, Clone)]
enum Combinations<'a> {
    Cartesian(Odometer<'a>),
    Pairs(Zip<IntoIter<&'a str>, IntoIter<&'a str>>),
}

/// Output rows of one record, produced on demand
///
/// Each row is the input record with every selected field replaced by one
/// sub-value; all other fields keep their position and content.
#[derive(Debug, Clone)]
pub struct Expansion<'a, 'c> {
    fields: Vec<&'a str>,
    columns: &'c [usize],
    combinations: Combinations<'a>,
}

impl<'a, 'c> Expansion<'a, 'c> {
    /// Rows still to be produced
    pub fn len_hint(&self) -> usize {
        self.size_hint().0
    }
}

impl<'a, 'c> Iterator for Expansion<'a, 'c> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.combinations {
            Combinations::Cartesian(odometer) => {
                let values = odometer.next()?;
                // duplicate columns: the later assignment wins
                for (&column, value) in self.columns.iter().zip(values) {
                    self.fields[column] = value;
                }
            }
            Combinations::Pairs(pairs) => {
                let (first, second) = pairs.next()?;
                self.fields[self.columns[0]] = first;
                self.fields[self.columns[1]] = second;
            }
        }
        Some(self.fields.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.combinations {
            Combinations::Cartesian(odometer) => odometer.size_hint(),
            Combinations::Pairs(pairs) => pairs.size_hint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_line(line: &str, columns: &[&str], mode: ExpansionMode) -> Vec<String> {
        let columns = ColumnSet::parse(columns).unwrap();
        let expander = RowExpander::new(&columns, ";", mode);
        let record = Record::from_line(line);
        expander
            .expand(&record)
            .unwrap()
            .map(|row| row.join("\t"))
            .collect()
    }

    #[test]
    fn test_single_column() {
        assert_eq!(
            expand_line("A\tx;y\tZ", &["2"], ExpansionMode::Cartesian),
            vec!["A\tx\tZ", "A\ty\tZ"]
        );
    }

    #[test]
    fn test_two_columns_cartesian_order() {
        assert_eq!(
            expand_line("A\ta;b\tc;d", &["2", "3"], ExpansionMode::Cartesian),
            vec!["A\ta\tc", "A\tb\tc", "A\ta\td", "A\tb\td"]
        );
    }

    #[test]
    fn test_column_order_follows_sorted_indexes() {
        assert_eq!(
            expand_line("A\ta;b\tc;d", &["3", "2"], ExpansionMode::Cartesian),
            vec!["A\ta\tc", "A\tb\tc", "A\ta\td", "A\tb\td"]
        );
    }

    #[test]
    fn test_pairs() {
        assert_eq!(
            expand_line("A\ta;b\tc;d", &["2", "3"], ExpansionMode::Pairs),
            vec!["A\ta\tc", "A\tb\td"]
        );
    }

    #[test]
    fn test_pairs_size_mismatch() {
        let columns = ColumnSet::parse(["1", "2"]).unwrap();
        let expander = RowExpander::new(&columns, ";", ExpansionMode::Pairs);
        let record = Record::from_line("a;b\tc;d;e");
        assert_eq!(
            expander.expand(&record).err(),
            Some(ExpandError::PairingSizeMismatch {
                first: 2,
                second: 3
            })
        );
    }

    #[test]
    fn test_pairs_mode_with_three_columns_is_cartesian() {
        assert_eq!(
            expand_line("a;b\tc\td;e", &["1", "2", "3"], ExpansionMode::Pairs).len(),
            4
        );
    }

    #[test]
    fn test_row_count_is_product() {
        let rows = expand_line("a;b;c\tx\t1;2\tkeep", &["1", "2", "3"], ExpansionMode::Cartesian);
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|row| row.ends_with("\tkeep")));

        let mut unique = rows.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), rows.len());
    }

    #[test]
    fn test_empty_field_expands_to_one_row() {
        assert_eq!(
            expand_line("A\t\tZ", &["2"], ExpansionMode::Cartesian),
            vec!["A\t\tZ"]
        );
    }

    #[test]
    fn test_consecutive_separators_keep_empty_values() {
        assert_eq!(
            expand_line("A\t;x;", &["2"], ExpansionMode::Cartesian),
            vec!["A\t", "A\tx", "A\t"]
        );
    }

    #[test]
    fn test_duplicate_column_last_assignment_wins() {
        assert_eq!(
            expand_line("a;b\tZ", &["1", "1"], ExpansionMode::Cartesian),
            vec!["a\tZ", "a\tZ", "b\tZ", "b\tZ"]
        );
    }

    #[test]
    fn test_insufficient_columns() {
        let columns = ColumnSet::parse(["3"]).unwrap();
        let expander = RowExpander::new(&columns, ";", ExpansionMode::Cartesian);
        let record = Record::from_line("A\tB");
        assert!(matches!(
            expander.expand(&record),
            Err(ExpandError::InsufficientColumns {
                fields: 2,
                required: 3
            })
        ));
    }

    #[test]
    fn test_len_hint() {
        let columns = ColumnSet::parse(["1", "2"]).unwrap();
        let pairs = RowExpander::new(&columns, ",", ExpansionMode::Pairs);
        let cartesian = RowExpander::new(&columns, ",", ExpansionMode::Cartesian);
        let record = Record::from_line("a,b,c\td,e,f");

        assert_eq!(pairs.expand(&record).unwrap().len_hint(), 3);
        let mut expansion = cartesian.expand(&record).unwrap();
        assert_eq!(expansion.len_hint(), 9);
        expansion.next();
        assert_eq!(expansion.len_hint(), 8);
    }
}
