//! Cartesian product enumeration in mixed-radix order

use super::matrix::Matrix;

/// Iterator over every combination of one sub-value per matrix row
///
/// Works like an odometer: digit 0 advances on every step and carries into
/// digit 1 when it wraps, so the first row varies fastest.
#[derive(Debug, Clone)]
pub struct Odometer<'a> {
    rows: Vec<Vec<&'a str>>,
    counter: Vec<usize>,
    remaining: usize,
    exhausted: bool,
}

impl<'a> Odometer<'a> {
    pub fn new(matrix: Matrix<'a>) -> Self {
        let remaining = matrix.product_len();
        let rows = matrix.into_rows();
        Self {
            counter: vec![0; rows.len()],
            exhausted: rows.iter().any(Vec::is_empty),
            rows,
            remaining,
        }
    }

    /// Step the counter; returns false once the last digit overflows
    fn advance(&mut self) -> bool {
        for (digit, row) in self.counter.iter_mut().zip(&self.rows) {
            *digit += 1;
            if *digit < row.len() {
                return true;
            }
            *digit = 0;
        }
        false
    }
}

impl<'a> Iterator for Odometer<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let combination = self
            .counter
            .iter()
            .zip(&self.rows)
            .map(|(&digit, row)| row[digit])
            .collect();

        self.exhausted = !self.advance();
        self.remaining = self.remaining.saturating_sub(1);
        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            (0, Some(0))
        } else {
            (self.remaining, Some(self.remaining))
        }
    }
}
