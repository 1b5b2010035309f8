//! Tab-delimited output

use std::io::{self, BufWriter, Write};

use crate::model::FIELD_DELIMITER;

/// Writes output rows as tab-joined, newline-terminated lines
pub struct RowWriter<W: Write> {
    inner: BufWriter<W>,
}

impl<W: Write> RowWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: BufWriter::new(inner),
        }
    }

    pub fn write_row(&mut self, fields: &[&str]) -> io::Result<()> {
        let mut delimiter = [0u8; 4];
        let delimiter = FIELD_DELIMITER.encode_utf8(&mut delimiter).as_bytes();

        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                self.inner.write_all(delimiter)?;
            }
            self.inner.write_all(field.as_bytes())?;
        }
        self.inner.write_all(b"\n")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_rows() {
        let mut out = Vec::new();
        {
            let mut writer = RowWriter::new(&mut out);
            writer.write_row(&["A", "x", "Z"]).unwrap();
            writer.write_row(&["", "", ""]).unwrap();
            writer.write_row(&[""]).unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "A\tx\tZ\n\t\t\n\n");
    }
}
