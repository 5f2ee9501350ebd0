use csv::{ReaderBuilder, StringRecord};
use log::debug;

use super::{DatasetErr, Result};

/// An in-memory dataset of `(x, y)` samples stored as two parallel columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Dataset {
    /// Creates a new dataset from owned columns.
    ///
    /// # Panics
    /// If `xs.len() != ys.len()`.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        assert_eq!(xs.len(), ys.len(), "xs and ys must have same length");
        Self { xs, ys }
    }

    /// Decodes a two column CSV document whose first record is a header.
    ///
    /// Column 0 holds the features and column 1 the targets, every other
    /// record must have exactly these two fields parsable as `f64`.
    ///
    /// # Arguments
    /// * `bytes` - The raw CSV document.
    ///
    /// # Returns
    /// The decoded dataset or the first decoding error found.
    pub fn from_csv(bytes: &[u8]) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let mut xs = Vec::new();
        let mut ys = Vec::new();

        for record in reader.records() {
            let record = record?;
            let line = record.position().map_or(0, |pos| pos.line());

            if record.len() != 2 {
                return Err(DatasetErr::FieldCount {
                    line,
                    got: record.len(),
                });
            }

            xs.push(parse_field(&record, line, 0)?);
            ys.push(parse_field(&record, line, 1)?);
        }

        debug!(samples = xs.len(); "decoded csv records");
        Ok(Self { xs, ys })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    #[inline]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[inline]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }
}

fn parse_field(record: &StringRecord, line: u64, column: usize) -> Result<f64> {
    record[column]
        .parse()
        .map_err(|source| DatasetErr::Parse {
            line,
            column,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_header() {
        let ds = Dataset::from_csv(b"x,y\n1,2\n3.5,-4\n").unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.xs(), [1., 3.5]);
        assert_eq!(ds.ys(), [2., -4.]);
    }

    #[test]
    fn header_only_is_empty() {
        let ds = Dataset::from_csv(b"x,y\n").unwrap();
        assert!(ds.is_empty());
        assert!(Dataset::from_csv(b"").unwrap().is_empty());
    }

    #[test]
    fn rejects_unparsable_value() {
        let err = Dataset::from_csv(b"x,y\n1,2\n3,abc\n").unwrap_err();
        assert!(matches!(err, DatasetErr::Parse { line: 3, column: 1, .. }));
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = Dataset::from_csv(b"x,y\n1,2,3\n").unwrap_err();
        assert!(matches!(err, DatasetErr::FieldCount { line: 2, got: 3 }));

        let err = Dataset::from_csv(b"x,y\n1\n").unwrap_err();
        assert!(matches!(err, DatasetErr::FieldCount { line: 2, got: 1 }));
    }

    #[test]
    #[should_panic]
    fn new_rejects_ragged_columns() {
        Dataset::new(vec![1.], vec![]);
    }
}
