mod v1;
mod v2;

use std::path::Path;

use nalgebra::DMatrix;

use ltools_core::Scanner;

use crate::error::{Error, Result};
use crate::model::Format;
use crate::parsers;

/// Threshold floor applied to the depth x radius absorbance matrix so that
/// downstream logarithmic consumers stay well-defined
pub(crate) const ARZ_FLOOR: f64 = 1e-8;

/// Internal reader shared by the V1 and V2 grammars
pub(crate) struct Reader {
    pub(crate) scanner: Scanner,
}

impl Reader {
    /// Create a new reader over the file at `path`
    pub(crate) fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            scanner: Scanner::from_file(path)?,
        })
    }

    /// Create a new reader over content already in memory
    pub(crate) fn from_text(text: &str) -> Self {
        Self {
            scanner: Scanner::new(text),
        }
    }

    /// Compare the leading bytes against the format's magic marker
    pub(crate) fn expect_magic(&self, format: Format) -> Result<()> {
        let marker = format.magic();
        if self.scanner.starts_with(marker) {
            Ok(())
        } else {
            Err(Error::UnrecognizedFormat {
                expected: marker.to_string(),
                found: self.scanner.leading(marker.len()),
            })
        }
    }

    /// First value of the next data line
    fn next_value(&mut self) -> Result<f64> {
        let line = self.scanner.next_line()?;
        let (_, value) = parsers::leading_f64(&line)?;
        Ok(value)
    }

    /// All values of the next data line, checked against an expected count
    fn next_values(&mut self, expected: usize) -> Result<Vec<f64>> {
        let line = self.scanner.next_line()?;
        let (_, values) = parsers::vector_of_f64(&line)?;
        if values.len() != expected {
            return Err(Error::UnexpectedLength {
                expected,
                found: values.len(),
            });
        }
        Ok(values)
    }

    /// Fixed-count float block with the trailing overflow bin dropped and
    /// each retained value converted
    fn read_trimmed(&mut self, n: usize, convert: fn(f64) -> f64) -> Result<Vec<f64>> {
        let mut values = self.scanner.read_floats(n)?;
        values.pop();
        values.iter_mut().for_each(|value| *value = convert(*value));
        Ok(values)
    }

    /// Fixed-count float block as a `rows x cols` matrix
    ///
    /// The file lays 2-D blocks out radius-major (all rows of one radial
    /// bin in sequence), which is exactly column-major for a matrix with
    /// one column per radial bin.
    fn read_matrix(
        &mut self,
        rows: usize,
        cols: usize,
        convert: fn(f64) -> f64,
    ) -> Result<DMatrix<f64>> {
        let values = self.scanner.read_floats(rows * cols)?;
        let mut matrix = DMatrix::from_vec(rows, cols, values);
        matrix.iter_mut().for_each(|value| *value = convert(*value));
        Ok(matrix)
    }
}

/// Raise every matrix entry below `floor` to exactly `floor`
pub(crate) fn apply_floor(matrix: &mut DMatrix<f64>, floor: f64) {
    matrix.iter_mut().for_each(|value| *value = value.max(floor));
}
