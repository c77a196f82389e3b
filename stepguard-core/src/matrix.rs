//! Rectangular Sample Matrix
//!
//! ## Overview
//!
//! Recorded IMU sessions arrive as rows of readings, one row per sample, with a
//! fixed column count (for the standard layout: ax, ay, az, gx, gy, gz). This
//! module stores them row-major in a single contiguous `Vec<f64>` and provides
//! the half-open column slicing the detectors need to pull one sensor's three
//! axes out of a wider recording.
//!
//! ## Memory Layout
//!
//! ```text
//! SampleMatrix { width: 6 }
//! ┌────┬────┬────┬────┬────┬────┬────┬────┬────┬─────
//! │ ax │ ay │ az │ gx │ gy │ gz │ ax │ ay │ az │ ...
//! └────┴────┴────┴────┴────┴────┴────┴────┴────┴─────
//!  └──────────── row 0 ────────┘ └──────── row 1 ...
//!
//! columns(0, 3) ─► SampleMatrix { width: 3 } holding only ax, ay, az
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use stepguard_core::SampleMatrix;
//!
//! let samples = SampleMatrix::from_rows(&[
//!     vec![0.1, 9.8, 0.2, 0.01, 0.02, 0.00],
//!     vec![0.3, 9.6, 0.1, 0.02, 0.01, 0.03],
//! ])?;
//!
//! let accel = samples.columns(0, 3)?;
//! assert_eq!(accel.width(), 3);
//! assert_eq!(accel.row(1), Some(&[0.3, 9.6, 0.1][..]));
//! # Ok::<(), stepguard_core::StepError>(())
//! ```

use alloc::vec::Vec;
use core::slice::ChunksExact;

use crate::errors::{StepError, StepResult};

/// Row-major matrix of sensor readings
///
/// ## Internal Invariants
///
/// - `width > 0`
/// - `data.len() % width == 0`
/// - Rows keep the chronological order they were supplied in
#[derive(Debug, Clone, PartialEq)]
pub struct SampleMatrix {
    /// Readings, row after row
    data: Vec<f64>,

    /// Columns per row
    width: usize,
}

impl SampleMatrix {
    /// Wrap row-major data with the given row width
    ///
    /// Zero rows is allowed here; operations that need samples report
    /// [`StepError::EmptyInput`] themselves.
    pub fn new(data: Vec<f64>, width: usize) -> StepResult<Self> {
        if width == 0 {
            return Err(StepError::InvalidColumnRange { start: 0, end: 0 });
        }

        let remainder = data.len() % width;
        if remainder != 0 {
            return Err(StepError::RaggedRow {
                row: data.len() / width,
                expected: width,
                found: remainder,
            });
        }

        Ok(Self { data, width })
    }

    /// Build from individual rows, rejecting ragged input
    ///
    /// The first row fixes the width. An empty slice has no width to infer and
    /// is rejected with [`StepError::EmptyInput`].
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> StepResult<Self> {
        let width = match rows.first() {
            Some(first) => first.as_ref().len(),
            None => return Err(StepError::EmptyInput),
        };

        let mut data = Vec::with_capacity(rows.len() * width);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(StepError::RaggedRow {
                    row: index,
                    expected: width,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Self::new(data, width)
    }

    /// Build from fixed-width rows
    pub fn from_arrays<const N: usize>(rows: &[[f64; N]]) -> StepResult<Self> {
        let data = rows.iter().flat_map(|row| row.iter().copied()).collect();
        Self::new(data, N)
    }

    /// Number of rows (samples)
    pub fn len(&self) -> usize {
        self.data.len() / self.width
    }

    /// True when the matrix holds no samples
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Columns per row
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get one row by index
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        let start = index.checked_mul(self.width)?;
        let end = start.checked_add(self.width)?;
        self.data.get(start..end)
    }

    /// Iterate rows oldest to newest
    pub fn rows(&self) -> ChunksExact<'_, f64> {
        self.data.chunks_exact(self.width)
    }

    /// Copy out columns `[start, end)` of every row
    ///
    /// The result keeps every row in order and is `end - start` wide.
    pub fn columns(&self, start: usize, end: usize) -> StepResult<Self> {
        if start >= end {
            return Err(StepError::InvalidColumnRange { start, end });
        }
        if end > self.width {
            return Err(StepError::ColumnRangeOutOfBounds {
                start,
                end,
                columns: self.width,
            });
        }

        let width = end - start;
        let mut data = Vec::with_capacity(self.len() * width);
        for row in self.rows() {
            data.extend_from_slice(&row[start..end]);
        }

        Ok(Self { data, width })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn six_column() -> SampleMatrix {
        SampleMatrix::from_arrays(&[
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0, 10.0, 11.0, 12.0],
        ])
        .unwrap()
    }

    #[test]
    fn shape_from_arrays() {
        let matrix = six_column();
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix.width(), 6);
        assert!(!matrix.is_empty());
        assert_eq!(matrix.row(1), Some(&[7.0, 8.0, 9.0, 10.0, 11.0, 12.0][..]));
        assert_eq!(matrix.row(2), None);
        assert_eq!(matrix.row(usize::MAX / 6), None);
        assert_eq!(matrix.row(usize::MAX), None);
    }

    #[test]
    fn column_slice_keeps_row_order() {
        let gyro = six_column().columns(3, 6).unwrap();
        assert_eq!(gyro.width(), 3);
        let rows: Vec<&[f64]> = gyro.rows().collect();
        assert_eq!(rows, vec![&[4.0, 5.0, 6.0][..], &[10.0, 11.0, 12.0][..]]);
    }

    #[test]
    fn column_slice_errors() {
        let matrix = six_column();
        assert_eq!(
            matrix.columns(4, 7),
            Err(StepError::ColumnRangeOutOfBounds { start: 4, end: 7, columns: 6 })
        );
        assert_eq!(
            matrix.columns(3, 3),
            Err(StepError::InvalidColumnRange { start: 3, end: 3 })
        );
        assert_eq!(
            matrix.columns(5, 2),
            Err(StepError::InvalidColumnRange { start: 5, end: 2 })
        );
    }

    #[test]
    fn ragged_rows_rejected() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]];
        assert_eq!(
            SampleMatrix::from_rows(&rows),
            Err(StepError::RaggedRow { row: 1, expected: 3, found: 2 })
        );

        assert_eq!(
            SampleMatrix::new(vec![1.0, 2.0, 3.0, 4.0], 3),
            Err(StepError::RaggedRow { row: 1, expected: 3, found: 1 })
        );
    }

    #[test]
    fn empty_inputs() {
        let rows: Vec<Vec<f64>> = Vec::new();
        assert_eq!(SampleMatrix::from_rows(&rows), Err(StepError::EmptyInput));

        let matrix = SampleMatrix::new(Vec::new(), 3).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.rows().count(), 0);
    }
}
