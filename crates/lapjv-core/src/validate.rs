//! Shape and value checks run before a matrix reaches the solver.

use crate::cost::Cost;
use crate::errors::{ErrorInfo, LapError};

/// Ensures every row has the same length. Returns `(rows, cols)`.
///
/// An empty matrix is rectangular with shape `(0, 0)`.
pub fn check_rectangular<T, R: AsRef<[T]>>(matrix: &[R]) -> Result<(usize, usize), LapError> {
    let Some(first) = matrix.first() else {
        return Ok((0, 0));
    };
    let cols = first.as_ref().len();
    for (row, entries) in matrix.iter().enumerate() {
        let len = entries.as_ref().len();
        if len != cols {
            return Err(LapError::Shape(
                ErrorInfo::new("ragged-matrix", "rows have inconsistent lengths")
                    .with_context("row", row)
                    .with_context("expected", cols)
                    .with_context("found", len),
            ));
        }
    }
    Ok((matrix.len(), cols))
}

/// Ensures the matrix is `n × n`. Returns `n`.
pub fn check_square<T, R: AsRef<[T]>>(matrix: &[R]) -> Result<usize, LapError> {
    let (rows, cols) = check_rectangular(matrix)?;
    if rows != cols {
        return Err(LapError::Shape(
            ErrorInfo::new("non-square-matrix", "cost matrix must have as many rows as columns")
                .with_context("rows", rows)
                .with_context("cols", cols)
                .with_hint("pad the matrix with `to_square` before solving"),
        ));
    }
    Ok(rows)
}

/// Rejects entries that cannot be totally ordered.
pub fn check_admissible<T: Cost, R: AsRef<[T]>>(matrix: &[R]) -> Result<(), LapError> {
    for (row, entries) in matrix.iter().enumerate() {
        if let Some(col) = entries.as_ref().iter().position(|value| !value.is_admissible()) {
            return Err(LapError::Domain(
                ErrorInfo::new("non-finite-cost", "cost entries must be finite")
                    .with_context("row", row)
                    .with_context("col", col),
            ));
        }
    }
    Ok(())
}
