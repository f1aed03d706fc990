use crate::cost::Cost;

/// Returns `true` when the matrix has as many rows as columns.
pub fn is_square<T, R: AsRef<[T]>>(matrix: &[R]) -> bool {
    matrix.iter().all(|row| row.as_ref().len() == matrix.len())
}

/// Pads a rectangular matrix with zeros to a square one.
///
/// The column count is read from the first row. The original entries keep
/// their positions in the top-left corner of the `max(rows, cols)` square, so
/// solving the padded matrix assigns the extra rows or columns at no cost.
pub fn to_square<T: Cost, R: AsRef<[T]>>(matrix: &[R]) -> Vec<Vec<T>> {
    let rows = matrix.len();
    let Some(first) = matrix.first() else {
        return Vec::new();
    };
    let cols = first.as_ref().len();
    let size = rows.max(cols);

    let mut square = Vec::with_capacity(size);
    for i in 0..size {
        let mut row = vec![T::ZERO; size];
        if let Some(source) = matrix.get(i) {
            for (slot, &value) in row.iter_mut().zip(source.as_ref().iter().take(cols)) {
                *slot = value;
            }
        }
        square.push(row);
    }
    square
}
