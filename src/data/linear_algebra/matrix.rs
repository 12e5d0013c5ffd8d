//! # Dense matrix
//!
//! A row-major matrix with dimensions fixed at creation. The simplex tableau is stored in this
//! type; all row operations the pivot engine needs are expressed as methods here such that the
//! index bookkeeping lives in one place.
use std::fmt::{Display, Formatter, Result as FormatResult};

use index_utils::remove_indices;
use num_traits::Zero;

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
///
/// Every row has length `nr_columns`, which is checked at construction and maintained by all
/// operations.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided rows.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of the matrix, all of the same, nonzero length.
    ///
    /// # Panics
    ///
    /// If there are no rows, or if the rows are not all of the same length.
    pub fn from_data(data: Vec<Vec<F>>) -> Self {
        let (nr_rows, nr_columns) = get_data_dimensions(&data);
        Self { data, nr_rows, nr_columns }
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        &self.data[i]
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Remove rows from the matrix.
    ///
    /// # Arguments
    ///
    /// * `indices`: Sorted, deduplicated row indices to remove.
    pub fn remove_rows(&mut self, indices: &[usize]) {
        debug_assert!(indices.is_sorted());
        debug_assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(indices.iter().all(|&i| i < self.nr_rows));

        remove_indices(&mut self.data, indices);
        self.nr_rows -= indices.len();
    }

    /// Remove columns from the matrix.
    ///
    /// # Arguments
    ///
    /// * `indices`: Sorted, deduplicated column indices to remove. Not all columns may be removed.
    pub fn remove_columns(&mut self, indices: &[usize]) {
        debug_assert!(indices.is_sorted());
        debug_assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(indices.iter().all(|&j| j < self.nr_columns));
        assert!(indices.len() < self.nr_columns);

        for row in &mut self.data {
            remove_indices(row, indices);
        }
        self.nr_columns -= indices.len();
    }
}

impl<F: Copy> DenseMatrix<F> {
    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> F {
        assert!(i < self.nr_rows);
        assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: F) {
        assert!(i < self.nr_rows);
        assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> impl Iterator<Item = F> + '_ {
        assert!(j < self.nr_columns);

        self.data.iter().map(move |row| row[j])
    }
}

impl<F: Zero + Clone> DenseMatrix<F> {
    /// Create a dense matrix of zero's of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        debug_assert!(nr_rows > 0);
        debug_assert!(nr_columns > 0);

        Self {
            data: vec![vec![F::zero(); nr_columns]; nr_rows],
            nr_rows,
            nr_columns,
        }
    }
}

impl<F: num_traits::Float> DenseMatrix<F> {
    /// Divide all values in row `i` by `divisor`.
    pub fn divide_row(&mut self, i: usize, divisor: F) {
        assert!(i < self.nr_rows);

        for value in &mut self.data[i] {
            *value = *value / divisor;
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: F) {
        assert!(read_row < self.nr_rows);
        assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            let read = self.data[read_row][j];
            self.data[write_row][j] = self.data[write_row][j] + factor * read;
        }
    }
}

impl<F: Display> Display for DenseMatrix<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        for row in &self.data {
            for value in row {
                write!(f, "{:>10.4}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// If all row lengths agree, return the dimensions of the matrix `data`.
fn get_data_dimensions<F>(data: &[Vec<F>]) -> (usize, usize) {
    assert!(!data.is_empty(), "A matrix needs at least one row");
    let nr_rows = data.len();
    let nr_columns = data[0].len();

    assert!(nr_columns > 0, "A matrix needs at least one column");
    assert!(
        data.iter().all(|row| row.len() == nr_columns),
        "Row lengths not equal: first row has length {}", nr_columns,
    );

    (nr_rows, nr_columns)
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn test_matrix() -> DenseMatrix<f64> {
        DenseMatrix::from_data(vec![
            vec![1f64, 2f64, 0f64],
            vec![0f64, 5f64, 6f64],
        ])
    }

    #[test]
    fn create() {
        let m = test_matrix();
        assert_abs_diff_eq!(m.get_value(0, 0), 1f64);
        assert_abs_diff_eq!(m.get_value(1, 2), 6f64);
        assert_eq!((m.nr_rows(), m.nr_columns()), (2, 3));

        let (rows, columns) = (299, 482);
        let m = DenseMatrix::<f64>::zeros(rows, columns);
        assert_abs_diff_eq!(m.get_value(0, 0), 0f64);
        assert_abs_diff_eq!(m.get_value(rows - 1, columns - 1), 0f64);
    }

    #[test]
    #[should_panic]
    fn ragged_rows() {
        DenseMatrix::from_data(vec![vec![1f64, 2f64], vec![3f64]]);
    }

    #[test]
    fn get_set() {
        let mut m = test_matrix();

        // Getting a zero value
        assert_abs_diff_eq!(m.get_value(0, 2), 0f64);
        // Getting a nonzero value
        assert_abs_diff_eq!(m.get_value(0, 1), 2f64);

        // Changing a value
        m.set_value(1, 1, 3f64);
        assert_abs_diff_eq!(m.get_value(1, 1), 3f64);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_get() {
        test_matrix().get_value(2, 0);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_set() {
        test_matrix().set_value(0, 3, 4f64);
    }

    #[test]
    fn row_column() {
        let m = test_matrix();

        assert_abs_diff_eq!(m.column(2).next().unwrap(), 0f64);
        assert_abs_diff_eq!(m.column(1).sum::<f64>(), 2f64 + 5f64);

        assert_abs_diff_eq!(m.row(0)[0], 1f64);
        assert_abs_diff_eq!(m.row(1).iter().sum::<f64>(), 5f64 + 6f64);
    }

    #[test]
    fn divide_row() {
        let mut m = test_matrix();
        m.divide_row(0, -1f64);
        assert_eq!(m.row(0), &[-1f64, -2f64, -0f64]);

        let mut m = test_matrix();
        m.divide_row(1, 2f64);
        assert_eq!(m.row(1), &[0f64, 2.5f64, 3f64]);
    }

    #[test]
    fn test_mul_add_rows() {
        // On arbitrary matrix
        let mut m = test_matrix();
        let multiple = -7.43f64;
        let test_value = m.get_value(1, 1);
        m.mul_add_rows(0, 1, multiple);
        assert_abs_diff_eq!(m.get_value(1, 1), test_value + multiple * m.get_value(0, 1));

        // Eliminating a value
        let mut m = test_matrix();
        m.set_value(1, 2, 1f64);
        m.set_value(0, 2, 4f64);
        m.mul_add_rows(1, 0, -4f64);
        assert_abs_diff_eq!(m.get_value(0, 2), 0f64);
        assert_abs_diff_eq!(m.get_value(0, 1), 2f64 - 4f64 * 5f64);
    }

    #[test]
    fn remove_rows_and_columns() {
        let mut m = DenseMatrix::from_data(vec![
            vec![1f64, 2f64, 3f64, 4f64],
            vec![5f64, 6f64, 7f64, 8f64],
            vec![9f64, 10f64, 11f64, 12f64],
        ]);
        m.remove_rows(&[1]);
        m.remove_columns(&[0, 2]);
        assert_eq!(m, DenseMatrix::from_data(vec![
            vec![2f64, 4f64],
            vec![10f64, 12f64],
        ]));

        m.remove_rows(&[]);
        assert_eq!(m.nr_rows(), 2);

        m.remove_rows(&[0, 1]);
        assert_eq!(m.nr_rows(), 0);
        assert_eq!(m.nr_columns(), 2);
    }
}
