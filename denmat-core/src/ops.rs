// Elementwise arithmetic, matrix multiplication and the operator
// overloads for DenseMatrix. The methods are the fallible surface; the
// operators delegate to them and panic on shape errors.

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use crate::dense_matrix::DenseMatrix;
use crate::error::{MatrixError, Result};

impl DenseMatrix {
    /// Adds `other` elementwise, in place.
    pub fn add(&mut self, other: &DenseMatrix) -> Result<()> {
        self.check_same_shape(other, "add")?;
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a += b;
        }
        Ok(())
    }

    /// Subtracts `other` elementwise, in place.
    pub fn subtract(&mut self, other: &DenseMatrix) -> Result<()> {
        self.check_same_shape(other, "subtract")?;
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a -= b;
        }
        Ok(())
    }

    /// Multiplies every element by the scalar `k`. The empty matrix is a
    /// no-op.
    pub fn scale(&mut self, k: f64) {
        for value in &mut self.data {
            *value *= k;
        }
    }

    /// Returns the matrix product `self * other` as a new
    /// `self.rows x other.cols` matrix.
    pub fn matmul(&self, other: &DenseMatrix) -> Result<DenseMatrix> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch(format!(
                "Cannot multiply a {}x{} matrix by a {}x{} matrix",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        let (rows, cols, inner) = (self.rows, other.cols, self.cols);
        let mut result = DenseMatrix::new(rows, cols)?;
        for i in 0..rows {
            for j in 0..cols {
                let mut acc = 0.0;
                for k in 0..inner {
                    acc += self.data[i * inner + k] * other.data[k * cols + j];
                }
                result.data[i * cols + j] = acc;
            }
        }
        Ok(result)
    }

    /// In-place matrix multiplication; replaces the storage of `self`
    /// (its dimensions become `self.rows x other.cols`).
    pub fn mul_matrix(&mut self, other: &DenseMatrix) -> Result<()> {
        *self = self.matmul(other)?;
        Ok(())
    }

    fn check_same_shape(&self, other: &DenseMatrix, op: &str) -> Result<()> {
        if self.dims() != other.dims() {
            return Err(MatrixError::DimensionMismatch(format!(
                "Cannot {} a {}x{} matrix and a {}x{} matrix",
                op, self.rows, self.cols, other.rows, other.cols
            )));
        }
        Ok(())
    }
}

impl Add for &DenseMatrix {
    type Output = DenseMatrix;

    /// # Panics
    ///
    /// Panics if the shapes differ. Use [`DenseMatrix::add`] to handle the
    /// error instead.
    fn add(self, other: &DenseMatrix) -> DenseMatrix {
        let mut result = self.clone();
        if let Err(e) = DenseMatrix::add(&mut result, other) {
            panic!("{}", e);
        }
        result
    }
}

impl Sub for &DenseMatrix {
    type Output = DenseMatrix;

    /// # Panics
    ///
    /// Panics if the shapes differ. Use [`DenseMatrix::subtract`] to handle
    /// the error instead.
    fn sub(self, other: &DenseMatrix) -> DenseMatrix {
        let mut result = self.clone();
        if let Err(e) = DenseMatrix::subtract(&mut result, other) {
            panic!("{}", e);
        }
        result
    }
}

impl Mul for &DenseMatrix {
    type Output = DenseMatrix;

    /// # Panics
    ///
    /// Panics if `self.cols != other.rows`. Use [`DenseMatrix::matmul`] to
    /// handle the error instead.
    fn mul(self, other: &DenseMatrix) -> DenseMatrix {
        match self.matmul(other) {
            Ok(result) => result,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Mul<f64> for &DenseMatrix {
    type Output = DenseMatrix;

    fn mul(self, k: f64) -> DenseMatrix {
        let mut result = self.clone();
        result.scale(k);
        result
    }
}

impl Mul<&DenseMatrix> for f64 {
    type Output = DenseMatrix;

    fn mul(self, matrix: &DenseMatrix) -> DenseMatrix {
        matrix * self
    }
}

impl AddAssign<&DenseMatrix> for DenseMatrix {
    /// # Panics
    ///
    /// Panics if the shapes differ.
    fn add_assign(&mut self, other: &DenseMatrix) {
        if let Err(e) = DenseMatrix::add(self, other) {
            panic!("{}", e);
        }
    }
}

impl SubAssign<&DenseMatrix> for DenseMatrix {
    /// # Panics
    ///
    /// Panics if the shapes differ.
    fn sub_assign(&mut self, other: &DenseMatrix) {
        if let Err(e) = DenseMatrix::subtract(self, other) {
            panic!("{}", e);
        }
    }
}

impl MulAssign<&DenseMatrix> for DenseMatrix {
    /// # Panics
    ///
    /// Panics if `self.cols != other.rows`.
    fn mul_assign(&mut self, other: &DenseMatrix) {
        if let Err(e) = self.mul_matrix(other) {
            panic!("{}", e);
        }
    }
}

impl MulAssign<f64> for DenseMatrix {
    fn mul_assign(&mut self, k: f64) {
        self.scale(k);
    }
}

impl Index<(usize, usize)> for DenseMatrix {
    type Output = f64;

    /// # Panics
    ///
    /// Panics if the position is out of range. Use [`DenseMatrix::get`] for
    /// a fallible lookup.
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "Index ({}, {}) out of range for a {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for DenseMatrix {
    /// # Panics
    ///
    /// Panics if the position is out of range. Use [`DenseMatrix::get_mut`]
    /// for a fallible lookup.
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.rows && col < self.cols,
            "Index ({}, {}) out of range for a {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use crate::{DenseMatrix, MatrixError};

    fn counting_matrix(rows: usize, cols: usize, start: f64) -> DenseMatrix {
        let mut matrix = DenseMatrix::new(rows, cols).unwrap();
        for (i, value) in matrix.values_mut().iter_mut().enumerate() {
            *value = start + i as f64;
        }
        matrix
    }

    #[test]
    fn test_add_in_place() {
        let mut m = DenseMatrix::new(2, 2).unwrap();
        let mut n = DenseMatrix::new(2, 2).unwrap();
        m[(0, 0)] = 1.0;
        n[(0, 0)] = 1.0;
        m[(1, 1)] = 1.0;
        n[(1, 1)] = 1.0;

        m.add(&n).unwrap();
        assert_eq!(m[(0, 0)], 2.0);
        assert_eq!(m[(1, 1)], 2.0);
    }

    #[test]
    fn test_add_shape_mismatch() {
        let mut m = DenseMatrix::new(2, 2).unwrap();
        let n = DenseMatrix::new(3, 3).unwrap();
        match m.add(&n).err().unwrap() {
            MatrixError::DimensionMismatch(msg) => assert!(msg.contains("add")),
            _ => panic!("Expected DimensionMismatch error"),
        }
        // No partial mutation before the check.
        assert!(m.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_subtract_in_place() {
        let mut m = DenseMatrix::from_rows(&[vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let n = m.clone();
        m.subtract(&n).unwrap();
        assert!(m == DenseMatrix::new(2, 2).unwrap());
    }

    #[test]
    fn test_subtract_shape_mismatch() {
        let mut m = DenseMatrix::new(2, 2).unwrap();
        let n = DenseMatrix::new(3, 3).unwrap();
        assert!(matches!(
            m.subtract(&n),
            Err(MatrixError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_scale() {
        let mut m = counting_matrix(2, 3, 1.0);
        m.scale(2.0);
        let expected =
            DenseMatrix::from_rows(&[vec![2.0, 4.0, 6.0], vec![8.0, 10.0, 12.0]]).unwrap();
        assert!(m == expected);
    }

    #[test]
    fn test_scale_empty_is_noop() {
        let mut m = DenseMatrix::empty();
        m.scale(42.0);
        assert!(m.is_empty());
    }

    #[test]
    fn test_matmul() {
        let m = counting_matrix(2, 3, 1.0);
        let n = counting_matrix(3, 2, 7.0);

        let result = m.matmul(&n).unwrap();
        let expected = DenseMatrix::from_rows(&[vec![58.0, 64.0], vec![139.0, 154.0]]).unwrap();
        assert!(result == expected);
    }

    #[test]
    fn test_matmul_inner_dimension_mismatch() {
        let m = DenseMatrix::new(1, 1).unwrap();
        let n = DenseMatrix::new(2, 2).unwrap();
        match m.matmul(&n).err().unwrap() {
            MatrixError::DimensionMismatch(msg) => assert!(msg.contains("multiply")),
            _ => panic!("Expected DimensionMismatch error"),
        }
    }

    #[test]
    fn test_mul_matrix_replaces_storage() {
        let mut m = counting_matrix(2, 3, 1.0);
        let n = counting_matrix(3, 2, 7.0);

        m.mul_matrix(&n).unwrap();
        assert_eq!(m.dims(), (2, 2));
        assert_eq!(m[(0, 0)], 58.0);
        assert_eq!(m[(1, 1)], 154.0);
    }

    #[test]
    fn test_add_operator() {
        let mut m = DenseMatrix::new(2, 2).unwrap();
        let mut n = DenseMatrix::new(2, 2).unwrap();
        m[(0, 0)] = 1.0;
        n[(0, 0)] = 1.0;
        m[(1, 1)] = 1.0;
        n[(1, 1)] = 1.0;

        let m = &m + &n;
        assert_eq!(m[(0, 0)], 2.0);
        assert_eq!(m[(1, 1)], 2.0);
    }

    #[test]
    fn test_add_assign_operator() {
        let mut m = DenseMatrix::new(2, 2).unwrap();
        let mut n = DenseMatrix::new(2, 2).unwrap();
        m[(0, 0)] = 1.0;
        n[(0, 0)] = 1.0;
        m[(1, 1)] = 1.0;
        n[(1, 1)] = 1.0;

        let sum = &m + &n;
        m += &sum;
        assert_eq!(m[(0, 0)], 3.0);
        assert_eq!(m[(1, 1)], 3.0);
    }

    #[test]
    fn test_sub_operators() {
        let mut m = DenseMatrix::new(2, 2).unwrap();
        let mut n = DenseMatrix::new(2, 2).unwrap();
        m[(0, 0)] = 1.0;
        n[(0, 0)] = 1.0;
        m[(1, 1)] = 1.0;
        n[(1, 1)] = 1.0;

        let diff = &m - &n;
        assert_eq!(diff[(0, 0)], 0.0);
        assert_eq!(diff[(1, 1)], 0.0);

        m -= &n;
        assert_eq!(m[(0, 0)], 0.0);
        assert_eq!(m[(1, 1)], 0.0);
    }

    #[test]
    fn test_mul_operators() {
        let m = counting_matrix(2, 3, 1.0);
        let n = counting_matrix(3, 2, 7.0);
        let expected = DenseMatrix::from_rows(&[vec![58.0, 64.0], vec![139.0, 154.0]]).unwrap();

        assert!(&m * &n == expected);

        let mut compound = m.clone();
        compound *= &n;
        assert!(compound == expected);
    }

    #[test]
    fn test_scalar_mul_both_sides() {
        let m = counting_matrix(2, 3, 1.0);
        let expected =
            DenseMatrix::from_rows(&[vec![2.0, 4.0, 6.0], vec![8.0, 10.0, 12.0]]).unwrap();

        assert!(&m * 2.0 == expected);
        assert!(2.0 * &m == expected);

        let mut compound = m.clone();
        compound *= 2.0;
        assert!(compound == expected);
    }

    #[test]
    #[should_panic(expected = "Dimension mismatch")]
    fn test_add_operator_panics_on_mismatch() {
        let m = DenseMatrix::new(2, 2).unwrap();
        let n = DenseMatrix::new(3, 3).unwrap();
        let _ = &m + &n;
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_operator_panics_out_of_range() {
        let m = DenseMatrix::new(2, 2).unwrap();
        let _ = m[(5, 5)];
    }
}
