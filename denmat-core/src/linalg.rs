//! Classical linear algebra for [`DenseMatrix`]: determinant by recursive
//! cofactor expansion, matrix of cofactors, and adjugate-based inverse.
//!
//! The determinant is computed by plain Laplace expansion along the first
//! row, which is `O(n!)`. That is fine for the small matrices this crate
//! targets, but callers needing larger matrices should look elsewhere.

use crate::dense_matrix::{DenseMatrix, DEFAULT_TOLERANCE};
use crate::error::{MatrixError, Result};

impl DenseMatrix {
    /// Computes the determinant by cofactor expansion along row 0.
    ///
    /// Base cases: the single element for `1x1`, `ad - bc` for `2x2`.
    /// Larger matrices recurse on their minors. No pivoting is performed,
    /// so results for near-singular matrices may lose precision.
    ///
    /// # Errors
    ///
    /// `NotSquare` if `rows != cols`; `InvalidDimensions` for the empty
    /// `0x0` matrix, whose determinant is degenerate input here.
    pub fn determinant(&self) -> Result<f64> {
        let n = self.check_square_nonempty("Determinant")?;
        log::trace!("Computing {}x{} determinant by cofactor expansion", n, n);
        Ok(self.det_unchecked())
    }

    /// Builds the matrix of cofactors: `result[i][j]` is
    /// `(-1)^(i+j)` times the determinant of the minor with row `i` and
    /// column `j` removed.
    ///
    /// The cofactor of a `1x1` matrix is undefined in general; by
    /// convention this returns `[[1]]` whatever the single element, which
    /// keeps [`DenseMatrix::inverse`] uniform across sizes.
    ///
    /// Costs `n^2` minor determinants, each `O((n-1)!)` — this dominates
    /// the whole suite.
    ///
    /// # Errors
    ///
    /// `NotSquare` if `rows != cols`; `InvalidDimensions` for the empty
    /// matrix.
    pub fn cofactor_matrix(&self) -> Result<DenseMatrix> {
        let n = self.check_square_nonempty("Cofactor matrix")?;
        if n == 1 {
            return Ok(DenseMatrix {
                rows: 1,
                cols: 1,
                data: vec![1.0],
            });
        }
        let mut result = DenseMatrix::new(n, n)?;
        for row in 0..n {
            for col in 0..n {
                let minor_det = self.minor(row, col).det_unchecked();
                let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
                result.data[row * n + col] = sign * minor_det;
            }
        }
        Ok(result)
    }

    /// Computes the inverse as the transposed cofactor matrix (the
    /// adjugate) scaled by the reciprocal determinant.
    ///
    /// A determinant within [`DEFAULT_TOLERANCE`] of zero is treated as
    /// singular. The same tolerance is applied for every matrix size,
    /// including `1x1`, where the result is `[[1 / a]]`.
    ///
    /// # Errors
    ///
    /// `NotSquare` if `rows != cols`; `InvalidDimensions` for the empty
    /// matrix; `SingularMatrix` if `|determinant| <= DEFAULT_TOLERANCE`.
    pub fn inverse(&self) -> Result<DenseMatrix> {
        let n = self.check_square_nonempty("Inverse")?;
        let det = self.det_unchecked();
        log::debug!("Inverting {}x{} matrix, determinant {}", n, n, det);
        if det.abs() <= DEFAULT_TOLERANCE {
            return Err(MatrixError::SingularMatrix);
        }
        let mut adjugate = self.cofactor_matrix()?.transpose();
        adjugate.scale(1.0 / det);
        Ok(adjugate)
    }

    /// Determinant of a square, non-empty matrix. Callers have already
    /// validated the shape.
    fn det_unchecked(&self) -> f64 {
        let n = self.rows;
        match n {
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
            _ => {
                let mut det = 0.0;
                let mut sign = 1.0;
                for col in 0..n {
                    det += sign * self.data[col] * self.minor(0, col).det_unchecked();
                    sign = -sign;
                }
                det
            }
        }
    }

    /// Builds the `(n-1)x(n-1)` minor with `skip_row` and `skip_col`
    /// removed. Only called on square matrices of size >= 2.
    fn minor(&self, skip_row: usize, skip_col: usize) -> DenseMatrix {
        let n = self.rows;
        let mut data = Vec::with_capacity((n - 1) * (n - 1));
        for row in 0..n {
            if row == skip_row {
                continue;
            }
            for col in 0..n {
                if col == skip_col {
                    continue;
                }
                data.push(self.data[row * n + col]);
            }
        }
        DenseMatrix {
            rows: n - 1,
            cols: n - 1,
            data,
        }
    }

    fn check_square_nonempty(&self, operation: &str) -> Result<usize> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.is_empty() {
            return Err(MatrixError::InvalidDimensions(format!(
                "{} of an empty matrix is undefined",
                operation
            )));
        }
        Ok(self.rows)
    }
}
