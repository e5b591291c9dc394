//! `denmat-core`: a dense `f64` matrix library.
//!
//! Provides the [`DenseMatrix`] value type with elementwise arithmetic,
//! matrix multiplication, tolerance-based equality, and a classical
//! linear-algebra suite (cofactor-expansion determinant, cofactor matrix,
//! adjugate-based inverse) aimed at small matrices where clarity of the
//! algorithm matters more than asymptotic performance.

// Declare modules
pub mod dense_matrix;
pub mod error;
mod linalg;
mod ops;

// Re-export public types
pub use dense_matrix::{DenseMatrix, DEFAULT_TOLERANCE};
pub use error::{MatrixError, Result};
