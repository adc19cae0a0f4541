//! Errors reported by fallible operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TransformError>;

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformError {
    #[error("Matrix is singular (zero determinant) and has no inverse")]
    SingularMatrix,

    #[error("Expected {expected} matrix elements but got {actual}")]
    ElementCount { expected: usize, actual: usize },
}
