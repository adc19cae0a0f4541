//! Matrices.
//!
//! Both matrix types are indexed by row and then column and act on column
//! vectors: `m * v` transforms `v`, and `a * b` is the transform that applies
//! `b` first and then `a`. The elements are held column by column in the
//! wrapped `glam` matrix, which is also the flat export order.

mod matrix3;
mod matrix4;

pub use matrix3::Matrix3;
pub use matrix4::Matrix4;

use crate::error::{Result, TransformError};

/// Checks that a slice holds exactly the number of elements of the matrix it
/// is read into.
fn check_element_count(elements: &[f32], expected: usize) -> Result<()> {
    if elements.len() == expected {
        Ok(())
    } else {
        Err(TransformError::ElementCount {
            expected,
            actual: elements.len(),
        })
    }
}
