//! Fixed-size vectors and 3x3/4x4 matrices for 3D transforms.
//!
//! Matrices are indexed by row and then column and act on column vectors, so
//! `a * b` applies `b` first and the translation of a [`Matrix4`] lives in its
//! last column. Vectors and matrices wrap their `glam` counterparts. Flattened
//! output for the GPU is always column by column, see [`buffer`].

#[macro_use]
mod macros;

pub mod angle;
pub mod buffer;
pub mod error;
pub mod matrix;
pub mod vector;

pub use angle::{Angle, Degrees, Radians};
pub use buffer::{ByteOrder, FlatExport, FloatBuffer};
pub use error::{Result, TransformError};
pub use matrix::{Matrix3, Matrix4};
pub use vector::{Vector2, Vector3, Vector4};
