//! Packing of vectors and matrices into flat float buffers for the GPU.
//!
//! Vectors are written as `x, y[, z][, w]` and matrices column by column, so
//! the contents of a [`FloatBuffer`] holding a [`Matrix4`] can be bound
//! directly as a `mat4x4<f32>` or `mat4` uniform.

use crate::{
    matrix::{Matrix3, Matrix4},
    vector::{Vector2, Vector3, Vector4},
};

/// A value that can be written out as a fixed number of `f32` elements.
pub trait FlatExport {
    /// The number of elements written by [`Self::write_flat`].
    const ELEMENT_COUNT: usize;

    /// Appends the elements of this value to `out`.
    fn write_flat(&self, out: &mut Vec<f32>);
}

/// Byte order used when encoding a [`FloatBuffer`] to bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// The byte order of the machine, which is what GPU upload APIs expect.
    #[default]
    Native,
    Little,
    Big,
}

/// An owned, growable sequence of `f32` elements packed from exported
/// values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FloatBuffer {
    elements: Vec<f32>,
}

impl FloatBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer with room for the given number of elements.
    pub fn with_capacity(element_count: usize) -> Self {
        Self {
            elements: Vec::with_capacity(element_count),
        }
    }

    /// Creates a buffer holding the elements of the given value.
    pub fn from_value<T: FlatExport>(value: &T) -> Self {
        let mut buffer = Self::with_capacity(T::ELEMENT_COUNT);
        buffer.push(value);
        buffer
    }

    /// Creates a buffer holding the elements of the given values, one value
    /// after the other.
    pub fn from_values<T: FlatExport>(values: &[T]) -> Self {
        let mut buffer = Self::with_capacity(values.len() * T::ELEMENT_COUNT);
        buffer.extend_from_slice(values);
        buffer
    }

    /// Appends the elements of the given value.
    pub fn push<T: FlatExport>(&mut self, value: &T) {
        value.write_flat(&mut self.elements);
    }

    /// Appends the elements of each of the given values.
    pub fn extend_from_slice<T: FlatExport>(&mut self, values: &[T]) {
        self.elements.reserve(values.len() * T::ELEMENT_COUNT);
        for value in values {
            value.write_flat(&mut self.elements);
        }
    }

    /// Removes all elements, keeping the allocation.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// The number of `f32` elements in the buffer.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// The size of the buffer contents in bytes.
    pub fn byte_len(&self) -> usize {
        std::mem::size_of_val(self.elements.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn as_floats(&self) -> &[f32] {
        &self.elements
    }

    /// The buffer contents as bytes in native byte order.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.elements)
    }

    /// Encodes the buffer contents as bytes in the given byte order.
    pub fn to_bytes(&self, byte_order: ByteOrder) -> Vec<u8> {
        log::trace!(
            "Encoding {} buffer elements with {byte_order:?} byte order",
            self.element_count()
        );
        match byte_order {
            ByteOrder::Native => self.as_bytes().to_vec(),
            ByteOrder::Little => self
                .elements
                .iter()
                .flat_map(|element| element.to_le_bytes())
                .collect(),
            ByteOrder::Big => self
                .elements
                .iter()
                .flat_map(|element| element.to_be_bytes())
                .collect(),
        }
    }
}

impl<T: FlatExport> From<&T> for FloatBuffer {
    fn from(value: &T) -> Self {
        Self::from_value(value)
    }
}

macro_rules! impl_flat_export {
    ($t:ty, $count:expr) => {
        impl FlatExport for $t {
            const ELEMENT_COUNT: usize = $count;

            fn write_flat(&self, out: &mut Vec<f32>) {
                out.extend_from_slice(&self.to_array());
            }
        }
    };
}

impl_flat_export!(Vector2, 2);
impl_flat_export!(Vector3, 3);
impl_flat_export!(Vector4, 4);

impl FlatExport for Matrix3 {
    const ELEMENT_COUNT: usize = 9;

    fn write_flat(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(&self.to_flat_array());
    }
}

impl FlatExport for Matrix4 {
    const ELEMENT_COUNT: usize = 16;

    fn write_flat(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(&self.to_flat_array());
    }
}
