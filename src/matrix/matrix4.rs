use super::Matrix3;
use crate::{
    angle::Angle,
    buffer::FloatBuffer,
    error::{Result, TransformError},
    vector::{Vector3, Vector4},
};
use bytemuck::{Pod, Zeroable};

/// A 4x4 matrix for homogeneous transforms.
///
/// Acts on column vectors, so for an affine transform the upper-left 3x3
/// block is the linear part and the translation sits in the last column. The
/// elements are held column by column.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    inner: glam::Mat4,
}

impl Matrix4 {
    /// Creates an identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::wrap(glam::Mat4::IDENTITY)
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::wrap(glam::Mat4::ZERO)
    }

    /// Creates a diagonal matrix with the given diagonal.
    #[inline]
    pub const fn from_diagonal(diagonal: &Vector4) -> Self {
        Self::wrap(glam::Mat4::from_diagonal(diagonal.unwrap()))
    }

    /// Creates a matrix with the given rows.
    #[inline]
    pub fn from_rows(
        row_0: &Vector4,
        row_1: &Vector4,
        row_2: &Vector4,
        row_3: &Vector4,
    ) -> Self {
        Self::from_columns(row_0, row_1, row_2, row_3).transposed()
    }

    /// Creates a matrix with the given columns.
    #[inline]
    pub const fn from_columns(
        column_0: &Vector4,
        column_1: &Vector4,
        column_2: &Vector4,
        column_3: &Vector4,
    ) -> Self {
        Self::wrap(glam::Mat4::from_cols(
            column_0.unwrap(),
            column_1.unwrap(),
            column_2.unwrap(),
            column_3.unwrap(),
        ))
    }

    /// Creates a matrix from sixteen elements listed row by row, so that the
    /// array reads like the matrix written out on paper.
    #[inline]
    pub fn from_row_major_array(elements: [f32; 16]) -> Self {
        Self::from_column_major_array(elements).transposed()
    }

    /// Creates a matrix from sixteen elements listed column by column, which
    /// is the order produced by [`Self::to_flat_array`].
    #[inline]
    pub const fn from_column_major_array(elements: [f32; 16]) -> Self {
        Self::wrap(glam::Mat4::from_cols_array(&elements))
    }

    /// Creates a matrix from a slice of elements listed row by row.
    ///
    /// # Errors
    /// Returns [`TransformError::ElementCount`] if the slice does not hold
    /// exactly sixteen elements.
    pub fn from_row_major_slice(elements: &[f32]) -> Result<Self> {
        Self::from_column_major_slice(elements).map(|m| m.transposed())
    }

    /// Creates a matrix from a slice of elements listed column by column.
    ///
    /// # Errors
    /// Returns [`TransformError::ElementCount`] if the slice does not hold
    /// exactly sixteen elements.
    pub fn from_column_major_slice(elements: &[f32]) -> Result<Self> {
        super::check_element_count(elements, 16)?;
        Ok(Self::wrap(glam::Mat4::from_cols_slice(elements)))
    }

    /// Creates an affine transform with the given linear part and
    /// translation.
    #[inline]
    pub fn from_linear_part_and_translation(linear_part: &Matrix3, translation: &Vector3) -> Self {
        Self::wrap(glam::Mat4::from_mat3_translation(linear_part.unwrap(), translation.unwrap()))
    }

    /// Creates a transform translating by the given displacements.
    #[inline]
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Self::from_translation(&Vector3::new(x, y, z))
    }

    /// Creates a transform translating by the given vector.
    #[inline]
    pub fn from_translation(translation: &Vector3) -> Self {
        Self::wrap(glam::Mat4::from_translation(translation.unwrap()))
    }

    /// Creates a transform rotating counter-clockwise about the x-axis.
    #[inline]
    pub fn rotation_x<A: Angle>(angle: A) -> Self {
        Self::wrap(glam::Mat4::from_rotation_x(angle.radians()))
    }

    /// Creates a transform rotating counter-clockwise about the y-axis.
    #[inline]
    pub fn rotation_y<A: Angle>(angle: A) -> Self {
        Self::wrap(glam::Mat4::from_rotation_y(angle.radians()))
    }

    /// Creates a transform rotating counter-clockwise about the z-axis.
    #[inline]
    pub fn rotation_z<A: Angle>(angle: A) -> Self {
        Self::wrap(glam::Mat4::from_rotation_z(angle.radians()))
    }

    /// Creates a transform scaling all three axes by the same factor.
    #[inline]
    pub fn uniform_scaling(scaling: f32) -> Self {
        Self::scaling(scaling, scaling, scaling)
    }

    /// Creates a transform scaling each axis by its own factor.
    #[inline]
    pub fn scaling(x: f32, y: f32, z: f32) -> Self {
        Self::from_scaling(&Vector3::new(x, y, z))
    }

    /// Creates a transform scaling each axis by the corresponding component
    /// of the given vector.
    #[inline]
    pub fn from_scaling(scaling: &Vector3) -> Self {
        Self::wrap(glam::Mat4::from_scale(scaling.unwrap()))
    }

    /// Creates an orthographic projection remapping each of the intervals
    /// `[left, right]`, `[bottom, top]` and `[near, far]` linearly onto
    /// `[-1, 1]` along the x-, y- and z-axis respectively.
    ///
    /// `near` and `far` are z-coordinates, so the box from -1 to 1 along every
    /// axis gives the identity.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        // glam takes the depths as distances along the negative z-axis
        Self::wrap(glam::Mat4::orthographic_rh_gl(left, right, bottom, top, -near, -far))
    }

    /// Creates a right-handed perspective projection for a camera looking down
    /// the negative z-axis.
    ///
    /// `near` and `far` are positive distances to the clipping planes, which
    /// map to depths -1 and 1 in clip space after the perspective divide. The
    /// field of view is vertical, and `aspect_ratio` is width over height.
    pub fn perspective<A: Angle>(vertical_fov: A, aspect_ratio: f32, near: f32, far: f32) -> Self {
        Self::wrap(glam::Mat4::perspective_rh_gl(vertical_fov.radians(), aspect_ratio, near, far))
    }

    /// Overwrites the matrix with an orthographic projection, see
    /// [`Self::orthographic`].
    pub fn set_orthographic(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) {
        *self = Self::orthographic(left, right, bottom, top, near, far);
    }

    /// Overwrites the matrix with a perspective projection, see
    /// [`Self::perspective`].
    pub fn set_perspective<A: Angle>(
        &mut self,
        vertical_fov: A,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) {
        *self = Self::perspective(vertical_fov, aspect_ratio, near, far);
    }

    /// Resets the matrix to the identity.
    #[inline]
    pub fn load_identity(&mut self) {
        *self = Self::identity();
    }

    /// Overwrites all elements with those of the given matrix.
    #[inline]
    pub fn set(&mut self, other: &Self) {
        self.inner = other.inner;
    }

    /// Returns the element in row `i` and column `j`.
    ///
    /// # Panics
    /// If `i` or `j` are out of bounds.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> f32 {
        self.inner.col(j)[i]
    }

    /// Returns a mutable reference to the element in row `i` and column `j`.
    ///
    /// # Panics
    /// If `i` or `j` are out of bounds.
    #[inline]
    pub fn element_mut(&mut self, i: usize, j: usize) -> &mut f32 {
        &mut self.inner.col_mut(j)[i]
    }

    /// Returns row `i` of the matrix.
    ///
    /// # Panics
    /// If `i` is out of bounds.
    #[inline]
    pub fn row(&self, i: usize) -> Vector4 {
        Vector4::wrap(self.inner.row(i))
    }

    /// Returns column `j` of the matrix.
    ///
    /// # Panics
    /// If `j` is out of bounds.
    #[inline]
    pub fn column(&self, j: usize) -> Vector4 {
        Vector4::wrap(self.inner.col(j))
    }

    /// # Panics
    /// If `i` is out of bounds.
    #[inline]
    pub fn set_row(&mut self, i: usize, row: &Vector4) {
        for (j, value) in row.to_array().into_iter().enumerate() {
            self.inner.col_mut(j)[i] = value;
        }
    }

    /// # Panics
    /// If `j` is out of bounds.
    #[inline]
    pub fn set_column(&mut self, j: usize, column: &Vector4) {
        *self.inner.col_mut(j) = column.unwrap();
    }

    #[inline]
    pub fn diagonal(&self) -> Vector4 {
        let m = &self.inner;
        Vector4::new(m.x_axis.x, m.y_axis.y, m.z_axis.z, m.w_axis.w)
    }

    /// Returns the upper-left 3x3 block.
    #[inline]
    pub fn linear_part(&self) -> Matrix3 {
        Matrix3::wrap(glam::Mat3::from_mat4(self.inner))
    }

    /// Returns the first three elements of the last column.
    #[inline]
    pub fn translation_part(&self) -> Vector3 {
        Vector3::wrap(self.inner.w_axis.truncate())
    }

    /// Overwrites the upper-left 3x3 block, leaving the rest untouched.
    pub fn set_linear_part(&mut self, linear_part: &Matrix3) {
        let linear_part = linear_part.unwrap();
        let m = &mut self.inner;
        m.x_axis = linear_part.x_axis.extend(m.x_axis.w);
        m.y_axis = linear_part.y_axis.extend(m.y_axis.w);
        m.z_axis = linear_part.z_axis.extend(m.z_axis.w);
    }

    /// Overwrites the first three elements of the last column, leaving the
    /// rest untouched.
    #[inline]
    pub fn set_translation_part(&mut self, translation: &Vector3) {
        self.set_axis_part(3, translation);
    }

    /// Returns the first three elements of the first column, the image of the
    /// x-axis under the linear part. This is the forward direction of a
    /// transform from a local frame whose x-axis points forward.
    #[inline]
    pub fn forward_vector(&self) -> Vector3 {
        Vector3::wrap(self.inner.x_axis.truncate())
    }

    /// Returns the first three elements of the second column, the image of
    /// the y-axis under the linear part.
    #[inline]
    pub fn up_vector(&self) -> Vector3 {
        Vector3::wrap(self.inner.y_axis.truncate())
    }

    /// Returns the first three elements of the third column, the image of the
    /// z-axis under the linear part.
    #[inline]
    pub fn right_vector(&self) -> Vector3 {
        Vector3::wrap(self.inner.z_axis.truncate())
    }

    /// Overwrites the first three elements of the first column, see
    /// [`Self::forward_vector`].
    #[inline]
    pub fn set_forward_vector(&mut self, forward: &Vector3) {
        self.set_axis_part(0, forward);
    }

    /// Overwrites the first three elements of the second column, see
    /// [`Self::up_vector`].
    #[inline]
    pub fn set_up_vector(&mut self, up: &Vector3) {
        self.set_axis_part(1, up);
    }

    /// Overwrites the first three elements of the third column, see
    /// [`Self::right_vector`].
    #[inline]
    pub fn set_right_vector(&mut self, right: &Vector3) {
        self.set_axis_part(2, right);
    }

    /// Applies the matrix to the given point extended with `w = 1`, then
    /// divides the result by its `w`.
    ///
    /// The components are non-finite if the transformed `w` is zero.
    #[inline]
    pub fn project_point(&self, point: &Vector3) -> Vector3 {
        Vector3::wrap(self.inner.project_point3(point.unwrap()))
    }

    /// Applies the matrix to the given point extended with `w = 1`, without
    /// dividing by the resulting `w`. Gives the transformed point for any
    /// affine matrix.
    #[inline]
    pub fn transform_point(&self, point: &Vector3) -> Vector3 {
        (self * point.extended(1.0)).xyz()
    }

    /// Applies only the upper-left 3x3 block to the given vector, so the
    /// translation has no effect.
    #[inline]
    pub fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        (self * vector.extended(0.0)).xyz()
    }

    /// Computes the transpose of the matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        Self::wrap(self.inner.transpose())
    }

    /// Computes the signed minor of the element in row `i` and column `j`,
    /// which is the determinant of the 3x3 matrix left after removing that
    /// row and column, negated when `i + j` is odd.
    ///
    /// # Panics
    /// If `i` or `j` are out of bounds.
    pub fn cofactor(&self, i: usize, j: usize) -> f32 {
        // glam removes column `j` and row `i` when given them in that order
        let determinant = glam::Mat3::from_mat4_minor(self.inner, j, i).determinant();
        if (i + j) % 2 == 0 {
            determinant
        } else {
            -determinant
        }
    }

    /// Computes the determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        (0..4).map(|j| self.element(0, j) * self.cofactor(0, j)).sum()
    }

    /// Computes the adjugate, the transpose of the matrix of cofactors.
    pub fn adjugate(&self) -> Self {
        // The cofactors listed row by row are the adjugate listed column by
        // column.
        Self::from_column_major_array(std::array::from_fn(|k| self.cofactor(k / 4, k % 4)))
    }

    /// Computes the inverse as the adjugate divided by the determinant.
    ///
    /// # Errors
    /// Returns [`TransformError::SingularMatrix`] if the determinant is
    /// exactly zero.
    pub fn inverted(&self) -> Result<Self> {
        let adjugate = self.adjugate();

        // Expansion along the first row, reusing the cofactors in the first
        // column of the adjugate.
        let determinant = self.row(0).dot(&adjugate.column(0));

        if determinant == 0.0 {
            log::debug!("Tried to invert singular matrix {self:?}");
            return Err(TransformError::SingularMatrix);
        }

        Ok(adjugate * determinant.recip())
    }

    /// Computes the inverse of a rigid transform, a rotation followed by a
    /// translation, by transposing the rotation and rotating the negated
    /// translation back.
    ///
    /// The upper-left 3x3 block must be orthonormal and the last row must be
    /// `[0, 0, 0, 1]`. This is not checked, and a matrix with scaling, shear
    /// or projection gives a wrong result.
    pub fn inverted_translation_rotation(&self) -> Self {
        let inverse_rotation = self.linear_part().inverted_rotation();
        let inverse_translation = -(inverse_rotation * self.translation_part());
        Self::from_linear_part_and_translation(&inverse_rotation, &inverse_translation)
    }

    /// Returns a matrix with the given closure applied to each element.
    #[inline]
    pub fn mapped(&self, f: impl FnMut(f32) -> f32) -> Self {
        Self::from_column_major_array(self.to_flat_array().map(f))
    }

    /// Returns the sixteen elements column by column, the layout GPU shading
    /// languages expect for a 4x4 matrix.
    #[inline]
    pub fn to_flat_array(&self) -> [f32; 16] {
        self.inner.to_cols_array()
    }

    /// Packs the matrix into a buffer ready for upload, see
    /// [`Self::to_flat_array`] for the element order.
    pub fn to_buffer(&self) -> FloatBuffer {
        FloatBuffer::from_value(self)
    }

    /// Overwrites the first three elements of column `j`.
    fn set_axis_part(&mut self, j: usize, part: &Vector3) {
        let column = self.inner.col_mut(j);
        *column = part.unwrap().extend(column.w);
    }

    #[inline]
    const fn wrap(inner: glam::Mat4) -> Self {
        Self { inner }
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[[f32; 4]; 4]> for Matrix4 {
    /// Creates a matrix from an array of rows.
    #[inline]
    fn from(rows: [[f32; 4]; 4]) -> Self {
        Self::wrap(glam::Mat4::from_cols_array_2d(&rows).transpose())
    }
}

impl From<Matrix3> for Matrix4 {
    /// Embeds the matrix in the upper-left block of an identity matrix.
    #[inline]
    fn from(linear_part: Matrix3) -> Self {
        Self::wrap(glam::Mat4::from_mat3(linear_part.unwrap()))
    }
}

impl From<&Matrix4> for Matrix3 {
    /// Extracts the upper-left block.
    #[inline]
    fn from(matrix: &Matrix4) -> Self {
        matrix.linear_part()
    }
}

impl_binop!(Mul, mul, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::wrap(a.inner.mul_mat4(&b.inner))
});

impl_binop!(Mul, mul, Matrix4, Vector4, Vector4, |a, b| {
    Vector4::wrap(a.inner.mul_vec4(b.unwrap()))
});

impl_binop!(Mul, mul, Matrix4, f32, Matrix4, |a, b| {
    Matrix4::wrap(a.inner.mul_scalar(*b))
});

impl_binop!(Mul, mul, f32, Matrix4, Matrix4, |a, b| {
    Matrix4::wrap(b.inner.mul_scalar(*a))
});

impl_binop!(Add, add, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::wrap(a.inner.add_mat4(&b.inner))
});

impl_binop!(Sub, sub, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::wrap(a.inner.sub_mat4(&b.inner))
});

impl_unary_op!(Neg, neg, Matrix4, Matrix4, |val| { Matrix4::wrap(-val.inner) });

impl_approx_eq!(Matrix4, |m| m.to_flat_array());
