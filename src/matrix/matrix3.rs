use crate::{angle::Angle, error::Result, vector::Vector3};
use bytemuck::{Pod, Zeroable};

/// A 3x3 matrix.
///
/// Acts on column vectors, so `m * v` transforms `v` and the columns are the
/// images of the basis vectors. The elements are held column by column.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Matrix3 {
    inner: glam::Mat3,
}

impl Matrix3 {
    /// Creates an identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::wrap(glam::Mat3::IDENTITY)
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::wrap(glam::Mat3::ZERO)
    }

    /// Creates a diagonal matrix with the given diagonal.
    #[inline]
    pub const fn from_diagonal(diagonal: &Vector3) -> Self {
        Self::wrap(glam::Mat3::from_diagonal(diagonal.unwrap()))
    }

    /// Creates a matrix with the given rows.
    #[inline]
    pub fn from_rows(row_0: &Vector3, row_1: &Vector3, row_2: &Vector3) -> Self {
        Self::from_columns(row_0, row_1, row_2).transposed()
    }

    /// Creates a matrix with the given columns.
    #[inline]
    pub const fn from_columns(column_0: &Vector3, column_1: &Vector3, column_2: &Vector3) -> Self {
        Self::wrap(glam::Mat3::from_cols(column_0.unwrap(), column_1.unwrap(), column_2.unwrap()))
    }

    /// Creates a matrix from nine elements listed row by row.
    #[inline]
    pub fn from_row_major_array(elements: [f32; 9]) -> Self {
        Self::from_column_major_array(elements).transposed()
    }

    /// Creates a matrix from nine elements listed column by column, which is
    /// the order produced by [`Self::to_flat_array`].
    #[inline]
    pub const fn from_column_major_array(elements: [f32; 9]) -> Self {
        Self::wrap(glam::Mat3::from_cols_array(&elements))
    }

    /// Creates a matrix from a slice of elements listed row by row.
    ///
    /// # Errors
    /// Returns [`TransformError::ElementCount`](crate::TransformError) if the
    /// slice does not hold exactly nine elements.
    pub fn from_row_major_slice(elements: &[f32]) -> Result<Self> {
        Self::from_column_major_slice(elements).map(|m| m.transposed())
    }

    /// Creates a matrix from a slice of elements listed column by column.
    ///
    /// # Errors
    /// Returns [`TransformError::ElementCount`](crate::TransformError) if the
    /// slice does not hold exactly nine elements.
    pub fn from_column_major_slice(elements: &[f32]) -> Result<Self> {
        super::check_element_count(elements, 9)?;
        Ok(Self::wrap(glam::Mat3::from_cols_slice(elements)))
    }

    /// Creates a matrix rotating counter-clockwise by the given angle about
    /// the x-axis, as seen looking from the positive x-axis toward the origin.
    #[inline]
    pub fn rotation_x<A: Angle>(angle: A) -> Self {
        Self::wrap(glam::Mat3::from_rotation_x(angle.radians()))
    }

    /// Creates a matrix rotating counter-clockwise by the given angle about
    /// the y-axis.
    #[inline]
    pub fn rotation_y<A: Angle>(angle: A) -> Self {
        Self::wrap(glam::Mat3::from_rotation_y(angle.radians()))
    }

    /// Creates a matrix rotating counter-clockwise by the given angle about
    /// the z-axis.
    #[inline]
    pub fn rotation_z<A: Angle>(angle: A) -> Self {
        Self::wrap(glam::Mat3::from_rotation_z(angle.radians()))
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
    pub fn row(&self, i: usize) -> Vector3 {
        Vector3::wrap(self.inner.row(i))
    }

    /// Returns column `j` of the matrix.
    ///
    /// # Panics
    /// If `j` is out of bounds.
    #[inline]
    pub fn column(&self, j: usize) -> Vector3 {
        Vector3::wrap(self.inner.col(j))
    }

    /// # Panics
    /// If `i` is out of bounds.
    #[inline]
    pub fn set_row(&mut self, i: usize, row: &Vector3) {
        for (j, value) in row.to_array().into_iter().enumerate() {
            self.inner.col_mut(j)[i] = value;
        }
    }

    /// # Panics
    /// If `j` is out of bounds.
    #[inline]
    pub fn set_column(&mut self, j: usize, column: &Vector3) {
        *self.inner.col_mut(j) = column.unwrap();
    }

    /// Returns the diagonal of the matrix.
    #[inline]
    pub fn diagonal(&self) -> Vector3 {
        let m = &self.inner;
        Vector3::new(m.x_axis.x, m.y_axis.y, m.z_axis.z)
    }

    /// Computes the transpose of the matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        Self::wrap(self.inner.transpose())
    }

    /// Computes the determinant of the matrix.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.inner.determinant()
    }

    /// Computes the inverse of a rotation matrix, which is its transpose.
    ///
    /// The matrix must be orthonormal. This is not checked, and any other
    /// matrix gives its transpose rather than its inverse.
    #[inline]
    pub fn inverted_rotation(&self) -> Self {
        self.transposed()
    }

    /// Returns a matrix with the given closure applied to each element.
    #[inline]
    pub fn mapped(&self, f: impl FnMut(f32) -> f32) -> Self {
        Self::from_column_major_array(self.to_flat_array().map(f))
    }

    /// Returns the nine elements column by column.
    #[inline]
    pub fn to_flat_array(&self) -> [f32; 9] {
        self.inner.to_cols_array()
    }

    #[inline]
    pub(crate) const fn wrap(inner: glam::Mat3) -> Self {
        Self { inner }
    }

    #[inline]
    pub(crate) const fn unwrap(self) -> glam::Mat3 {
        self.inner
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[[f32; 3]; 3]> for Matrix3 {
    /// Creates a matrix from an array of rows.
    #[inline]
    fn from(rows: [[f32; 3]; 3]) -> Self {
        Self::wrap(glam::Mat3::from_cols_array_2d(&rows).transpose())
    }
}

impl_binop!(Mul, mul, Matrix3, Matrix3, Matrix3, |a, b| {
    Matrix3::wrap(a.inner.mul_mat3(&b.inner))
});

impl_binop!(Mul, mul, Matrix3, Vector3, Vector3, |a, b| {
    Vector3::wrap(a.inner.mul_vec3(b.unwrap()))
});

impl_binop!(Mul, mul, Matrix3, f32, Matrix3, |a, b| {
    Matrix3::wrap(a.inner.mul_scalar(*b))
});

impl_binop!(Mul, mul, f32, Matrix3, Matrix3, |a, b| {
    Matrix3::wrap(b.inner.mul_scalar(*a))
});

impl_binop!(Add, add, Matrix3, Matrix3, Matrix3, |a, b| {
    Matrix3::wrap(a.inner.add_mat3(&b.inner))
});

impl_binop!(Sub, sub, Matrix3, Matrix3, Matrix3, |a, b| {
    Matrix3::wrap(a.inner.sub_mat3(&b.inner))
});

impl_unary_op!(Neg, neg, Matrix3, Matrix3, |val| { Matrix3::wrap(-val.inner) });

impl_approx_eq!(Matrix3, |m| m.to_flat_array());

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::{
        angle::{Degrees, Radians},
        error::TransformError,
    };
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-6;

    fn sequential_matrix() -> Matrix3 {
        Matrix3::from_rows(
            &Vector3::new(1.0, 2.0, 3.0),
            &Vector3::new(4.0, 5.0, 6.0),
            &Vector3::new(7.0, 8.0, 9.0),
        )
    }

    #[test]
    fn creating_matrix3_identity_gives_identity_matrix() {
        let identity = Matrix3::identity();
        assert_eq!(identity.row(0), Vector3::unit_x());
        assert_eq!(identity.row(1), Vector3::unit_y());
        assert_eq!(identity.row(2), Vector3::unit_z());
        assert_eq!(Matrix3::default(), identity);
    }

    #[test]
    fn loading_identity_resets_matrix() {
        let mut m = sequential_matrix();
        m.load_identity();
        assert_eq!(m, Matrix3::identity());

        m.set(&Matrix3::zeros());
        assert_eq!(m, Matrix3::zeros());
    }

    #[test]
    fn creating_matrix3_from_rows_and_columns_gives_transposes() {
        let r0 = Vector3::new(1.0, 2.0, 3.0);
        let r1 = Vector3::new(4.0, 5.0, 6.0);
        let r2 = Vector3::new(7.0, 8.0, 9.0);
        let from_rows = Matrix3::from_rows(&r0, &r1, &r2);
        let from_columns = Matrix3::from_columns(&r0, &r1, &r2);

        assert_eq!(from_rows.element(0, 2), 3.0);
        assert_eq!(from_columns.element(0, 2), 7.0);
        assert_eq!(from_rows.transposed(), from_columns);
        assert_eq!(from_columns.column(1), r1);
    }

    #[test]
    fn transposing_sequential_matrix_turns_rows_into_columns() {
        let transposed = sequential_matrix().transposed();
        assert_eq!(transposed.column(0), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(transposed.column(1), Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(transposed.column(2), Vector3::new(7.0, 8.0, 9.0));
        assert_eq!(transposed.row(0), Vector3::new(1.0, 4.0, 7.0));
    }

    #[test]
    fn creating_matrix3_from_flat_arrays_respects_element_order() {
        let elements = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        assert_eq!(Matrix3::from_row_major_array(elements), sequential_matrix());
        assert_eq!(
            Matrix3::from_column_major_array(elements),
            sequential_matrix().transposed()
        );
        assert_eq!(
            Matrix3::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]),
            sequential_matrix()
        );
    }

    #[test]
    fn flattening_matrix3_gives_columns_in_order() {
        let m = sequential_matrix();
        assert_eq!(m.to_flat_array(), [1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);
        assert_eq!(Matrix3::from_column_major_array(m.to_flat_array()), m);
    }

    #[test]
    fn creating_matrix3_from_slices_checks_length() {
        let elements = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        assert_eq!(Matrix3::from_row_major_slice(&elements), Ok(sequential_matrix()));
        assert_eq!(
            Matrix3::from_column_major_slice(&elements),
            Ok(sequential_matrix().transposed())
        );
        assert_eq!(
            Matrix3::from_row_major_slice(&elements[..4]),
            Err(TransformError::ElementCount {
                expected: 9,
                actual: 4
            })
        );
    }

    #[test]
    fn setting_rows_columns_and_elements_works() {
        let mut m = Matrix3::zeros();
        m.set_row(1, &Vector3::new(1.0, 2.0, 3.0));
        m.set_column(2, &Vector3::new(7.0, 8.0, 9.0));
        *m.element_mut(0, 0) = 5.0;

        assert_eq!(m.row(0), Vector3::new(5.0, 0.0, 7.0));
        assert_eq!(m.row(1), Vector3::new(1.0, 2.0, 8.0));
        assert_eq!(m.row(2), Vector3::new(0.0, 0.0, 9.0));
        assert_eq!(m.diagonal(), Vector3::new(5.0, 2.0, 9.0));
    }

    #[test]
    #[should_panic]
    fn reading_element_out_of_bounds_panics() {
        Matrix3::identity().element(0, 3);
    }

    #[test]
    fn multiplying_matrix3_by_vector_uses_rows() {
        let v = sequential_matrix() * Vector3::new(1.0, 0.0, -1.0);
        assert_eq!(v, Vector3::new(-2.0, -2.0, -2.0));
    }

    #[test]
    fn multiplying_matrix3_by_matrix_composes_right_to_left() {
        let rotate = Matrix3::rotation_z(Degrees(90.0));
        let scale = Matrix3::from_diagonal(&Vector3::new(2.0, 1.0, 1.0));

        let scale_then_rotate = &rotate * &scale;
        assert_abs_diff_eq!(
            scale_then_rotate * Vector3::unit_x(),
            Vector3::new(0.0, 2.0, 0.0),
            epsilon = EPSILON
        );

        let rotate_then_scale = scale * rotate;
        assert_abs_diff_eq!(
            rotate_then_scale * Vector3::unit_x(),
            Vector3::new(0.0, 1.0, 0.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn multiplying_by_identity_preserves_matrix() {
        let m = sequential_matrix();
        assert_eq!(m * Matrix3::identity(), m);
        assert_eq!(Matrix3::identity() * m, m);
    }

    #[test]
    fn scalar_and_elementwise_ops_work() {
        let m = sequential_matrix();
        assert_eq!((m * 2.0).element(2, 2), 18.0);
        assert_eq!(2.0 * m, m * 2.0);
        assert_eq!(m + m, m * 2.0);
        assert_eq!(m - m, Matrix3::zeros());
        assert_eq!(-m, m * -1.0);
        assert_eq!(m.mapped(|e| e - 1.0).element(0, 0), 0.0);
    }

    #[test]
    fn rotating_axes_follows_right_hand_rule() {
        assert_abs_diff_eq!(
            Matrix3::rotation_x(Degrees(90.0)) * Vector3::unit_y(),
            Vector3::unit_z(),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            Matrix3::rotation_y(Degrees(90.0)) * Vector3::unit_z(),
            Vector3::unit_x(),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            Matrix3::rotation_z(Radians(std::f32::consts::FRAC_PI_2)) * Vector3::unit_x(),
            Vector3::unit_y(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn computing_determinant_works() {
        assert_eq!(sequential_matrix().determinant(), 0.0);
        assert_eq!(Matrix3::identity().determinant(), 1.0);
        assert_eq!(
            Matrix3::from_diagonal(&Vector3::new(2.0, 3.0, 4.0)).determinant(),
            24.0
        );
        let m = Matrix3::from_row_major_array([2.0, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 2.0]);
        assert_eq!(m.determinant(), 6.0);
        assert_eq!(m.transposed().determinant(), 6.0);
    }

    #[test]
    fn inverting_rotation_undoes_it() {
        let rotation = Matrix3::rotation_x(Degrees(30.0)) * Matrix3::rotation_z(Degrees(-75.0));
        assert_abs_diff_eq!(
            rotation.inverted_rotation() * rotation,
            Matrix3::identity(),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(rotation.determinant(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn inverting_non_rotation_gives_transpose() {
        let m = sequential_matrix();
        assert_eq!(m.inverted_rotation(), m.transposed());
    }
}
