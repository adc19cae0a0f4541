use crate::vector::{Vector2, Vector3};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 4-dimensional vector, typically a homogeneous coordinate.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector4 {
    inner: glam::Vec4,
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::wrap(glam::Vec4::new(x, y, z, w))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::wrap(glam::Vec4::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::wrap(glam::Vec4::splat(value))
    }

    #[inline]
    pub const fn unit_x() -> Self {
        Self::wrap(glam::Vec4::X)
    }

    #[inline]
    pub const fn unit_y() -> Self {
        Self::wrap(glam::Vec4::Y)
    }

    #[inline]
    pub const fn unit_z() -> Self {
        Self::wrap(glam::Vec4::Z)
    }

    #[inline]
    pub const fn unit_w() -> Self {
        Self::wrap(glam::Vec4::W)
    }

    /// Creates a vector from one 2D vector with the x- and y-components and
    /// one with the z- and w-components.
    #[inline]
    pub fn from_xy_zw(xy: Vector2, zw: Vector2) -> Self {
        Self::new(xy.x(), xy.y(), zw.x(), zw.y())
    }

    /// Creates a vector from the given x-component and a 3D vector with the
    /// y-, z- and w-components.
    #[inline]
    pub fn from_x_yzw(x: f32, yzw: Vector3) -> Self {
        Self::new(x, yzw.x(), yzw.y(), yzw.z())
    }

    /// The x-component.
    #[inline]
    pub fn x(&self) -> f32 {
        self.inner.x
    }

    /// The y-component.
    #[inline]
    pub fn y(&self) -> f32 {
        self.inner.y
    }

    /// The z-component.
    #[inline]
    pub fn z(&self) -> f32 {
        self.inner.z
    }

    /// The w-component.
    #[inline]
    pub fn w(&self) -> f32 {
        self.inner.w
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut f32 {
        &mut self.inner.x
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut f32 {
        &mut self.inner.y
    }

    #[inline]
    pub fn z_mut(&mut self) -> &mut f32 {
        &mut self.inner.z
    }

    #[inline]
    pub fn w_mut(&mut self) -> &mut f32 {
        &mut self.inner.w
    }

    #[inline]
    pub fn set_x(&mut self, x: f32) {
        self.inner.x = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: f32) {
        self.inner.y = y;
    }

    #[inline]
    pub fn set_z(&mut self, z: f32) {
        self.inner.z = z;
    }

    #[inline]
    pub fn set_w(&mut self, w: f32) {
        self.inner.w = w;
    }

    /// Overwrites all components with those of the given vector.
    #[inline]
    pub fn set(&mut self, other: &Self) {
        self.inner = other.inner;
    }

    /// The 3D vector with the x-, y- and z-components, dropping w.
    #[inline]
    pub fn xyz(&self) -> Vector3 {
        Vector3::new(self.x(), self.y(), self.z())
    }

    /// The 2D vector with the x- and y-components.
    #[inline]
    pub fn xy(&self) -> Vector2 {
        Vector2::new(self.x(), self.y())
    }

    /// The 2D vector with the z- and w-components.
    #[inline]
    pub fn zw(&self) -> Vector2 {
        Vector2::new(self.z(), self.w())
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.inner.dot(other.inner)
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.inner.length()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.inner.length_squared()
    }

    /// Computes the normalized version of the vector. The components are
    /// non-finite if the vector has zero length.
    #[inline]
    pub fn normalized(&self) -> Self {
        *self / self.norm()
    }

    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    #[inline]
    pub fn negated(&self) -> Self {
        -self
    }

    #[inline]
    pub fn negate(&mut self) {
        self.inner = -self.inner;
    }

    #[inline]
    pub fn scaled(&self, factor: f32) -> Self {
        self * factor
    }

    #[inline]
    pub fn scale(&mut self, factor: f32) {
        self.inner *= factor;
    }

    /// Reflects this vector about the axis given by `around`, which does not
    /// have to be normalized.
    #[inline]
    pub fn reflected(&self, around: &Self) -> Self {
        let axis = around.normalized();
        self - axis * (2.0 * self.dot(&axis))
    }

    /// Projects this vector onto the line spanned by `onto`.
    #[inline]
    pub fn projected_onto(&self, onto: &Self) -> Self {
        onto * (self.dot(onto) / onto.norm_squared())
    }

    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::wrap(self.inner * other.inner)
    }

    #[inline]
    pub fn component_div(&self, other: &Self) -> Self {
        Self::wrap(self.inner / other.inner)
    }

    /// Returns the absolute difference between each component of this and
    /// another vector.
    #[inline]
    pub fn abs_diff(&self, other: &Self) -> Self {
        Self::wrap((self.inner - other.inner).abs())
    }

    /// Computes the Euclidean distance between this and another vector.
    #[inline]
    pub fn distance(&self, other: &Self) -> f32 {
        self.inner.distance(other.inner)
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x()), f(self.y()), f(self.z()), f(self.w()))
    }

    #[inline]
    pub fn min_component(&self) -> f32 {
        self.inner.min_element()
    }

    #[inline]
    pub fn max_component(&self) -> f32 {
        self.inner.max_element()
    }

    /// Returns the components as an array `[x, y, z, w]`.
    #[inline]
    pub fn to_array(&self) -> [f32; 4] {
        self.inner.to_array()
    }

    #[inline]
    pub(crate) const fn wrap(inner: glam::Vec4) -> Self {
        Self { inner }
    }

    #[inline]
    pub(crate) const fn unwrap(self) -> glam::Vec4 {
        self.inner
    }
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from(array: [f32; 4]) -> Self {
        Self::wrap(glam::Vec4::from_array(array))
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(vector: Vector4) -> Self {
        vector.to_array()
    }
}

impl_binop!(Add, add, Vector4, Vector4, Vector4, |a, b| {
    Vector4::wrap(a.inner + b.inner)
});

impl_binop!(Sub, sub, Vector4, Vector4, Vector4, |a, b| {
    Vector4::wrap(a.inner - b.inner)
});

impl_binop!(Mul, mul, Vector4, f32, Vector4, |a, b| {
    Vector4::wrap(a.inner * *b)
});

impl_binop!(Mul, mul, f32, Vector4, Vector4, |a, b| {
    Vector4::wrap(*a * b.inner)
});

impl_binop!(Div, div, Vector4, f32, Vector4, |a, b| {
    Vector4::wrap(a.inner / *b)
});

impl_binop_assign!(AddAssign, add_assign, Vector4, Vector4, |a, b| {
    a.inner += b.inner;
});

impl_binop_assign!(SubAssign, sub_assign, Vector4, Vector4, |a, b| {
    a.inner -= b.inner;
});

impl_binop_assign!(MulAssign, mul_assign, Vector4, f32, |a, b| {
    a.inner *= *b;
});

impl_binop_assign!(DivAssign, div_assign, Vector4, f32, |a, b| {
    a.inner /= *b;
});

impl_unary_op!(Neg, neg, Vector4, Vector4, |val| {
    Vector4::wrap(-val.inner)
});

impl Index<usize> for Vector4 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl IndexMut<usize> for Vector4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.inner[index]
    }
}

impl_approx_eq!(Vector4, |v| v.to_array());

impl fmt::Debug for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector4")
            .field("x", &self.inner.x)
            .field("y", &self.inner.y)
            .field("z", &self.inner.z)
            .field("w", &self.inner.w)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn creating_vector_from_parts_works() {
        let v = Vector4::from_xy_zw(Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0));
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);

        let v = Vector4::from_x_yzw(1.0, Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(v, Vector4::from([1.0, 2.0, 3.0, 4.0]));
        assert_eq!(Vector4::unit_w().w(), 1.0);
    }

    #[test]
    fn truncating_vector_works() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.xyz(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(v.xy(), Vector2::new(1.0, 2.0));
        assert_eq!(v.zw(), Vector2::new(3.0, 4.0));
    }

    #[test]
    fn setting_components_works() {
        let mut v = Vector4::zeros();
        v.set_w(1.0);
        *v.x_mut() = 2.0;
        v[1] = 3.0;
        assert_eq!(v, Vector4::new(2.0, 3.0, 0.0, 1.0));
        assert_eq!(v[3], 1.0);
    }

    #[test]
    fn reading_and_writing_each_component_works() {
        let mut v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!([v.x(), v.y(), v.z(), v.w()], [1.0, 2.0, 3.0, 4.0]);

        *v.y_mut() += 1.0;
        *v.z_mut() *= 2.0;
        *v.w_mut() = -1.0;
        v.set_x(0.5);
        assert_eq!(v.to_array(), [0.5, 3.0, 6.0, -1.0]);

        v.set_y(7.0);
        v.set_z(8.0);
        assert_eq!(v, Vector4::new(0.5, 7.0, 8.0, -1.0));

        v.set(&Vector4::unit_z());
        assert_eq!(v, Vector4::unit_z());
    }

    #[test]
    fn vector_ops_work() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::same(1.0);
        assert_eq!(a + b, Vector4::new(2.0, 3.0, 4.0, 5.0));
        assert_eq!(a - b, Vector4::new(0.0, 1.0, 2.0, 3.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a, a.negated());
        assert_eq!(a.dot(&b), 10.0);
        assert_eq!(a.component_mul(&a), Vector4::new(1.0, 4.0, 9.0, 16.0));
        assert_eq!(a.max_component(), 4.0);
        assert_eq!(a.abs_diff(&Vector4::zeros()), a);
    }

    #[test]
    fn normalizing_vector_gives_unit_norm() {
        let mut v = Vector4::new(1.0, 1.0, 1.0, 1.0);
        v.normalize();
        assert_abs_diff_eq!(v, Vector4::same(0.5));
        assert_abs_diff_eq!(v.norm(), 1.0);
    }
}
