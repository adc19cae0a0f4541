use crate::{
    angle::{Degrees, radians_to_degrees},
    vector::{Vector2, Vector4},
};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 3-dimensional vector.
///
/// Stored as three packed `f32` values, so a slice of vectors can be handed
/// to the GPU as a plain float array.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    inner: glam::Vec3,
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self::wrap(glam::Vec3::new(x, y, z))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::wrap(glam::Vec3::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::wrap(glam::Vec3::splat(value))
    }

    #[inline]
    pub const fn unit_x() -> Self {
        Self::wrap(glam::Vec3::X)
    }

    #[inline]
    pub const fn unit_y() -> Self {
        Self::wrap(glam::Vec3::Y)
    }

    #[inline]
    pub const fn unit_z() -> Self {
        Self::wrap(glam::Vec3::Z)
    }

    /// Creates a vector from a 2D vector holding the x- and y-components and
    /// the given z-component.
    #[inline]
    pub const fn from_xy_z(xy: Vector2, z: f32) -> Self {
        Self::new(xy.x(), xy.y(), z)
    }

    /// Creates a vector from the given x-component and a 2D vector holding the
    /// y- and z-components.
    #[inline]
    pub const fn from_x_yz(x: f32, yz: Vector2) -> Self {
        Self::new(x, yz.x(), yz.y())
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.inner.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.inner.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.inner.z
    }

    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.inner.x
    }

    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.inner.y
    }

    #[inline]
    pub const fn z_mut(&mut self) -> &mut f32 {
        &mut self.inner.z
    }

    #[inline]
    pub const fn set_x(&mut self, x: f32) {
        self.inner.x = x;
    }

    #[inline]
    pub const fn set_y(&mut self, y: f32) {
        self.inner.y = y;
    }

    #[inline]
    pub const fn set_z(&mut self, z: f32) {
        self.inner.z = z;
    }

    /// Overwrites all components with those of the given vector.
    #[inline]
    pub const fn set(&mut self, other: &Self) {
        self.inner = other.inner;
    }

    /// Converts the vector to homogeneous 4D form by appending the given
    /// w-component.
    #[inline]
    pub fn extended(&self, w: f32) -> Vector4 {
        Vector4::wrap(self.inner.extend(w))
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.inner.dot(other.inner)
    }

    /// Computes the right-handed cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::wrap(self.inner.cross(other.inner))
    }

    /// Computes the angle between this vector and another, in the range
    /// `[0, 180]` degrees, as `atan2(|a x b|, a . b)`.
    #[inline]
    pub fn angle_between(&self, other: &Self) -> Degrees {
        Degrees(radians_to_degrees(
            self.cross(other).norm().atan2(self.dot(other)),
        ))
    }

    /// Computes the angle between this vector and another from the arccosine
    /// of the normalized dot product.
    ///
    /// Loses precision for nearly parallel vectors, and yields NaN if rounding
    /// pushes the cosine outside `[-1, 1]`.
    #[inline]
    pub fn angle_between_acos(&self, other: &Self) -> Degrees {
        let cos_angle = self.dot(other) / (self.norm() * other.norm());
        Degrees(radians_to_degrees(cos_angle.acos()))
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
    /// have to be normalized. The component along the axis changes sign while
    /// the rest is kept.
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
        Self::new(f(self.x()), f(self.y()), f(self.z()))
    }

    #[inline]
    pub fn min_component(&self) -> f32 {
        self.inner.min_element()
    }

    #[inline]
    pub fn max_component(&self) -> f32 {
        self.inner.max_element()
    }

    /// Returns the components as an array `[x, y, z]`.
    #[inline]
    pub const fn to_array(&self) -> [f32; 3] {
        [self.inner.x, self.inner.y, self.inner.z]
    }

    /// Computes the unit normal of the triangle with the given vertices, facing
    /// the side from which the vertices appear counter-clockwise.
    pub fn triangle_normal(p0: &Self, p1: &Self, p2: &Self) -> Self {
        (p1 - p0).cross(&(p2 - p0)).normalized()
    }

    /// Computes the unit tangent of the triangle with the given vertices and
    /// texture coordinates, pointing along the direction of increasing `u`.
    ///
    /// The result is non-finite when the texture coordinates are degenerate.
    pub fn triangle_tangent(
        p0: &Self,
        p1: &Self,
        p2: &Self,
        uv0: &Vector2,
        uv1: &Vector2,
        uv2: &Vector2,
    ) -> Self {
        let edge1 = p1 - p0;
        let edge2 = p2 - p0;
        let duv1 = uv1 - uv0;
        let duv2 = uv2 - uv0;

        let inverse_det = (duv1.x() * duv2.y() - duv2.x() * duv1.y()).recip();

        ((edge1 * duv2.y() - edge2 * duv1.y()) * inverse_det).normalized()
    }

    /// Computes the binormal (bitangent) `normal x tangent` completing a
    /// tangent frame.
    #[inline]
    pub fn binormal(normal: &Self, tangent: &Self) -> Self {
        normal.cross(tangent)
    }

    #[inline]
    pub(crate) const fn wrap(inner: glam::Vec3) -> Self {
        Self { inner }
    }

    #[inline]
    pub(crate) const fn unwrap(self) -> glam::Vec3 {
        self.inner
    }
}

impl_swizzles!(Vector3 => Vector2 {
    xx => (x, x),
    xy => (x, y),
    xz => (x, z),
    yx => (y, x),
    yy => (y, y),
    yz => (y, z),
    zx => (z, x),
    zy => (z, y),
    zz => (z, z),
});

impl_swizzles!(Vector3 => Vector3 {
    xxx => (x, x, x),
    xxy => (x, x, y),
    xxz => (x, x, z),
    xyx => (x, y, x),
    xyy => (x, y, y),
    xyz => (x, y, z),
    xzx => (x, z, x),
    xzy => (x, z, y),
    xzz => (x, z, z),
    yxx => (y, x, x),
    yxy => (y, x, y),
    yxz => (y, x, z),
    yyx => (y, y, x),
    yyy => (y, y, y),
    yyz => (y, y, z),
    yzx => (y, z, x),
    yzy => (y, z, y),
    yzz => (y, z, z),
    zxx => (z, x, x),
    zxy => (z, x, y),
    zxz => (z, x, z),
    zyx => (z, y, x),
    zyy => (z, y, y),
    zyz => (z, y, z),
    zzx => (z, z, x),
    zzy => (z, z, y),
    zzz => (z, z, z),
});

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from(array: [f32; 3]) -> Self {
        Self::wrap(glam::Vec3::from_array(array))
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        vector.to_array()
    }
}

impl_binop!(Add, add, Vector3, Vector3, Vector3, |a, b| {
    Vector3::wrap(a.inner + b.inner)
});

impl_binop!(Sub, sub, Vector3, Vector3, Vector3, |a, b| {
    Vector3::wrap(a.inner - b.inner)
});

impl_binop!(Mul, mul, Vector3, f32, Vector3, |a, b| {
    Vector3::wrap(a.inner * *b)
});

impl_binop!(Mul, mul, f32, Vector3, Vector3, |a, b| {
    Vector3::wrap(*a * b.inner)
});

impl_binop!(Div, div, Vector3, f32, Vector3, |a, b| {
    Vector3::wrap(a.inner / *b)
});

impl_binop_assign!(AddAssign, add_assign, Vector3, Vector3, |a, b| {
    a.inner += b.inner;
});

impl_binop_assign!(SubAssign, sub_assign, Vector3, Vector3, |a, b| {
    a.inner -= b.inner;
});

impl_binop_assign!(MulAssign, mul_assign, Vector3, f32, |a, b| {
    a.inner *= *b;
});

impl_binop_assign!(DivAssign, div_assign, Vector3, f32, |a, b| {
    a.inner /= *b;
});

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| {
    Vector3::wrap(-val.inner)
});

impl Index<usize> for Vector3 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.inner[index]
    }
}

impl_approx_eq!(Vector3, |v| v.to_array());

impl fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector3")
            .field("x", &self.inner.x)
            .field("y", &self.inner.y)
            .field("z", &self.inner.z)
            .finish()
    }
}
