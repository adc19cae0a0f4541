use crate::{
    angle::{Angle, Degrees, radians_to_degrees},
    vector::Vector3,
};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 2-dimensional vector.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector2 {
    inner: glam::Vec2,
}

impl Vector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self::wrap(glam::Vec2::new(x, y))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::wrap(glam::Vec2::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::wrap(glam::Vec2::splat(value))
    }

    /// The unit vector along the x-axis.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::wrap(glam::Vec2::X)
    }

    /// The unit vector along the y-axis.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::wrap(glam::Vec2::Y)
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

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.inner.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.inner.y
    }

    #[inline]
    pub const fn set_x(&mut self, x: f32) {
        self.inner.x = x;
    }

    #[inline]
    pub const fn set_y(&mut self, y: f32) {
        self.inner.y = y;
    }

    /// Overwrites all components with those of the given vector.
    #[inline]
    pub const fn set(&mut self, other: &Self) {
        self.inner = other.inner;
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: f32) -> Vector3 {
        Vector3::new(self.x(), self.y(), z)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.inner.dot(other.inner)
    }

    /// Computes the 2D cross product `x * other.y - y * other.x`, which is the
    /// z-component of the 3D cross product of the two vectors extended with
    /// zero z-components.
    #[inline]
    pub fn cross(&self, other: &Self) -> f32 {
        self.x() * other.y() - self.y() * other.x()
    }

    /// Returns the vector `(y, -x)`, which is this vector rotated 90 degrees
    /// clockwise.
    #[inline]
    pub fn perpendicular(&self) -> Self {
        Self::new(self.y(), -self.x())
    }

    /// Returns this vector rotated counter-clockwise by the given angle.
    #[inline]
    pub fn rotated<A: Angle>(&self, angle: A) -> Self {
        let (sin, cos) = angle.radians().sin_cos();
        Self::new(
            cos * self.x() - sin * self.y(),
            sin * self.x() + cos * self.y(),
        )
    }

    /// Computes the unsigned angle between this vector and another, in the
    /// range `[0, 180]` degrees.
    ///
    /// Uses `atan2` of the cross and dot products, which stays accurate for
    /// nearly parallel vectors.
    #[inline]
    pub fn angle_between(&self, other: &Self) -> Degrees {
        Degrees(radians_to_degrees(
            self.cross(other).abs().atan2(self.dot(other)),
        ))
    }

    /// Computes the unsigned angle between this vector and another from the
    /// arccosine of the normalized dot product.
    ///
    /// Loses precision for nearly parallel vectors, and yields NaN if rounding
    /// pushes the cosine outside `[-1, 1]`.
    #[inline]
    pub fn angle_between_acos(&self, other: &Self) -> Degrees {
        let cos_angle = self.dot(other) / (self.norm() * other.norm());
        Degrees(radians_to_degrees(cos_angle.acos()))
    }

    /// Computes the signed angle of the counter-clockwise rotation taking this
    /// vector to the direction of another, in the range `(-180, 180]` degrees.
    #[inline]
    pub fn signed_angle_to(&self, other: &Self) -> Degrees {
        Degrees(radians_to_degrees(self.cross(other).atan2(self.dot(other))))
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

    /// Normalizes the vector in place.
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

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::wrap(self.inner * other.inner)
    }

    /// Divides each component by the corresponding component in another
    /// vector.
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
        Self::new(f(self.x()), f(self.y()))
    }

    /// Returns the smallest component in the vector.
    #[inline]
    pub fn min_component(&self) -> f32 {
        self.inner.min_element()
    }

    /// Returns the largest component in the vector.
    #[inline]
    pub fn max_component(&self) -> f32 {
        self.inner.max_element()
    }

    /// Returns the components as an array `[x, y]`.
    #[inline]
    pub const fn to_array(&self) -> [f32; 2] {
        [self.inner.x, self.inner.y]
    }

    #[inline]
    pub(crate) const fn wrap(inner: glam::Vec2) -> Self {
        Self { inner }
    }
}

impl_swizzles!(Vector2 => Vector2 {
    xx => (x, x),
    yy => (y, y),
    xy => (x, y),
    yx => (y, x),
});

impl_swizzles!(Vector2 => Vector3 {
    xxx => (x, x, x),
    yyy => (y, y, y),
    xxy => (x, x, y),
    xyx => (x, y, x),
    yxx => (y, x, x),
    yyx => (y, y, x),
    yxy => (y, x, y),
    xyy => (x, y, y),
});

impl From<[f32; 2]> for Vector2 {
    #[inline]
    fn from(array: [f32; 2]) -> Self {
        Self::wrap(glam::Vec2::from_array(array))
    }
}

impl From<Vector2> for [f32; 2] {
    #[inline]
    fn from(vector: Vector2) -> Self {
        vector.to_array()
    }
}

impl_binop!(Add, add, Vector2, Vector2, Vector2, |a, b| {
    Vector2::wrap(a.inner + b.inner)
});

impl_binop!(Sub, sub, Vector2, Vector2, Vector2, |a, b| {
    Vector2::wrap(a.inner - b.inner)
});

impl_binop!(Mul, mul, Vector2, f32, Vector2, |a, b| {
    Vector2::wrap(a.inner * *b)
});

impl_binop!(Mul, mul, f32, Vector2, Vector2, |a, b| {
    Vector2::wrap(*a * b.inner)
});

impl_binop!(Div, div, Vector2, f32, Vector2, |a, b| {
    Vector2::wrap(a.inner / *b)
});

impl_binop_assign!(AddAssign, add_assign, Vector2, Vector2, |a, b| {
    a.inner += b.inner;
});

impl_binop_assign!(SubAssign, sub_assign, Vector2, Vector2, |a, b| {
    a.inner -= b.inner;
});

impl_binop_assign!(MulAssign, mul_assign, Vector2, f32, |a, b| {
    a.inner *= *b;
});

impl_binop_assign!(DivAssign, div_assign, Vector2, f32, |a, b| {
    a.inner /= *b;
});

impl_unary_op!(Neg, neg, Vector2, Vector2, |val| {
    Vector2::wrap(-val.inner)
});

impl Index<usize> for Vector2 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl IndexMut<usize> for Vector2 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.inner[index]
    }
}

impl_approx_eq!(Vector2, |v| v.to_array());

impl fmt::Debug for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector2")
            .field("x", &self.inner.x)
            .field("y", &self.inner.y)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::Radians;
    use approx::assert_abs_diff_eq;

    #[test]
    fn creating_vectors_gives_expected_components() {
        assert_eq!(Vector2::new(1.0, 2.0).to_array(), [1.0, 2.0]);
        assert_eq!(Vector2::zeros().to_array(), [0.0, 0.0]);
        assert_eq!(Vector2::same(3.0).to_array(), [3.0, 3.0]);
        assert_eq!(Vector2::unit_y().to_array(), [0.0, 1.0]);
        assert_eq!(Vector2::from([4.0, 5.0]), Vector2::new(4.0, 5.0));
    }

    #[test]
    fn setting_and_indexing_components_works() {
        let mut v = Vector2::zeros();
        v.set_x(1.0);
        *v.y_mut() = 2.0;
        assert_eq!(v, Vector2::new(1.0, 2.0));
        assert_eq!(v[1], 2.0);

        v[0] = 7.0;
        assert_eq!(v.x(), 7.0);

        v.set(&Vector2::new(-1.0, -2.0));
        assert_eq!(v, Vector2::new(-1.0, -2.0));
    }

    #[test]
    fn vector_ops_work() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -1.0);
        assert_eq!(a + b, Vector2::new(4.0, 1.0));
        assert_eq!(&a - &b, Vector2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(2.0 * a, Vector2::new(2.0, 4.0));
        assert_eq!(a / 2.0, Vector2::new(0.5, 1.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
        assert_eq!(a.component_mul(&b), Vector2::new(3.0, -2.0));
        assert_eq!(a.component_div(&b), Vector2::new(1.0 / 3.0, -2.0));

        let mut c = a;
        c += b;
        c *= 2.0;
        assert_eq!(c, Vector2::new(8.0, 2.0));
    }

    #[test]
    fn in_place_and_value_returning_variants_agree() {
        let v = Vector2::new(3.0, 4.0);

        let mut scaled = v;
        scaled.scale(0.5);
        assert_eq!(scaled, v.scaled(0.5));

        let mut negated = v;
        negated.negate();
        assert_eq!(negated, v.negated());

        let mut normalized = v;
        normalized.normalize();
        assert_abs_diff_eq!(normalized, Vector2::new(0.6, 0.8));
        assert_eq!(v, Vector2::new(3.0, 4.0));
    }

    #[test]
    fn normalizing_zero_vector_gives_non_finite_components() {
        let normalized = Vector2::zeros().normalized();
        assert!(!normalized.x().is_finite());
    }

    #[test]
    fn computing_2d_cross_product_and_perpendicular_works() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, 4.0);
        assert_eq!(a.cross(&b), -2.0);
        assert_eq!(Vector2::unit_x().cross(&Vector2::unit_y()), 1.0);
        assert_eq!(a.perpendicular(), Vector2::new(2.0, -1.0));
        assert_eq!(a.dot(&a.perpendicular()), 0.0);
    }

    #[test]
    fn rotating_vector_by_quarter_turn_works() {
        let rotated = Vector2::unit_x().rotated(Degrees(90.0));
        assert_abs_diff_eq!(rotated, Vector2::unit_y(), epsilon = 1e-6);

        let rotated = Vector2::new(1.0, 1.0).rotated(Radians(-std::f32::consts::FRAC_PI_2));
        assert_abs_diff_eq!(rotated, Vector2::new(1.0, -1.0), epsilon = 1e-6);
    }

    #[test]
    fn computing_angle_between_vectors_works() {
        let x = Vector2::unit_x();
        let y = Vector2::unit_y();
        assert_abs_diff_eq!(x.angle_between(&y), Degrees(90.0));
        assert_abs_diff_eq!(y.angle_between(&x), Degrees(90.0));
        assert_abs_diff_eq!(x.angle_between(&-x), Degrees(180.0));
        assert_abs_diff_eq!(
            x.angle_between(&Vector2::new(1.0, -1.0)),
            Degrees(45.0),
            epsilon = 1e-5
        );
        assert_abs_diff_eq!(
            x.angle_between_acos(&Vector2::new(2.0, 2.0)),
            Degrees(45.0),
            epsilon = 1e-4
        );
    }

    #[test]
    fn computing_signed_angle_works() {
        let x = Vector2::unit_x();
        assert_abs_diff_eq!(x.signed_angle_to(&Vector2::unit_y()), Degrees(90.0));
        assert_abs_diff_eq!(x.signed_angle_to(&-Vector2::unit_y()), Degrees(-90.0));
    }

    #[test]
    fn reflecting_and_projecting_works() {
        let v = Vector2::new(1.0, -1.0);
        assert_abs_diff_eq!(v.reflected(&Vector2::new(0.0, 5.0)), Vector2::new(1.0, 1.0));
        assert_abs_diff_eq!(v.projected_onto(&Vector2::new(3.0, 0.0)), Vector2::new(1.0, 0.0));
    }

    #[test]
    fn computing_distances_works() {
        let a = Vector2::new(1.0, 5.0);
        let b = Vector2::new(4.0, 1.0);
        assert_eq!(a.abs_diff(&b), Vector2::new(3.0, 4.0));
        assert_abs_diff_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn swizzling_works() {
        let v = Vector2::new(1.0, 2.0);
        assert_eq!(v.yx(), Vector2::new(2.0, 1.0));
        assert_eq!(v.yy(), Vector2::same(2.0));
        assert_eq!(v.xyx(), Vector3::new(1.0, 2.0, 1.0));
        assert_eq!(v.yyx(), Vector3::new(2.0, 2.0, 1.0));
        assert_eq!(v.extended(3.0), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn finding_extreme_components_and_mapping_works() {
        let v = Vector2::new(-2.0, 3.0);
        assert_eq!(v.min_component(), -2.0);
        assert_eq!(v.max_component(), 3.0);
        assert_eq!(v.mapped(f32::abs), Vector2::new(2.0, 3.0));
    }
}
