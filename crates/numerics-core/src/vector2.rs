//! Two-component vector
//!
//! Every operation comes in two forms: an associated function that returns a
//! new vector and leaves its operands untouched (`Vector2::add(a, b)`), and an
//! `_in_place` method that overwrites the receiver and returns it for chaining
//! (`a.add_in_place(b)`). Both forms produce bit-identical components.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::array_interop::{component_index, overwrite_components, read_components, write_components};
use crate::error::Result;
use crate::math_utils::{clamp, propagating_max, propagating_min, round_half_up, round_toward_zero};

/// A vector with two double-precision components.
///
/// Components may hold any `f64`, including NaN, the infinities and negative
/// zero. Arithmetic follows IEEE-754 without special cases.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// Number of components.
    pub const COMPONENTS: usize = 2;

    /// The vector `(0, 0)`.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// The vector `(1, 1)`.
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    /// The vector `(1, 0)`.
    pub const UNIT_X: Self = Self { x: 1.0, y: 0.0 };

    /// The vector `(0, 1)`.
    pub const UNIT_Y: Self = Self { x: 0.0, y: 1.0 };

    /// Creates a new vector from its components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `value`.
    #[inline]
    pub const fn splat(value: f64) -> Self {
        Self { x: value, y: value }
    }

    // ------------------------------------------------------------------------
    // Array interop
    // ------------------------------------------------------------------------

    /// Reads a vector from the first two elements of `array`.
    ///
    /// # Errors
    /// See [`Vector2::from_array_at`].
    pub fn from_array(array: &[f64]) -> Result<Self> {
        Self::from_array_at(array, 0)
    }

    /// Reads a vector from `array[index]` and `array[index + 1]`.
    ///
    /// # Errors
    /// * [`VectorError::IndexOutOfRange`](crate::VectorError::IndexOutOfRange)
    ///   if `index` is negative or not below `array.len()`
    /// * [`VectorError::InsufficientSpace`](crate::VectorError::InsufficientSpace)
    ///   if fewer than two elements remain from `index`
    pub fn from_array_at(array: &[f64], index: isize) -> Result<Self> {
        let [x, y] = read_components(array, index)?;
        Ok(Self { x, y })
    }

    /// Writes the components to the start of `array`.
    pub fn to_array(&self, array: &mut Vec<f64>) {
        overwrite_components(array, 0, &[self.x, self.y]);
    }

    /// Writes the components to `array` starting at `index`, growing the array
    /// when needed.
    ///
    /// # Errors
    /// [`VectorError::InvalidIndex`](crate::VectorError::InvalidIndex) if
    /// `index` is negative.
    pub fn to_array_at(&self, array: &mut Vec<f64>, index: isize) -> Result<()> {
        write_components(array, index, &[self.x, self.y])
    }

    // ------------------------------------------------------------------------
    // Set & get
    // ------------------------------------------------------------------------

    /// Sets both components.
    #[inline]
    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Sets the component at `index` (0 = x, 1 = y).
    ///
    /// # Errors
    /// [`VectorError::IndexOutOfRange`](crate::VectorError::IndexOutOfRange)
    /// if `index` is not 0 or 1.
    pub fn set_component(&mut self, index: isize, value: f64) -> Result<&mut Self> {
        let position = component_index(index, Self::COMPONENTS)?;
        self[position] = value;
        Ok(self)
    }

    /// Gets the component at `index` (0 = x, 1 = y).
    ///
    /// # Errors
    /// [`VectorError::IndexOutOfRange`](crate::VectorError::IndexOutOfRange)
    /// if `index` is not 0 or 1.
    pub fn component(&self, index: isize) -> Result<f64> {
        let position = component_index(index, Self::COMPONENTS)?;
        Ok(self[position])
    }

    /// Copies the components of `other` into this vector.
    #[inline]
    pub fn copy_from(&mut self, other: &Self) -> &mut Self {
        self.x = other.x;
        self.y = other.y;
        self
    }

    // ------------------------------------------------------------------------
    // Basic computation
    // ------------------------------------------------------------------------

    /// Adds two vectors.
    #[inline]
    pub fn add(left: Self, right: Self) -> Self {
        left + right
    }

    /// Adds `other` to this vector.
    #[inline]
    pub fn add_in_place(&mut self, other: Self) -> &mut Self {
        *self += other;
        self
    }

    /// Adds `scalar` to every component of `left`.
    #[inline]
    pub fn add_scalar(left: Self, scalar: f64) -> Self {
        left + scalar
    }

    /// Adds `scalar` to every component of this vector.
    #[inline]
    pub fn add_scalar_in_place(&mut self, scalar: f64) -> &mut Self {
        *self += scalar;
        self
    }

    /// Subtracts `right` from `left`.
    #[inline]
    pub fn sub(left: Self, right: Self) -> Self {
        left - right
    }

    /// Subtracts `other` from this vector.
    #[inline]
    pub fn sub_in_place(&mut self, other: Self) -> &mut Self {
        *self -= other;
        self
    }

    /// Subtracts `scalar` from every component of `left`.
    #[inline]
    pub fn sub_scalar(left: Self, scalar: f64) -> Self {
        left - scalar
    }

    /// Subtracts `scalar` from every component of this vector.
    #[inline]
    pub fn sub_scalar_in_place(&mut self, scalar: f64) -> &mut Self {
        *self -= scalar;
        self
    }

    /// Multiplies two vectors component-wise.
    #[inline]
    pub fn mul(left: Self, right: Self) -> Self {
        left * right
    }

    /// Multiplies this vector by `other` component-wise.
    #[inline]
    pub fn mul_in_place(&mut self, other: Self) -> &mut Self {
        *self *= other;
        self
    }

    /// Multiplies every component of `left` by `scalar`.
    #[inline]
    pub fn mul_scalar(left: Self, scalar: f64) -> Self {
        left * scalar
    }

    /// Multiplies every component of this vector by `scalar`.
    #[inline]
    pub fn mul_scalar_in_place(&mut self, scalar: f64) -> &mut Self {
        *self *= scalar;
        self
    }

    /// Divides `left` by `right` component-wise.
    ///
    /// Division by zero yields signed infinity, or NaN for `0 / 0`.
    #[inline]
    pub fn div(left: Self, right: Self) -> Self {
        left / right
    }

    /// Divides this vector by `other` component-wise.
    #[inline]
    pub fn div_in_place(&mut self, other: Self) -> &mut Self {
        *self /= other;
        self
    }

    /// Divides every component of `left` by `scalar`.
    #[inline]
    pub fn div_scalar(left: Self, scalar: f64) -> Self {
        left / scalar
    }

    /// Divides every component of this vector by `scalar`.
    #[inline]
    pub fn div_scalar_in_place(&mut self, scalar: f64) -> &mut Self {
        *self /= scalar;
        self
    }

    // ------------------------------------------------------------------------
    // Other computation
    // ------------------------------------------------------------------------

    /// Returns the component-wise maximum of two vectors.
    ///
    /// A NaN in either operand yields NaN for that component.
    #[inline]
    pub fn max(a: Self, b: Self) -> Self {
        Self {
            x: propagating_max(a.x, b.x),
            y: propagating_max(a.y, b.y),
        }
    }

    /// Raises each component to the matching component of `other` if smaller.
    #[inline]
    pub fn max_in_place(&mut self, other: Self) -> &mut Self {
        *self = Self::max(*self, other);
        self
    }

    /// Returns the component-wise minimum of two vectors.
    #[inline]
    pub fn min(a: Self, b: Self) -> Self {
        Self {
            x: propagating_min(a.x, b.x),
            y: propagating_min(a.y, b.y),
        }
    }

    /// Lowers each component to the matching component of `other` if greater.
    #[inline]
    pub fn min_in_place(&mut self, other: Self) -> &mut Self {
        *self = Self::min(*self, other);
        self
    }

    /// Restricts `value` between `min` and `max`, component-wise.
    ///
    /// Each `min` component must be less than or equal to the matching `max`
    /// component, otherwise the result is unspecified (as with GLSL `clamp`).
    #[inline]
    pub fn clamp(value: Self, min: Self, max: Self) -> Self {
        Self {
            x: clamp(value.x, min.x, max.x),
            y: clamp(value.y, min.y, max.y),
        }
    }

    /// Restricts this vector between `min` and `max`, component-wise.
    #[inline]
    pub fn clamp_in_place(&mut self, min: Self, max: Self) -> &mut Self {
        *self = Self::clamp(*self, min, max);
        self
    }

    /// Restricts every component of `value` between two scalars.
    #[inline]
    pub fn clamp_scalar(value: Self, min: f64, max: f64) -> Self {
        Self {
            x: clamp(value.x, min, max),
            y: clamp(value.y, min, max),
        }
    }

    /// Restricts every component of this vector between two scalars.
    #[inline]
    pub fn clamp_scalar_in_place(&mut self, min: f64, max: f64) -> &mut Self {
        *self = Self::clamp_scalar(*self, min, max);
        self
    }

    /// Rounds every component down.
    #[inline]
    pub fn floor(value: Self) -> Self {
        Self {
            x: value.x.floor(),
            y: value.y.floor(),
        }
    }

    /// Rounds every component of this vector down.
    #[inline]
    pub fn floor_in_place(&mut self) -> &mut Self {
        *self = Self::floor(*self);
        self
    }

    /// Rounds every component up.
    #[inline]
    pub fn ceil(value: Self) -> Self {
        Self {
            x: value.x.ceil(),
            y: value.y.ceil(),
        }
    }

    /// Rounds every component of this vector up.
    #[inline]
    pub fn ceil_in_place(&mut self) -> &mut Self {
        *self = Self::ceil(*self);
        self
    }

    /// Rounds every component to the nearest integer, halves towards positive
    /// infinity. `-0.5` rounds to `-0.0`.
    #[inline]
    pub fn round(value: Self) -> Self {
        Self {
            x: round_half_up(value.x),
            y: round_half_up(value.y),
        }
    }

    /// Rounds every component of this vector to the nearest integer.
    #[inline]
    pub fn round_in_place(&mut self) -> &mut Self {
        *self = Self::round(*self);
        self
    }

    /// Rounds every component towards zero.
    #[inline]
    pub fn round_to_zero(value: Self) -> Self {
        Self {
            x: round_toward_zero(value.x),
            y: round_toward_zero(value.y),
        }
    }

    /// Rounds every component of this vector towards zero.
    #[inline]
    pub fn round_to_zero_in_place(&mut self) -> &mut Self {
        *self = Self::round_to_zero(*self);
        self
    }

    /// Negates a vector.
    #[inline]
    pub fn neg(value: Self) -> Self {
        -value
    }

    /// Negates this vector.
    #[inline]
    pub fn neg_in_place(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self
    }

    /// Returns the dot product of two vectors.
    #[inline]
    pub fn dot(left: Self, right: Self) -> f64 {
        left.x * right.x + left.y * right.y
    }

    /// Returns the 2D cross product `left.x * right.y - left.y * right.x`.
    ///
    /// The cross product is not well-defined in two dimensions; this is the
    /// z component of the 3D cross product of both vectors extended with
    /// `z = 0`, as commonly used in 2D graphics.
    #[inline]
    pub fn cross(left: Self, right: Self) -> f64 {
        left.x * right.y - left.y * right.x
    }

    /// Returns the squared length of this vector.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns the length of this vector.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns `value` scaled to a length of one.
    ///
    /// A zero vector becomes `(NaN, NaN)`. A vector whose length overflows to
    /// infinity becomes the zero vector.
    #[inline]
    pub fn normalize(value: Self) -> Self {
        Self::div_scalar(value, value.length())
    }

    /// Scales this vector to a length of one.
    #[inline]
    pub fn normalize_in_place(&mut self) -> &mut Self {
        let length = self.length();
        self.div_scalar_in_place(length)
    }

    /// Returns the component-wise absolute value.
    #[inline]
    pub fn abs(value: Self) -> Self {
        Self {
            x: value.x.abs(),
            y: value.y.abs(),
        }
    }

    /// Replaces every component of this vector with its absolute value.
    #[inline]
    pub fn abs_in_place(&mut self) -> &mut Self {
        *self = Self::abs(*self);
        self
    }

    /// Returns the squared Euclidean distance between two points.
    #[inline]
    pub fn distance_squared(a: Self, b: Self) -> f64 {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        dx * dx + dy * dy
    }

    /// Returns the Euclidean distance between two points.
    #[inline]
    pub fn distance(a: Self, b: Self) -> f64 {
        Self::distance_squared(a, b).sqrt()
    }

    /// Linearly interpolates between `a` and `b`.
    ///
    /// `alpha` is not restricted to `[0, 1]`; values outside extrapolate.
    #[inline]
    pub fn lerp(a: Self, b: Self, alpha: f64) -> Self {
        // Weighted sum rather than `a + (b - a) * alpha`: the latter turns
        // infinite endpoints into NaN.
        Self {
            x: a.x * (1.0 - alpha) + b.x * alpha,
            y: a.y * (1.0 - alpha) + b.y * alpha,
        }
    }

    /// Linearly interpolates this vector towards `other`.
    #[inline]
    pub fn lerp_in_place(&mut self, other: Self, alpha: f64) -> &mut Self {
        *self = Self::lerp(*self, other, alpha);
        self
    }

    /// Returns the component-wise square root. Negative components become NaN.
    #[inline]
    pub fn sqrt(value: Self) -> Self {
        Self {
            x: value.x.sqrt(),
            y: value.y.sqrt(),
        }
    }

    /// Replaces every component of this vector with its square root.
    #[inline]
    pub fn sqrt_in_place(&mut self) -> &mut Self {
        *self = Self::sqrt(*self);
        self
    }

    /// Reflects `vector` off a surface with the given `normal`.
    ///
    /// `normal` is expected to have unit length; it is not normalized here.
    #[inline]
    pub fn reflect(vector: Self, normal: Self) -> Self {
        let dot = Self::dot(vector, normal);
        Self {
            x: vector.x - 2.0 * dot * normal.x,
            y: vector.y - 2.0 * dot * normal.y,
        }
    }

    /// Checks if both components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vector2> for [f64; 2] {
    #[inline]
    fn from(value: Vector2) -> Self {
        [value.x, value.y]
    }
}

// Operator implementations for Vector2
impl Add for Vector2 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Add<f64> for Vector2 {
    type Output = Self;
    #[inline]
    fn add(self, scalar: f64) -> Self {
        Self {
            x: self.x + scalar,
            y: self.y + scalar,
        }
    }
}

impl AddAssign for Vector2 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl AddAssign<f64> for Vector2 {
    #[inline]
    fn add_assign(&mut self, scalar: f64) {
        self.x += scalar;
        self.y += scalar;
    }
}

impl Sub for Vector2 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Sub<f64> for Vector2 {
    type Output = Self;
    #[inline]
    fn sub(self, scalar: f64) -> Self {
        Self {
            x: self.x - scalar,
            y: self.y - scalar,
        }
    }
}

impl SubAssign for Vector2 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl SubAssign<f64> for Vector2 {
    #[inline]
    fn sub_assign(&mut self, scalar: f64) {
        self.x -= scalar;
        self.y -= scalar;
    }
}

impl Mul for Vector2 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl MulAssign for Vector2 {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        self.x *= other.x;
        self.y *= other.y;
    }
}

impl MulAssign<f64> for Vector2 {
    #[inline]
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
    }
}

impl Div for Vector2 {
    type Output = Self;
    #[inline]
    fn div(self, other: Self) -> Self {
        Self {
            x: self.x / other.x,
            y: self.y / other.y,
        }
    }
}

impl Div<f64> for Vector2 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl DivAssign for Vector2 {
    #[inline]
    fn div_assign(&mut self, other: Self) {
        self.x /= other.x;
        self.y /= other.y;
    }
}

impl DivAssign<f64> for Vector2 {
    #[inline]
    fn div_assign(&mut self, scalar: f64) {
        self.x /= scalar;
        self.y /= scalar;
    }
}

impl Neg for Vector2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Index<usize> for Vector2 {
    type Output = f64;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Index out of bounds for Vector2"),
        }
    }
}

impl IndexMut<usize> for Vector2 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Index out of bounds for Vector2"),
        }
    }
}

impl AbsDiffEq for Vector2 {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        f64::abs_diff_eq(&self.x, &other.x, epsilon) && f64::abs_diff_eq(&self.y, &other.y, epsilon)
    }
}

impl RelativeEq for Vector2 {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        f64::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && f64::relative_eq(&self.y, &other.y, epsilon, max_relative)
    }
}

impl UlpsEq for Vector2 {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        f64::ulps_eq(&self.x, &other.x, epsilon, max_ulps) && f64::ulps_eq(&self.y, &other.y, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VectorError;
    use approx::assert_relative_eq;

    #[test]
    fn test_vector2_creation() {
        let v = Vector2::new(1.0, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);

        assert_eq!(Vector2::default(), Vector2::ZERO);
        assert_eq!(Vector2::splat(5.0), Vector2::new(5.0, 5.0));

        let special = Vector2::new(f64::NAN, f64::MAX);
        assert!(special.x.is_nan());
        assert_eq!(special.y, f64::MAX);
    }

    #[test]
    fn test_vector2_constants() {
        assert_eq!(Vector2::ZERO, Vector2::new(0.0, 0.0));
        assert_eq!(Vector2::ONE, Vector2::new(1.0, 1.0));
        assert_eq!(Vector2::UNIT_X, Vector2::new(1.0, 0.0));
        assert_eq!(Vector2::UNIT_Y, Vector2::new(0.0, 1.0));

        // Each use of a constant is an independent value.
        let mut zero = Vector2::ZERO;
        zero.add_scalar_in_place(1.0);
        assert_eq!(Vector2::ZERO, Vector2::new(0.0, 0.0));
    }

    #[test]
    fn test_vector2_component_access() {
        let mut v = Vector2::new(1.0, 2.0);
        assert_eq!(v.component(0), Ok(1.0));
        assert_eq!(v.component(1), Ok(2.0));
        assert_eq!(
            v.component(2),
            Err(VectorError::IndexOutOfRange { index: 2, len: 2 })
        );

        v.set_component(1, 5.0).unwrap().set_component(0, 4.0).unwrap();
        assert_eq!(v, Vector2::new(4.0, 5.0));
        assert!(v.set_component(-1, 0.0).is_err());
        assert_eq!(v, Vector2::new(4.0, 5.0));
    }

    #[test]
    fn test_vector2_to_array_at_start() {
        let mut array = vec![9.0, 9.0, 9.0];
        Vector2::new(1.0, 2.0).to_array(&mut array);
        assert_eq!(array, vec![1.0, 2.0, 9.0]);

        let mut empty = Vec::new();
        Vector2::new(1.0, 2.0).to_array(&mut empty);
        assert_eq!(empty, vec![1.0, 2.0]);
    }

    #[test]
    fn test_vector2_chaining() {
        let mut v = Vector2::new(1.0, 2.0);
        v.add_in_place(Vector2::ONE)
            .mul_scalar_in_place(2.0)
            .sub_scalar_in_place(1.0);
        assert_eq!(v, Vector2::new(3.0, 5.0));
    }

    #[test]
    fn test_vector2_math() {
        let v = Vector2::new(3.0, 4.0);

        assert_eq!(Vector2::dot(v, v), 25.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_squared(), 25.0);

        let normalized = Vector2::normalize(v);
        assert_relative_eq!(normalized.length(), 1.0);
        assert_relative_eq!(normalized, Vector2::new(0.6, 0.8));
    }

    #[test]
    fn test_vector2_operators_match_named_forms() {
        let a = Vector2::new(1.5, -2.0);
        let b = Vector2::new(0.25, 4.0);

        assert_eq!(a + b, Vector2::add(a, b));
        assert_eq!(a - b, Vector2::sub(a, b));
        assert_eq!(a * b, Vector2::mul(a, b));
        assert_eq!(a / b, Vector2::div(a, b));
        assert_eq!(-a, Vector2::neg(a));
        assert_eq!(a * 3.0, Vector2::mul_scalar(a, 3.0));
    }

    #[test]
    fn test_vector2_indexing() {
        let mut v = Vector2::new(1.0, 2.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);

        v[0] = 3.0;
        assert_eq!(v.x, 3.0);
    }

    #[test]
    #[should_panic(expected = "Index out of bounds for Vector2")]
    fn test_vector2_index_panics() {
        let v = Vector2::ZERO;
        let _ = v[2];
    }

    #[test]
    fn test_vector2_array_conversions() {
        let v: Vector2 = [1.0, 2.0].into();
        assert_eq!(v, Vector2::new(1.0, 2.0));

        let array: [f64; 2] = v.into();
        assert_eq!(array, [1.0, 2.0]);
    }
}
