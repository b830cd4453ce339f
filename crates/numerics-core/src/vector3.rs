//! Three-component vector
//!
//! Same operation family as [`Vector2`], plus the 3D cross product.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::array_interop::{component_index, overwrite_components, read_components, write_components};
use crate::error::Result;
use crate::math_utils::{clamp, propagating_max, propagating_min, round_half_up, round_toward_zero};
use crate::vector2::Vector2;

/// A vector with three double-precision components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Number of components.
    pub const COMPONENTS: usize = 3;

    /// The vector `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// The vector `(1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// The vector `(1, 0, 0)`.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// The vector `(0, 1, 0)`.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// The vector `(0, 0, 1)`.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new 3D vector
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value
    #[inline]
    pub const fn splat(value: f64) -> Self {
        Self { x: value, y: value, z: value }
    }

    /// Creates a vector from a 2D vector and z component
    #[inline]
    pub const fn from_xy(v: Vector2, z: f64) -> Self {
        Self { x: v.x, y: v.y, z }
    }

    /// Returns the xy components as a 2D vector
    #[inline]
    pub const fn xy(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Reads a vector from the first three elements of `array`.
    pub fn from_array(array: &[f64]) -> Result<Self> {
        Self::from_array_at(array, 0)
    }

    /// Reads a vector from three consecutive elements of `array` starting at
    /// `index`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index` is outside the array, `InsufficientSpace`
    /// if fewer than three elements remain.
    pub fn from_array_at(array: &[f64], index: isize) -> Result<Self> {
        let [x, y, z] = read_components(array, index)?;
        Ok(Self { x, y, z })
    }

    /// Writes the components to the start of `array`.
    pub fn to_array(&self, array: &mut Vec<f64>) {
        overwrite_components(array, 0, &[self.x, self.y, self.z]);
    }

    /// Writes the components to `array` starting at `index`.
    ///
    /// # Errors
    /// `InvalidIndex` if `index` is negative.
    pub fn to_array_at(&self, array: &mut Vec<f64>, index: isize) -> Result<()> {
        write_components(array, index, &[self.x, self.y, self.z])
    }

    /// Sets all three components.
    #[inline]
    pub fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Sets the component at `index` (0 = x, 1 = y, 2 = z).
    pub fn set_component(&mut self, index: isize, value: f64) -> Result<&mut Self> {
        let position = component_index(index, Self::COMPONENTS)?;
        self[position] = value;
        Ok(self)
    }

    /// Gets the component at `index` (0 = x, 1 = y, 2 = z).
    pub fn component(&self, index: isize) -> Result<f64> {
        let position = component_index(index, Self::COMPONENTS)?;
        Ok(self[position])
    }

    /// Copies the components of `other` into this vector.
    #[inline]
    pub fn copy_from(&mut self, other: &Self) -> &mut Self {
        self.x = other.x;
        self.y = other.y;
        self.z = other.z;
        self
    }

    #[inline]
    pub fn add(left: Self, right: Self) -> Self {
        left + right
    }

    #[inline]
    pub fn add_in_place(&mut self, other: Self) -> &mut Self {
        *self += other;
        self
    }

    #[inline]
    pub fn add_scalar(left: Self, scalar: f64) -> Self {
        left + scalar
    }

    #[inline]
    pub fn add_scalar_in_place(&mut self, scalar: f64) -> &mut Self {
        *self += scalar;
        self
    }

    #[inline]
    pub fn sub(left: Self, right: Self) -> Self {
        left - right
    }

    #[inline]
    pub fn sub_in_place(&mut self, other: Self) -> &mut Self {
        *self -= other;
        self
    }

    #[inline]
    pub fn sub_scalar(left: Self, scalar: f64) -> Self {
        left - scalar
    }

    #[inline]
    pub fn sub_scalar_in_place(&mut self, scalar: f64) -> &mut Self {
        *self -= scalar;
        self
    }

    #[inline]
    pub fn mul(left: Self, right: Self) -> Self {
        left * right
    }

    #[inline]
    pub fn mul_in_place(&mut self, other: Self) -> &mut Self {
        *self *= other;
        self
    }

    #[inline]
    pub fn mul_scalar(left: Self, scalar: f64) -> Self {
        left * scalar
    }

    #[inline]
    pub fn mul_scalar_in_place(&mut self, scalar: f64) -> &mut Self {
        *self *= scalar;
        self
    }

    /// Divides `left` by `right` component-wise; zero divisors give ±∞ or NaN.
    #[inline]
    pub fn div(left: Self, right: Self) -> Self {
        left / right
    }

    #[inline]
    pub fn div_in_place(&mut self, other: Self) -> &mut Self {
        *self /= other;
        self
    }

    #[inline]
    pub fn div_scalar(left: Self, scalar: f64) -> Self {
        left / scalar
    }

    #[inline]
    pub fn div_scalar_in_place(&mut self, scalar: f64) -> &mut Self {
        *self /= scalar;
        self
    }

    /// Returns the component-wise maximum of two vectors, propagating NaN.
    #[inline]
    pub fn max(a: Self, b: Self) -> Self {
        Self {
            x: propagating_max(a.x, b.x),
            y: propagating_max(a.y, b.y),
            z: propagating_max(a.z, b.z),
        }
    }

    #[inline]
    pub fn max_in_place(&mut self, other: Self) -> &mut Self {
        *self = Self::max(*self, other);
        self
    }

    /// Returns the component-wise minimum of two vectors, propagating NaN.
    #[inline]
    pub fn min(a: Self, b: Self) -> Self {
        Self {
            x: propagating_min(a.x, b.x),
            y: propagating_min(a.y, b.y),
            z: propagating_min(a.z, b.z),
        }
    }

    #[inline]
    pub fn min_in_place(&mut self, other: Self) -> &mut Self {
        *self = Self::min(*self, other);
        self
    }

    /// Restricts `value` between `min` and `max`, component-wise.
    ///
    /// NOTE: `min` must be less than or equal to `max`, otherwise the result
    /// is unspecified.
    #[inline]
    pub fn clamp(value: Self, min: Self, max: Self) -> Self {
        Self {
            x: clamp(value.x, min.x, max.x),
            y: clamp(value.y, min.y, max.y),
            z: clamp(value.z, min.z, max.z),
        }
    }

    #[inline]
    pub fn clamp_in_place(&mut self, min: Self, max: Self) -> &mut Self {
        *self = Self::clamp(*self, min, max);
        self
    }

    #[inline]
    pub fn clamp_scalar(value: Self, min: f64, max: f64) -> Self {
        Self {
            x: clamp(value.x, min, max),
            y: clamp(value.y, min, max),
            z: clamp(value.z, min, max),
        }
    }

    #[inline]
    pub fn clamp_scalar_in_place(&mut self, min: f64, max: f64) -> &mut Self {
        *self = Self::clamp_scalar(*self, min, max);
        self
    }

    #[inline]
    pub fn floor(value: Self) -> Self {
        Self {
            x: value.x.floor(),
            y: value.y.floor(),
            z: value.z.floor(),
        }
    }

    #[inline]
    pub fn floor_in_place(&mut self) -> &mut Self {
        *self = Self::floor(*self);
        self
    }

    #[inline]
    pub fn ceil(value: Self) -> Self {
        Self {
            x: value.x.ceil(),
            y: value.y.ceil(),
            z: value.z.ceil(),
        }
    }

    #[inline]
    pub fn ceil_in_place(&mut self) -> &mut Self {
        *self = Self::ceil(*self);
        self
    }

    /// Rounds to the nearest integer with halves towards positive infinity.
    #[inline]
    pub fn round(value: Self) -> Self {
        Self {
            x: round_half_up(value.x),
            y: round_half_up(value.y),
            z: round_half_up(value.z),
        }
    }

    #[inline]
    pub fn round_in_place(&mut self) -> &mut Self {
        *self = Self::round(*self);
        self
    }

    /// Rounds towards zero (up if negative, down otherwise).
    #[inline]
    pub fn round_to_zero(value: Self) -> Self {
        Self {
            x: round_toward_zero(value.x),
            y: round_toward_zero(value.y),
            z: round_toward_zero(value.z),
        }
    }

    #[inline]
    pub fn round_to_zero_in_place(&mut self) -> &mut Self {
        *self = Self::round_to_zero(*self);
        self
    }

    #[inline]
    pub fn neg(value: Self) -> Self {
        -value
    }

    #[inline]
    pub fn neg_in_place(&mut self) -> &mut Self {
        *self = -*self;
        self
    }

    /// Computes the dot product of two vectors
    #[inline]
    pub fn dot(left: Self, right: Self) -> f64 {
        left.x * right.x + left.y * right.y + left.z * right.z
    }

    /// Computes the cross product of two vectors
    #[inline]
    pub fn cross(left: Self, right: Self) -> Self {
        Self {
            x: left.y * right.z - left.z * right.y,
            y: left.z * right.x - left.x * right.z,
            z: left.x * right.y - left.y * right.x,
        }
    }

    /// Replaces this vector with `self × other`.
    #[inline]
    pub fn cross_in_place(&mut self, other: Self) -> &mut Self {
        *self = Self::cross(*self, other);
        self
    }

    /// Computes the squared length of the vector
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Computes the length of the vector
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Divides `value` by its length. A zero vector becomes all NaN.
    #[inline]
    pub fn normalize(value: Self) -> Self {
        Self::div_scalar(value, value.length())
    }

    #[inline]
    pub fn normalize_in_place(&mut self) -> &mut Self {
        let length = self.length();
        self.div_scalar_in_place(length)
    }

    #[inline]
    pub fn abs(value: Self) -> Self {
        Self {
            x: value.x.abs(),
            y: value.y.abs(),
            z: value.z.abs(),
        }
    }

    #[inline]
    pub fn abs_in_place(&mut self) -> &mut Self {
        *self = Self::abs(*self);
        self
    }

    /// Computes the squared distance between two points
    #[inline]
    pub fn distance_squared(a: Self, b: Self) -> f64 {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        let dz = a.z - b.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Computes the distance between two points
    #[inline]
    pub fn distance(a: Self, b: Self) -> f64 {
        Self::distance_squared(a, b).sqrt()
    }

    /// Linear interpolation between two vectors; `alpha` may leave `[0, 1]`.
    #[inline]
    pub fn lerp(a: Self, b: Self, alpha: f64) -> Self {
        // Keep the weighted form so infinite endpoints do not produce NaN.
        Self {
            x: a.x * (1.0 - alpha) + b.x * alpha,
            y: a.y * (1.0 - alpha) + b.y * alpha,
            z: a.z * (1.0 - alpha) + b.z * alpha,
        }
    }

    #[inline]
    pub fn lerp_in_place(&mut self, other: Self, alpha: f64) -> &mut Self {
        *self = Self::lerp(*self, other, alpha);
        self
    }

    #[inline]
    pub fn sqrt(value: Self) -> Self {
        Self {
            x: value.x.sqrt(),
            y: value.y.sqrt(),
            z: value.z.sqrt(),
        }
    }

    #[inline]
    pub fn sqrt_in_place(&mut self) -> &mut Self {
        *self = Self::sqrt(*self);
        self
    }

    /// Reflects a vector around a normal, which is expected to be unit length.
    #[inline]
    pub fn reflect(vector: Self, normal: Self) -> Self {
        let dot = Self::dot(vector, normal);
        Self {
            x: vector.x - 2.0 * dot * normal.x,
            y: vector.y - 2.0 * dot * normal.y,
            z: vector.z - 2.0 * dot * normal.z,
        }
    }

    /// Checks if all components are finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Vector3> for [f64; 3] {
    #[inline]
    fn from(value: Vector3) -> Self {
        [value.x, value.y, value.z]
    }
}

// Operator implementations for Vector3
impl Add for Vector3 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Add<f64> for Vector3 {
    type Output = Self;
    #[inline]
    fn add(self, scalar: f64) -> Self {
        Self {
            x: self.x + scalar,
            y: self.y + scalar,
            z: self.z + scalar,
        }
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl AddAssign<f64> for Vector3 {
    #[inline]
    fn add_assign(&mut self, scalar: f64) {
        self.x += scalar;
        self.y += scalar;
        self.z += scalar;
    }
}

impl Sub for Vector3 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Sub<f64> for Vector3 {
    type Output = Self;
    #[inline]
    fn sub(self, scalar: f64) -> Self {
        Self {
            x: self.x - scalar,
            y: self.y - scalar,
            z: self.z - scalar,
        }
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl SubAssign<f64> for Vector3 {
    #[inline]
    fn sub_assign(&mut self, scalar: f64) {
        self.x -= scalar;
        self.y -= scalar;
        self.z -= scalar;
    }
}

impl Mul for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl MulAssign for Vector3 {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        self.x *= other.x;
        self.y *= other.y;
        self.z *= other.z;
    }
}

impl MulAssign<f64> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

impl Div for Vector3 {
    type Output = Self;
    #[inline]
    fn div(self, other: Self) -> Self {
        Self {
            x: self.x / other.x,
            y: self.y / other.y,
            z: self.z / other.z,
        }
    }
}

impl Div<f64> for Vector3 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl DivAssign for Vector3 {
    #[inline]
    fn div_assign(&mut self, other: Self) {
        self.x /= other.x;
        self.y /= other.y;
        self.z /= other.z;
    }
}

impl DivAssign<f64> for Vector3 {
    #[inline]
    fn div_assign(&mut self, scalar: f64) {
        self.x /= scalar;
        self.y /= scalar;
        self.z /= scalar;
    }
}

impl Neg for Vector3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Index out of bounds for Vector3"),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Index out of bounds for Vector3"),
        }
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        f64::abs_diff_eq(&self.x, &other.x, epsilon)
            && f64::abs_diff_eq(&self.y, &other.y, epsilon)
            && f64::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        f64::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && f64::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && f64::relative_eq(&self.z, &other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Vector3 {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        f64::ulps_eq(&self.x, &other.x, epsilon, max_ulps)
            && f64::ulps_eq(&self.y, &other.y, epsilon, max_ulps)
            && f64::ulps_eq(&self.z, &other.z, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vector3_creation() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);

        assert_eq!(Vector3::splat(5.0), Vector3::new(5.0, 5.0, 5.0));
        assert_eq!(Vector3::default(), Vector3::ZERO);

        let v_xy = Vector3::from_xy(Vector2::new(1.0, 2.0), 3.0);
        assert_eq!(v_xy, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(v_xy.xy(), Vector2::new(1.0, 2.0));
    }

    #[test]
    fn test_vector3_operations() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(Vector3::add(a, b), Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(Vector3::sub(b, a), Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(Vector3::cross(a, b), Vector3::new(-3.0, 6.0, -3.0));
    }

    #[test]
    fn test_vector3_cross_in_place_uses_original_components() {
        let mut a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        a.cross_in_place(b);
        assert_eq!(a, Vector3::new(-3.0, 6.0, -3.0));

        let mut x = Vector3::UNIT_X;
        x.cross_in_place(Vector3::UNIT_Y);
        assert_eq!(x, Vector3::UNIT_Z);
    }

    #[test]
    fn test_vector3_math() {
        let v = Vector3::new(1.0, 2.0, 2.0);

        assert_eq!(Vector3::dot(v, v), 9.0);
        assert_eq!(v.length(), 3.0);
        assert_eq!(v.length_squared(), 9.0);

        let normalized = Vector3::normalize(v);
        assert_relative_eq!(normalized.length(), 1.0);
        assert_relative_eq!(normalized, Vector3::new(1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0));
    }

    #[test]
    fn test_vector3_indexing() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v[2], 3.0);

        v[2] = 4.0;
        assert_eq!(v.z, 4.0);
        assert_eq!(v.component(2), Ok(4.0));
        assert!(v.component(3).is_err());
    }

    #[test]
    fn test_vector3_to_array() {
        let mut array = Vec::new();
        Vector3::new(1.0, 2.0, 3.0).to_array(&mut array);
        assert_eq!(array, vec![1.0, 2.0, 3.0]);
    }
}
