//! Four-component vector

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::array_interop::{component_index, overwrite_components, read_components, write_components};
use crate::error::Result;
use crate::math_utils::{clamp, propagating_max, propagating_min, round_half_up, round_toward_zero};
use crate::vector3::Vector3;

/// A vector with four double-precision components.
///
/// There is no cross product in four dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Vector4 {
    pub const COMPONENTS: usize = 4;

    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const UNIT_W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn splat(value: f64) -> Self {
        Self { x: value, y: value, z: value, w: value }
    }

    /// Creates a 4D vector from a 3D vector and w component
    #[inline]
    pub const fn from_xyz(v: Vector3, w: f64) -> Self {
        Self { x: v.x, y: v.y, z: v.z, w }
    }

    /// Returns the xyz components as a 3D vector
    #[inline]
    pub const fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn from_array(array: &[f64]) -> Result<Self> {
        Self::from_array_at(array, 0)
    }

    /// Reads four consecutive elements of `array` starting at `index`.
    pub fn from_array_at(array: &[f64], index: isize) -> Result<Self> {
        let [x, y, z, w] = read_components(array, index)?;
        Ok(Self { x, y, z, w })
    }

    pub fn to_array(&self, array: &mut Vec<f64>) {
        overwrite_components(array, 0, &[self.x, self.y, self.z, self.w]);
    }

    /// Writes the four components to `array` starting at a non-negative `index`.
    pub fn to_array_at(&self, array: &mut Vec<f64>, index: isize) -> Result<()> {
        write_components(array, index, &[self.x, self.y, self.z, self.w])
    }

    #[inline]
    pub fn set(&mut self, x: f64, y: f64, z: f64, w: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
        self
    }

    pub fn set_component(&mut self, index: isize, value: f64) -> Result<&mut Self> {
        let position = component_index(index, Self::COMPONENTS)?;
        self[position] = value;
        Ok(self)
    }

    pub fn component(&self, index: isize) -> Result<f64> {
        let position = component_index(index, Self::COMPONENTS)?;
        Ok(self[position])
    }

    #[inline]
    pub fn copy_from(&mut self, other: &Self) -> &mut Self {
        *self = *other;
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

    #[inline]
    pub fn max(a: Self, b: Self) -> Self {
        Self {
            x: propagating_max(a.x, b.x),
            y: propagating_max(a.y, b.y),
            z: propagating_max(a.z, b.z),
            w: propagating_max(a.w, b.w),
        }
    }

    #[inline]
    pub fn max_in_place(&mut self, other: Self) -> &mut Self {
        *self = Self::max(*self, other);
        self
    }

    #[inline]
    pub fn min(a: Self, b: Self) -> Self {
        Self {
            x: propagating_min(a.x, b.x),
            y: propagating_min(a.y, b.y),
            z: propagating_min(a.z, b.z),
            w: propagating_min(a.w, b.w),
        }
    }

    #[inline]
    pub fn min_in_place(&mut self, other: Self) -> &mut Self {
        *self = Self::min(*self, other);
        self
    }

    /// Component-wise `min(max(value, min), max)`; unspecified if `min > max`.
    #[inline]
    pub fn clamp(value: Self, min: Self, max: Self) -> Self {
        Self {
            x: clamp(value.x, min.x, max.x),
            y: clamp(value.y, min.y, max.y),
            z: clamp(value.z, min.z, max.z),
            w: clamp(value.w, min.w, max.w),
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
            w: clamp(value.w, min, max),
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
            w: value.w.floor(),
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
            w: value.w.ceil(),
        }
    }

    #[inline]
    pub fn ceil_in_place(&mut self) -> &mut Self {
        *self = Self::ceil(*self);
        self
    }

    #[inline]
    pub fn round(value: Self) -> Self {
        Self {
            x: round_half_up(value.x),
            y: round_half_up(value.y),
            z: round_half_up(value.z),
            w: round_half_up(value.w),
        }
    }

    #[inline]
    pub fn round_in_place(&mut self) -> &mut Self {
        *self = Self::round(*self);
        self
    }

    #[inline]
    pub fn round_to_zero(value: Self) -> Self {
        Self {
            x: round_toward_zero(value.x),
            y: round_toward_zero(value.y),
            z: round_toward_zero(value.z),
            w: round_toward_zero(value.w),
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

    #[inline]
    pub fn dot(left: Self, right: Self) -> f64 {
        left.x * right.x + left.y * right.y + left.z * right.z + left.w * right.w
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

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
            w: value.w.abs(),
        }
    }

    #[inline]
    pub fn abs_in_place(&mut self) -> &mut Self {
        *self = Self::abs(*self);
        self
    }

    #[inline]
    pub fn distance_squared(a: Self, b: Self) -> f64 {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        let dz = a.z - b.z;
        let dw = a.w - b.w;
        dx * dx + dy * dy + dz * dz + dw * dw
    }

    #[inline]
    pub fn distance(a: Self, b: Self) -> f64 {
        Self::distance_squared(a, b).sqrt()
    }

    #[inline]
    pub fn lerp(a: Self, b: Self, alpha: f64) -> Self {
        Self {
            x: a.x * (1.0 - alpha) + b.x * alpha,
            y: a.y * (1.0 - alpha) + b.y * alpha,
            z: a.z * (1.0 - alpha) + b.z * alpha,
            w: a.w * (1.0 - alpha) + b.w * alpha,
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
            w: value.w.sqrt(),
        }
    }

    #[inline]
    pub fn sqrt_in_place(&mut self) -> &mut Self {
        *self = Self::sqrt(*self);
        self
    }

    #[inline]
    pub fn reflect(vector: Self, normal: Self) -> Self {
        let dot = Self::dot(vector, normal);
        Self {
            x: vector.x - 2.0 * dot * normal.x,
            y: vector.y - 2.0 * dot * normal.y,
            z: vector.z - 2.0 * dot * normal.z,
            w: vector.w - 2.0 * dot * normal.w,
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

impl From<[f64; 4]> for Vector4 {
    #[inline]
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Self { x, y, z, w }
    }
}

impl From<Vector4> for [f64; 4] {
    #[inline]
    fn from(value: Vector4) -> Self {
        [value.x, value.y, value.z, value.w]
    }
}

// Operator implementations for Vector4
impl Add for Vector4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
            w: self.w + other.w,
        }
    }
}

impl Add<f64> for Vector4 {
    type Output = Self;
    #[inline]
    fn add(self, scalar: f64) -> Self {
        Self {
            x: self.x + scalar,
            y: self.y + scalar,
            z: self.z + scalar,
            w: self.w + scalar,
        }
    }
}

impl AddAssign for Vector4 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self.w += other.w;
    }
}

impl AddAssign<f64> for Vector4 {
    #[inline]
    fn add_assign(&mut self, scalar: f64) {
        self.x += scalar;
        self.y += scalar;
        self.z += scalar;
        self.w += scalar;
    }
}

impl Sub for Vector4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
            w: self.w - other.w,
        }
    }
}

impl Sub<f64> for Vector4 {
    type Output = Self;
    #[inline]
    fn sub(self, scalar: f64) -> Self {
        Self {
            x: self.x - scalar,
            y: self.y - scalar,
            z: self.z - scalar,
            w: self.w - scalar,
        }
    }
}

impl SubAssign for Vector4 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
        self.w -= other.w;
    }
}

impl SubAssign<f64> for Vector4 {
    #[inline]
    fn sub_assign(&mut self, scalar: f64) {
        self.x -= scalar;
        self.y -= scalar;
        self.z -= scalar;
        self.w -= scalar;
    }
}

impl Mul for Vector4 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
            w: self.w * other.w,
        }
    }
}

impl Mul<f64> for Vector4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
            w: self.w * scalar,
        }
    }
}

impl MulAssign for Vector4 {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        self.x *= other.x;
        self.y *= other.y;
        self.z *= other.z;
        self.w *= other.w;
    }
}

impl MulAssign<f64> for Vector4 {
    #[inline]
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
        self.w *= scalar;
    }
}

impl Div for Vector4 {
    type Output = Self;
    #[inline]
    fn div(self, other: Self) -> Self {
        Self {
            x: self.x / other.x,
            y: self.y / other.y,
            z: self.z / other.z,
            w: self.w / other.w,
        }
    }
}

impl Div<f64> for Vector4 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
            w: self.w / scalar,
        }
    }
}

impl DivAssign for Vector4 {
    #[inline]
    fn div_assign(&mut self, other: Self) {
        self.x /= other.x;
        self.y /= other.y;
        self.z /= other.z;
        self.w /= other.w;
    }
}

impl DivAssign<f64> for Vector4 {
    #[inline]
    fn div_assign(&mut self, scalar: f64) {
        self.x /= scalar;
        self.y /= scalar;
        self.z /= scalar;
        self.w /= scalar;
    }
}

impl Neg for Vector4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

impl Index<usize> for Vector4 {
    type Output = f64;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Index out of bounds for Vector4"),
        }
    }
}

impl IndexMut<usize> for Vector4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Index out of bounds for Vector4"),
        }
    }
}

impl AbsDiffEq for Vector4 {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        f64::abs_diff_eq(&self.x, &other.x, epsilon)
            && f64::abs_diff_eq(&self.y, &other.y, epsilon)
            && f64::abs_diff_eq(&self.z, &other.z, epsilon)
            && f64::abs_diff_eq(&self.w, &other.w, epsilon)
    }
}

impl RelativeEq for Vector4 {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        f64::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && f64::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && f64::relative_eq(&self.z, &other.z, epsilon, max_relative)
            && f64::relative_eq(&self.w, &other.w, epsilon, max_relative)
    }
}

impl UlpsEq for Vector4 {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        f64::ulps_eq(&self.x, &other.x, epsilon, max_ulps)
            && f64::ulps_eq(&self.y, &other.y, epsilon, max_ulps)
            && f64::ulps_eq(&self.z, &other.z, epsilon, max_ulps)
            && f64::ulps_eq(&self.w, &other.w, epsilon, max_ulps)
    }
}
