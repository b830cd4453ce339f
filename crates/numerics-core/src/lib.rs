//! Numerics Core Library
//!
//! Fixed-size double-precision vectors (`Vector2`, `Vector3`, `Vector4`) with
//! arithmetic, comparison and geometric operations that follow IEEE-754
//! exactly: NaN, infinities and signed zeros propagate as data, and only
//! malformed indices are reported as errors.
//!
//! Each operation has a new-value form and an in-place form:
//!
//! ```
//! use numerics_core::Vector2;
//!
//! let a = Vector2::new(1.0, 2.0);
//! let b = Vector2::new(3.0, 4.0);
//! assert_eq!(Vector2::add(a, b), Vector2::new(4.0, 6.0));
//!
//! let mut c = a;
//! c.add_in_place(b).mul_scalar_in_place(0.5);
//! assert_eq!(c, Vector2::new(2.0, 3.0));
//! assert_eq!(a, Vector2::new(1.0, 2.0));
//! ```

// Component-wise float comparisons are exact by contract.
#![allow(clippy::float_cmp)]

pub mod array_interop;
pub mod error;
pub mod math_utils;
pub mod vector2;
pub mod vector3;
pub mod vector4;

pub use error::{Result, VectorError};
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;
