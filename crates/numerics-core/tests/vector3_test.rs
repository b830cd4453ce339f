use approx::{assert_abs_diff_eq, assert_relative_eq};
use numerics_core::{Vector3, VectorError};

fn assert_bits_eq(actual: f64, expected: f64) {
    assert_eq!(actual.to_bits(), expected.to_bits(), "expected {:?}, got {:?}", expected, actual);
}

#[test]
fn test_constants() {
    assert_eq!(Vector3::ZERO, Vector3::new(0.0, 0.0, 0.0));
    assert_eq!(Vector3::ONE, Vector3::new(1.0, 1.0, 1.0));
    assert_eq!(Vector3::UNIT_X, Vector3::new(1.0, 0.0, 0.0));
    assert_eq!(Vector3::UNIT_Y, Vector3::new(0.0, 1.0, 0.0));
    assert_eq!(Vector3::UNIT_Z, Vector3::new(0.0, 0.0, 1.0));
}

#[test]
fn test_special_components_are_kept() {
    let v = Vector3::new(f64::NAN, f64::MAX, f64::NEG_INFINITY);
    assert!(v.x.is_nan());
    assert_eq!(v.y, f64::MAX);
    assert_eq!(v.z, f64::NEG_INFINITY);
    assert!(!v.is_finite());
    assert!(Vector3::ONE.is_finite());
}

#[test]
fn test_from_array() {
    let array = [1.0, 2.0, 3.0, 4.0];

    assert_eq!(Vector3::from_array(&array), Ok(Vector3::new(1.0, 2.0, 3.0)));
    assert_eq!(Vector3::from_array_at(&array, 1), Ok(Vector3::new(2.0, 3.0, 4.0)));

    assert_eq!(
        Vector3::from_array_at(&array, -1),
        Err(VectorError::IndexOutOfRange { index: -1, len: 4 })
    );
    assert_eq!(
        Vector3::from_array_at(&array, 4),
        Err(VectorError::IndexOutOfRange { index: 4, len: 4 })
    );
    assert_eq!(
        Vector3::from_array_at(&array, 2),
        Err(VectorError::InsufficientSpace {
            index: 2,
            len: 4,
            required: 3
        })
    );
}

#[test]
fn test_to_array() {
    let mut array = Vec::new();

    Vector3::new(1.0, 2.0, 3.0).to_array(&mut array);
    Vector3::new(4.0, 5.0, 6.0).to_array_at(&mut array, 3).unwrap();
    assert_eq!(array, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    assert_eq!(
        Vector3::ONE.to_array_at(&mut array, -1),
        Err(VectorError::InvalidIndex { index: -1 })
    );
}

#[test]
fn test_components() {
    let mut v = Vector3::ZERO;
    v.set(1.0, 2.0, 3.0);
    assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));

    v.set_component(2, 9.0).unwrap();
    assert_eq!(v.component(2), Ok(9.0));
    assert_eq!(
        v.set_component(3, 0.0).err(),
        Some(VectorError::IndexOutOfRange { index: 3, len: 3 })
    );
}

#[test]
fn test_copy_from() {
    let mut a = Vector3::ZERO;
    let b = Vector3::new(1.0, 2.0, 3.0);

    a.copy_from(&b).add_scalar_in_place(1.0);
    assert_eq!(a, Vector3::new(2.0, 3.0, 4.0));
    assert_eq!(b, Vector3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_arithmetic() {
    let a = Vector3::new(1.0, 6.0, 3.0);
    let b = Vector3::new(5.0, 2.0, 3.0);

    assert_eq!(Vector3::add(a, b), Vector3::new(6.0, 8.0, 6.0));
    assert_eq!(Vector3::sub(a, b), Vector3::new(-4.0, 4.0, 0.0));
    assert_eq!(Vector3::mul(a, b), Vector3::new(5.0, 12.0, 9.0));
    assert_eq!(Vector3::div(a, b), Vector3::new(0.2, 3.0, 1.0));
    assert_eq!(Vector3::mul_scalar(a, 2.0), Vector3::new(2.0, 12.0, 6.0));

    let mut c = a;
    c.add_in_place(b).sub_in_place(b).mul_in_place(b).div_in_place(b);
    assert_eq!(c, a);
}

#[test]
fn test_division_by_zero() {
    let actual = Vector3::div(Vector3::new(0.047, -3.0, f64::NEG_INFINITY), Vector3::ZERO);
    assert_eq!(actual, Vector3::new(f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY));

    let actual = Vector3::div_scalar(Vector3::new(-2.0, 3.0, 0.0), 0.0);
    assert_eq!(actual.x, f64::NEG_INFINITY);
    assert_eq!(actual.y, f64::INFINITY);
    assert!(actual.z.is_nan());
}

#[test]
fn test_clamp() {
    let min = Vector3::new(0.0, 0.1, 0.2);
    let max = Vector3::new(1.0, 1.1, 1.2);

    assert_eq!(Vector3::clamp(Vector3::new(0.5, 0.3, 0.33), min, max), Vector3::new(0.5, 0.3, 0.33));
    assert_eq!(Vector3::clamp(Vector3::new(2.0, 3.0, 4.0), min, max), max);
    assert_eq!(Vector3::clamp(Vector3::new(-2.0, -3.0, -4.0), min, max), min);

    // Inverted bounds
    assert_eq!(Vector3::clamp(Vector3::new(0.5, 0.3, 0.33), max, min), min);
    assert_eq!(Vector3::clamp(Vector3::new(2.0, 3.0, 4.0), max, min), min);

    let mut v = Vector3::new(-1.0, 0.5, 2.0);
    v.clamp_scalar_in_place(0.0, 1.0);
    assert_eq!(v, Vector3::new(0.0, 0.5, 1.0));
}

#[test]
fn test_rounding() {
    let v = Vector3::new(0.4, 1.5, f64::INFINITY);
    assert_eq!(Vector3::floor(v), Vector3::new(0.0, 1.0, f64::INFINITY));
    assert_eq!(Vector3::ceil(v), Vector3::new(1.0, 2.0, f64::INFINITY));
    assert_eq!(Vector3::round(v), Vector3::new(0.0, 2.0, f64::INFINITY));
    assert_eq!(Vector3::round_to_zero(v), Vector3::new(0.0, 1.0, f64::INFINITY));

    let actual = Vector3::round_to_zero(Vector3::new(-0.4, -1.5, f64::NEG_INFINITY));
    assert_bits_eq(actual.x, -0.0);
    assert_bits_eq(actual.y, -1.0);
    assert_eq!(actual.z, f64::NEG_INFINITY);

    let mut v = Vector3::new(-0.5, -1.5, 2.5);
    v.round_in_place();
    assert_bits_eq(v.x, -0.0);
    assert_bits_eq(v.y, -1.0);
    assert_bits_eq(v.z, 3.0);
}

#[test]
fn test_neg() {
    let actual = Vector3::neg(Vector3::new(f64::NAN, 0.0, f64::NEG_INFINITY));
    assert!(actual.x.is_nan());
    assert_bits_eq(actual.y, -0.0);
    assert_eq!(actual.z, f64::INFINITY);

    let mut v = Vector3::new(1.0, 2.0, 3.0);
    v.neg_in_place();
    assert_eq!(v, Vector3::new(-1.0, -2.0, -3.0));
}

#[test]
fn test_dot_and_cross() {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(4.0, 5.0, 6.0);
    assert_eq!(Vector3::dot(a, b), 32.0);

    assert_eq!(Vector3::cross(Vector3::UNIT_X, Vector3::UNIT_Y), Vector3::UNIT_Z);
    assert_eq!(Vector3::cross(Vector3::UNIT_Y, Vector3::UNIT_X), Vector3::new(0.0, 0.0, -1.0));
    assert_eq!(Vector3::cross(a, a), Vector3::ZERO);
}

#[test]
fn test_cross_is_perpendicular() {
    let a = Vector3::new(1.55, 1.55, 1.0);
    let b = Vector3::new(2.5, 3.0, 1.5);
    let c = Vector3::cross(a, b);

    assert_abs_diff_eq!(Vector3::dot(a, c), 0.0, epsilon = 1e-14);
    assert_abs_diff_eq!(Vector3::dot(b, c), 0.0, epsilon = 1e-14);

    let mut d = a;
    d.cross_in_place(b);
    assert_eq!(d, c);
}

#[test]
fn test_length_and_normalize() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(v.length_squared(), 14.0);
    assert_eq!(v.length(), 14.0_f64.sqrt());

    let expected = Vector3::new(0.2672612419124244, 0.5345224838248488, 0.8017837257372732);
    assert_relative_eq!(Vector3::normalize(v), expected);

    let mut w = v;
    w.normalize_in_place();
    assert_eq!(w, Vector3::normalize(v));

    let zero = Vector3::normalize(Vector3::ZERO);
    assert!(zero.x.is_nan() && zero.y.is_nan() && zero.z.is_nan());

    assert_eq!(Vector3::normalize(Vector3::splat(f64::MAX)), Vector3::ZERO);
}

#[test]
fn test_distance() {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(4.0, 5.0, 6.0);
    assert_eq!(Vector3::distance_squared(a, b), 27.0);
    assert_eq!(Vector3::distance(a, b), 27.0_f64.sqrt());
}

#[test]
fn test_lerp() {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(3.0, 4.0, 5.0);
    assert_eq!(Vector3::lerp(a, b, 0.5), Vector3::new(2.0, 3.0, 4.0));
    assert_eq!(Vector3::lerp(a, b, 0.0), a);
    assert_eq!(Vector3::lerp(a, b, 1.0), b);
    assert_eq!(Vector3::lerp(a, b, 2.0), Vector3::new(5.0, 6.0, 7.0));

    let infinite = Vector3::new(f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY);
    let mut c = Vector3::new(45.67, 90.0, 0.0);
    c.lerp_in_place(infinite, 0.408);
    assert_eq!(c, infinite);
}

#[test]
fn test_abs_and_sqrt() {
    assert_eq!(
        Vector3::abs(Vector3::new(-2.5, 2.0, f64::NEG_INFINITY)),
        Vector3::new(2.5, 2.0, f64::INFINITY)
    );

    let actual = Vector3::sqrt(Vector3::new(4.0, -1.0, 9.0));
    assert_eq!(actual.x, 2.0);
    assert!(actual.y.is_nan());
    assert_eq!(actual.z, 3.0);
}

#[test]
fn test_reflect() {
    let vector = Vector3::normalize(Vector3::ONE);

    // Reflect on XZ plane
    let n = Vector3::UNIT_Y;
    assert_abs_diff_eq!(
        Vector3::reflect(vector, n),
        Vector3::new(vector.x, -vector.y, vector.z),
        epsilon = 1e-15
    );

    // Reflect on XY plane
    let n = Vector3::UNIT_Z;
    assert_abs_diff_eq!(
        Vector3::reflect(vector, n),
        Vector3::new(vector.x, vector.y, -vector.z),
        epsilon = 1e-15
    );

    // Reflect on YZ plane
    let n = Vector3::UNIT_X;
    assert_abs_diff_eq!(
        Vector3::reflect(vector, n),
        Vector3::new(-vector.x, vector.y, vector.z),
        epsilon = 1e-15
    );

    let n = Vector3::normalize(Vector3::new(0.45, 1.28, 0.86));
    assert_abs_diff_eq!(Vector3::reflect(n, n), Vector3::neg(n), epsilon = 1e-15);
}
