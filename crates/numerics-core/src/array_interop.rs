//! Flat `f64` buffer interop
//!
//! Bounds rules shared by `from_array*`, `to_array*` and component access on
//! every vector type. All checks run before any element is read or written.

use crate::error::{Result, VectorError};

/// Reads `N` consecutive elements of `array` starting at `index`.
///
/// Fails with [`VectorError::IndexOutOfRange`] when `index` is negative or not
/// below `array.len()`, and with [`VectorError::InsufficientSpace`] when fewer
/// than `N` elements remain from `index` to the end.
///
/// # Examples
/// ```
/// use numerics_core::array_interop::read_components;
/// let values: [f64; 2] = read_components(&[1.0, 2.0, 3.0, 4.0], 1).unwrap();
/// assert_eq!(values, [2.0, 3.0]);
/// ```
pub fn read_components<const N: usize>(array: &[f64], index: isize) -> Result<[f64; N]> {
    let len = array.len();
    let start = match usize::try_from(index) {
        Ok(start) if start < len => start,
        _ => {
            log::debug!("rejected read at index {} from array of length {}", index, len);
            return Err(VectorError::IndexOutOfRange { index, len });
        }
    };

    if len - start < N {
        log::debug!(
            "rejected read of {} elements at index {} from array of length {}",
            N,
            index,
            len
        );
        return Err(VectorError::InsufficientSpace {
            index,
            len,
            required: N,
        });
    }

    let mut components = [0.0; N];
    components.copy_from_slice(&array[start..start + N]);
    Ok(components)
}

/// Writes `components` into `array` starting at `index`.
///
/// The destination grows as needed; elements between its previous end and
/// `index` are filled with `0.0`. Only a negative `index` is rejected, with
/// [`VectorError::InvalidIndex`].
pub fn write_components(array: &mut Vec<f64>, index: isize, components: &[f64]) -> Result<()> {
    let start = usize::try_from(index).map_err(|_| {
        log::debug!("rejected write at negative index {}", index);
        VectorError::InvalidIndex { index }
    })?;

    overwrite_components(array, start, components);
    Ok(())
}

/// Writes `components` into `array` starting at the non-negative `start`,
/// growing and zero-filling the array as [`write_components`] does.
pub fn overwrite_components(array: &mut Vec<f64>, start: usize, components: &[f64]) {
    let end = start + components.len();
    if array.len() < end {
        array.resize(end, 0.0);
    }
    array[start..end].copy_from_slice(components);
}

/// Validates a positional component index against a vector of `len` components.
pub fn component_index(index: isize, len: usize) -> Result<usize> {
    match usize::try_from(index) {
        Ok(position) if position < len => Ok(position),
        _ => {
            log::debug!("rejected component index {} for {} components", index, len);
            Err(VectorError::IndexOutOfRange { index, len })
        }
    }
}
