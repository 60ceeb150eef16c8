//! Position arguments for indexed access.
//!
//! Positions may be given as any primitive integer or as a float. Floats are
//! accepted so that values computed in floating point (offsets derived from
//! sizes, ratios, ...) can be passed straight through; they must name an
//! integer exactly.

use crate::error::{Error, Result};
use crate::verification_specs::index_contracts;

/// A value usable as a byte position or a cursor offset.
///
/// ```
/// use byte_buffer::Position;
///
/// assert_eq!(3u8.to_signed(), Ok(3));
/// assert_eq!((-2i64).to_signed(), Ok(-2));
/// assert_eq!(4.0f64.to_signed(), Ok(4));
/// assert!(1.5f64.to_signed().is_err());
/// ```
pub trait Position: Copy {
    /// Convert to a signed integer, rejecting non-integral values.
    fn to_signed(self) -> Result<i128>;

    /// Convert to an index into a store of length `len`.
    fn to_index(self, len: usize) -> Result<usize> {
        checked_index(self.to_signed()?, len)
    }
}

macro_rules! impl_integer_position {
    ($($t:ty),* $(,)?) => {
        $(
            impl Position for $t {
                #[inline]
                fn to_signed(self) -> Result<i128> {
                    Ok(self as i128)
                }
            }
        )*
    };
}

impl_integer_position!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Position for f64 {
    fn to_signed(self) -> Result<i128> {
        // `as` saturates, so integral values beyond i128 are rejected up front.
        if index_contracts::is_integral(self) && self.abs() < I128_LIMIT {
            Ok(self as i128)
        } else {
            log::debug!("rejected position {self}");
            Err(Error::IllegalPosition(self))
        }
    }
}

/// 2^127, the first magnitude an `i128` cannot hold.
const I128_LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

impl Position for f32 {
    fn to_signed(self) -> Result<i128> {
        f64::from(self).to_signed()
    }
}

/// Validate a signed position against a store length.
pub(crate) fn checked_index(position: i128, len: usize) -> Result<usize> {
    if index_contracts::validate_index(position, len) {
        Ok(position as usize)
    } else {
        Err(out_of_bounds(position, len))
    }
}

/// Build (and log) an out-of-bounds error.
pub(crate) fn out_of_bounds(position: i128, len: usize) -> Error {
    log::debug!("position {position} out of bounds for length {len}");
    Error::OutOfBounds {
        position,
        length: len,
    }
}
