//! Comparators for numbers and validatable values.
//!
//! NaN and invalid values sort before everything else. Float comparison
//! treats values within `10^-precision` of each other as equal.
//!
//! ```
//! use std::cmp::Ordering;
//! use byte_buffer::compare::{compare_all, compare_float_default, compare_number};
//!
//! assert_eq!(compare_number(f64::NAN, 0.0), Ordering::Less);
//! assert_eq!(compare_float_default(0.1 + 0.2, 0.3), Ordering::Equal);
//! assert_eq!(
//!     compare_all([Some(Ordering::Equal), Some(Ordering::Greater)]),
//!     Ordering::Greater
//! );
//! ```

use std::cmp::Ordering;

/// Default number of decimal digits [`compare_float_default`] compares.
pub const DEFAULT_PRECISION: i32 = 8;

/// A value that can report whether its parameters are usable.
pub trait Validatable {
    /// Returns true if the value holds valid parameters.
    fn is_valid(&self) -> bool;
}

/// Compare with `<` and `>`; incomparable values are `Equal`.
pub fn compare_data<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Compare numbers with NaN first. Two NaNs are equal.
pub fn compare_number(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => compare_data(&a, &b),
    }
}

/// Compare numbers with NaN first, treating `|a - b| <= 10^-precision` as
/// equal.
pub fn compare_float(a: f64, b: f64, precision: i32) -> Ordering {
    if a.is_nan() || b.is_nan() {
        return compare_number(a, b);
    }
    // Short-circuit also covers equal infinities, whose difference is NaN.
    if a == b || (a - b).abs() <= 10f64.powi(-precision) {
        return Ordering::Equal;
    }
    compare_data(&a, &b)
}

/// [`compare_float`] with [`DEFAULT_PRECISION`].
pub fn compare_float_default(a: f64, b: f64) -> Ordering {
    compare_float(a, b, DEFAULT_PRECISION)
}

/// Compare by validity: invalid sorts first, two valid values are equal and
/// two invalid values are incomparable (`None`).
pub fn compare_validatable<A, B>(a: &A, b: &B) -> Option<Ordering>
where
    A: Validatable + ?Sized,
    B: Validatable + ?Sized,
{
    match (a.is_valid(), b.is_valid()) {
        (false, false) => None,
        (false, true) => Some(Ordering::Less),
        (true, false) => Some(Ordering::Greater),
        (true, true) => Some(Ordering::Equal),
    }
}

/// Chain comparator results.
///
/// The first result that is incomparable or not `Equal` decides; an
/// incomparable result yields `Equal`. With no deciding result the outcome is
/// `Equal`.
pub fn compare_all<I>(results: I) -> Ordering
where
    I: IntoIterator<Item = Option<Ordering>>,
{
    results
        .into_iter()
        .find(|r| *r != Some(Ordering::Equal))
        .flatten()
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flag(bool);

    impl Validatable for Flag {
        fn is_valid(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_compare_data() {
        assert_eq!(compare_data(&1, &2), Ordering::Less);
        assert_eq!(compare_data(&2, &1), Ordering::Greater);
        assert_eq!(compare_data("a", "a"), Ordering::Equal);
        assert_eq!(compare_data(&f64::NAN, &1.0), Ordering::Equal);
    }

    #[test]
    fn test_compare_number_nan_first() {
        assert_eq!(compare_number(f64::NAN, f64::NAN), Ordering::Equal);
        assert_eq!(compare_number(f64::NAN, f64::NEG_INFINITY), Ordering::Less);
        assert_eq!(compare_number(0.0, f64::NAN), Ordering::Greater);
        assert_eq!(compare_number(-1.0, 1.0), Ordering::Less);
    }

    #[test]
    fn test_compare_float_tolerance() {
        assert_eq!(compare_float_default(1.0, 1.0 + 1e-9), Ordering::Equal);
        assert_eq!(compare_float_default(1.0, 1.0 + 1e-7), Ordering::Less);
        assert_eq!(compare_float(1.0, 1.05, 1), Ordering::Equal);
        assert_eq!(compare_float(1.0, 1.2, 1), Ordering::Less);
        assert_eq!(compare_float(f64::INFINITY, f64::INFINITY, 8), Ordering::Equal);
        assert_eq!(compare_float(f64::NAN, 0.0, 8), Ordering::Less);
    }

    #[test]
    fn test_compare_validatable() {
        assert_eq!(compare_validatable(&Flag(false), &Flag(false)), None);
        assert_eq!(
            compare_validatable(&Flag(false), &Flag(true)),
            Some(Ordering::Less)
        );
        assert_eq!(
            compare_validatable(&Flag(true), &Flag(false)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            compare_validatable(&Flag(true), &Flag(true)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_compare_all() {
        assert_eq!(compare_all(Vec::<Option<Ordering>>::new()), Ordering::Equal);
        assert_eq!(
            compare_all([Some(Ordering::Equal), Some(Ordering::Less)]),
            Ordering::Less
        );
        assert_eq!(
            compare_all([Some(Ordering::Equal), None, Some(Ordering::Greater)]),
            Ordering::Equal
        );
        assert_eq!(
            compare_all([Some(Ordering::Greater), None]),
            Ordering::Greater
        );
    }
}
