//! Formal Verification Specifications for byte-buffer
//!
//! Design-by-contract specifications using Verus-style pre/postconditions.
//! These serve as both documentation and verification targets.
//!
//! When Verus is available, these can be mechanically verified.
//! Without Verus, they serve as checked documentation via debug_assert!().

/// Index and span invariants for store access
///
/// # Verification Specifications
///
/// #[requires(len > 0)]
/// #[ensures(result == true ==> index < len)]
/// #[invariant(self.cursor <= self.store.len())]
/// #[recommends(width == 1 || width == 2 || width == 4)]
pub mod index_contracts {
    /// Validate that an index is within bounds
    ///
    /// #[ensures(result == true ==> index >= 0 && index < len)]
    /// #[ensures(result == false ==> index < 0 || index >= len)]
    pub fn validate_index(index: i128, len: usize) -> bool {
        index >= 0 && index < len as i128
    }

    /// Validate that a float position names an integer index
    ///
    /// #[ensures(result == true ==> val.is_finite())]
    /// #[ensures(result == true ==> val.fract() == 0.0)]
    /// #[ensures(result == false ==> val.is_nan() || val.is_infinite() || val.fract() != 0.0)]
    pub fn is_integral(val: f64) -> bool {
        val.is_finite() && val.fract() == 0.0
    }

    /// Validate that `width` bytes starting at `start` fit in `len`
    ///
    /// #[requires(width > 0)]
    /// #[ensures(result == true ==> start + width <= len)]
    /// #[ensures(result == false ==> start + width > len)]
    pub fn validate_span(start: usize, width: usize, len: usize) -> bool {
        start.checked_add(width).is_some_and(|end| end <= len)
    }

    /// Validate that a fill span is aligned to its pattern width
    ///
    /// #[requires(start <= end)]
    /// #[requires(width > 0)]
    /// #[ensures(result == true ==> (end - start) % width == 0)]
    pub fn validate_alignment(start: usize, end: usize, width: usize) -> bool {
        debug_assert!(start <= end, "start must not exceed end");
        (end - start) % width == 0
    }
}

/// Two's-complement invariants for masking and reinterpretation
///
/// #[requires(bits == 8 || bits == 16 || bits == 32)]
/// #[ensures(mask(value, bits) < 2^bits)]
/// #[ensures(to_signed(mask(value, bits), bits) >= -(2^(bits-1)))]
/// #[ensures(to_signed(mask(value, bits), bits) < 2^(bits-1))]
pub mod numeric_contracts {
    /// Keep the low `bits` bits of `value`
    ///
    /// #[requires(bits > 0 && bits < 64)]
    /// #[ensures(result < 1 << bits)]
    /// #[ensures(value >= 0 && value < 1 << bits ==> result == value)]
    pub fn mask(value: i64, bits: u32) -> u64 {
        debug_assert!(bits > 0 && bits < 64, "bits must be in 1..64");
        (value as u64) & ((1u64 << bits) - 1)
    }

    /// Reinterpret an unsigned `bits`-wide value as signed
    ///
    /// #[requires(bits > 0 && bits < 64)]
    /// #[requires(uint < 1 << bits)]
    /// #[ensures(uint < 1 << (bits - 1) ==> result == uint)]
    /// #[ensures(uint >= 1 << (bits - 1) ==> result == uint - (1 << bits))]
    pub fn to_signed(uint: u64, bits: u32) -> i64 {
        debug_assert!(bits > 0 && bits < 64, "bits must be in 1..64");
        let threshold = 1u64 << (bits - 1);
        if uint < threshold {
            uint as i64
        } else {
            uint as i64 - (threshold as i64) * 2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_index() {
        assert!(index_contracts::validate_index(0, 5));
        assert!(index_contracts::validate_index(4, 5));
        assert!(!index_contracts::validate_index(5, 5));
        assert!(!index_contracts::validate_index(-1, 5));
        assert!(!index_contracts::validate_index(0, 0));
    }

    #[test]
    fn test_is_integral() {
        assert!(index_contracts::is_integral(3.0));
        assert!(index_contracts::is_integral(-2.0));
        assert!(!index_contracts::is_integral(1.5));
        assert!(!index_contracts::is_integral(f64::NAN));
        assert!(!index_contracts::is_integral(f64::INFINITY));
    }

    #[test]
    fn test_validate_span() {
        assert!(index_contracts::validate_span(0, 4, 4));
        assert!(!index_contracts::validate_span(1, 4, 4));
        assert!(!index_contracts::validate_span(usize::MAX, 2, 4));
    }

    #[test]
    fn test_validate_alignment() {
        assert!(index_contracts::validate_alignment(1, 5, 2));
        assert!(!index_contracts::validate_alignment(1, 4, 2));
        assert!(index_contracts::validate_alignment(3, 3, 4));
    }

    #[test]
    fn test_mask() {
        assert_eq!(numeric_contracts::mask(0x123, 8), 0x23);
        assert_eq!(numeric_contracts::mask(-1, 32), 0xFFFF_FFFF);
        assert_eq!(numeric_contracts::mask(-2, 16), 0xFFFE);
    }

    #[test]
    fn test_to_signed() {
        assert_eq!(numeric_contracts::to_signed(0x7F, 8), 127);
        assert_eq!(numeric_contracts::to_signed(0x80, 8), -128);
        assert_eq!(numeric_contracts::to_signed(0xFFFF, 16), -1);
        assert_eq!(
            numeric_contracts::to_signed(0xFEDC_BA98, 32),
            0xFEDC_BA98_i64 - 0x1_0000_0000
        );
    }
}
