//! # byte-buffer
//!
//! Bounds-checked, endian-aware access to caller-supplied byte containers.
//!
//! A [`ByteBuffer`] wraps any [`ByteStore`] (a `Vec<u8>`, a borrowed
//! `&mut [u8]`, a `Vec<u16>` whose cells hold bytes, ...) and reads or writes
//! 8/16/32-bit signed and unsigned integers in little- or big-endian order,
//! either at explicit positions or through a sequential cursor.
//!
//! ## Quick Start
//!
//! ```rust
//! use byte_buffer::prelude::*;
//!
//! let mut buf = ByteBuffer::from(vec![0u8; 8]);
//! buf.write_int16_be(0xCAFE)?.write_int32_le(-1)?;
//! assert_eq!(buf.position(), 6);
//!
//! assert_eq!(buf.get_uint16_be(0)?, 0xCAFE);
//! assert_eq!(buf.get_int32_le(2)?, -1);
//! assert!(buf.get_uint32_le(6).is_err());
//! # Ok::<(), byte_buffer::Error>(())
//! ```
//!
//! ## Guarantees
//!
//! - Every byte touched by an access is bounds-checked before anything is
//!   read or written; failures leave contents and cursor unchanged.
//! - Written values keep only the low bits of the target width.
//! - The store is never resized; slices are independent copies.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Endian-aware byte buffer with a sequential cursor.
pub mod byte_buffer;

/// Position arguments and their validation.
pub mod position;

/// Backing store abstraction and adapters.
pub mod store;

// ============================================================================
// Utility Modules
// ============================================================================

/// NaN-aware and tolerance-based comparators.
pub mod compare;

/// Design-by-contract helpers for index and two's-complement arithmetic.
pub mod verification_specs;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for byte buffer operations.
pub mod error;

pub use byte_buffer::ByteBuffer;
pub use error::{Error, Result};
pub use position::Position;
pub use store::{ByteCell, ByteStore};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use byte_buffer::prelude::*;
/// ```
pub mod prelude {
    pub use crate::byte_buffer::ByteBuffer;
    pub use crate::compare::{
        compare_all, compare_data, compare_float, compare_float_default, compare_number,
        compare_validatable, Validatable,
    };
    pub use crate::error::{Error, Result};
    pub use crate::position::Position;
    pub use crate::store::{ByteCell, ByteStore};
}
