//! Bounds-checked byte buffer over a caller-supplied store.
//!
//! [`ByteBuffer`] reads and writes 8/16/32-bit integers in either byte order,
//! either at an explicit position (`get_*`/`set_*`) or at an internal cursor
//! that advances after every access (`read_*`/`write_*`).
//!
//! Every byte an operation touches is validated before the first one is read
//! or written, so a failed call never leaves a partial write behind and never
//! moves the cursor.

use std::ops::{Bound, RangeBounds};

use crate::error::{Error, Result};
use crate::position::{checked_index, out_of_bounds, Position};
use crate::store::ByteStore;
use crate::verification_specs::{index_contracts, numeric_contracts};

/// Endian-aware accessor over a fixed-length byte store.
///
/// The store is mutated in place and never resized. Mutators return the same
/// buffer (`&mut Self`) so calls can be chained.
///
/// # Example
///
/// ```
/// use byte_buffer::ByteBuffer;
///
/// let mut buf = ByteBuffer::from(vec![0u8; 4]);
/// buf.set_int16_le(0, 0x1234)?.set_int8(3, -1)?;
/// assert_eq!(buf.to_array_for_debug(), vec![0x34, 0x12, 0x00, 0xFF]);
///
/// buf.rewind();
/// assert_eq!(buf.read_uint16_be()?, 0x3412);
/// assert_eq!(buf.position(), 2);
/// # Ok::<(), byte_buffer::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ByteBuffer<S: ByteStore> {
    /// Backing store, owned or exclusively borrowed.
    store: S,
    /// Offset used by sequential reads and writes.
    cursor: usize,
}

impl<S: ByteStore> From<S> for ByteBuffer<S> {
    fn from(store: S) -> Self {
        Self::new(store)
    }
}

impl<S: ByteStore> ByteBuffer<S> {
    /// Wrap `store` with the cursor at 0.
    ///
    /// Existing contents are kept as they are.
    pub fn new(store: S) -> Self {
        Self { store, cursor: 0 }
    }

    /// Release the backing store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Length of the backing store in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the backing store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Current cursor position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Copy the contents into a `Vec<u8>`, one masked byte per cell.
    #[must_use]
    pub fn to_array_for_debug(&self) -> Vec<u8> {
        (0..self.store.len()).map(|i| self.store.get_byte(i)).collect()
    }

    // ========================================================================
    // Cursor
    // ========================================================================

    /// Move the cursor back to 0.
    pub fn rewind(&mut self) -> &mut Self {
        self.cursor = 0;
        self
    }

    /// Move the cursor to `position`.
    ///
    /// # Errors
    ///
    /// Fails if `position` is not an integer in `[0, len)`.
    pub fn seek_to<P: Position>(&mut self, position: P) -> Result<&mut Self> {
        self.cursor = position.to_index(self.store.len())?;
        Ok(self)
    }

    /// Move the cursor by a signed `offset`.
    ///
    /// # Errors
    ///
    /// Fails if the resulting position is not in `[0, len)`.
    pub fn seek_by<P: Position>(&mut self, offset: P) -> Result<&mut Self> {
        let target = self.cursor as i128 + offset.to_signed()?;
        self.cursor = checked_index(target, self.store.len())?;
        Ok(self)
    }

    // ========================================================================
    // Random-access reads
    // ========================================================================

    /// Read one byte as unsigned.
    pub fn get_uint8<P: Position>(&self, position: P) -> Result<u8> {
        let [b0] = self.load(position)?;
        Ok(b0)
    }

    /// Read one byte as signed.
    pub fn get_int8<P: Position>(&self, position: P) -> Result<i8> {
        self.get_uint8(position).map(signed8)
    }

    /// Read 2 bytes as unsigned, little endian.
    pub fn get_uint16_le<P: Position>(&self, position: P) -> Result<u16> {
        Ok(u16::from_le_bytes(self.load(position)?))
    }

    /// Read 2 bytes as signed, little endian.
    pub fn get_int16_le<P: Position>(&self, position: P) -> Result<i16> {
        self.get_uint16_le(position).map(signed16)
    }

    /// Read 2 bytes as unsigned, big endian.
    pub fn get_uint16_be<P: Position>(&self, position: P) -> Result<u16> {
        Ok(u16::from_be_bytes(self.load(position)?))
    }

    /// Read 2 bytes as signed, big endian.
    pub fn get_int16_be<P: Position>(&self, position: P) -> Result<i16> {
        self.get_uint16_be(position).map(signed16)
    }

    /// Read 4 bytes as unsigned, little endian.
    pub fn get_uint32_le<P: Position>(&self, position: P) -> Result<u32> {
        Ok(u32::from_le_bytes(self.load(position)?))
    }

    /// Read 4 bytes as signed, little endian.
    pub fn get_int32_le<P: Position>(&self, position: P) -> Result<i32> {
        self.get_uint32_le(position).map(signed32)
    }

    /// Read 4 bytes as unsigned, big endian.
    pub fn get_uint32_be<P: Position>(&self, position: P) -> Result<u32> {
        Ok(u32::from_be_bytes(self.load(position)?))
    }

    /// Read 4 bytes as signed, big endian.
    pub fn get_int32_be<P: Position>(&self, position: P) -> Result<i32> {
        self.get_uint32_be(position).map(signed32)
    }

    // ========================================================================
    // Random-access writes
    // ========================================================================

    /// Write the low 8 bits of `value`.
    ///
    /// Signed and unsigned inputs are both accepted: `-1` and `0xFF` store
    /// the same byte.
    pub fn set_int8<P: Position>(&mut self, position: P, value: i64) -> Result<&mut Self> {
        self.store_at(position, [low8(value)])
    }

    /// Write the low 16 bits of `value`, little endian.
    pub fn set_int16_le<P: Position>(&mut self, position: P, value: i64) -> Result<&mut Self> {
        self.store_at(position, low16(value).to_le_bytes())
    }

    /// Write the low 16 bits of `value`, big endian.
    pub fn set_int16_be<P: Position>(&mut self, position: P, value: i64) -> Result<&mut Self> {
        self.store_at(position, low16(value).to_be_bytes())
    }

    /// Write the low 32 bits of `value`, little endian.
    pub fn set_int32_le<P: Position>(&mut self, position: P, value: i64) -> Result<&mut Self> {
        self.store_at(position, low32(value).to_le_bytes())
    }

    /// Write the low 32 bits of `value`, big endian.
    pub fn set_int32_be<P: Position>(&mut self, position: P, value: i64) -> Result<&mut Self> {
        self.store_at(position, low32(value).to_be_bytes())
    }

    // ========================================================================
    // Sequential reads
    // ========================================================================

    /// Read one unsigned byte at the cursor and advance by 1.
    pub fn read_uint8(&mut self) -> Result<u8> {
        self.advance(1, |buf, at| buf.get_uint8(at))
    }

    /// Read one signed byte at the cursor and advance by 1.
    pub fn read_int8(&mut self) -> Result<i8> {
        self.advance(1, |buf, at| buf.get_int8(at))
    }

    /// Read an unsigned little-endian 16-bit value and advance by 2.
    pub fn read_uint16_le(&mut self) -> Result<u16> {
        self.advance(2, |buf, at| buf.get_uint16_le(at))
    }

    /// Read a signed little-endian 16-bit value and advance by 2.
    pub fn read_int16_le(&mut self) -> Result<i16> {
        self.advance(2, |buf, at| buf.get_int16_le(at))
    }

    /// Read an unsigned big-endian 16-bit value and advance by 2.
    pub fn read_uint16_be(&mut self) -> Result<u16> {
        self.advance(2, |buf, at| buf.get_uint16_be(at))
    }

    /// Read a signed big-endian 16-bit value and advance by 2.
    pub fn read_int16_be(&mut self) -> Result<i16> {
        self.advance(2, |buf, at| buf.get_int16_be(at))
    }

    /// Read an unsigned little-endian 32-bit value and advance by 4.
    pub fn read_uint32_le(&mut self) -> Result<u32> {
        self.advance(4, |buf, at| buf.get_uint32_le(at))
    }

    /// Read a signed little-endian 32-bit value and advance by 4.
    pub fn read_int32_le(&mut self) -> Result<i32> {
        self.advance(4, |buf, at| buf.get_int32_le(at))
    }

    /// Read an unsigned big-endian 32-bit value and advance by 4.
    pub fn read_uint32_be(&mut self) -> Result<u32> {
        self.advance(4, |buf, at| buf.get_uint32_be(at))
    }

    /// Read a signed big-endian 32-bit value and advance by 4.
    pub fn read_int32_be(&mut self) -> Result<i32> {
        self.advance(4, |buf, at| buf.get_int32_be(at))
    }

    // ========================================================================
    // Sequential writes
    // ========================================================================

    /// Write one byte at the cursor and advance by 1.
    pub fn write_int8(&mut self, value: i64) -> Result<&mut Self> {
        self.advance(1, |buf, at| buf.set_int8(at, value).map(drop))?;
        Ok(self)
    }

    /// Write a little-endian 16-bit value at the cursor and advance by 2.
    pub fn write_int16_le(&mut self, value: i64) -> Result<&mut Self> {
        self.advance(2, |buf, at| buf.set_int16_le(at, value).map(drop))?;
        Ok(self)
    }

    /// Write a big-endian 16-bit value at the cursor and advance by 2.
    pub fn write_int16_be(&mut self, value: i64) -> Result<&mut Self> {
        self.advance(2, |buf, at| buf.set_int16_be(at, value).map(drop))?;
        Ok(self)
    }

    /// Write a little-endian 32-bit value at the cursor and advance by 4.
    pub fn write_int32_le(&mut self, value: i64) -> Result<&mut Self> {
        self.advance(4, |buf, at| buf.set_int32_le(at, value).map(drop))?;
        Ok(self)
    }

    /// Write a big-endian 32-bit value at the cursor and advance by 4.
    pub fn write_int32_be(&mut self, value: i64) -> Result<&mut Self> {
        self.advance(4, |buf, at| buf.set_int32_be(at, value).map(drop))?;
        Ok(self)
    }

    // ========================================================================
    // Slicing and fills
    // ========================================================================

    /// Copy `range` into a new, independent buffer with its cursor at 0.
    ///
    /// Bounds are clamped to the buffer length, so an out-of-range or
    /// reversed range yields a shorter or empty buffer rather than an error.
    ///
    /// ```
    /// use byte_buffer::ByteBuffer;
    ///
    /// let buf = ByteBuffer::from(vec![0u8, 1, 2, 3, 4, 5, 6, 7]);
    /// assert_eq!(buf.slice(4..6).to_array_for_debug(), vec![4, 5]);
    /// assert_eq!(buf.slice(4..).to_array_for_debug(), vec![4, 5, 6, 7]);
    /// assert_eq!(buf.slice(6..100).to_array_for_debug(), vec![6, 7]);
    /// assert!(buf.slice(5..2).is_empty());
    /// ```
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> ByteBuffer<S::Owned> {
        let (start, end) = self.clamped(range);
        log::trace!("slicing {start}..{end} of {} bytes", self.store.len());
        ByteBuffer::new(self.store.copy_range(start, end))
    }

    /// Fill `range` with the low 8 bits of `value`.
    ///
    /// Bounds are clamped like [`slice`](Self::slice); an empty or reversed
    /// range leaves the buffer untouched.
    pub fn fill_int8<R: RangeBounds<usize>>(&mut self, value: i64, range: R) -> &mut Self {
        let (start, end) = self.clamped(range);
        if start < end {
            self.store.fill_range(low8(value), start, end);
        }
        self
    }

    /// Fill `range` with the low 16 bits of `value`, little endian.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::IllegalRange`] if the span is not a multiple of 2
    /// bytes, and [`Error::OutOfBounds`] if it runs past the end. An empty or
    /// reversed range is a no-op, wherever it starts.
    pub fn fill_int16_le<R: RangeBounds<usize>>(
        &mut self,
        value: i64,
        range: R,
    ) -> Result<&mut Self> {
        self.fill_pattern(low16(value).to_le_bytes(), range)
    }

    /// Fill `range` with the low 16 bits of `value`, big endian.
    ///
    /// Same range rules as [`fill_int16_le`](Self::fill_int16_le).
    pub fn fill_int16_be<R: RangeBounds<usize>>(
        &mut self,
        value: i64,
        range: R,
    ) -> Result<&mut Self> {
        self.fill_pattern(low16(value).to_be_bytes(), range)
    }

    /// Fill `range` with the low 32 bits of `value`, little endian.
    ///
    /// The span must be a multiple of 4 bytes.
    pub fn fill_int32_le<R: RangeBounds<usize>>(
        &mut self,
        value: i64,
        range: R,
    ) -> Result<&mut Self> {
        self.fill_pattern(low32(value).to_le_bytes(), range)
    }

    /// Fill `range` with the low 32 bits of `value`, big endian.
    pub fn fill_int32_be<R: RangeBounds<usize>>(
        &mut self,
        value: i64,
        range: R,
    ) -> Result<&mut Self> {
        self.fill_pattern(low32(value).to_be_bytes(), range)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Validate `N` consecutive indices starting at `position`.
    fn span<P: Position, const N: usize>(&self, position: P) -> Result<usize> {
        let len = self.store.len();
        let start = position.to_index(len)?;
        if !index_contracts::validate_span(start, N, len) {
            // `start` is valid, so the first byte past the end is at `len`.
            return Err(out_of_bounds(len as i128, len));
        }
        Ok(start)
    }

    fn load<P: Position, const N: usize>(&self, position: P) -> Result<[u8; N]> {
        let start = self.span::<P, N>(position)?;
        Ok(std::array::from_fn(|i| self.store.get_byte(start + i)))
    }

    fn store_at<P: Position, const N: usize>(
        &mut self,
        position: P,
        bytes: [u8; N],
    ) -> Result<&mut Self> {
        let start = self.span::<P, N>(position)?;
        for (i, byte) in bytes.into_iter().enumerate() {
            self.store.set_byte(start + i, byte);
        }
        Ok(self)
    }

    /// Run `op` at the cursor, then move the cursor past the `width` bytes it
    /// touched. The cursor stays put if `op` fails.
    fn advance<T>(
        &mut self,
        width: usize,
        op: impl FnOnce(&mut Self, usize) -> Result<T>,
    ) -> Result<T> {
        let at = self.cursor;
        let value = op(self, at)?;
        self.cursor = at + width;
        Ok(value)
    }

    fn fill_pattern<R: RangeBounds<usize>, const N: usize>(
        &mut self,
        pattern: [u8; N],
        range: R,
    ) -> Result<&mut Self> {
        let len = self.store.len();
        let (start, end) = resolve(range, len);
        if start >= end {
            log::trace!("skipping fill over empty range {start}..{end}");
            return Ok(self);
        }
        if !index_contracts::validate_alignment(start, end, N) {
            log::debug!("fill range {start}..{end} is not a multiple of {N} bytes");
            return Err(Error::IllegalRange { start, end });
        }
        if end > len {
            return Err(out_of_bounds(start.max(len) as i128, len));
        }
        for at in (start..end).step_by(N) {
            for (i, &byte) in pattern.iter().enumerate() {
                self.store.set_byte(at + i, byte);
            }
        }
        Ok(self)
    }

    /// Resolve `range` and clamp it so that `start <= end <= len`.
    fn clamped<R: RangeBounds<usize>>(&self, range: R) -> (usize, usize) {
        let len = self.store.len();
        let (start, end) = resolve(range, len);
        let end = end.min(len);
        (start.min(end), end)
    }
}

/// Turn range bounds into a half-open `(start, end)` pair, defaulting to
/// `0..len`. No clamping.
fn resolve<R: RangeBounds<usize>>(range: R, len: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    (start, end)
}

#[inline]
fn low8(value: i64) -> u8 {
    let low = value as u8;
    debug_assert_eq!(u64::from(low), numeric_contracts::mask(value, 8));
    low
}

#[inline]
fn low16(value: i64) -> u16 {
    let low = value as u16;
    debug_assert_eq!(u64::from(low), numeric_contracts::mask(value, 16));
    low
}

#[inline]
fn low32(value: i64) -> u32 {
    let low = value as u32;
    debug_assert_eq!(u64::from(low), numeric_contracts::mask(value, 32));
    low
}

#[inline]
fn signed8(uint: u8) -> i8 {
    let int = uint as i8;
    debug_assert_eq!(i64::from(int), numeric_contracts::to_signed(u64::from(uint), 8));
    int
}

#[inline]
fn signed16(uint: u16) -> i16 {
    let int = uint as i16;
    debug_assert_eq!(i64::from(int), numeric_contracts::to_signed(u64::from(uint), 16));
    int
}

#[inline]
fn signed32(uint: u32) -> i32 {
    let int = uint as i32;
    debug_assert_eq!(i64::from(int), numeric_contracts::to_signed(u64::from(uint), 32));
    int
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
