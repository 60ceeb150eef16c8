//! Backing stores for [`ByteBuffer`](crate::ByteBuffer).
//!
//! A store is a fixed-length, index-addressable sequence of cells, each
//! holding one byte. Cells may be wider than a byte (a `Vec<u16>` works as a
//! store); reads keep the low 8 bits of the cell's two's-complement value.
//!
//! Provided stores:
//!
//! - `Vec<T>` and `[T; N]`, owned by the buffer
//! - `[T]`, usually as `&mut [T]`, borrowed from the caller
//! - `&mut S` for any store `S` (e.g. `&mut Vec<u8>`)

/// A single cell of a byte store.
pub trait ByteCell: Copy {
    /// Build a cell holding `byte`.
    ///
    /// Signed 8-bit cells wrap (`0xFF` becomes `-1`); wider cells zero-extend.
    fn from_byte(byte: u8) -> Self;

    /// Low 8 bits of the cell value.
    fn to_byte(self) -> u8;
}

macro_rules! impl_byte_cell {
    ($($t:ty),* $(,)?) => {
        $(
            impl ByteCell for $t {
                #[inline]
                fn from_byte(byte: u8) -> Self {
                    byte as $t
                }

                #[inline]
                fn to_byte(self) -> u8 {
                    self as u8
                }
            }
        )*
    };
}

impl_byte_cell!(i8, u16, i16, u32, i32, u64, i64);

impl ByteCell for u8 {
    #[inline]
    fn from_byte(byte: u8) -> Self {
        byte
    }

    #[inline]
    fn to_byte(self) -> u8 {
        self
    }
}

/// Fixed-length container a [`ByteBuffer`](crate::ByteBuffer) reads and
/// writes in place.
///
/// Index arguments are always validated by the buffer before a store method
/// is called: `index < len()` for single-cell access, and
/// `start <= end <= len()` for ranges. Implementations may panic when that
/// contract is broken.
pub trait ByteStore {
    /// Store type produced by [`copy_range`](ByteStore::copy_range).
    type Owned: ByteStore;

    /// Number of cells.
    fn len(&self) -> usize;

    /// Returns true if the store has no cells.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Low 8 bits of the cell at `index`.
    fn get_byte(&self, index: usize) -> u8;

    /// Overwrite the cell at `index` with `byte`.
    fn set_byte(&mut self, index: usize, byte: u8);

    /// Independent copy of the cells in `start..end`.
    fn copy_range(&self, start: usize, end: usize) -> Self::Owned;

    /// Overwrite every cell in `start..end` with `byte`.
    fn fill_range(&mut self, byte: u8, start: usize, end: usize);
}

impl<T: ByteCell> ByteStore for [T] {
    type Owned = Vec<T>;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get_byte(&self, index: usize) -> u8 {
        self[index].to_byte()
    }

    #[inline]
    fn set_byte(&mut self, index: usize, byte: u8) {
        self[index] = T::from_byte(byte);
    }

    fn copy_range(&self, start: usize, end: usize) -> Vec<T> {
        self[start..end].to_vec()
    }

    fn fill_range(&mut self, byte: u8, start: usize, end: usize) {
        self[start..end].fill(T::from_byte(byte));
    }
}

impl<T: ByteCell> ByteStore for Vec<T> {
    type Owned = Vec<T>;

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn get_byte(&self, index: usize) -> u8 {
        self.as_slice().get_byte(index)
    }

    #[inline]
    fn set_byte(&mut self, index: usize, byte: u8) {
        self.as_mut_slice().set_byte(index, byte);
    }

    fn copy_range(&self, start: usize, end: usize) -> Vec<T> {
        self.as_slice().copy_range(start, end)
    }

    fn fill_range(&mut self, byte: u8, start: usize, end: usize) {
        self.as_mut_slice().fill_range(byte, start, end);
    }
}

impl<T: ByteCell, const N: usize> ByteStore for [T; N] {
    type Owned = Vec<T>;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get_byte(&self, index: usize) -> u8 {
        self.as_slice().get_byte(index)
    }

    #[inline]
    fn set_byte(&mut self, index: usize, byte: u8) {
        self.as_mut_slice().set_byte(index, byte);
    }

    fn copy_range(&self, start: usize, end: usize) -> Vec<T> {
        self.as_slice().copy_range(start, end)
    }

    fn fill_range(&mut self, byte: u8, start: usize, end: usize) {
        self.as_mut_slice().fill_range(byte, start, end);
    }
}

impl<S: ByteStore + ?Sized> ByteStore for &mut S {
    type Owned = S::Owned;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn get_byte(&self, index: usize) -> u8 {
        (**self).get_byte(index)
    }

    #[inline]
    fn set_byte(&mut self, index: usize, byte: u8) {
        (**self).set_byte(index, byte);
    }

    fn copy_range(&self, start: usize, end: usize) -> S::Owned {
        (**self).copy_range(start, end)
    }

    fn fill_range(&mut self, byte: u8, start: usize, end: usize) {
        (**self).fill_range(byte, start, end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_masking() {
        assert_eq!(0x1234u16.to_byte(), 0x34);
        assert_eq!((-1i32).to_byte(), 0xFF);
        assert_eq!((-128i8).to_byte(), 0x80);
        assert_eq!(0xDEAD_BEEF_u64.to_byte(), 0xEF);
    }

    #[test]
    fn test_cell_from_byte() {
        assert_eq!(i8::from_byte(0xFF), -1);
        assert_eq!(i16::from_byte(0xFF), 0xFF);
        assert_eq!(u32::from_byte(0x80), 0x80);
    }

    #[test]
    fn test_vec_store() {
        let mut store = vec![0u8; 4];
        store.set_byte(1, 0xAB);
        assert_eq!(ByteStore::len(&store), 4);
        assert_eq!(store.get_byte(1), 0xAB);
        store.fill_range(0x11, 2, 4);
        assert_eq!(store, vec![0, 0xAB, 0x11, 0x11]);
        assert_eq!(store.copy_range(1, 3), vec![0xAB, 0x11]);
    }

    #[test]
    fn test_wide_cells_store_bytes() {
        let mut store = vec![0x1234i32, -1];
        assert_eq!(store.get_byte(0), 0x34);
        assert_eq!(store.get_byte(1), 0xFF);
        store.set_byte(1, 0x80);
        assert_eq!(store[1], 0x80);
    }

    #[test]
    fn test_borrowed_slice_store() {
        let mut backing = [1u8, 2, 3, 4];
        {
            let view: &mut [u8] = &mut backing[1..];
            assert_eq!(ByteStore::len(&view), 3);
            view.set_byte(0, 0x20);
            assert_eq!(view.copy_range(0, 2), vec![0x20, 3]);
        }
        assert_eq!(backing, [1, 0x20, 3, 4]);
    }

    #[test]
    fn test_array_store() {
        let mut store = [0i8; 3];
        store.set_byte(2, 0xFE);
        assert_eq!(store, [0, 0, -2]);
        assert_eq!(store.get_byte(2), 0xFE);
        assert!(!ByteStore::is_empty(&store));
    }
}
