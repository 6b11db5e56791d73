//! Buffer utilities for reading and writing fixed-layout binding data.
//!
//! All multi-byte values are little-endian. Reads are bounds-checked and
//! fail with [`Error::BufferTooSmall`] instead of panicking.

use crate::error::{Error, Result};
use bytes::{BufMut, Bytes, BytesMut};

/// A cursor for reading binding bytes.
pub struct ReadBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ReadBuffer<'a> {
    /// Create a new read buffer over a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Get the current position in the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the remaining bytes in the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Check if the buffer has at least `n` bytes remaining.
    pub fn has_remaining(&self, n: usize) -> bool {
        self.remaining() >= n
    }

    /// Skip `n` bytes.
    #[track_caller]
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.read_bytes(n).map(|_| ())
    }

    /// Read raw bytes.
    #[track_caller]
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if !self.has_remaining(n) {
            return Err(Error::BufferTooSmall {
                needed: n,
                available: self.remaining(),
                location: std::panic::Location::caller(),
            });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    #[track_caller]
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Read a single byte.
    #[track_caller]
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    /// Read a signed byte.
    #[track_caller]
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(i8::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian u16.
    #[track_caller]
    pub fn read_u16_le(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian i16.
    #[track_caller]
    pub fn read_i16_le(&mut self) -> Result<i16> {
        Ok(i16::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian u32.
    #[track_caller]
    pub fn read_u32_le(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian i32.
    #[track_caller]
    pub fn read_i32_le(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian u64.
    #[track_caller]
    pub fn read_u64_le(&mut self) -> Result<u64> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian i64.
    #[track_caller]
    pub fn read_i64_le(&mut self) -> Result<i64> {
        Ok(i64::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian f32.
    #[track_caller]
    pub fn read_f32_le(&mut self) -> Result<f32> {
        Ok(f32::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian f64.
    #[track_caller]
    pub fn read_f64_le(&mut self) -> Result<f64> {
        Ok(f64::from_le_bytes(self.read_array()?))
    }
}

/// A buffer for writing binding data.
pub struct WriteBuffer {
    data: BytesMut,
}

impl WriteBuffer {
    /// Create a new write buffer with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Create a new write buffer with specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: BytesMut::with_capacity(capacity),
        }
    }

    /// Get the current length of the buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the buffer contents as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Freeze the buffer into immutable bytes.
    pub fn freeze(self) -> Bytes {
        self.data.freeze()
    }

    /// Write a single byte.
    pub fn write_u8(&mut self, val: u8) {
        self.data.put_u8(val);
    }

    /// Write a little-endian u32.
    pub fn write_u32_le(&mut self, val: u32) {
        self.data.put_u32_le(val);
    }

    /// Write a little-endian i32.
    pub fn write_i32_le(&mut self, val: i32) {
        self.data.put_i32_le(val);
    }

    /// Write a little-endian u64.
    pub fn write_u64_le(&mut self, val: u64) {
        self.data.put_u64_le(val);
    }

    /// Write padding zeros.
    pub fn write_zeros(&mut self, count: usize) {
        self.data.put_bytes(0, count);
    }
}

impl Default for WriteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_little_endian() {
        let data = [0x01, 0x02, 0x03, 0x04, 0xff, 0xff];
        let mut buf = ReadBuffer::new(&data);
        assert_eq!(buf.read_u32_le().unwrap(), 0x0403_0201);
        assert_eq!(buf.read_i16_le().unwrap(), -1);
        assert_eq!(buf.remaining(), 0);
        assert_eq!(buf.position(), 6);
    }

    #[test]
    fn test_read_past_end() {
        let data = [0x01, 0x02, 0x03];
        let mut buf = ReadBuffer::new(&data);
        match buf.read_u64_le() {
            Err(Error::BufferTooSmall {
                needed, available, ..
            }) => {
                assert_eq!(needed, 8);
                assert_eq!(available, 3);
            }
            other => panic!("Expected BufferTooSmall, got {:?}", other),
        }
        // A failed read does not advance the cursor
        assert_eq!(buf.position(), 0);
    }

    #[test]
    fn test_write_then_read_floats() {
        let mut out = WriteBuffer::new();
        out.write_u64_le(1.5f64.to_bits());
        out.write_u32_le(2.25f32.to_bits());
        out.write_zeros(2);
        assert_eq!(out.len(), 14);

        let bytes = out.freeze();
        let mut buf = ReadBuffer::new(&bytes);
        assert_eq!(buf.read_f64_le().unwrap(), 1.5);
        assert_eq!(buf.read_f32_le().unwrap(), 2.25);
        buf.skip(2).unwrap();
        assert!(!buf.has_remaining(1));
    }
}
