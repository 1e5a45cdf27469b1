//! Sequential little-endian reader over an immutable byte buffer.
//!
//! All reads are bounds-checked up front: a read that does not fit in the
//! remaining bytes fails with [`ScelError::OutOfData`] and leaves the
//! position untouched.  Offsets reported in errors are absolute file
//! offsets, so a cursor over a sub-range of the file carries the sub-range's
//! `origin`.

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};
use std::io::Cursor;

use crate::error::{Result, ScelError};

#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    inner:  Cursor<&'a [u8]>,
    origin: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_origin(buf, 0)
    }

    /// Cursor over `buf`, where `buf[0]` sits at absolute offset `origin`.
    pub fn with_origin(buf: &'a [u8], origin: usize) -> Self {
        Self { inner: Cursor::new(buf), origin }
    }

    fn len(&self) -> usize {
        self.inner.get_ref().len()
    }

    /// Position relative to the start of the buffer.
    pub fn position(&self) -> usize {
        self.inner.position() as usize
    }

    /// Absolute file offset of the current position.
    pub fn offset(&self) -> usize {
        self.origin + self.position()
    }

    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.position())
    }

    pub fn seek(&mut self, pos: usize) {
        self.inner.set_position(pos as u64);
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.ensure(n)?;
        self.seek(self.position() + n);
        Ok(())
    }

    pub fn position_equals(&self, pos: usize) -> bool {
        self.position() == pos
    }

    pub fn at_end(&self) -> bool {
        self.position() >= self.len()
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.ensure(2)?;
        Ok(self.inner.read_u16::<LittleEndian>()?)
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.ensure(n)?;
        let start = self.position();
        let buf: &'a [u8] = *self.inner.get_ref();
        self.seek(start + n);
        Ok(&buf[start..start + n])
    }

    /// Read `byte_len` bytes and decode them as UTF-16LE.
    ///
    /// Odd lengths and unpaired surrogates fail with
    /// [`ScelError::InvalidEncoding`] at the offset the run started.
    pub fn read_utf16_string(&mut self, byte_len: usize) -> Result<String> {
        let offset = self.offset();
        if byte_len % 2 != 0 {
            return Err(ScelError::InvalidEncoding { offset });
        }
        let bytes = self.read_bytes(byte_len)?;
        let units = bytes.chunks_exact(2).map(LittleEndian::read_u16);
        char::decode_utf16(units)
            .collect::<std::result::Result<String, _>>()
            .map_err(|_| ScelError::InvalidEncoding { offset })
    }

    fn ensure(&self, needed: usize) -> Result<()> {
        let available = self.remaining();
        if available < needed {
            return Err(ScelError::OutOfData { offset: self.offset(), needed, available });
        }
        Ok(())
    }
}
