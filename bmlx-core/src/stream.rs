//! Fixed-width reads over byte streams.
//!
//! The container and token formats are built from unsigned little-endian
//! integers. [`ByteRead`] extends any [`Read`] with the handful of
//! fixed-width reads the formats need, and turns a short read into the
//! structured [`BmlError::UnexpectedEof`] instead of a bare I/O error so
//! callers can tell truncation apart from a failing device.

use crate::error::{BmlError, Result};
use std::io::{self, Read};

/// Extension trait for reading fixed-width little-endian integers.
pub trait ByteRead: Read {
    /// Fill `buf` completely, failing with [`BmlError::UnexpectedEof`] if
    /// the stream ends first.
    fn read_exact_or_eof(&mut self, buf: &mut [u8]) -> Result<()> {
        match self.read_exact(buf) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                Err(BmlError::unexpected_eof(buf.len()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Read a single byte.
    fn read_u8(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.read_exact_or_eof(&mut buf)?;
        Ok(buf[0])
    }

    /// Read a little-endian `u16`.
    fn read_u16_le(&mut self) -> Result<u16> {
        let mut buf = [0u8; 2];
        self.read_exact_or_eof(&mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    /// Read a little-endian `u32`.
    fn read_u32_le(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.read_exact_or_eof(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }
}

impl<R: Read + ?Sized> ByteRead for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_fixed_width_reads() {
        let mut cursor = Cursor::new(vec![0x2A, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12]);

        assert_eq!(cursor.read_u8().unwrap(), 0x2A);
        assert_eq!(cursor.read_u16_le().unwrap(), 0x1234);
        assert_eq!(cursor.read_u32_le().unwrap(), 0x12345678);
    }

    #[test]
    fn test_short_read_is_eof() {
        let mut cursor = Cursor::new(vec![0xAB]);

        let err = cursor.read_u32_le().unwrap_err();
        assert!(matches!(err, BmlError::UnexpectedEof { expected: 4 }));
    }

    #[test]
    fn test_empty_stream() {
        let mut cursor = Cursor::new(Vec::new());

        assert!(matches!(
            cursor.read_u8().unwrap_err(),
            BmlError::UnexpectedEof { expected: 1 }
        ));
    }
}
