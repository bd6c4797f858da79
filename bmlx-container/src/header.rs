//! BML container header and offset table.

use bmlx_core::error::{BmlError, Result};
use bmlx_core::stream::ByteRead;
use std::io::Read;

/// The only container version this format revision defines.
pub const FORMAT_VERSION: u8 = 8;

/// Magic identifying a container as a bitmap list.
pub const BITMAP_LIST_MAGIC: [u8; 8] = *b"LMDBML30";

/// Parsed BML container header.
///
/// A container with the right version but a different magic is a valid
/// file that simply holds no images; it parses into a header with
/// `is_bitmap_list == false` and an empty offset table.
#[derive(Debug, Clone)]
pub struct BmlHeader {
    /// Container version byte.
    pub version: u8,
    /// Whether the magic matched the bitmap-list signature.
    pub is_bitmap_list: bool,
    /// Absolute byte offsets of the entries, in file order. File order
    /// defines the output index of each entry.
    pub offsets: Vec<u32>,
}

impl BmlHeader {
    /// Read a header from the start of a container stream.
    ///
    /// Fails with [`BmlError::UnsupportedVersion`] if the version byte is
    /// not [`FORMAT_VERSION`]. A non-matching magic is not an error.
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let version = reader.read_u8()?;
        if version != FORMAT_VERSION {
            return Err(BmlError::unsupported_version(version));
        }

        let mut magic = [0u8; 8];
        reader.read_exact_or_eof(&mut magic)?;
        if magic != BITMAP_LIST_MAGIC {
            return Ok(Self {
                version,
                is_bitmap_list: false,
                offsets: Vec::new(),
            });
        }

        let count = reader.read_u32_le()? as usize;
        let mut offsets = Vec::new();
        for _ in 0..count {
            offsets.push(reader.read_u32_le()?);
        }

        Ok(Self {
            version,
            is_bitmap_list: true,
            offsets,
        })
    }

    /// Number of entries in the container.
    pub fn entry_count(&self) -> usize {
        self.offsets.len()
    }
}
