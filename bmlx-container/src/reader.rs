//! BML container reader: entry lookup, type dispatch, and extraction.

use crate::header::BmlHeader;
use bmlx_core::error::{BmlError, Result};
use bmlx_core::stream::ByteRead;
use bmlx_lzrw::LzrwDecoder;
use std::io::{self, Read, Seek, SeekFrom, Write};

/// Type tag of a raw (stored) entry.
pub const RAW_ENTRY_TAG: u8 = 8;

/// Type tag of an LZRW-compressed entry.
pub const COMPRESSED_ENTRY_TAG: u8 = 9;

/// Chunk size for raw entry copies.
const CHUNK_SIZE: usize = 4096;

/// Parsed per-entry metadata: the type tag plus its size fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Entry stored verbatim.
    Raw {
        /// Number of literal payload bytes.
        size: u32,
    },
    /// Entry encoded as an LZRW token stream.
    Compressed {
        /// Output size the token stream decodes to.
        decompressed_size: u32,
        /// Compressed payload size recorded in the entry header; used as
        /// the decoder's input budget.
        stored_size: u32,
    },
}

impl EntryKind {
    /// Size of the decoded output in bytes.
    pub fn output_size(&self) -> u32 {
        match *self {
            Self::Raw { size } => size,
            Self::Compressed {
                decompressed_size, ..
            } => decompressed_size,
        }
    }

    /// Size the entry occupies in the container (payload only).
    pub fn stored_size(&self) -> u32 {
        match *self {
            Self::Raw { size } => size,
            Self::Compressed { stored_size, .. } => stored_size,
        }
    }

    /// Whether the entry payload is an LZRW token stream.
    pub fn is_compressed(&self) -> bool {
        matches!(self, Self::Compressed { .. })
    }

    /// Short human-readable name of the storage method.
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::Raw { .. } => "stored",
            Self::Compressed { .. } => "lzrw",
        }
    }
}

/// Reader for BML containers.
///
/// `new` parses the header and offset table; entries are then decoded on
/// demand, each seek-addressed through its absolute offset. The reader is
/// exclusively owned by one parse at a time, but since entries carry no
/// shared decode state they can be extracted in any order, repeatedly.
#[derive(Debug)]
pub struct BmlReader<R> {
    reader: R,
    header: BmlHeader,
}

impl<R: Read + Seek> BmlReader<R> {
    /// Parse the container header and offset table.
    pub fn new(mut reader: R) -> Result<Self> {
        let header = BmlHeader::read(&mut reader)?;
        Ok(Self { reader, header })
    }

    /// The parsed container header.
    pub fn header(&self) -> &BmlHeader {
        &self.header
    }

    /// Number of entries in the container. Zero for containers whose
    /// magic is not the bitmap-list signature.
    pub fn entry_count(&self) -> usize {
        self.header.entry_count()
    }

    /// Seek to an entry and parse its tag and size fields, leaving the
    /// stream positioned at the start of the payload.
    fn seek_entry(&mut self, index: usize) -> Result<EntryKind> {
        let offset = self.header.offsets[index];
        self.reader.seek(SeekFrom::Start(u64::from(offset)))?;

        let type_tag = self.reader.read_u8()?;
        match type_tag {
            RAW_ENTRY_TAG => {
                let size = self.reader.read_u32_le()?;
                Ok(EntryKind::Raw { size })
            }
            COMPRESSED_ENTRY_TAG => {
                let decompressed_size = self.reader.read_u32_le()?;
                let stored_size = self.reader.read_u32_le()?;
                let _reserved = self.reader.read_u8()?;
                Ok(EntryKind::Compressed {
                    decompressed_size,
                    stored_size,
                })
            }
            other => Err(BmlError::unknown_entry_type(other, index)),
        }
    }

    /// Parse an entry's tag and size fields without decoding the payload.
    ///
    /// # Panics
    ///
    /// Panics if `index >= entry_count()`.
    pub fn entry_kind(&mut self, index: usize) -> Result<EntryKind> {
        self.seek_entry(index)
    }

    /// Decode entry `index` and stream its output bytes to `sink`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= entry_count()`.
    pub fn extract_to<W: Write>(&mut self, index: usize, sink: &mut W) -> Result<EntryKind> {
        let kind = self.seek_entry(index)?;
        match kind {
            EntryKind::Raw { size } => {
                copy_raw(&mut self.reader, sink, u64::from(size))?;
            }
            EntryKind::Compressed {
                decompressed_size,
                stored_size,
            } => {
                let mut decoder =
                    LzrwDecoder::with_input_limit(&mut self.reader, u64::from(stored_size));
                decoder.decode_to_writer(sink, u64::from(decompressed_size))?;
            }
        }
        Ok(kind)
    }

    /// Decode entry `index` into a freshly allocated buffer.
    ///
    /// # Panics
    ///
    /// Panics if `index >= entry_count()`.
    pub fn extract_to_vec(&mut self, index: usize) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.extract_to(index, &mut out)?;
        Ok(out)
    }

    /// Decode entry `index` to a null sink, verifying it without keeping
    /// the output.
    ///
    /// # Panics
    ///
    /// Panics if `index >= entry_count()`.
    pub fn verify(&mut self, index: usize) -> Result<EntryKind> {
        self.extract_to(index, &mut io::sink())
    }
}

/// Copy exactly `len` raw bytes in fixed-size chunks.
fn copy_raw<R: Read, W: Write>(reader: &mut R, sink: &mut W, len: u64) -> Result<()> {
    let mut buf = [0u8; CHUNK_SIZE];
    let mut remaining = len;
    while remaining > 0 {
        let take = remaining.min(CHUNK_SIZE as u64) as usize;
        reader.read_exact_or_eof(&mut buf[..take])?;
        sink.write_all(&buf[..take])?;
        remaining -= take as u64;
    }
    Ok(())
}
