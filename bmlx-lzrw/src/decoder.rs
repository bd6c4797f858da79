//! Streaming LZRW decoder.

use bmlx_core::error::{BmlError, Result};
use bmlx_core::stream::ByteRead;
use bmlx_core::window::Window;
use std::io::{Read, Write};

/// Chunk size for streaming decode-to-writer.
const CHUNK_SIZE: usize = 4096;

/// Stateful decoder turning a compressed token stream into a requested
/// number of decoded bytes.
///
/// One decoder instance serves exactly one compressed entry: the window,
/// cursor, and pending control bits are private to it and discarded with
/// it. The decoder never reads ahead of what the token stream demands, so
/// the underlying reader is left positioned immediately after the last
/// consumed token.
#[derive(Debug)]
pub struct LzrwDecoder<R> {
    reader: R,
    window: Window,
    /// Bitmask of pending literal/copy decisions, consumed LSB first.
    control: u16,
    /// Unconsumed bits left in `control`; 0 forces a reload.
    control_remaining: u8,
    /// Compressed bytes consumed so far.
    consumed: u64,
    /// Optional budget on compressed bytes, from the entry header.
    input_limit: Option<u64>,
    /// Distance of a copy token cut short by a full output buffer.
    pending_distance: usize,
    /// Bytes of that copy still owed; 0 means no copy is pending.
    pending_length: usize,
}

impl<R: Read> LzrwDecoder<R> {
    /// Create a decoder with no bound on compressed input consumption.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            window: Window::bml(),
            control: 0,
            control_remaining: 0,
            consumed: 0,
            input_limit: None,
            pending_distance: 0,
            pending_length: 0,
        }
    }

    /// Create a decoder that fails with [`BmlError::CompressedOverrun`]
    /// once the token stream tries to consume more than `limit` bytes.
    ///
    /// Containers record the stored compressed size of each entry; passing
    /// it here keeps a corrupted length field from dragging the decoder
    /// arbitrarily far into unrelated data.
    pub fn with_input_limit(reader: R, limit: u64) -> Self {
        let mut decoder = Self::new(reader);
        decoder.input_limit = Some(limit);
        decoder
    }

    /// Compressed bytes consumed so far.
    pub fn bytes_consumed(&self) -> u64 {
        self.consumed
    }

    /// Consume the decoder, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn charge(&mut self, amount: u64) -> Result<()> {
        self.consumed += amount;
        if let Some(limit) = self.input_limit {
            if self.consumed > limit {
                return Err(BmlError::compressed_overrun(self.consumed, limit));
            }
        }
        Ok(())
    }

    fn next_u8(&mut self) -> Result<u8> {
        self.charge(1)?;
        self.reader.read_u8()
    }

    fn next_u16_le(&mut self) -> Result<u16> {
        self.charge(2)?;
        self.reader.read_u16_le()
    }

    /// Emit up to `length` bytes of a copy into `out` at `pos`, recording
    /// any unemitted remainder so the next `decode_into` call resumes it.
    fn copy_from_window(
        &mut self,
        distance: usize,
        length: usize,
        out: &mut [u8],
        pos: usize,
    ) -> Result<usize> {
        let take = length.min(out.len() - pos);
        for i in 0..take {
            let byte = self.window.read_at_distance(distance)?;
            self.window.write_byte(byte);
            out[pos + i] = byte;
        }
        if take < length {
            self.pending_distance = distance;
            self.pending_length = length - take;
        }
        Ok(take)
    }

    /// Decode exactly `out.len()` bytes into `out`.
    ///
    /// Fails with [`BmlError::UnexpectedEof`] if the token stream ends
    /// first; output is never silently truncated. A copy token whose
    /// length would pass the end of `out` is cut at the boundary and
    /// resumed by the next call, so an entry may be decoded through any
    /// sequence of buffers; once the entry's full output has been
    /// requested, a leftover copy tail is simply never emitted, matching
    /// the format's "decode until exactly N bytes" contract.
    pub fn decode_into(&mut self, out: &mut [u8]) -> Result<()> {
        let mut pos = 0;

        if self.pending_length > 0 {
            let (distance, length) = (self.pending_distance, self.pending_length);
            self.pending_length = 0;
            pos += self.copy_from_window(distance, length, out, pos)?;
        }

        while pos < out.len() {
            if self.control_remaining == 0 {
                self.control = self.next_u16_le()?;
                self.control_remaining = 16;
            }
            let is_copy = self.control & 1 != 0;
            self.control >>= 1;
            self.control_remaining -= 1;

            if is_copy {
                let token = self.next_u16_le()?;
                let distance = (((token & 0xF000) >> 4) | (token & 0x00FF)) as usize;
                let length = (((token & 0x0F00) >> 8) + 1) as usize;

                pos += self.copy_from_window(distance, length, out, pos)?;
            } else {
                let byte = self.next_u8()?;
                self.window.write_byte(byte);
                out[pos] = byte;
                pos += 1;
            }
        }
        Ok(())
    }

    /// Decode exactly `len` bytes, streaming them to `sink` in fixed-size
    /// chunks rather than materializing the whole entry in memory.
    pub fn decode_to_writer<W: Write>(&mut self, sink: &mut W, len: u64) -> Result<u64> {
        let mut buf = [0u8; CHUNK_SIZE];
        let mut remaining = len;
        while remaining > 0 {
            let take = remaining.min(CHUNK_SIZE as u64) as usize;
            self.decode_into(&mut buf[..take])?;
            sink.write_all(&buf[..take])?;
            remaining -= take as u64;
        }
        Ok(len)
    }
}
