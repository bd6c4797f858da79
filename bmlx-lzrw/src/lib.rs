//! # bmlx LZRW
//!
//! Decoder for the LZ77-family token stream used by BML compressed
//! entries.
//!
//! The stream is a sequence of 16-bit little-endian *control words*, each
//! gating the next 16 literal/copy decisions from its least-significant
//! bit upward:
//!
//! - **bit = 0**: the next input byte is a literal; it is emitted and
//!   written into the 4096-byte sliding window.
//! - **bit = 1**: the next two input bytes form a 16-bit little-endian
//!   copy token. The 12-bit distance spans the token's high nibble and low
//!   byte, the 4-bit length field is biased by one:
//!
//! ```text
//!   15      12 11       8 7            0
//!  ┌──────────┬──────────┬──────────────┐
//!  │ dist hi  │ length-1 │   dist lo    │
//!  └──────────┴──────────┴──────────────┘
//!   distance = ((token & 0xF000) >> 4) | (token & 0x00FF)   (1..=4095)
//!   length   = ((token & 0x0F00) >> 8) + 1                  (1..=16)
//! ```
//!
//! A copy re-emits `length` bytes starting `distance` back from the window
//! cursor, feeding each copied byte back into the window, so overlapping
//! references (`distance < length`) see just-copied data — the degenerate
//! `distance = 1` case is a run-length repeat of the last byte.
//!
//! The stream carries no terminator; decoding stops when the caller's
//! requested output count is reached.
//!
//! ## Example
//!
//! ```rust
//! // One control word (two literals, then a copy), "AB", then a token
//! // with distance 2 / length 6 repeating them.
//! let input = [0x04, 0x00, b'A', b'B', 0x02, 0x05];
//! let output = bmlx_lzrw::decompress(&input, 8).unwrap();
//! assert_eq!(output, b"ABABABAB");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod decoder;

pub use decoder::LzrwDecoder;

use bmlx_core::Result;
use std::io::Cursor;

/// Decompress a complete in-memory token stream to `output_len` bytes.
pub fn decompress(input: &[u8], output_len: usize) -> Result<Vec<u8>> {
    let mut decoder = LzrwDecoder::new(Cursor::new(input));
    let mut output = vec![0u8; output_len];
    decoder.decode_into(&mut output)?;
    Ok(output)
}
