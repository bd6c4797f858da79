//! # bmlx Container
//!
//! Parsing and extraction for BML ("bitmap list") containers.
//!
//! A BML container is a versioned archive of bitmap images: a one-byte
//! version, an 8-byte magic, and a table of absolute byte offsets, each
//! pointing to a self-describing entry stored either verbatim or as an
//! LZRW token stream. Entries share no decode state, so each one is
//! addressed, parsed, and decoded independently.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bmlx_container::BmlReader;
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let file = File::open("sprites.lmd").unwrap();
//! let mut reader = BmlReader::new(BufReader::new(file)).unwrap();
//! for index in 0..reader.entry_count() {
//!     let data = reader.extract_to_vec(index).unwrap();
//!     println!("entry {}: {} bytes", index, data.len());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod header;
pub mod reader;

// Re-exports
pub use header::{BITMAP_LIST_MAGIC, BmlHeader, FORMAT_VERSION};
pub use reader::{BmlReader, COMPRESSED_ENTRY_TAG, EntryKind, RAW_ENTRY_TAG};
