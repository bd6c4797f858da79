//! # bmlx Core
//!
//! Core components for the bmlx bitmap-list extractor.
//!
//! This crate provides the building blocks shared by the decoder and
//! container layers:
//!
//! - [`stream`]: fixed-width little-endian reads over any [`std::io::Read`]
//! - [`window`]: sliding-window history buffer for back-reference copies
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! bmlx is a small layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ CLI                                         │
//! │     bmlx extract / list / info / test       │
//! ├─────────────────────────────────────────────┤
//! │ Container                                   │
//! │     BML header, offset table, entry dispatch│
//! ├─────────────────────────────────────────────┤
//! │ Codec                                       │
//! │     LZRW sliding-window decoder             │
//! ├─────────────────────────────────────────────┤
//! │ Core (this crate)                           │
//! │     ByteRead, Window, BmlError              │
//! └─────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod stream;
pub mod window;

// Re-exports for convenience
pub use error::{BmlError, Result};
pub use stream::ByteRead;
pub use window::Window;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{BmlError, Result};
    pub use crate::stream::ByteRead;
    pub use crate::window::Window;
}
