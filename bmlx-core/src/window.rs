//! Sliding window (history buffer) for back-reference copies.
//!
//! The LZRW token stream refers back into the most recently decoded bytes.
//! [`Window`] keeps that history in a fixed-capacity circular buffer with
//! bit-mask wraparound, and refuses to read positions that were never
//! written: a back-reference arriving before enough literals have been
//! decoded is malformed input, not a license to return indeterminate bytes.

use crate::error::{BmlError, Result};

/// Window size used by the BML compressed entry format (4 KB).
pub const BML_WINDOW_SIZE: usize = 4096;

/// A circular history buffer for sliding-window decompression.
///
/// Stores the most recent `capacity` bytes of decoded output, wrapping
/// around when full. Back-references are resolved by distance from the
/// write cursor, where distance 1 is the most recently written byte.
#[derive(Debug, Clone)]
pub struct Window {
    /// The underlying buffer.
    buffer: Vec<u8>,
    /// Current write position (next byte will be written here).
    position: usize,
    /// Number of bytes written (saturates at capacity).
    size: usize,
    /// Mask for wraparound (capacity - 1).
    mask: usize,
}

impl Window {
    /// Create a new window with the specified capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or not a power of 2.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");
        assert!(
            capacity.is_power_of_two(),
            "Capacity must be a power of 2, got {}",
            capacity
        );

        Self {
            buffer: vec![0; capacity],
            position: 0,
            size: 0,
            mask: capacity - 1,
        }
    }

    /// Create a window sized for the BML compressed entry format (4 KB).
    pub fn bml() -> Self {
        Self::new(BML_WINDOW_SIZE)
    }

    /// Get the capacity of the window.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Get the number of bytes currently in the window.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if the window is empty.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Get the current write position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Write a single byte at the cursor and advance it.
    pub fn write_byte(&mut self, byte: u8) {
        self.buffer[self.position] = byte;
        self.position = (self.position + 1) & self.mask;
        if self.size < self.buffer.len() {
            self.size += 1;
        }
    }

    /// Read the byte at the given distance back from the cursor.
    ///
    /// Distance 1 is the most recently written byte; distance `capacity`
    /// the oldest. A distance of 0, or one reaching past the bytes written
    /// so far, fails with [`BmlError::InvalidDistance`].
    pub fn read_at_distance(&self, distance: usize) -> Result<u8> {
        if distance == 0 || distance > self.size {
            return Err(BmlError::invalid_distance(distance, self.size));
        }

        let index = (self.position.wrapping_sub(distance)) & self.mask;
        Ok(self.buffer[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_basic() {
        let mut win = Window::new(8);

        for &b in b"Hello" {
            win.write_byte(b);
        }

        assert_eq!(win.len(), 5);
        assert_eq!(win.position(), 5);
        assert_eq!(win.read_at_distance(1).unwrap(), b'o');
        assert_eq!(win.read_at_distance(2).unwrap(), b'l');
        assert_eq!(win.read_at_distance(5).unwrap(), b'H');
    }

    #[test]
    fn test_window_wrap() {
        let mut win = Window::new(4);

        for &b in b"ABCDEF" {
            win.write_byte(b);
        }

        assert_eq!(win.len(), 4); // saturated at capacity
        assert_eq!(win.position(), 2);
        assert_eq!(win.read_at_distance(1).unwrap(), b'F');
        assert_eq!(win.read_at_distance(2).unwrap(), b'E');
        assert_eq!(win.read_at_distance(3).unwrap(), b'D');
        assert_eq!(win.read_at_distance(4).unwrap(), b'C');
    }

    #[test]
    fn test_window_invalid_distance() {
        let mut win = Window::new(8);

        assert!(win.read_at_distance(1).is_err()); // empty window
        win.write_byte(b'X');
        assert!(win.read_at_distance(0).is_err());
        assert!(win.read_at_distance(2).is_err()); // only one byte written

        let err = win.read_at_distance(5).unwrap_err();
        assert!(matches!(
            err,
            BmlError::InvalidDistance {
                distance: 5,
                history_size: 1
            }
        ));
    }

    #[test]
    fn test_bml_window_size() {
        let win = Window::bml();
        assert_eq!(win.capacity(), 4096);
    }

    #[test]
    #[should_panic(expected = "power of 2")]
    fn test_non_power_of_two_panics() {
        let _ = Window::new(100);
    }
}
