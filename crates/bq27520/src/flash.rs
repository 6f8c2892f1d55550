//! Data-flash block codec.
//!
//! The gauge exposes its non-volatile configuration as subclasses, each read
//! and written through a 32-byte block window at `0x40..0x60`. Every block is
//! protected by a one's-complement checksum that must be rewritten after any
//! byte in the window changes.

use crate::register::extended;

/// Size of one data-flash block window.
pub const BLOCK_LEN: usize = 32;

/// A 32-byte window into the gauge's data flash.
///
/// Always read fresh before computing a checksum; a cached copy goes stale as
/// soon as any byte in the window is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DataFlashBlock {
    /// Subclass id the window was addressed with.
    pub subclass: u8,
    /// Block index within the subclass.
    pub block: u8,
    /// Raw block bytes.
    pub data: [u8; BLOCK_LEN],
}

impl DataFlashBlock {
    /// Wraps raw block bytes read for `subclass`/`block`.
    pub const fn new(subclass: u8, block: u8, data: [u8; BLOCK_LEN]) -> Self {
        Self {
            subclass,
            block,
            data,
        }
    }

    /// Returns the checksum the gauge expects for this block.
    pub fn checksum(&self) -> u8 {
        compute_checksum(&self.data)
    }
}

/// Computes the block checksum: `255 - (sum of bytes mod 256)`.
pub fn compute_checksum(block: &[u8; BLOCK_LEN]) -> u8 {
    let sum = block.iter().fold(0u8, |acc, byte| acc.wrapping_add(*byte));
    255 - sum
}

/// Returns the block index holding `offset` (0 for 0..=31, 1 above).
pub const fn block_select(offset: u8) -> u8 {
    if offset as usize >= BLOCK_LEN { 0x01 } else { 0x00 }
}

/// Returns the block-data register address for `offset` within its block.
pub const fn block_data_address(offset: u8) -> u8 {
    extended::BLOCK_DATA_START + (offset % BLOCK_LEN as u8)
}

/// Splits a flash word into `[msb, lsb]`; data flash stores words big-endian.
pub const fn split_be(value: u16) -> [u8; 2] {
    [(value >> 8) as u8, (value & 0xFF) as u8]
}
