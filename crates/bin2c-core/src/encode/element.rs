//! Low-level element decoding for byte groups.
//!
//! This module implements the per-group step of the conversion: a group of
//! raw bytes (at most one element wide) is reinterpreted as an unsigned
//! integer under a requested byte order and rendered as a fixed-width
//! hexadecimal token.
//!
//! ## Decoding Overview
//!
//! Full groups decode exactly like `u16::from_le_bytes` and friends. A short
//! final group is right-padded with zero bytes up to the element width and
//! then decoded with the *same* rule as a full group. There is no shortcut
//! for the padded case; the padding-then-decode order is what keeps the data
//! in the correct byte positions for both orders.

use crate::error::{Error, Result};

/// Byte size of each encoded integer element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ElementWidth {
    /// 1-byte elements, declared as `uint8_t`
    U8 = 1,
    /// 2-byte elements, declared as `uint16_t`
    U16 = 2,
    /// 4-byte elements, declared as `uint32_t`
    U32 = 4,
}

impl TryFrom<u32> for ElementWidth {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            1 => Ok(ElementWidth::U8),
            2 => Ok(ElementWidth::U16),
            4 => Ok(ElementWidth::U32),
            _ => Err(Error::invalid_width(value)),
        }
    }
}

impl ElementWidth {
    /// Number of source bytes per element
    pub fn bytes(self) -> usize {
        self as usize
    }

    /// Hex digits in a rendered token (two per byte)
    pub fn hex_digits(self) -> usize {
        self.bytes() * 2
    }

    /// The C integer type declared for arrays of this width
    pub fn c_type(self) -> &'static str {
        match self {
            ElementWidth::U8 => "uint8_t",
            ElementWidth::U16 => "uint16_t",
            ElementWidth::U32 => "uint32_t",
        }
    }

    /// Tokens emitted per display line
    pub fn tokens_per_line(self) -> usize {
        match self {
            ElementWidth::U8 => 20,
            ElementWidth::U16 => 10,
            ElementWidth::U32 => 6,
        }
    }
}

/// Byte order used to interpret multi-byte groups
///
/// Irrelevant (but accepted) for [`ElementWidth::U8`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Least-significant byte first
    #[default]
    Little,
    /// Most-significant byte first
    Big,
}

/// Decode one group of raw bytes into an element value.
///
/// `group` must hold between 1 and `width.bytes()` bytes; a short group is
/// right-padded with zeros before decoding, so missing trailing bytes land in
/// the high positions of a little-endian value and the low positions of a
/// big-endian one.
pub fn decode_group(group: &[u8], width: ElementWidth, order: ByteOrder) -> u32 {
    debug_assert!(!group.is_empty() && group.len() <= width.bytes());

    let mut padded = [0u8; 4];
    padded[..group.len().min(4)].copy_from_slice(&group[..group.len().min(4)]);

    match (width, order) {
        (ElementWidth::U8, _) => u32::from(padded[0]),
        (ElementWidth::U16, ByteOrder::Little) => {
            u32::from(u16::from_le_bytes([padded[0], padded[1]]))
        }
        (ElementWidth::U16, ByteOrder::Big) => {
            u32::from(u16::from_be_bytes([padded[0], padded[1]]))
        }
        (ElementWidth::U32, ByteOrder::Little) => u32::from_le_bytes(padded),
        (ElementWidth::U32, ByteOrder::Big) => u32::from_be_bytes(padded),
    }
}

/// Render an element value as a `0x`-prefixed, zero-padded hex token
pub fn hex_token(value: u32, width: ElementWidth) -> String {
    format!("0x{:0digits$x}", value, digits = width.hex_digits())
}
