//! Color stored as a single bit of a byte shared with other record flags.

use crate::types::Color;

/// Mask selecting the color bit inside a flags byte.
///
/// A set bit reads as red, a clear bit as black, so a zeroed record starts
/// out black. Bits outside the mask are preserved on write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorBit {
    mask: u8,
}

impl ColorBit {
    /// `mask` must select exactly one bit.
    pub const fn new(mask: u8) -> Self {
        assert!(mask.is_power_of_two(), "color mask must select exactly one bit");
        Self { mask }
    }

    #[inline]
    pub const fn mask(self) -> u8 {
        self.mask
    }

    #[inline]
    pub fn get(self, byte: u8) -> Color {
        if byte & self.mask != 0 {
            Color::Red
        } else {
            Color::Black
        }
    }

    #[inline]
    pub fn set(self, byte: &mut u8, color: Color) {
        match color {
            Color::Red => *byte |= self.mask,
            Color::Black => *byte &= !self.mask,
        }
    }
}
