//! Packed 24-bit colors and the textual notations colortool accepts for them.

mod error;
mod parse;

use std::fmt;

pub use error::Error;
pub use parse::{parse_bits, parse_color, parse_int, Notation};

/// Mask that leaves every color unchanged.
pub const NO_MASK: u32 = 0x0000_0000;

/// Filter that leaves every color unchanged.
pub const NO_FILTER: u32 = 0xFFFF_FFFF;

/// An RGB color packed as `0x00RRGGBB`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const MAX: u32 = 0x00FF_FFFF;

    /// Bits above the 24th are dropped.
    pub fn from_u24(value: u32) -> Color {
        Color(value & Color::MAX)
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Color {
        Color(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        (
            ((self.0 & 0x00FF_0000) >> 16) as u8,
            ((self.0 & 0x0000_FF00) >> 8) as u8,
            (self.0 & 0x0000_00FF) as u8,
        )
    }

    /// Binary OR with `bits`, keeping the result within 24 bits.
    pub fn mask(self, bits: u32) -> Color {
        Color::from_u24(self.0 | bits)
    }

    /// Binary AND with `bits`.
    pub fn filter(self, bits: u32) -> Color {
        Color(self.0 & bits)
    }

    /// `#rrggbb`
    pub fn hex(self) -> Hex {
        Hex(self)
    }

    /// `r,g,b`
    pub fn triplet(self) -> Triplet {
        Triplet(self)
    }

    /// `r, g, b / #rrggbb`, the caption shown under a swatch.
    pub fn label(self) -> Label {
        Label(self)
    }
}

impl std::str::FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

pub struct Hex(Color);

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0.value())
    }
}

pub struct Triplet(Color);

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.0.rgb();
        write!(f, "{},{},{}", r, g, b)
    }
}

pub struct Label(Color);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.0.rgb();
        write!(f, "{}, {}, {} / {}", r, g, b, self.0.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_packing() {
        let c = Color::from_rgb(0x12, 0x34, 0x56);
        assert_eq!(c.value(), 0x123456);
        assert_eq!(c.rgb(), (0x12, 0x34, 0x56));
        assert_eq!(Color::from_u24(0xAB00_FF00).rgb(), (0x00, 0xFF, 0x00));
    }

    #[test]
    fn test_mask_then_filter() {
        let c = Color::from_rgb(0x10, 0x20, 0x30);
        assert_eq!(c.mask(NO_MASK).filter(NO_FILTER), c);
        assert_eq!(c.mask(0x0000_000F).value(), 0x10203F);
        assert_eq!(c.filter(0x00FF_0000).value(), 0x100000);
        assert_eq!(c.mask(0xFF00_0000), c);

        // order matters: the mask's bits survive only where the filter allows
        assert_eq!(c.mask(0x0000_00FF).filter(0x0000_000F).value(), 0x00000F);
    }

    #[test]
    fn test_formatting() {
        let c = Color::from_rgb(255, 8, 0);
        assert_eq!(c.hex().to_string(), "#ff0800");
        assert_eq!(c.triplet().to_string(), "255,8,0");
        assert_eq!(c.label().to_string(), "255, 8, 0 / #ff0800");
        assert_eq!(Color::default().hex().to_string(), "#000000");
    }
}
