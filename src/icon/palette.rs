//! Icon colors
//!
//! Provides the RGBA color type and the tree palette used for rendering

use std::fmt;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, the canvas background
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() || !matches!(digits.len(), 6 | 8) {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
        let a = if digits.len() == 8 { channel(6)? } else { 255 };

        Some(Self::new(r, g, b, a))
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
impl Rgba {
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

#[cfg(test)]
impl From<[u8; 4]> for Rgba {
    fn from(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Colors for each part of the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub trunk: Rgba,
    pub crown: Rgba,
    pub highlight: Rgba,
}

impl Palette {
    pub const TRUNK: Rgba = Rgba::opaque(139, 69, 19); // Brown
    pub const CROWN: Rgba = Rgba::opaque(5, 150, 105); // #059669
    pub const HIGHLIGHT: Rgba = Rgba::new(16, 185, 129, 180); // Lighter green, semi-transparent
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            trunk: Self::TRUNK,
            crown: Self::CROWN,
            highlight: Self::HIGHLIGHT,
        }
    }
}
