//! RGB colour values
//!
//! Channels are passed through to the controller unchanged. The SSD1353
//! expects them blue first, which [`Rgb::wire_order`] takes care of.

/// 24-bit RGB colour, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    pub const RED: Rgb = Rgb::new(0xFF, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 0xFF, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 0xFF);

    /// Create a colour from red, green and blue channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels in the order the controller expects them: blue, green, red
    pub const fn wire_order(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}
