//! Bring-up configuration
//!
//! Register values programmed during [`Ssd1353::init_with_config`].
//! The defaults are the values the panel ships with.
//!
//! [`Ssd1353::init_with_config`]: crate::Ssd1353::init_with_config

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::command::ContrastChannel;

/// SSD1353 configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ssd1353Config {
    /// Remap / colour depth parameter sent after 0xA0
    pub remap: u8,
    /// Contrast for colours A, B and C
    pub contrast: [u8; 3],
    /// Master current (low nibble is significant)
    pub master_current: u8,
}

impl Default for Ssd1353Config {
    fn default() -> Self {
        Self {
            remap: 0xE0,
            contrast: [0xFF; 3],
            master_current: 0x0F,
        }
    }
}

impl Ssd1353Config {
    /// Set the remap / colour depth byte
    pub fn with_remap(mut self, remap: u8) -> Self {
        self.remap = remap;
        self
    }

    /// Set the contrast of one channel
    pub fn with_contrast(mut self, channel: ContrastChannel, value: u8) -> Self {
        self.contrast[channel as usize] = value;
        self
    }

    /// Set the master current
    pub fn with_master_current(mut self, current: u8) -> Self {
        self.master_current = current;
        self
    }

    /// Contrast value for a channel
    pub fn contrast(&self, channel: ContrastChannel) -> u8 {
        self.contrast[channel as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Ssd1353Config::default();
        assert_eq!(config.remap, 0xE0);
        assert_eq!(config.contrast, [0xFF, 0xFF, 0xFF]);
        assert_eq!(config.master_current, 0x0F);
    }

    #[test]
    fn test_builder() {
        let config = Ssd1353Config::default()
            .with_remap(0x60)
            .with_contrast(ContrastChannel::B, 0x80)
            .with_master_current(0x07);

        assert_eq!(config.remap, 0x60);
        assert_eq!(config.contrast(ContrastChannel::A), 0xFF);
        assert_eq!(config.contrast(ContrastChannel::B), 0x80);
        assert_eq!(config.contrast(ContrastChannel::C), 0xFF);
        assert_eq!(config.master_current, 0x07);
    }
}
