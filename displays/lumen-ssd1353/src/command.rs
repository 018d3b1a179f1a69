//! SSD1353 command set
//!
//! Op-codes and parameter values used by the driver. Every command is one
//! command byte followed by zero or more data bytes.

/// Display mode code: normal display
pub const DISPLAY_ON: u8 = 0xA4;
/// Display mode code: all pixels off
pub const DISPLAY_OFF: u8 = 0xA6;
/// Display mode code: inverse video
pub const DISPLAY_INVERSE: u8 = 0xA7;

/// SSD1353 op-codes
pub mod op {
    /// Line draw: x0, y0, x1, y1, blue, green, red
    pub const DRAW_LINE: u8 = 0x21;
    /// Rectangle draw: x0, y0, x1, y1, line b/g/r, fill b/g/r
    pub const DRAW_RECTANGLE: u8 = 0x22;
    /// Rectangle fill enable: 0 or 1
    pub const FILL_ENABLE: u8 = 0x26;
    /// Contrast for colour A
    pub const CONTRAST_A: u8 = 0x81;
    /// Contrast for colour B
    pub const CONTRAST_B: u8 = 0x82;
    /// Contrast for colour C
    pub const CONTRAST_C: u8 = 0x83;
    /// Master current control
    pub const MASTER_CURRENT: u8 = 0x87;
    /// Remap and colour depth
    pub const SET_REMAP: u8 = 0xA0;
    /// Leave sleep mode, panel on
    pub const SLEEP_OFF: u8 = 0xAF;
}

/// Display operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DisplayMode {
    /// Normal display of GDDRAM contents
    On = DISPLAY_ON,
    /// All pixels off
    Off = DISPLAY_OFF,
    /// Inverse video
    Inverse = DISPLAY_INVERSE,
}

impl DisplayMode {
    /// Get the command byte for this mode
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// A byte that is not one of the three display mode codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidDisplayMode(pub u8);

impl TryFrom<u8> for DisplayMode {
    type Error = InvalidDisplayMode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            DISPLAY_ON => Ok(DisplayMode::On),
            DISPLAY_OFF => Ok(DisplayMode::Off),
            DISPLAY_INVERSE => Ok(DisplayMode::Inverse),
            other => Err(InvalidDisplayMode(other)),
        }
    }
}

/// Contrast channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContrastChannel {
    A,
    B,
    C,
}

impl ContrastChannel {
    /// All channels in programming order
    pub const ALL: [ContrastChannel; 3] = [
        ContrastChannel::A,
        ContrastChannel::B,
        ContrastChannel::C,
    ];

    /// Op-code that sets this channel's contrast
    pub fn opcode(self) -> u8 {
        match self {
            ContrastChannel::A => op::CONTRAST_A,
            ContrastChannel::B => op::CONTRAST_B,
            ContrastChannel::C => op::CONTRAST_C,
        }
    }
}
