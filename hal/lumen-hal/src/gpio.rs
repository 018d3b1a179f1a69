//! Line-control abstractions
//!
//! Provides the trait a display driver uses to drive its control and data
//! lines, plus an adapter over `embedded-hal` output pins.

use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};

/// Logic level of a digital line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Level of bit `bit` of `value`
    ///
    /// Bits past 7 read as low.
    pub fn of_bit(value: u8, bit: u8) -> Self {
        Self::from(value.checked_shr(u32::from(bit)).unwrap_or(0) & 1 == 1)
    }

    /// Check if the level is high
    pub fn is_high(self) -> bool {
        self == Level::High
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for PinState {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => PinState::Low,
            Level::High => PinState::High,
        }
    }
}

/// Line controller
///
/// Owns a set of digital lines addressed by `Line` identifiers. Both
/// operations are infallible from the driver's point of view; a controller
/// that cannot configure or drive a line must deal with that itself.
pub trait LineControl {
    /// Logical line identifier
    type Line: Copy;

    /// Configure `line` as a push-pull output
    fn configure_output(&mut self, line: Self::Line);

    /// Drive `line` to `level`
    fn set_level(&mut self, line: Self::Line, level: Level);

    /// Drive `line` high
    fn set_high(&mut self, line: Self::Line) {
        self.set_level(line, Level::High);
    }

    /// Drive `line` low
    fn set_low(&mut self, line: Self::Line) {
        self.set_level(line, Level::Low);
    }
}

/// Bank of output pins addressed by index
///
/// Adapts `N` homogeneous `embedded-hal` output pins (typically a chip HAL's
/// type-erased pin) into a [`LineControl`] whose lines are `usize` indices.
/// Pins are already outputs by type, so configuring a line only records it;
/// [`PinBank::is_configured`] reports which lines have been claimed.
///
/// Indices outside `0..N` are ignored.
pub struct PinBank<P, const N: usize> {
    pins: [P; N],
    /// Bitmask of configured lines (up to 32 lines)
    configured: u32,
}

impl<P, const N: usize> PinBank<P, N>
where
    P: OutputPin<Error = Infallible>,
{
    /// Create a new pin bank from an array of output pins
    pub fn new(pins: [P; N]) -> Self {
        debug_assert!(N <= 32, "PinBank tracks at most 32 lines");
        Self {
            pins,
            configured: 0,
        }
    }

    /// Check if a line has been configured as an output
    pub fn is_configured(&self, line: usize) -> bool {
        if line >= N || line >= 32 {
            return false;
        }
        self.configured & (1 << line) != 0
    }

    /// Consume the bank and return the pins
    pub fn into_pins(self) -> [P; N] {
        self.pins
    }
}

impl<P, const N: usize> LineControl for PinBank<P, N>
where
    P: OutputPin<Error = Infallible>,
{
    type Line = usize;

    fn configure_output(&mut self, line: usize) {
        if line < N && line < 32 {
            self.configured |= 1 << line;
        }
    }

    fn set_level(&mut self, line: usize, level: Level) {
        if let Some(pin) = self.pins.get_mut(line) {
            match pin.set_state(level.into()) {
                Ok(()) => {}
                Err(never) => match never {},
            }
        }
    }
}
