//! SSD1353 driver
//!
//! Drives a 160x128 RGB OLED through the SSD1353's drawing accelerator.
//! Nothing is buffered: every call is turned into command bytes on the bus
//! immediately.
//!
//! # Bring-up
//!
//! ```text
//! display enable LOW
//! reset LOW, 10 ms, reset HIGH, 10 ms
//! 0xAF (sleep off), 200 ms
//! 0xA0 remap
//! 0x81/0x82/0x83 contrast A/B/C
//! 0x87 master current
//! clear screen
//! display enable HIGH
//! ```

use embedded_hal::delay::DelayNs;
use lumen_hal::{Level, LineControl};

use crate::bus::{BusLines, ParallelBus};
use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::command::{op, ContrastChannel, DisplayMode};
use crate::config::Ssd1353Config;

/// Settling time on each reset edge
const RESET_DELAY_MS: u32 = 10;
/// Panel stabilisation after leaving sleep
const POWER_ON_DELAY_MS: u32 = 200;
/// Time for the accelerator to finish a rectangle
const RECTANGLE_DELAY_MS: u32 = 2;

/// SSD1353 OLED driver
pub struct Ssd1353<L: LineControl, D> {
    bus: ParallelBus<L>,
    delay: D,
}

impl<L, D> Ssd1353<L, D>
where
    L: LineControl,
    D: DelayNs,
{
    /// Bring up the display with the default configuration
    ///
    /// Blocks for roughly 225 ms.
    pub fn init(lines: L, pins: BusLines<L::Line>, delay: D) -> Self {
        Self::init_with_config(lines, pins, delay, &Ssd1353Config::default())
    }

    /// Bring up the display
    ///
    /// Every line is configured as an output before anything is driven.
    /// The panel is enabled only after it has been cleared.
    pub fn init_with_config(
        lines: L,
        pins: BusLines<L::Line>,
        delay: D,
        config: &Ssd1353Config,
    ) -> Self {
        let bus = ParallelBus::new(lines, pins);
        let mut display = Self { bus, delay };

        display.hardware_reset();

        display.bus.command(op::SLEEP_OFF);
        display.delay.delay_ms(POWER_ON_DELAY_MS);
        #[cfg(feature = "defmt")]
        defmt::debug!("SSD1353 awake");

        display.bus.command(op::SET_REMAP);
        display.bus.data(config.remap);

        for channel in ContrastChannel::ALL {
            display.set_contrast(channel, config.contrast(channel));
        }
        display.set_master_current(config.master_current);

        display.clear_screen();
        display.bus.set_display_enable(Level::High);

        #[cfg(feature = "defmt")]
        defmt::debug!("SSD1353 initialized");

        display
    }

    /// Pulse the reset line with the panel disabled
    fn hardware_reset(&mut self) {
        self.bus.set_display_enable(Level::Low);
        self.bus.set_reset(Level::Low);
        self.delay.delay_ms(RESET_DELAY_MS);
        self.bus.set_reset(Level::High);
        self.delay.delay_ms(RESET_DELAY_MS);

        #[cfg(feature = "defmt")]
        defmt::debug!("SSD1353 reset");
    }

    /// Set the display mode from a raw code
    ///
    /// Only [`DISPLAY_ON`], [`DISPLAY_OFF`] and [`DISPLAY_INVERSE`] are
    /// accepted. Any other value is ignored: nothing is sent and no error
    /// is reported.
    ///
    /// [`DISPLAY_ON`]: crate::DISPLAY_ON
    /// [`DISPLAY_OFF`]: crate::DISPLAY_OFF
    /// [`DISPLAY_INVERSE`]: crate::DISPLAY_INVERSE
    pub fn set_display_mode(&mut self, code: u8) {
        match DisplayMode::try_from(code) {
            Ok(mode) => self.set_mode(mode),
            Err(_invalid) => {
                #[cfg(feature = "defmt")]
                defmt::trace!("ignoring display mode {=u8:#x}", _invalid.0);
            }
        }
    }

    /// Set the display mode
    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.bus.command(mode.code());
    }

    /// Enable or disable interior fill for subsequent rectangles
    pub fn set_fill_enabled(&mut self, enabled: bool) {
        self.bus.command(op::FILL_ENABLE);
        self.bus.data(u8::from(enabled));
    }

    /// Set the contrast of one colour channel
    pub fn set_contrast(&mut self, channel: ContrastChannel, value: u8) {
        self.bus.command(channel.opcode());
        self.bus.data(value);
    }

    /// Set the master current
    pub fn set_master_current(&mut self, current: u8) {
        self.bus.command(op::MASTER_CURRENT);
        self.bus.data(current);
    }

    /// Consume the driver and return the line controller and delay
    pub fn release(self) -> (L, D) {
        (self.bus.release(), self.delay)
    }
}

impl<L, D> Canvas for Ssd1353<L, D>
where
    L: LineControl,
    D: DelayNs,
{
    fn draw_line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, color: Rgb) {
        self.bus.command(op::DRAW_LINE);
        self.bus.data_all(&[x0, y0, x1, y1]);
        self.bus.data_all(&color.wire_order());
    }

    /// Draw a rectangle
    ///
    /// Sends its own fill toggle first, so the result never depends on
    /// earlier calls, and waits 2 ms afterwards for the controller.
    fn draw_rectangle(
        &mut self,
        x0: u8,
        y0: u8,
        x1: u8,
        y1: u8,
        line: Rgb,
        fill: Rgb,
        use_fill: bool,
    ) {
        self.set_fill_enabled(use_fill);

        self.bus.command(op::DRAW_RECTANGLE);
        self.bus.data_all(&[x0, y0, x1, y1]);
        self.bus.data_all(&line.wire_order());
        self.bus.data_all(&fill.wire_order());
        self.delay.delay_ms(RECTANGLE_DELAY_MS);
    }
}
