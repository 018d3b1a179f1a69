//! 8080-style parallel bus transport
//!
//! One byte is written per transaction:
//!
//! 1. Command/data select: LOW for a command byte, HIGH for a data byte
//! 2. Chip select LOW
//! 3. D0..D7 driven to bits 0..7 of the byte
//! 4. Chip select HIGH (the controller latches on this edge)
//!
//! Nothing is read back; a write cannot fail.

use lumen_hal::{Level, LineControl};

/// Kind of byte on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteKind {
    /// Op-code
    Command,
    /// Op-code parameter
    Data,
}

impl ByteKind {
    /// Level of the command/data select line for this kind
    pub fn dc_level(self) -> Level {
        match self {
            ByteKind::Command => Level::Low,
            ByteKind::Data => Level::High,
        }
    }
}

/// Line assignment for the display
///
/// Identifiers are whatever the [`LineControl`] implementation uses to
/// address a line (pin numbers, bank indices, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusLines<Line> {
    /// Chip select (active low)
    pub chip_select: Line,
    /// Command/data select
    pub data_command: Line,
    /// Reset (active low)
    pub reset: Line,
    /// Panel power enable (active high)
    pub display_enable: Line,
    /// Data lines, D0 first
    pub data: [Line; 8],
}

impl<Line: Copy> BusLines<Line> {
    /// Create a line assignment
    pub fn new(
        chip_select: Line,
        data_command: Line,
        reset: Line,
        display_enable: Line,
        data: [Line; 8],
    ) -> Self {
        Self {
            chip_select,
            data_command,
            reset,
            display_enable,
            data,
        }
    }

    /// All twelve lines, control lines first
    pub fn all(&self) -> impl Iterator<Item = Line> + '_ {
        [
            self.chip_select,
            self.data_command,
            self.reset,
            self.display_enable,
        ]
        .into_iter()
        .chain(self.data.iter().copied())
    }
}

/// Parallel bus
///
/// Owns the line controller. Every method takes `&mut self`, so a bus can
/// never be driven from two places at once; sharing one between contexts
/// requires an external lock around the whole driver.
pub struct ParallelBus<L: LineControl> {
    lines: L,
    pins: BusLines<L::Line>,
}

impl<L: LineControl> ParallelBus<L> {
    /// Create a bus, configuring every line as an output
    ///
    /// No line is driven here; that is left to the bring-up sequence.
    pub fn new(mut lines: L, pins: BusLines<L::Line>) -> Self {
        for line in pins.all() {
            lines.configure_output(line);
        }
        Self { lines, pins }
    }

    /// Write one byte
    pub fn transmit(&mut self, byte: u8, kind: ByteKind) {
        self.lines.set_level(self.pins.data_command, kind.dc_level());
        self.lines.set_low(self.pins.chip_select);
        for (bit, &line) in (0u8..).zip(self.pins.data.iter()) {
            self.lines.set_level(line, Level::of_bit(byte, bit));
        }
        self.lines.set_high(self.pins.chip_select);
    }

    /// Write a command byte
    pub fn command(&mut self, byte: u8) {
        self.transmit(byte, ByteKind::Command);
    }

    /// Write a data byte
    pub fn data(&mut self, byte: u8) {
        self.transmit(byte, ByteKind::Data);
    }

    /// Write a run of data bytes
    pub fn data_all(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.data(byte);
        }
    }

    /// Drive the reset line
    pub fn set_reset(&mut self, level: Level) {
        self.lines.set_level(self.pins.reset, level);
    }

    /// Drive the display enable line
    pub fn set_display_enable(&mut self, level: Level) {
        self.lines.set_level(self.pins.display_enable, level);
    }

    /// Line assignment
    pub fn pins(&self) -> &BusLines<L::Line> {
        &self.pins
    }

    /// Consume the bus and return the line controller
    pub fn release(self) -> L {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{decode_frames, test_lines, Event, Recorder, CS, DC, D0};
    use proptest::prelude::*;

    fn bus() -> (ParallelBus<Recorder>, Recorder) {
        let recorder = Recorder::new();
        let bus = ParallelBus::new(recorder.clone(), test_lines());
        (bus, recorder)
    }

    #[test]
    fn test_new_configures_all_lines() {
        let (_bus, recorder) = bus();
        let events = recorder.events();

        assert_eq!(events.len(), 12);
        for line in 0..12 {
            assert!(events.contains(&Event::Configure(line)));
        }
    }

    #[test]
    fn test_pins_returns_assignment() {
        let (bus, _recorder) = bus();

        assert_eq!(*bus.pins(), test_lines());
        assert_eq!(bus.pins().all().count(), 12);
    }

    #[test]
    fn test_command_sequence() {
        let (mut bus, recorder) = bus();
        recorder.clear();

        bus.command(0b1010_0101);

        let events = recorder.events();
        assert_eq!(events.len(), 11);
        assert_eq!(events[0], Event::Set(DC, Level::Low));
        assert_eq!(events[1], Event::Set(CS, Level::Low));
        assert_eq!(events[2], Event::Set(D0, Level::High));
        assert_eq!(events[3], Event::Set(D0 + 1, Level::Low));
        assert_eq!(events[4], Event::Set(D0 + 2, Level::High));
        assert_eq!(events[9], Event::Set(D0 + 7, Level::High));
        assert_eq!(events[10], Event::Set(CS, Level::High));
    }

    #[test]
    fn test_data_sets_dc_high() {
        let (mut bus, recorder) = bus();
        recorder.clear();

        bus.data(0x00);

        let events = recorder.events();
        assert_eq!(events[0], Event::Set(DC, Level::High));
        assert_eq!(decode_frames(&events), vec![(ByteKind::Data, 0x00)]);
    }

    #[test]
    fn test_data_all() {
        let (mut bus, recorder) = bus();
        recorder.clear();

        bus.data_all(&[1, 2, 3]);

        assert_eq!(
            decode_frames(&recorder.events()),
            vec![(ByteKind::Data, 1), (ByteKind::Data, 2), (ByteKind::Data, 3)]
        );
    }

    proptest! {
        #[test]
        fn prop_transmit_framing(byte in any::<u8>(), is_command in any::<bool>()) {
            let (mut bus, recorder) = bus();
            recorder.clear();

            let kind = if is_command { ByteKind::Command } else { ByteKind::Data };
            bus.transmit(byte, kind);
            let events = recorder.events();

            // DC first, then CS low, eight data lines, CS high
            prop_assert_eq!(events.len(), 11);
            prop_assert_eq!(events[0], Event::Set(DC, kind.dc_level()));
            prop_assert_eq!(events[1], Event::Set(CS, Level::Low));
            for bit in 0..8u8 {
                let expected = Event::Set(D0 + bit as usize, Level::of_bit(byte, bit));
                prop_assert_eq!(events[2 + bit as usize], expected);
            }
            prop_assert_eq!(events[10], Event::Set(CS, Level::High));
            prop_assert_eq!(decode_frames(&events), vec![(kind, byte)]);
        }
    }
}
