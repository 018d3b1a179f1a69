//! Test doubles
//!
//! [`Recorder`] stands in for both the line controller and the delay
//! provider, logging everything into one shared, ordered event list.
//! [`decode_steps`] turns that log back into bus bytes by sampling the data
//! lines on each chip-select rising edge, the same way the controller does.

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use lumen_hal::{Level, LineControl};

use crate::bus::{BusLines, ByteKind};

pub const CS: usize = 0;
pub const DC: usize = 1;
pub const RESET: usize = 2;
pub const ENABLE: usize = 3;
pub const D0: usize = 4;

/// Line assignment used by every test
pub fn test_lines() -> BusLines<usize> {
    BusLines::new(CS, DC, RESET, ENABLE, [4, 5, 6, 7, 8, 9, 10, 11])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Configure(usize),
    Set(usize, Level),
    DelayNs(u32),
    DelayMs(u32),
}

/// What the controller would observe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Byte(ByteKind, u8),
    Reset(Level),
    Enable(Level),
    DelayMs(u32),
}

#[derive(Clone, Default)]
pub struct Recorder {
    log: Rc<RefCell<Vec<Event>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    pub fn steps(&self) -> Vec<Step> {
        decode_steps(&self.events())
    }

    pub fn frames(&self) -> Vec<(ByteKind, u8)> {
        decode_frames(&self.events())
    }

    fn push(&self, event: Event) {
        self.log.borrow_mut().push(event);
    }
}

impl LineControl for Recorder {
    type Line = usize;

    fn configure_output(&mut self, line: usize) {
        self.push(Event::Configure(line));
    }

    fn set_level(&mut self, line: usize, level: Level) {
        self.push(Event::Set(line, level));
    }
}

impl DelayNs for Recorder {
    fn delay_ns(&mut self, ns: u32) {
        self.push(Event::DelayNs(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.push(Event::DelayMs(ms));
    }
}

pub fn decode_steps(events: &[Event]) -> Vec<Step> {
    let mut levels = [Level::Low; 12];
    levels[CS] = Level::High;
    let mut steps = Vec::new();

    for &event in events {
        match event {
            Event::Set(CS, Level::High) => {
                if levels[CS] == Level::Low {
                    let byte = (0..8).fold(0u8, |acc, bit| {
                        acc | (u8::from(levels[D0 + bit].is_high()) << bit)
                    });
                    let kind = if levels[DC].is_high() {
                        ByteKind::Data
                    } else {
                        ByteKind::Command
                    };
                    steps.push(Step::Byte(kind, byte));
                }
                levels[CS] = Level::High;
            }
            Event::Set(RESET, level) => {
                levels[RESET] = level;
                steps.push(Step::Reset(level));
            }
            Event::Set(ENABLE, level) => {
                levels[ENABLE] = level;
                steps.push(Step::Enable(level));
            }
            Event::Set(line, level) => levels[line] = level,
            Event::DelayMs(ms) => steps.push(Step::DelayMs(ms)),
            Event::DelayNs(ns) => steps.push(Step::DelayMs(ns / 1_000_000)),
            Event::Configure(_) => {}
        }
    }

    steps
}

pub fn decode_frames(events: &[Event]) -> Vec<(ByteKind, u8)> {
    decode_steps(events)
        .into_iter()
        .filter_map(|step| match step {
            Step::Byte(kind, byte) => Some((kind, byte)),
            _ => None,
        })
        .collect()
}

/// Shorthand for an op-code followed by its parameters
pub fn cmd(op: u8, params: &[u8]) -> Vec<(ByteKind, u8)> {
    let mut frames = vec![(ByteKind::Command, op)];
    frames.extend(params.iter().map(|&p| (ByteKind::Data, p)));
    frames
}
