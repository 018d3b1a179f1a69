//! SSD1353 OLED driver for Lumen
//!
//! This crate provides:
//! - `ParallelBus` for byte-wide 8080-style writes over twelve GPIO lines
//! - `Ssd1353` for bring-up and the controller's line/rectangle accelerator
//! - A built-in vector font rendered as line, dot and frame strokes
//!
//! # Architecture
//!
//! ```text
//! TextExt / TextCursor   glyph table (ASCII 0x20..0x7E)
//!          │                  │
//!          ▼                  │
//!       Canvas  ◄─────────────┘
//!          │
//!          ▼
//!       Ssd1353 ──► ParallelBus ──► LineControl (lumen-hal)
//! ```
//!
//! The driver keeps no frame buffer. Each draw call becomes a handful of
//! command bytes and the controller does the rasterising.
//!
//! # Example
//!
//! ```ignore
//! use lumen_ssd1353::{BusLines, Canvas, Rgb, Ssd1353, TextExt};
//!
//! let pins = BusLines::new(0, 1, 2, 3, [4, 5, 6, 7, 8, 9, 10, 11]);
//! let mut display = Ssd1353::init(bank, pins, delay);
//! display.render_string("HELLO", 10, 60, Rgb::WHITE);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bus;
pub mod canvas;
pub mod color;
pub mod command;
pub mod config;
pub mod driver;
pub mod glyph;
pub mod text;

#[cfg(test)]
mod mock;

// Re-export key types
pub use bus::{BusLines, ByteKind, ParallelBus};
pub use canvas::{Canvas, HEIGHT, WIDTH};
pub use color::Rgb;
pub use command::{
    ContrastChannel, DisplayMode, InvalidDisplayMode, DISPLAY_INVERSE, DISPLAY_OFF, DISPLAY_ON,
};
pub use config::Ssd1353Config;
pub use driver::Ssd1353;
pub use lumen_hal::{Level, LineControl};
pub use text::{TextCursor, TextExt, CHAR_ADVANCE};
