//! Lumen Hardware Abstraction Layer
//!
//! This crate defines the line-control capability consumed by the Lumen
//! display drivers. A driver never touches GPIO registers directly; it is
//! handed something implementing [`LineControl`] and addresses its lines
//! through opaque identifiers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Display driver (lumen-ssd1353, etc.)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumen-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │   PinBank     │       │  chip HAL /   │
//! │ (embedded-hal)│       │  test double  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! Blocking delays use [`embedded_hal::delay::DelayNs`] directly.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key types at crate root for convenience
pub use embedded_hal::delay::DelayNs;
pub use gpio::{Level, LineControl, PinBank};
