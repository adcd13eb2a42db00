//! ISDB-T Front-End Library
//!
//! Acquisition and streaming core for an ISDB-T demodulator paired with an
//! FC8300-family tuner. The library programs the demodulator core clock and
//! the tuner synthesizer, drives the multi-phase signal-lock state machine
//! across up to four diversity branches, and moves demodulated transport
//! stream data from interrupt context into per-consumer ring buffers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     DEVICE / CONTROL PLANE                   │
//! │  Isdbt  │  mode lock  │  consumer table  │  TS worker        │
//! ├─────────────────────────────────────────────────────────────┤
//! │                        ACQUISITION                           │
//! │  RF detect → OFDM → frame sync → carrier → TMCC → error-free │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     DRIVERS / CALCULATORS                    │
//! │  core clock  │  calibration  │  tuner PLL  │  ring buffers   │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    REGISTER TRANSPORT                        │
//! │        RegisterBus trait  │  I2C adapter  │  delay           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Injected hardware**: register transport and delay are traits, so the
//!   whole core runs on the host against a simulated bus
//! - **Functional core, imperative shell**: clock and PLL planning are pure
//!   calculators; drivers only program their results
//! - **Explicit error handling**: all fallible operations return `Result`
//! - **Fixed capacity**: no allocation; tables and buffers are sized at
//!   compile time

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Logging macros must come first so every module below sees them
#[macro_use]
mod fmt;

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_stm32;
#[cfg(feature = "embedded")]
pub use embassy_time;

/// Register transport
///
/// The injected bus capability and its I2C implementation.
pub mod hal;

/// Pure frequency calculators
///
/// Core-clock and tuner-PLL planning, testable on the host.
pub mod calc;

/// Filter calibration data and selection
pub mod calibration;

/// Chip drivers
///
/// Demodulator clock programming and the FC8300-family tuners.
pub mod drivers;

/// Signal acquisition state machine
pub mod acquisition;

/// Transport stream buffering
pub mod stream;

/// Device context, control plane and TS worker
pub mod device;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Error type
pub mod error;

pub use device::Isdbt;
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::acquisition::Phase;
    pub use crate::config::*;
    pub use crate::device::{Handle, Isdbt};
    pub use crate::drivers::tuner::ProductType;
    pub use crate::error::{Error, Result};
    pub use crate::hal::bus::{BusError, RegisterBus};
    pub use crate::stream::ConsumerKind;
    pub use crate::types::*;
}
