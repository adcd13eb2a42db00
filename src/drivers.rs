//! Chip Drivers
//!
//! Register-level sequences for the demodulator baseband and the
//! FC8300-family tuners. These sit on top of [`crate::hal::bus::Io`] and turn
//! the plans produced by [`crate::calc`] into register writes.

pub mod demod;
pub mod fc8300;
pub mod tuner;
