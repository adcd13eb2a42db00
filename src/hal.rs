//! Register Transport Layer
//!
//! The core only needs register-level access to the demodulator (and, through
//! its bridge, the tuner). [`bus::RegisterBus`] is that capability;
//! [`i2c::I2cRegisterBus`] implements it over any async `embedded-hal` I2C
//! controller.

pub mod bus;
pub mod i2c;
