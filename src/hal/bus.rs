//! Register Transport
//!
//! The demodulator is reached through an injected register transport. The
//! core never speaks the serial-bus protocol itself; it only asks for
//! byte/word/long and burst accesses at `(unit, address)`.
//!
//! Baseband registers live below [`TUNER_BASE`]; tuner registers are mapped
//! at `TUNER_BASE | reg` and are forwarded by the demodulator's tuner bridge.

use core::fmt;

use embedded_hal_async::delay::DelayNs;

use crate::error::Result;
use crate::types::DeviceSelector;

/// Start of the tuner register window
pub const TUNER_BASE: u16 = 0xC000;

/// Map a tuner register into the host address space
#[must_use]
pub const fn tuner_reg(reg: u8) -> u16 {
    TUNER_BASE | reg as u16
}

/// Transport-level failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusError {
    /// Device did not acknowledge
    Nack,
    /// Bus arbitration lost or bus stuck
    Bus,
    /// Transfer timed out
    Timeout,
    /// Any other host-controller failure
    Other,
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nack => f.write_str("no acknowledge"),
            Self::Bus => f.write_str("bus error"),
            Self::Timeout => f.write_str("timeout"),
            Self::Other => f.write_str("transport failure"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for BusError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Nack => defmt::write!(f, "NACK"),
            Self::Bus => defmt::write!(f, "BUS"),
            Self::Timeout => defmt::write!(f, "TIMEOUT"),
            Self::Other => defmt::write!(f, "OTHER"),
        }
    }
}

/// Transport operation result
pub type BusResult<T> = core::result::Result<T, BusError>;

/// Register transport capability
#[allow(async_fn_in_trait)]
pub trait RegisterBus {
    /// Read an 8-bit register
    async fn read_byte(&mut self, dev: DeviceSelector, addr: u16) -> BusResult<u8>;

    /// Write an 8-bit register
    async fn write_byte(&mut self, dev: DeviceSelector, addr: u16, value: u8) -> BusResult<()>;

    /// Read a 16-bit register
    async fn read_word(&mut self, dev: DeviceSelector, addr: u16) -> BusResult<u16>;

    /// Write a 16-bit register
    async fn write_word(&mut self, dev: DeviceSelector, addr: u16, value: u16) -> BusResult<()>;

    /// Read a 32-bit register
    async fn read_long(&mut self, dev: DeviceSelector, addr: u16) -> BusResult<u32>;

    /// Write a 32-bit register
    async fn write_long(&mut self, dev: DeviceSelector, addr: u16, value: u32) -> BusResult<()>;

    /// Read consecutive bytes starting at `addr`
    async fn read_burst(&mut self, dev: DeviceSelector, addr: u16, buf: &mut [u8]) -> BusResult<()>;

    /// Write consecutive bytes starting at `addr`
    async fn write_burst(&mut self, dev: DeviceSelector, addr: u16, data: &[u8]) -> BusResult<()>;
}

impl<T: RegisterBus> RegisterBus for &mut T {
    async fn read_byte(&mut self, dev: DeviceSelector, addr: u16) -> BusResult<u8> {
        T::read_byte(self, dev, addr).await
    }

    async fn write_byte(&mut self, dev: DeviceSelector, addr: u16, value: u8) -> BusResult<()> {
        T::write_byte(self, dev, addr, value).await
    }

    async fn read_word(&mut self, dev: DeviceSelector, addr: u16) -> BusResult<u16> {
        T::read_word(self, dev, addr).await
    }

    async fn write_word(&mut self, dev: DeviceSelector, addr: u16, value: u16) -> BusResult<()> {
        T::write_word(self, dev, addr, value).await
    }

    async fn read_long(&mut self, dev: DeviceSelector, addr: u16) -> BusResult<u32> {
        T::read_long(self, dev, addr).await
    }

    async fn write_long(&mut self, dev: DeviceSelector, addr: u16, value: u32) -> BusResult<()> {
        T::write_long(self, dev, addr, value).await
    }

    async fn read_burst(&mut self, dev: DeviceSelector, addr: u16, buf: &mut [u8]) -> BusResult<()> {
        T::read_burst(self, dev, addr, buf).await
    }

    async fn write_burst(&mut self, dev: DeviceSelector, addr: u16, data: &[u8]) -> BusResult<()> {
        T::write_burst(self, dev, addr, data).await
    }
}

/// Register transport plus the delay source used for settle times and
/// polling ticks
///
/// Everything that touches the hardware goes through one `Io`, so holding
/// it (behind the device's mode lock) serializes register access.
pub struct Io<B, D> {
    bus: B,
    delay: D,
}

impl<B: RegisterBus, D: DelayNs> Io<B, D> {
    /// Bundle a transport and a delay source
    pub const fn new(bus: B, delay: D) -> Self {
        Self { bus, delay }
    }

    /// Read an 8-bit register
    pub async fn read_byte(&mut self, dev: DeviceSelector, addr: u16) -> Result<u8> {
        Ok(self.bus.read_byte(dev, addr).await?)
    }

    /// Write an 8-bit register
    pub async fn write_byte(&mut self, dev: DeviceSelector, addr: u16, value: u8) -> Result<()> {
        Ok(self.bus.write_byte(dev, addr, value).await?)
    }

    /// Read a 16-bit register
    pub async fn read_word(&mut self, dev: DeviceSelector, addr: u16) -> Result<u16> {
        Ok(self.bus.read_word(dev, addr).await?)
    }

    /// Write a 16-bit register
    pub async fn write_word(&mut self, dev: DeviceSelector, addr: u16, value: u16) -> Result<()> {
        Ok(self.bus.write_word(dev, addr, value).await?)
    }

    /// Read a 32-bit register
    pub async fn read_long(&mut self, dev: DeviceSelector, addr: u16) -> Result<u32> {
        Ok(self.bus.read_long(dev, addr).await?)
    }

    /// Write a 32-bit register
    pub async fn write_long(&mut self, dev: DeviceSelector, addr: u16, value: u32) -> Result<()> {
        Ok(self.bus.write_long(dev, addr, value).await?)
    }

    /// Burst read
    pub async fn read_burst(&mut self, dev: DeviceSelector, addr: u16, buf: &mut [u8]) -> Result<()> {
        Ok(self.bus.read_burst(dev, addr, buf).await?)
    }

    /// Burst write
    pub async fn write_burst(&mut self, dev: DeviceSelector, addr: u16, data: &[u8]) -> Result<()> {
        Ok(self.bus.write_burst(dev, addr, data).await?)
    }

    /// Sleep for `ms` milliseconds
    pub async fn wait_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms).await;
    }
}
