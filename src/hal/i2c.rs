//! I2C Register Transport
//!
//! Implements [`RegisterBus`] over any async `embedded-hal` I2C controller.
//!
//! Framing on the wire:
//!
//! - 7-bit device address is [`DEMOD_I2C_ADDR`] plus the unit id
//! - register address is 16 bits, big-endian
//! - data is little-endian for word and long accesses
//! - bursts are a single transaction starting at the given address

use embedded_hal::i2c::{Error as _, ErrorKind};
use embedded_hal_async::i2c::{I2c, Operation};

use crate::config::DEMOD_I2C_ADDR;
use crate::hal::bus::{BusError, BusResult, RegisterBus};
use crate::types::DeviceSelector;

/// Demodulator I2C address for a unit
#[must_use]
pub const fn device_address(dev: DeviceSelector) -> u8 {
    (DEMOD_I2C_ADDR + dev.id()) & 0x7F
}

fn map_err<E: embedded_hal::i2c::Error>(err: E) -> BusError {
    match err.kind() {
        ErrorKind::NoAcknowledge(_) => BusError::Nack,
        ErrorKind::Bus | ErrorKind::ArbitrationLoss => BusError::Bus,
        _ => BusError::Other,
    }
}

/// [`RegisterBus`] over an I2C controller
pub struct I2cRegisterBus<I> {
    i2c: I,
}

impl<I: I2c> I2cRegisterBus<I> {
    /// Wrap an I2C controller
    #[must_use]
    pub const fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Give the controller back
    pub fn release(self) -> I {
        self.i2c
    }

    async fn write_reg(&mut self, dev: DeviceSelector, addr: u16, data: &[u8]) -> BusResult<()> {
        let header = addr.to_be_bytes();
        self.i2c
            .transaction(
                device_address(dev),
                &mut [Operation::Write(&header), Operation::Write(data)],
            )
            .await
            .map_err(map_err)
    }

    async fn read_reg(&mut self, dev: DeviceSelector, addr: u16, buf: &mut [u8]) -> BusResult<()> {
        // broadcast is write-only
        if dev == DeviceSelector::Broadcast {
            return Err(BusError::Other);
        }
        self.i2c
            .write_read(device_address(dev), &addr.to_be_bytes(), buf)
            .await
            .map_err(map_err)
    }
}

impl<I: I2c> RegisterBus for I2cRegisterBus<I> {
    async fn read_byte(&mut self, dev: DeviceSelector, addr: u16) -> BusResult<u8> {
        let mut buf = [0u8; 1];
        self.read_reg(dev, addr, &mut buf).await?;
        Ok(buf[0])
    }

    async fn write_byte(&mut self, dev: DeviceSelector, addr: u16, value: u8) -> BusResult<()> {
        self.write_reg(dev, addr, &[value]).await
    }

    async fn read_word(&mut self, dev: DeviceSelector, addr: u16) -> BusResult<u16> {
        let mut buf = [0u8; 2];
        self.read_reg(dev, addr, &mut buf).await?;
        Ok(u16::from_le_bytes(buf))
    }

    async fn write_word(&mut self, dev: DeviceSelector, addr: u16, value: u16) -> BusResult<()> {
        self.write_reg(dev, addr, &value.to_le_bytes()).await
    }

    async fn read_long(&mut self, dev: DeviceSelector, addr: u16) -> BusResult<u32> {
        let mut buf = [0u8; 4];
        self.read_reg(dev, addr, &mut buf).await?;
        Ok(u32::from_le_bytes(buf))
    }

    async fn write_long(&mut self, dev: DeviceSelector, addr: u16, value: u32) -> BusResult<()> {
        self.write_reg(dev, addr, &value.to_le_bytes()).await
    }

    async fn read_burst(&mut self, dev: DeviceSelector, addr: u16, buf: &mut [u8]) -> BusResult<()> {
        self.read_reg(dev, addr, buf).await
    }

    async fn write_burst(&mut self, dev: DeviceSelector, addr: u16, data: &[u8]) -> BusResult<()> {
        self.write_reg(dev, addr, data).await
    }
}
