//! Tuner Abstraction
//!
//! The control plane talks to the RF tuner through [`Tuner`]. The part is
//! chosen once when a tuner is selected and held as a [`TunerDriver`].

use embedded_hal_async::delay::DelayNs;

use crate::drivers::fc8300::{Fc8300, Fc8350};
use crate::error::Result;
use crate::hal::bus::{Io, RegisterBus};
use crate::types::{Bandwidth, BroadcastMode, DeviceSelector, RfFrequency};

/// Tuner part fitted on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductType {
    /// FC8300 (VHF/UHF, 6.4 GHz VCO ceiling)
    Fc8300,
    /// FC8350 (reduced VCO range, integrated LNA)
    Fc8350,
}

#[cfg(feature = "embedded")]
impl defmt::Format for ProductType {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Fc8300 => defmt::write!(f, "FC8300"),
            Self::Fc8350 => defmt::write!(f, "FC8350"),
        }
    }
}

/// RF tuner operations
#[allow(async_fn_in_trait)]
pub trait Tuner {
    /// Part this driver controls
    fn product(&self) -> ProductType;

    /// Bring the tuner out of standby and configure it for `mode`
    async fn init<B: RegisterBus, D: DelayNs>(
        &mut self,
        io: &mut Io<B, D>,
        mode: BroadcastMode,
    ) -> Result<()>;

    /// Tune the synthesizer to `rf`
    async fn set_frequency<B: RegisterBus, D: DelayNs>(
        &mut self,
        io: &mut Io<B, D>,
        rf: RfFrequency,
    ) -> Result<()>;

    /// Received signal strength in dBm
    async fn rssi<B: RegisterBus, D: DelayNs>(&mut self, io: &mut Io<B, D>) -> Result<i32>;

    /// Put the tuner in standby
    async fn deinit<B: RegisterBus, D: DelayNs>(&mut self, io: &mut Io<B, D>) -> Result<()>;
}

/// Selected tuner
#[derive(Debug)]
pub enum TunerDriver {
    /// FC8300 driver
    Fc8300(Fc8300),
    /// FC8350 driver
    Fc8350(Fc8350),
}

impl TunerDriver {
    /// Build the driver for `product`
    #[must_use]
    pub fn new(
        product: ProductType,
        selector: DeviceSelector,
        xtal_khz: u32,
        bandwidth: Bandwidth,
    ) -> Self {
        match product {
            ProductType::Fc8300 => Self::Fc8300(Fc8300::new(selector, xtal_khz, bandwidth)),
            ProductType::Fc8350 => Self::Fc8350(Fc8350::new(selector, xtal_khz, bandwidth)),
        }
    }
}

impl Tuner for TunerDriver {
    fn product(&self) -> ProductType {
        match self {
            Self::Fc8300(t) => t.product(),
            Self::Fc8350(t) => t.product(),
        }
    }

    async fn init<B: RegisterBus, D: DelayNs>(
        &mut self,
        io: &mut Io<B, D>,
        mode: BroadcastMode,
    ) -> Result<()> {
        match self {
            Self::Fc8300(t) => t.init(io, mode).await,
            Self::Fc8350(t) => t.init(io, mode).await,
        }
    }

    async fn set_frequency<B: RegisterBus, D: DelayNs>(
        &mut self,
        io: &mut Io<B, D>,
        rf: RfFrequency,
    ) -> Result<()> {
        match self {
            Self::Fc8300(t) => t.set_frequency(io, rf).await,
            Self::Fc8350(t) => t.set_frequency(io, rf).await,
        }
    }

    async fn rssi<B: RegisterBus, D: DelayNs>(&mut self, io: &mut Io<B, D>) -> Result<i32> {
        match self {
            Self::Fc8300(t) => t.rssi(io).await,
            Self::Fc8350(t) => t.rssi(io).await,
        }
    }

    async fn deinit<B: RegisterBus, D: DelayNs>(&mut self, io: &mut Io<B, D>) -> Result<()> {
        match self {
            Self::Fc8300(t) => t.deinit(io).await,
            Self::Fc8350(t) => t.deinit(io).await,
        }
    }
}
