//! FC8300 / FC8350 Tuner Driver
//!
//! Both parts share the same fractional-N synthesizer and register map; they
//! differ in VCO range and in the FC8350's integrated LNA, which needs its own
//! start-up sequence.
//!
//! Tuning follows the vendor bring-up order:
//!
//! 1. Program LO select, N and K, strobe the charge pump, poll lock.
//! 2. If unlocked on a high VCO bank with an odd divider (or a VCO above
//!    6.2 GHz), step the bank down once and poll again.
//! 3. If still unlocked, run VCO band calibration from the current bank and
//!    repeat the whole synthesis once.

use embedded_hal_async::delay::DelayNs;
use fixed::types::I12F4;

use crate::calc::pll_calc::{plan_pll, PllPlan, VcoLimits};
use crate::config::tuner::{LOCK_POLLS, VCO_CAL_POLLS, VCO_CAL_ROWS, VCO_HYSTERESIS_KHZ};
use crate::drivers::tuner::{ProductType, Tuner};
use crate::error::{Error, Result};
use crate::hal::bus::{tuner_reg, Io, RegisterBus};
use crate::types::{Bandwidth, BroadcastMode, DeviceSelector, RfFrequency, SegmentClass};

/// Tuner register addresses
pub mod reg {
    /// Power control
    pub const POWER: u8 = 0x00;
    /// Channel filter bandwidth
    pub const FILTER_BW: u8 = 0x13;
    /// LNA configuration (FC8350)
    pub const LNA_CFG: u8 = 0x15;
    /// LO divider select
    pub const LO_SELECT: u8 = 0x21;
    /// N divider bits 9:8
    pub const N_HI: u8 = 0x22;
    /// N divider bits 7:0
    pub const N_LO: u8 = 0x23;
    /// K fraction bits 21:16
    pub const K_HI: u8 = 0x24;
    /// K fraction bits 15:8
    pub const K_MID: u8 = 0x25;
    /// K fraction bits 7:0
    pub const K_LO: u8 = 0x26;
    /// Charge pump strobe
    pub const CP_STROBE: u8 = 0x27;
    /// PLL lock detect
    pub const LOCK_DETECT: u8 = 0x28;
    /// Current VCO bank
    pub const VCO_BANK: u8 = 0x29;
    /// VCO calibration control
    pub const VCO_CAL_CTRL: u8 = 0x2A;
    /// VCO calibration done flag
    pub const VCO_CAL_DONE: u8 = 0x2B;
    /// First of four VCO calibration indicators
    pub const VCO_CAL_IND0: u8 = 0x2C;
    /// First of three VCO band configuration registers
    pub const VCO_BAND: u8 = 0x30;
    /// RSSI, signed 1/16 dB (word)
    pub const RSSI: u8 = 0x3A;
}

/// Lock detect bit
pub const LOCK_MASK: u8 = 0x01;

/// Starts a VCO band calibration
pub const CAL_START: u8 = 0x80;

/// Calibration finished
pub const CAL_DONE: u8 = 0x01;

/// Active power setting
pub const POWER_ON: u8 = 0x0F;

/// Standby power setting
pub const POWER_STANDBY: u8 = 0x00;

/// VCO band configuration rows, lowest band first
pub const VCO_BANK_TABLE: [[u8; 3]; 8] = [
    [0x00, 0x1C, 0x40],
    [0x01, 0x1C, 0x48],
    [0x02, 0x1D, 0x50],
    [0x03, 0x1D, 0x58],
    [0x04, 0x1E, 0x60],
    [0x05, 0x1E, 0x68],
    [0x06, 0x1F, 0x70],
    [0x07, 0x1F, 0x78],
];

/// Row forced when no calibration row succeeds
pub const SAFE_ROW: usize = 4;

const COMMON_INIT: [(u8, u8); 5] = [
    (reg::POWER, POWER_ON),
    (0x02, 0x1F),
    (0x03, 0x81),
    (0x08, 0x33),
    (0x0C, 0x04),
];

const FC8350_LNA_INIT: [(u8, u8); 3] = [(reg::LNA_CFG, 0x21), (0x16, 0x0A), (0x17, 0x33)];

/// Channel filter setting for a segment class and bandwidth
#[must_use]
pub const fn filter_setting(class: SegmentClass, bandwidth: Bandwidth) -> u8 {
    match class {
        SegmentClass::OneSegA | SegmentClass::OneSegB => 0x00,
        SegmentClass::ThreeSeg => 0x01,
        SegmentClass::FullSeg => match bandwidth {
            Bandwidth::Mhz6 => 0x04,
            Bandwidth::Mhz7 => 0x05,
            Bandwidth::Mhz8 => 0x06,
        },
    }
}

/// Synthesizer and register access shared by both parts
#[derive(Debug)]
struct Synthesizer {
    selector: DeviceSelector,
    xtal_khz: u32,
    bandwidth: Bandwidth,
    limits: VcoLimits,
}

impl Synthesizer {
    async fn write<B: RegisterBus, D: DelayNs>(
        &self,
        io: &mut Io<B, D>,
        reg: u8,
        value: u8,
    ) -> Result<()> {
        io.write_byte(self.selector, tuner_reg(reg), value).await
    }

    async fn read<B: RegisterBus, D: DelayNs>(&self, io: &mut Io<B, D>, reg: u8) -> Result<u8> {
        io.read_byte(self.selector, tuner_reg(reg)).await
    }

    async fn write_seq<B: RegisterBus, D: DelayNs>(
        &self,
        io: &mut Io<B, D>,
        seq: &[(u8, u8)],
    ) -> Result<()> {
        for &(addr, value) in seq {
            self.write(io, addr, value).await?;
        }
        Ok(())
    }

    async fn init<B: RegisterBus, D: DelayNs>(
        &self,
        io: &mut Io<B, D>,
        mode: BroadcastMode,
    ) -> Result<()> {
        self.write_seq(io, &COMMON_INIT).await?;
        let filter = filter_setting(mode.segment_class(), self.bandwidth);
        self.write(io, reg::FILTER_BW, filter).await
    }

    #[allow(clippy::cast_possible_truncation)]
    async fn program<B: RegisterBus, D: DelayNs>(
        &self,
        io: &mut Io<B, D>,
        plan: &PllPlan,
    ) -> Result<()> {
        self.write(io, reg::LO_SELECT, plan.lo_index).await?;
        self.write(io, reg::N_HI, ((plan.n >> 8) & 0x03) as u8).await?;
        self.write(io, reg::N_LO, (plan.n & 0xFF) as u8).await?;
        self.write(io, reg::K_HI, ((plan.k >> 16) & 0x3F) as u8).await?;
        self.write(io, reg::K_MID, ((plan.k >> 8) & 0xFF) as u8).await?;
        self.write(io, reg::K_LO, (plan.k & 0xFF) as u8).await?;
        self.write(io, reg::CP_STROBE, 0x01).await?;
        self.write(io, reg::CP_STROBE, 0x00).await
    }

    async fn wait_lock<B: RegisterBus, D: DelayNs>(&self, io: &mut Io<B, D>) -> Result<bool> {
        for _ in 0..LOCK_POLLS {
            io.wait_ms(1).await;
            if self.read(io, reg::LOCK_DETECT).await? & LOCK_MASK != 0 {
                return Ok(true);
            }
        }
        Ok(false)
    }

    async fn write_band_row<B: RegisterBus, D: DelayNs>(
        &self,
        io: &mut Io<B, D>,
        row: &[u8; 3],
    ) -> Result<()> {
        for (addr, &value) in (reg::VCO_BAND..).zip(row) {
            self.write(io, addr, value).await?;
        }
        Ok(())
    }

    async fn wait_cal_done<B: RegisterBus, D: DelayNs>(&self, io: &mut Io<B, D>) -> Result<bool> {
        for _ in 0..VCO_CAL_POLLS {
            io.wait_ms(1).await;
            if self.read(io, reg::VCO_CAL_DONE).await? & CAL_DONE != 0 {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Try up to [`VCO_CAL_ROWS`] band rows starting at `bank`; fall back to
    /// [`SAFE_ROW`] if none calibrates
    async fn calibrate_vco<B: RegisterBus, D: DelayNs>(
        &self,
        io: &mut Io<B, D>,
        bank: u8,
    ) -> Result<()> {
        let start = usize::from(bank).min(VCO_BANK_TABLE.len() - 1);
        let end = (start + VCO_CAL_ROWS).min(VCO_BANK_TABLE.len());

        for row in &VCO_BANK_TABLE[start..end] {
            self.write_band_row(io, row).await?;
            self.write(io, reg::VCO_CAL_CTRL, CAL_START).await?;
            if !self.wait_cal_done(io).await? {
                trace!("VCO calibration done bit not set on band {}", row[0]);
            }

            // indicators are read even when the done bit stays clear
            let mut indicators = [0u8; 4];
            for (addr, slot) in (reg::VCO_CAL_IND0..).zip(indicators.iter_mut()) {
                *slot = self.read(io, addr).await?;
            }
            if indicators.iter().all(|&v| v != 0) {
                debug!("VCO calibrated on band {}", row[0]);
                return Ok(());
            }
        }

        warn!("VCO calibration failed, forcing band {}", SAFE_ROW);
        self.write_band_row(io, &VCO_BANK_TABLE[SAFE_ROW]).await
    }

    async fn tune_to<B: RegisterBus, D: DelayNs>(
        &self,
        io: &mut Io<B, D>,
        rf: RfFrequency,
    ) -> Result<()> {
        let plan = plan_pll(rf.as_khz(), self.xtal_khz, self.limits)?;

        for attempt in 0..2 {
            self.program(io, &plan).await?;
            if self.wait_lock(io).await? {
                return Ok(());
            }

            let bank = self.read(io, reg::VCO_BANK).await?;
            if bank > 1 && (plan.has_odd_divider() || plan.vco_khz > VCO_HYSTERESIS_KHZ) {
                trace!("stepping VCO bank {} down", bank);
                self.write(io, reg::VCO_BANK, bank - 1).await?;
                if self.wait_lock(io).await? {
                    return Ok(());
                }
            }

            if attempt == 0 {
                let bank = self.read(io, reg::VCO_BANK).await?;
                self.calibrate_vco(io, bank).await?;
            }
        }

        error!("tuner PLL unlocked at {}", rf.as_khz());
        Err(Error::PllUnlocked)
    }

    async fn rssi<B: RegisterBus, D: DelayNs>(&self, io: &mut Io<B, D>) -> Result<i32> {
        let raw = io.read_word(self.selector, tuner_reg(reg::RSSI)).await?;
        let level = I12F4::from_bits(i16::from_ne_bytes(raw.to_ne_bytes()));
        Ok(level.to_num())
    }
}

/// FC8300 tuner
#[derive(Debug)]
pub struct Fc8300 {
    synth: Synthesizer,
}

impl Fc8300 {
    /// Create a driver for the tuner behind `selector`
    #[must_use]
    pub const fn new(selector: DeviceSelector, xtal_khz: u32, bandwidth: Bandwidth) -> Self {
        Self {
            synth: Synthesizer {
                selector,
                xtal_khz,
                bandwidth,
                limits: VcoLimits::FC8300,
            },
        }
    }
}

impl Tuner for Fc8300 {
    fn product(&self) -> ProductType {
        ProductType::Fc8300
    }

    async fn init<B: RegisterBus, D: DelayNs>(
        &mut self,
        io: &mut Io<B, D>,
        mode: BroadcastMode,
    ) -> Result<()> {
        self.synth.init(io, mode).await
    }

    async fn set_frequency<B: RegisterBus, D: DelayNs>(
        &mut self,
        io: &mut Io<B, D>,
        rf: RfFrequency,
    ) -> Result<()> {
        self.synth.tune_to(io, rf).await
    }

    async fn rssi<B: RegisterBus, D: DelayNs>(&mut self, io: &mut Io<B, D>) -> Result<i32> {
        self.synth.rssi(io).await
    }

    async fn deinit<B: RegisterBus, D: DelayNs>(&mut self, io: &mut Io<B, D>) -> Result<()> {
        self.synth.write(io, reg::POWER, POWER_STANDBY).await
    }
}

/// FC8350 tuner
#[derive(Debug)]
pub struct Fc8350 {
    synth: Synthesizer,
}

impl Fc8350 {
    /// Create a driver for the tuner behind `selector`
    #[must_use]
    pub const fn new(selector: DeviceSelector, xtal_khz: u32, bandwidth: Bandwidth) -> Self {
        Self {
            synth: Synthesizer {
                selector,
                xtal_khz,
                bandwidth,
                limits: VcoLimits::FC8350,
            },
        }
    }
}

impl Tuner for Fc8350 {
    fn product(&self) -> ProductType {
        ProductType::Fc8350
    }

    async fn init<B: RegisterBus, D: DelayNs>(
        &mut self,
        io: &mut Io<B, D>,
        mode: BroadcastMode,
    ) -> Result<()> {
        self.synth.init(io, mode).await?;
        self.synth.write_seq(io, &FC8350_LNA_INIT).await
    }

    async fn set_frequency<B: RegisterBus, D: DelayNs>(
        &mut self,
        io: &mut Io<B, D>,
        rf: RfFrequency,
    ) -> Result<()> {
        self.synth.tune_to(io, rf).await
    }

    async fn rssi<B: RegisterBus, D: DelayNs>(&mut self, io: &mut Io<B, D>) -> Result<i32> {
        self.synth.rssi(io).await
    }

    async fn deinit<B: RegisterBus, D: DelayNs>(&mut self, io: &mut Io<B, D>) -> Result<()> {
        self.synth.write(io, reg::POWER, POWER_STANDBY).await
    }
}
