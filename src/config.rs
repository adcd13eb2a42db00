//! System configuration and hardware constants
//!
//! Compile-time constants for the demodulator, the tuner and the TS
//! pipeline are centralized here, together with [`DemodConfig`], the
//! per-board runtime configuration handed to [`crate::Isdbt::new`].

use crate::calc::clock_calc;
use crate::error::{Error, Result};
use crate::types::{Bandwidth, Topology};

/// MPEG transport stream packet size in bytes
pub const TS_PACKET_SIZE: usize = 188;

/// Per-consumer ring capacity for hosts with memory to spare (1024 packets)
///
/// About 190 KB: several seconds of one-segment TS, roughly 70 ms of a
/// full-rate 13-segment multiplex.
pub const TS_RING_CAPACITY: usize = TS_PACKET_SIZE * 1024;

/// Per-consumer ring capacity on the STM32G474 target (96 packets)
///
/// The part has 128 KB of SRAM, so four rings of [`TS_RING_CAPACITY`] do not
/// fit. Four 18 KB rings plus the burst buffer leave room for the executor
/// and stacks; at 13-segment rates the reader must drain within a few
/// milliseconds or the oldest packets are dropped.
pub const TARGET_RING_CAPACITY: usize = TS_PACKET_SIZE * 96;

/// Maximum number of simultaneously open handles
pub const MAX_CONSUMERS: usize = 4;

/// Default number of packets moved per data-ready interrupt
pub const DEFAULT_TS_BURST_PACKETS: usize = 16;

/// Upper bound on packets per data-ready interrupt
pub const MAX_TS_BURST_PACKETS: usize = 64;

/// Demodulator 7-bit I2C base address (unit id is added)
pub const DEMOD_I2C_ADDR: u8 = 0x58;

/// I2C bus frequency for the demodulator host interface
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Default reference crystal in kHz
pub const DEFAULT_XTAL_KHZ: u32 = 26_000;

/// Chip id reported by every demodulator unit
pub const CHIP_ID: u16 = 0x8300;

/// Guard band added to the occupied half-width when testing for clock
/// harmonics inside the channel, in kHz
pub const SPUR_GUARD_KHZ: u32 = 500;

/// Reset pulse width in milliseconds
pub const RESET_PULSE_MS: u32 = 1;

/// Core clock PLL settle time in milliseconds
pub const CLOCK_SETTLE_MS: u32 = 1;

/// Acquisition phase budgets, in 1 ms polling ticks
pub mod budget {
    //! Tick budgets for each acquisition phase

    /// RF signal presence
    pub const RF_DETECT: u32 = 70;

    /// OFDM mode/guard detection
    pub const OFDM_DETECT: u32 = 160;

    /// Frame synchronization
    pub const FRAME_SYNC: u32 = 100;

    /// Carrier synchronization
    pub const CARRIER_SYNC: u32 = 120;

    /// TMCC decode lock
    pub const TMCC_LOCK: u32 = 1050;

    /// Error-free confirmation for the fast (mode 3) pattern
    pub const ERROR_FREE_FAST: u32 = 700;

    /// Error-free confirmation otherwise
    pub const ERROR_FREE_SLOW: u32 = 950;
}

/// Tuner synthesizer timing
pub mod tuner {
    //! Tuner PLL lock and VCO calibration limits

    /// Lock-detect polls per attempt
    pub const LOCK_POLLS: u32 = 4;

    /// Done-bit polls per VCO calibration row
    pub const VCO_CAL_POLLS: u32 = 10;

    /// VCO calibration rows tried from the current bank
    pub const VCO_CAL_ROWS: usize = 4;

    /// VCO frequency above which the bank hysteresis fix-up applies, kHz
    pub const VCO_HYSTERESIS_KHZ: u32 = 6_200_000;
}

/// Pin assignments for the embedded target
pub mod pins {
    //! GPIO pin assignments matching the schematic

    /// I2C1 SCL (demodulator host interface)
    pub const I2C1_SCL: &str = "PB8";

    /// I2C1 SDA (demodulator host interface)
    pub const I2C1_SDA: &str = "PB9";

    /// Demodulator data-ready interrupt (active high)
    pub const DEMOD_IRQ: &str = "PC13";

    /// Status LED
    pub const LED_STATUS: &str = "PA5";
}

/// Board configuration for one demodulator instance
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemodConfig {
    xtal_khz: u32,
    bandwidth: Bandwidth,
    topology: Topology,
    ts_burst_packets: usize,
}

impl DemodConfig {
    /// Build a configuration, rejecting unsupported crystals and burst sizes
    pub fn new(
        xtal_khz: u32,
        bandwidth: Bandwidth,
        topology: Topology,
        ts_burst_packets: usize,
    ) -> Result<Self> {
        if !clock_calc::is_supported_crystal(xtal_khz) {
            return Err(Error::UnsupportedCrystal);
        }
        if ts_burst_packets == 0 || ts_burst_packets > MAX_TS_BURST_PACKETS {
            return Err(Error::InvalidConfig);
        }
        Ok(Self {
            xtal_khz,
            bandwidth,
            topology,
            ts_burst_packets,
        })
    }

    /// Reference crystal in kHz
    #[must_use]
    pub const fn xtal_khz(&self) -> u32 {
        self.xtal_khz
    }

    /// Channel bandwidth
    #[must_use]
    pub const fn bandwidth(&self) -> Bandwidth {
        self.bandwidth
    }

    /// Diversity topology
    #[must_use]
    pub const fn topology(&self) -> Topology {
        self.topology
    }

    /// Packets read per data-ready interrupt
    #[must_use]
    pub const fn ts_burst_packets(&self) -> usize {
        self.ts_burst_packets
    }

    /// Bytes read per data-ready interrupt
    #[must_use]
    pub const fn ts_burst_bytes(&self) -> usize {
        self.ts_burst_packets * TS_PACKET_SIZE
    }
}

impl Default for DemodConfig {
    fn default() -> Self {
        Self {
            xtal_khz: DEFAULT_XTAL_KHZ,
            bandwidth: Bandwidth::Mhz6,
            topology: Topology::Single,
            ts_burst_packets: DEFAULT_TS_BURST_PACKETS,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for DemodConfig {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "xtal={}kHz bw={} topo={} burst={}",
            self.xtal_khz,
            self.bandwidth,
            self.topology,
            self.ts_burst_packets
        );
    }
}
