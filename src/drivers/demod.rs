//! Demodulator Baseband Driver
//!
//! Reset, identification, core clock and TS interface programming for the
//! demodulator units. Every function takes the unit to address explicitly;
//! diversity builds call them once per branch or with
//! [`DeviceSelector::Broadcast`].

use embedded_hal_async::delay::DelayNs;

use crate::calc::clock_calc::ClockPlan;
use crate::config::{CLOCK_SETTLE_MS, RESET_PULSE_MS};
use crate::error::Result;
use crate::hal::bus::{Io, RegisterBus};
use crate::types::{BroadcastMode, DeviceSelector};

/// Baseband register addresses
pub mod reg {
    /// Soft reset (0x7F holds every block in reset)
    pub const SYS_RESET: u16 = 0x0000;
    /// Chip identification (word)
    pub const CHIP_ID: u16 = 0x0026;
    /// Broadcast mode select
    pub const BROADCAST_MODE: u16 = 0x0030;
    /// Core clock PLL reset
    pub const PLL_RESET: u16 = 0x1000;
    /// Core clock PLL divider (word)
    pub const PLL_DIVIDER: u16 = 0x1002;
    /// AGC / RF presence status
    pub const AGC_STATUS: u16 = 0x3010;
    /// OFDM mode detection status
    pub const OFDM_STATUS: u16 = 0x3020;
    /// Frame synchronization status
    pub const SYNC_STATUS: u16 = 0x3025;
    /// Carrier synchronization status
    pub const CARRIER_STATUS: u16 = 0x3030;
    /// TMCC decoder status
    pub const TMCC_STATUS: u16 = 0x3040;
    /// TMCC frame information (word, long on diversity builds)
    pub const TMCC_INFO: u16 = 0x3044;
    /// TS output control
    pub const TS_OUTPUT_CTRL: u16 = 0x5000;
    /// Packet error counter (word)
    pub const PER_COUNT: u16 = 0x5004;
    /// Interrupt enable
    pub const INT_ENABLE: u16 = 0x5010;
    /// Interrupt status
    pub const INT_STATUS: u16 = 0x5011;
    /// Interrupt clear
    pub const INT_CLEAR: u16 = 0x5012;
    /// TS data FIFO (burst read)
    pub const TS_DATA: u16 = 0x8000;
}

/// Reset register value holding every block in reset
pub const RESET_ASSERT: u8 = 0x7F;

/// Reset register value releasing every block
pub const RESET_RELEASE: u8 = 0x00;

/// TS-ready interrupt source
pub const INT_TS_READY: u8 = 0x01;

/// TS output: serial off, parallel on, sync byte kept, error packets flagged
pub const TS_OUTPUT_DEFAULT: u8 = 0x0D;

/// Pulse the reset register: assert, hold, release
pub async fn reset_pulse<B: RegisterBus, D: DelayNs>(
    io: &mut Io<B, D>,
    selector: DeviceSelector,
) -> Result<()> {
    io.write_byte(selector, reg::SYS_RESET, RESET_ASSERT).await?;
    io.wait_ms(RESET_PULSE_MS).await;
    io.write_byte(selector, reg::SYS_RESET, RESET_RELEASE).await
}

/// Hold the unit in reset
pub async fn hold_reset<B: RegisterBus, D: DelayNs>(
    io: &mut Io<B, D>,
    selector: DeviceSelector,
) -> Result<()> {
    io.write_byte(selector, reg::SYS_RESET, RESET_ASSERT).await
}

/// Read the chip identification word
pub async fn read_chip_id<B: RegisterBus, D: DelayNs>(
    io: &mut Io<B, D>,
    selector: DeviceSelector,
) -> Result<u16> {
    io.read_word(selector, reg::CHIP_ID).await
}

/// Program the core clock PLL and wait for it to settle
pub async fn apply_clock<B: RegisterBus, D: DelayNs>(
    io: &mut Io<B, D>,
    selector: DeviceSelector,
    plan: &ClockPlan,
) -> Result<()> {
    io.write_byte(selector, reg::PLL_RESET, 0x01).await?;
    io.write_word(selector, reg::PLL_DIVIDER, plan.divider_word())
        .await?;
    io.write_byte(selector, reg::PLL_RESET, 0x00).await?;
    io.wait_ms(CLOCK_SETTLE_MS).await;
    Ok(())
}

/// Select the broadcast mode
pub async fn set_broadcast_mode<B: RegisterBus, D: DelayNs>(
    io: &mut Io<B, D>,
    selector: DeviceSelector,
    mode: BroadcastMode,
) -> Result<()> {
    io.write_byte(selector, reg::BROADCAST_MODE, mode.register_value())
        .await
}

/// Program the TS output interface with interrupts masked
pub async fn configure_ts_output<B: RegisterBus, D: DelayNs>(
    io: &mut Io<B, D>,
    selector: DeviceSelector,
) -> Result<()> {
    io.write_byte(selector, reg::TS_OUTPUT_CTRL, TS_OUTPUT_DEFAULT)
        .await?;
    io.write_byte(selector, reg::INT_ENABLE, 0x00).await
}

/// Arm or mask the TS-ready interrupt
pub async fn enable_ts_interrupt<B: RegisterBus, D: DelayNs>(
    io: &mut Io<B, D>,
    selector: DeviceSelector,
    enable: bool,
) -> Result<()> {
    let value = if enable { INT_TS_READY } else { 0x00 };
    io.write_byte(selector, reg::INT_ENABLE, value).await
}

/// Read the pending interrupt sources
pub async fn read_int_status<B: RegisterBus, D: DelayNs>(
    io: &mut Io<B, D>,
    selector: DeviceSelector,
) -> Result<u8> {
    io.read_byte(selector, reg::INT_STATUS).await
}

/// Acknowledge interrupt sources
pub async fn clear_int<B: RegisterBus, D: DelayNs>(
    io: &mut Io<B, D>,
    selector: DeviceSelector,
    sources: u8,
) -> Result<()> {
    io.write_byte(selector, reg::INT_CLEAR, sources).await
}

/// Drain TS packets from the output FIFO
pub async fn read_ts<B: RegisterBus, D: DelayNs>(
    io: &mut Io<B, D>,
    selector: DeviceSelector,
    buf: &mut [u8],
) -> Result<()> {
    io.read_burst(selector, reg::TS_DATA, buf).await
}
