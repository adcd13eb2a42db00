//! Filter Calibration Selection
//!
//! The adjacent-channel filter needs coefficients matched to the core clock
//! actually programmed. Lookup is exact on (bandwidth, clock, class); there is
//! no interpolation, and a clock without an entry fails closed rather than
//! running with mismatched coefficients.

pub mod table;

use embedded_hal_async::delay::DelayNs;

use crate::error::{Error, Result};
use crate::hal::bus::{Io, RegisterBus};
use crate::types::{Bandwidth, DeviceSelector, SegmentClass};

pub use table::CALIBRATION_TABLE;

/// First coefficient register of the adjacent-channel filter
pub const ACI_COEFF_BASE: u16 = 0x2000;

/// Coefficients for one operating point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalibrationEntry {
    /// Channel bandwidth
    pub bandwidth: Bandwidth,
    /// Core clock in kHz
    pub clock_khz: u32,
    /// Segment class
    pub class: SegmentClass,
    /// Filter coefficients, written in order from [`ACI_COEFF_BASE`]
    pub coefficients: [u8; 6],
}

impl CalibrationEntry {
    /// Check whether this entry serves an operating point
    #[must_use]
    pub fn matches(&self, bandwidth: Bandwidth, clock_khz: u32, class: SegmentClass) -> bool {
        self.bandwidth == bandwidth && self.clock_khz == clock_khz && self.class == class
    }
}

/// Find the entry for an operating point
pub fn select_calibration(
    bandwidth: Bandwidth,
    clock_khz: u32,
    class: SegmentClass,
) -> Result<&'static CalibrationEntry> {
    CALIBRATION_TABLE
        .iter()
        .find(|entry| entry.matches(bandwidth, clock_khz, class))
        .ok_or_else(|| {
            warn!("no calibration for {} kHz", clock_khz);
            Error::CalibrationMiss
        })
}

/// Write an entry's coefficients as one burst
pub async fn apply_calibration<B: RegisterBus, D: DelayNs>(
    io: &mut Io<B, D>,
    selector: DeviceSelector,
    entry: &CalibrationEntry,
) -> Result<()> {
    trace!("calibration for {} kHz", entry.clock_khz);
    io.write_burst(selector, ACI_COEFF_BASE, &entry.coefficients)
        .await
}
