//! Error type shared by every operation of the front end
//!
//! All fallible operations return [`Result`]. A failure from a multi-step
//! register sequence leaves whatever was already written in place; callers
//! re-tune from scratch instead of resuming.

use core::fmt;

use crate::acquisition::Phase;
use crate::hal::bus::BusError;

/// Result alias used across the crate
pub type Result<T> = core::result::Result<T, Error>;

/// Front-end error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Register I/O failed
    Transport(BusError),
    /// No calibration entry for the computed clock
    CalibrationMiss,
    /// Reconstructed clock or VCO does not match the target
    SynthesisMismatch,
    /// Tuner PLL did not lock after its retry
    PllUnlocked,
    /// An acquisition phase ran out of ticks
    LockTimeout(Phase),
    /// An acquisition phase saw a definitively bad status
    HardAbort(Phase),
    /// Non-blocking read found no data
    WouldBlock,
    /// Blocking read was interrupted before data arrived
    Interrupted,
    /// Crystal frequency not in the clock table
    UnsupportedCrystal,
    /// RF frequency outside the tuner range
    FrequencyOutOfRange,
    /// Sub-channel outside 0..=41
    InvalidSubChannel,
    /// Board configuration rejected
    InvalidConfig,
    /// Chip id register did not identify the demodulator
    ChipIdMismatch,
    /// No tuner has been selected
    NoTuner,
    /// No broadcast mode has been set
    NoBroadcastMode,
    /// Operation not valid in the current device mode
    InvalidState,
    /// Handle is not open
    InvalidHandle,
    /// Consumer table is full
    NoFreeHandle,
}

impl Error {
    /// Acquisition phase the error belongs to, if any
    #[must_use]
    pub const fn phase(self) -> Option<Phase> {
        match self {
            Self::LockTimeout(phase) | Self::HardAbort(phase) => Some(phase),
            _ => None,
        }
    }
}

impl From<BusError> for Error {
    fn from(err: BusError) -> Self {
        Self::Transport(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "register transport failed: {err}"),
            Self::CalibrationMiss => f.write_str("no calibration entry for clock"),
            Self::SynthesisMismatch => f.write_str("synthesized frequency does not match target"),
            Self::PllUnlocked => f.write_str("tuner PLL failed to lock"),
            Self::LockTimeout(phase) => write!(f, "{phase:?} timed out"),
            Self::HardAbort(phase) => write!(f, "{phase:?} aborted on bad status"),
            Self::WouldBlock => f.write_str("no data available"),
            Self::Interrupted => f.write_str("read interrupted"),
            Self::UnsupportedCrystal => f.write_str("unsupported crystal frequency"),
            Self::FrequencyOutOfRange => f.write_str("frequency out of range"),
            Self::InvalidSubChannel => f.write_str("invalid sub-channel"),
            Self::InvalidConfig => f.write_str("invalid configuration"),
            Self::ChipIdMismatch => f.write_str("chip id mismatch"),
            Self::NoTuner => f.write_str("no tuner selected"),
            Self::NoBroadcastMode => f.write_str("no broadcast mode set"),
            Self::InvalidState => f.write_str("invalid device state"),
            Self::InvalidHandle => f.write_str("invalid handle"),
            Self::NoFreeHandle => f.write_str("too many open handles"),
        }
    }
}

#[cfg(all(feature = "std", not(feature = "embedded")))]
impl std::error::Error for Error {}

#[cfg(feature = "embedded")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Transport(err) => defmt::write!(f, "Transport({})", err),
            Self::CalibrationMiss => defmt::write!(f, "CalibrationMiss"),
            Self::SynthesisMismatch => defmt::write!(f, "SynthesisMismatch"),
            Self::PllUnlocked => defmt::write!(f, "PllUnlocked"),
            Self::LockTimeout(phase) => defmt::write!(f, "LockTimeout({})", phase),
            Self::HardAbort(phase) => defmt::write!(f, "HardAbort({})", phase),
            Self::WouldBlock => defmt::write!(f, "WouldBlock"),
            Self::Interrupted => defmt::write!(f, "Interrupted"),
            Self::UnsupportedCrystal => defmt::write!(f, "UnsupportedCrystal"),
            Self::FrequencyOutOfRange => defmt::write!(f, "FrequencyOutOfRange"),
            Self::InvalidSubChannel => defmt::write!(f, "InvalidSubChannel"),
            Self::InvalidConfig => defmt::write!(f, "InvalidConfig"),
            Self::ChipIdMismatch => defmt::write!(f, "ChipIdMismatch"),
            Self::NoTuner => defmt::write!(f, "NoTuner"),
            Self::NoBroadcastMode => defmt::write!(f, "NoBroadcastMode"),
            Self::InvalidState => defmt::write!(f, "InvalidState"),
            Self::InvalidHandle => defmt::write!(f, "InvalidHandle"),
            Self::NoFreeHandle => defmt::write!(f, "NoFreeHandle"),
        }
    }
}
