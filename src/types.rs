//! Shared types used across the ISDB-T front end
//!
//! This module defines domain-specific types that enforce invariants
//! at construction and provide type safety throughout the codebase.

use core::fmt;

/// RF centre frequency in kHz with validation
///
/// Represents a channel centre inside the tuner's supported range
/// (VHF-low through the top of UHF).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RfFrequency(u32);

impl RfFrequency {
    /// Minimum supported frequency (76 MHz)
    pub const MIN_KHZ: u32 = 76_000;

    /// Maximum supported frequency (806 MHz)
    pub const MAX_KHZ: u32 = 806_000;

    /// Create a new frequency from kHz, returns None if out of range
    #[must_use]
    pub const fn from_khz(khz: u32) -> Option<Self> {
        if khz >= Self::MIN_KHZ && khz <= Self::MAX_KHZ {
            Some(Self(khz))
        } else {
            None
        }
    }

    /// Get the frequency in kHz
    #[must_use]
    pub const fn as_khz(self) -> u32 {
        self.0
    }

    /// Apply a signed offset in kHz, staying inside the supported range
    #[must_use]
    pub fn offset_by(self, delta_khz: i32) -> Option<Self> {
        let khz = i64::from(self.0) + i64::from(delta_khz);
        u32::try_from(khz).ok().and_then(Self::from_khz)
    }
}

impl fmt::Debug for RfFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RfFrequency({} kHz)", self.0)
    }
}

impl fmt::Display for RfFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kHz", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for RfFrequency {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} kHz", self.0);
    }
}

/// Channel bandwidth
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Bandwidth {
    /// 6 MHz channel (Japan, South America)
    #[default]
    Mhz6,
    /// 7 MHz channel
    Mhz7,
    /// 8 MHz channel
    Mhz8,
}

impl Bandwidth {
    /// Channel width in kHz
    #[must_use]
    pub const fn as_khz(self) -> u32 {
        match self {
            Self::Mhz6 => 6_000,
            Self::Mhz7 => 7_000,
            Self::Mhz8 => 8_000,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Bandwidth {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Mhz6 => defmt::write!(f, "6MHz"),
            Self::Mhz7 => defmt::write!(f, "7MHz"),
            Self::Mhz8 => defmt::write!(f, "8MHz"),
        }
    }
}

/// Broadcast mode of a tuning session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BroadcastMode {
    /// ISDB-T partial reception (one segment)
    Isdbt1Seg,
    /// ISDB-Tmm mobile multimedia, one segment
    IsdbtMm1Seg,
    /// ISDB-Tsb sound broadcast, one segment
    IsdbtSb1Seg,
    /// ISDB-Tsb sound broadcast, three segments
    IsdbtSb3Seg,
    /// ISDB-T full segment
    #[default]
    Isdbt13Seg,
    /// ISDB-Tmm mobile multimedia, thirteen segments
    IsdbtMm13Seg,
    /// ISDB-T over UHF cable
    IsdbtCatv13Seg,
    /// ISDB-T over VHF cable
    IsdbtCatvVhf13Seg,
}

impl BroadcastMode {
    /// All modes, in register encoding order
    pub const ALL: [Self; 8] = [
        Self::Isdbt1Seg,
        Self::IsdbtMm1Seg,
        Self::IsdbtSb1Seg,
        Self::IsdbtSb3Seg,
        Self::Isdbt13Seg,
        Self::IsdbtMm13Seg,
        Self::IsdbtCatv13Seg,
        Self::IsdbtCatvVhf13Seg,
    ];

    /// Calibration / filter class for this mode
    #[must_use]
    pub const fn segment_class(self) -> SegmentClass {
        match self {
            Self::Isdbt1Seg => SegmentClass::OneSegA,
            Self::IsdbtMm1Seg | Self::IsdbtSb1Seg => SegmentClass::OneSegB,
            Self::IsdbtSb3Seg => SegmentClass::ThreeSeg,
            Self::Isdbt13Seg
            | Self::IsdbtMm13Seg
            | Self::IsdbtCatv13Seg
            | Self::IsdbtCatvVhf13Seg => SegmentClass::FullSeg,
        }
    }

    /// Sound-broadcast modes address a sub-channel inside the RF channel
    #[must_use]
    pub const fn uses_sub_channel(self) -> bool {
        matches!(self, Self::IsdbtSb1Seg | Self::IsdbtSb3Seg)
    }

    /// One-segment reception of a partial-reception layer; the TMCC frame
    /// information must flag that layer as present
    #[must_use]
    pub const fn requires_partial_reception(self) -> bool {
        matches!(self, Self::Isdbt1Seg | Self::IsdbtMm1Seg)
    }

    /// Value written to the demodulator's broadcast mode register
    #[must_use]
    pub const fn register_value(self) -> u8 {
        match self {
            Self::Isdbt1Seg => 0,
            Self::IsdbtMm1Seg => 1,
            Self::IsdbtSb1Seg => 2,
            Self::IsdbtSb3Seg => 3,
            Self::Isdbt13Seg => 4,
            Self::IsdbtMm13Seg => 5,
            Self::IsdbtCatv13Seg => 6,
            Self::IsdbtCatvVhf13Seg => 7,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for BroadcastMode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Isdbt1Seg => defmt::write!(f, "ISDB-T 1seg"),
            Self::IsdbtMm1Seg => defmt::write!(f, "ISDB-Tmm 1seg"),
            Self::IsdbtSb1Seg => defmt::write!(f, "ISDB-Tsb 1seg"),
            Self::IsdbtSb3Seg => defmt::write!(f, "ISDB-Tsb 3seg"),
            Self::Isdbt13Seg => defmt::write!(f, "ISDB-T 13seg"),
            Self::IsdbtMm13Seg => defmt::write!(f, "ISDB-Tmm 13seg"),
            Self::IsdbtCatv13Seg => defmt::write!(f, "CATV 13seg"),
            Self::IsdbtCatvVhf13Seg => defmt::write!(f, "CATV-VHF 13seg"),
        }
    }
}

/// Segment class used to key calibration data
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentClass {
    /// ISDB-T one-segment partial reception
    OneSegA,
    /// Mobile / sound-broadcast one-segment
    OneSegB,
    /// Three-segment sound broadcast
    ThreeSeg,
    /// Thirteen segments
    FullSeg,
}

impl SegmentClass {
    /// Number of OFDM segments occupied
    #[must_use]
    pub const fn segments(self) -> u32 {
        match self {
            Self::OneSegA | Self::OneSegB => 1,
            Self::ThreeSeg => 3,
            Self::FullSeg => 13,
        }
    }

    /// One-segment classes carry the partial-reception flag in TMCC
    #[must_use]
    pub const fn is_one_segment(self) -> bool {
        matches!(self, Self::OneSegA | Self::OneSegB)
    }

    /// Half of the occupied bandwidth in kHz (14 segments per channel)
    #[must_use]
    pub const fn occupied_half_width_khz(self, bandwidth: Bandwidth) -> u32 {
        bandwidth.as_khz() * self.segments() / 14 / 2
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for SegmentClass {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::OneSegA => defmt::write!(f, "1seg-A"),
            Self::OneSegB => defmt::write!(f, "1seg-B"),
            Self::ThreeSeg => defmt::write!(f, "3seg"),
            Self::FullSeg => defmt::write!(f, "13seg"),
        }
    }
}

/// Physical demodulator unit a register access targets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum DeviceSelector {
    /// Primary demodulator
    #[default]
    Master,
    /// First diversity slave
    Slave0,
    /// Second diversity slave
    Slave1,
    /// Third diversity slave
    Slave2,
    /// All units at once (writes only)
    Broadcast,
}

impl DeviceSelector {
    /// Unit id on the host interface
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Master => 0,
            Self::Slave0 => 1,
            Self::Slave1 => 2,
            Self::Slave2 => 3,
            Self::Broadcast => 0x0F,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for DeviceSelector {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Master => defmt::write!(f, "master"),
            Self::Slave0 => defmt::write!(f, "slave0"),
            Self::Slave1 => defmt::write!(f, "slave1"),
            Self::Slave2 => defmt::write!(f, "slave2"),
            Self::Broadcast => defmt::write!(f, "broadcast"),
        }
    }
}

/// Diversity topology of the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Topology {
    /// One demodulator
    #[default]
    Single,
    /// Master plus one slave
    Dual,
    /// Master plus three slaves
    Quad,
}

impl Topology {
    /// Branches in polling order
    #[must_use]
    pub const fn branches(self) -> &'static [DeviceSelector] {
        match self {
            Self::Single => &[DeviceSelector::Master],
            Self::Dual => &[DeviceSelector::Master, DeviceSelector::Slave0],
            Self::Quad => &[
                DeviceSelector::Master,
                DeviceSelector::Slave0,
                DeviceSelector::Slave1,
                DeviceSelector::Slave2,
            ],
        }
    }

    /// Diversity builds combine several branches
    #[must_use]
    pub const fn is_diversity(self) -> bool {
        !matches!(self, Self::Single)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Topology {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Single => defmt::write!(f, "single"),
            Self::Dual => defmt::write!(f, "2-way"),
            Self::Quad => defmt::write!(f, "4-way"),
        }
    }
}

/// Outcome of one complete acquisition attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanResult {
    /// Every phase confirmed; TS data is valid
    Locked,
    /// Some phase failed; device state is unknown until re-tuned
    Failed,
}

impl ScanResult {
    /// Check for lock
    #[must_use]
    pub const fn is_locked(self) -> bool {
        matches!(self, Self::Locked)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ScanResult {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Locked => defmt::write!(f, "LOCKED"),
            Self::Failed => defmt::write!(f, "FAILED"),
        }
    }
}

/// Power / streaming state of a device instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeviceMode {
    /// Held in reset
    #[default]
    PoweredOff,
    /// Out of reset, not delivering TS data
    PoweredOn,
    /// Data-ready interrupt armed, worker drains TS data
    Streaming,
}

#[cfg(feature = "embedded")]
impl defmt::Format for DeviceMode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::PoweredOff => defmt::write!(f, "OFF"),
            Self::PoweredOn => defmt::write!(f, "ON"),
            Self::Streaming => defmt::write!(f, "STREAMING"),
        }
    }
}
