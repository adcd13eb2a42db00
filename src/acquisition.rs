//! Signal Acquisition
//!
//! One tuning attempt walks six strictly ordered phases, each with its own
//! budget of 1 ms polling ticks:
//!
//! ```text
//! RF detect → OFDM detect → frame sync → carrier sync → TMCC lock → error-free
//!    70           160          100           120           1050      700 / 950
//! ```
//!
//! Every tick polls the active diversity branches in fixed order (master,
//! slave0, slave1, slave2) and then sleeps one tick. The first branch that
//! satisfies a phase ends it. OFDM detect and carrier sync can also fail
//! early: a branch flagging a failed detection aborts the whole attempt at
//! once instead of waiting out the budget.
//!
//! The attempt is cooperative polling on the injected delay; it holds the
//! register transport for its whole duration.

use embedded_hal_async::delay::DelayNs;
use heapless::Vec;

use crate::config::budget;
use crate::drivers::demod::reg;
use crate::error::{Error, Result};
use crate::hal::bus::{Io, RegisterBus};
use crate::types::{BroadcastMode, DeviceSelector, Topology};

/// Status value read back from a unit that is not answering
pub const NOT_RESPONDING: u8 = 0xFF;

/// Acquisition phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    /// RF signal presence
    RfDetect,
    /// OFDM mode detection
    OfdmDetect,
    /// Frame / FFT synchronization
    FrameSync,
    /// Carrier synchronization
    CarrierSync,
    /// TMCC decode and frame information
    TmccLock,
    /// Error-free confirmation
    ErrorFree,
}

impl Phase {
    /// All phases in execution order
    pub const ALL: [Self; 6] = [
        Self::RfDetect,
        Self::OfdmDetect,
        Self::FrameSync,
        Self::CarrierSync,
        Self::TmccLock,
        Self::ErrorFree,
    ];

    /// Tick budget (the slow window for [`Phase::ErrorFree`])
    #[must_use]
    pub const fn budget(self) -> u32 {
        match self {
            Self::RfDetect => budget::RF_DETECT,
            Self::OfdmDetect => budget::OFDM_DETECT,
            Self::FrameSync => budget::FRAME_SYNC,
            Self::CarrierSync => budget::CARRIER_SYNC,
            Self::TmccLock => budget::TMCC_LOCK,
            Self::ErrorFree => budget::ERROR_FREE_SLOW,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Phase {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::RfDetect => defmt::write!(f, "RF detect"),
            Self::OfdmDetect => defmt::write!(f, "OFDM detect"),
            Self::FrameSync => defmt::write!(f, "frame sync"),
            Self::CarrierSync => defmt::write!(f, "carrier sync"),
            Self::TmccLock => defmt::write!(f, "TMCC lock"),
            Self::ErrorFree => defmt::write!(f, "error-free"),
        }
    }
}

/// Status bit masks; single and diversity builds report differently
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TopologyMasks {
    /// AGC status: RF present
    pub rf_present: u8,
    /// OFDM status: detection finished
    pub ofdm_done: u8,
    /// OFDM status: detection failed
    pub ofdm_fail: u8,
    /// Sync status: every bit required for frame lock
    pub sync_lock: u8,
    /// Carrier status: synchronization finished
    pub carrier_done: u8,
    /// Carrier status: bad carrier
    pub carrier_bad: u8,
    /// TMCC status: decoder locked
    pub tmcc_lock: u8,
    /// Position of the frame information inside the TMCC info register
    pub info_shift: u8,
}

impl TopologyMasks {
    /// Single demodulator
    pub const SINGLE: Self = Self {
        rf_present: 0x01,
        ofdm_done: 0x01,
        ofdm_fail: 0x02,
        sync_lock: 0x03,
        carrier_done: 0x01,
        carrier_bad: 0x02,
        tmcc_lock: 0x01,
        info_shift: 0,
    };

    /// 2-way and 4-way diversity; frame lock also needs the combiner lock
    /// and frame information sits in the upper half of a long register
    pub const DIVERSITY: Self = Self {
        rf_present: 0x01,
        ofdm_done: 0x01,
        ofdm_fail: 0x02,
        sync_lock: 0x0B,
        carrier_done: 0x01,
        carrier_bad: 0x02,
        tmcc_lock: 0x01,
        info_shift: 16,
    };

    /// Masks for a topology
    #[must_use]
    pub const fn for_topology(topology: Topology) -> Self {
        if topology.is_diversity() {
            Self::DIVERSITY
        } else {
            Self::SINGLE
        }
    }
}

/// TMCC frame information
///
/// Bits 1:0 hold the transmission mode (1 to 3), bits 3:2 the guard
/// interval and bit 4 the partial-reception flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameInfo(u16);

impl FrameInfo {
    /// Partial reception flag
    pub const PARTIAL_RECEPTION: u16 = 1 << 4;

    /// Transmission mode field
    pub const MODE_MASK: u16 = 0x0003;

    /// Guard interval field
    pub const GUARD_MASK: u16 = 0x000C;

    /// Wrap a normalized frame information word
    #[must_use]
    pub const fn new(bits: u16) -> Self {
        Self(bits)
    }

    /// Extract the frame information from a raw TMCC info read
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_raw(raw: u32, masks: &TopologyMasks) -> Self {
        Self((raw >> masks.info_shift) as u16)
    }

    /// Raw bits
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Transmission mode (1, 2 or 3; 0 if undecoded)
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn mode(self) -> u8 {
        (self.0 & Self::MODE_MASK) as u8
    }

    /// Partial-reception segment present
    #[must_use]
    pub const fn partial_reception(self) -> bool {
        self.0 & Self::PARTIAL_RECEPTION != 0
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for FrameInfo {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "FrameInfo({=u16:#x})", self.0);
    }
}

/// Result of a successful acquisition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LockReport {
    /// Branch whose frame information was used
    pub branch: DeviceSelector,
    /// Frame information read in the TMCC phase
    pub frame_info: FrameInfo,
}

/// Frame information bits that qualify a broadcast mode for the fast
/// error-free window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FastWindowPattern {
    /// Bits compared
    pub mask: u16,
    /// Required value of the compared bits
    pub value: u16,
}

impl FastWindowPattern {
    /// Pattern for a broadcast mode
    ///
    /// | Mode                      | Fast when                           |
    /// |---------------------------|-------------------------------------|
    /// | 1-seg, Tmm 1-seg          | mode 3 with partial reception       |
    /// | Tsb 1-seg, Tsb 3-seg      | mode 3                              |
    /// | 13-seg, Tmm 13-seg        | mode 3                              |
    /// | CATV, CATV-VHF            | mode 3 with 1/32 guard interval     |
    #[must_use]
    pub const fn for_mode(mode: BroadcastMode) -> Self {
        match mode {
            BroadcastMode::Isdbt1Seg | BroadcastMode::IsdbtMm1Seg => Self {
                mask: FrameInfo::MODE_MASK | FrameInfo::PARTIAL_RECEPTION,
                value: 0x0003 | FrameInfo::PARTIAL_RECEPTION,
            },
            BroadcastMode::IsdbtSb1Seg
            | BroadcastMode::IsdbtSb3Seg
            | BroadcastMode::Isdbt13Seg
            | BroadcastMode::IsdbtMm13Seg => Self {
                mask: FrameInfo::MODE_MASK,
                value: 0x0003,
            },
            BroadcastMode::IsdbtCatv13Seg | BroadcastMode::IsdbtCatvVhf13Seg => Self {
                mask: FrameInfo::MODE_MASK | FrameInfo::GUARD_MASK,
                value: 0x0003,
            },
        }
    }

    /// Check the pattern against frame information
    #[must_use]
    pub const fn matches(self, info: FrameInfo) -> bool {
        info.bits() & self.mask == self.value
    }
}

/// Choose the error-free window for a broadcast mode and frame information
///
/// Partial-reception modes abort when the TMCC does not flag the
/// partial-reception layer.
pub fn error_free_budget(mode: BroadcastMode, info: FrameInfo) -> Result<u32> {
    if mode.requires_partial_reception() && !info.partial_reception() {
        return Err(Error::HardAbort(Phase::ErrorFree));
    }
    if FastWindowPattern::for_mode(mode).matches(info) {
        Ok(budget::ERROR_FREE_FAST)
    } else {
        Ok(budget::ERROR_FREE_SLOW)
    }
}

/// One acquisition attempt over a topology
pub struct Acquisition<'a, B, D> {
    io: &'a mut Io<B, D>,
    topology: Topology,
    masks: TopologyMasks,
    mode: BroadcastMode,
}

impl<'a, B: RegisterBus, D: DelayNs> Acquisition<'a, B, D> {
    /// Prepare an attempt
    pub fn new(io: &'a mut Io<B, D>, topology: Topology, mode: BroadcastMode) -> Self {
        Self {
            io,
            topology,
            masks: TopologyMasks::for_topology(topology),
            mode,
        }
    }

    /// Run every phase in order
    pub async fn run(&mut self) -> Result<LockReport> {
        let masks = self.masks;

        let branch = self
            .wait_any(Phase::RfDetect, reg::AGC_STATUS, masks.rf_present, Phase::RfDetect.budget())
            .await?;
        trace!("RF present on {:?}", branch);

        self.wait_done(
            Phase::OfdmDetect,
            reg::OFDM_STATUS,
            masks.ofdm_done,
            masks.ofdm_fail,
        )
        .await?;

        self.wait_any(Phase::FrameSync, reg::SYNC_STATUS, masks.sync_lock, Phase::FrameSync.budget())
            .await?;

        self.wait_done(
            Phase::CarrierSync,
            reg::CARRIER_STATUS,
            masks.carrier_done,
            masks.carrier_bad,
        )
        .await?;

        let branch = self
            .wait_any(Phase::TmccLock, reg::TMCC_STATUS, masks.tmcc_lock, Phase::TmccLock.budget())
            .await?;
        let frame_info = self.read_frame_info(branch).await?;
        debug!("TMCC lock on {:?}, info {:?}", branch, frame_info.bits());

        let window = error_free_budget(self.mode, frame_info)?;
        self.wait_error_free(window).await?;

        Ok(LockReport { branch, frame_info })
    }

    /// Poll until any branch shows every bit of `mask`
    async fn wait_any(
        &mut self,
        phase: Phase,
        addr: u16,
        mask: u8,
        ticks: u32,
    ) -> Result<DeviceSelector> {
        for _ in 0..ticks {
            for &branch in self.topology.branches() {
                let status = self.io.read_byte(branch, addr).await?;
                if status != NOT_RESPONDING && status & mask == mask {
                    return Ok(branch);
                }
            }
            self.io.wait_ms(1).await;
        }
        Err(Error::LockTimeout(phase))
    }

    /// Poll until a branch reports done; a failure bit aborts at once and a
    /// silent branch drops out
    async fn wait_done(&mut self, phase: Phase, addr: u16, done: u8, fail: u8) -> Result<()> {
        let mut active: Vec<DeviceSelector, 4> = Vec::new();
        for &branch in self.topology.branches() {
            let _ = active.push(branch);
        }

        for _ in 0..phase.budget() {
            let mut i = 0;
            while i < active.len() {
                let branch = active[i];
                let status = self.io.read_byte(branch, addr).await?;
                if status == NOT_RESPONDING {
                    warn!("{:?} not responding, dropping", branch);
                    active.remove(i);
                    continue;
                }
                if status & fail != 0 {
                    error!("{:?} failed on {:?}", phase, branch);
                    return Err(Error::HardAbort(phase));
                }
                if status & done != 0 {
                    return Ok(());
                }
                i += 1;
            }
            if active.is_empty() {
                return Err(Error::HardAbort(phase));
            }
            self.io.wait_ms(1).await;
        }
        Err(Error::LockTimeout(phase))
    }

    async fn read_frame_info(&mut self, branch: DeviceSelector) -> Result<FrameInfo> {
        let raw = if self.topology.is_diversity() {
            self.io.read_long(branch, reg::TMCC_INFO).await?
        } else {
            u32::from(self.io.read_word(branch, reg::TMCC_INFO).await?)
        };
        Ok(FrameInfo::from_raw(raw, &self.masks))
    }

    /// Poll the master's packet error counter until a measurement completes
    async fn wait_error_free(&mut self, ticks: u32) -> Result<()> {
        for _ in 0..ticks {
            if self.io.read_word(DeviceSelector::Master, reg::PER_COUNT).await? != 0 {
                return Ok(());
            }
            self.io.wait_ms(1).await;
        }
        Err(Error::LockTimeout(Phase::ErrorFree))
    }
}
