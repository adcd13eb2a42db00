//! Device Context and Control Plane
//!
//! [`Isdbt`] is one demodulator instance: its register transport, the
//! current broadcast mode and tuner, and the open consumer handles.
//!
//! Two locks guard it. The mode lock owns the transport, so every register
//! access (control calls and the TS worker alike) is serialized by it. The
//! buffer lock guards the consumer table. When both are needed the mode lock
//! is always taken first.
//!
//! ```text
//! PoweredOff ──power_on──▶ PoweredOn ──start_stream──▶ Streaming
//!     ▲                      │   ▲                        │
//!     └──────power_off───────┘   └──stop_stream / tune────┘
//! ```

mod streaming;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;
use embedded_hal_async::delay::DelayNs;

use crate::acquisition::{Acquisition, LockReport};
use crate::calc::clock_calc;
use crate::calibration;
use crate::config::{DemodConfig, CHIP_ID, MAX_CONSUMERS, MAX_TS_BURST_PACKETS, TS_PACKET_SIZE};
use crate::drivers::demod;
use crate::drivers::tuner::{ProductType, Tuner, TunerDriver};
use crate::error::{Error, Result};
use crate::hal::bus::{Io, RegisterBus};
use crate::stream::ConsumerList;
use crate::types::{BroadcastMode, DeviceMode, DeviceSelector, RfFrequency, ScanResult};

pub use crate::stream::{ConsumerKind, Handle};

/// Highest ISDB-Tsb sub-channel number
pub const MAX_SUB_CHANNEL: u8 = 41;

/// Sub-channel sitting on the RF channel centre
pub const CENTRE_SUB_CHANNEL: u8 = 22;

/// Frequency offset of an ISDB-Tsb sub-channel from the channel centre, kHz
///
/// Sub-channels are spaced 1/7 MHz apart.
pub fn sub_channel_offset_khz(sub_channel: u8) -> Result<i32> {
    if sub_channel > MAX_SUB_CHANNEL {
        return Err(Error::InvalidSubChannel);
    }
    Ok((i32::from(sub_channel) - i32::from(CENTRE_SUB_CHANNEL)) * 1000 / 7)
}

/// State guarded by the mode lock
struct Control<B, D> {
    io: Io<B, D>,
    config: DemodConfig,
    mode: DeviceMode,
    selector: DeviceSelector,
    broadcast: Option<BroadcastMode>,
    tuner: Option<TunerDriver>,
    clock_khz: Option<u32>,
    ts_buf: [u8; MAX_TS_BURST_PACKETS * TS_PACKET_SIZE],
}

impl<B: RegisterBus, D: DelayNs> Control<B, D> {
    /// Unit(s) that configuration writes go to
    fn config_target(&self) -> DeviceSelector {
        if self.config.topology().is_diversity() {
            DeviceSelector::Broadcast
        } else {
            self.selector
        }
    }

    fn require_powered(&self) -> Result<()> {
        if self.mode == DeviceMode::PoweredOff {
            Err(Error::InvalidState)
        } else {
            Ok(())
        }
    }

    async fn power_on(&mut self) -> Result<()> {
        if self.mode != DeviceMode::PoweredOff {
            return Ok(());
        }
        let target = self.config_target();
        demod::reset_pulse(&mut self.io, target).await?;
        self.mode = DeviceMode::PoweredOn;
        info!("demodulator powered on");
        Ok(())
    }

    async fn power_off(&mut self) -> Result<()> {
        if self.mode == DeviceMode::PoweredOff {
            return Ok(());
        }
        let target = self.config_target();
        demod::hold_reset(&mut self.io, target).await?;
        self.mode = DeviceMode::PoweredOff;
        self.clock_khz = None;
        info!("demodulator powered off");
        Ok(())
    }

    /// Leave Streaming, masking the data-ready interrupt
    async fn leave_streaming(&mut self) -> Result<()> {
        if self.mode == DeviceMode::Streaming {
            demod::enable_ts_interrupt(&mut self.io, DeviceSelector::Master, false).await?;
            self.mode = DeviceMode::PoweredOn;
            debug!("streaming stopped");
        }
        Ok(())
    }

    async fn set_broadcast_mode(&mut self, mode: BroadcastMode) -> Result<()> {
        let target = self.config_target();
        demod::set_broadcast_mode(&mut self.io, target, mode).await?;
        self.broadcast = Some(mode);
        Ok(())
    }

    async fn set_core_clock(&mut self, mode: BroadcastMode, rf: RfFrequency) -> Result<u32> {
        let xtal = self.config.xtal_khz();
        let bandwidth = self.config.bandwidth();

        let clock = clock_calc::compute_target_clock(xtal, bandwidth, mode, rf.as_khz())?;
        let plan = clock_calc::plan_clock(xtal, clock)?;
        let entry = calibration::select_calibration(bandwidth, clock, mode.segment_class())?;

        let target = self.config_target();
        demod::apply_clock(&mut self.io, target, &plan).await?;
        calibration::apply_calibration(&mut self.io, target, entry).await?;

        self.clock_khz = Some(clock);
        debug!("core clock {} kHz for {}", clock, rf.as_khz());
        Ok(clock)
    }
}

/// One ISDB-T demodulator instance
///
/// `M` picks the lock flavour (`CriticalSectionRawMutex` on target,
/// `NoopRawMutex` for single-threaded use), `N` the per-consumer ring size.
pub struct Isdbt<M: RawMutex, B, D, const N: usize> {
    control: Mutex<M, Control<B, D>>,
    consumers: Mutex<M, ConsumerList<N>>,
    wakers: [Signal<M, ()>; MAX_CONSUMERS],
    irq: Signal<M, ()>,
}

impl<M: RawMutex, B: RegisterBus, D: DelayNs, const N: usize> Isdbt<M, B, D, N> {
    /// Create a powered-off device
    pub fn new(bus: B, delay: D, config: DemodConfig) -> Self {
        Self {
            control: Mutex::new(Control {
                io: Io::new(bus, delay),
                config,
                mode: DeviceMode::PoweredOff,
                selector: DeviceSelector::Master,
                broadcast: None,
                tuner: None,
                clock_khz: None,
                ts_buf: [0; MAX_TS_BURST_PACKETS * TS_PACKET_SIZE],
            }),
            consumers: Mutex::new(ConsumerList::new()),
            wakers: core::array::from_fn(|_| Signal::new()),
            irq: Signal::new(),
        }
    }

    /// Current power / streaming state
    pub async fn mode(&self) -> DeviceMode {
        self.control.lock().await.mode
    }

    /// Current broadcast mode
    pub async fn broadcast_mode(&self) -> Option<BroadcastMode> {
        self.control.lock().await.broadcast
    }

    /// Core clock last programmed, kHz
    pub async fn core_clock_khz(&self) -> Option<u32> {
        self.control.lock().await.clock_khz
    }

    /// Board configuration
    pub async fn config(&self) -> DemodConfig {
        self.control.lock().await.config
    }

    /// Take the device out of reset
    pub async fn power_on(&self) -> Result<()> {
        self.control.lock().await.power_on().await
    }

    /// Hold the device in reset
    pub async fn power_off(&self) -> Result<()> {
        let mut ctl = self.control.lock().await;
        ctl.leave_streaming().await?;
        ctl.power_off().await
    }

    /// Pulse the reset line; clock and calibration must be reprogrammed
    pub async fn reset(&self) -> Result<()> {
        let mut ctl = self.control.lock().await;
        ctl.leave_streaming().await?;
        let target = ctl.config_target();
        demod::reset_pulse(&mut ctl.io, target).await?;
        ctl.mode = DeviceMode::PoweredOn;
        ctl.clock_khz = None;
        info!("demodulator reset");
        Ok(())
    }

    /// Power on if needed, identify every branch and program TS defaults
    pub async fn initialize(&self, selector: DeviceSelector) -> Result<()> {
        let mut ctl = self.control.lock().await;
        ctl.power_on().await?;

        for &branch in ctl.config.topology().branches() {
            let id = demod::read_chip_id(&mut ctl.io, branch).await?;
            if id != CHIP_ID {
                error!("{:?} chip id {:?}", branch, id);
                return Err(Error::ChipIdMismatch);
            }
        }

        ctl.selector = selector;
        let target = ctl.config_target();
        demod::configure_ts_output(&mut ctl.io, target).await?;
        info!("demodulator initialized");
        Ok(())
    }

    /// Put tuner and demodulator to sleep and forget the session
    pub async fn deinitialize(&self) -> Result<()> {
        let mut ctl = self.control.lock().await;
        ctl.leave_streaming().await?;

        let Control { io, tuner, .. } = &mut *ctl;
        if let Some(tuner) = tuner.as_mut() {
            tuner.deinit(io).await?;
        }
        ctl.tuner = None;
        ctl.broadcast = None;
        ctl.power_off().await
    }

    /// Select the broadcast mode for the next tuning
    pub async fn set_broadcast_mode(&self, mode: BroadcastMode) -> Result<()> {
        let mut ctl = self.control.lock().await;
        ctl.require_powered()?;
        ctl.set_broadcast_mode(mode).await
    }

    /// Program core clock and matching calibration for `rf_khz`
    ///
    /// Returns the clock chosen, in kHz.
    pub async fn set_core_clock(&self, mode: BroadcastMode, rf_khz: u32) -> Result<u32> {
        let rf = RfFrequency::from_khz(rf_khz).ok_or(Error::FrequencyOutOfRange)?;
        let mut ctl = self.control.lock().await;
        ctl.require_powered()?;
        ctl.set_core_clock(mode, rf).await
    }

    /// Choose the tuner part and bring it up for `mode`
    pub async fn tuner_select(&self, product: ProductType, mode: BroadcastMode) -> Result<()> {
        let mut ctl = self.control.lock().await;
        ctl.require_powered()?;

        let mut tuner = TunerDriver::new(
            product,
            ctl.selector,
            ctl.config.xtal_khz(),
            ctl.config.bandwidth(),
        );
        tuner.init(&mut ctl.io, mode).await?;
        ctl.tuner = Some(tuner);
        ctl.set_broadcast_mode(mode).await?;
        info!("tuner {:?} selected", product);
        Ok(())
    }

    /// Tune to `rf_khz`
    ///
    /// Sound-broadcast modes are offset to `sub_channel`; other modes ignore
    /// it. Streaming stops first. Core clock and calibration are programmed
    /// for the effective frequency before the tuner PLL.
    pub async fn tuner_set_frequency(&self, rf_khz: u32, sub_channel: u8) -> Result<()> {
        let mut ctl = self.control.lock().await;
        ctl.require_powered()?;
        let mode = ctl.broadcast.ok_or(Error::NoBroadcastMode)?;
        if ctl.tuner.is_none() {
            return Err(Error::NoTuner);
        }

        let centre = RfFrequency::from_khz(rf_khz).ok_or(Error::FrequencyOutOfRange)?;
        let rf = if mode.uses_sub_channel() {
            let offset = sub_channel_offset_khz(sub_channel)?;
            centre
                .offset_by(offset)
                .ok_or(Error::FrequencyOutOfRange)?
        } else {
            centre
        };

        ctl.leave_streaming().await?;
        ctl.set_core_clock(mode, rf).await?;

        let Control { io, tuner, .. } = &mut *ctl;
        let tuner = tuner.as_mut().ok_or(Error::NoTuner)?;
        tuner.set_frequency(io, rf).await?;
        info!("tuned to {}", rf.as_khz());
        Ok(())
    }

    /// Run one acquisition attempt and report where it locked
    pub async fn acquire(&self) -> Result<LockReport> {
        let mut ctl = self.control.lock().await;
        ctl.require_powered()?;
        let mode = ctl.broadcast.ok_or(Error::NoBroadcastMode)?;
        let topology = ctl.config.topology();

        let mut acquisition = Acquisition::new(&mut ctl.io, topology, mode);
        let report = acquisition.run().await?;
        Ok(report)
    }

    /// Run one acquisition attempt
    ///
    /// Any failure, including a transport error, is reported as
    /// [`ScanResult::Failed`]; the cause is logged.
    pub async fn scan_status(&self) -> ScanResult {
        match self.acquire().await {
            Ok(report) => {
                info!("locked on {:?}", report.branch);
                ScanResult::Locked
            }
            Err(err) => {
                warn!("scan failed: {:?}", err);
                ScanResult::Failed
            }
        }
    }

    /// Signal strength at the tuner, dBm
    pub async fn rssi(&self) -> Result<i32> {
        let mut ctl = self.control.lock().await;
        ctl.require_powered()?;
        let Control { io, tuner, .. } = &mut *ctl;
        let dbm = tuner.as_mut().ok_or(Error::NoTuner)?.rssi(io).await?;
        Ok(dbm)
    }
}
