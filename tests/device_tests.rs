//! Device Control Plane Tests
//!
//! End-to-end tests of the device context: power sequencing, chip
//! identification, tuning (core clock, calibration, tuner PLL), signal
//! acquisition and the mode transitions around streaming.
//! Run with: cargo test --target x86_64-unknown-linux-gnu --no-default-features --features std --test device_tests

mod common;

use embassy_futures::block_on;

use common::{healthy_board, signal_at, Access, SimDevice};
use isdbt_frontend::acquisition::Phase;
use isdbt_frontend::calibration::ACI_COEFF_BASE;
use isdbt_frontend::config::DemodConfig;
use isdbt_frontend::device::sub_channel_offset_khz;
use isdbt_frontend::drivers::demod::{self, reg};
use isdbt_frontend::drivers::fc8300;
use isdbt_frontend::drivers::tuner::ProductType;
use isdbt_frontend::hal::bus::tuner_reg;
use isdbt_frontend::stream::ConsumerKind;
use isdbt_frontend::types::{
    Bandwidth, BroadcastMode, DeviceMode, DeviceSelector, ScanResult, Topology,
};
use isdbt_frontend::{Error, Result};

const MASTER: DeviceSelector = DeviceSelector::Master;

fn dual_config() -> DemodConfig {
    DemodConfig::new(26_000, Bandwidth::Mhz6, Topology::Dual, 16).unwrap()
}

/// Initialize and select an FC8300 for `mode`
async fn bring_up(device: &SimDevice, mode: BroadcastMode) -> Result<()> {
    device.initialize(MASTER).await?;
    device.tuner_select(ProductType::Fc8300, mode).await
}

// =============================================================================
// End-to-End Tests
// =============================================================================

#[test]
fn tune_and_lock_full_segment_channel() {
    let (device, sim, _) = common::device(DemodConfig::default());
    healthy_board(&sim, Topology::Single);
    signal_at(&sim, Topology::Single, 5);

    let scan = block_on(async {
        bring_up(&device, BroadcastMode::Isdbt13Seg).await.unwrap();
        device.tuner_set_frequency(503_143, 0).await.unwrap();
        device.scan_status().await
    });

    assert_eq!(scan, ScanResult::Locked);
    assert_eq!(block_on(device.core_clock_khz()), Some(97_500));
    assert_eq!(block_on(device.mode()), DeviceMode::PoweredOn);

    assert_eq!(
        sim.bytes_to(MASTER, reg::BROADCAST_MODE),
        [BroadcastMode::Isdbt13Seg.register_value()]
    );
    assert_eq!(sim.bytes_to(MASTER, reg::PLL_RESET), [0x01, 0x00]);
    assert_eq!(sim.writes_to(MASTER, reg::PLL_DIVIDER), [Access::Word(0x0F20)]);
    assert_eq!(
        sim.writes_to(MASTER, ACI_COEFF_BASE),
        [Access::Burst(vec![0x7a, 0xf6, 0xe6, 0xd5, 0xe1, 0xff])]
    );
    assert_eq!(sim.bytes_to(MASTER, tuner_reg(fc8300::reg::N_LO)), [232]);
}

#[test]
fn clock_and_calibration_precede_tuner() {
    let (device, sim, _) = common::device(DemodConfig::default());
    healthy_board(&sim, Topology::Single);
    block_on(async {
        bring_up(&device, BroadcastMode::Isdbt13Seg).await.unwrap();
        sim.clear_writes();
        device.tuner_set_frequency(503_143, 0).await.unwrap();
    });

    let order: Vec<u16> = sim.writes().iter().map(|(_, addr, _)| *addr).collect();
    let divider = order.iter().position(|&a| a == reg::PLL_DIVIDER).unwrap();
    let coeffs = order.iter().position(|&a| a == ACI_COEFF_BASE).unwrap();
    let lo = order
        .iter()
        .position(|&a| a == tuner_reg(fc8300::reg::LO_SELECT))
        .unwrap();
    assert!(divider < coeffs);
    assert!(coeffs < lo);
}

#[test]
fn spur_channel_switches_clock_and_calibration() {
    let (device, sim, _) = common::device(DemodConfig::default());
    healthy_board(&sim, Topology::Single);
    block_on(async {
        bring_up(&device, BroadcastMode::Isdbt13Seg).await.unwrap();
        device.tuner_set_frequency(485_143, 0).await.unwrap();
    });

    assert_eq!(block_on(device.core_clock_khz()), Some(104_000));
    assert_eq!(
        sim.writes_to(MASTER, ACI_COEFF_BASE),
        [Access::Burst(vec![0x4d, 0x72, 0x36, 0x23, 0x2a, 0x41])]
    );
}

#[test]
fn scan_reports_failure_without_signal() {
    let (device, sim, _) = common::device(DemodConfig::default());
    healthy_board(&sim, Topology::Single);

    let (scan, acquired) = block_on(async {
        bring_up(&device, BroadcastMode::Isdbt13Seg).await.unwrap();
        device.tuner_set_frequency(503_143, 0).await.unwrap();
        (device.scan_status().await, device.acquire().await)
    });

    assert_eq!(scan, ScanResult::Failed);
    assert_eq!(acquired, Err(Error::LockTimeout(Phase::RfDetect)));
}

#[test]
fn scan_reports_failure_on_transport_error() {
    let (device, sim, _) = common::device(DemodConfig::default());
    healthy_board(&sim, Topology::Single);
    signal_at(&sim, Topology::Single, 0);
    sim.fail(MASTER, reg::TMCC_STATUS);

    let scan = block_on(async {
        bring_up(&device, BroadcastMode::Isdbt13Seg).await.unwrap();
        device.tuner_set_frequency(503_143, 0).await.unwrap();
        device.scan_status().await
    });
    assert!(!scan.is_locked());
}

#[test]
fn unlocked_tuner_fails_tuning() {
    let (device, sim, _) = common::device(DemodConfig::default());
    healthy_board(&sim, Topology::Single);
    sim.set(MASTER, tuner_reg(fc8300::reg::LOCK_DETECT), 0);

    let result = block_on(async {
        bring_up(&device, BroadcastMode::Isdbt13Seg).await.unwrap();
        device.tuner_set_frequency(503_143, 0).await
    });
    assert_eq!(result, Err(Error::PllUnlocked));
}

// =============================================================================
// Sub-Channel Tests
// =============================================================================

#[test]
fn sub_channel_offsets() {
    assert_eq!(sub_channel_offset_khz(22), Ok(0));
    assert_eq!(sub_channel_offset_khz(29), Ok(1_000));
    assert_eq!(sub_channel_offset_khz(0), Ok(-3_142));
    assert_eq!(sub_channel_offset_khz(41), Ok(2_714));
    assert_eq!(sub_channel_offset_khz(42), Err(Error::InvalidSubChannel));
}

#[test]
fn sound_broadcast_tunes_to_sub_channel() {
    // 487.0 MHz is 500 kHz from the 5th harmonic of 97.5 MHz; sub-channel 19
    // moves a one-segment signal far enough away to keep the base clock
    let (device, sim, _) = common::device(DemodConfig::default());
    healthy_board(&sim, Topology::Single);

    let clocks = block_on(async {
        bring_up(&device, BroadcastMode::IsdbtSb1Seg).await.unwrap();
        device.tuner_set_frequency(487_000, 22).await.unwrap();
        let centre = device.core_clock_khz().await;
        device.tuner_set_frequency(487_000, 19).await.unwrap();
        (centre, device.core_clock_khz().await)
    });
    assert_eq!(clocks, (Some(104_000), Some(97_500)));
}

#[test]
fn full_segment_ignores_sub_channel() {
    let (device, sim, _) = common::device(DemodConfig::default());
    healthy_board(&sim, Topology::Single);

    block_on(async {
        bring_up(&device, BroadcastMode::Isdbt13Seg).await.unwrap();
        device.tuner_set_frequency(487_000, 19).await.unwrap();
    });
    assert_eq!(block_on(device.core_clock_khz()), Some(104_000));
}

#[test]
fn invalid_sub_channel_rejected_before_any_write() {
    let (device, sim, _) = common::device(DemodConfig::default());
    healthy_board(&sim, Topology::Single);

    let result = block_on(async {
        bring_up(&device, BroadcastMode::IsdbtSb3Seg).await.unwrap();
        sim.clear_writes();
        device.tuner_set_frequency(503_143, 42).await
    });
    assert_eq!(result, Err(Error::InvalidSubChannel));
    assert!(sim.writes().is_empty());
}

#[test]
fn frequency_outside_tuner_range_rejected() {
    let (device, sim, _) = common::device(DemodConfig::default());
    healthy_board(&sim, Topology::Single);

    let result = block_on(async {
        bring_up(&device, BroadcastMode::Isdbt13Seg).await.unwrap();
        device.tuner_set_frequency(50_000, 0).await
    });
    assert_eq!(result, Err(Error::FrequencyOutOfRange));
}

// =============================================================================
// Precondition Tests
// =============================================================================

#[test]
fn tuning_needs_broadcast_mode_then_tuner() {
    let (device, _, _) = common::device(DemodConfig::default());
    block_on(async {
        device.power_on().await.unwrap();
        assert_eq!(
            device.tuner_set_frequency(503_143, 0).await,
            Err(Error::NoBroadcastMode)
        );
        device.set_broadcast_mode(BroadcastMode::Isdbt13Seg).await.unwrap();
        assert_eq!(device.tuner_set_frequency(503_143, 0).await, Err(Error::NoTuner));
        assert_eq!(device.rssi().await, Err(Error::NoTuner));
    });
}

#[test]
fn powered_off_device_rejects_control() {
    let (device, _, _) = common::device(DemodConfig::default());
    block_on(async {
        assert_eq!(
            device
                .tuner_select(ProductType::Fc8300, BroadcastMode::Isdbt13Seg)
                .await,
            Err(Error::InvalidState)
        );
        assert_eq!(
            device.set_core_clock(BroadcastMode::Isdbt13Seg, 503_143).await,
            Err(Error::InvalidState)
        );
        assert_eq!(device.scan_status().await, ScanResult::Failed);
    });
}

#[test]
fn chip_id_mismatch_rejected() {
    let (device, sim, _) = common::device(DemodConfig::default());
    sim.set(MASTER, reg::CHIP_ID, 0x1234);

    assert_eq!(block_on(device.initialize(MASTER)), Err(Error::ChipIdMismatch));
    assert!(sim.writes_to(MASTER, reg::TS_OUTPUT_CTRL).is_empty());
}

// =============================================================================
// Power Sequencing Tests
// =============================================================================

#[test]
fn power_on_pulses_reset_once() {
    let (device, sim, delay) = common::device(DemodConfig::default());
    block_on(async {
        device.power_on().await.unwrap();
        device.power_on().await.unwrap();
    });

    assert_eq!(
        sim.bytes_to(MASTER, reg::SYS_RESET),
        [demod::RESET_ASSERT, demod::RESET_RELEASE]
    );
    assert_eq!(delay.elapsed_ms(), 1);
    assert_eq!(block_on(device.mode()), DeviceMode::PoweredOn);
}

#[test]
fn power_off_holds_reset_and_forgets_clock() {
    let (device, sim, _) = common::device(DemodConfig::default());
    healthy_board(&sim, Topology::Single);
    block_on(async {
        bring_up(&device, BroadcastMode::Isdbt13Seg).await.unwrap();
        device.tuner_set_frequency(503_143, 0).await.unwrap();
        device.power_off().await.unwrap();
    });

    assert_eq!(
        sim.bytes_to(MASTER, reg::SYS_RESET).last(),
        Some(&demod::RESET_ASSERT)
    );
    assert_eq!(block_on(device.mode()), DeviceMode::PoweredOff);
    assert_eq!(block_on(device.core_clock_khz()), None);
}

#[test]
fn reset_requires_reprogramming_clock() {
    let (device, sim, _) = common::device(DemodConfig::default());
    healthy_board(&sim, Topology::Single);
    block_on(async {
        bring_up(&device, BroadcastMode::Isdbt13Seg).await.unwrap();
        device.tuner_set_frequency(503_143, 0).await.unwrap();
        device.reset().await.unwrap();
    });

    assert_eq!(block_on(device.core_clock_khz()), None);
    assert_eq!(block_on(device.mode()), DeviceMode::PoweredOn);
}

#[test]
fn initialize_programs_ts_output() {
    let (device, sim, _) = common::device(DemodConfig::default());
    healthy_board(&sim, Topology::Single);
    block_on(device.initialize(MASTER)).unwrap();

    assert_eq!(
        sim.bytes_to(MASTER, reg::TS_OUTPUT_CTRL),
        [demod::TS_OUTPUT_DEFAULT]
    );
    assert_eq!(sim.bytes_to(MASTER, reg::INT_ENABLE), [0x00]);
}

#[test]
fn deinitialize_puts_tuner_to_standby() {
    let (device, sim, _) = common::device(DemodConfig::default());
    healthy_board(&sim, Topology::Single);
    block_on(async {
        bring_up(&device, BroadcastMode::Isdbt13Seg).await.unwrap();
        device.deinitialize().await.unwrap();
    });

    assert_eq!(
        sim.bytes_to(MASTER, tuner_reg(fc8300::reg::POWER)),
        [fc8300::POWER_ON, fc8300::POWER_STANDBY]
    );
    assert_eq!(block_on(device.mode()), DeviceMode::PoweredOff);
    assert_eq!(block_on(device.broadcast_mode()), None);
}

// =============================================================================
// Diversity Tests
// =============================================================================

#[test]
fn diversity_configures_all_units_at_once() {
    let (device, sim, _) = common::device(dual_config());
    healthy_board(&sim, Topology::Dual);
    block_on(device.initialize(MASTER)).unwrap();

    let broadcast = DeviceSelector::Broadcast;
    assert_eq!(
        sim.bytes_to(broadcast, reg::SYS_RESET),
        [demod::RESET_ASSERT, demod::RESET_RELEASE]
    );
    assert_eq!(
        sim.bytes_to(broadcast, reg::TS_OUTPUT_CTRL),
        [demod::TS_OUTPUT_DEFAULT]
    );
    assert_eq!(sim.reads(DeviceSelector::Slave0, reg::CHIP_ID), 1);
}

#[test]
fn diversity_checks_every_chip_id() {
    let (device, sim, _) = common::device(dual_config());
    healthy_board(&sim, Topology::Dual);
    sim.set(DeviceSelector::Slave0, reg::CHIP_ID, 0x0000);

    assert_eq!(block_on(device.initialize(MASTER)), Err(Error::ChipIdMismatch));
}

#[test]
fn diversity_lock_end_to_end() {
    let (device, sim, _) = common::device(dual_config());
    healthy_board(&sim, Topology::Dual);
    signal_at(&sim, Topology::Dual, 3);

    let report = block_on(async {
        bring_up(&device, BroadcastMode::Isdbt13Seg).await.unwrap();
        device.tuner_set_frequency(503_143, 0).await.unwrap();
        device.acquire().await
    })
    .unwrap();
    assert_eq!(report.branch, MASTER);
    assert_eq!(report.frame_info.mode(), 3);
    assert_eq!(
        sim.writes_to(DeviceSelector::Broadcast, reg::PLL_DIVIDER),
        [Access::Word(0x0F20)]
    );
}

// =============================================================================
// Streaming Interaction Tests
// =============================================================================

#[test]
fn tuning_stops_streaming() {
    let (device, sim, _) = common::device(DemodConfig::default());
    healthy_board(&sim, Topology::Single);
    block_on(async {
        bring_up(&device, BroadcastMode::Isdbt13Seg).await.unwrap();
        device.tuner_set_frequency(503_143, 0).await.unwrap();
        let handle = device.open(ConsumerKind::TransportStream).await.unwrap();
        device.start_stream(handle).await.unwrap();
        assert_eq!(device.mode().await, DeviceMode::Streaming);

        device.tuner_set_frequency(485_143, 0).await.unwrap();
    });

    assert_eq!(block_on(device.mode()), DeviceMode::PoweredOn);
    assert_eq!(sim.bytes_to(MASTER, reg::INT_ENABLE).last(), Some(&0x00));
}

#[test]
fn rssi_reads_tuner() {
    let (device, sim, _) = common::device(DemodConfig::default());
    healthy_board(&sim, Topology::Single);
    sim.set(MASTER, tuner_reg(fc8300::reg::RSSI), u32::from(-960i16 as u16));

    let dbm = block_on(async {
        bring_up(&device, BroadcastMode::Isdbt13Seg).await.unwrap();
        device.rssi().await
    });
    assert_eq!(dbm, Ok(-60));
}
