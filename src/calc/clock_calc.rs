//! Demodulator Core Clock Calculation
//!
//! Chooses the OFDM core clock for a (crystal, bandwidth, RF) combination and
//! works out the PLL settings that produce it.
//!
//! # Theory of Operation
//!
//! The core PLL multiplies the (optionally halved) crystal and divides the
//! result by a power of two:
//!
//! ```text
//! FCLK = ((FXTAL >> pre_scale) × multiplier) >> post_scale
//! ```
//!
//! Each crystal has one nominal clock per bandwidth. Harmonics of that clock
//! fall across the UHF band; when one lands inside the occupied spectrum of
//! the channel being received it desensitizes the tuner, so the table carries
//! an alternate clock to switch to for those channels.

use crate::config::SPUR_GUARD_KHZ;
use crate::error::{Error, Result};
use crate::types::{Bandwidth, BroadcastMode};

/// Crystals the clock table covers, in kHz
pub const SUPPORTED_CRYSTALS: [u32; 10] = [
    16_000, 16_384, 18_000, 19_200, 24_000, 24_576, 26_000, 27_000, 32_000, 37_400,
];

/// Crystals at or above this frequency are halved before the PLL
pub const PRE_SCALE_THRESHOLD_KHZ: u32 = 32_000;

/// Valid multiplier window for the post-divided configurations
pub const MIN_MULTIPLIER: u32 = 10;
/// Valid multiplier window for the post-divided configurations
pub const MAX_MULTIPLIER: u32 = 40;

/// Largest post-divider shift tried
pub const MAX_POST_SHIFT: u8 = 4;

/// Every clock a 6 MHz channel can be programmed to, kHz
pub const CLOCKS_6MHZ: [u32; 13] = [
    93_500, 94_500, 96_000, 97_500, 98_304, 99_000, 101_250, 102_000, 102_850, 104_000, 104_448,
    105_600, 106_496,
];

/// Every clock a 7 MHz channel can be programmed to, kHz
pub const CLOCKS_7MHZ: [u32; 16] = [
    108_000, 110_500, 110_592, 112_000, 112_200, 114_000, 114_688, 114_750, 115_200, 116_736,
    117_000, 120_000, 121_500, 121_550, 122_880, 124_800,
];

/// Every clock an 8 MHz channel can be programmed to, kHz
pub const CLOCKS_8MHZ: [u32; 16] = [
    122_880, 124_800, 126_000, 128_000, 128_250, 130_000, 130_900, 131_072, 132_000, 134_400,
    135_000, 135_168, 136_000, 139_264, 140_250, 143_000,
];

/// Nominal clock and optional spur-avoidance alternate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockChoice {
    /// Clock used unless a harmonic falls in the channel
    pub base_khz: u32,
    /// Clock substituted when it does
    pub alternate_khz: Option<u32>,
}

impl ClockChoice {
    const fn new(base_khz: u32, alternate_khz: Option<u32>) -> Self {
        Self {
            base_khz,
            alternate_khz,
        }
    }
}

/// One crystal's clocks for 6, 7 and 8 MHz channels
struct ClockRow {
    xtal_khz: u32,
    by_bandwidth: [ClockChoice; 3],
}

const fn row(
    xtal_khz: u32,
    mhz6: (u32, Option<u32>),
    mhz7: (u32, Option<u32>),
    mhz8: (u32, Option<u32>),
) -> ClockRow {
    ClockRow {
        xtal_khz,
        by_bandwidth: [
            ClockChoice::new(mhz6.0, mhz6.1),
            ClockChoice::new(mhz7.0, mhz7.1),
            ClockChoice::new(mhz8.0, mhz8.1),
        ],
    }
}

#[rustfmt::skip]
const CLOCK_TABLE: [ClockRow; 10] = [
    row(16_000, (96_000, Some(104_000)), (120_000, Some(112_000)), (136_000, Some(128_000))),
    row(16_384, (98_304, Some(106_496)), (114_688, Some(122_880)), (131_072, Some(139_264))),
    row(18_000, (99_000, None),          (117_000, Some(108_000)), (135_000, Some(126_000))),
    row(19_200, (96_000, Some(105_600)), (115_200, Some(124_800)), (134_400, Some(124_800))),
    row(24_000, (102_000, Some(96_000)), (114_000, Some(120_000)), (132_000, None)),
    row(24_576, (98_304, Some(104_448)), (116_736, Some(110_592)), (135_168, Some(122_880))),
    row(26_000, (97_500, Some(104_000)), (117_000, Some(110_500)), (130_000, Some(143_000))),
    row(27_000, (101_250, Some(94_500)), (114_750, Some(121_500)), (135_000, Some(128_250))),
    row(32_000, (96_000, Some(104_000)), (120_000, Some(112_000)), (136_000, Some(128_000))),
    row(37_400, (102_850, Some(93_500)), (112_200, Some(121_550)), (130_900, Some(140_250))),
];

/// Core PLL configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockPlan {
    /// Crystal halving (0 or 1)
    pub pre_scale: u8,
    /// Output divider as a power-of-two shift (0..=4)
    pub post_scale: u8,
    /// Feedback multiplier
    pub multiplier: u32,
}

impl ClockPlan {
    /// Clock this plan produces from `xtal_khz`
    #[must_use]
    pub const fn output_khz(&self, xtal_khz: u32) -> u32 {
        ((xtal_khz >> self.pre_scale) * self.multiplier) >> self.post_scale
    }

    /// Packed divider word: multiplier in the high byte, post shift in bits
    /// 7:4, pre-scale in bits 3:0
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn divider_word(&self) -> u16 {
        ((self.multiplier as u16 & 0xFF) << 8)
            | ((self.post_scale as u16 & 0x0F) << 4)
            | (self.pre_scale as u16 & 0x0F)
    }
}

/// Check whether the clock table covers a crystal
#[must_use]
pub fn is_supported_crystal(xtal_khz: u32) -> bool {
    SUPPORTED_CRYSTALS.contains(&xtal_khz)
}

/// Every clock the table can produce for a bandwidth
#[must_use]
pub const fn clock_set(bandwidth: Bandwidth) -> &'static [u32] {
    match bandwidth {
        Bandwidth::Mhz6 => &CLOCKS_6MHZ,
        Bandwidth::Mhz7 => &CLOCKS_7MHZ,
        Bandwidth::Mhz8 => &CLOCKS_8MHZ,
    }
}

/// Table entry for a crystal and bandwidth
pub fn clock_choice(xtal_khz: u32, bandwidth: Bandwidth) -> Result<ClockChoice> {
    let row = CLOCK_TABLE
        .iter()
        .find(|row| row.xtal_khz == xtal_khz)
        .ok_or(Error::UnsupportedCrystal)?;

    Ok(match bandwidth {
        Bandwidth::Mhz6 => row.by_bandwidth[0],
        Bandwidth::Mhz7 => row.by_bandwidth[1],
        Bandwidth::Mhz8 => row.by_bandwidth[2],
    })
}

/// True if some harmonic of `clock_khz` lies within `window_khz` of `rf_khz`
#[must_use]
pub fn harmonic_near(clock_khz: u32, rf_khz: u32, window_khz: u32) -> bool {
    if clock_khz == 0 {
        return false;
    }
    let below = rf_khz / clock_khz * clock_khz;
    let above = below + clock_khz;

    (below != 0 && rf_khz - below <= window_khz) || above - rf_khz <= window_khz
}

/// Choose the core clock for a tuning request
///
/// Returns the table's base clock for (crystal, bandwidth), or its alternate
/// when a harmonic of the base falls inside the occupied spectrum of the
/// channel plus [`SPUR_GUARD_KHZ`].
pub fn compute_target_clock(
    xtal_khz: u32,
    bandwidth: Bandwidth,
    mode: BroadcastMode,
    rf_khz: u32,
) -> Result<u32> {
    let choice = clock_choice(xtal_khz, bandwidth)?;
    let window = mode.segment_class().occupied_half_width_khz(bandwidth) + SPUR_GUARD_KHZ;

    match choice.alternate_khz {
        Some(alternate) if harmonic_near(choice.base_khz, rf_khz, window) => {
            debug!(
                "clock {} harmonic near {} kHz, using {}",
                choice.base_khz,
                rf_khz,
                alternate
            );
            Ok(alternate)
        }
        _ => Ok(choice.base_khz),
    }
}

/// Work out PLL settings that produce exactly `clock_khz`
///
/// The first post shift (1 to 4) whose multiplier lands in
/// [`MIN_MULTIPLIER`]..=[`MAX_MULTIPLIER`] is used; with none, the clock is
/// taken straight from the multiplier. Any rounding in the result is a
/// [`Error::SynthesisMismatch`].
pub fn plan_clock(xtal_khz: u32, clock_khz: u32) -> Result<ClockPlan> {
    let pre_scale = u8::from(xtal_khz >= PRE_SCALE_THRESHOLD_KHZ);
    let input = xtal_khz >> pre_scale;
    if input == 0 {
        return Err(Error::UnsupportedCrystal);
    }

    let plan = (1..=MAX_POST_SHIFT)
        .map(|shift| ClockPlan {
            pre_scale,
            post_scale: shift,
            multiplier: (clock_khz << shift) / input,
        })
        .find(|plan| (MIN_MULTIPLIER..=MAX_MULTIPLIER).contains(&plan.multiplier))
        .unwrap_or(ClockPlan {
            pre_scale,
            post_scale: 0,
            multiplier: clock_khz / input,
        });

    if plan.output_khz(xtal_khz) == clock_khz {
        Ok(plan)
    } else {
        warn!(
            "clock {} kHz not exact from {} kHz crystal",
            clock_khz,
            xtal_khz
        );
        Err(Error::SynthesisMismatch)
    }
}
