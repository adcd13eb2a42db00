//! Tuner PLL Calculation
//!
//! Fractional-N planning for the FC8300-family synthesizer.
//!
//! # Theory of Operation
//!
//! The LO is the VCO divided by one of eight ratios. The VCO itself is
//!
//! ```text
//! FVCO = FXTAL × (N + K / 2^22)
//! ```
//!
//! The largest ratio that keeps the VCO under its ceiling is used, which
//! keeps the VCO as high in its range as possible. The fraction's LSB is
//! always set so the sigma-delta modulator never sees an all-zero word.

use fixed::types::U10F22;

use crate::error::{Error, Result};

/// LO divide ratios, in selection order (index is the LO select code)
pub const LO_RATIOS: [u32; 8] = [64, 48, 32, 24, 16, 12, 8, 6];

/// Fraction width of K
pub const K_BITS: u32 = 22;

/// VCO operating range of a tuner variant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VcoLimits {
    /// Lowest VCO frequency in kHz
    pub min_khz: u32,
    /// Highest VCO frequency in kHz
    pub max_khz: u32,
}

impl VcoLimits {
    /// FC8300 VCO range
    pub const FC8300: Self = Self {
        min_khz: 4_200_000,
        max_khz: 6_400_000,
    };

    /// FC8350 VCO range
    pub const FC8350: Self = Self {
        min_khz: 3_900_000,
        max_khz: 6_000_000,
    };

    /// Check a VCO frequency against the range
    #[must_use]
    pub const fn contains(&self, vco_khz: u32) -> bool {
        vco_khz >= self.min_khz && vco_khz <= self.max_khz
    }
}

/// Synthesizer settings for one RF frequency
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PllPlan {
    /// LO select code (index into [`LO_RATIOS`])
    pub lo_index: u8,
    /// LO divide ratio
    pub ratio: u32,
    /// Target VCO in kHz
    pub vco_khz: u32,
    /// Integer divider
    pub n: u32,
    /// 22-bit fractional divider (LSB forced high)
    pub k: u32,
}

impl PllPlan {
    /// VCO frequency the programmed N and K produce
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn reconstructed_vco_khz(&self, xtal_khz: u32) -> u32 {
        let frac = (u64::from(self.k) * u64::from(xtal_khz)) >> K_BITS;
        // frac < xtal, so the sum fits whenever N × xtal does
        self.n * xtal_khz + frac as u32
    }

    /// Divider has an odd factor (ratio is not a power of two)
    #[must_use]
    pub const fn has_odd_divider(&self) -> bool {
        !self.ratio.is_power_of_two()
    }
}

/// Plan the synthesizer for `rf_khz`
///
/// Fails with [`Error::FrequencyOutOfRange`] when no ratio keeps the VCO
/// under its ceiling and [`Error::SynthesisMismatch`] when the reconstructed
/// VCO leaves the tuner's range.
pub fn plan_pll(rf_khz: u32, xtal_khz: u32, limits: VcoLimits) -> Result<PllPlan> {
    if xtal_khz == 0 {
        return Err(Error::UnsupportedCrystal);
    }

    let (lo_index, ratio, vco_khz) = LO_RATIOS
        .iter()
        .enumerate()
        .find_map(|(index, &ratio)| {
            let vco = u64::from(rf_khz) * u64::from(ratio);
            (vco <= u64::from(limits.max_khz)).then_some((index, ratio, vco))
        })
        .ok_or(Error::FrequencyOutOfRange)?;

    let bits = (vco_khz << K_BITS) / u64::from(xtal_khz);
    let divide = U10F22::from_bits(u32::try_from(bits).map_err(|_| Error::SynthesisMismatch)?);
    let n: u32 = divide.int().to_num();
    let k = divide.frac().to_bits() | 1;

    #[allow(clippy::cast_possible_truncation)]
    let plan = PllPlan {
        lo_index: lo_index as u8,
        ratio,
        vco_khz: vco_khz as u32,
        n,
        k,
    };

    let actual = plan.reconstructed_vco_khz(xtal_khz);
    if !limits.contains(actual) {
        warn!(
            "VCO {} kHz outside {}..={} kHz",
            actual,
            limits.min_khz,
            limits.max_khz
        );
        return Err(Error::SynthesisMismatch);
    }

    trace!(
        "pll rf={} lo={} n={} k={}",
        rf_khz,
        plan.lo_index,
        plan.n,
        plan.k
    );
    Ok(plan)
}
