//! Frequency Planning
//!
//! Pure calculators for the two synthesizers in the signal path. Nothing in
//! here touches registers, so every result can be checked on the host.

pub mod clock_calc;
pub mod pll_calc;
