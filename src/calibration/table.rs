//! Filter coefficient data
//!
//! One entry per (bandwidth, core clock, segment class) the clock table can
//! produce. The coefficient values are placeholders laid out in the register
//! block format; the characterized set for a given board replaces them.

use super::CalibrationEntry;
use crate::types::{Bandwidth, SegmentClass};

const fn entry(
    bandwidth: Bandwidth,
    clock_khz: u32,
    class: SegmentClass,
    coefficients: [u8; 6],
) -> CalibrationEntry {
    CalibrationEntry {
        bandwidth,
        clock_khz,
        class,
        coefficients,
    }
}

/// Calibration entries, grouped by bandwidth then clock
#[rustfmt::skip]
pub static CALIBRATION_TABLE: [CalibrationEntry; 180] = [
    entry(Bandwidth::Mhz6, 93_500, SegmentClass::OneSegA, [0x46, 0x2a, 0x2d, 0x1f, 0x89, 0x8f]),
    entry(Bandwidth::Mhz6, 93_500, SegmentClass::OneSegB, [0x24, 0x94, 0x59, 0xf2, 0x9f, 0xa0]),
    entry(Bandwidth::Mhz6, 93_500, SegmentClass::ThreeSeg, [0x1b, 0x86, 0x4e, 0x29, 0xa4, 0xf3]),
    entry(Bandwidth::Mhz6, 93_500, SegmentClass::FullSeg, [0x66, 0x0a, 0x90, 0x27, 0x9d, 0xe4]),
    entry(Bandwidth::Mhz6, 94_500, SegmentClass::OneSegA, [0x3c, 0x4f, 0x01, 0x42, 0x2f, 0x37]),
    entry(Bandwidth::Mhz6, 94_500, SegmentClass::OneSegB, [0xa5, 0x9d, 0xb3, 0x14, 0xbf, 0xa8]),
    entry(Bandwidth::Mhz6, 94_500, SegmentClass::ThreeSeg, [0x5e, 0x87, 0xea, 0x17, 0x44, 0x52]),
    entry(Bandwidth::Mhz6, 94_500, SegmentClass::FullSeg, [0xef, 0x11, 0x7c, 0x53, 0x04, 0xa5]),
    entry(Bandwidth::Mhz6, 96_000, SegmentClass::OneSegA, [0x3e, 0xa5, 0xdf, 0x5d, 0xe7, 0x18]),
    entry(Bandwidth::Mhz6, 96_000, SegmentClass::OneSegB, [0xb1, 0x41, 0x85, 0xfb, 0x8b, 0xa4]),
    entry(Bandwidth::Mhz6, 96_000, SegmentClass::ThreeSeg, [0x40, 0xed, 0xb4, 0x27, 0x1c, 0x67]),
    entry(Bandwidth::Mhz6, 96_000, SegmentClass::FullSeg, [0x41, 0xe5, 0x3d, 0xe0, 0x7c, 0xe3]),
    entry(Bandwidth::Mhz6, 97_500, SegmentClass::OneSegA, [0x1f, 0xa4, 0xa4, 0x0f, 0x29, 0x4d]),
    entry(Bandwidth::Mhz6, 97_500, SegmentClass::OneSegB, [0x34, 0xcd, 0x10, 0x94, 0x2d, 0x45]),
    entry(Bandwidth::Mhz6, 97_500, SegmentClass::ThreeSeg, [0xee, 0x72, 0x03, 0x5b, 0x57, 0x55]),
    entry(Bandwidth::Mhz6, 97_500, SegmentClass::FullSeg, [0x7a, 0xf6, 0xe6, 0xd5, 0xe1, 0xff]),
    entry(Bandwidth::Mhz6, 98_304, SegmentClass::OneSegA, [0xd3, 0x8e, 0x7c, 0x9a, 0x8b, 0xe5]),
    entry(Bandwidth::Mhz6, 98_304, SegmentClass::OneSegB, [0x46, 0x5a, 0xa0, 0x1b, 0xac, 0x00]),
    entry(Bandwidth::Mhz6, 98_304, SegmentClass::ThreeSeg, [0x78, 0xf7, 0x39, 0x5f, 0x75, 0xda]),
    entry(Bandwidth::Mhz6, 98_304, SegmentClass::FullSeg, [0x83, 0xd1, 0x67, 0xa1, 0xa7, 0x1d]),
    entry(Bandwidth::Mhz6, 99_000, SegmentClass::OneSegA, [0x63, 0xb1, 0xe4, 0xe2, 0x89, 0x9e]),
    entry(Bandwidth::Mhz6, 99_000, SegmentClass::OneSegB, [0x9a, 0x17, 0xaa, 0xe6, 0x70, 0x15]),
    entry(Bandwidth::Mhz6, 99_000, SegmentClass::ThreeSeg, [0x8d, 0x9d, 0x81, 0x9a, 0x98, 0x3a]),
    entry(Bandwidth::Mhz6, 99_000, SegmentClass::FullSeg, [0x14, 0x9d, 0xb5, 0xae, 0x67, 0x59]),
    entry(Bandwidth::Mhz6, 101_250, SegmentClass::OneSegA, [0xf9, 0x53, 0xdb, 0xa1, 0x59, 0x9c]),
    entry(Bandwidth::Mhz6, 101_250, SegmentClass::OneSegB, [0x25, 0xc1, 0xc5, 0x00, 0x2d, 0x71]),
    entry(Bandwidth::Mhz6, 101_250, SegmentClass::ThreeSeg, [0x81, 0x98, 0x2c, 0x84, 0x4b, 0x1d]),
    entry(Bandwidth::Mhz6, 101_250, SegmentClass::FullSeg, [0xd4, 0xa5, 0x4d, 0xb5, 0x13, 0xca]),
    entry(Bandwidth::Mhz6, 102_000, SegmentClass::OneSegA, [0xd4, 0x87, 0xfe, 0xa3, 0xfe, 0xba]),
    entry(Bandwidth::Mhz6, 102_000, SegmentClass::OneSegB, [0xf4, 0x8f, 0x5b, 0x62, 0x7e, 0xca]),
    entry(Bandwidth::Mhz6, 102_000, SegmentClass::ThreeSeg, [0x31, 0xf3, 0x22, 0xdd, 0x87, 0xfe]),
    entry(Bandwidth::Mhz6, 102_000, SegmentClass::FullSeg, [0x6a, 0xf0, 0x9c, 0xd5, 0x30, 0xbf]),
    entry(Bandwidth::Mhz6, 102_850, SegmentClass::OneSegA, [0x4c, 0x55, 0x7d, 0xa7, 0x64, 0xe1]),
    entry(Bandwidth::Mhz6, 102_850, SegmentClass::OneSegB, [0xca, 0xae, 0x43, 0x33, 0xa3, 0xa6]),
    entry(Bandwidth::Mhz6, 102_850, SegmentClass::ThreeSeg, [0x25, 0x78, 0xf4, 0xbe, 0x98, 0x94]),
    entry(Bandwidth::Mhz6, 102_850, SegmentClass::FullSeg, [0xaf, 0xc1, 0x9d, 0xe8, 0x7e, 0xf0]),
    entry(Bandwidth::Mhz6, 104_000, SegmentClass::OneSegA, [0x40, 0x48, 0xa9, 0xb9, 0x71, 0x6b]),
    entry(Bandwidth::Mhz6, 104_000, SegmentClass::OneSegB, [0x3e, 0xce, 0x10, 0x45, 0xb7, 0xd6]),
    entry(Bandwidth::Mhz6, 104_000, SegmentClass::ThreeSeg, [0x19, 0x69, 0x7f, 0xdb, 0x8f, 0xa4]),
    entry(Bandwidth::Mhz6, 104_000, SegmentClass::FullSeg, [0x4d, 0x72, 0x36, 0x23, 0x2a, 0x41]),
    entry(Bandwidth::Mhz6, 104_448, SegmentClass::OneSegA, [0x11, 0xcf, 0xb3, 0xe0, 0x6d, 0x16]),
    entry(Bandwidth::Mhz6, 104_448, SegmentClass::OneSegB, [0xf9, 0x48, 0x90, 0x9d, 0x3a, 0x2f]),
    entry(Bandwidth::Mhz6, 104_448, SegmentClass::ThreeSeg, [0xfc, 0xd8, 0x16, 0x81, 0x54, 0x76]),
    entry(Bandwidth::Mhz6, 104_448, SegmentClass::FullSeg, [0xa5, 0xa1, 0xdc, 0xa8, 0x62, 0xd4]),
    entry(Bandwidth::Mhz6, 105_600, SegmentClass::OneSegA, [0xf4, 0xb1, 0x71, 0x36, 0x19, 0x79]),
    entry(Bandwidth::Mhz6, 105_600, SegmentClass::OneSegB, [0xfe, 0x8d, 0xb0, 0x0f, 0xaa, 0x74]),
    entry(Bandwidth::Mhz6, 105_600, SegmentClass::ThreeSeg, [0x41, 0xd2, 0x63, 0x54, 0xfb, 0xab]),
    entry(Bandwidth::Mhz6, 105_600, SegmentClass::FullSeg, [0x94, 0xbc, 0x3f, 0x9f, 0xf4, 0x06]),
    entry(Bandwidth::Mhz6, 106_496, SegmentClass::OneSegA, [0xb9, 0x68, 0x2c, 0x72, 0x15, 0x66]),
    entry(Bandwidth::Mhz6, 106_496, SegmentClass::OneSegB, [0xad, 0x0b, 0xb6, 0x1a, 0xa1, 0xe0]),
    entry(Bandwidth::Mhz6, 106_496, SegmentClass::ThreeSeg, [0x1b, 0x5e, 0x48, 0x24, 0x0d, 0x2e]),
    entry(Bandwidth::Mhz6, 106_496, SegmentClass::FullSeg, [0x64, 0xb8, 0x22, 0x04, 0x82, 0x1c]),
    entry(Bandwidth::Mhz7, 108_000, SegmentClass::OneSegA, [0x08, 0xb8, 0x42, 0x60, 0xe0, 0x0a]),
    entry(Bandwidth::Mhz7, 108_000, SegmentClass::OneSegB, [0xb9, 0xf2, 0x65, 0x99, 0xc2, 0xeb]),
    entry(Bandwidth::Mhz7, 108_000, SegmentClass::ThreeSeg, [0xc2, 0x6b, 0x8a, 0xdc, 0xdf, 0x29]),
    entry(Bandwidth::Mhz7, 108_000, SegmentClass::FullSeg, [0xf4, 0x3a, 0xcf, 0x96, 0xf2, 0x01]),
    entry(Bandwidth::Mhz7, 110_500, SegmentClass::OneSegA, [0x11, 0xcf, 0x1e, 0x1a, 0x3e, 0xfc]),
    entry(Bandwidth::Mhz7, 110_500, SegmentClass::OneSegB, [0x4a, 0x05, 0xa0, 0x8c, 0xb6, 0x81]),
    entry(Bandwidth::Mhz7, 110_500, SegmentClass::ThreeSeg, [0xf7, 0xc0, 0x48, 0xac, 0xc1, 0x26]),
    entry(Bandwidth::Mhz7, 110_500, SegmentClass::FullSeg, [0x38, 0x8a, 0x4a, 0xe1, 0x38, 0x70]),
    entry(Bandwidth::Mhz7, 110_592, SegmentClass::OneSegA, [0xad, 0xc2, 0x56, 0xa9, 0xa9, 0x32]),
    entry(Bandwidth::Mhz7, 110_592, SegmentClass::OneSegB, [0xfd, 0x6b, 0x22, 0xe6, 0xfa, 0x66]),
    entry(Bandwidth::Mhz7, 110_592, SegmentClass::ThreeSeg, [0xc8, 0xb1, 0x2a, 0x11, 0x4c, 0x50]),
    entry(Bandwidth::Mhz7, 110_592, SegmentClass::FullSeg, [0x32, 0xcc, 0x8c, 0x13, 0x02, 0xdc]),
    entry(Bandwidth::Mhz7, 112_000, SegmentClass::OneSegA, [0x1a, 0xba, 0x48, 0xb0, 0xca, 0xb3]),
    entry(Bandwidth::Mhz7, 112_000, SegmentClass::OneSegB, [0x67, 0xa2, 0x4c, 0x4f, 0x86, 0xfb]),
    entry(Bandwidth::Mhz7, 112_000, SegmentClass::ThreeSeg, [0x2d, 0x02, 0x86, 0xfd, 0xb9, 0xc8]),
    entry(Bandwidth::Mhz7, 112_000, SegmentClass::FullSeg, [0x43, 0xd1, 0xe3, 0xaa, 0xc3, 0x9b]),
    entry(Bandwidth::Mhz7, 112_200, SegmentClass::OneSegA, [0x93, 0xdf, 0x4f, 0xf0, 0x2d, 0x9a]),
    entry(Bandwidth::Mhz7, 112_200, SegmentClass::OneSegB, [0xe5, 0x36, 0x95, 0x98, 0x2e, 0x28]),
    entry(Bandwidth::Mhz7, 112_200, SegmentClass::ThreeSeg, [0xe9, 0x69, 0xbd, 0xaa, 0xd6, 0x7b]),
    entry(Bandwidth::Mhz7, 112_200, SegmentClass::FullSeg, [0x6e, 0x9f, 0x0e, 0xa0, 0xb1, 0x4d]),
    entry(Bandwidth::Mhz7, 114_000, SegmentClass::OneSegA, [0x7d, 0x2e, 0xb1, 0xfb, 0x24, 0x6f]),
    entry(Bandwidth::Mhz7, 114_000, SegmentClass::OneSegB, [0x76, 0xb0, 0x3f, 0xf7, 0x07, 0xcf]),
    entry(Bandwidth::Mhz7, 114_000, SegmentClass::ThreeSeg, [0xa4, 0xaf, 0x05, 0xfe, 0x19, 0xe8]),
    entry(Bandwidth::Mhz7, 114_000, SegmentClass::FullSeg, [0xaa, 0xc8, 0xb2, 0x08, 0x5a, 0xc8]),
    entry(Bandwidth::Mhz7, 114_688, SegmentClass::OneSegA, [0x62, 0xa6, 0xdc, 0xc3, 0x62, 0x0f]),
    entry(Bandwidth::Mhz7, 114_688, SegmentClass::OneSegB, [0x5f, 0x60, 0x36, 0x93, 0x88, 0x60]),
    entry(Bandwidth::Mhz7, 114_688, SegmentClass::ThreeSeg, [0x67, 0xf9, 0x73, 0x49, 0xd7, 0xc8]),
    entry(Bandwidth::Mhz7, 114_688, SegmentClass::FullSeg, [0x66, 0x44, 0x5f, 0x89, 0xb3, 0xa5]),
    entry(Bandwidth::Mhz7, 114_750, SegmentClass::OneSegA, [0x47, 0x95, 0x28, 0x0a, 0x8c, 0x57]),
    entry(Bandwidth::Mhz7, 114_750, SegmentClass::OneSegB, [0x76, 0x17, 0x5a, 0x16, 0x6c, 0x42]),
    entry(Bandwidth::Mhz7, 114_750, SegmentClass::ThreeSeg, [0xe0, 0x26, 0xf0, 0xb1, 0xfd, 0xd3]),
    entry(Bandwidth::Mhz7, 114_750, SegmentClass::FullSeg, [0xe0, 0x97, 0xbd, 0xcd, 0xf6, 0x87]),
    entry(Bandwidth::Mhz7, 115_200, SegmentClass::OneSegA, [0x27, 0x9d, 0x63, 0xbe, 0xc0, 0xec]),
    entry(Bandwidth::Mhz7, 115_200, SegmentClass::OneSegB, [0xc5, 0x12, 0x6e, 0x8d, 0x60, 0xf8]),
    entry(Bandwidth::Mhz7, 115_200, SegmentClass::ThreeSeg, [0xdb, 0xe7, 0x8a, 0x58, 0xc1, 0xc4]),
    entry(Bandwidth::Mhz7, 115_200, SegmentClass::FullSeg, [0x2f, 0x75, 0x6c, 0xf8, 0xc5, 0x64]),
    entry(Bandwidth::Mhz7, 116_736, SegmentClass::OneSegA, [0x32, 0x40, 0x60, 0x8a, 0xc6, 0x3e]),
    entry(Bandwidth::Mhz7, 116_736, SegmentClass::OneSegB, [0xf3, 0x3a, 0x02, 0xe6, 0x5c, 0xb5]),
    entry(Bandwidth::Mhz7, 116_736, SegmentClass::ThreeSeg, [0x86, 0x03, 0x75, 0xef, 0xf1, 0x01]),
    entry(Bandwidth::Mhz7, 116_736, SegmentClass::FullSeg, [0x34, 0xa6, 0x95, 0x6e, 0xef, 0x60]),
    entry(Bandwidth::Mhz7, 117_000, SegmentClass::OneSegA, [0xfa, 0x12, 0xb4, 0x27, 0x44, 0x37]),
    entry(Bandwidth::Mhz7, 117_000, SegmentClass::OneSegB, [0xe1, 0x06, 0x00, 0xcc, 0x3a, 0xc9]),
    entry(Bandwidth::Mhz7, 117_000, SegmentClass::ThreeSeg, [0x4f, 0xb4, 0xe5, 0xfe, 0x23, 0x78]),
    entry(Bandwidth::Mhz7, 117_000, SegmentClass::FullSeg, [0x7f, 0x41, 0x25, 0xd1, 0x8e, 0x30]),
    entry(Bandwidth::Mhz7, 120_000, SegmentClass::OneSegA, [0x99, 0xf8, 0xb0, 0x6b, 0x45, 0x23]),
    entry(Bandwidth::Mhz7, 120_000, SegmentClass::OneSegB, [0x58, 0x94, 0x7f, 0xb7, 0x35, 0x72]),
    entry(Bandwidth::Mhz7, 120_000, SegmentClass::ThreeSeg, [0x34, 0x95, 0x40, 0xbc, 0x2d, 0x06]),
    entry(Bandwidth::Mhz7, 120_000, SegmentClass::FullSeg, [0x61, 0x27, 0x67, 0x1d, 0x85, 0x0e]),
    entry(Bandwidth::Mhz7, 121_500, SegmentClass::OneSegA, [0x04, 0x4f, 0x20, 0xaa, 0x51, 0xbb]),
    entry(Bandwidth::Mhz7, 121_500, SegmentClass::OneSegB, [0x5b, 0x3e, 0x64, 0x81, 0x4a, 0xcb]),
    entry(Bandwidth::Mhz7, 121_500, SegmentClass::ThreeSeg, [0x5f, 0x61, 0x89, 0xe7, 0x28, 0xef]),
    entry(Bandwidth::Mhz7, 121_500, SegmentClass::FullSeg, [0x96, 0xff, 0x03, 0xd6, 0xa3, 0xbe]),
    entry(Bandwidth::Mhz7, 121_550, SegmentClass::OneSegA, [0xc9, 0xbe, 0x40, 0xfc, 0x08, 0x29]),
    entry(Bandwidth::Mhz7, 121_550, SegmentClass::OneSegB, [0x72, 0x86, 0x98, 0x6d, 0xa9, 0x9d]),
    entry(Bandwidth::Mhz7, 121_550, SegmentClass::ThreeSeg, [0xf1, 0x2e, 0x56, 0x29, 0x28, 0x44]),
    entry(Bandwidth::Mhz7, 121_550, SegmentClass::FullSeg, [0x60, 0x71, 0x14, 0x75, 0xcd, 0x5e]),
    entry(Bandwidth::Mhz7, 122_880, SegmentClass::OneSegA, [0x54, 0xcd, 0xf7, 0xd8, 0xa2, 0xa8]),
    entry(Bandwidth::Mhz7, 122_880, SegmentClass::OneSegB, [0x1a, 0x2d, 0x91, 0x16, 0x64, 0x57]),
    entry(Bandwidth::Mhz7, 122_880, SegmentClass::ThreeSeg, [0x33, 0x42, 0xa6, 0x01, 0x15, 0xa6]),
    entry(Bandwidth::Mhz7, 122_880, SegmentClass::FullSeg, [0xab, 0xf6, 0x0d, 0x10, 0xfb, 0x5e]),
    entry(Bandwidth::Mhz7, 124_800, SegmentClass::OneSegA, [0xfa, 0x96, 0x15, 0x6b, 0x7d, 0x0c]),
    entry(Bandwidth::Mhz7, 124_800, SegmentClass::OneSegB, [0x57, 0x0f, 0xb8, 0x2f, 0x7b, 0x6e]),
    entry(Bandwidth::Mhz7, 124_800, SegmentClass::ThreeSeg, [0xbf, 0x15, 0xf2, 0xe8, 0x8d, 0x31]),
    entry(Bandwidth::Mhz7, 124_800, SegmentClass::FullSeg, [0x2a, 0xee, 0xd7, 0x40, 0xc9, 0x0d]),
    entry(Bandwidth::Mhz8, 122_880, SegmentClass::OneSegA, [0xa1, 0xf5, 0xb9, 0x30, 0x8d, 0x2e]),
    entry(Bandwidth::Mhz8, 122_880, SegmentClass::OneSegB, [0xd0, 0x24, 0xc5, 0xca, 0x63, 0x21]),
    entry(Bandwidth::Mhz8, 122_880, SegmentClass::ThreeSeg, [0xd0, 0xb6, 0xac, 0x53, 0x5e, 0x7b]),
    entry(Bandwidth::Mhz8, 122_880, SegmentClass::FullSeg, [0xb6, 0xae, 0x12, 0x67, 0x87, 0xa1]),
    entry(Bandwidth::Mhz8, 124_800, SegmentClass::OneSegA, [0xc3, 0x8c, 0xfb, 0x50, 0x4f, 0xb2]),
    entry(Bandwidth::Mhz8, 124_800, SegmentClass::OneSegB, [0x24, 0xa8, 0x05, 0x69, 0x5f, 0x96]),
    entry(Bandwidth::Mhz8, 124_800, SegmentClass::ThreeSeg, [0x6d, 0x16, 0x05, 0xfb, 0x1e, 0xb0]),
    entry(Bandwidth::Mhz8, 124_800, SegmentClass::FullSeg, [0x90, 0xc9, 0x00, 0x52, 0xaa, 0x37]),
    entry(Bandwidth::Mhz8, 126_000, SegmentClass::OneSegA, [0x73, 0xfe, 0x66, 0xb5, 0xe9, 0x1e]),
    entry(Bandwidth::Mhz8, 126_000, SegmentClass::OneSegB, [0x8d, 0xe4, 0xed, 0x5b, 0xfb, 0x10]),
    entry(Bandwidth::Mhz8, 126_000, SegmentClass::ThreeSeg, [0xda, 0x4e, 0x92, 0x47, 0x55, 0x63]),
    entry(Bandwidth::Mhz8, 126_000, SegmentClass::FullSeg, [0xd8, 0xfb, 0xc8, 0x16, 0x57, 0x11]),
    entry(Bandwidth::Mhz8, 128_000, SegmentClass::OneSegA, [0x86, 0x4c, 0xdb, 0xcc, 0xe9, 0xf1]),
    entry(Bandwidth::Mhz8, 128_000, SegmentClass::OneSegB, [0xf7, 0x98, 0x76, 0x04, 0x15, 0xf3]),
    entry(Bandwidth::Mhz8, 128_000, SegmentClass::ThreeSeg, [0xdf, 0xcb, 0x03, 0x03, 0x0e, 0x20]),
    entry(Bandwidth::Mhz8, 128_000, SegmentClass::FullSeg, [0xc5, 0x1b, 0x92, 0x5a, 0x6e, 0x39]),
    entry(Bandwidth::Mhz8, 128_250, SegmentClass::OneSegA, [0x1d, 0x7f, 0x2b, 0x55, 0x58, 0x04]),
    entry(Bandwidth::Mhz8, 128_250, SegmentClass::OneSegB, [0x4e, 0x51, 0xfd, 0x4c, 0xdc, 0xa9]),
    entry(Bandwidth::Mhz8, 128_250, SegmentClass::ThreeSeg, [0x86, 0xf2, 0x6b, 0x81, 0x52, 0x03]),
    entry(Bandwidth::Mhz8, 128_250, SegmentClass::FullSeg, [0xbd, 0x2f, 0x9f, 0x56, 0x42, 0x10]),
    entry(Bandwidth::Mhz8, 130_000, SegmentClass::OneSegA, [0x23, 0xa0, 0x86, 0xc0, 0x84, 0x68]),
    entry(Bandwidth::Mhz8, 130_000, SegmentClass::OneSegB, [0x8f, 0x17, 0x5d, 0x8c, 0x15, 0x7d]),
    entry(Bandwidth::Mhz8, 130_000, SegmentClass::ThreeSeg, [0xbc, 0xf0, 0x07, 0x6e, 0x61, 0xa7]),
    entry(Bandwidth::Mhz8, 130_000, SegmentClass::FullSeg, [0x93, 0x28, 0x32, 0x90, 0x22, 0x14]),
    entry(Bandwidth::Mhz8, 130_900, SegmentClass::OneSegA, [0x23, 0x23, 0x33, 0x57, 0x5e, 0x4f]),
    entry(Bandwidth::Mhz8, 130_900, SegmentClass::OneSegB, [0x06, 0x01, 0x9e, 0x6a, 0xb9, 0x7e]),
    entry(Bandwidth::Mhz8, 130_900, SegmentClass::ThreeSeg, [0xac, 0xe0, 0xd4, 0x37, 0x60, 0xa2]),
    entry(Bandwidth::Mhz8, 130_900, SegmentClass::FullSeg, [0xf4, 0x05, 0x25, 0x3b, 0x3d, 0x07]),
    entry(Bandwidth::Mhz8, 131_072, SegmentClass::OneSegA, [0x5e, 0x7d, 0xd4, 0xed, 0x1f, 0x52]),
    entry(Bandwidth::Mhz8, 131_072, SegmentClass::OneSegB, [0x71, 0x49, 0x17, 0xee, 0x91, 0x4a]),
    entry(Bandwidth::Mhz8, 131_072, SegmentClass::ThreeSeg, [0x6f, 0xda, 0x9b, 0xf7, 0x1a, 0x60]),
    entry(Bandwidth::Mhz8, 131_072, SegmentClass::FullSeg, [0xe8, 0xad, 0x39, 0x92, 0x38, 0x48]),
    entry(Bandwidth::Mhz8, 132_000, SegmentClass::OneSegA, [0x46, 0xcd, 0x89, 0x76, 0x0e, 0x22]),
    entry(Bandwidth::Mhz8, 132_000, SegmentClass::OneSegB, [0xf8, 0xe3, 0x5a, 0xea, 0xa8, 0xcf]),
    entry(Bandwidth::Mhz8, 132_000, SegmentClass::ThreeSeg, [0x77, 0x2c, 0x99, 0xe4, 0x71, 0x02]),
    entry(Bandwidth::Mhz8, 132_000, SegmentClass::FullSeg, [0xf3, 0xfc, 0x95, 0x3d, 0x9e, 0xbb]),
    entry(Bandwidth::Mhz8, 134_400, SegmentClass::OneSegA, [0xee, 0xab, 0x0b, 0xb2, 0x8d, 0x9b]),
    entry(Bandwidth::Mhz8, 134_400, SegmentClass::OneSegB, [0xcf, 0xb7, 0x54, 0xed, 0x5f, 0x87]),
    entry(Bandwidth::Mhz8, 134_400, SegmentClass::ThreeSeg, [0xa1, 0xa5, 0x2e, 0xf7, 0xf2, 0xa6]),
    entry(Bandwidth::Mhz8, 134_400, SegmentClass::FullSeg, [0x21, 0x48, 0x6f, 0xca, 0xa7, 0x09]),
    entry(Bandwidth::Mhz8, 135_000, SegmentClass::OneSegA, [0x78, 0x9d, 0xdb, 0x56, 0xb8, 0x9c]),
    entry(Bandwidth::Mhz8, 135_000, SegmentClass::OneSegB, [0x9d, 0x0a, 0xfd, 0xa8, 0x74, 0x1e]),
    entry(Bandwidth::Mhz8, 135_000, SegmentClass::ThreeSeg, [0x0b, 0x31, 0x5b, 0xc0, 0x6f, 0x4a]),
    entry(Bandwidth::Mhz8, 135_000, SegmentClass::FullSeg, [0xce, 0xef, 0xc3, 0x0f, 0x24, 0x96]),
    entry(Bandwidth::Mhz8, 135_168, SegmentClass::OneSegA, [0x9d, 0xf2, 0x07, 0xb7, 0xee, 0x71]),
    entry(Bandwidth::Mhz8, 135_168, SegmentClass::OneSegB, [0x0f, 0x75, 0x5f, 0x4d, 0x5e, 0xc8]),
    entry(Bandwidth::Mhz8, 135_168, SegmentClass::ThreeSeg, [0x3d, 0xcc, 0xb3, 0x2a, 0x7d, 0x12]),
    entry(Bandwidth::Mhz8, 135_168, SegmentClass::FullSeg, [0x8c, 0xcc, 0x94, 0x07, 0x75, 0x8a]),
    entry(Bandwidth::Mhz8, 136_000, SegmentClass::OneSegA, [0x01, 0x0c, 0x17, 0xb5, 0x0e, 0x35]),
    entry(Bandwidth::Mhz8, 136_000, SegmentClass::OneSegB, [0x35, 0xd3, 0xb9, 0x56, 0xeb, 0x71]),
    entry(Bandwidth::Mhz8, 136_000, SegmentClass::ThreeSeg, [0xb5, 0x2f, 0x49, 0x7a, 0xf9, 0xab]),
    entry(Bandwidth::Mhz8, 136_000, SegmentClass::FullSeg, [0x02, 0xb8, 0x4e, 0xc1, 0x39, 0xc8]),
    entry(Bandwidth::Mhz8, 139_264, SegmentClass::OneSegA, [0xc8, 0xf6, 0x5d, 0x4c, 0x3c, 0xea]),
    entry(Bandwidth::Mhz8, 139_264, SegmentClass::OneSegB, [0x24, 0x10, 0x63, 0x82, 0x6b, 0x53]),
    entry(Bandwidth::Mhz8, 139_264, SegmentClass::ThreeSeg, [0x17, 0xcb, 0x83, 0xbc, 0xb1, 0x68]),
    entry(Bandwidth::Mhz8, 139_264, SegmentClass::FullSeg, [0x0e, 0x2f, 0x04, 0x58, 0xb5, 0xa6]),
    entry(Bandwidth::Mhz8, 140_250, SegmentClass::OneSegA, [0x0f, 0x2e, 0x86, 0x9b, 0xf6, 0x8d]),
    entry(Bandwidth::Mhz8, 140_250, SegmentClass::OneSegB, [0x18, 0x46, 0x8f, 0xb2, 0xca, 0xf9]),
    entry(Bandwidth::Mhz8, 140_250, SegmentClass::ThreeSeg, [0x85, 0xd2, 0x17, 0x82, 0x7e, 0x27]),
    entry(Bandwidth::Mhz8, 140_250, SegmentClass::FullSeg, [0xb7, 0x49, 0x60, 0x24, 0xb1, 0x7b]),
    entry(Bandwidth::Mhz8, 143_000, SegmentClass::OneSegA, [0xb7, 0xfa, 0x7d, 0xe8, 0xaf, 0xd8]),
    entry(Bandwidth::Mhz8, 143_000, SegmentClass::OneSegB, [0x69, 0x4b, 0x67, 0x00, 0x2b, 0x37]),
    entry(Bandwidth::Mhz8, 143_000, SegmentClass::ThreeSeg, [0x70, 0x67, 0xdf, 0xa0, 0xb6, 0x85]),
    entry(Bandwidth::Mhz8, 143_000, SegmentClass::FullSeg, [0xbe, 0xda, 0x61, 0x23, 0x95, 0xc0]),
];
