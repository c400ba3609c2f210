//! Unit conversion constants and helpers.
//!
//! Lengths are stored in EMUs (English Metric Units) so conversions between
//! inches, centimetres, points and pixels stay exact integers.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_MM: i64 = 36_000;
pub const EMUS_PER_PT: i64 = 12_700;

/// Resolution assumed when an image only reports pixel dimensions
pub const DEFAULT_DPI: u32 = 96;

#[inline]
pub fn pt_to_emu_f64(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64).round() as i64
}

#[inline]
pub fn px_to_emu(px: u32, dpi: u32) -> i64 {
    ((px as f64) * EMUS_PER_INCH as f64 / dpi.max(1) as f64).round() as i64
}

#[inline]
pub fn px_to_emu_96(px: u32) -> i64 {
    px_to_emu(px, DEFAULT_DPI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_to_emu_96() {
        assert_eq!(px_to_emu_96(96), EMUS_PER_INCH);
        assert_eq!(px_to_emu_96(0), 0);
    }

    #[test]
    fn test_pt_to_emu() {
        assert_eq!(pt_to_emu_f64(72.0), EMUS_PER_INCH);
    }
}
