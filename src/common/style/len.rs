use std::fmt;

use crate::common::unit::{EMUS_PER_CM, EMUS_PER_INCH, EMUS_PER_MM, pt_to_emu_f64, px_to_emu};

/// Length measurement with units.
///
/// Stored in EMUs (English Metric Units) and written to ODF attributes in
/// millimetres.
///
/// # Examples
///
/// ```rust
/// use longan::common::Length;
///
/// let margin = Length::from_cm(1.5);
/// assert_eq!(margin.to_odf(), "15mm");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Length {
    /// Value in EMUs
    /// 1 inch = 914,400 EMUs
    /// 1 cm = 360,000 EMUs
    emus: i64,
}

impl Length {
    /// Create a length from EMUs.
    #[inline]
    pub const fn from_emus(emus: i64) -> Self {
        Self { emus }
    }

    /// Create a length from inches.
    #[inline]
    pub fn from_inches(inches: f64) -> Self {
        Self {
            emus: (inches * EMUS_PER_INCH as f64).round() as i64,
        }
    }

    /// Create a length from centimeters.
    #[inline]
    pub fn from_cm(cm: f64) -> Self {
        Self {
            emus: (cm * EMUS_PER_CM as f64).round() as i64,
        }
    }

    /// Create a length from millimeters.
    #[inline]
    pub fn from_mm(mm: f64) -> Self {
        Self {
            emus: (mm * EMUS_PER_MM as f64).round() as i64,
        }
    }

    /// Create a length from points (1/72 inch).
    #[inline]
    pub fn from_points(pt: f64) -> Self {
        Self {
            emus: pt_to_emu_f64(pt),
        }
    }

    /// Create a length from a pixel count at the given resolution.
    #[inline]
    pub fn from_pixels(px: u32, dpi: u32) -> Self {
        Self {
            emus: px_to_emu(px, dpi),
        }
    }

    /// Get the value in EMUs.
    #[inline]
    pub const fn emus(&self) -> i64 {
        self.emus
    }

    /// Convert to inches.
    #[inline]
    pub fn inches(&self) -> f64 {
        self.emus as f64 / EMUS_PER_INCH as f64
    }

    /// Convert to centimeters.
    #[inline]
    pub fn cm(&self) -> f64 {
        self.emus as f64 / EMUS_PER_CM as f64
    }

    /// Convert to millimeters.
    #[inline]
    pub fn mm(&self) -> f64 {
        self.emus as f64 / EMUS_PER_MM as f64
    }

    /// Convert to points (1/72 inch).
    #[inline]
    pub fn points(&self) -> f64 {
        self.inches() * 72.0
    }

    /// Attribute value in millimetres with at most three decimals, e.g. `12.7mm`
    pub fn to_odf(&self) -> String {
        let mut value = format!("{:.3}", self.mm());
        while value.ends_with('0') {
            value.pop();
        }
        if value.ends_with('.') {
            value.pop();
        }
        if value == "-0" {
            value = "0".to_string();
        }
        value.push_str("mm");
        value
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_odf())
    }
}
