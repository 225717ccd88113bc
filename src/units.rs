//! Units & Canvas - Fixed-Point Geometry
//!
//! All geometry is normalized to EMU (English Metric Units), the integer
//! unit presentation formats use natively.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

use crate::error::{DeckError, Result};
use crate::shapes::Rect;

pub const EMU_PER_INCH: i64 = 914_400;
pub const EMU_PER_POINT: i64 = 12_700;
pub const EMU_PER_CENTIMETER: i64 = 360_000;
pub const EMU_PER_MILLIMETER: i64 = 36_000;

/// Largest length a measurement may convert to, about 307 million inches.
/// Sums of two in-range lengths cannot overflow `i64`.
pub const MAX_EMU: Emu = Emu((1 << 48) - 1);

/// Canonical length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Emu(pub i64);

impl Emu {
    pub const ZERO: Emu = Emu(0);

    pub fn inches(value: f64) -> Result<Self> {
        to_canonical(value, LengthUnit::Inch)
    }

    pub fn points(value: f64) -> Result<Self> {
        to_canonical(value, LengthUnit::Point)
    }

    pub fn get(self) -> i64 {
        self.0
    }

    pub fn checked_add(self, rhs: Emu) -> Option<Emu> {
        self.0.checked_add(rhs.0).map(Emu)
    }

    /// True when `-MAX_EMU <= self <= MAX_EMU`.
    pub fn in_range(self) -> bool {
        self.0.unsigned_abs() <= MAX_EMU.0 as u64
    }
}

// Saturating, so hand-built out-of-range values clamp instead of panicking.
impl Add for Emu {
    type Output = Emu;
    fn add(self, rhs: Emu) -> Emu {
        Emu(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Emu {
    type Output = Emu;
    fn sub(self, rhs: Emu) -> Emu {
        Emu(self.0.saturating_sub(rhs.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Emu,
    Inch,
    Point,
    Centimeter,
    Millimeter,
}

impl LengthUnit {
    pub fn emu_per_unit(self) -> i64 {
        match self {
            LengthUnit::Emu => 1,
            LengthUnit::Inch => EMU_PER_INCH,
            LengthUnit::Point => EMU_PER_POINT,
            LengthUnit::Centimeter => EMU_PER_CENTIMETER,
            LengthUnit::Millimeter => EMU_PER_MILLIMETER,
        }
    }
}

/// Convert a measurement into EMU, rounding to the nearest unit.
pub fn to_canonical(value: f64, unit: LengthUnit) -> Result<Emu> {
    if !value.is_finite() {
        return Err(DeckError::InvalidMeasurement {
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(DeckError::InvalidMeasurement {
            value,
            reason: "must not be negative",
        });
    }
    let emu = (value * unit.emu_per_unit() as f64).round();
    if emu > MAX_EMU.0 as f64 {
        return Err(DeckError::InvalidMeasurement {
            value,
            reason: "out of range",
        });
    }
    Ok(Emu(emu as i64))
}

/// Inverse of [`to_canonical`].
pub fn from_canonical(value: Emu, unit: LengthUnit) -> f64 {
    value.0 as f64 / unit.emu_per_unit() as f64
}

/// The drawing surface every slide shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: Emu,
    pub height: Emu,
}

impl Canvas {
    pub fn new(width: Emu, height: Emu) -> Result<Self> {
        for dim in [width, height] {
            if dim.0 < 0 {
                return Err(DeckError::InvalidMeasurement {
                    value: dim.0 as f64,
                    reason: "canvas dimensions must not be negative",
                });
            }
            if !dim.in_range() {
                return Err(DeckError::InvalidMeasurement {
                    value: dim.0 as f64,
                    reason: "out of range",
                });
            }
        }
        Ok(Self { width, height })
    }

    pub fn from_inches(width: f64, height: f64) -> Result<Self> {
        Self::new(Emu::inches(width)?, Emu::inches(height)?)
    }

    /// 13.333in x 7.5in, the 16:9 widescreen page.
    pub fn widescreen() -> Self {
        Self {
            width: Emu(12_191_695),
            height: Emu(6_858_000),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            left: Emu::ZERO,
            top: Emu::ZERO,
            width: self.width,
            height: self.height,
        }
    }

    pub fn contains(&self, rect: &Rect) -> bool {
        self.bounds().contains(rect)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::widescreen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_inch_and_point_factors() {
        assert_eq!(to_canonical(1.0, LengthUnit::Inch).unwrap(), Emu(914_400));
        assert_eq!(to_canonical(1.5, LengthUnit::Point).unwrap(), Emu(19_050));
        assert_eq!(to_canonical(2.54, LengthUnit::Centimeter).unwrap(), Emu(914_400));
    }

    #[test]
    fn test_negative_rejected() {
        let err = to_canonical(-0.1, LengthUnit::Inch).unwrap_err();
        assert!(matches!(err, DeckError::InvalidMeasurement { .. }));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(to_canonical(f64::NAN, LengthUnit::Point).is_err());
        assert!(to_canonical(f64::INFINITY, LengthUnit::Inch).is_err());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = to_canonical(9.0e12, LengthUnit::Inch).unwrap_err();
        assert!(matches!(err, DeckError::InvalidMeasurement { reason: "out of range", .. }));
        assert_eq!(to_canonical(MAX_EMU.0 as f64, LengthUnit::Emu).unwrap(), MAX_EMU);
        assert!(to_canonical(MAX_EMU.0 as f64 + 1.0, LengthUnit::Emu).is_err());
    }

    #[test]
    fn test_arithmetic_saturates() {
        assert_eq!(Emu(i64::MAX) + Emu(1), Emu(i64::MAX));
        assert_eq!(Emu(i64::MIN) - Emu(1), Emu(i64::MIN));
        assert_eq!(Emu(i64::MAX).checked_add(Emu(1)), None);
        assert_eq!(MAX_EMU.checked_add(MAX_EMU), Some(Emu(2 * MAX_EMU.0)));
    }

    #[test]
    fn test_widescreen_matches_inches() {
        let canvas = Canvas::from_inches(13.333, 7.5).unwrap();
        assert_eq!(canvas, Canvas::widescreen());
    }

    #[test]
    fn test_negative_canvas_rejected() {
        assert!(Canvas::new(Emu(-1), Emu(10)).is_err());
    }

    proptest! {
        #[test]
        fn round_trip_is_exact(x in 0i64..(1i64 << 48)) {
            for unit in [
                LengthUnit::Emu,
                LengthUnit::Inch,
                LengthUnit::Point,
                LengthUnit::Centimeter,
                LengthUnit::Millimeter,
            ] {
                let back = to_canonical(from_canonical(Emu(x), unit), unit).unwrap();
                prop_assert_eq!(back, Emu(x));
            }
        }
    }
}
