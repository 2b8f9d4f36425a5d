//! Angle value type with explicit degree/radian conversion.

use std::f64::consts::{PI, TAU};
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A signed rotation angle. Stored in radians; constructed and read in
/// either unit so callers never apply a conversion factor by hand.
/// Positive is counter-clockwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    pub const ZERO: Angle = Angle { radians: 0.0 };

    pub fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    pub fn as_radians(&self) -> f64 {
        self.radians
    }

    pub fn as_degrees(&self) -> f64 {
        self.radians.to_degrees()
    }

    pub fn abs(&self) -> Angle {
        Angle::from_radians(self.radians.abs())
    }

    /// Sign-preserving clamp: an angle whose magnitude exceeds `limit`
    /// is replaced by ±`limit` with the original sign.
    pub fn clamp_magnitude(&self, limit: Angle) -> Angle {
        let bound = limit.radians.abs();
        Angle::from_radians(self.radians.clamp(-bound, bound))
    }

    /// Wrap into (-π, π], the principal branch used when differencing
    /// headings.
    pub fn wrapped(&self) -> Angle {
        let mut r = self.radians.rem_euclid(TAU);
        if r > PI {
            r -= TAU;
        }
        Angle::from_radians(r)
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, other: Angle) -> Angle {
        Angle::from_radians(self.radians + other.radians)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, other: Angle) -> Angle {
        Angle::from_radians(self.radians - other.radians)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::from_radians(-self.radians)
    }
}
