//! 2D vector primitive underlying the kinematics and guidance math.

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::error::PursuitError;

/// A 2D Cartesian vector (position or velocity, world units).
///
/// Value semantics: pure computations return new vectors; in-place
/// rotation is the explicit opt-in mutation (`rotate`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(&self, other: &Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Unit vector in the same direction.
    pub fn unit(&self) -> Result<Vec2, PursuitError> {
        let n = self.norm();
        if n == 0.0 {
            return Err(PursuitError::DegenerateVector { op: "unit" });
        }
        Ok(Vec2::new(self.x / n, self.y / n))
    }

    /// Counter-clockwise rotation by the standard 2D rotation matrix.
    /// Rotating the zero vector yields the zero vector.
    pub fn rotated(&self, angle: Angle) -> Vec2 {
        let (sin, cos) = angle.as_radians().sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// In-place rotation. The receiver is mutated and the rotated
    /// value is also returned.
    pub fn rotate(&mut self, angle: Angle) -> Vec2 {
        *self = self.rotated(angle);
        *self
    }

    /// Angle of the vector relative to the positive x-axis, via atan2
    /// on the unit vector.
    pub fn heading(&self) -> Result<Angle, PursuitError> {
        if self.norm() == 0.0 {
            return Err(PursuitError::DegenerateVector { op: "heading" });
        }
        Ok(Angle::from_radians(self.y.atan2(self.x)))
    }

    /// Unsigned angle between two vectors, in [0, π].
    ///
    /// The cosine argument is clamped to [-1, 1] before `acos`: for
    /// near-parallel vectors round-off can produce values like
    /// 1.0000000002, which would otherwise yield NaN.
    pub fn angle_between(&self, other: &Vec2) -> Result<Angle, PursuitError> {
        let norms = self.norm() * other.norm();
        if norms == 0.0 {
            return Err(PursuitError::DegenerateVector {
                op: "angle_between",
            });
        }
        let cos = (self.dot(other) / norms).clamp(-1.0, 1.0);
        Ok(Angle::from_radians(cos.acos()))
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

/// A plain coordinate pair is accepted on the right-hand side. A bare
/// scalar is not: `Vec2 + f64` has no impl and fails at compile time.
impl Add<(f64, f64)> for Vec2 {
    type Output = Vec2;

    fn add(self, (x, y): (f64, f64)) -> Vec2 {
        Vec2::new(self.x + x, self.y + y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, scalar: f64) -> Vec2 {
        Vec2::new(self.x * scalar, self.y * scalar)
    }
}
