//! Moving-body kinematic state and turn-rate-limited steering.

use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::constants::{DEFAULT_MAX_SPEED, DEFAULT_RADIUS, DEFAULT_TURN_RATE_DEG};
use crate::error::PursuitError;
use crate::vector::Vec2;

/// Kinematic state of one moving body.
///
/// `velocity` should never be the zero vector: heading, angle-between
/// and closing-speed computations divide by its norm and surface
/// `DegenerateVector` if it is. The constructor does not enforce this
/// (a stationary prey body is a legal target for pure pursuit).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Identity, for diagnostics only.
    pub name: String,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Declared speed cap (world units per tick). Advisory metadata:
    /// neither `tick` nor `rotate` enforces it.
    pub max_speed: f64,
    /// Maximum rotation magnitude the velocity vector may undergo in
    /// one tick.
    pub turn_rate: Angle,
    /// Collision/drawing extent. Inert to the guidance math.
    pub radius: f64,
}

impl Body {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        x: f64,
        y: f64,
        vx: f64,
        vy: f64,
        max_speed: f64,
        turn_rate: Angle,
        radius: f64,
    ) -> Self {
        Self {
            name: name.into(),
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
            max_speed,
            turn_rate,
            radius,
        }
    }

    /// Body with the crate defaults for the declared limits.
    pub fn with_defaults(name: impl Into<String>, x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self::new(
            name,
            x,
            y,
            vx,
            vy,
            DEFAULT_MAX_SPEED,
            Angle::from_degrees(DEFAULT_TURN_RATE_DEG),
            DEFAULT_RADIUS,
        )
    }

    /// Euler position integration, dt = 1 tick: `position += velocity`.
    /// No internal guard: calling twice in one logical tick
    /// double-integrates.
    pub fn tick(&mut self) {
        self.position = self.position + self.velocity;
    }

    /// Apply a steering command. The command magnitude is clamped to
    /// `turn_rate` (sign preserved) and the velocity vector is rotated
    /// in place by the clamped angle. Returns the angle actually
    /// applied. This is the sole enforcement point for maneuverability
    /// limits.
    pub fn rotate(&mut self, command: Angle) -> Angle {
        let applied = command.clamp_magnitude(self.turn_rate);
        self.velocity.rotate(applied);
        applied
    }

    /// Current heading of the velocity vector (for arrow rendering).
    pub fn heading(&self) -> Result<Angle, PursuitError> {
        self.velocity.heading()
    }

    /// Current speed in world units per tick.
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }
}
