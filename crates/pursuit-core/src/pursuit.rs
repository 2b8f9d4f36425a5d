//! Pursuer state: a kinematic body plus the one-tick-lagged snapshots
//! that feed the finite-difference LOS-rate and closing-speed
//! calculations.

use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::body::Body;
use crate::error::PursuitError;
use crate::vector::Vec2;

/// Target state captured by `update_target_data`: always one tick
/// behind the command that was just issued.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetObservation {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// A pursuit-capable body: kinematic state plus an owned, fixed-size
/// history — one slot for the pursuer's own prior position, one for
/// the last observed target state.
///
/// `None` means a slot has not been populated yet. Requesting a
/// derivative before both slots are populated is a contract violation
/// by the caller and surfaces `MissingHistory`, never a default value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pursuer {
    pub body: Body,
    previous_position: Option<Vec2>,
    previous_target: Option<TargetObservation>,
}

impl Pursuer {
    pub fn new(body: Body) -> Self {
        Self {
            body,
            previous_position: None,
            previous_target: None,
        }
    }

    /// Snapshot the current position into the self-history slot, then
    /// integrate as `Body::tick`.
    pub fn tick(&mut self) {
        self.previous_position = Some(self.body.position);
        self.body.tick();
    }

    /// Steering passthrough; see `Body::rotate`.
    pub fn rotate(&mut self, command: Angle) -> Angle {
        self.body.rotate(command)
    }

    /// Capture the target's current state as the reference frame for
    /// the next tick's derivatives. The orchestrator calls this
    /// exactly once per tick, after the guidance command for the tick
    /// has been computed and applied.
    pub fn update_target_data(&mut self, target: &Body) {
        self.previous_target = Some(TargetObservation {
            position: target.position,
            velocity: target.velocity,
        });
    }

    /// The pursuer's own position one tick ago, if populated.
    pub fn previous_position(&self) -> Option<Vec2> {
        self.previous_position
    }

    /// The last observed target state, if populated.
    pub fn previous_target(&self) -> Option<&TargetObservation> {
        self.previous_target.as_ref()
    }

    fn history(&self) -> Result<(Vec2, &TargetObservation), PursuitError> {
        match (self.previous_position, self.previous_target.as_ref()) {
            (Some(position), Some(target)) => Ok((position, target)),
            _ => Err(PursuitError::MissingHistory),
        }
    }

    /// LOS rotation rate over the last tick, in radians per tick
    /// (signed; positive is counter-clockwise).
    ///
    /// One-tick backward difference of the pursuer-to-target LOS
    /// heading. Both evaluations use pursuer position, keeping the LOS
    /// definition consistent across the difference, and the heading
    /// delta is wrapped to (-π, π] before dividing by `dt`.
    pub fn los_rate(&self, target: &Body, dt: f64) -> Result<f64, PursuitError> {
        let (previous_position, previous_target) = self.history()?;
        let old_los = (previous_target.position - previous_position)
            .heading()
            .map_err(|_| PursuitError::DegenerateVector { op: "los_rate" })?;
        let new_los = (target.position - self.body.position)
            .heading()
            .map_err(|_| PursuitError::DegenerateVector { op: "los_rate" })?;
        Ok((new_los - old_los).wrapped().as_radians() / dt)
    }

    /// Closing speed toward `target`, in world units per tick.
    /// Projects the relative velocity onto the unit LOS vector and
    /// negates it, so a positive result means the range is decreasing.
    pub fn closing_speed(&self, target: &Body) -> Result<f64, PursuitError> {
        let separation = self.body.position - target.position;
        let range = separation.norm();
        if range == 0.0 {
            return Err(PursuitError::DegenerateVector {
                op: "closing_speed",
            });
        }
        let relative_velocity = self.body.velocity - target.velocity;
        Ok(-(relative_velocity.dot(&separation) / range))
    }
}
