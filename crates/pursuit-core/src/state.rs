//! Snapshot views — the engagement state handed to an external
//! renderer after each tick.

use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::vector::Vec2;

/// Whether a pursuer is still guiding or has reached its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PursuitStatus {
    #[default]
    Tracking,
    Intercepted,
}

/// Render-facing view of one body: position, velocity vector (for
/// heading/arrow drawing), and collision radius.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BodyView {
    pub name: String,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Heading in degrees. 0 for a zero velocity vector; display only,
    /// the guidance math never reads this field.
    pub heading_deg: f64,
    /// Speed in world units per tick.
    pub speed: f64,
    pub radius: f64,
}

impl BodyView {
    pub fn of(body: &Body) -> Self {
        Self {
            name: body.name.clone(),
            position: body.position,
            velocity: body.velocity,
            heading_deg: body.heading().map(|a| a.as_degrees()).unwrap_or(0.0),
            speed: body.speed(),
            radius: body.radius,
        }
    }
}

/// Render-facing view of one pursuer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PursuerView {
    pub body: BodyView,
    /// Index of the assigned prey in `SimSnapshot::prey`.
    pub target: usize,
    pub status: PursuitStatus,
    /// Degrees actually applied by the last steering command, after
    /// the turn-rate clamp.
    pub last_command_deg: f64,
}

/// Complete engagement state emitted after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub tick: u64,
    pub prey: Vec<BodyView>,
    pub pursuers: Vec<PursuerView>,
}
