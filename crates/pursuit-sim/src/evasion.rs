//! Evasive maneuvering for prey bodies.
//!
//! A prey draws a random per-tick turn and holds it for a fixed number
//! of ticks before redrawing. The random source is threaded in
//! explicitly so that guidance and kinematics stay deterministic and a
//! whole engine run reproduces from its seed.

use rand::Rng;
use serde::{Deserialize, Serialize};

use pursuit_core::angle::Angle;
use pursuit_core::constants::{EVASION_HOLD_TICKS, EVASION_MAX_TURN_DEG};

/// Jink tuning for prey bodies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EvasionPolicy {
    /// Ticks a drawn turn command is held before redrawing.
    pub hold_ticks: u32,
    /// Maximum per-tick turn magnitude (degrees). The drawn turn is
    /// uniform in [-max_turn_deg, +max_turn_deg].
    pub max_turn_deg: f64,
}

impl Default for EvasionPolicy {
    fn default() -> Self {
        Self {
            hold_ticks: EVASION_HOLD_TICKS,
            max_turn_deg: EVASION_MAX_TURN_DEG,
        }
    }
}

/// Per-body jink state.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvasionState {
    remaining_ticks: u32,
    current_turn_deg: f64,
}

/// The turn to apply this tick. Redraws whenever the hold period
/// expires; the first call always draws.
pub fn next_turn(
    state: &mut EvasionState,
    rng: &mut impl Rng,
    policy: &EvasionPolicy,
) -> Angle {
    if state.remaining_ticks == 0 {
        state.current_turn_deg = rng.gen_range(-policy.max_turn_deg..=policy.max_turn_deg);
        state.remaining_ticks = policy.hold_ticks.max(1);
    }
    state.remaining_ticks -= 1;
    Angle::from_degrees(state.current_turn_deg)
}
