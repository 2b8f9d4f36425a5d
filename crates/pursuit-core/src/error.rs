//! Error taxonomy for the kinematics and guidance math.
//!
//! The core never recovers from these locally: every failure is
//! reported to the immediate caller, which decides whether to abort,
//! skip a tick, or substitute a command. There are no retries and no
//! implicit fallback values.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PursuitError {
    /// An operation that requires a nonzero-norm vector received a
    /// zero vector (heading, angle-between, closing speed with
    /// coincident positions).
    #[error("degenerate zero-norm vector in `{op}`")]
    DegenerateVector { op: &'static str },

    /// A derivative or guidance computation was invoked before the
    /// pursuer's history slots were populated. The orchestrator's
    /// contract is to prime history (`update_target_data` plus one
    /// `tick`) before the first guidance call.
    #[error("pursuit history not primed; call update_target_data before the first guidance computation")]
    MissingHistory,
}
