//! The four classical homing laws.
//!
//! Each law reads the pursuer and target state and returns the
//! commanded rotation for this tick. The navigation gain `N` is
//! explicit (`NAV_GAIN_DEFAULT` is the conventional value), as is the
//! tick duration `dt`, which the engine fixes at 1.
//! Missing-history and degenerate-vector conditions propagate to the
//! caller; there is no fallback command.

use pursuit_core::angle::Angle;
use pursuit_core::body::Body;
use pursuit_core::error::PursuitError;
use pursuit_core::pursuit::Pursuer;

/// Pure-pursuit homing: drive the velocity vector onto the current
/// line of sight.
///
/// Returns the unsigned angle between the pursuer's velocity and the
/// pursuer→target LOS vector. Ignores target motion entirely and
/// carries no turn direction; callers wanting a signed command use
/// one of the proportional laws.
pub fn pure_pursuit(pursuer: &Pursuer, target: &Body) -> Result<Angle, PursuitError> {
    let los = target.position - pursuer.body.position;
    pursuer.body.velocity.angle_between(&los)
}

/// Simple proportional navigation: `N × dθ_LOS/dt`.
///
/// Rotates the velocity vector in proportion to the LOS rotation
/// rate; ignores closing speed.
pub fn proportional_navigation(
    pursuer: &Pursuer,
    target: &Body,
    gain: f64,
    dt: f64,
) -> Result<Angle, PursuitError> {
    Ok(Angle::from_radians(gain * pursuer.los_rate(target, dt)?))
}

/// True proportional navigation: `N × V_c × dθ_LOS/dt`.
///
/// The simple law scaled by the range-closure rate, so the command
/// grows as the engagement tightens.
pub fn true_proportional_navigation(
    pursuer: &Pursuer,
    target: &Body,
    gain: f64,
    dt: f64,
) -> Result<Angle, PursuitError> {
    let closing = pursuer.closing_speed(target)?;
    let los_rate = pursuer.los_rate(target, dt)?;
    Ok(Angle::from_radians(gain * closing * los_rate))
}

/// Augmented proportional navigation:
/// `N × V_c × dθ_LOS/dt + (N × n_T) / 2`.
///
/// `n_T` estimates the target's maneuver as the one-tick change in the
/// target-velocity component projected onto the (previous vs. current)
/// unit LOS direction, divided by `dt`.
///
/// Numerically the most sensitive of the four laws: `n_T`
/// differentiates an already-differenced quantity, so observation
/// noise is amplified rather than filtered. Callers wanting smoother
/// commands should lower the gain, not expect filtering here.
pub fn augmented_proportional_navigation(
    pursuer: &Pursuer,
    target: &Body,
    gain: f64,
    dt: f64,
) -> Result<Angle, PursuitError> {
    let true_pn = gain * pursuer.closing_speed(target)? * pursuer.los_rate(target, dt)?;

    let previous_position = pursuer
        .previous_position()
        .ok_or(PursuitError::MissingHistory)?;
    let previous_target = pursuer
        .previous_target()
        .ok_or(PursuitError::MissingHistory)?;

    let degenerate = PursuitError::DegenerateVector {
        op: "augmented_proportional_navigation",
    };
    let old_los = (previous_target.position - previous_position)
        .unit()
        .map_err(|_| degenerate)?;
    let new_los = (target.position - pursuer.body.position)
        .unit()
        .map_err(|_| degenerate)?;

    let old_normal_velocity = previous_target.velocity.dot(&old_los);
    let new_normal_velocity = target.velocity.dot(&new_los);
    let target_acceleration = (new_normal_velocity - old_normal_velocity) / dt;

    Ok(Angle::from_radians(
        true_pn + gain * target_acceleration / 2.0,
    ))
}
