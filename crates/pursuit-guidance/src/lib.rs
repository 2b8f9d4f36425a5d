//! Guidance laws for PURSUIT.
//!
//! Pure functions mapping (pursuer, target) state to a commanded
//! rotation of the pursuer's velocity vector. Nothing here mutates
//! state — the orchestrator applies the returned command through
//! `Body::rotate`, which enforces the turn-rate clamp.

pub mod laws;

pub use laws::{
    augmented_proportional_navigation, proportional_navigation, pure_pursuit,
    true_proportional_navigation,
};
pub use pursuit_core as core;
