//! Headless engagement engine for PURSUIT.
//!
//! Owns the prey and pursuer bodies, enforces the per-tick ordering
//! contract (integrate, guide, steer, observe), drives evasive prey
//! maneuvers from an explicitly seeded RNG, and produces
//! `SimSnapshot`s for an external renderer. Completely headless,
//! enabling deterministic testing.

pub mod engine;
pub mod evasion;
pub mod scenario;

pub use engine::{GuidanceLaw, PursuitEngine, SimConfig};
pub use pursuit_core as core;

#[cfg(test)]
mod tests;
