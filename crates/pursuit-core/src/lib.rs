//! Core types for the PURSUIT engagement model.
//!
//! This crate defines the vocabulary shared across the workspace:
//! the 2D vector primitive, the angle value type, moving-body
//! kinematics, the pursuer history/derivative calculator, the error
//! taxonomy, constants, and the snapshot views consumed by an external
//! renderer. It has no dependency on any engine or runtime framework.

pub mod angle;
pub mod body;
pub mod constants;
pub mod error;
pub mod pursuit;
pub mod state;
pub mod vector;
