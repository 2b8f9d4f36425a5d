//! Scenario builders — hardcoded engagement setups.
//!
//! Each builder returns the initial bodies for one engagement; the
//! engine primes pursuer history on construction.

use pursuit_core::angle::Angle;
use pursuit_core::body::Body;
use pursuit_core::constants::DEFAULT_RADIUS;
use pursuit_core::pursuit::Pursuer;

/// One engagement setup: prey bodies plus pursuers with their
/// assigned prey index.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub prey: Vec<Body>,
    pub pursuers: Vec<PursuerEntry>,
}

/// A pursuer and the index of the prey it chases.
#[derive(Debug, Clone)]
pub struct PursuerEntry {
    pub pursuer: Pursuer,
    pub target: usize,
}

impl PursuerEntry {
    pub fn new(pursuer: Pursuer, target: usize) -> Self {
        Self { pursuer, target }
    }
}

/// The classic demo: prey crossing the field diagonally, a much
/// faster pursuer entering from the left. Both turn at 3° per tick.
pub fn classic_demo() -> Scenario {
    let turn = Angle::from_degrees(3.0);
    let prey = Body::new("p1", 500.0, 500.0, 4.0, 4.0, 1.0, turn, DEFAULT_RADIUS);
    let pursuer = Body::new("pursuit", 100.0, 400.0, 17.5, 0.0, 1.0, turn, DEFAULT_RADIUS);
    Scenario {
        prey: vec![prey],
        pursuers: vec![PursuerEntry::new(Pursuer::new(pursuer), 0)],
    }
}

/// Head-on approach along the x-axis: collision-course geometry with
/// zero LOS rotation.
pub fn head_on() -> Scenario {
    let turn = Angle::from_degrees(10.0);
    let prey = Body::new("prey", 60.0, 0.0, -1.0, 0.0, 10.0, turn, DEFAULT_RADIUS);
    let pursuer = Body::new("pursuit", 0.0, 0.0, 2.0, 0.0, 10.0, turn, DEFAULT_RADIUS);
    Scenario {
        prey: vec![prey],
        pursuers: vec![PursuerEntry::new(Pursuer::new(pursuer), 0)],
    }
}

/// Prey crossing the pursuer's path at a right angle, pursuer with a
/// 2:1 speed advantage.
pub fn crossing() -> Scenario {
    let turn = Angle::from_degrees(10.0);
    let prey = Body::new("prey", 50.0, 30.0, 0.0, -1.0, 10.0, turn, DEFAULT_RADIUS);
    let pursuer = Body::new("pursuit", 0.0, 0.0, 2.0, 0.0, 10.0, turn, DEFAULT_RADIUS);
    Scenario {
        prey: vec![prey],
        pursuers: vec![PursuerEntry::new(Pursuer::new(pursuer), 0)],
    }
}

/// Stationary prey up the diagonal; exercises pure pursuit without
/// target motion.
pub fn stationary_target() -> Scenario {
    let turn = Angle::from_degrees(10.0);
    let prey = Body::new("prey", 10.0, 10.0, 0.0, 0.0, 10.0, turn, DEFAULT_RADIUS);
    let pursuer = Body::new("pursuit", 0.0, 0.0, 2.0, 0.0, 10.0, turn, DEFAULT_RADIUS);
    Scenario {
        prey: vec![prey],
        pursuers: vec![PursuerEntry::new(Pursuer::new(pursuer), 0)],
    }
}
