//! Engagement engine — owns the bodies and runs the tick contract.
//!
//! Per-tick ordering, required for the finite-difference math to see a
//! consistent reference frame:
//! 1. every body integrates position;
//! 2. each tracking pursuer computes its law's command from the
//!    just-integrated state and applies it through the turn-rate clamp;
//! 3. prey apply their evasive turns;
//! 4. each tracking pursuer observes its target, so "previous" always
//!    means one tick behind the command just issued;
//! 5. a snapshot is built.
//!
//! Guidance errors propagate to the caller; the engine never
//! substitutes a fallback command.

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use pursuit_core::angle::Angle;
use pursuit_core::body::Body;
use pursuit_core::constants::{DT, NAV_GAIN_DEFAULT};
use pursuit_core::error::PursuitError;
use pursuit_core::pursuit::Pursuer;
use pursuit_core::state::{BodyView, PursuerView, PursuitStatus, SimSnapshot};

use crate::evasion::{self, EvasionPolicy, EvasionState};
use crate::scenario::Scenario;
use pursuit_guidance::laws;

/// Which homing law the engine runs for every pursuer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuidanceLaw {
    PurePursuit,
    ProportionalNavigation,
    TrueProportionalNavigation,
    #[default]
    AugmentedProportionalNavigation,
}

/// Configuration for a new engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for the prey's evasive maneuvers. Same seed and
    /// scenario = same run.
    pub seed: u64,
    pub law: GuidanceLaw,
    /// Navigation gain N for the proportional laws.
    pub nav_gain: f64,
    /// Evasive maneuvering for prey; `None` means prey fly straight.
    pub evasion: Option<EvasionPolicy>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            law: GuidanceLaw::default(),
            nav_gain: NAV_GAIN_DEFAULT,
            evasion: None,
        }
    }
}

struct PursuerSlot {
    pursuer: Pursuer,
    target: usize,
    status: PursuitStatus,
    last_command: Angle,
}

/// The engagement engine. Owns all bodies and the evasion RNG.
pub struct PursuitEngine {
    config: SimConfig,
    tick: u64,
    prey: Vec<Body>,
    prey_evasion: Vec<EvasionState>,
    pursuers: Vec<PursuerSlot>,
    rng: ChaCha8Rng,
}

impl PursuitEngine {
    /// Build an engine and prime every pursuer's target history, so
    /// the first tick's guidance computation has a valid reference
    /// frame.
    pub fn new(config: SimConfig, scenario: Scenario) -> Self {
        let prey = scenario.prey;
        let mut pursuers: Vec<PursuerSlot> = scenario
            .pursuers
            .into_iter()
            .map(|entry| PursuerSlot {
                pursuer: entry.pursuer,
                target: entry.target,
                status: PursuitStatus::Tracking,
                last_command: Angle::ZERO,
            })
            .collect();
        for slot in &mut pursuers {
            slot.pursuer.update_target_data(&prey[slot.target]);
        }
        let prey_evasion = vec![EvasionState::default(); prey.len()];
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            config,
            tick: 0,
            prey,
            prey_evasion,
            pursuers,
            rng,
        }
    }

    /// Advance the engagement by one tick and return the resulting
    /// snapshot.
    pub fn tick(&mut self) -> Result<SimSnapshot, PursuitError> {
        // 1. Integrate everything before any of this tick's guidance
        // runs.
        for prey in &mut self.prey {
            prey.tick();
        }
        for slot in &mut self.pursuers {
            slot.pursuer.tick();
        }

        // 2. Guidance: one command per pursuer still tracking.
        for slot in &mut self.pursuers {
            if slot.status == PursuitStatus::Intercepted {
                continue;
            }
            let target = &self.prey[slot.target];
            let range = (target.position - slot.pursuer.body.position).norm();
            if range <= target.radius + slot.pursuer.body.radius {
                slot.status = PursuitStatus::Intercepted;
                debug!(
                    "{} intercepted {} at tick {} (range {:.2})",
                    slot.pursuer.body.name,
                    target.name,
                    self.tick + 1,
                    range
                );
                continue;
            }
            let command =
                Self::command(self.config.law, self.config.nav_gain, &slot.pursuer, target)?;
            slot.last_command = slot.pursuer.rotate(command);
        }

        // 3. Prey evasive maneuvers.
        if let Some(policy) = self.config.evasion {
            for (prey, state) in self.prey.iter_mut().zip(&mut self.prey_evasion) {
                let turn = evasion::next_turn(state, &mut self.rng, &policy);
                prey.rotate(turn);
            }
        }

        // 4. Observe targets: the reference frame for next tick's
        // derivatives.
        for slot in &mut self.pursuers {
            if slot.status == PursuitStatus::Tracking {
                slot.pursuer.update_target_data(&self.prey[slot.target]);
            }
        }

        self.tick += 1;
        Ok(self.snapshot())
    }

    fn command(
        law: GuidanceLaw,
        gain: f64,
        pursuer: &Pursuer,
        target: &Body,
    ) -> Result<Angle, PursuitError> {
        match law {
            GuidanceLaw::PurePursuit => laws::pure_pursuit(pursuer, target),
            GuidanceLaw::ProportionalNavigation => {
                laws::proportional_navigation(pursuer, target, gain, DT)
            }
            GuidanceLaw::TrueProportionalNavigation => {
                laws::true_proportional_navigation(pursuer, target, gain, DT)
            }
            GuidanceLaw::AugmentedProportionalNavigation => {
                laws::augmented_proportional_navigation(pursuer, target, gain, DT)
            }
        }
    }

    /// Current engagement state for rendering.
    pub fn snapshot(&self) -> SimSnapshot {
        SimSnapshot {
            tick: self.tick,
            prey: self.prey.iter().map(BodyView::of).collect(),
            pursuers: self
                .pursuers
                .iter()
                .map(|slot| PursuerView {
                    body: BodyView::of(&slot.pursuer.body),
                    target: slot.target,
                    status: slot.status,
                    last_command_deg: slot.last_command.as_degrees(),
                })
                .collect(),
        }
    }

    /// Ticks elapsed since construction.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Read-only access to the prey bodies.
    pub fn prey(&self) -> &[Body] {
        &self.prey
    }

    /// Whether every pursuer has reached its target.
    pub fn all_intercepted(&self) -> bool {
        self.pursuers
            .iter()
            .all(|slot| slot.status == PursuitStatus::Intercepted)
    }
}
