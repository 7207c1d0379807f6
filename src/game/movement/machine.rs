// Movement state machine: the fixed per-tick pipeline

use glam::Vec2;
use log::{debug, trace};

use super::config::{ConfigError, MovementConfig, MovementTuning};
use super::sample::{InputSample, SurfaceSample};
use super::state::MovementState;
use super::{clamp, dash, flags, gravity, jump, run};

/// Turns input and probe results into a target velocity, once per tick
///
/// Holds only the immutable tuning of one archetype; the mutable side
/// lives in [`MovementState`], so one machine can drive any number of
/// characters sharing that archetype.
///
/// The order of the sub-behaviours in [`step`](Self::step) is part of the
/// contract:
///
/// 1. surface flags (ground / ceiling / wall edges)
/// 2. gravity
/// 3. run
/// 4. jump and double jump
/// 5. wall jump
/// 6. jump hold (apex assist, early release)
/// 7. dash
/// 8. velocity clamp
#[derive(Debug, Clone)]
pub struct MovementStateMachine {
    tuning: MovementTuning,
}

impl MovementStateMachine {
    /// Validate `config` and build a machine for it
    pub fn new(config: &MovementConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_tuning(config.validate()?))
    }

    pub fn from_tuning(tuning: MovementTuning) -> Self {
        Self { tuning }
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    /// Fresh state for a newly spawned character
    pub fn spawn_state(&self) -> MovementState {
        MovementState::new(&self.tuning)
    }

    /// Return `state` to its spawn values (respawn); keeps an unlocked double jump
    pub fn reset(&self, state: &mut MovementState) {
        let unlocked = state.double_jump_unlocked;
        *state = self.spawn_state();
        state.double_jump_unlocked |= unlocked;
    }

    /// Grant the double jump from now on
    pub fn unlock_double_jump(&self, state: &mut MovementState) {
        if !state.double_jump_unlocked {
            debug!("Double jump unlocked");
            state.double_jump_unlocked = true;
        }
    }

    /// Advance `state` by one tick and return the velocity for the integrator
    ///
    /// `now` is a reading of the same monotonic clock that produces `dt`.
    /// A non-positive or non-finite `dt` leaves the state untouched.
    pub fn step(
        &self,
        state: &mut MovementState,
        input: &InputSample,
        surface: &SurfaceSample,
        dt: f32,
        now: f64,
    ) -> Vec2 {
        if !(dt.is_finite() && dt > 0.0) {
            trace!("Ignoring tick with dt={dt}");
            return state.velocity;
        }

        let tuning = &self.tuning;
        let input = input.clamped();

        flags::register_input(state, &input, now);
        flags::update(tuning, state, surface, now);
        gravity::apply(tuning, state, &input, dt);
        run::apply(tuning, state, &input, dt);
        jump::jump(tuning, state, &input, now);
        jump::wall_jump(tuning, state, now);
        jump::jump_hold(tuning, state, &input, dt);
        dash::apply(tuning, state, &input, now);
        clamp::apply(tuning, state, dt, now);

        state.velocity
    }
}
