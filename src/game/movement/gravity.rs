// Gravity: airborne acceleration, fast fall and jump-end shaping

use super::config::MovementTuning;
use super::sample::InputSample;
use super::state::MovementState;

pub(crate) fn apply(
    tuning: &MovementTuning,
    state: &mut MovementState,
    input: &InputSample,
    dt: f32,
) {
    if state.dash_active() {
        return;
    }

    if state.on_ground {
        state.velocity.y = 0.0;
        state.fast_fall_active = false;
        return;
    }

    let gravity = tuning.gravity_strength * dt;
    state.velocity.y -= gravity;

    state.fast_fall_active = input.wants_down();
    if state.fast_fall_active {
        state.velocity.y -= tuning.fast_fall_strength * gravity;
    }

    // Snappier fall after an early release or once past the apex
    let phase = state.jump_phase;
    if phase.is_active()
        && (phase.ended_early() || state.velocity.y < -tuning.jump_peak_threshold)
    {
        state.velocity.y -= tuning.jump_end_gravity_multiplier * gravity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::movement::{DashPhase, JumpPhase, MovementConfig};
    use approx::assert_relative_eq;

    const DT: f32 = 0.1;

    fn setup() -> (MovementTuning, MovementState) {
        let tuning = MovementConfig::default().validate().unwrap();
        let state = MovementState::new(&tuning);
        (tuning, state)
    }

    fn down() -> InputSample {
        InputSample {
            vertical_axis: -1.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_grounded_zeroes_vertical() {
        let (tuning, mut state) = setup();
        state.on_ground = true;
        state.velocity.y = -30.0;
        apply(&tuning, &mut state, &down(), DT);
        assert_eq!(state.vertical_velocity(), 0.0);
        assert!(!state.fast_fall_active(), "No fast fall on the ground");
    }

    #[test]
    fn test_airborne_gravity() {
        let (tuning, mut state) = setup();
        apply(&tuning, &mut state, &InputSample::default(), DT);
        assert_relative_eq!(state.vertical_velocity(), -5.0, epsilon = 1e-4);
        assert!(!state.fast_fall_active());
    }

    #[test]
    fn test_fast_fall_adds_gravity() {
        let (tuning, mut state) = setup();
        apply(&tuning, &mut state, &down(), DT);
        // Base 5 plus fast fall strength 1.0 * 5
        assert_relative_eq!(state.vertical_velocity(), -10.0, epsilon = 1e-4);
        assert!(state.fast_fall_active());
    }

    #[test]
    fn test_slight_down_deflection_is_plain_gravity() {
        let (tuning, mut state) = setup();
        let drift = InputSample {
            vertical_axis: -0.001,
            ..Default::default()
        };
        apply(&tuning, &mut state, &drift, DT);
        assert_relative_eq!(state.vertical_velocity(), -5.0, epsilon = 1e-4);
        assert!(!state.fast_fall_active());
    }

    #[test]
    fn test_early_release_gravity() {
        let (tuning, mut state) = setup();
        state.jump_phase = JumpPhase::EndedEarly;
        state.velocity.y = 10.0;
        apply(&tuning, &mut state, &InputSample::default(), DT);
        // Gravity 5 plus early-release multiplier 1.0 * 5
        assert_relative_eq!(state.vertical_velocity(), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_held_jump_rising_has_plain_gravity() {
        let (tuning, mut state) = setup();
        state.jump_phase = JumpPhase::Active;
        state.velocity.y = 10.0;
        apply(&tuning, &mut state, &InputSample::default(), DT);
        assert_relative_eq!(state.vertical_velocity(), 5.0, epsilon = 1e-4);
    }

    #[test]
    fn test_held_jump_past_apex_pulls_harder() {
        let (tuning, mut state) = setup();
        state.jump_phase = JumpPhase::Active;
        state.velocity.y = 1.0;
        apply(&tuning, &mut state, &InputSample::default(), DT);
        // 1 - 5 = -4, below -threshold, so another 5
        assert_relative_eq!(state.vertical_velocity(), -9.0, epsilon = 1e-4);
    }

    #[test]
    fn test_no_jump_no_extra_gravity() {
        let (tuning, mut state) = setup();
        state.velocity.y = -20.0;
        apply(&tuning, &mut state, &InputSample::default(), DT);
        assert_relative_eq!(state.vertical_velocity(), -25.0, epsilon = 1e-4);
    }

    #[test]
    fn test_dash_suspends_gravity() {
        let (tuning, mut state) = setup();
        state.dash_phase = DashPhase::Active;
        state.velocity.y = 3.0;
        apply(&tuning, &mut state, &down(), DT);
        assert_eq!(state.vertical_velocity(), 3.0);
        assert!(!state.fast_fall_active());
    }
}
