// Horizontal locomotion: acceleration, deceleration and turn-around

use crate::core::math::{move_towards, sign};

use super::config::MovementTuning;
use super::sample::InputSample;
use super::state::MovementState;

/// Speeds below this snap to rest when there is no input
pub const STOP_EPSILON: f32 = 0.01;

/// Clamp `velocity` so it does not exceed `cap` along `direction`
fn cap_along(velocity: f32, direction: f32, cap: f32) -> f32 {
    if velocity * direction > cap {
        direction * cap
    } else {
        velocity
    }
}

pub(crate) fn apply(
    tuning: &MovementTuning,
    state: &mut MovementState,
    input: &InputSample,
    dt: f32,
) {
    if state.dash_active() {
        return;
    }

    let grounded = state.on_ground;
    let moving = sign(state.velocity.x);
    let wanted = input.horizontal_direction();
    let mut vx = state.velocity.x;

    if wanted != 0.0 {
        if vx.abs() < tuning.run_speed {
            let acceleration = if grounded {
                tuning.ground_acceleration
            } else {
                tuning.air_acceleration
            };
            vx += input.horizontal_axis * acceleration * dt;
            vx = cap_along(vx, wanted, tuning.run_speed);
        }
    } else if vx.abs() > STOP_EPSILON {
        let deceleration = if grounded {
            tuning.ground_deceleration
        } else {
            tuning.air_deceleration
        };
        vx = move_towards(vx, 0.0, deceleration * dt);
    } else {
        vx = 0.0;
    }

    // Reversing: extra push so turns feel snappier than stop-then-go
    if wanted != 0.0 && moving != 0.0 && wanted != moving {
        let turn_around = if grounded {
            tuning.ground_turn_around
        } else {
            tuning.air_turn_around
        };
        vx += input.horizontal_axis * turn_around * dt;
        vx = cap_along(vx, wanted, tuning.run_speed);
    }

    state.velocity.x = vx;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::movement::{DashPhase, MovementConfig};
    use approx::assert_relative_eq;

    const DT: f32 = 0.1;

    fn setup(grounded: bool) -> (MovementTuning, MovementState) {
        let tuning = MovementConfig::default().validate().unwrap();
        let mut state = MovementState::new(&tuning);
        state.on_ground = grounded;
        (tuning, state)
    }

    fn axis(horizontal: f32) -> InputSample {
        InputSample {
            horizontal_axis: horizontal,
            ..Default::default()
        }
    }

    #[test]
    fn test_accelerates_towards_input() {
        let (tuning, mut state) = setup(true);
        apply(&tuning, &mut state, &axis(1.0), DT);
        // 60 u/s² * 0.1 s
        assert_relative_eq!(state.horizontal_velocity(), 6.0, epsilon = 1e-4);
    }

    #[test]
    fn test_analog_input_scales_acceleration() {
        let (tuning, mut state) = setup(true);
        apply(&tuning, &mut state, &axis(-0.5), DT);
        assert_relative_eq!(state.horizontal_velocity(), -3.0, epsilon = 1e-4);
    }

    #[test]
    fn test_capped_at_run_speed() {
        let (tuning, mut state) = setup(true);
        state.velocity.x = 10.0;
        apply(&tuning, &mut state, &axis(1.0), DT);
        assert_eq!(state.horizontal_velocity(), tuning.run_speed);
    }

    #[test]
    fn test_no_acceleration_above_run_speed() {
        let (tuning, mut state) = setup(false);
        state.velocity.x = 20.0;
        apply(&tuning, &mut state, &axis(1.0), DT);
        assert_eq!(state.horizontal_velocity(), 20.0);
    }

    #[test]
    fn test_airborne_uses_air_rates() {
        let config = MovementConfig {
            air_acceleration_time: 0.4,
            ..MovementConfig::default()
        };
        let tuning = config.validate().unwrap();
        let mut state = MovementState::new(&tuning);
        apply(&tuning, &mut state, &axis(1.0), DT);
        // 12 / 0.4 = 30 u/s²
        assert_relative_eq!(state.horizontal_velocity(), 3.0, epsilon = 1e-4);
    }

    #[test]
    fn test_decelerates_without_input() {
        let (tuning, mut state) = setup(false);
        state.velocity.x = 10.0;
        apply(&tuning, &mut state, &InputSample::default(), DT);
        // Air deceleration 48 u/s²
        assert_relative_eq!(state.horizontal_velocity(), 5.2, epsilon = 1e-4);
    }

    #[test]
    fn test_deceleration_does_not_cross_zero() {
        let (tuning, mut state) = setup(true);
        state.velocity.x = -3.0;
        apply(&tuning, &mut state, &InputSample::default(), DT);
        assert_eq!(state.horizontal_velocity(), 0.0);
    }

    #[test]
    fn test_tiny_velocity_snaps_to_zero() {
        let (tuning, mut state) = setup(true);
        state.velocity.x = STOP_EPSILON / 2.0;
        apply(&tuning, &mut state, &InputSample::default(), DT);
        assert_eq!(state.horizontal_velocity(), 0.0);
    }

    #[test]
    fn test_turn_around_boost() {
        let (tuning, mut state) = setup(true);
        state.velocity.x = 8.0;
        apply(&tuning, &mut state, &axis(-1.0), DT);
        // 8 - 6 (acceleration) - 18 (turn-around) = -16, capped at -12
        assert_eq!(state.horizontal_velocity(), -tuning.run_speed);

        let (tuning, mut state) = setup(true);
        state.velocity.x = 30.0;
        apply(&tuning, &mut state, &axis(-1.0), DT);
        // Too fast to accelerate, turn-around alone applies
        assert_relative_eq!(state.horizontal_velocity(), 12.0, epsilon = 1e-4);
    }

    #[test]
    fn test_small_reverse_deflection_scales_turn_around() {
        let (tuning, mut state) = setup(true);
        state.velocity.x = 8.0;
        apply(&tuning, &mut state, &axis(-0.01), DT);
        // 8 - 0.01 * 60 * 0.1 - 0.01 * 180 * 0.1
        assert_relative_eq!(state.horizontal_velocity(), 7.76, epsilon = 1e-4);
        assert!(state.horizontal_velocity() > 0.0);
    }

    #[test]
    fn test_dash_suspends_run() {
        let (tuning, mut state) = setup(true);
        state.dash_phase = DashPhase::Active;
        state.velocity.x = 20.0;
        apply(&tuning, &mut state, &axis(-1.0), DT);
        assert_eq!(state.horizontal_velocity(), 20.0);
    }
}
