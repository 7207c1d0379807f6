// Per-tick bookkeeping: input registration and surface-derived flags

use log::debug;

use super::config::MovementTuning;
use super::sample::{InputSample, SurfaceSample};
use super::state::{elapsed, JumpPhase, MovementState};

/// Record facing and press timestamps from this tick's input
pub(crate) fn register_input(state: &mut MovementState, input: &InputSample, now: f64) {
    let horizontal = input.horizontal_direction();
    if horizontal != 0.0 {
        state.facing_direction = horizontal;
    }

    if input.jump_pressed {
        state.time_jump_last_pressed = Some(now);
    }
    if input.dash_pressed {
        state.time_dash_last_pressed = Some(now);
    }
}

/// Fold the probe results into the state
pub(crate) fn update(
    tuning: &MovementTuning,
    state: &mut MovementState,
    surface: &SurfaceSample,
    now: f64,
) {
    let was_grounded = state.on_ground;

    if surface.grounded {
        if !was_grounded {
            debug!("Landed at t={now:.3}");
            state.time_touched_ground = Some(now);
            state.jump_phase = JumpPhase::Idle;
        }
        state.on_ground = true;
        state.jump_available = true;
        state.double_jump_available = true;
        state.dash_cooldown = tuning.dash_cooldown_grounded;
    } else {
        if was_grounded {
            debug!("Left ground at t={now:.3}");
            state.time_left_ground = Some(now);
        }
        state.on_ground = false;
        state.dash_cooldown = tuning.dash_cooldown_airborne;

        // Coyote window expired without a jump
        if state.jump_available && elapsed(state.time_left_ground, now) > tuning.coyote_time {
            state.jump_available = false;
        }
    }

    if surface.ceiling_hit {
        if state.jump_phase == JumpPhase::Active {
            state.jump_phase = JumpPhase::EndedEarly;
        }
        if state.velocity.y > 0.0 {
            state.velocity.y = 0.0;
        }
    }

    state.touching_wall = surface.wall_hit;
    state.wall_direction = surface.wall_sign();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::movement::MovementConfig;

    fn setup() -> (MovementTuning, MovementState) {
        let tuning = MovementConfig::default().validate().unwrap();
        let state = MovementState::new(&tuning);
        (tuning, state)
    }

    #[test]
    fn test_register_facing_only_on_input() {
        let (_, mut state) = setup();
        let left = InputSample {
            horizontal_axis: -1.0,
            ..Default::default()
        };
        register_input(&mut state, &left, 0.0);
        assert_eq!(state.facing_direction(), -1.0);

        register_input(&mut state, &InputSample::default(), 0.1);
        assert_eq!(state.facing_direction(), -1.0, "Facing is retained");
    }

    #[test]
    fn test_register_presses() {
        let (_, mut state) = setup();
        let input = InputSample {
            jump_pressed: true,
            dash_pressed: true,
            ..Default::default()
        };
        register_input(&mut state, &input, 1.25);
        assert_eq!(state.time_jump_last_pressed, Some(1.25));
        assert_eq!(state.time_dash_last_pressed, Some(1.25));

        register_input(&mut state, &InputSample::default(), 2.0);
        assert_eq!(state.time_jump_last_pressed, Some(1.25));
    }

    #[test]
    fn test_ground_edges_record_time() {
        let (tuning, mut state) = setup();

        update(&tuning, &mut state, &SurfaceSample::ground(), 1.0);
        assert_eq!(state.time_touched_ground(), Some(1.0));
        assert!(state.jump_available());
        assert!(state.double_jump_available());

        update(&tuning, &mut state, &SurfaceSample::ground(), 1.1);
        assert_eq!(state.time_touched_ground(), Some(1.0), "Only the rising edge counts");

        update(&tuning, &mut state, &SurfaceSample::air(), 2.0);
        assert_eq!(state.time_left_ground(), Some(2.0));
        assert!(!state.is_grounded());
    }

    #[test]
    fn test_dash_cooldown_follows_ground() {
        let (tuning, mut state) = setup();
        update(&tuning, &mut state, &SurfaceSample::ground(), 0.0);
        assert_eq!(state.dash_cooldown, tuning.dash_cooldown_grounded);
        update(&tuning, &mut state, &SurfaceSample::air(), 0.1);
        assert_eq!(state.dash_cooldown, tuning.dash_cooldown_airborne);
    }

    #[test]
    fn test_coyote_expiry_withdraws_jump() {
        let (tuning, mut state) = setup();
        update(&tuning, &mut state, &SurfaceSample::ground(), 0.0);
        update(&tuning, &mut state, &SurfaceSample::air(), 1.0);
        assert!(state.jump_available(), "Still inside coyote time");

        update(&tuning, &mut state, &SurfaceSample::air(), 1.0 + tuning.coyote_time as f64 + 0.01);
        assert!(!state.jump_available());
    }

    #[test]
    fn test_landing_ends_jump() {
        let (tuning, mut state) = setup();
        state.jump_phase = JumpPhase::EndedEarly;
        update(&tuning, &mut state, &SurfaceSample::ground(), 0.5);
        assert_eq!(state.jump_phase(), JumpPhase::Idle);
    }

    #[test]
    fn test_ceiling_bonk() {
        let (tuning, mut state) = setup();
        state.jump_phase = JumpPhase::Active;
        state.velocity.y = 12.0;

        update(&tuning, &mut state, &SurfaceSample::air().with_ceiling(), 0.0);
        assert_eq!(state.vertical_velocity(), 0.0);
        assert!(state.jump_ended_early());
    }

    #[test]
    fn test_ceiling_keeps_downward_velocity() {
        let (tuning, mut state) = setup();
        state.velocity.y = -3.0;
        update(&tuning, &mut state, &SurfaceSample::air().with_ceiling(), 0.0);
        assert_eq!(state.vertical_velocity(), -3.0);
    }

    #[test]
    fn test_wall_contact() {
        let (tuning, mut state) = setup();
        update(&tuning, &mut state, &SurfaceSample::air().with_wall(-1), 0.0);
        assert!(state.touching_wall());
        assert_eq!(state.wall_direction(), -1.0);

        update(&tuning, &mut state, &SurfaceSample::air(), 0.1);
        assert!(!state.touching_wall());
        assert_eq!(state.wall_direction(), 0.0);
    }
}
