// Jump, double jump, wall jump and the apex hang-time assist
//
// Evaluated in that order within a tick: a grounded jump next to a wall
// is a normal jump, and the wall jump cooldown then blocks a second
// activation on the same press.

use log::debug;

use super::config::MovementTuning;
use super::sample::InputSample;
use super::state::{elapsed, JumpPhase, MovementState};

/// Raise vertical velocity to the jump strength, never lowering it
fn launch(state: &mut MovementState, strength: f32) {
    if state.velocity.y < strength {
        state.velocity.y = strength;
    }
}

fn begin(state: &mut MovementState, now: f64) {
    state.time_jump_last_used = Some(now);
    state.jump_phase = JumpPhase::Active;
}

/// Primary jump (ground, coyote time, buffered press) then double jump
pub(crate) fn jump(
    tuning: &MovementTuning,
    state: &mut MovementState,
    input: &InputSample,
    now: f64,
) {
    let within_coyote = elapsed(state.time_left_ground, now) <= tuning.coyote_time;
    let buffered = elapsed(state.time_jump_last_pressed, now) <= tuning.jump_buffer;

    if state.jump_available && (state.on_ground || within_coyote) && buffered {
        debug!("Jump at t={now:.3}");
        begin(state, now);
        state.jump_available = false;

        if state.dash_active() {
            debug!("Dash cancelled by jump");
            state.end_dash(now);
            state.velocity.x *= tuning.dash_cancel_multiplier;
        }

        launch(state, tuning.jump_strength);
        return;
    }

    if state.double_jump_unlocked
        && input.jump_pressed
        && state.double_jump_available
        && !state.on_ground
        && elapsed(state.time_left_ground, now) >= tuning.double_jump_delay
        && !state.touching_wall
    {
        debug!("Double jump at t={now:.3}");
        begin(state, now);
        state.double_jump_available = false;

        if state.dash_active() {
            state.end_dash(now);
        }

        launch(state, tuning.jump_strength);
    }
}

/// Kick off a wall, away from it
pub(crate) fn wall_jump(tuning: &MovementTuning, state: &mut MovementState, now: f64) {
    let buffered = elapsed(state.time_jump_last_pressed, now) <= tuning.jump_buffer;
    let cooled_down = elapsed(state.time_jump_last_used, now) > tuning.wall_jump_cooldown;

    if !state.on_ground && state.touching_wall && buffered && cooled_down {
        debug!("Wall jump off {} at t={now:.3}", state.wall_direction);
        begin(state, now);
        state.velocity.y = tuning.wall_jump_vertical_strength;
        state.velocity.x = -state.wall_direction * tuning.wall_jump_horizontal_strength;
    }
}

/// Apex hang time while held, and early-release detection
pub(crate) fn jump_hold(
    tuning: &MovementTuning,
    state: &mut MovementState,
    input: &InputSample,
    dt: f32,
) {
    if state.jump_phase != JumpPhase::Active {
        return;
    }

    if !input.jump_held {
        state.jump_phase = JumpPhase::EndedEarly;
        return;
    }

    if state.velocity.y.abs() < tuning.jump_peak_threshold {
        state.velocity.y += tuning.jump_peak_slowdown_strength * tuning.gravity_strength * dt;
    }
}
