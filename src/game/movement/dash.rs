// Dash: start, per-axis velocity assignment, automatic end and refresh

use glam::Vec2;
use log::debug;

use crate::core::math::sign;

use super::config::MovementTuning;
use super::sample::InputSample;
use super::state::{elapsed, DashPhase, MovementState};

/// Horizontal dash assignment: snap up to dash speed, or amplify
fn dash_horizontal(velocity: f32, direction: f32, target: f32, multiplier: f32) -> f32 {
    // Purely vertical dash
    if direction == 0.0 {
        return 0.0;
    }
    if velocity.abs() < target.abs() {
        target
    } else if sign(velocity) == direction {
        velocity * multiplier
    } else {
        -velocity * multiplier
    }
}

/// Vertical dash assignment
///
/// Deliberately asymmetric: a downward dash stacks on top of the current
/// fall speed instead of snapping or multiplying.
fn dash_vertical(velocity: f32, direction: f32, target: f32, multiplier: f32) -> f32 {
    if direction > 0.0 {
        if velocity < target {
            target
        } else {
            velocity * multiplier
        }
    } else if direction == 0.0 {
        0.0
    } else {
        velocity + target
    }
}

pub(crate) fn apply(
    tuning: &MovementTuning,
    state: &mut MovementState,
    input: &InputSample,
    now: f64,
) {
    let buffered = elapsed(state.time_dash_last_pressed, now) <= tuning.dash_buffer;

    if buffered && state.dash_phase == DashPhase::Ready {
        let horizontal = input.horizontal_direction();
        let vertical = input.vertical_direction();
        let direction = if horizontal == 0.0 && vertical == 0.0 {
            Vec2::new(state.facing_direction, 0.0)
        } else {
            Vec2::new(horizontal, vertical)
        };
        let target = direction.normalize_or_zero() * tuning.dash_velocity;

        debug!("Dash towards {direction} at t={now:.3}");
        state.dash_phase = DashPhase::Active;
        state.dash_direction = direction;
        state.time_dash_activated = Some(now);

        let multiplier = tuning.dash_velocity_multiplier;
        state.velocity.x = dash_horizontal(state.velocity.x, direction.x, target.x, multiplier);
        state.velocity.y = dash_vertical(state.velocity.y, direction.y, target.y, multiplier);
    }

    if state.dash_phase == DashPhase::Active
        && elapsed(state.time_dash_activated, now) > tuning.dash_duration
    {
        debug!("Dash ended at t={now:.3}");
        state.end_dash(now);
    }

    // Refresh needs the cooldown and some ground contact inside that window
    if state.dash_phase == DashPhase::Recharging
        && elapsed(state.time_dash_ended, now) > state.dash_cooldown
        && (state.on_ground || elapsed(state.time_left_ground, now) < state.dash_cooldown)
    {
        debug!("Dash ready at t={now:.3}");
        state.dash_phase = DashPhase::Ready;
    }
}
