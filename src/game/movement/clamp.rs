// Final velocity limits: horizontal speed caps, terminal and wall-slide fall speed

use crate::core::math::sign;

use super::config::MovementTuning;
use super::state::{elapsed, MovementState};

/// Bleed `velocity` towards `cap` without dropping below it
fn approach_cap(velocity: f32, cap: f32, deceleration: f32, dt: f32) -> f32 {
    let direction = sign(velocity);
    let slowed = velocity - direction * deceleration * dt;
    if slowed.abs() < cap {
        direction * cap
    } else {
        slowed
    }
}

pub(crate) fn apply(tuning: &MovementTuning, state: &mut MovementState, dt: f32, now: f64) {
    if !state.dash_active() {
        let speed = state.velocity.x.abs();
        if state.on_ground {
            let settled = elapsed(state.time_touched_ground, now) > tuning.landing_clamp_grace;
            if speed > tuning.max_ground_speed && settled {
                state.velocity.x = approach_cap(
                    state.velocity.x,
                    tuning.max_ground_speed,
                    tuning.over_cap_ground_deceleration,
                    dt,
                );
            }
        } else if speed > tuning.max_air_speed {
            state.velocity.x = approach_cap(
                state.velocity.x,
                tuning.max_air_speed,
                tuning.over_cap_air_deceleration,
                dt,
            );
        }
    }

    let mut terminal = tuning.max_fall_speed;
    if state.fast_fall_active {
        terminal *= tuning.fast_fall_terminal_multiplier;
    }
    if state.velocity.y < -terminal {
        state.velocity.y = -terminal;
    }

    // Checked last so wall contact wins over the general terminal speed
    if state.touching_wall && state.velocity.y <= -tuning.wall_slide_speed {
        state.velocity.y = -tuning.wall_slide_speed;
    }
}
