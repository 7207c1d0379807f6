// Math utilities and helper functions

/// Direction of a scalar: -1.0, 0.0 or 1.0
///
/// Unlike `f32::signum`, zero (and NaN) map to 0.0, so callers can
/// compare directions without dividing by a magnitude.
pub fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Move `current` towards `target` by at most `max_delta`, never overshooting
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + sign(delta) * max_delta
    }
}
