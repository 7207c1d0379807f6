// Input handling system
//
// Tracks the held, pressed and released state of game actions per player.
// The movement controller reads a snapshot of this once per fixed tick.
//
// ## Usage Example
//
// ```rust
// use rusted_platformer::engine::input::{Action, PlayerInput};
//
// let mut player = PlayerInput::new();
// player.press(Action::Jump);
//
// if player.just_pressed(Action::Jump) {
//     // Jump edge for this tick
// }
//
// // After the tick has consumed the input
// player.update();
// ```

pub mod action;
pub mod player;

// Re-export commonly used types
pub use action::Action;
pub use player::PlayerInput;
