// Game action definitions

/// Every action a platformer character can be driven by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Up,
    Down,

    // Abilities
    Jump,
    Dash,
}
