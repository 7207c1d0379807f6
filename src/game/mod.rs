// Game modules: movement controller and the characters it drives

pub mod characters;
pub mod movement;
