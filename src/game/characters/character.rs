// Character entity and management

use glam::Vec2;
use log::{debug, warn};

use crate::engine::physics::{presets, ColliderHandle, PhysicsWorld, RigidBodyHandle};
use crate::game::movement::{InputSample, MovementState, MovementStateMachine, SurfaceSample};

/// Unique identifier for a character
pub type CharacterId = u32;

/// How far past its own edges a character looks for surfaces
pub const DEFAULT_PROBE_DISTANCE: f32 = 0.1;

/// A movable character: one rigid body driven by one movement state
#[derive(Debug)]
pub struct Character {
    /// Unique identifier
    pub id: CharacterId,
    /// Character name (for display)
    pub name: String,

    // Physics
    /// Handle to the character's rigid body in the physics world
    pub body_handle: RigidBodyHandle,
    /// Handle to the character's collider
    pub collider_handle: ColliderHandle,
    /// Half width and half height of the character's bounds
    pub half_extents: Vec2,
    /// Probe reach past the bounds
    pub probe_distance: f32,
    /// Where the character was spawned, used by `respawn`
    pub spawn_point: Vec2,

    // Movement
    controller: MovementStateMachine,
    movement: MovementState,
}

impl Character {
    /// Create a new character and add it to the physics world
    pub fn new(
        id: CharacterId,
        name: &str,
        controller: MovementStateMachine,
        physics: &mut PhysicsWorld,
        spawn_point: Vec2,
        size: Vec2,
    ) -> Self {
        let body = presets::player_body(spawn_point.x, spawn_point.y);
        let body_handle = physics.add_rigid_body(body);

        let collider = presets::player_collider(size.x, size.y);
        let collider_handle = physics.add_collider(collider, body_handle);
        physics.set_entity_mapping(body_handle, u64::from(id));

        let movement = controller.spawn_state();
        Self {
            id,
            name: name.to_string(),
            body_handle,
            collider_handle,
            half_extents: size / 2.0,
            probe_distance: DEFAULT_PROBE_DISTANCE,
            spawn_point,
            controller,
            movement,
        }
    }

    /// Probe the level around the character's body
    pub fn probe(&self, physics: &PhysicsWorld) -> SurfaceSample {
        physics.probe_surfaces(self.body_handle, self.half_extents, self.probe_distance)
    }

    /// Run one movement tick: probe, step the controller, hand the velocity to the body
    ///
    /// Call before `PhysicsWorld::step` so the body moves with the new velocity.
    pub fn tick(
        &mut self,
        physics: &mut PhysicsWorld,
        input: &InputSample,
        dt: f32,
        now: f64,
    ) -> Vec2 {
        let surface = self.probe(physics);
        let velocity = self
            .controller
            .step(&mut self.movement, input, &surface, dt, now);

        if !physics.set_linear_velocity(self.body_handle, velocity) {
            warn!("Character {} ({}) has no rigid body", self.id, self.name);
        }
        velocity
    }

    /// Movement state, for animation and debugging
    pub fn movement(&self) -> &MovementState {
        &self.movement
    }

    /// Get character's current position
    pub fn position(&self, physics: &PhysicsWorld) -> Option<Vec2> {
        physics.position(self.body_handle)
    }

    /// Grant the double jump (progression pickup)
    pub fn unlock_double_jump(&mut self) {
        self.controller.unlock_double_jump(&mut self.movement);
    }

    /// Put the character back at its spawn point with fresh movement state
    pub fn respawn(&mut self, physics: &mut PhysicsWorld) {
        debug!("Respawning character {} ({})", self.id, self.name);
        physics.set_position(self.body_handle, self.spawn_point);
        self.controller.reset(&mut self.movement);
    }
}

/// Manages all characters in the game
#[derive(Debug, Default)]
pub struct CharacterManager {
    characters: Vec<Character>,
    next_id: CharacterId,
}

impl CharacterManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a new character
    pub fn spawn_character(
        &mut self,
        name: &str,
        controller: MovementStateMachine,
        physics: &mut PhysicsWorld,
        spawn_point: Vec2,
        size: Vec2,
    ) -> CharacterId {
        let id = self.next_id;
        self.next_id += 1;

        let character = Character::new(id, name, controller, physics, spawn_point, size);
        self.characters.push(character);

        id
    }

    /// Get a character by ID
    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Get a mutable character by ID
    pub fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.id == id)
    }

    /// Get all characters
    pub fn all(&self) -> &[Character] {
        &self.characters
    }

    /// Remove a character by ID
    pub fn remove(&mut self, id: CharacterId) -> Option<Character> {
        let pos = self.characters.iter().position(|c| c.id == id)?;
        Some(self.characters.remove(pos))
    }

    /// Get the number of characters
    pub fn count(&self) -> usize {
        self.characters.len()
    }
}
