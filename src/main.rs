use anyhow::{Context, Result};
use glam::Vec2;
use log::info;

use rusted_platformer::engine::game_loop::{GameLoop, FIXED_TIMESTEP, FIXED_TIMESTEP_DURATION};
use rusted_platformer::engine::input::{Action, PlayerInput};
use rusted_platformer::engine::physics::{presets, PhysicsWorld};
use rusted_platformer::game::characters::CharacterManager;
use rusted_platformer::game::movement::{InputSample, MovementConfig, MovementStateMachine};

/// Length of the scripted run, in rendered frames
const DEMO_FRAMES: u32 = 240;

/// Add a fixed box to the level
fn add_block(physics: &mut PhysicsWorld, position: Vec2, size: Vec2) {
    let body = physics.add_rigid_body(presets::platform_body(position.x, position.y));
    physics.add_collider(presets::platform_collider(size.x, size.y), body);
}

/// Scripted stand-in for a keyboard: run right, jump, dash towards the wall, jump again
fn script(frame: u32, input: &mut PlayerInput) {
    match frame {
        30 => input.press(Action::MoveRight),
        60 => input.press(Action::Jump),
        75 => input.release(Action::Jump),
        95 => input.press(Action::Dash),
        96 => input.release(Action::Dash),
        110 => input.press(Action::Jump),
        112 => input.release(Action::Jump),
        120 => input.release(Action::MoveRight),
        150 => input.press(Action::Jump),
        155 => input.release(Action::Jump),
        165 => input.press(Action::Jump),
        170 => input.release(Action::Jump),
        _ => {}
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Rusted Platformer...");

    let config = match std::env::args().nth(1) {
        Some(path) => MovementConfig::load(&path)
            .with_context(|| format!("Failed to load movement archetype {path}"))?,
        None => MovementConfig::default(),
    };
    let controller = MovementStateMachine::new(&config).context("Invalid movement archetype")?;

    let mut physics = PhysicsWorld::new();
    physics.set_timestep(FIXED_TIMESTEP);

    // Floor with a tall wall to the right
    add_block(&mut physics, Vec2::new(0.0, 0.0), Vec2::new(40.0, 1.0));
    add_block(&mut physics, Vec2::new(12.0, 4.5), Vec2::new(1.0, 8.0));

    let mut characters = CharacterManager::new();
    let player_id = characters.spawn_character(
        "Player 1",
        controller,
        &mut physics,
        Vec2::new(0.0, 1.55),
        Vec2::new(1.0, 2.0),
    );

    // Probes only see colliders once the query pipeline has been built
    physics.step();
    info!("Level ready, running {DEMO_FRAMES} scripted frames");

    let mut input = PlayerInput::new();
    let mut game_loop = GameLoop::new();

    for frame in 0..DEMO_FRAMES {
        script(frame, &mut input);

        match frame {
            140 => {
                if let Some(player) = characters.get_mut(player_id) {
                    player.unlock_double_jump();
                    info!("{} picked up the double jump", player.name);
                }
            }
            200 => game_loop.pause(),
            205 => game_loop.resume(),
            _ => {}
        }

        let updates = game_loop.advance(FIXED_TIMESTEP_DURATION);
        for _ in 0..updates {
            let now = game_loop.fixed_update();
            let sample = InputSample::from_player(&input);

            if let Some(player) = characters.get_mut(player_id) {
                player.tick(&mut physics, &sample, FIXED_TIMESTEP, now);
            }

            physics.step();
            input.update();
        }

        if frame % 20 == 0 {
            if let Some(player) = characters.get(player_id) {
                let movement = player.movement();
                let position = player.position(&physics).unwrap_or_default();
                info!(
                    "t={:.2} pos=({:.2}, {:.2}) vel=({:.2}, {:.2}) grounded={} wall={} dash={:?}",
                    game_loop.sim_time(),
                    position.x,
                    position.y,
                    movement.horizontal_velocity(),
                    movement.vertical_velocity(),
                    movement.is_grounded(),
                    movement.touching_wall(),
                    movement.dash_phase(),
                );
            }
        }
    }

    if let Some(player) = characters.get_mut(player_id) {
        player.respawn(&mut physics);
        input.reset();
        info!("{} respawned at {:?}", player.name, player.spawn_point);
    }

    info!(
        "Demo finished after {} updates over {} frames",
        game_loop.update_count(),
        game_loop.frame_count()
    );

    Ok(())
}
