use anyhow::Result;
use log::info;
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::{Action, InputManager};
use game::Game;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Windstep...");

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Windstep")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    let mut input = InputManager::new();
    let mut game = Game::new()?;
    let mut game_loop = GameLoop::new();

    info!("Game assembled, entering main loop");

    event_loop
        .run(move |event, elwt| {
            match event {
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                Event::WindowEvent {
                    event: WindowEvent::KeyboardInput { event, .. },
                    ..
                } => {
                    handle_debug_keys(&event, &mut game);
                    input.process_keyboard_event(&event);
                }
                Event::AboutToWait => {
                    if input.input().just_pressed(Action::Pause) {
                        game_loop.toggle_pause();
                    }

                    let updates = game_loop.begin_frame();
                    let dt = game_loop.fixed_timestep();
                    game.advance(input.input_mut(), updates, dt);
                    if updates == 0 {
                        // no update ran this frame (paused, or between
                        // fixed steps), so clear edges here instead
                        input.update();
                    }

                    window.request_redraw();
                }
                _ => {}
            }
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// Debug-only: H hurts the player (exercises the damage reaction without
/// enemies in the level), G heals
fn handle_debug_keys(event: &KeyEvent, game: &mut Game) {
    if event.state != ElementState::Pressed || event.repeat {
        return;
    }
    match event.physical_key {
        PhysicalKey::Code(KeyCode::KeyH) => {
            game.health.damage(10);
            info!("player hit, hp={}", game.health.current());
            if game.health.is_dead() {
                info!("player down");
            }
        }
        PhysicalKey::Code(KeyCode::KeyG) => {
            game.health.heal(10);
        }
        _ => {}
    }
}
