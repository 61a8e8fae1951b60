use anyhow::Result;
use log::info;
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

use platformer_controller::engine::game_loop::GameLoop;
use platformer_controller::engine::input::InputManager;
use platformer_controller::engine::physics::{presets, PhysicsWorld, SurfaceTag};
use platformer_controller::game::characters::{Character, MovementStats};

/// What the window does with a key before the controller sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostKey {
    TogglePause,
    Exit,
    /// Host key event that must not reach the controller
    Swallowed,
    Forward,
}

/// P and Escape belong to the host in every phase, repeats included, so
/// they never count as a held key for the controller
fn host_key(key: PhysicalKey, state: ElementState, repeat: bool) -> HostKey {
    let pressed = state == ElementState::Pressed;

    match key {
        PhysicalKey::Code(KeyCode::KeyP) if pressed && !repeat => HostKey::TogglePause,
        PhysicalKey::Code(KeyCode::Escape) if pressed => HostKey::Exit,
        PhysicalKey::Code(KeyCode::KeyP | KeyCode::Escape) => HostKey::Swallowed,
        _ => HostKey::Forward,
    }
}

/// Build the demo level: a floor and a climbable wall on the right
fn build_level(physics: &mut PhysicsWorld) {
    let floor = physics.add_rigid_body(presets::level_body(0.0, 0.0));
    physics.add_surface(
        presets::ground_collider(40.0, 1.0),
        floor,
        SurfaceTag::Ground,
    );

    let wall = physics.add_rigid_body(presets::level_body(8.0, 5.0));
    physics.add_surface(presets::wall_collider(1.0, 10.0), wall, SurfaceTag::Wall);
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting platformer controller demo...");

    let mut physics = PhysicsWorld::new();
    build_level(&mut physics);

    let mut character = Character::new(MovementStats::standard(), &mut physics, 0.0, 3.0)?;
    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Platformer Controller")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    // Main event loop
    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

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
            } => match host_key(event.physical_key, event.state, event.repeat) {
                HostKey::TogglePause => game_loop.toggle_pause(),
                HostKey::Exit => {
                    info!("Escape pressed, shutting down...");
                    elwt.exit();
                }
                HostKey::Swallowed => {}
                HostKey::Forward => input.process_keyboard_event(&event),
            },
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Key-up events are lost while unfocused
                input.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                // Nothing is drawn; the window only hosts keyboard focus
            }
            Event::AboutToWait => {
                let ticks = game_loop.begin_frame();
                let dt = game_loop.fixed_timestep();

                for _ in 0..ticks {
                    character.fixed_update(&input, &mut physics, dt);
                    physics.step();
                    character.route_contacts(&physics);
                }

                character.update_animation(game_loop.render_delta_time());

                if ticks > 0 && game_loop.update_count() % 50 < ticks as u64 {
                    if let Some(pos) = character.position(&physics) {
                        log::debug!(
                            "{:?} at ({:.2}, {:.2}) clip {:?}",
                            character.state(),
                            pos.x,
                            pos.y,
                            character.animation.current_animation()
                        );
                    }
                }

                window.request_redraw();
            }
            _ => {}
        }
    })
    .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::ElementState::{Pressed, Released};
    use platformer_controller::engine::input::InputProvider;

    #[test]
    fn test_pause_toggles_once_per_press() {
        let p = PhysicalKey::Code(KeyCode::KeyP);

        assert_eq!(host_key(p, Pressed, false), HostKey::TogglePause);
        assert_eq!(host_key(p, Pressed, true), HostKey::Swallowed);
        assert_eq!(host_key(p, Released, false), HostKey::Swallowed);
    }

    #[test]
    fn test_held_pause_key_never_reaches_input() {
        let mut input = InputManager::new();
        let p = PhysicalKey::Code(KeyCode::KeyP);

        for repeat in [false, true, true, true] {
            if host_key(p, Pressed, repeat) == HostKey::Forward {
                input.press_key(KeyCode::KeyP);
            }
        }

        assert!(!input.any_key_held());
    }

    #[test]
    fn test_escape_and_controller_keys() {
        let escape = PhysicalKey::Code(KeyCode::Escape);
        assert_eq!(host_key(escape, Pressed, false), HostKey::Exit);
        assert_eq!(host_key(escape, Released, false), HostKey::Swallowed);

        let right = PhysicalKey::Code(KeyCode::KeyD);
        assert_eq!(host_key(right, Pressed, true), HostKey::Forward);
        assert_eq!(host_key(right, Released, false), HostKey::Forward);
    }
}
