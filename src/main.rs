//! Game entry point and frame loop.
//!
//! Opens the window and audio sink, then runs one cooperative loop:
//! drain input → advance the simulation when the clock fires → draw →
//! present, paced to 60 fps. The snake itself only moves 10 times a
//! second; the simulation clock bridges the two rates.

use std::time::{Duration, Instant};

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use slither::audio::audio::ToneLibrary;
use slither::clock::SimulationClock;
use slither::game::game::{Game, Mode, StepOutcome};
use slither::input::input::{FrameInput, GameKey, InputTranslator};
use slither::render::render::{CELL_SIZE, Renderer, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Target one frame per 16.67 ms for ~60 fps.
const FRAME_DURATION: Duration = Duration::from_nanos(16_666_667);
const RENDER_RATE: u32 = 60;
/// Snake moves per second.
const MOVE_RATE: u32 = 10;

fn main() {
    let tones = ToneLibrary::new();
    let mut game = Game::new();
    let translator = InputTranslator::new(CELL_SIZE);
    let mut clock = SimulationClock::new(RENDER_RATE, MOVE_RATE);
    let mut renderer = Renderer::new();

    let mut window = Window::new(
        "#! ULTRA SNAKE 20XX",
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        WindowOptions::default(),
    )
    .expect("Failed to create window");

    window.set_target_fps(RENDER_RATE as usize);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let frame_start = Instant::now();

        let input = gather_input(&window);

        match game.mode {
            Mode::Menu => {
                // Any key or click leaves the menu.
                if input.any_key || input.clicked {
                    game.start();
                    clock.reset();
                }
            }
            Mode::Playing => {
                if let Some(vote) = translator.direction_vote(&input, game.direction, game.head())
                {
                    game.cast_vote(vote);
                }
                if clock.tick() {
                    match game.step() {
                        StepOutcome::Ate => tones.play_eat(),
                        StepOutcome::Died => tones.play_death(),
                        StepOutcome::Moved => {}
                    }
                }
            }
            Mode::GameOver => {
                if input.keys.contains(&GameKey::Confirm) {
                    game.start();
                    clock.reset();
                } else if input.keys.contains(&GameKey::Decline) {
                    break;
                }
            }
        }

        renderer.draw(&game);
        window
            .update_with_buffer(&renderer.framebuffer, SCREEN_WIDTH, SCREEN_HEIGHT)
            .expect("Failed to update window");

        // Pace to ~60 fps; this sleep is the loop's only suspension point.
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }
}

/// Poll the window once: key-down events (no repeat) in order, the clamped
/// pointer position, and the left button state.
fn gather_input(window: &Window) -> FrameInput {
    let pressed = window.get_keys_pressed(KeyRepeat::No);
    let keys = pressed
        .iter()
        .filter_map(|key| match key {
            Key::Up | Key::W => Some(GameKey::Up),
            Key::Down | Key::S => Some(GameKey::Down),
            Key::Left | Key::A => Some(GameKey::Left),
            Key::Right | Key::D => Some(GameKey::Right),
            Key::Y | Key::Enter => Some(GameKey::Confirm),
            Key::N => Some(GameKey::Decline),
            _ => None,
        })
        .collect();

    FrameInput {
        keys,
        pointer: window.get_mouse_pos(MouseMode::Clamp),
        clicked: window.get_mouse_down(MouseButton::Left),
        any_key: !pressed.is_empty(),
    }
}
