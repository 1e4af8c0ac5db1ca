//! Slither: a retro grid snake arcade game written in Rust.
//!
//! A 30×20 cell playfield rendered into a 600×400 framebuffer, a fixed-rate
//! simulation decoupled from the 60 fps render loop, and chiptune sound
//! effects synthesized from waveform math at startup (no sample assets).
//!
//! ## Modules
//!
//! - **audio** – tone library: the two pre-built sound buffers and their
//!   fire-and-forget playback sink
//! - **clock** – simulation clock: one snake move per N rendered frames
//! - **game** – game state machine: grid, snake, food, score, mode, `step()`
//! - **input** – key and pointer samples → one direction vote per frame
//! - **render** – framebuffer drawing: cells, bitmap text, the three screens
//! - **synth** – waveform synthesizer: (frequency, duration, volume, shape, decay) → samples

pub mod audio;
pub mod clock;
pub mod game;
pub mod input;
pub mod render;
pub mod synth;
