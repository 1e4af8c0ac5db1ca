//! Game state machine: grid, snake, food, score, and mode.
//!
//! All mutable simulation data lives in one [`game::Game`] value owned by
//! the frame loop; there is no ambient state. `step()` advances the snake
//! exactly one cell and reports what happened so the loop can trigger the
//! matching tone. Modes: Menu → Playing on start, Playing → GameOver on
//! collision, GameOver → Playing on restart (quit is the loop's call).

pub mod game;

#[cfg(test)]
mod tests;
