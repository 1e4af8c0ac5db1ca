//! Simulation clock: decouples the fixed move rate from the render rate.
//!
//! The loop renders at 60 fps but the snake only moves 10 times a second;
//! the clock counts rendered frames and fires once every
//! `render_rate / move_rate` of them. It is only ticked while the game is
//! in Playing, and reset on every transition into Playing so the first
//! move after a (re)start takes a full interval.

/// Frame counter that fires one simulation step per N rendered frames.
pub struct SimulationClock {
    ticks_per_move: u32,
    counter: u32,
}

impl SimulationClock {
    /// `ticks_per_move = render_rate / move_rate` (integer division).
    pub fn new(render_rate: u32, move_rate: u32) -> Self {
        Self {
            ticks_per_move: render_rate / move_rate,
            counter: 0,
        }
    }

    /// Count one rendered frame. Returns true exactly when a simulation
    /// step is due, resetting the counter.
    pub fn tick(&mut self) -> bool {
        self.counter += 1;
        if self.counter >= self.ticks_per_move {
            self.counter = 0;
            true
        } else {
            false
        }
    }

    /// Restart the interval (called whenever the game enters Playing).
    pub fn reset(&mut self) {
        self.counter = 0;
    }
}
