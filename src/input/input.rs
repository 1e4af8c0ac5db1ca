//! Direction voting from discrete keys and the continuous pointer.

use crate::game::game::{Direction, Point};

/// Logical key identity, already stripped of the physical binding
/// (arrows and WASD both map here).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Up,
    Down,
    Left,
    Right,
    /// Y / Enter: start or restart.
    Confirm,
    /// N: decline a restart.
    Decline,
}

/// Everything the window reported for one frame.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Keys that went down this frame, in event order.
    pub keys: Vec<GameKey>,
    /// Pointer position in window pixels, when the window has one.
    pub pointer: Option<(f32, f32)>,
    /// Left mouse button is down.
    pub clicked: bool,
    /// Some key, mapped or not, went down this frame (menu start trigger).
    pub any_key: bool,
}

/// Maps one frame's raw input onto at most one accepted direction vote.
pub struct InputTranslator {
    cell_size: f32,
}

impl InputTranslator {
    pub fn new(cell_size: usize) -> Self {
        Self {
            cell_size: cell_size as f32,
        }
    }

    /// Evaluate both channels against the current heading and the snake
    /// head's cell. Returns the vote the last-evaluated channel accepted,
    /// or `None` to leave the pending vote untouched.
    pub fn direction_vote(
        &self,
        input: &FrameInput,
        current: Direction,
        head: Point,
    ) -> Option<Direction> {
        let mut vote = None;

        for key in &input.keys {
            let wanted = match key {
                GameKey::Up => Direction::Up,
                GameKey::Down => Direction::Down,
                GameKey::Left => Direction::Left,
                GameKey::Right => Direction::Right,
                _ => continue,
            };
            // Axis lock: only perpendicular turns from the keyboard.
            if wanted.is_horizontal() != current.is_horizontal() {
                vote = Some(wanted);
            }
        }

        if let Some((mx, my)) = input.pointer {
            let wanted = self.pointer_direction(mx, my, head);
            if wanted != current.opposite() {
                vote = Some(wanted);
            }
        }

        vote
    }

    /// Dominant axis of the vector from the head's rendered pixel center
    /// to the pointer; ties go vertical, sign picks the direction.
    fn pointer_direction(&self, mx: f32, my: f32, head: Point) -> Direction {
        let head_px = head.x as f32 * self.cell_size + self.cell_size / 2.0;
        let head_py = head.y as f32 * self.cell_size + self.cell_size / 2.0;
        let dx = mx - head_px;
        let dy = my - head_py;
        if dx.abs() > dy.abs() {
            if dx > 0.0 { Direction::Right } else { Direction::Left }
        } else if dy > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}
