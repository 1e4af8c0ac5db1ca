//! Snake simulation: movement, collision, growth, and food placement.

use rand::Rng;
use rand::rngs::ThreadRng;

/// Playfield width in cells. Fixed for the process lifetime.
pub const GRID_WIDTH: i32 = 30;
/// Playfield height in cells.
pub const GRID_HEIGHT: i32 = 20;

/// A cell on the grid: `0 <= x < GRID_WIDTH`, `0 <= y < GRID_HEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True when the point lies inside the grid.
    pub fn in_bounds(self) -> bool {
        (0..GRID_WIDTH).contains(&self.x) && (0..GRID_HEIGHT).contains(&self.y)
    }
}

/// One of the four cardinal movement directions. +y is down (screen space).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit cell offset for one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The exact 180° reverse of this direction.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True for Left/Right, false for Up/Down. Two directions share an
    /// axis exactly when this agrees.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Coarse game phase. Governs which inputs are live and what gets drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Playing,
    GameOver,
}

/// What a single simulation step did, for the loop to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved one cell without eating.
    Moved,
    /// Head landed on the food: grew by one, score went up by one.
    Ate,
    /// Hit a wall or itself: the move was not applied, mode is GameOver.
    Died,
}

/// All mutable simulation data for the current game.
pub struct Game {
    /// Body cells, head first, tail last. No duplicates while alive.
    pub snake: Vec<Point>,
    /// Direction applied during the most recent step.
    pub direction: Direction,
    /// Pending direction vote; adopted wholesale at the next step.
    /// Reversal filtering happens at vote-acceptance time in the input module.
    pub next_direction: Direction,
    pub food: Point,
    pub score: u32,
    pub mode: Mode,
    rng: ThreadRng,
}

impl Game {
    /// A fresh game sitting in the menu. The board itself is not live
    /// until `start()`.
    pub fn new() -> Self {
        let mut game = Game {
            snake: Vec::new(),
            direction: Direction::Right,
            next_direction: Direction::Right,
            food: Point::new(0, 0),
            score: 0,
            mode: Mode::Menu,
            rng: rand::rng(),
        };
        game.reset();
        game
    }

    pub fn head(&self) -> Point {
        self.snake[0]
    }

    /// Enter Playing with a fully reset board (Menu→Playing and
    /// GameOver→Playing both land here).
    pub fn start(&mut self) {
        self.reset();
        self.mode = Mode::Playing;
    }

    /// Replace the whole game state: single-cell snake at grid center,
    /// heading right, score zero, food on a random free cell.
    fn reset(&mut self) {
        self.snake.clear();
        self.snake.push(Point::new(GRID_WIDTH / 2, GRID_HEIGHT / 2));
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.score = 0;
        self.food = self
            .place_food()
            .expect("a single-cell snake leaves free cells");
    }

    /// Record an already-accepted direction vote. Persists until the next
    /// step consumes it or a later vote replaces it.
    pub fn cast_vote(&mut self, direction: Direction) {
        self.next_direction = direction;
    }

    /// Pick a uniformly random cell not occupied by the snake, or `None`
    /// when the snake covers the whole grid. Bounded: the free cells are
    /// enumerated, never rejection-sampled.
    fn place_food(&mut self) -> Option<Point> {
        let free: Vec<Point> = (0..GRID_HEIGHT)
            .flat_map(|y| (0..GRID_WIDTH).map(move |x| Point::new(x, y)))
            .filter(|cell| !self.snake.contains(cell))
            .collect();
        if free.is_empty() {
            return None;
        }
        Some(free[self.rng.random_range(0..free.len())])
    }

    /// Advance the simulation one tick: adopt the pending vote, move the
    /// head, resolve collision / growth. Wall collision is checked before
    /// self-collision; either one ends the game with the snake untouched.
    pub fn step(&mut self) -> StepOutcome {
        self.direction = self.next_direction;
        let (dx, dy) = self.direction.delta();
        let head = self.head();
        let new_head = Point::new(head.x + dx, head.y + dy);

        // The tail cell still counts: moving into the cell the tail is
        // about to vacate is fatal.
        if !new_head.in_bounds() || self.snake.contains(&new_head) {
            self.mode = Mode::GameOver;
            return StepOutcome::Died;
        }

        self.snake.insert(0, new_head);
        if new_head == self.food {
            self.score += 1;
            match self.place_food() {
                Some(food) => self.food = food,
                // Snake fills the grid: the board is won, nothing left to eat.
                None => self.mode = Mode::GameOver,
            }
            StepOutcome::Ate
        } else {
            self.snake.pop();
            StepOutcome::Moved
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
