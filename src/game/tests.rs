use crate::game::game::{Direction, GRID_HEIGHT, GRID_WIDTH, Game, Mode, Point, StepOutcome};

fn playing_game() -> Game {
    let mut game = Game::new();
    game.start();
    game
}

#[test]
fn start_places_snake_at_grid_center_heading_right() {
    let game = playing_game();
    assert_eq!(game.mode, Mode::Playing);
    assert_eq!(game.snake, vec![Point::new(15, 10)]);
    assert_eq!(game.direction, Direction::Right);
    assert_eq!(game.score, 0);
}

#[test]
fn three_straight_steps_move_the_head_three_cells() {
    let mut game = playing_game();
    game.food = Point::new(0, 0); // off the path
    for _ in 0..3 {
        assert_eq!(game.step(), StepOutcome::Moved);
    }
    assert_eq!(game.head(), Point::new(18, 10));
    assert_eq!(game.snake.len(), 1);
    assert_eq!(game.score, 0);
}

#[test]
fn step_adopts_the_pending_vote() {
    let mut game = playing_game();
    game.food = Point::new(0, 0);
    game.cast_vote(Direction::Up);
    game.step();
    assert_eq!(game.direction, Direction::Up);
    assert_eq!(game.head(), Point::new(15, 9));
}

#[test]
fn eating_grows_by_one_and_scores_one() {
    let mut game = playing_game();
    game.food = Point::new(16, 10); // directly ahead
    assert_eq!(game.step(), StepOutcome::Ate);
    assert_eq!(game.snake.len(), 2);
    assert_eq!(game.score, 1);
    assert_eq!(game.head(), Point::new(16, 10));
}

#[test]
fn food_respawns_off_the_snake() {
    for _ in 0..50 {
        let mut game = playing_game();
        assert!(!game.snake.contains(&game.food));
        game.food = Point::new(16, 10);
        game.step();
        assert!(!game.snake.contains(&game.food));
    }
}

#[test]
fn wall_collision_ends_the_game_without_moving() {
    let mut game = playing_game();
    game.snake = vec![Point::new(0, 5)];
    game.direction = Direction::Left;
    game.next_direction = Direction::Left;
    let before = game.snake.clone();
    assert_eq!(game.step(), StepOutcome::Died);
    assert_eq!(game.mode, Mode::GameOver);
    assert_eq!(game.snake, before);
}

#[test]
fn wall_death_is_reported_exactly_once_per_step() {
    let mut game = playing_game();
    game.snake = vec![Point::new(0, 5)];
    game.direction = Direction::Left;
    game.next_direction = Direction::Left;
    let outcomes = [game.step()];
    assert_eq!(
        outcomes.iter().filter(|&&o| o == StepOutcome::Died).count(),
        1
    );
}

#[test]
fn self_collision_ends_the_game() {
    // Head at (5,5) moving left into its own body at (4,5).
    let mut game = playing_game();
    game.snake = vec![
        Point::new(5, 5),
        Point::new(4, 5),
        Point::new(4, 6),
        Point::new(5, 6),
    ];
    game.direction = Direction::Down;
    game.next_direction = Direction::Left;
    game.food = Point::new(0, 0);
    assert_eq!(game.step(), StepOutcome::Died);
    assert_eq!(game.mode, Mode::GameOver);
    assert_eq!(game.snake.len(), 4);
}

#[test]
fn moving_into_the_vacating_tail_cell_is_fatal() {
    // 2x2 loop: stepping into the tail's current cell dies even though the
    // tail would have moved out this same tick.
    let mut game = playing_game();
    game.snake = vec![
        Point::new(5, 5),
        Point::new(6, 5),
        Point::new(6, 6),
        Point::new(5, 6),
    ];
    game.direction = Direction::Left;
    game.next_direction = Direction::Down;
    game.food = Point::new(0, 0);
    assert_eq!(game.step(), StepOutcome::Died);
}

#[test]
fn restart_replaces_the_previous_board_entirely() {
    let mut game = playing_game();
    game.food = Point::new(16, 10);
    game.step(); // score 1, length 2
    game.snake = vec![Point::new(0, 5)];
    game.direction = Direction::Left;
    game.next_direction = Direction::Left;
    game.step();
    assert_eq!(game.mode, Mode::GameOver);

    game.start();
    assert_eq!(game.mode, Mode::Playing);
    assert_eq!(game.snake, vec![Point::new(15, 10)]);
    assert_eq!(game.score, 0);
    assert_eq!(game.direction, Direction::Right);
}

#[test]
fn filling_the_grid_ends_the_game_on_the_winning_eat() {
    // Snake occupies every cell except one, which holds the food; eating
    // it leaves nowhere to respawn.
    let mut game = playing_game();
    // Boustrophedon body covering every cell except (0,0): head at (1,0),
    // tail at (0,19), each segment adjacent to the next.
    let mut ordered: Vec<Point> = Vec::new();
    for y in 0..GRID_HEIGHT {
        if y % 2 == 0 {
            for x in 0..GRID_WIDTH {
                ordered.push(Point::new(x, y));
            }
        } else {
            for x in (0..GRID_WIDTH).rev() {
                ordered.push(Point::new(x, y));
            }
        }
    }
    ordered.retain(|p| *p != Point::new(0, 0));
    game.snake = ordered;
    game.direction = Direction::Left;
    game.next_direction = Direction::Left;
    game.food = Point::new(0, 0);

    assert_eq!(game.step(), StepOutcome::Ate);
    assert_eq!(game.mode, Mode::GameOver);
    assert_eq!(game.snake.len(), (GRID_WIDTH * GRID_HEIGHT) as usize);
}
