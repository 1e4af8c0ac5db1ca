use crate::game::game::{Direction, Point};
use crate::input::input::{FrameInput, GameKey, InputTranslator};

const CELL: usize = 20;

fn translator() -> InputTranslator {
    InputTranslator::new(CELL)
}

fn key_input(keys: &[GameKey]) -> FrameInput {
    FrameInput {
        keys: keys.to_vec(),
        ..FrameInput::default()
    }
}

/// Head at (5,5): pixel center (110, 110).
const HEAD: Point = Point { x: 5, y: 5 };

#[test]
fn empty_input_leaves_the_vote_alone() {
    let vote = translator().direction_vote(&FrameInput::default(), Direction::Right, HEAD);
    assert_eq!(vote, None);
}

#[test]
fn perpendicular_key_is_accepted() {
    let vote = translator().direction_vote(&key_input(&[GameKey::Up]), Direction::Right, HEAD);
    assert_eq!(vote, Some(Direction::Up));
}

#[test]
fn same_axis_keys_are_rejected_in_both_signs() {
    let t = translator();
    // Moving right: both horizontal requests are ignored, reversal included.
    assert_eq!(
        t.direction_vote(&key_input(&[GameKey::Left]), Direction::Right, HEAD),
        None
    );
    assert_eq!(
        t.direction_vote(&key_input(&[GameKey::Right]), Direction::Right, HEAD),
        None
    );
    // Moving up: the vertical axis is locked regardless of sign.
    assert_eq!(
        t.direction_vote(&key_input(&[GameKey::Up]), Direction::Up, HEAD),
        None
    );
    assert_eq!(
        t.direction_vote(&key_input(&[GameKey::Down]), Direction::Up, HEAD),
        None
    );
}

#[test]
fn later_key_overwrites_an_earlier_one() {
    let vote = translator().direction_vote(
        &key_input(&[GameKey::Up, GameKey::Down]),
        Direction::Right,
        HEAD,
    );
    assert_eq!(vote, Some(Direction::Down));
}

#[test]
fn confirm_and_decline_cast_no_direction_vote() {
    let vote = translator().direction_vote(
        &key_input(&[GameKey::Confirm, GameKey::Decline]),
        Direction::Right,
        HEAD,
    );
    assert_eq!(vote, None);
}

#[test]
fn pointer_picks_the_dominant_axis() {
    let t = translator();
    // Far right of the head center (110, 110): horizontal wins.
    let input = FrameInput {
        pointer: Some((300.0, 120.0)),
        ..FrameInput::default()
    };
    assert_eq!(
        t.direction_vote(&input, Direction::Up, HEAD),
        Some(Direction::Right)
    );
    // Mostly above: vertical wins.
    let input = FrameInput {
        pointer: Some((120.0, 10.0)),
        ..FrameInput::default()
    };
    assert_eq!(
        t.direction_vote(&input, Direction::Right, HEAD),
        Some(Direction::Up)
    );
}

#[test]
fn pointer_reversal_is_rejected() {
    // Pointer straight behind a right-moving snake votes Left: dropped.
    let input = FrameInput {
        pointer: Some((10.0, 110.0)),
        ..FrameInput::default()
    };
    let vote = translator().direction_vote(&input, Direction::Right, HEAD);
    assert_eq!(vote, None);
}

#[test]
fn pointer_wins_over_keys_in_the_same_poll() {
    let input = FrameInput {
        keys: vec![GameKey::Up],
        pointer: Some((110.0, 300.0)), // straight below: votes Down
        ..FrameInput::default()
    };
    let vote = translator().direction_vote(&input, Direction::Right, HEAD);
    assert_eq!(vote, Some(Direction::Down));
}

#[test]
fn rejected_pointer_does_not_erase_an_accepted_key_vote() {
    let input = FrameInput {
        keys: vec![GameKey::Up],
        pointer: Some((10.0, 110.0)), // votes Left, the exact reverse
        ..FrameInput::default()
    };
    let vote = translator().direction_vote(&input, Direction::Right, HEAD);
    assert_eq!(vote, Some(Direction::Up));
}
