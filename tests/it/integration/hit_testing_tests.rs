//! Hit Testing Integration Tests
//!
//! The front-end resolves the pointer-down target with `Board::hit_test`, so
//! the spatial index has to follow every create, split and drag.

use crate::helpers::{TestBoardBuilder, click, drag_pill, empty_board};

#[test]
fn test_empty_board_has_no_hits() {
    let board = empty_board();
    assert_eq!(board.hit_test(0.0, 0.0), None);
}

#[test]
fn test_topmost_pill_wins() {
    let board = TestBoardBuilder::new()
        .with_pill((0.0, 0.0), (100.0, 100.0))
        .with_pill((50.0, 50.0), (150.0, 150.0))
        .build();
    let lower = board.pills()[0].id;
    let upper = board.pills()[1].id;

    assert_eq!(board.hit_test(75.0, 75.0), Some(upper));
    assert_eq!(board.hit_test(25.0, 25.0), Some(lower));
    assert_eq!(board.hit_test(125.0, 125.0), Some(upper));
}

#[test]
fn test_edges_are_inclusive() {
    let board = TestBoardBuilder::new()
        .with_pill((10.0, 10.0), (60.0, 60.0))
        .build();
    let id = board.pills()[0].id;

    assert_eq!(board.hit_test(10.0, 10.0), Some(id));
    assert_eq!(board.hit_test(60.0, 60.0), Some(id));
    assert_eq!(board.hit_test(60.1, 30.0), None);
}

#[test]
fn test_split_parts_are_hittable() {
    let mut board = TestBoardBuilder::new()
        .with_pill((0.0, 0.0), (100.0, 100.0))
        .build();
    let original = board.pills()[0].id;
    click(&mut board, 50.0, 50.0);

    let hit = board.hit_test(75.0, 75.0).expect("bottom-right quarter");
    assert_ne!(hit, original);
    let part = board.get_pill(hit).unwrap();
    assert_eq!((part.x, part.y), (50.0, 50.0));
}

#[test]
fn test_dragged_pill_hit_at_new_position() {
    let mut board = TestBoardBuilder::new()
        .with_pill((0.0, 0.0), (100.0, 100.0))
        .build();
    let id = board.pills()[0].id;

    drag_pill(&mut board, (50.0, 50.0), (450.0, 50.0));
    assert_eq!(board.hit_test(50.0, 50.0), None);
    assert_eq!(board.hit_test(450.0, 50.0), Some(id));
}
