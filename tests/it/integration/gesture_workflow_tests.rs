//! Gesture Workflow Integration Tests

use crate::helpers::{
    TestBoardBuilder, assert_pill_count, click, drag_pill, draw, empty_board, find_pill, total_area,
};
use pillboard::input::{GestureOutcome, GesturePhase};
use pillboard::types::{CanvasPoint, CornerRadii};

#[test]
fn test_create_then_split_twice() {
    let mut board = empty_board();

    // Pill A from (0,0) to (100,100)
    let outcome = draw(&mut board, (0.0, 0.0), (100.0, 100.0));
    assert!(matches!(outcome, GestureOutcome::Created(_)));
    assert_pill_count(&board, 1);
    let color = board.pills()[0].color;

    // Click the middle: four 50x50 quarters, one original corner each
    click(&mut board, 50.0, 50.0);
    assert_pill_count(&board, 4);
    let pills = board.pills();
    for (x, y, radii) in [
        (0.0, 0.0, CornerRadii::new(20.0, 0.0, 0.0, 0.0)),
        (50.0, 0.0, CornerRadii::new(0.0, 20.0, 0.0, 0.0)),
        (0.0, 50.0, CornerRadii::new(0.0, 0.0, 0.0, 20.0)),
        (50.0, 50.0, CornerRadii::new(0.0, 0.0, 20.0, 0.0)),
    ] {
        let part = find_pill(pills, x, y, 50.0, 50.0).expect("quarter present");
        assert_eq!(part.border_radius, radii);
        assert_eq!(part.color, color);
    }

    // Click (25,25): quarters the top-left part, halves its two neighbours
    let outcome = click(&mut board, 25.0, 25.0);
    match outcome {
        GestureOutcome::Split(report) => {
            assert_eq!(report.quartered, 1);
            assert_eq!(report.halved, 2);
            assert_eq!(report.untouched, 1);
        }
        other => panic!("expected split, got {:?}", other),
    }
    assert_pill_count(&board, 9);
    for (x, y) in [(0.0, 0.0), (25.0, 0.0), (0.0, 25.0), (25.0, 25.0)] {
        assert!(
            find_pill(board.pills(), x, y, 25.0, 25.0).is_some(),
            "missing 25x25 at ({x}, {y})"
        );
    }
    let tl = find_pill(board.pills(), 0.0, 0.0, 25.0, 25.0).unwrap();
    assert_eq!(tl.border_radius, CornerRadii::new(20.0, 0.0, 0.0, 0.0));
    assert_eq!(total_area(board.pills()), 100.0 * 100.0);
}

#[test]
fn test_third_click_rejected_below_minimum() {
    let mut board = TestBoardBuilder::new()
        .with_pill((0.0, 0.0), (100.0, 100.0))
        .build();
    click(&mut board, 50.0, 50.0);
    click(&mut board, 25.0, 25.0);
    let before = board.pills().to_vec();

    // 25x25 parts would become 12.5 wide
    let outcome = click(&mut board, 12.5, 12.5);
    match outcome {
        GestureOutcome::Split(report) => assert!(!report.changed()),
        other => panic!("expected split attempt, got {:?}", other),
    }
    assert_eq!(board.pills(), before.as_slice());
}

#[test]
fn test_small_wiggle_on_empty_canvas_is_a_click() {
    let mut board = TestBoardBuilder::new()
        .with_pill((0.0, 0.0), (100.0, 100.0))
        .build();

    // Press below the pill, wiggle 3px: the vertical line still cuts it
    board.pointer_down(50.0, 300.0, None);
    board.pointer_move(53.0, 303.0);
    assert_eq!(board.phase(), GesturePhase::PendingClickOrDrag);
    let outcome = board.pointer_up(53.0, 303.0);

    assert!(matches!(outcome, GestureOutcome::Split(r) if r.halved == 1));
    assert_pill_count(&board, 2);
    assert!(find_pill(board.pills(), 0.0, 0.0, 53.0, 100.0).is_some());
    assert!(find_pill(board.pills(), 53.0, 0.0, 47.0, 100.0).is_some());
}

#[test]
fn test_movement_exactly_at_threshold_is_a_click() {
    let mut board = empty_board();
    board.pointer_down(0.0, 0.0, None);
    board.pointer_move(5.0, 5.0);
    assert_eq!(board.phase(), GesturePhase::PendingClickOrDrag);
    assert!(matches!(board.pointer_up(5.0, 5.0), GestureOutcome::Split(_)));
    assert_pill_count(&board, 0);
}

#[test]
fn test_creation_size_floor() {
    let mut board = empty_board();
    assert_eq!(draw(&mut board, (0.0, 0.0), (39.0, 50.0)), GestureOutcome::Discarded);
    assert_pill_count(&board, 0);

    assert!(matches!(draw(&mut board, (0.0, 0.0), (40.0, 40.0)), GestureOutcome::Created(_)));
    assert_pill_count(&board, 1);
    assert_eq!(board.pills()[0].border_radius, CornerRadii::uniform(20.0));
}

#[test]
fn test_drag_moves_without_splitting() {
    let mut board = TestBoardBuilder::new()
        .with_pill((80.0, 90.0), (180.0, 190.0))
        .build();
    let id = board.pills()[0].id;

    let outcome = drag_pill(&mut board, (100.0, 100.0), (130.0, 140.0));
    assert_eq!(
        outcome,
        GestureOutcome::Dragged {
            pill_id: id,
            position: CanvasPoint::new(110.0, 130.0),
        }
    );
    assert_pill_count(&board, 1);
    assert_eq!(board.pills()[0].width, 100.0);
    assert!(board.input_state().is_idle());
}

#[test]
fn test_click_on_pill_splits_every_crossed_pill() {
    let mut board = TestBoardBuilder::new()
        .with_pill((0.0, 0.0), (100.0, 100.0))
        .with_pill((0.0, 200.0), (100.0, 300.0))
        .with_pill((300.0, 0.0), (400.0, 100.0))
        .build();

    // Click inside the first pill; the vertical line also crosses the second
    // and the horizontal line the third
    click(&mut board, 50.0, 50.0);
    assert_pill_count(&board, 4 + 2 + 2);
}

#[test]
fn test_pointer_up_without_press_changes_nothing() {
    let mut board = TestBoardBuilder::new()
        .with_pill((0.0, 0.0), (100.0, 100.0))
        .build();
    assert_eq!(board.pointer_up(50.0, 50.0), GestureOutcome::Ignored);
    assert_pill_count(&board, 1);
}

#[test]
fn test_ids_stay_unique_across_gestures() {
    let mut board = TestBoardBuilder::new()
        .with_pill((0.0, 0.0), (200.0, 200.0))
        .with_pill((300.0, 0.0), (500.0, 200.0))
        .build();
    click(&mut board, 100.0, 100.0);
    click(&mut board, 400.0, 50.0);
    click(&mut board, 50.0, 150.0);

    let mut ids: Vec<_> = board.pills().iter().map(|p| p.id).collect();
    let count = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), count);
}
