//! Snapshot tests using the insta crate.
//!
//! Boards are built with sequential ids and a seeded color generator, so the
//! only non-literal field (hue) is redacted.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::{TestBoardBuilder, click};
use pillboard::input::GesturePhase;
use pillboard::settings::Settings;

#[test]
fn snapshot_default_settings() {
    insta::assert_json_snapshot!(Settings::default(), @r#"
    {
      "min_part_size": 20.0,
      "click_threshold": 5.0,
      "min_pill_size": 40.0,
      "corner_radius": 20.0,
      "show_crosshair": true
    }
    "#);
}

#[test]
fn snapshot_quartered_top_left_part() {
    let mut board = TestBoardBuilder::new()
        .with_pill((0.0, 0.0), (100.0, 100.0))
        .build();
    click(&mut board, 50.0, 50.0);

    insta::assert_json_snapshot!(board.pills()[0], { ".color.hue" => "[hue]" }, @r#"
    {
      "id": "00000000-0000-0000-0000-000000000002",
      "x": 0.0,
      "y": 0.0,
      "width": 50.0,
      "height": 50.0,
      "color": {
        "hue": "[hue]",
        "saturation": 70.0,
        "lightness": 70.0
      },
      "borderRadius": {
        "topLeft": 20.0,
        "topRight": 0.0,
        "bottomRight": 0.0,
        "bottomLeft": 0.0
      }
    }
    "#);
}

#[test]
fn snapshot_split_outcome() {
    let mut board = TestBoardBuilder::new()
        .with_pill((0.0, 200.0), (100.0, 300.0))
        .with_pill((200.0, 0.0), (300.0, 100.0))
        .build();
    // Too close to the top edge of the second pill; the first is not crossed
    let outcome = click(&mut board, 250.0, 10.0);

    insta::assert_json_snapshot!(outcome, @r#"
    {
      "Split": {
        "untouched": 1,
        "rejected": 1,
        "halved": 0,
        "quartered": 0
      }
    }
    "#);
}

#[test]
fn snapshot_gesture_phases() {
    let phases = [
        GesturePhase::Idle,
        GesturePhase::PendingClickOrDrag,
        GesturePhase::CreatingPill,
        GesturePhase::PendingPillAction,
        GesturePhase::DraggingPill,
    ];
    insta::assert_json_snapshot!(phases, @r#"
    [
      "Idle",
      "PendingClickOrDrag",
      "CreatingPill",
      "PendingPillAction",
      "DraggingPill"
    ]
    "#);
}
