//! Partition engine - splitting pills along the lines through a point.
//!
//! A click at `point` draws an imaginary vertical line at `point.x` and a
//! horizontal line at `point.y`. Every pill those lines pass through (strictly
//! inside its bounds) is cut into two halves or four quadrants. A cut only
//! commits when every resulting part is at least `min_part_size` on both axes;
//! otherwise the pill is kept exactly as it was.
//!
//! Each part inherits the color and the corner radius of the original corner it
//! still owns. Corners created by the cut are square (radius 0).
//!
//! The engine is pure: it never mutates its input and returns a fresh list in
//! which each pill's replacement parts occupy the original pill's slot.

use crate::constants::MIN_PART_SIZE;
use crate::ids::IdGenerator;
use crate::profile_scope;
use crate::types::{CanvasPoint, CornerRadii, Pill};
use serde::Serialize;
use tracing::debug;

/// Which of the two lines through the split point cross a pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cut {
    /// Neither line crosses the pill interior
    None,
    /// Only the vertical line crosses: left and right halves
    Vertical,
    /// Only the horizontal line crosses: top and bottom halves
    Horizontal,
    /// Both lines cross: four quadrants
    Cross,
}

impl Cut {
    /// Classify how the lines through `point` cross `pill`.
    pub fn classify(pill: &Pill, point: CanvasPoint) -> Self {
        match (
            pill.intersects_vertical(point.x),
            pill.intersects_horizontal(point.y),
        ) {
            (true, true) => Self::Cross,
            (true, false) => Self::Vertical,
            (false, true) => Self::Horizontal,
            (false, false) => Self::None,
        }
    }
}

/// Result of attempting to split a single pill.
#[derive(Debug, Clone, PartialEq)]
pub enum PillSplit {
    /// The split lines miss the pill
    Untouched(Pill),
    /// The lines cross the pill but some part would be too small
    Rejected { pill: Pill, cut: Cut },
    /// Two parts: left/right or top/bottom, in that order
    Halved { cut: Cut, parts: [Pill; 2] },
    /// Four parts: top-left, top-right, bottom-left, bottom-right
    Quartered([Pill; 4]),
}

impl PillSplit {
    /// The pills that take the original's place in the list.
    pub fn into_pills(self) -> Vec<Pill> {
        match self {
            Self::Untouched(pill) | Self::Rejected { pill, .. } => vec![pill],
            Self::Halved { parts, .. } => parts.into(),
            Self::Quartered(parts) => parts.into(),
        }
    }

    /// Whether the original pill was replaced.
    pub fn committed(&self) -> bool {
        matches!(self, Self::Halved { .. } | Self::Quartered(_))
    }
}

/// Summary of a whole-list split, for logging and callers that care.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    pub untouched: usize,
    pub rejected: usize,
    pub halved: usize,
    pub quartered: usize,
}

impl SplitReport {
    fn record(&mut self, outcome: &PillSplit) {
        match outcome {
            PillSplit::Untouched(_) => self.untouched += 1,
            PillSplit::Rejected { .. } => self.rejected += 1,
            PillSplit::Halved { .. } => self.halved += 1,
            PillSplit::Quartered(_) => self.quartered += 1,
        }
    }

    /// True if at least one pill was replaced.
    pub fn changed(&self) -> bool {
        self.halved + self.quartered > 0
    }
}

/// Split every pill crossed by the lines through `point`, using the default
/// minimum part size.
pub fn split(pills: &[Pill], point: CanvasPoint, ids: &mut dyn IdGenerator) -> Vec<Pill> {
    split_with_report(pills, point, MIN_PART_SIZE, ids).0
}

/// Split every pill crossed by the lines through `point`.
///
/// Pills are processed independently against the same point. Returns the new
/// list and a tally of what happened to each input pill.
pub fn split_with_report(
    pills: &[Pill],
    point: CanvasPoint,
    min_part_size: f32,
    ids: &mut dyn IdGenerator,
) -> (Vec<Pill>, SplitReport) {
    profile_scope!("split_pills");

    let mut report = SplitReport::default();
    let mut next = Vec::with_capacity(pills.len());

    for pill in pills {
        let outcome = split_pill(pill, point, min_part_size, ids);
        report.record(&outcome);
        if let PillSplit::Rejected { cut, .. } = &outcome {
            debug!(
                pill = %pill.id,
                ?cut,
                x = point.x,
                y = point.y,
                "Split rejected: part below minimum size"
            );
        }
        next.extend(outcome.into_pills());
    }

    debug!(
        untouched = report.untouched,
        rejected = report.rejected,
        halved = report.halved,
        quartered = report.quartered,
        "Split at ({}, {})",
        point.x,
        point.y
    );

    (next, report)
}

/// Attempt to split one pill along the lines through `point`.
pub fn split_pill(
    pill: &Pill,
    point: CanvasPoint,
    min_part_size: f32,
    ids: &mut dyn IdGenerator,
) -> PillSplit {
    if !point.is_finite() {
        return PillSplit::Untouched(pill.clone());
    }

    let fits = |w: f32, h: f32| w >= min_part_size && h >= min_part_size;

    let cut = Cut::classify(pill, point);
    let left_w = point.x - pill.x;
    let right_w = pill.right() - point.x;
    let top_h = point.y - pill.y;
    let bottom_h = pill.bottom() - point.y;
    let radii = pill.border_radius;

    match cut {
        Cut::None => PillSplit::Untouched(pill.clone()),
        Cut::Cross => {
            if !(fits(left_w, top_h)
                && fits(right_w, top_h)
                && fits(left_w, bottom_h)
                && fits(right_w, bottom_h))
            {
                return PillSplit::Rejected {
                    pill: pill.clone(),
                    cut,
                };
            }
            PillSplit::Quartered([
                part(pill, ids, pill.x, pill.y, left_w, top_h, radii.only_top_left()),
                part(pill, ids, point.x, pill.y, right_w, top_h, radii.only_top_right()),
                part(pill, ids, pill.x, point.y, left_w, bottom_h, radii.only_bottom_left()),
                part(pill, ids, point.x, point.y, right_w, bottom_h, radii.only_bottom_right()),
            ])
        }
        Cut::Vertical => {
            if !(fits(left_w, pill.height) && fits(right_w, pill.height)) {
                return PillSplit::Rejected {
                    pill: pill.clone(),
                    cut,
                };
            }
            PillSplit::Halved {
                cut,
                parts: [
                    part(pill, ids, pill.x, pill.y, left_w, pill.height, radii.left_side()),
                    part(pill, ids, point.x, pill.y, right_w, pill.height, radii.right_side()),
                ],
            }
        }
        Cut::Horizontal => {
            if !(fits(pill.width, top_h) && fits(pill.width, bottom_h)) {
                return PillSplit::Rejected {
                    pill: pill.clone(),
                    cut,
                };
            }
            PillSplit::Halved {
                cut,
                parts: [
                    part(pill, ids, pill.x, pill.y, pill.width, top_h, radii.top_side()),
                    part(pill, ids, pill.x, point.y, pill.width, bottom_h, radii.bottom_side()),
                ],
            }
        }
    }
}

/// A new pill carved out of `parent`: fresh id, same color.
fn part(
    parent: &Pill,
    ids: &mut dyn IdGenerator,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    border_radius: CornerRadii,
) -> Pill {
    Pill {
        id: ids.new_id(),
        x,
        y,
        width,
        height,
        color: parent.color,
        border_radius,
    }
}
