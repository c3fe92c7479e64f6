#![forbid(unsafe_code)]

//! Overlay placement: direction hints and overflow clamping.
//!
//! Placement happens in two steps. When an overlay is summoned its size is
//! not known yet, so [`hint_for_point`] only picks the viewport corner the
//! overlay should lean toward. Once the overlay has been laid out,
//! [`place`] starts from the anchor and, per axis, flips the overlay to the
//! other side of the anchor if it would cross the far edge, or pushes it
//! against the edge the hint names if flipping does not fit either.

use ctxui_core::direction::{Direction, Horizontal, Vertical};
use ctxui_core::geometry::{Offset, Point, Size};

/// Clicks closer than this to the top of the viewport always get [`Direction::SW`].
pub const TOP_BAND: f32 = 100.0;

/// Derive a placement hint from where the overlay was summoned.
///
/// The hint points toward the roomier half of the viewport on each axis.
/// Points inside the [`TOP_BAND`] get `SW` regardless of the viewport.
pub fn hint_for_point(point: Point, viewport: Size) -> Direction {
    if point.y < TOP_BAND {
        return Direction::SW;
    }

    let to_top = point.y;
    let to_bottom = viewport.height as f32 - point.y;
    let to_left = point.x;
    let to_right = viewport.width as f32 - point.x;

    let vertical = if to_bottom > to_top {
        Vertical::South
    } else {
        Vertical::North
    };
    let horizontal = if to_right > to_left {
        Horizontal::East
    } else {
        Horizontal::West
    };
    Direction::diagonal(vertical, horizontal)
}

/// Compute the on-screen origin of an overlay of `size` anchored at `anchor`.
///
/// An axis whose viewport extent is zero is left at the anchor. The result
/// is rounded to whole pixels, halfway cases away from zero.
pub fn place(anchor: Point, size: Size, viewport: Size, hint: Option<Direction>) -> Offset {
    let toward_left = matches!(
        hint.and_then(Direction::horizontal),
        Some(Horizontal::West)
    );
    let toward_top = matches!(hint.and_then(Direction::vertical), Some(Vertical::North));

    Point::new(
        place_axis(anchor.x, size.width, viewport.width, toward_left),
        place_axis(anchor.y, size.height, viewport.height, toward_top),
    )
    .round()
}

/// One axis of [`place`]. `toward_start` picks the near edge (left/top) for
/// the last-resort clamp; otherwise the far edge is used.
fn place_axis(start: f32, extent: i32, limit: i32, toward_start: bool) -> f32 {
    if limit <= 0 || start + extent as f32 <= limit as f32 {
        return start;
    }
    let flipped = start - extent as f32;
    if flipped >= 0.0 {
        flipped
    } else if toward_start {
        0.0
    } else {
        (limit - extent) as f32
    }
}
