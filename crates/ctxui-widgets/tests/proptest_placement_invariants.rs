//! Property-based invariant tests for overlay placement.
//!
//! 1. An overlay that fits the viewport, anchored inside it, ends up inside it.
//! 2. An overlay that fits next to its anchor is not moved.
//! 3. A zero viewport axis leaves that axis at the anchor.
//! 4. Overflow flips to the near side of the anchor whenever that fits.
//! 5. Hints lean toward the roomier half, with the top band forcing SW.

use ctxui_core::direction::{Direction, Horizontal, Vertical};
use ctxui_core::geometry::{Point, Size};
use ctxui_widgets::placement::{TOP_BAND, hint_for_point, place};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn viewport_strategy() -> impl Strategy<Value = Size> {
    (1i32..=3000, 1i32..=3000).prop_map(|(w, h)| Size::new(w, h))
}

fn hint_strategy() -> impl Strategy<Value = Option<Direction>> {
    proptest::option::of(proptest::sample::select(Direction::ALL.to_vec()))
}

/// A viewport, an overlay no larger than it, and an anchor inside it.
fn fitting_case() -> impl Strategy<Value = (Size, Size, Point)> {
    viewport_strategy().prop_flat_map(|viewport| {
        (
            Just(viewport),
            (0..=viewport.width, 0..=viewport.height).prop_map(|(w, h)| Size::new(w, h)),
            (0.0..=viewport.width as f32, 0.0..=viewport.height as f32)
                .prop_map(|(x, y)| Point::new(x, y)),
        )
    })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Fitting overlays stay on screen
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fitting_overlay_stays_in_viewport(
        (viewport, size, anchor) in fitting_case(),
        hint in hint_strategy(),
    ) {
        let at = place(anchor, size, viewport, hint);
        prop_assert!(at.x >= 0 && at.x + size.width <= viewport.width,
            "x out of range: at={:?} size={:?} viewport={:?}", at, size, viewport);
        prop_assert!(at.y >= 0 && at.y + size.height <= viewport.height,
            "y out of range: at={:?} size={:?} viewport={:?}", at, size, viewport);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. No overflow, no movement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn non_overflowing_axis_keeps_anchor(
        (viewport, size, anchor) in fitting_case(),
        hint in hint_strategy(),
    ) {
        let at = place(anchor, size, viewport, hint);
        let rounded = anchor.round();
        if anchor.x + size.width as f32 <= viewport.width as f32 {
            prop_assert_eq!(at.x, rounded.x);
        }
        if anchor.y + size.height as f32 <= viewport.height as f32 {
            prop_assert_eq!(at.y, rounded.y);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Zero viewport
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn zero_viewport_never_moves(
        x in -2000.0f32..2000.0,
        y in -2000.0f32..2000.0,
        w in 0i32..5000,
        h in 0i32..5000,
        hint in hint_strategy(),
    ) {
        let anchor = Point::new(x, y);
        prop_assert_eq!(place(anchor, Size::new(w, h), Size::ZERO, hint), anchor.round());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Flip before clamp
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn overflow_flips_when_room_before_anchor(
        (viewport, size, anchor) in fitting_case(),
        hint in hint_strategy(),
    ) {
        let at = place(anchor, size, viewport, hint);
        let overflows = anchor.x + size.width as f32 > viewport.width as f32;
        let flipped = anchor.x - size.width as f32;
        if overflows && flipped >= 0.0 {
            prop_assert_eq!(at.x, Point::new(flipped, 0.0).round().x);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Hints
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hint_leans_toward_roomier_half(
        viewport in viewport_strategy(),
        fx in 0.0f32..=1.0,
        fy in 0.0f32..=1.0,
    ) {
        let point = Point::new(fx * viewport.width as f32, fy * viewport.height as f32);
        let hint = hint_for_point(point, viewport);
        if point.y < TOP_BAND {
            prop_assert_eq!(hint, Direction::SW);
        } else {
            let south = viewport.height as f32 - point.y > point.y;
            let east = viewport.width as f32 - point.x > point.x;
            prop_assert_eq!(hint.vertical(), Some(if south { Vertical::South } else { Vertical::North }));
            prop_assert_eq!(hint.horizontal(), Some(if east { Horizontal::East } else { Horizontal::West }));
        }
    }
}
