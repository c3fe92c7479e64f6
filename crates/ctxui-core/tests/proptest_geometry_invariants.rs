//! Property-based invariant tests for geometry primitives (Rect, Point, Transform).
//!
//! 1. Translation preserves containment (p in r ↔ p+o in r+o).
//! 2. Right/bottom edges are consistent with x+width, y+height.
//! 3. Empty rects contain nothing.
//! 4. Transform invert undoes apply.
//! 5. Rounding moves a point by at most half a pixel per axis.
//! 6. Constrained sizes stay inside the constraints.

use ctxui_core::geometry::{Constraints, Offset, Point, Rect, Size, Transform};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (-2000i32..=2000, -2000i32..=2000, 0i32..=2000, 0i32..=2000)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn offset_strategy() -> impl Strategy<Value = Offset> {
    (-2000i32..=2000, -2000i32..=2000).prop_map(|(x, y)| Offset::new(x, y))
}

fn whole_point_strategy() -> impl Strategy<Value = Point> {
    (-4000i32..=4000, -4000i32..=4000).prop_map(|(x, y)| Point::new(x as f32, y as f32))
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (-4000.0f32..4000.0, -4000.0f32..4000.0).prop_map(|(x, y)| Point::new(x, y))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Translation preserves containment
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn translate_preserves_contains(
        r in rect_strategy(),
        o in offset_strategy(),
        p in whole_point_strategy(),
    ) {
        let moved = r.translate(o);
        let moved_point = p + Point::from(o);
        prop_assert_eq!(
            r.contains(p),
            moved.contains(moved_point),
            "containment changed under translation: r={:?} o={:?} p={:?}",
            r, o, p
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Edges
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn edges_consistent(r in rect_strategy()) {
        prop_assert_eq!(r.right(), r.x + r.width);
        prop_assert_eq!(r.bottom(), r.y + r.height);
        prop_assert_eq!(Rect::at(r.origin(), r.size()), r);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Empty rects contain nothing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn empty_contains_nothing(x in -100i32..100, y in -100i32..100, h in 0i32..50, p in point_strategy()) {
        let r = Rect::new(x, y, 0, h);
        prop_assert!(!r.contains(p));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Transform inversion
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn transform_invert_apply(origin in whole_point_strategy(), p in whole_point_strategy()) {
        let t = Transform::translate(origin);
        prop_assert_eq!(t.invert(t.apply(p)), p);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Rounding distance
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn round_within_half_pixel(p in point_strategy()) {
        let rounded = Point::from(p.round());
        prop_assert!((rounded.x - p.x).abs() <= 0.5);
        prop_assert!((rounded.y - p.y).abs() <= 0.5);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Constraints
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn constrain_stays_within(
        (min_w, min_h) in (0i32..500, 0i32..500),
        (extra_w, extra_h) in (0i32..500, 0i32..500),
        (w, h) in (0i32..2000, 0i32..2000),
    ) {
        let c = Constraints {
            min: Size::new(min_w, min_h),
            max: Size::new(min_w + extra_w, min_h + extra_h),
        };
        let s = c.constrain(Size::new(w, h));
        prop_assert!(s.width >= c.min.width && s.width <= c.max.width);
        prop_assert!(s.height >= c.min.height && s.height <= c.max.height);
    }
}
