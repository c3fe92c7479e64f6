#![forbid(unsafe_code)]

//! Hit-test index with z-order and pass-through support.
//!
//! # Invariants
//!
//! 1. Entries are stored in z-order: later registrations sit on top.
//! 2. A query walks entries top-down and yields each target id at most once.
//! 3. The walk stops after the first opaque entry containing the point;
//!    pass-through entries let it continue to entries beneath.
//! 4. An index reflects exactly one frame's registrations. Hosts replace it
//!    every frame, so stale targets never receive input.

use ctxui_core::geometry::{Offset, Point, Rect};

use crate::frame::HitId;

/// A registered input target, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitEntry {
    /// Target identifier.
    pub id: HitId,
    /// Bounding rectangle.
    pub rect: Rect,
    /// Viewport position of the space the target was registered in.
    pub origin: Offset,
    /// Whether routing continues to entries beneath this one.
    pub pass: bool,
}

impl HitEntry {
    /// Check if `point` is inside this entry.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(point)
    }
}

/// All targets registered during one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitIndex {
    entries: Vec<HitEntry>,
}

impl HitIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from entries given bottom to top.
    pub fn from_entries(entries: impl IntoIterator<Item = HitEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Targets receiving a pointer event at `point`, topmost first.
    pub fn hits(&self, point: Point) -> Vec<HitEntry> {
        let mut hits: Vec<HitEntry> = Vec::new();
        for entry in self.entries.iter().rev() {
            if !entry.contains(point) {
                continue;
            }
            if !hits.iter().any(|seen| seen.id == entry.id) {
                hits.push(*entry);
            }
            if !entry.pass {
                break;
            }
        }
        hits
    }
}
