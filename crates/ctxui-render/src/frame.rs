#![forbid(unsafe_code)]

//! Frame = op list + per-frame context for one layout pass.
//!
//! The `Frame` is the request-scoped drawing context handed to every widget
//! call. It bundles the frame stamp, the layout constraints, a key-value
//! store of host facts (such as the window size), the events queued for this
//! frame, and the list of recorded ops.
//!
//! # Recording and deferral
//!
//! [`Frame::record`] runs a closure against a fresh op list and returns the
//! captured [`Fragment`] together with the size the closure reported. A
//! fragment can be replayed in place with [`Frame::add`] or deferred with
//! [`Frame::defer`] / [`Frame::defer_absolute`]. Deferred fragments are
//! flattened after every normal op, in deferral order, so they composite on
//! top of everything laid out earlier in the frame.
//!
//! # Usage
//!
//! ```
//! use std::time::Instant;
//! use ctxui_core::geometry::{Constraints, Offset, Rect, Size};
//! use ctxui_render::frame::{Frame, Placed};
//!
//! let mut frame = Frame::new(Instant::now(), Constraints::loose(Size::new(800, 600)));
//! let (popup, size) = frame.record(Constraints::loose(Size::new(800, 600)), |f| {
//!     f.fill(Rect::new(0, 0, 40, 20), 0xffff_ffff);
//!     Size::new(40, 20)
//! });
//! assert_eq!(size, Size::new(40, 20));
//!
//! frame.defer_absolute(Offset::new(100, 50), popup);
//! frame.fill(Rect::new(0, 0, 800, 600), 0x0000_00ff);
//!
//! let output = frame.finish();
//! // The deferred popup lands after the background fill.
//! assert!(matches!(output.placed()[1], Placed::Fill { rect, .. } if rect == Rect::new(100, 50, 40, 20)));
//! ```

use std::any::Any;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

use ctxui_core::event::Event;
use ctxui_core::geometry::{Constraints, Offset, Rect, Size};

use crate::hit_index::{HitEntry, HitIndex};
use crate::input::{EventFilter, EventQueue};

/// Key under which hosts publish the window size (a [`Size`]) in [`Values`].
pub const WINDOW_SIZE: &str = "window_size";

/// Identifier for an input target.
///
/// Widgets register hit regions under an id and later poll events queued for
/// that id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HitId(pub u32);

static NEXT_HIT_ID: AtomicU32 = AtomicU32::new(1);

impl HitId {
    /// Create a new hit ID from a raw value.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Allocate a process-unique id (never zero).
    pub fn unique() -> Self {
        Self(NEXT_HIT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }
}

/// Host-provided key-value facts for the current frame.
///
/// Lookups are typed: asking for a key with the wrong type yields `None`.
#[derive(Default)]
pub struct Values {
    entries: HashMap<String, Box<dyn Any>>,
}

impl Values {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value.
    pub fn insert<T: Any>(&mut self, key: impl Into<String>, value: T) {
        self.entries.insert(key.into(), Box::new(value));
    }

    /// Typed lookup.
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.entries.get(key)?.downcast_ref::<T>()
    }
}

impl fmt::Debug for Values {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("Values").field("keys", &keys).finish()
    }
}

/// A recorded drawing/input instruction.
///
/// Geometry is relative to the coordinate space the op was recorded in.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// Paint a solid rectangle.
    Fill { rect: Rect, rgba: u32 },
    /// Register an input target. Opaque targets stop routing; pass-through
    /// targets let the event continue to targets beneath.
    Hit { rect: Rect, id: HitId, pass: bool },
    /// Replay a fragment translated by `offset`.
    Call { offset: Offset, fragment: Fragment },
    /// Replay a fragment after all normal ops. `offset` is relative to the
    /// current space unless `absolute` is set.
    Defer {
        offset: Offset,
        absolute: bool,
        fragment: Fragment,
    },
}

/// A replayable list of ops produced by [`Frame::record`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    ops: Vec<Op>,
}

impl Fragment {
    /// An empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded ops.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// A flattened, viewport-absolute output item.
#[derive(Debug, Clone, PartialEq)]
pub enum Placed {
    Fill { rect: Rect, rgba: u32 },
    Hit(HitEntry),
}

/// The flattened result of a frame, in z-order (later items on top).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameOutput {
    placed: Vec<Placed>,
}

impl FrameOutput {
    /// All placed items, bottom to top.
    pub fn placed(&self) -> &[Placed] {
        &self.placed
    }

    /// Placed fills, bottom to top.
    pub fn fills(&self) -> impl Iterator<Item = (Rect, u32)> + '_ {
        self.placed.iter().filter_map(|item| match item {
            Placed::Fill { rect, rgba } => Some((*rect, *rgba)),
            Placed::Hit(_) => None,
        })
    }

    /// Build the hit index used to route next frame's input.
    pub fn hit_index(&self) -> HitIndex {
        HitIndex::from_entries(self.placed.iter().filter_map(|item| match item {
            Placed::Hit(entry) => Some(*entry),
            Placed::Fill { .. } => None,
        }))
    }
}

/// Per-frame drawing context.
#[derive(Debug)]
pub struct Frame {
    now: Instant,

    /// Constraints for the widget currently being laid out.
    pub constraints: Constraints,

    /// Host facts for this frame.
    pub values: Values,

    events: EventQueue,
    ops: Vec<Op>,
}

impl Frame {
    /// Create a frame with no queued events.
    pub fn new(now: Instant, constraints: Constraints) -> Self {
        Self {
            now,
            constraints,
            values: Values::new(),
            events: EventQueue::new(),
            ops: Vec::new(),
        }
    }

    /// Attach the events routed since the previous frame.
    #[must_use]
    pub fn with_events(mut self, events: EventQueue) -> Self {
        self.events = events;
        self
    }

    /// Publish the window size under [`WINDOW_SIZE`].
    #[must_use]
    pub fn with_window_size(mut self, size: Size) -> Self {
        self.values.insert(WINDOW_SIZE, size);
        self
    }

    /// The frame stamp. Equal stamps identify the same frame.
    #[inline]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Pop the next queued event matching `filter`.
    pub fn event(&mut self, filter: EventFilter) -> Option<Event> {
        self.events.pop(filter)
    }

    /// Events still queued for this frame.
    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    /// Mutable access to the queue, for hosts that synthesize events.
    pub fn events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// The viewport extent.
    ///
    /// Uses the [`WINDOW_SIZE`] value when it is a [`Size`] with some
    /// non-zero axis, otherwise the maximum constraint.
    pub fn window_size(&self) -> Size {
        match self.values.get::<Size>(WINDOW_SIZE) {
            Some(size) if size.width > 0 || size.height > 0 => *size,
            _ => self.constraints.max,
        }
    }

    /// Paint a solid rectangle.
    pub fn fill(&mut self, rect: Rect, rgba: u32) {
        self.ops.push(Op::Fill { rect, rgba });
    }

    /// Register an opaque input target.
    pub fn register_hit(&mut self, rect: Rect, id: HitId) {
        self.ops.push(Op::Hit {
            rect,
            id,
            pass: false,
        });
    }

    /// Register a pass-through input target.
    pub fn register_hit_pass(&mut self, rect: Rect, id: HitId) {
        self.ops.push(Op::Hit {
            rect,
            id,
            pass: true,
        });
    }

    /// Record ops emitted by `layout` under `constraints`.
    ///
    /// The frame's own constraints and op list are restored afterwards.
    pub fn record<F>(&mut self, constraints: Constraints, layout: F) -> (Fragment, Size)
    where
        F: FnOnce(&mut Frame) -> Size,
    {
        let outer_ops = std::mem::take(&mut self.ops);
        let outer_constraints = std::mem::replace(&mut self.constraints, constraints);
        let size = layout(self);
        let ops = std::mem::replace(&mut self.ops, outer_ops);
        self.constraints = outer_constraints;
        (Fragment { ops }, size)
    }

    /// Replay a fragment translated by `offset`.
    pub fn add(&mut self, offset: Offset, fragment: Fragment) {
        if !fragment.is_empty() {
            self.ops.push(Op::Call { offset, fragment });
        }
    }

    /// Lay out `layout` translated by `offset`, keeping the current constraints.
    pub fn with_offset<F>(&mut self, offset: Offset, layout: F) -> Size
    where
        F: FnOnce(&mut Frame) -> Size,
    {
        let (fragment, size) = self.record(self.constraints, layout);
        self.add(offset, fragment);
        size
    }

    /// Defer a fragment, translated by `offset` within the current space.
    pub fn defer(&mut self, offset: Offset, fragment: Fragment) {
        self.ops.push(Op::Defer {
            offset,
            absolute: false,
            fragment,
        });
    }

    /// Defer a fragment placed at `origin` in viewport coordinates.
    pub fn defer_absolute(&mut self, origin: Offset, fragment: Fragment) {
        self.ops.push(Op::Defer {
            offset: origin,
            absolute: true,
            fragment,
        });
    }

    /// Flatten all ops into viewport space. Unconsumed events are dropped.
    pub fn finish(self) -> FrameOutput {
        let mut placed = Vec::new();
        let mut deferred = VecDeque::new();
        flatten(self.ops, Offset::ZERO, &mut placed, &mut deferred);
        while let Some((origin, fragment)) = deferred.pop_front() {
            flatten(fragment.ops, origin, &mut placed, &mut deferred);
        }
        ctxui_core::trace!(
            placed = placed.len(),
            dropped_events = self.events.len(),
            "frame finished"
        );
        FrameOutput { placed }
    }
}

fn flatten(
    ops: Vec<Op>,
    origin: Offset,
    placed: &mut Vec<Placed>,
    deferred: &mut VecDeque<(Offset, Fragment)>,
) {
    for op in ops {
        match op {
            Op::Fill { rect, rgba } => placed.push(Placed::Fill {
                rect: rect.translate(origin),
                rgba,
            }),
            Op::Hit { rect, id, pass } => placed.push(Placed::Hit(HitEntry {
                id,
                rect: rect.translate(origin),
                origin,
                pass,
            })),
            Op::Call { offset, fragment } => {
                flatten(fragment.ops, origin + offset, placed, deferred);
            }
            Op::Defer {
                offset,
                absolute,
                fragment,
            } => {
                let at = if absolute { offset } else { origin + offset };
                deferred.push_back((at, fragment));
            }
        }
    }
}
