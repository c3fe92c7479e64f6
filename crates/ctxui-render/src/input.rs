#![forbid(unsafe_code)]

//! Pointer routing and per-target event queues.
//!
//! The host feeds viewport-absolute pointer events to an [`InputRouter`],
//! which hit-tests them against the targets registered by the previous frame
//! and queues a target-local copy for each receiver. At the start of the next
//! frame the queue is moved into the [`Frame`](crate::frame::Frame), where
//! widgets drain it with [`EventFilter`]s.

use std::collections::VecDeque;

use ctxui_core::event::{Event, PointerButtons, PointerEvent, PointerKind, PointerKinds};
use ctxui_core::geometry::{Point, Transform};

use crate::frame::HitId;
use crate::hit_index::HitIndex;

/// Selects the events a widget wants from the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventFilter {
    /// Target the events were routed to.
    pub target: HitId,
    /// Pointer kinds of interest.
    pub kinds: PointerKinds,
}

impl EventFilter {
    /// Create a filter.
    pub const fn new(target: HitId, kinds: PointerKinds) -> Self {
        Self { target, kinds }
    }

    /// Whether an event queued for `target` passes this filter.
    ///
    /// Non-pointer events addressed to the target always pass; the caller
    /// decides what to do with them.
    pub fn matches(&self, target: HitId, event: &Event) -> bool {
        if target != self.target {
            return false;
        }
        match event {
            Event::Pointer(pointer) => self.kinds.contains(pointer.kind.mask()),
            _ => true,
        }
    }
}

/// Events queued for targets, in delivery order.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    items: VecDeque<(HitId, Event)>,
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for `target`.
    pub fn push(&mut self, target: HitId, event: Event) {
        self.items.push_back((target, event));
    }

    /// Remove and return the oldest event matching `filter`.
    pub fn pop(&mut self, filter: EventFilter) -> Option<Event> {
        let index = self
            .items
            .iter()
            .position(|(target, event)| filter.matches(*target, event))?;
        self.items.remove(index).map(|(_, event)| event)
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Routes host input to the targets registered by the last frame.
#[derive(Debug, Default)]
pub struct InputRouter {
    index: HitIndex,
    queue: EventQueue,
}

impl InputRouter {
    /// Create a router with no targets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the target index with a freshly finished frame's.
    pub fn install(&mut self, index: HitIndex) {
        self.index = index;
    }

    /// The installed index.
    pub fn index(&self) -> &HitIndex {
        &self.index
    }

    /// Route a viewport-absolute pointer event. Returns the number of
    /// targets it was queued for.
    pub fn pointer(&mut self, kind: PointerKind, buttons: PointerButtons, position: Point) -> usize {
        let hits = self.index.hits(position);
        for entry in &hits {
            let transform = Transform::translate(Point::from(entry.origin));
            let event = PointerEvent {
                kind,
                buttons,
                position: transform.invert(position),
                transform,
            };
            self.queue.push(entry.id, Event::Pointer(event));
        }
        ctxui_core::trace!(
            ?kind,
            x = position.x,
            y = position.y,
            targets = hits.len(),
            "pointer routed"
        );
        hits.len()
    }

    /// Queue an arbitrary event for `target`, bypassing hit testing.
    pub fn send(&mut self, target: HitId, event: Event) {
        self.queue.push(target, event);
    }

    /// Hand the queued events to the next frame.
    pub fn take_events(&mut self) -> EventQueue {
        std::mem::take(&mut self.queue)
    }
}
