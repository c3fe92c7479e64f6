#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! # Design Notes
//!
//! - Pointer positions are delivered in the receiving target's local space;
//!   [`PointerEvent::transform`] maps them back to the viewport
//! - `PointerButtons` is the set of buttons held when the event fired
//! - Filters select pointer events by kind through [`PointerKinds`] masks

use bitflags::bitflags;

use crate::geometry::{Point, Transform};

/// Canonical input event as queued for a target.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A pointer (mouse, pen, touch) event.
    Pointer(PointerEvent),

    /// Focus gained (`true`) or lost (`false`).
    Focus(bool),
}

impl Event {
    /// The pointer payload, if this is a pointer event.
    #[must_use]
    pub const fn as_pointer(&self) -> Option<&PointerEvent> {
        match self {
            Self::Pointer(event) => Some(event),
            _ => None,
        }
    }
}

bitflags! {
    /// Set of pointer buttons.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct PointerButtons: u8 {
        /// Primary (usually left) button.
        const PRIMARY = 0b0000_0001;
        /// Secondary (usually right) button.
        const SECONDARY = 0b0000_0010;
        /// Tertiary (usually middle) button.
        const TERTIARY = 0b0000_0100;
    }
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// A button went down.
    Press,
    /// A button went up.
    Release,
    /// The pointer moved.
    Move,
    /// Wheel or trackpad scroll.
    Scroll,
}

impl PointerKind {
    /// The single-kind mask for this kind.
    #[must_use]
    pub const fn mask(self) -> PointerKinds {
        match self {
            Self::Press => PointerKinds::PRESS,
            Self::Release => PointerKinds::RELEASE,
            Self::Move => PointerKinds::MOVE,
            Self::Scroll => PointerKinds::SCROLL,
        }
    }
}

bitflags! {
    /// Mask of pointer kinds used when polling a target's queue.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PointerKinds: u8 {
        const PRESS = 0b0001;
        const RELEASE = 0b0010;
        const MOVE = 0b0100;
        const SCROLL = 0b1000;
    }
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerKind,

    /// Buttons involved in (or held during) the event.
    pub buttons: PointerButtons,

    /// Position in the receiving target's local space.
    pub position: Point,

    /// Local-to-viewport mapping of the receiving target.
    pub transform: Transform,
}

impl PointerEvent {
    /// Create a pointer event in viewport space (identity transform).
    #[must_use]
    pub const fn new(kind: PointerKind, buttons: PointerButtons, position: Point) -> Self {
        Self {
            kind,
            buttons,
            position,
            transform: Transform::IDENTITY,
        }
    }

    /// Attach the local-to-viewport transform.
    #[must_use]
    pub const fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Position in viewport coordinates.
    #[must_use]
    pub fn absolute_position(&self) -> Point {
        self.transform.apply(self.position)
    }

    /// Viewport position of the receiving target's local origin.
    #[must_use]
    pub fn target_origin(&self) -> Point {
        self.transform.apply(Point::ZERO)
    }

    /// Whether this is a press involving any of `buttons`.
    #[must_use]
    pub fn is_press_of(&self, buttons: PointerButtons) -> bool {
        self.kind == PointerKind::Press && self.buttons.intersects(buttons)
    }
}
