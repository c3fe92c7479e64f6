#![forbid(unsafe_code)]

//! Context area: a region that summons an overlay on a pointer press.
//!
//! A [`ContextArea`] watches its own bounds for a press of its activation
//! button (secondary by default). When one arrives it becomes active and,
//! on every frame until dismissed, lays out the caller's overlay content
//! once, positions it next to the press without crossing the viewport
//! edges, and defers it on top of everything else in the frame.
//!
//! While active the area also defers an invisible scrim under the overlay.
//! Presses that land on the scrim (outside both the area and the overlay)
//! dismiss it, as does a primary press on the area outside the overlay, or
//! an explicit [`ContextArea::dismiss`] (typically from a menu item).
//!
//! # Example
//!
//! ```
//! use ctxui_core::event::PointerButtons;
//! use ctxui_core::geometry::{Point, Rect, Size};
//! use ctxui_render::frame::Frame;
//! use ctxui_render::headless::HeadlessHost;
//! use ctxui_widgets::context_area::ContextArea;
//!
//! let mut host = HeadlessHost::new(Size::new(800, 600));
//! let mut area = ContextArea::default();
//! let menu = |f: &mut Frame| {
//!     f.fill(Rect::new(0, 0, 120, 80), 0xeeee_eeff);
//!     Size::new(120, 80)
//! };
//!
//! host.run_frame(|f| {
//!     area.layout(f, menu);
//! });
//! host.press(PointerButtons::SECONDARY, Point::new(300.0, 200.0));
//! host.run_frame(|f| {
//!     area.layout(f, menu);
//! });
//!
//! assert!(area.activated());
//! assert_eq!(area.overlay_bounds(), Some(Rect::new(300, 200, 120, 80)));
//! ```

use std::time::Instant;

use ctxui_core::direction::Direction;
use ctxui_core::event::{Event, PointerButtons, PointerEvent, PointerKind, PointerKinds};
use ctxui_core::geometry::{Constraints, Offset, Point, Rect, Size};
use ctxui_core::{debug, debug_span};
use ctxui_render::frame::{Frame, HitId};
use ctxui_render::input::EventFilter;

use crate::Widget;
use crate::placement;

/// Half-width of the suppression scrim, large enough to cover any viewport.
const SCRIM_EXTENT: i32 = 1_000_000;

/// Caller-set behavior of a [`ContextArea`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContextAreaConfig {
    /// Buttons that summon the overlay. Empty means
    /// [`PointerButtons::SECONDARY`], filled in on the first update.
    pub activation: PointerButtons,

    /// Anchor the overlay at the area's own origin instead of the press.
    ///
    /// Useful for button-style menus, where the overlay should hang off the
    /// control rather than follow the pointer.
    pub absolute_position: bool,

    /// Viewport edge or corner to push the overlay against when it cannot
    /// fit next to its anchor. Overwritten at each activation unless
    /// `absolute_position` is set.
    pub position_hint: Option<Direction>,
}

impl ContextAreaConfig {
    /// Set the activation buttons.
    #[must_use]
    pub fn with_activation(mut self, buttons: PointerButtons) -> Self {
        self.activation = buttons;
        self
    }

    /// Anchor at the area origin.
    #[must_use]
    pub fn with_absolute_position(mut self, absolute: bool) -> Self {
        self.absolute_position = absolute;
        self
    }

    /// Set the placement hint.
    #[must_use]
    pub fn with_position_hint(mut self, hint: Direction) -> Self {
        self.position_hint = Some(hint);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Targets {
    area: HitId,
    /// Backdrop under the overlay content.
    overlay: HitId,
    suppression: HitId,
}

/// Overlay-summoning region state. Keep one per overlay site across frames.
#[derive(Debug, Default)]
pub struct ContextArea {
    /// Behavior settings.
    pub config: ContextAreaConfig,

    last_update: Option<Instant>,
    targets: Option<Targets>,
    anchor: Option<Point>,
    /// Origin the overlay was last drawn at.
    placed: Offset,
    overlay: Size,
    active: bool,
    just_activated: bool,
    just_dismissed: bool,
}

impl ContextArea {
    /// Create an inactive area with default behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inactive area with the given behavior.
    pub fn with_config(config: ContextAreaConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Process the events delivered since the last frame.
    ///
    /// Called by [`layout`](Self::layout); calling it again within the same
    /// frame does nothing.
    pub fn update(&mut self, frame: &mut Frame) {
        let now = frame.now();
        if self.last_update == Some(now) {
            return;
        }
        self.last_update = Some(now);
        if self.config.activation.is_empty() {
            self.config.activation = PointerButtons::SECONDARY;
        }
        let targets = self.targets();

        let on_area = EventFilter::new(targets.area, PointerKinds::PRESS | PointerKinds::RELEASE);
        while let Some(event) = frame.event(on_area) {
            let Event::Pointer(pointer) = event else {
                continue;
            };
            if pointer.kind != PointerKind::Press {
                continue;
            }
            self.dismiss_if_outside(&pointer);
            if pointer.buttons.contains(self.config.activation) {
                self.activate(&pointer, frame.window_size());
            }
        }

        // Presses on the overlay background never re-anchor.
        let on_overlay = EventFilter::new(targets.overlay, PointerKinds::PRESS);
        while let Some(event) = frame.event(on_overlay) {
            if let Some(pointer) = event.as_pointer() {
                self.dismiss_if_outside(pointer);
            }
        }

        let on_scrim = EventFilter::new(targets.suppression, PointerKinds::PRESS);
        while let Some(event) = frame.event(on_scrim) {
            if event.as_pointer().is_some_and(|p| p.kind == PointerKind::Press) {
                self.dismiss();
            }
        }
    }

    /// Lay out the area and, while active, the overlay produced by `content`.
    ///
    /// Returns the minimum constraint: the area takes whatever space its
    /// parent gives it and draws nothing of its own.
    pub fn layout<W: Widget>(&mut self, frame: &mut Frame, mut content: W) -> Size {
        self.update(frame);
        let span = debug_span!("context_area_layout", active = self.active);
        let _guard = span.enter();

        let size = frame.constraints.min;
        let bounds = Rect::from_size(size);
        let targets = self.targets();

        let anchor = match self.anchor {
            Some(anchor) if self.active => anchor,
            _ => {
                frame.register_hit_pass(bounds, targets.area);
                return size;
            }
        };

        let viewport = frame.window_size();
        let (overlay, overlay_size) =
            frame.record(Constraints::loose(viewport), |f| content.layout(f));
        self.overlay = overlay_size;
        self.placed = placement::place(anchor, overlay_size, viewport, self.config.position_hint);
        debug!(
            x = self.placed.x,
            y = self.placed.y,
            width = overlay_size.width,
            height = overlay_size.height,
            "context overlay placed"
        );

        let (scrim, _) = frame.record(Constraints::loose(viewport), |f| {
            f.register_hit(
                Rect::new(
                    -SCRIM_EXTENT,
                    -SCRIM_EXTENT,
                    2 * SCRIM_EXTENT,
                    2 * SCRIM_EXTENT,
                ),
                targets.suppression,
            );
            Size::ZERO
        });
        frame.defer_absolute(Offset::ZERO, scrim);

        // The area itself stays reachable above the scrim.
        let (region, _) = frame.record(frame.constraints, |f| {
            f.register_hit(bounds, targets.area);
            size
        });
        frame.defer(Offset::ZERO, region);

        let (popup, _) = frame.record(Constraints::tight(overlay_size), |f| {
            f.register_hit(Rect::from_size(overlay_size), targets.overlay);
            f.add(Offset::ZERO, overlay);
            overlay_size
        });
        frame.defer_absolute(self.placed, popup);

        size
    }

    /// Deactivate the area.
    pub fn dismiss(&mut self) {
        if self.active {
            debug!("context overlay dismissed");
        }
        self.active = false;
        self.just_dismissed = true;
    }

    /// Whether the overlay is currently shown.
    pub fn active(&self) -> bool {
        self.active
    }

    /// Whether the area became active since the last call.
    pub fn activated(&mut self) -> bool {
        std::mem::take(&mut self.just_activated)
    }

    /// Whether the area was dismissed since the last call.
    pub fn dismissed(&mut self) -> bool {
        std::mem::take(&mut self.just_dismissed)
    }

    /// Viewport point the overlay is anchored to, once activated.
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Current placement hint.
    pub fn position_hint(&self) -> Option<Direction> {
        self.config.position_hint
    }

    /// Where the overlay was drawn by the last layout, while active.
    pub fn overlay_bounds(&self) -> Option<Rect> {
        self.active.then(|| self.overlay_rect())
    }

    /// The id events for the area itself are routed to.
    ///
    /// Hosts can send non-pointer events here; the area ignores them.
    pub fn target(&mut self) -> HitId {
        self.targets().area
    }

    fn targets(&mut self) -> Targets {
        *self.targets.get_or_insert_with(|| Targets {
            area: HitId::unique(),
            overlay: HitId::unique(),
            suppression: HitId::unique(),
        })
    }

    fn overlay_rect(&self) -> Rect {
        Rect::at(self.placed, self.overlay)
    }

    /// Primary presses outside the drawn overlay dismiss it.
    fn dismiss_if_outside(&mut self, pointer: &PointerEvent) {
        if self.active
            && pointer.is_press_of(PointerButtons::PRIMARY)
            && !self.overlay_rect().contains(pointer.absolute_position())
        {
            self.dismiss();
        }
    }

    fn activate(&mut self, pointer: &PointerEvent, viewport: Size) {
        let anchor = if self.config.absolute_position {
            pointer.target_origin()
        } else {
            let at = pointer.absolute_position();
            self.config.position_hint = Some(placement::hint_for_point(at, viewport));
            at
        };
        self.anchor = Some(anchor);
        self.placed = anchor.round();
        self.overlay = Size::ZERO;
        self.active = true;
        self.just_activated = true;
        debug!(
            x = anchor.x,
            y = anchor.y,
            hint = ?self.config.position_hint,
            viewport_width = viewport.width,
            viewport_height = viewport.height,
            "context overlay activated"
        );
    }
}
