#![forbid(unsafe_code)]

//! ctxui public facade crate.
//!
//! Re-exports the types needed to drive a frame loop and attach context
//! overlays to regions of it, plus a prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use ctxui_core::direction::Direction;
pub use ctxui_core::event::{Event, PointerButtons, PointerEvent, PointerKind, PointerKinds};
pub use ctxui_core::geometry::{Constraints, Offset, Point, Rect, Size, Transform};

#[cfg(feature = "tracing-json")]
pub use ctxui_core::init_json_subscriber;

// --- Render re-exports -----------------------------------------------------

pub use ctxui_render::{
    EventFilter, Fragment, Frame, FrameOutput, HeadlessHost, HitId, HitIndex, InputRouter, Placed,
    WINDOW_SIZE,
};

// --- Widget re-exports -----------------------------------------------------

pub use ctxui_widgets::placement;
pub use ctxui_widgets::{ContextArea, ContextAreaConfig, Widget};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Constraints, ContextArea, ContextAreaConfig, Direction, Event, Frame, HitId, Offset,
        Point, PointerButtons, Rect, Size, Widget,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use crate::HeadlessHost;

    #[test]
    fn prelude_drives_a_context_menu() {
        let mut host = HeadlessHost::new(Size::new(640, 480));
        let mut area = ContextArea::new();
        let menu = |f: &mut Frame| {
            f.fill(Rect::new(0, 0, 90, 60), 0xdddd_ddff);
            Size::new(90, 60)
        };

        host.run_frame(|f| {
            area.layout(f, menu);
        });
        host.click(PointerButtons::SECONDARY, Point::new(600.0, 450.0));
        host.run_frame(|f| {
            area.layout(f, menu);
        });

        assert!(area.active());
        assert_eq!(area.position_hint(), Some(Direction::NW));
        assert_eq!(area.overlay_bounds(), Some(Rect::new(510, 390, 90, 60)));
    }
}
