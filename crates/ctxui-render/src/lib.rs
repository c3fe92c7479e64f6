#![forbid(unsafe_code)]

//! Render kernel: frames, recorded fragments, deferred replay, hit testing,
//! and pointer routing.
//!
//! One frame of a host loop looks like:
//!
//! ```
//! use std::time::Instant;
//! use ctxui_core::event::{PointerButtons, PointerKind};
//! use ctxui_core::geometry::{Constraints, Point, Rect, Size};
//! use ctxui_render::frame::{Frame, HitId};
//! use ctxui_render::input::InputRouter;
//!
//! let mut router = InputRouter::new();
//! let id = HitId::unique();
//!
//! let mut frame = Frame::new(Instant::now(), Constraints::tight(Size::new(80, 24)))
//!     .with_events(router.take_events());
//! frame.register_hit(Rect::new(0, 0, 10, 10), id);
//! router.install(frame.finish().hit_index());
//!
//! let delivered = router.pointer(PointerKind::Press, PointerButtons::PRIMARY, Point::new(3.0, 3.0));
//! assert_eq!(delivered, 1);
//! ```

pub mod frame;
pub mod headless;
pub mod hit_index;
pub mod input;

pub use frame::{Fragment, Frame, FrameOutput, HitId, Op, Placed, Values, WINDOW_SIZE};
pub use headless::HeadlessHost;
pub use hit_index::{HitEntry, HitIndex};
pub use input::{EventFilter, EventQueue, InputRouter};
