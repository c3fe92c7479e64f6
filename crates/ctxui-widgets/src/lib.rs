#![forbid(unsafe_code)]

//! Widgets for ctxui.

pub mod context_area;
pub mod placement;

pub use context_area::{ContextArea, ContextAreaConfig};

use ctxui_core::geometry::Size;
use ctxui_render::frame::Frame;

/// A `Widget` lays itself out into a [`Frame`] and reports its size.
///
/// Widgets read `frame.constraints`, emit ops in their local space, and
/// return the size they occupy. Closures of the same shape are widgets.
pub trait Widget {
    /// Lay out the widget.
    fn layout(&mut self, frame: &mut Frame) -> Size;
}

impl<F> Widget for F
where
    F: FnMut(&mut Frame) -> Size,
{
    fn layout(&mut self, frame: &mut Frame) -> Size {
        self(frame)
    }
}
