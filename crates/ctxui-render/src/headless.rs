#![forbid(unsafe_code)]

//! Deterministic frame driver without a window system.
//!
//! [`HeadlessHost`] plays the role of a real host loop: it stamps frames at a
//! fixed 16 ms cadence, publishes the window size, installs each finished
//! frame's hit targets, and routes synthetic pointer input to them.

use std::time::{Duration, Instant};

use ctxui_core::event::{PointerButtons, PointerKind};
use ctxui_core::geometry::{Constraints, Point, Size};

use crate::frame::{Frame, FrameOutput};
use crate::input::InputRouter;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// A headless host loop.
#[derive(Debug)]
pub struct HeadlessHost {
    viewport: Size,
    publish_window_size: bool,
    epoch: Instant,
    frames: u32,
    router: InputRouter,
    output: FrameOutput,
}

impl HeadlessHost {
    /// Create a host with the given viewport.
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            publish_window_size: true,
            epoch: Instant::now(),
            frames: 0,
            router: InputRouter::new(),
            output: FrameOutput::default(),
        }
    }

    /// Stop publishing the window size, so widgets fall back to constraints.
    #[must_use]
    pub fn without_window_size(mut self) -> Self {
        self.publish_window_size = false;
        self
    }

    /// Change the viewport for subsequent frames.
    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Number of frames finished so far.
    pub fn frame_count(&self) -> u32 {
        self.frames
    }

    /// Output of the last finished frame.
    pub fn output(&self) -> &FrameOutput {
        &self.output
    }

    /// The router, for hosts that synthesize non-pointer events.
    pub fn router_mut(&mut self) -> &mut InputRouter {
        &mut self.router
    }

    /// Start the next frame: tight viewport constraints, pending events attached.
    pub fn begin_frame(&mut self) -> Frame {
        let now = self.epoch + FRAME_INTERVAL * self.frames;
        let frame = Frame::new(now, Constraints::tight(self.viewport))
            .with_events(self.router.take_events());
        if self.publish_window_size {
            frame.with_window_size(self.viewport)
        } else {
            frame
        }
    }

    /// Finish a frame and install its targets for the next one.
    pub fn end_frame(&mut self, frame: Frame) -> &FrameOutput {
        self.output = frame.finish();
        self.router.install(self.output.hit_index());
        self.frames += 1;
        &self.output
    }

    /// Run one frame through `view`.
    pub fn run_frame<F>(&mut self, view: F) -> &FrameOutput
    where
        F: FnOnce(&mut Frame),
    {
        let mut frame = self.begin_frame();
        view(&mut frame);
        self.end_frame(frame)
    }

    /// Route a press at a viewport position.
    pub fn press(&mut self, buttons: PointerButtons, at: Point) -> usize {
        self.router.pointer(PointerKind::Press, buttons, at)
    }

    /// Route a release at a viewport position.
    pub fn release(&mut self, buttons: PointerButtons, at: Point) -> usize {
        self.router.pointer(PointerKind::Release, buttons, at)
    }

    /// Route a press followed by a release.
    pub fn click(&mut self, buttons: PointerButtons, at: Point) {
        self.press(buttons, at);
        self.release(buttons, at);
    }
}
