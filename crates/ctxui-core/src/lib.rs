#![forbid(unsafe_code)]

//! Core: geometry, pointer events, compass directions, and logging.

pub mod direction;
pub mod event;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, trace_span, warn};

#[cfg(feature = "tracing-json")]
pub use logging::init_json_subscriber;
