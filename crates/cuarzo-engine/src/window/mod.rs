//! Native host runtime.
//!
//! Owns the `winit` event loop and window and drives an [`crate::Engine`]
//! from it: redraw requests stand in for animation frames, timers stand in
//! for splash media playback.

mod host;
mod runtime;

pub use host::WinitHost;
pub use runtime::{Runtime, RuntimeConfig};
