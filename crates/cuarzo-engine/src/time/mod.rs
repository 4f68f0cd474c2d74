//! Time subsystem.
//!
//! Frame timing driven by host-supplied timestamps (milliseconds), so the
//! same clock works under a browser-style animation callback and under tests.
//! Intended usage:
//! - `begin()` on the start frame to set the baseline
//! - `tick()` once per update frame to obtain `FrameTime`

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
