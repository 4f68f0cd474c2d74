//! Cuarzo engine crate.
//!
//! A small 2D game-loop engine: binds a canvas, plays an optional brand
//! splash, then drives ready/update hooks on a flat list of scene nodes once
//! per animation frame. Platform pieces (frame scheduling, media playback,
//! page styling) are supplied by a [`host::Host`] implementation.

pub mod error;
pub mod coords;
pub mod time;
pub mod surface;
pub mod host;
pub mod signal;
pub mod brand;
pub mod scene;
pub mod core;

pub mod logging;
pub mod window;

pub use crate::core::{Engine, EngineConfig, InitOptions, LoopState};
pub use crate::error::{EngineError, Result};
