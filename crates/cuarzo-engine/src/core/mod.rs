//! Engine core.
//!
//! `Engine` is an explicit context object owned by the host application. It
//! sequences the lifecycle:
//!
//! init → brand media → engine logo → ready signal
//! mount → start frame (ready hooks) → update frames (update hooks) …
//!
//! and exposes `start`/`pause`/`stop` transitions on the frame loop.

mod config;
mod engine;
mod state;

pub use config::{EngineConfig, InitOptions};
pub use engine::Engine;
pub use state::LoopState;
