//! Rendering-surface collaborators.
//!
//! The engine never draws on its own; it only sizes the surface, binds its 2D
//! context and clears it between frames. Drawing is done by nodes through the
//! context handed to them in [`crate::scene::FrameCtx`].

mod canvas;
mod software;
mod video;

pub use canvas::{Canvas, RenderContext2d};
pub use software::SoftwareCanvas;
pub use video::{VideoClip, VideoSurface};
