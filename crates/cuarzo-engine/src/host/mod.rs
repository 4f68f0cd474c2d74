//! Host collaborator contracts.
//!
//! The engine is driven from outside: the host owns the real frame scheduler,
//! the media players and the page the canvas lives in. It calls back into
//! [`crate::Engine::on_animation_frame`] and [`crate::Engine::on_media_complete`].

mod media;
mod scheduler;

pub use media::{ImageSource, MediaPresenter, MediaTask, PageStyle};
pub use scheduler::{FrameHandle, FrameScheduler};

/// Everything the engine needs from its host environment.
pub trait Host: FrameScheduler + MediaPresenter + PageStyle {}

impl<T> Host for T where T: FrameScheduler + MediaPresenter + PageStyle {}
