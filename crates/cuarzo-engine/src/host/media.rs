use crate::coords::Color;
use crate::surface::VideoSurface;

/// Image shown during the brand sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// The engine's own logo, always shown last.
    EngineLogo,
    /// A caller-supplied image locator.
    Url(String),
}

/// State of a media step: a two-state task with one continuation.
///
/// `Pending` means the host will call `Engine::on_media_complete` exactly once
/// when the media finishes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MediaTask {
    Pending,
    Complete,
}

/// Image and video playback used by the brand sequence.
pub trait MediaPresenter {
    fn show_image(&mut self, source: &ImageSource) -> MediaTask;

    fn play_video(&mut self, video: &mut dyn VideoSurface) -> MediaTask;
}

/// Styling of the page that hosts the canvas.
pub trait PageStyle {
    /// Sets the page background, or removes the override with `None`.
    fn set_background(&mut self, color: Option<Color>);
}
