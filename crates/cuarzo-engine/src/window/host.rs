use std::time::{Duration, Instant};

use crate::coords::Color;
use crate::host::{FrameHandle, FrameScheduler, ImageSource, MediaPresenter, MediaTask, PageStyle};
use crate::surface::VideoSurface;

/// Host state for the native runtime.
///
/// Frame requests are paced to `frame_interval`; splash images are held for
/// `splash_hold`, videos for their reported duration.
#[derive(Debug)]
pub struct WinitHost {
    frame_interval: Duration,
    splash_hold: Duration,

    next_handle: u64,
    pending_frame: Option<FrameHandle>,
    next_frame_at: Instant,

    media_deadline: Option<Instant>,
    background: Option<Color>,
}

impl WinitHost {
    pub fn new(frame_interval: Duration, splash_hold: Duration) -> Self {
        Self {
            frame_interval,
            splash_hold,
            next_handle: 0,
            pending_frame: None,
            next_frame_at: Instant::now(),
            media_deadline: None,
            background: None,
        }
    }

    #[inline]
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    #[inline]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    /// Whether a pending frame is due at `now`.
    pub fn frame_due(&self, now: Instant) -> bool {
        self.pending_frame.is_some() && now >= self.next_frame_at
    }

    /// Takes the pending frame for delivery and paces the next one.
    pub fn take_frame(&mut self, now: Instant) -> Option<FrameHandle> {
        let handle = self.pending_frame.take()?;
        self.next_frame_at = now + self.frame_interval;
        Some(handle)
    }

    /// Returns `true` once when the playing media has run its course.
    pub fn take_due_media(&mut self, now: Instant) -> bool {
        match self.media_deadline {
            Some(deadline) if now >= deadline => {
                self.media_deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Earliest instant the runtime needs to wake up for.
    pub fn next_wakeup(&self) -> Option<Instant> {
        let frame = self.pending_frame.map(|_| self.next_frame_at);
        match (frame, self.media_deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn hold(&mut self, duration: Duration) -> MediaTask {
        if duration.is_zero() {
            return MediaTask::Complete;
        }
        self.media_deadline = Some(Instant::now() + duration);
        MediaTask::Pending
    }
}

impl Default for WinitHost {
    fn default() -> Self {
        Self::new(Duration::from_micros(16_667), Duration::from_millis(1500))
    }
}

impl FrameScheduler for WinitHost {
    fn request_animation_frame(&mut self) -> FrameHandle {
        self.next_handle += 1;
        let handle = FrameHandle(self.next_handle);
        self.pending_frame = Some(handle);
        handle
    }

    fn cancel_animation_frame(&mut self, handle: FrameHandle) {
        if self.pending_frame == Some(handle) {
            self.pending_frame = None;
        }
    }
}

impl MediaPresenter for WinitHost {
    fn show_image(&mut self, source: &ImageSource) -> MediaTask {
        log::info!("splash image: {source:?}");
        self.hold(self.splash_hold)
    }

    fn play_video(&mut self, video: &mut dyn VideoSurface) -> MediaTask {
        match video.duration_ms() {
            Some(ms) => match Duration::try_from_secs_f64(ms / 1000.0) {
                Ok(duration) => {
                    log::info!("splash video: {} ({ms:.0}ms)", video.source());
                    self.hold(duration)
                }
                Err(e) => {
                    log::warn!(
                        "splash video {} has unusable duration {ms}: {e}; skipping",
                        video.source()
                    );
                    MediaTask::Complete
                }
            },
            None => {
                log::warn!("splash video {} has no duration; skipping", video.source());
                MediaTask::Complete
            }
        }
    }
}

impl PageStyle for WinitHost {
    fn set_background(&mut self, color: Option<Color>) {
        log::debug!("page background: {color:?}");
        self.background = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::VideoClip;

    #[test]
    fn cancel_only_drops_matching_handle() {
        let mut host = WinitHost::default();
        let a = host.request_animation_frame();
        host.cancel_animation_frame(FrameHandle(a.0 + 100));
        assert_eq!(host.pending_frame(), Some(a));
        host.cancel_animation_frame(a);
        assert_eq!(host.pending_frame(), None);
    }

    #[test]
    fn take_frame_paces_next_request() {
        let mut host = WinitHost::new(Duration::from_millis(10), Duration::ZERO);
        let now = Instant::now();
        host.request_animation_frame();
        assert!(host.frame_due(now));
        assert!(host.take_frame(now).is_some());

        host.request_animation_frame();
        assert!(!host.frame_due(now));
        assert!(host.frame_due(now + Duration::from_millis(10)));
    }

    #[test]
    fn zero_hold_completes_images_synchronously() {
        let mut host = WinitHost::new(Duration::from_millis(16), Duration::ZERO);
        assert_eq!(host.show_image(&ImageSource::EngineLogo), MediaTask::Complete);
        assert!(host.next_wakeup().is_none());
    }

    #[test]
    fn video_without_duration_is_skipped() {
        let mut host = WinitHost::default();
        let mut clip = VideoClip::new("intro.webm");
        assert_eq!(host.play_video(&mut clip), MediaTask::Complete);
    }

    struct Endless;

    impl VideoSurface for Endless {
        fn source(&self) -> &str {
            "endless.webm"
        }

        fn is_playable(&self) -> bool {
            true
        }

        fn duration_ms(&self) -> Option<f64> {
            Some(f64::MAX)
        }
    }

    #[test]
    fn unrepresentable_video_duration_is_skipped() {
        let mut host = WinitHost::default();
        assert_eq!(host.play_video(&mut Endless), MediaTask::Complete);
        assert!(host.next_wakeup().is_none());
    }

    #[test]
    fn media_deadline_fires_once() {
        let mut host = WinitHost::new(Duration::from_millis(16), Duration::from_millis(5));
        assert_eq!(host.show_image(&ImageSource::EngineLogo), MediaTask::Pending);

        let later = Instant::now() + Duration::from_millis(50);
        assert!(host.take_due_media(later));
        assert!(!host.take_due_media(later));
    }
}
