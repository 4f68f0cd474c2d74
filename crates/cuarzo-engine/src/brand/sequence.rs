use crate::host::{ImageSource, MediaPresenter, MediaTask, PageStyle};
use crate::surface::VideoSurface;

/// Caller-supplied splash media.
pub enum BrandMedia {
    Image(String),
    Video(Box<dyn VideoSurface>),
}

impl std::fmt::Debug for BrandMedia {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Image(url) => f.debug_tuple("Image").field(url).finish(),
            Self::Video(video) => f.debug_tuple("Video").field(&video.source()).finish(),
        }
    }
}

/// Where the sequence currently is.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BrandStage {
    NotStarted,
    Custom,
    EngineLogo,
    Finished,
}

/// Outcome of driving the sequence one step.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BrandStep {
    /// Media is playing; call `complete` when the host reports it done.
    Waiting,
    /// The engine logo finished. The ready signal should fire now.
    Finished,
    /// Nothing was pending; the call had no effect.
    Ignored,
}

#[derive(Debug)]
pub struct BrandSequence {
    stage: BrandStage,
    custom: Option<BrandMedia>,
}

impl BrandSequence {
    pub fn new(custom: Option<BrandMedia>) -> Self {
        Self {
            stage: BrandStage::NotStarted,
            custom,
        }
    }

    #[inline]
    pub fn stage(&self) -> BrandStage {
        self.stage
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self.stage, BrandStage::Custom | BrandStage::EngineLogo)
    }

    /// Begins the sequence. Only the first call has an effect.
    pub fn start<H>(&mut self, host: &mut H) -> BrandStep
    where
        H: MediaPresenter + PageStyle + ?Sized,
    {
        if self.stage != BrandStage::NotStarted {
            return BrandStep::Ignored;
        }

        let task = match self.custom.as_mut() {
            Some(BrandMedia::Image(url)) => {
                log::debug!("brand: showing image {url:?}");
                host.show_image(&ImageSource::Url(url.clone()))
            }
            Some(BrandMedia::Video(video)) => {
                log::debug!("brand: playing video {:?}", video.source());
                host.play_video(video.as_mut())
            }
            None => return self.show_engine_logo(host),
        };

        self.stage = BrandStage::Custom;
        match task {
            MediaTask::Complete => self.show_engine_logo(host),
            MediaTask::Pending => BrandStep::Waiting,
        }
    }

    /// Resumes after the host finished the pending media step.
    pub fn complete<H>(&mut self, host: &mut H) -> BrandStep
    where
        H: MediaPresenter + PageStyle + ?Sized,
    {
        match self.stage {
            BrandStage::Custom => self.show_engine_logo(host),
            BrandStage::EngineLogo => self.finish(),
            BrandStage::NotStarted | BrandStage::Finished => BrandStep::Ignored,
        }
    }

    fn show_engine_logo<H>(&mut self, host: &mut H) -> BrandStep
    where
        H: MediaPresenter + PageStyle + ?Sized,
    {
        self.stage = BrandStage::EngineLogo;
        log::debug!("brand: showing engine logo");

        let task = host.show_image(&ImageSource::EngineLogo);
        host.set_background(None);

        match task {
            MediaTask::Complete => self.finish(),
            MediaTask::Pending => BrandStep::Waiting,
        }
    }

    fn finish(&mut self) -> BrandStep {
        self.stage = BrandStage::Finished;
        log::debug!("brand: finished");
        BrandStep::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Color;
    use crate::surface::VideoClip;

    #[derive(Debug, Clone, PartialEq)]
    enum Ev {
        Image(ImageSource),
        Video(String),
        Background(Option<Color>),
    }

    struct Recorder {
        events: Vec<Ev>,
        reply: MediaTask,
    }

    impl Recorder {
        fn new(reply: MediaTask) -> Self {
            Self { events: Vec::new(), reply }
        }
    }

    impl MediaPresenter for Recorder {
        fn show_image(&mut self, source: &ImageSource) -> MediaTask {
            self.events.push(Ev::Image(source.clone()));
            self.reply
        }

        fn play_video(&mut self, video: &mut dyn VideoSurface) -> MediaTask {
            self.events.push(Ev::Video(video.source().to_string()));
            self.reply
        }
    }

    impl PageStyle for Recorder {
        fn set_background(&mut self, color: Option<Color>) {
            self.events.push(Ev::Background(color));
        }
    }

    #[test]
    fn no_custom_media_goes_straight_to_logo() {
        let mut host = Recorder::new(MediaTask::Complete);
        let mut seq = BrandSequence::new(None);

        assert_eq!(seq.start(&mut host), BrandStep::Finished);
        assert_eq!(
            host.events,
            vec![Ev::Image(ImageSource::EngineLogo), Ev::Background(None)]
        );
    }

    #[test]
    fn synchronous_image_then_logo() {
        let mut host = Recorder::new(MediaTask::Complete);
        let mut seq = BrandSequence::new(Some(BrandMedia::Image("a.png".into())));

        assert_eq!(seq.start(&mut host), BrandStep::Finished);
        assert_eq!(
            host.events,
            vec![
                Ev::Image(ImageSource::Url("a.png".into())),
                Ev::Image(ImageSource::EngineLogo),
                Ev::Background(None),
            ]
        );
    }

    #[test]
    fn pending_video_waits_for_two_completions() {
        let mut host = Recorder::new(MediaTask::Pending);
        let video = VideoClip::new("intro.webm");
        let mut seq = BrandSequence::new(Some(BrandMedia::Video(Box::new(video))));

        assert_eq!(seq.start(&mut host), BrandStep::Waiting);
        assert_eq!(seq.stage(), BrandStage::Custom);
        assert_eq!(host.events, vec![Ev::Video("intro.webm".into())]);

        assert_eq!(seq.complete(&mut host), BrandStep::Waiting);
        assert_eq!(seq.stage(), BrandStage::EngineLogo);
        // Background is restored as soon as the logo starts.
        assert_eq!(host.events.last(), Some(&Ev::Background(None)));

        assert_eq!(seq.complete(&mut host), BrandStep::Finished);
        assert_eq!(seq.complete(&mut host), BrandStep::Ignored);
    }

    #[test]
    fn start_twice_is_ignored() {
        let mut host = Recorder::new(MediaTask::Complete);
        let mut seq = BrandSequence::new(None);
        seq.start(&mut host);
        assert_eq!(seq.start(&mut host), BrandStep::Ignored);
        assert_eq!(host.events.len(), 2);
    }

    #[test]
    fn complete_before_start_is_ignored() {
        let mut host = Recorder::new(MediaTask::Complete);
        let mut seq = BrandSequence::new(None);
        assert_eq!(seq.complete(&mut host), BrandStep::Ignored);
        assert!(host.events.is_empty());
    }
}
