/// A video surface that can be played as the brand splash.
pub trait VideoSurface {
    /// Source locator, for logging and for hosts that load by URL.
    fn source(&self) -> &str;

    /// Whether this surface can actually be played.
    ///
    /// `Engine::init` rejects a splash video that reports `false`.
    fn is_playable(&self) -> bool;

    /// Clip length in milliseconds, when known.
    fn duration_ms(&self) -> Option<f64> {
        None
    }
}

/// Plain video descriptor for hosts that play clips by locator.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoClip {
    pub source: String,
    pub duration_ms: Option<f64>,
}

impl VideoClip {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            duration_ms: None,
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

impl VideoSurface for VideoClip {
    fn source(&self) -> &str {
        &self.source
    }

    fn is_playable(&self) -> bool {
        !self.source.is_empty() && self.duration_ms.is_none_or(|d| d.is_finite() && d >= 0.0)
    }

    fn duration_ms(&self) -> Option<f64> {
        self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_is_not_playable() {
        assert!(!VideoClip::new("").is_playable());
        assert!(VideoClip::new("intro.webm").is_playable());
    }

    #[test]
    fn bad_duration_is_not_playable() {
        assert!(!VideoClip::new("intro.webm").with_duration_ms(f64::NAN).is_playable());
        assert!(!VideoClip::new("intro.webm").with_duration_ms(-1.0).is_playable());
        assert!(VideoClip::new("intro.webm").with_duration_ms(3000.0).is_playable());
    }
}
