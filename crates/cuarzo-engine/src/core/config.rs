use crate::surface::{Canvas, VideoSurface};

/// Engine-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Development build. Informational; surfaced in logs.
    pub dev_mode: bool,
}

impl EngineConfig {
    /// Reads the configuration from the build and process environment.
    ///
    /// `dev_mode` follows `debug_assertions`, unless `CUARZO_DEV` is set to
    /// `1`/`true` or `0`/`false`.
    pub fn from_env() -> Self {
        let dev_mode = std::env::var("CUARZO_DEV")
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or(cfg!(debug_assertions));

        Self { dev_mode }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dev_mode: cfg!(debug_assertions),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Options accepted by `Engine::init`.
///
/// When both are set, `image_brand_url` takes precedence over `video`.
pub struct InitOptions {
    pub canvas: Option<Box<dyn Canvas>>,
    /// Canvas width in pixels. Defaults to 600.
    pub width: u32,
    /// Canvas height in pixels. Defaults to 800.
    pub height: u32,
    pub image_brand_url: Option<String>,
    pub video: Option<Box<dyn VideoSurface>>,
}

impl InitOptions {
    pub const DEFAULT_WIDTH: u32 = 600;
    pub const DEFAULT_HEIGHT: u32 = 800;

    pub fn new(canvas: impl Canvas + 'static) -> Self {
        Self {
            canvas: Some(Box::new(canvas)),
            ..Self::default()
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn image_brand_url(mut self, url: impl Into<String>) -> Self {
        self.image_brand_url = Some(url.into());
        self
    }

    pub fn video(mut self, video: impl VideoSurface + 'static) -> Self {
        self.video = Some(Box::new(video));
        self
    }
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            canvas: None,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            image_brand_url: None,
            video: None,
        }
    }
}

impl std::fmt::Debug for InitOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InitOptions")
            .field("canvas", &self.canvas.is_some())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("image_brand_url", &self.image_brand_url)
            .field("video", &self.video.as_ref().map(|v| v.source().to_string()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_size_is_600_by_800() {
        let opts = InitOptions::default();
        assert_eq!((opts.width, opts.height), (600, 800));
        assert!(opts.canvas.is_none());
    }

    #[test]
    fn flag_parsing() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
