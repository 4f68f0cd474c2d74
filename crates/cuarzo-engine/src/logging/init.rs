use std::sync::Once;

use crate::core::EngineConfig;

/// Logger configuration.
///
/// `env_filter` uses `env_logger` directive syntax, e.g.
/// `"info"` or `"cuarzo_engine=trace,winit=warn"`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    /// Level used when neither `env_filter` nor `RUST_LOG` is set.
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    /// Debug-level output in development builds, info otherwise.
    pub fn for_engine(config: &EngineConfig) -> Self {
        Self {
            default_level: if config.dev_mode {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            },
            ..Self::default()
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Only the first call has an effect.
///
/// If another logger was installed first, this leaves it in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(config.default_level);
            }
        }

        builder.write_style(config.write_style);

        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_mode_selects_debug_level() {
        let dev = LoggingConfig::for_engine(&EngineConfig { dev_mode: true });
        let rel = LoggingConfig::for_engine(&EngineConfig { dev_mode: false });
        assert_eq!(dev.default_level, log::LevelFilter::Debug);
        assert_eq!(rel.default_level, log::LevelFilter::Info);
    }

    #[test]
    fn repeated_init_is_harmless() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::default());
    }
}
