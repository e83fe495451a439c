use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "warn",
/// "quill_gl=debug"). When unset, `RUST_LOG` is used, then `info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }

    fn builder(&self) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = &self.env_filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(self.write_style);
        builder
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger.
///
/// Idempotent; only the first call has an effect. A logger installed by the
/// host beforehand is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        if config.builder().try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
