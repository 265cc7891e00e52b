use std::sync::atomic::{AtomicBool, Ordering};

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "vellum_engine::interact=trace"). When absent, `RUST_LOG` is consulted and
/// `default_level` applies if that is unset too.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
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

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Installs the global logger.
///
/// Returns `true` if this call installed it. Later calls, or a logger installed
/// by someone else (test harnesses often do), leave the existing one in place.
pub fn init_logging(config: LoggingConfig) -> bool {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return false;
    }

    let mut builder = env_logger::Builder::new();

    match config.env_filter {
        Some(filter) => {
            builder.parse_filters(&filter);
        }
        None => match std::env::var("RUST_LOG") {
            Ok(filter) => {
                builder.parse_filters(&filter);
            }
            Err(_) => {
                builder.filter_level(config.default_level);
            }
        },
    }

    builder.write_style(config.write_style);

    match builder.try_init() {
        Ok(()) => {
            log::debug!("logging initialized");
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_no_op() {
        let _ = init_logging(LoggingConfig::default());
        assert!(!init_logging(LoggingConfig {
            env_filter: Some("trace".into()),
            ..LoggingConfig::default()
        }));
    }
}
