use crate::core::config::DisplayConfig;
use sentry::integrations::log::LogFilter;

/// How a log record travels to Sentry.
pub fn sentry_filter(md: &log::Metadata) -> LogFilter {
    match md.level() {
        // Capture error records as Sentry events
        // These are grouped into issues, representing high-severity errors to act upon
        log::Level::Error => LogFilter::Event,
        // Ignore trace level records, as they're too verbose
        log::Level::Trace => LogFilter::Ignore,
        // Capture everything else as a log
        _ => LogFilter::Log,
    }
}

#[cfg(target_os = "android")]
mod device {
    use super::sentry_filter;
    use crate::core::config::{self, DisplayConfig};
    use sentry::integrations::log::SentryLogger;
    use std::sync::OnceLock;

    const LOG_TAG: &str = "prayertime-display";

    static SENTRY_GUARD: OnceLock<Option<sentry::ClientInitGuard>> = OnceLock::new();

    pub fn init(config: &DisplayConfig) {
        SENTRY_GUARD.get_or_init(|| install(config));
    }

    fn install(config: &DisplayConfig) -> Option<sentry::ClientInitGuard> {
        let log_level = config.logging.level_filter();
        let android_config = android_logger::Config::default()
            .with_tag(LOG_TAG)
            .with_max_level(log_level);

        let Some(dsn) = config.sentry.dsn() else {
            android_logger::init_once(android_config);
            log::info!("prayertime-display {} started without Sentry", config::VERSION);
            return None;
        };

        let guard = sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                enable_logs: true,
                ..Default::default()
            },
        ));

        // Wrap the Android logger with Sentry's logger
        let logger = SentryLogger::with_dest(android_logger::AndroidLogger::new(android_config))
            .filter(sentry_filter);

        if log::set_boxed_logger(Box::new(logger)).is_ok() {
            log::set_max_level(log_level);
        }
        log::info!("prayertime-display {} started", config::VERSION);
        Some(guard)
    }
}

/// Installs the logger once per process, later calls are no-ops.
#[cfg(target_os = "android")]
pub fn init(config: &DisplayConfig) {
    device::init(config);
}

/// Off-device the embedding process owns the logger, only the level is applied.
#[cfg(not(target_os = "android"))]
pub fn init(config: &DisplayConfig) {
    log::set_max_level(config.logging.level_filter());
}
