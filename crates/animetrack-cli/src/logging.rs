use anyhow::Result;
use std::io;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::{self, time::ChronoUtc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};
use watchlist_config::LoggingConfig;

/// Filter directive for the verbosity flags.
///
/// `-q` keeps errors only, `-v` is debug, `-vv` and up is trace; without
/// flags the configured level applies.
fn filter_directive(verbose_level: u8, quiet: bool, configured_level: &str) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose_level {
        0 => configured_level.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

pub fn init_logging(verbose_level: u8, quiet: bool, config: &LoggingConfig) -> Result<()> {
    let directive = filter_directive(verbose_level, quiet, &config.level);
    let filter = if quiet {
        EnvFilter::new(directive)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
    };

    let json = std::env::var("RUST_LOG_JSON")
        .map(|v| v == "true")
        .unwrap_or_else(|_| config.json_output());

    let registry = Registry::default().with(filter);

    if let Some(log_path) = &config.file {
        let log_dir = log_path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Log file path has no parent directory"))?;
        std::fs::create_dir_all(log_dir)?;

        let log_filename = log_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow::anyhow!("Invalid log filename"))?;

        // "animetrack.log" rotates as animetrack.2026-10-18 etc.
        let log_prefix = log_filename.rsplit_once('.').map_or(log_filename, |(stem, _)| stem);

        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, log_prefix);

        if json {
            let json_layer = fmt::layer()
                .json()
                .with_timer(ChronoUtc::rfc_3339())
                .with_writer(file_appender);
            registry.with(json_layer).init();
        } else {
            let fmt_layer = fmt::layer()
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(false)
                .with_writer(file_appender);
            registry.with(fmt_layer).init();
        }
    } else if json {
        let json_layer = fmt::layer()
            .json()
            .with_timer(ChronoUtc::rfc_3339())
            .with_writer(io::stderr);
        registry.with(json_layer).init();
    } else {
        let fmt_layer = fmt::layer()
            .with_timer(ChronoUtc::rfc_3339())
            .with_writer(io::stderr);
        registry.with(fmt_layer).init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(0, false, "warn"), "warn");
        assert_eq!(filter_directive(1, false, "warn"), "debug");
        assert_eq!(filter_directive(3, false, "warn"), "trace");
        assert_eq!(filter_directive(2, true, "warn"), "error");
    }
}
