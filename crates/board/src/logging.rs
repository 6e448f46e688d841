use crate::config::Environment;
use actix_web::middleware::Logger;
use anyhow::Result;
use log::LevelFilter;

const PRODUCTION_ACCESS_LOG_FORMAT: &str = "%r %s %b - %D ms";

pub(crate) fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info, // Default to Info if the level is unrecognized
    }
}

pub fn setup_logging(level: &str, environment: Environment) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(parse_log_level(level));
    if environment.is_production() {
        builder.format_timestamp_secs();
    } else {
        builder.format_timestamp(None);
    }
    builder.try_init()?;
    Ok(())
}

/// Access log middleware: terse lines in production, the full default
/// format everywhere else.
pub(crate) fn access_logger(environment: Environment) -> Logger {
    if environment.is_production() {
        Logger::new(PRODUCTION_ACCESS_LOG_FORMAT)
    } else {
        Logger::default()
    }
}
