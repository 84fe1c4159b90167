use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Unknown log level encountered: '{0}'")]
    UnknownLevel(String),

    #[error("Failed to initialize logging: {0}")]
    Init(#[from] log::SetLoggerError),
}

pub fn parse_level(level: &str) -> Result<log::LevelFilter, LoggingError> {
    match level {
        "off" => Ok(log::LevelFilter::Off),
        "trace" => Ok(log::LevelFilter::Trace),
        "debug" => Ok(log::LevelFilter::Debug),
        "info" => Ok(log::LevelFilter::Info),
        "warn" => Ok(log::LevelFilter::Warn),
        "error" => Ok(log::LevelFilter::Error),
        _ => Err(LoggingError::UnknownLevel(level.to_string())),
    }
}

/// Installs the global logger. Fails if the level is unknown or a logger
/// is already installed.
pub fn setup_logging(level: &str) -> Result<(), LoggingError> {
    let level = parse_level(level)?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .level_for("sqlx", level.min(log::LevelFilter::Info))
        .chain(std::io::stdout())
        .apply()?;
    info!("logging initialized.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").unwrap(), log::LevelFilter::Debug);
        assert_eq!(parse_level("off").unwrap(), log::LevelFilter::Off);
        assert!(matches!(parse_level("verbose"), Err(LoggingError::UnknownLevel(_))));
    }

    #[test]
    fn test_unknown_level_does_not_install_a_logger() {
        let error = setup_logging("loud").unwrap_err();
        assert_eq!(format!("{}", error), "Unknown log level encountered: 'loud'");
    }
}
