use std::{
    io::Write as _,
    sync::{OnceLock, PoisonError, RwLock},
};

use log::{Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    // default configuration
    LOGGER.get_or_init(|| AppLogger::new(log::Level::Warn))
}

/// Installs the logger. Calling it again only changes the level.
pub fn init(level: log::Level) {
    let logger = get_logger();
    logger.set_min_level(level);

    if log::set_logger(logger).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
}

/// Maps the number of `-v` flags to a level, starting at warnings.
pub fn level_from_verbosity(verbose: u8) -> log::Level {
    match verbose {
        0 => log::Level::Warn,
        1 => log::Level::Info,
        2 => log::Level::Debug,
        _ => log::Level::Trace,
    }
}

/// Writes records to stderr, so they never end up mixed into the rendered maze on stdout.
pub struct AppLogger {
    min_level: RwLock<log::Level>,
}

impl AppLogger {
    fn new(min_level: log::Level) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> log::Level {
        *self.min_level.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_min_level(&self, level: log::Level) {
        *self.min_level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }

    pub fn format(level: log::Level, source: &str, message: &str) -> String {
        format!("[{:<5} {}] {}", level, source, message)
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = Self::format(
                record.level(),
                record.module_path().unwrap_or("unknown"),
                &record.args().to_string(),
            );
            // nowhere left to report a failing stderr
            let _ = writeln!(std::io::stderr().lock(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity() {
        assert_eq!(level_from_verbosity(0), log::Level::Warn);
        assert_eq!(level_from_verbosity(2), log::Level::Debug);
        assert_eq!(level_from_verbosity(9), log::Level::Trace);
    }

    #[test]
    fn filtering() {
        let logger = AppLogger::new(log::Level::Info);
        let debug = Metadata::builder().level(log::Level::Debug).build();
        let error = Metadata::builder().level(log::Level::Error).build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&error));

        logger.set_min_level(log::Level::Trace);
        assert!(logger.enabled(&debug));
    }

    #[test]
    fn line_format() {
        assert_eq!(
            AppLogger::format(log::Level::Info, "pmaze", "seed 4"),
            "[INFO  pmaze] seed 4"
        );
    }
}
