//! Console and SD-card logger.
//!
//! Implements the [`log`] facade. Every record goes to the console and, when
//! an SD card is inserted, to [`LOG_FILE`]. The file is truncated each time
//! the program starts.
//!
//! Lines look like:
//!
//! ```text
//! INFO [1m 3s 20ms] clawbot_driver::opcontrol - Driver control started
//! WARN [1m 9s 410ms] clawbot_driver::opcontrol::controller - Controller State Error: Offline
//! ```

use std::{
    fmt::Arguments,
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    sync::{Mutex, OnceLock},
    time::Duration,
};

use humantime::format_duration;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use vexide::time::user_uptime;

/// Name of the log file on the SD card.
pub const LOG_FILE: &str = "driver.log";

/// Logger writing to the console and [`LOG_FILE`].
pub struct DriverLogger {
    /// `None` when the file could not be opened, usually because no SD
    /// card is inserted. Console output still works.
    file_writer: Mutex<Option<BufWriter<File>>>,
}

impl DriverLogger {
    fn new() -> Self {
        let file_writer = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(LOG_FILE)
            .ok()
            .map(BufWriter::new);

        Self {
            file_writer: Mutex::new(file_writer),
        }
    }
}

impl log::Log for DriverLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool { metadata.level() <= log::max_level() }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record.level(), uptime(), record.target(), record.args());
        print!("{line}");

        if let Ok(mut guard) = self.file_writer.lock() {
            if let Some(writer) = guard.as_mut() {
                let _ = writer.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.file_writer.lock() {
            if let Some(writer) = guard.as_mut() {
                let _ = writer.flush();
            }
        }
    }
}

static LOGGER: OnceLock<DriverLogger> = OnceLock::new();

/// Installs the logger and sets the maximum level.
///
/// Call once, before the first log macro.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been installed.
///
/// # Example
///
/// ```ignore
/// use clawbot_driver::fs::logger;
/// use log::LevelFilter;
///
/// logger::init(LevelFilter::Info)?;
/// ```
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(DriverLogger::new);
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

fn format_line(level: Level, uptime: Duration, target: &str, args: &Arguments<'_>) -> String {
    format!("{} [{}] {} - {}\n", level, format_duration(uptime), target, args)
}

/// Time since the user program started. Off the brain there is no uptime
/// counter, so a fixed value is used instead.
fn uptime() -> Duration {
    if cfg!(target_os = "vexos") {
        user_uptime()
    } else {
        Duration::from_millis(123_432)
    }
}
