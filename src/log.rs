// src/log.rs
//
// File sink for the `log` facade. Lines look like
//   [00:00:01.234][INFO] Load: teachers rows=42 skipped=0
// and land in .store/debug.log. Nothing is written until `init()` runs,
// so library users and tests stay silent unless they opt in.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use ::log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::consts::LOG_FILE;

static LOGGER: OnceLock<FileLog> = OnceLock::new();

struct FileLog {
    path: PathBuf,
    lock: Mutex<()>,
    start: Instant,
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

impl Log for FileLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= ::log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = fmt_elapsed(self.start.elapsed().as_millis());
        let line = format!("[{elapsed}][{}] {}\n", level_tag(record.level()), record.args());

        if let Ok(_guard) = self.lock.lock() {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

/// Install the file logger at debug level. Safe to call more than once;
/// only the first call wins.
pub fn init() -> Result<(), SetLoggerError> {
    init_at(PathBuf::from(LOG_FILE), LevelFilter::Debug)
}

/// Install the file logger writing to `path`.
pub fn init_at(path: PathBuf, level: LevelFilter) -> Result<(), SetLoggerError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = fs::create_dir_all(parent);
        }
    }
    let logger = LOGGER.get_or_init(|| FileLog {
        path,
        lock: Mutex::new(()),
        start: Instant::now(),
    });
    ::log::set_logger(logger)?;
    ::log::set_max_level(level);
    Ok(())
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::log::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::log::error!($($arg)*)
    };
}
