// src/log.rs
//
// `log` backend: timestamped lines appended to the debug log file,
// warnings and errors mirrored to stderr.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: OnceLock<FileLogger> = OnceLock::new();

struct FileLogger {
    start: Instant,
    level: LevelFilter,
    file: Mutex<Option<File>>,
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).ok()?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = fmt_elapsed(self.start.elapsed().as_millis());
        let line = format!("[{elapsed}][{}] {}\n", record.level(), record.args());

        if record.level() <= Level::Warn {
            eprint!("{line}");
        }
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                let _ = file.flush();
            }
        }
    }
}

/// Default log location: `<data dir>/debug.log`.
pub fn default_log_path() -> PathBuf {
    use crate::config::consts::{DATA_DIR, LOG_FILE};
    PathBuf::from(DATA_DIR).join(LOG_FILE)
}

/// Install the file logger. Calling it again keeps the first logger.
pub fn init(level: LevelFilter) {
    init_at(&default_log_path(), level);
}

pub fn init_at(path: &Path, level: LevelFilter) {
    let logger = LOGGER.get_or_init(|| FileLogger {
        start: Instant::now(),
        level,
        file: Mutex::new(open_log_file(path)),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level);
    }
}

#[cfg(test)]
mod tests {
    use super::fmt_elapsed;

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
    }
}
