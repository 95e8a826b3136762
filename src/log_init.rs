use crate::error::{AppError, Result};
use log::{LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

enum Target {
    Stderr,
    File(PathBuf),
}

struct AppLogger {
    level: LevelFilter,
    target: Target,
}

impl log::Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match &self.target {
            Target::Stderr => {
                let _ = writeln!(std::io::stderr(), "[{}] {}", record.level(), record.args());
            }
            Target::File(path) => {
                if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                    let _ = writeln!(file, "[{}] {}", record.level(), record.args());
                }
            }
        }
    }

    fn flush(&self) {}
}

/// `-v` count to level: warnings by default, then info, debug, trace.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the process-wide logger. Fails if the log file can't be opened
/// or a logger is already installed.
pub fn init_logger(verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let target = match log_file {
        Some(path) => {
            OpenOptions::new().create(true).append(true).open(path)?;
            Target::File(path.to_path_buf())
        }
        None => Target::Stderr,
    };
    let level = level_for_verbosity(verbose);

    log::set_boxed_logger(Box::new(AppLogger { level, target }))
        .map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}
