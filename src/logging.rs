use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

// Conditional logging macros - only active in debug builds

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

const APP_DIR: &str = "word-guess";
const LOG_FILE: &str = "word-guess.log";

/// Where logs go when no `--log-file` is given.
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE))
}

/// Install the global logger.
///
/// Logs are appended to `log_path`. If that file cannot be opened, logs go to
/// stderr when `allow_stderr` is set and are dropped otherwise, since the
/// terminal UI owns the screen. Returns the file actually used, if any.
pub fn init_logging(log_path: Option<&Path>, allow_stderr: bool) -> Option<PathBuf> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    let opened = log_path.and_then(|path| open_log_file(path).map(|file| (path, file)));
    let used = match opened {
        Some((path, file)) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            Some(path.to_path_buf())
        }
        None if allow_stderr => {
            builder.target(env_logger::Target::Stderr);
            None
        }
        None => return None,
    };

    if builder.try_init().is_err() {
        // Already installed, e.g. by a test harness
        return None;
    }
    used
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
