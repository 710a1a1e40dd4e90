use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use time::macros::format_description;
use time::OffsetDateTime;

use crate::error::{Result, UtilError};

/// Settings for a [`ConsoleLog`].
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory holding the log file. `None` disables file output.
    pub dir: Option<PathBuf>,
    /// Name of the log file inside `dir`.
    pub file_name: String,
    /// Whether messages are echoed to stdout.
    pub echo_stdout: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: None,
            file_name: "console_log.txt".to_owned(),
            echo_stdout: true,
        }
    }
}

/// Prints messages to stdout and appends them to a log file.
///
/// Built by the caller and handed to whatever needs it.
#[derive(Debug)]
pub struct ConsoleLog {
    config: LogConfig,
    file: Option<PathBuf>,
}

impl ConsoleLog {
    /// Creates a logger, creating the log directory if one is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the log directory cannot be created.
    pub fn new(config: LogConfig) -> Result<Self> {
        let mut log = Self { config, file: None };
        if let Some(dir) = log.config.dir.clone() {
            log.set_dir(dir)?;
        }
        Ok(log)
    }

    /// Redirects file output to `dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn set_dir(&mut self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(UtilError::from)?;
        self.file = Some(dir.join(&self.config.file_name));
        self.config.dir = Some(dir.to_path_buf());
        Ok(())
    }

    /// Path of the log file, if file output is enabled.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Prints `message` and appends it to the log file.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be written.
    pub fn print(&self, message: &str) -> Result<()> {
        self.echo(message);
        self.append(message)
    }

    /// Like [`ConsoleLog::print`], prefixed with the local time as `HH:MM:SS.mmm> `.
    ///
    /// # Errors
    ///
    /// Returns an error if the time cannot be formatted or the log file
    /// cannot be written.
    pub fn print_tm(&self, message: &str) -> Result<()> {
        let line = format!("{}> {message}", timestamp()?);
        self.echo(&line);
        self.append(&line)
    }

    /// Appends `message` to the log file without printing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be written.
    pub fn print_only_file(&self, message: &str) -> Result<()> {
        self.append(message)
    }

    fn echo(&self, line: &str) {
        if self.config.echo_stdout {
            println!("{line}");
        }
    }

    fn append(&self, line: &str) -> Result<()> {
        let Some(path) = &self.file else {
            return Ok(());
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(UtilError::from)?;
        writeln!(file, "{line}").map_err(UtilError::from)?;
        file.flush().map_err(UtilError::from)?;
        Ok(())
    }
}

/// Wall-clock time with millisecond precision.
///
/// Falls back to UTC when the local offset cannot be determined.
fn timestamp() -> Result<String> {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let text = now
        .format(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        ))
        .map_err(UtilError::from)?;
    Ok(text)
}
