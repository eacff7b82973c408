use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Console stream the logger writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Stdout,
    Stderr,
}

impl LogOutput {
    /// Parse a `WIKI_LOG_OUTPUT` value: `stdout`, `stderr` or `none`
    ///
    /// Unknown values fall back to stderr.
    pub fn from_setting(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stdout" => Some(LogOutput::Stdout),
            "none" | "off" => None,
            _ => Some(LogOutput::Stderr),
        }
    }

    fn write(self, line: &str) {
        let _ = match self {
            LogOutput::Stdout => std::io::stdout().write_all(line.as_bytes()),
            LogOutput::Stderr => std::io::stderr().write_all(line.as_bytes()),
        };
    }
}

/// `log` backend writing timestamped lines to the console and optionally a file
pub struct Logger {
    severity: Level,
    console: Option<LogOutput>,
    colors: bool,
    file: Option<Mutex<File>>,
}

impl Logger {
    pub fn new(
        severity: Level,
        console: Option<LogOutput>,
        colors: bool,
        file_path: Option<PathBuf>,
    ) -> Self {
        let file = file_path.and_then(|path| {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            File::create(&path).ok().map(Mutex::new)
        });

        Self { severity, console, colors, file }
    }

    /// Install the logger configured from `WIKI_LOG` / `RUST_LOG`, `WIKI_LOG_OUTPUT`,
    /// `WIKI_LOG_FILE` and `NO_COLOR`
    pub fn init() -> Result<(), log::SetLoggerError> {
        let severity = std::env::var("WIKI_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
            .and_then(|level| level.parse::<Level>().ok())
            .unwrap_or(Level::Info);
        let console = std::env::var("WIKI_LOG_OUTPUT")
            .map(|value| LogOutput::from_setting(&value))
            .unwrap_or(Some(LogOutput::Stderr));
        let colors = std::env::var("NO_COLOR").is_err();
        let file_path = std::env::var("WIKI_LOG_FILE").ok().map(PathBuf::from);

        let logger = Logger::new(severity, console, colors, file_path);
        log::set_max_level(LevelFilter::Trace);
        log::set_logger(Box::leak(Box::new(logger)))
    }

    fn color(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1b[31m",
            Level::Warn => "\x1b[33m",
            Level::Info => "\x1b[36m",
            Level::Debug => "\x1b[35m",
            Level::Trace => "\x1b[37m",
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.severity
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default();
        let level = record.level();
        let message = format!("[{timestamp}] {level} {}", record.args());
        let line = format!("{message}\n");

        if let Some(console) = self.console {
            if self.colors {
                console.write(&format!("{}{message}\x1b[0m\n", Self::color(level)));
            } else {
                console.write(&line);
            }
        }

        // file output never carries colors
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {
        match self.console {
            Some(LogOutput::Stdout) => {
                let _ = std::io::stdout().flush();
            }
            Some(LogOutput::Stderr) => {
                let _ = std::io::stderr().flush();
            }
            None => {}
        }
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_below_severity() {
        let logger = Logger::new(Level::Warn, None, false, None);
        let warn = Metadata::builder().level(Level::Warn).build();
        let info = Metadata::builder().level(Level::Info).build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&info));
    }

    #[test]
    fn output_setting() {
        assert_eq!(LogOutput::from_setting("stdout"), Some(LogOutput::Stdout));
        assert_eq!(LogOutput::from_setting(" STDERR "), Some(LogOutput::Stderr));
        assert_eq!(LogOutput::from_setting("none"), None);
        assert_eq!(LogOutput::from_setting("bogus"), Some(LogOutput::Stderr));
    }

    #[test]
    fn writes_plain_lines_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("wiki.log");
        let logger = Logger::new(Level::Info, None, true, Some(path.clone()));

        logger.log(
            &Record::builder()
                .level(Level::Info)
                .args(format_args!("saved page"))
                .build(),
        );
        logger.flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("INFO saved page"));
        assert!(!contents.contains("\x1b["));
    }
}
