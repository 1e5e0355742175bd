//! Per-instance logging.
//!
//! Every message becomes a `tracing` event. It is also forwarded to the
//! host's FMI logger when the host turned logging on for its category, and
//! appended to the private log file when one is configured.

use std::ffi::CString;
use std::fmt::Display;
use std::fs::File;
use std::io::{LineWriter, Write as _};
use std::sync::{Arc, Mutex};

use crate::config::RuntimeOptions;
use crate::fmi2::{fmi2CallbackFunctions, fmi2CallbackLogger, fmi2ComponentEnvironment, Fmi2Status};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogCategory {
    Fmi,
    Osmp,
    Osi,
}

impl LogCategory {
    pub const ALL: [LogCategory; 3] = [LogCategory::Fmi, LogCategory::Osmp, LogCategory::Osi];

    pub fn as_str(self) -> &'static str {
        match self {
            LogCategory::Fmi => "FMI",
            LogCategory::Osmp => "OSMP",
            LogCategory::Osi => "OSI",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        LogCategory::ALL.into_iter().find(|c| c.as_str() == s)
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn status(self) -> Fmi2Status {
        match self {
            LogLevel::Info => Fmi2Status::Ok,
            LogLevel::Warning => Fmi2Status::Warning,
            LogLevel::Error => Fmi2Status::Error,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRecord {
    pub instance: String,
    pub category: LogCategory,
    pub level: LogLevel,
    pub message: String,
}

/// Where host-visible log records go.
pub trait LogSink {
    fn emit(&self, record: &LogRecord);
}

const PLAIN_FORMAT: &[u8] = b"%s\0";

/// Forwards records to the `fmi2CallbackLogger` the host passed at
/// instantiation.
pub struct HostLogSink {
    logger: fmi2CallbackLogger,
    environment: fmi2ComponentEnvironment,
    instance: CString,
}

impl HostLogSink {
    /// `None` when the host did not provide a logger.
    pub fn new(callbacks: &fmi2CallbackFunctions, instance: &str) -> Option<Self> {
        let logger = callbacks.logger?;
        Some(HostLogSink {
            logger: Some(logger),
            environment: callbacks.componentEnvironment,
            instance: to_c_string(instance),
        })
    }
}

impl LogSink for HostLogSink {
    fn emit(&self, record: &LogRecord) {
        let Some(logger) = self.logger else {
            return;
        };
        let category = to_c_string(record.category.as_str());
        let message = to_c_string(&record.message);
        // The message goes through "%s" so the host never interprets it as
        // a format string.
        unsafe {
            logger(
                self.environment,
                self.instance.as_ptr(),
                record.level.status(),
                category.as_ptr(),
                PLAIN_FORMAT.as_ptr().cast(),
                message.as_ptr(),
            );
        }
    }
}

/// Keeps records in memory. Clones share the same buffer.
#[derive(Clone, Default)]
pub struct BufferedSink {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl BufferedSink {
    pub fn new() -> Self {
        BufferedSink::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.message).collect()
    }
}

impl LogSink for BufferedSink {
    fn emit(&self, record: &LogRecord) {
        if let Ok(mut r) = self.records.lock() {
            r.push(record.clone());
        }
    }
}

pub struct InstanceLogger {
    instance: String,
    sink: Option<Box<dyn LogSink>>,
    host_logging: bool,
    enabled: [bool; 3],
    verbose_fmi: bool,
    private_log: Option<LineWriter<File>>,
}

impl InstanceLogger {
    pub fn new(
        instance: &str,
        sink: Option<Box<dyn LogSink>>,
        options: &RuntimeOptions,
        logging_on: bool,
    ) -> Self {
        let private_log = options.private_log.as_ref().and_then(|path| {
            match File::options().create(true).append(true).open(path) {
                Ok(f) => Some(LineWriter::new(f)),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "cannot open private log");
                    None
                }
            }
        });
        InstanceLogger {
            instance: instance.to_string(),
            sink,
            host_logging: logging_on,
            enabled: [true; 3],
            verbose_fmi: options.verbose_fmi,
            private_log,
        }
    }

    /// Applies `fmi2SetDebugLogging`. With no categories every category is
    /// enabled; otherwise only the named ones. Returns the names that are
    /// not categories of this component.
    pub fn set_debug_logging<'a>(&mut self, logging_on: bool, categories: &[&'a str]) -> Vec<&'a str> {
        self.host_logging = logging_on;
        if categories.is_empty() {
            self.enabled = [true; 3];
            return Vec::new();
        }
        self.enabled = [false; 3];
        let mut unknown = Vec::new();
        for &name in categories {
            match LogCategory::parse(name) {
                Some(c) => self.enabled[c.index()] = true,
                None => unknown.push(name),
            }
        }
        unknown
    }

    pub fn is_enabled(&self, category: LogCategory) -> bool {
        self.host_logging && self.enabled[category.index()]
    }

    pub fn log(&mut self, category: LogCategory, level: LogLevel, message: impl Display) {
        let message = message.to_string();
        let instance = self.instance.as_str();
        let category_name = category.as_str();
        match level {
            LogLevel::Info => {
                tracing::info!(target: "osi_trace_fmu", instance, category = category_name, "{message}")
            }
            LogLevel::Warning => {
                tracing::warn!(target: "osi_trace_fmu", instance, category = category_name, "{message}")
            }
            LogLevel::Error => {
                tracing::error!(target: "osi_trace_fmu", instance, category = category_name, "{message}")
            }
        }
        if let Some(out) = self.private_log.as_mut() {
            let _ = writeln!(out, "{category_name}: {instance}: {message}");
        }
        if self.is_enabled(category) {
            if let Some(sink) = &self.sink {
                sink.emit(&LogRecord {
                    instance: self.instance.clone(),
                    category,
                    level,
                    message,
                });
            }
        }
    }

    pub fn info(&mut self, category: LogCategory, message: impl Display) {
        self.log(category, LogLevel::Info, message);
    }

    pub fn warn(&mut self, category: LogCategory, message: impl Display) {
        self.log(category, LogLevel::Warning, message);
    }

    pub fn error(&mut self, category: LogCategory, message: impl Display) {
        self.log(category, LogLevel::Error, message);
    }

    /// One line per FMI entry point, only with verbose FMI logging.
    pub fn fmi_call(&mut self, function: &str) {
        if self.verbose_fmi {
            self.info(LogCategory::Fmi, format_args!("{function}()"));
        }
    }
}

fn to_c_string(s: &str) -> CString {
    CString::new(s.replace('\0', " ")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logger(options: &RuntimeOptions) -> (InstanceLogger, BufferedSink) {
        let sink = BufferedSink::new();
        let logger = InstanceLogger::new("inst", Some(Box::new(sink.clone())), options, true);
        (logger, sink)
    }

    #[test]
    fn categories_filter_host_records() {
        let (mut log, sink) = logger(&RuntimeOptions::default());
        let unknown = log.set_debug_logging(true, &["OSI", "bogus"]);
        assert_eq!(unknown, vec!["bogus"]);

        log.info(LogCategory::Osi, "kept");
        log.info(LogCategory::Osmp, "filtered");
        assert_eq!(sink.messages(), vec!["kept".to_string()]);

        log.set_debug_logging(true, &[]);
        log.info(LogCategory::Osmp, "all again");
        assert_eq!(sink.messages().len(), 2);
    }

    #[test]
    fn logging_off_silences_host() {
        let (mut log, sink) = logger(&RuntimeOptions::default());
        log.set_debug_logging(false, &[]);
        log.error(LogCategory::Osi, "hidden");
        assert!(sink.records().is_empty());
    }

    #[test]
    fn fmi_calls_need_verbose_option() {
        let (mut log, sink) = logger(&RuntimeOptions::default());
        log.fmi_call("fmi2DoStep");
        assert!(sink.records().is_empty());

        let options = RuntimeOptions {
            verbose_fmi: true,
            ..RuntimeOptions::default()
        };
        let (mut log, sink) = logger(&options);
        log.fmi_call("fmi2DoStep");
        assert_eq!(sink.records()[0].category, LogCategory::Fmi);
        assert_eq!(sink.messages(), vec!["fmi2DoStep()".to_string()]);
    }

    #[test]
    fn private_log_gets_every_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("private.log");
        let options = RuntimeOptions {
            private_log: Some(path.clone()),
            ..RuntimeOptions::default()
        };
        let mut log = InstanceLogger::new("inst", None, &options, false);
        log.warn(LogCategory::Osmp, "no buffer");
        drop(log);
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "OSMP: inst: no buffer\n");
    }

    #[test]
    fn interior_nul_is_replaced() {
        assert_eq!(to_c_string("a\0b").to_bytes(), b"a b");
    }
}
