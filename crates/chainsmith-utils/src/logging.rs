use crate::{ChainsmithError, ChainsmithResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

/// Log levels supported by chainsmith
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ChainsmithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(ChainsmithError::Invalid(format!("Invalid log level: {}", s))),
        }
    }
}

/// Chainsmith-specific log categories for easier filtering and debugging
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogCategory {
    /// Configuration loading and resolution
    Config,
    /// Network declarations and endpoints
    Network,
    /// Credential provider operations
    Credential,
    /// Declaration validation
    Validation,
    /// General system operations
    System,
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogCategory::Config => write!(f, "config"),
            LogCategory::Network => write!(f, "network"),
            LogCategory::Credential => write!(f, "credential"),
            LogCategory::Validation => write!(f, "validation"),
            LogCategory::System => write!(f, "system"),
        }
    }
}

/// Structured log entry with rich context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Timestamp in milliseconds since Unix epoch
    pub timestamp: u64,
    /// Log level
    pub level: LogLevel,
    /// Log category
    pub category: LogCategory,
    /// Environment being resolved (if applicable)
    pub environment: Option<String>,
    /// Main log message
    pub message: String,
    /// Additional structured data
    pub fields: HashMap<String, LogValue>,
}

/// Flexible value type for structured logging fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Bytes(Vec<u8>),
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::String(s)
    }
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::String(s.to_string())
    }
}

impl From<i64> for LogValue {
    fn from(i: i64) -> Self {
        LogValue::Integer(i)
    }
}

impl From<u64> for LogValue {
    fn from(i: u64) -> Self {
        LogValue::Integer(i as i64)
    }
}

impl From<u16> for LogValue {
    fn from(i: u16) -> Self {
        LogValue::Integer(i as i64)
    }
}

impl From<f64> for LogValue {
    fn from(f: f64) -> Self {
        LogValue::Float(f)
    }
}

impl From<bool> for LogValue {
    fn from(b: bool) -> Self {
        LogValue::Boolean(b)
    }
}

impl From<Vec<u8>> for LogValue {
    fn from(bytes: Vec<u8>) -> Self {
        LogValue::Bytes(bytes)
    }
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::String(s) => write!(f, "{}", s),
            LogValue::Integer(i) => write!(f, "{}", i),
            LogValue::Float(fl) => write!(f, "{}", fl),
            LogValue::Boolean(b) => write!(f, "{}", b),
            LogValue::Bytes(bytes) => write!(f, "0x{}", hex::encode(bytes)),
        }
    }
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum log level to output
    pub min_level: LogLevel,
    /// Whether to output in JSON format
    pub json_format: bool,
    /// Whether to include timestamps
    pub include_timestamp: bool,
    /// Whether to log to console
    pub console_output: bool,
    /// Categories to filter (empty = all categories)
    pub filtered_categories: Vec<LogCategory>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            json_format: false,
            include_timestamp: true,
            console_output: true,
            filtered_categories: vec![],
        }
    }
}

/// Log output destination
pub trait LogOutput: Send + Sync {
    fn write_log(&self, entry: &LogEntry) -> ChainsmithResult<()>;
    fn flush(&self) -> ChainsmithResult<()>;
}

/// Console output implementation
pub struct ConsoleOutput {
    json_format: bool,
}

impl ConsoleOutput {
    pub fn new(json_format: bool) -> Self {
        Self { json_format }
    }

    fn format_human_readable(&self, entry: &LogEntry) -> String {
        let timestamp = if entry.timestamp > 0 {
            format!("{} ", entry.timestamp / 1000)
        } else {
            String::new()
        };

        let environment_info = entry
            .environment
            .as_ref()
            .map(|name| format!("({}) ", name))
            .unwrap_or_default();

        let fields_str = if !entry.fields.is_empty() {
            let fields: Vec<String> = entry
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            format!(" [{}]", fields.join(", "))
        } else {
            String::new()
        };

        format!(
            "{}{}[{}] [{}] {}{}",
            timestamp, environment_info, entry.level, entry.category, entry.message, fields_str
        )
    }
}

impl LogOutput for ConsoleOutput {
    fn write_log(&self, entry: &LogEntry) -> ChainsmithResult<()> {
        let output = if self.json_format {
            serde_json::to_string(entry).map_err(|e| {
                ChainsmithError::Serialization(format!("JSON serialization failed: {}", e))
            })?
        } else {
            self.format_human_readable(entry)
        };

        println!("{}", output);
        Ok(())
    }

    fn flush(&self) -> ChainsmithResult<()> {
        use std::io::{self, Write};
        io::stdout()
            .flush()
            .map_err(|e| ChainsmithError::Internal(format!("Failed to flush stdout: {}", e)))
    }
}

/// Main logger implementation
pub struct ChainsmithLogger {
    config: LogConfig,
    outputs: Vec<Box<dyn LogOutput>>,
    current_environment: Arc<Mutex<Option<String>>>,
}

impl ChainsmithLogger {
    pub fn new(config: LogConfig) -> Self {
        let mut outputs: Vec<Box<dyn LogOutput>> = Vec::new();

        if config.console_output {
            outputs.push(Box::new(ConsoleOutput::new(config.json_format)));
        }

        Self {
            config,
            outputs,
            current_environment: Arc::new(Mutex::new(None)),
        }
    }

    /// Set the environment label attached to subsequent log entries
    pub fn set_current_environment(&self, name: String) {
        if let Ok(mut current) = self.current_environment.lock() {
            *current = Some(name);
        }
    }

    /// Clear the environment label (after resolution completes)
    pub fn clear_current_environment(&self) {
        if let Ok(mut current) = self.current_environment.lock() {
            *current = None;
        }
    }

    /// Add a custom output destination
    pub fn add_output(&mut self, output: Box<dyn LogOutput>) {
        self.outputs.push(output);
    }

    /// Check if a log entry should be written based on configuration
    fn should_log(&self, level: LogLevel, category: &LogCategory) -> bool {
        if level < self.config.min_level {
            return false;
        }

        if !self.config.filtered_categories.is_empty() {
            return self.config.filtered_categories.contains(category);
        }

        true
    }

    /// Log a message with structured data
    pub fn log(
        &self,
        level: LogLevel,
        category: LogCategory,
        message: String,
        fields: HashMap<String, LogValue>,
    ) -> ChainsmithResult<()> {
        if !self.should_log(level, &category) {
            return Ok(());
        }

        let environment = self
            .current_environment
            .lock()
            .map(|e| e.clone())
            .unwrap_or(None);

        let entry = LogEntry {
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis() as u64,
            level,
            category,
            environment,
            message,
            fields,
        };

        for output in &self.outputs {
            output.write_log(&entry)?;
        }

        Ok(())
    }

    /// Convenience methods for different log levels
    pub fn trace(&self, category: LogCategory, message: &str) -> ChainsmithResult<()> {
        self.log(LogLevel::Trace, category, message.to_string(), HashMap::new())
    }

    pub fn debug(&self, category: LogCategory, message: &str) -> ChainsmithResult<()> {
        self.log(LogLevel::Debug, category, message.to_string(), HashMap::new())
    }

    pub fn info(&self, category: LogCategory, message: &str) -> ChainsmithResult<()> {
        self.log(LogLevel::Info, category, message.to_string(), HashMap::new())
    }

    pub fn warn(&self, category: LogCategory, message: &str) -> ChainsmithResult<()> {
        self.log(LogLevel::Warn, category, message.to_string(), HashMap::new())
    }

    pub fn error(&self, category: LogCategory, message: &str) -> ChainsmithResult<()> {
        self.log(LogLevel::Error, category, message.to_string(), HashMap::new())
    }

    /// Log with structured fields
    pub fn log_with_fields(
        &self,
        level: LogLevel,
        category: LogCategory,
        message: &str,
        fields: &[(&str, LogValue)],
    ) -> ChainsmithResult<()> {
        let fields_map: HashMap<String, LogValue> = fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();

        self.log(level, category, message.to_string(), fields_map)
    }

    /// Flush all outputs
    pub fn flush(&self) -> ChainsmithResult<()> {
        for output in &self.outputs {
            output.flush()?;
        }
        Ok(())
    }
}

/// Global logger instance
static GLOBAL_LOGGER: OnceLock<ChainsmithLogger> = OnceLock::new();

/// Initialize the global logger
pub fn init_logger(config: LogConfig) -> ChainsmithResult<()> {
    GLOBAL_LOGGER
        .set(ChainsmithLogger::new(config))
        .map_err(|_| ChainsmithError::Internal("Logger already initialized".to_string()))?;
    Ok(())
}

/// Get reference to global logger
pub fn get_logger() -> Option<&'static ChainsmithLogger> {
    GLOBAL_LOGGER.get()
}
