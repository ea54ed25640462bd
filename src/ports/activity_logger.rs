//! ActivityLogger port - remote, fire-and-forget log sink.
//!
//! This is separate from the process's own `tracing` output: entries are
//! addressed to a shared logging service and carry the request payload.

use serde::Serialize;
use serde_json::Value as JsonValue;
use std::fmt;

/// Severity understood by the logging service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "Debug"),
            LogLevel::Info => write!(f, "Info"),
            LogLevel::Warning => write!(f, "Warning"),
            LogLevel::Error => write!(f, "Error"),
        }
    }
}

/// One entry for the logging service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityLogEntry {
    pub service: String,
    pub operation: String,
    pub payload: JsonValue,
    pub level: LogLevel,
    pub message: String,
}

impl ActivityLogEntry {
    pub fn info(
        service: impl Into<String>,
        operation: impl Into<String>,
        payload: JsonValue,
        message: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            operation: operation.into(),
            payload,
            level: LogLevel::Info,
            message: message.into(),
        }
    }
}

/// Fire-and-forget log sink.
///
/// Implementations must not block the caller and must swallow their own
/// failures.
pub trait ActivityLogger: Send + Sync {
    fn log(&self, entry: ActivityLogEntry);
}
