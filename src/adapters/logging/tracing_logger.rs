//! Activity logger that only writes to the process's own `tracing` output.

use tracing::{debug, error, info, warn};

use crate::ports::{ActivityLogEntry, ActivityLogger, LogLevel};

/// Used when no logging service is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingActivityLogger;

impl ActivityLogger for TracingActivityLogger {
    fn log(&self, entry: ActivityLogEntry) {
        let ActivityLogEntry {
            service,
            operation,
            payload,
            level,
            message,
        } = entry;

        match level {
            LogLevel::Debug => debug!(%service, %operation, %payload, "{}", message),
            LogLevel::Info => info!(%service, %operation, %payload, "{}", message),
            LogLevel::Warning => warn!(%service, %operation, %payload, "{}", message),
            LogLevel::Error => error!(%service, %operation, %payload, "{}", message),
        }
    }
}
