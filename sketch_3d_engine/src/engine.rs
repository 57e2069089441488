/// Sketch3D Engine - process-wide logging facade
///
/// Cameras, renderers and GPU buffers are owned by the caller; the only
/// global is the logger every `engine_*!` macro writes to.

use std::sync::{OnceLock, RwLock};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::default())))
}

pub struct Engine;

impl Engine {
    /// Route every subsequent log entry to `logger_impl`.
    ///
    /// ```no_run
    /// use sketch_3d_engine::sketch3d::{Engine, log::{DefaultLogger, LogSeverity}};
    ///
    /// // show per-draw trace output
    /// Engine::set_logger(DefaultLogger::new(LogSeverity::Trace));
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger_impl: L) {
        Self::install(Box::new(logger_impl));
    }

    /// Back to a [`DefaultLogger`] at Info.
    pub fn reset_logger() {
        Self::install(Box::new(DefaultLogger::default()));
    }

    /// Used by the `engine_trace!` .. `engine_warn!` macros.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(LogEntry::now(severity, source, message));
    }

    /// Used by `engine_error!`, which passes its call site.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(LogEntry::now(severity, source, message).at(file, line));
    }

    fn install(replacement: Box<dyn Logger>) {
        // a poisoned lock keeps the previous logger
        if let Ok(mut current) = logger().write() {
            *current = replacement;
        }
    }

    fn dispatch(entry: LogEntry) {
        if let Ok(current) = logger().read() {
            current.log(&entry);
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
