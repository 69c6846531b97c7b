//! Diagnostics sink.
//!
//! The pipeline never talks to a process-wide logger directly: the caller
//! builds a sink once and threads it through. The default sink forwards to
//! the [log] facade, so `env_logger` renders pipeline diagnostics like any
//! other log line.
use std::sync::Mutex;

pub use log::Level;

/// Receives pipeline diagnostics.
///
/// Implementations must be shareable across worker threads.
pub trait Diagnostics: Sync {
    fn record(&self, level: Level, message: &str);
}

/// Forwards diagnostics to the [log] facade.
#[derive(Debug, Default)]
pub struct LogSink;

impl Diagnostics for LogSink {
    fn record(&self, level: Level, message: &str) {
        log::log!(level, "{}", message);
    }
}

/// Captures diagnostics in memory. Meant for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<(Level, String)>>,
}

impl MemorySink {
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.lock().unwrap().clone()
    }
}

impl Diagnostics for MemorySink {
    fn record(&self, level: Level, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::{Diagnostics, Level, MemorySink};

    #[test]
    fn test_memory_sink() {
        let sink = MemorySink::default();
        sink.record(Level::Warn, "skipped record 3");
        sink.record(Level::Info, "done");

        let messages = sink.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], (Level::Warn, "skipped record 3".to_string()));
    }
}
