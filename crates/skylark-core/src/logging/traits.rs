//! Logger trait definition

use std::sync::Arc;

/// Diagnostics sink carried through to the built client.
///
/// The resolver itself never logs; the sink configured on the builder is
/// handed to whichever client variant gets constructed, unmodified, and the
/// client routes its diagnostics there.
///
/// Implementations:
/// - `NoOpLogger`: silent, for tests or callers that want no output
/// - `ConsoleLogger`: logs to stdout/stderr
pub trait Logger: Send + Sync {
    /// Log a debug message
    fn debug(&self, message: &str);

    /// Log an info message
    fn info(&self, message: &str);

    /// Log a warning message
    fn warn(&self, message: &str);

    /// Log an error message
    fn error(&self, message: &str);
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;
