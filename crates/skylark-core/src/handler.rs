//! Error-handling callbacks

use std::sync::Arc;

use crate::error::ClientError;

/// Callback invoked by a running client when it encounters an error.
///
/// Handlers are appended to the builder in order and carried to the built
/// client unmodified; when and how they are dispatched is the client's
/// concern, not the resolver's.
pub trait ErrorHandler: Send + Sync {
    /// React to an error raised by the client.
    ///
    /// `fatal` is true when the client is shutting down because of the error.
    fn handle(&self, error: &ClientError, fatal: bool);
}

/// Type alias for an Arc-wrapped error handler
pub type SharedErrorHandler = Arc<dyn ErrorHandler>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingHandler {
        calls: AtomicUsize,
    }

    impl ErrorHandler for CountingHandler {
        fn handle(&self, _error: &ClientError, _fatal: bool) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_handler_receives_errors() {
        let handler = CountingHandler {
            calls: AtomicUsize::new(0),
        };
        handler.handle(&ClientError::Other("connection reset".to_string()), false);
        handler.handle(&ClientError::Other("token expired".to_string()), true);
        assert_eq!(handler.calls.load(Ordering::SeqCst), 2);
    }
}
