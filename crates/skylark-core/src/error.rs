//! Crate error types

use thiserror::Error;

/// Errors raised while resolving client configuration, plus the failures a
/// running client reports to its [`ErrorHandler`](crate::handler::ErrorHandler)s.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Conversation id does not carry the required `19:` prefix
    #[error("Invalid chat id: {0}")]
    InvalidChatId(String),

    /// Build was attempted with an empty resource set
    #[error("No resources selected")]
    NoResources,

    /// Neither a credential nor a conversation scope was supplied at build time
    #[error("No chat specified")]
    NoChatSpecified,

    /// Failure reported by a running client (transport, protocol)
    ///
    /// The resolver itself never raises this; it exists so error handlers
    /// have a single error type to receive.
    #[error("{0}")]
    Other(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ClientError::InvalidChatId("abc".to_string()).to_string(),
            "Invalid chat id: abc"
        );
        assert_eq!(ClientError::NoResources.to_string(), "No resources selected");
        assert_eq!(ClientError::NoChatSpecified.to_string(), "No chat specified");
    }
}
