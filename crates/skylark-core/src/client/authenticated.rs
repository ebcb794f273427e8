//! Authenticated client variant

use std::collections::BTreeSet;
use std::fmt;

use crate::handler::SharedErrorHandler;
use crate::logging::SharedLogger;

/// Client handle for password-derived (or precomputed-token) authentication.
#[derive(Clone)]
pub struct AuthenticatedClient {
    username: String,
    credential: String,
    resources: BTreeSet<String>,
    logger: Option<SharedLogger>,
    error_handlers: Vec<SharedErrorHandler>,
}

impl AuthenticatedClient {
    pub(crate) fn new(
        username: String,
        credential: String,
        resources: BTreeSet<String>,
        logger: Option<SharedLogger>,
        error_handlers: Vec<SharedErrorHandler>,
    ) -> Self {
        Self {
            username,
            credential,
            resources,
            logger,
            error_handlers,
        }
    }

    /// The login identifier.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The credential token submitted in place of a plaintext password.
    pub fn credential(&self) -> &str {
        &self.credential
    }

    /// The subscription resources to register for.
    pub fn resources(&self) -> &BTreeSet<String> {
        &self.resources
    }

    /// The diagnostics sink, if one was configured.
    pub fn logger(&self) -> Option<&SharedLogger> {
        self.logger.as_ref()
    }

    /// The error handlers, in the order they were appended.
    pub fn error_handlers(&self) -> &[SharedErrorHandler] {
        &self.error_handlers
    }
}

impl fmt::Debug for AuthenticatedClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keeps the credential token out of logs
        f.debug_struct("AuthenticatedClient")
            .field("username", &self.username)
            .field("resources", &self.resources)
            .field("error_handlers", &self.error_handlers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_credential() {
        let client = AuthenticatedClient::new(
            "bob".to_string(),
            "UH/1uTq0wZm3G9AcFzDQ5g==".to_string(),
            BTreeSet::new(),
            None,
            Vec::new(),
        );
        let rendered = format!("{:?}", client);
        assert!(rendered.contains("bob"));
        assert!(!rendered.contains("UH/1uTq0wZm3G9AcFzDQ5g=="));
    }
}
