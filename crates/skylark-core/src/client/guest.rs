//! Guest client variant

use std::collections::BTreeSet;
use std::fmt;

use crate::handler::SharedErrorHandler;
use crate::logging::SharedLogger;
use crate::types::ChatId;

/// Client handle for anonymous access scoped to a single conversation.
#[derive(Clone)]
pub struct GuestClient {
    username: String,
    chat: ChatId,
    resources: BTreeSet<String>,
    logger: Option<SharedLogger>,
    error_handlers: Vec<SharedErrorHandler>,
}

impl GuestClient {
    pub(crate) fn new(
        username: String,
        chat: ChatId,
        resources: BTreeSet<String>,
        logger: Option<SharedLogger>,
        error_handlers: Vec<SharedErrorHandler>,
    ) -> Self {
        Self {
            username,
            chat,
            resources,
            logger,
            error_handlers,
        }
    }

    /// The guest display name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The single conversation this guest is scoped to.
    pub fn chat(&self) -> &ChatId {
        &self.chat
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

impl fmt::Debug for GuestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuestClient")
            .field("username", &self.username)
            .field("chat", &self.chat)
            .field("resources", &self.resources)
            .field("error_handlers", &self.error_handlers.len())
            .finish_non_exhaustive()
    }
}
