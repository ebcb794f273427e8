//! Client configuration resolution
//!
//! [`ClientBuilder`] is the last gate before a network client exists. It
//! accumulates subscription resources, an optional diagnostics sink, error
//! handlers, and an optional single-conversation scope, then validates the
//! combination once and constructs exactly one of the two client variants:
//!
//! - a credential (password-derived or precomputed) selects the
//!   authenticated variant
//! - otherwise a conversation scope selects the guest variant
//! - otherwise the build fails
//!
//! All validation happens here, synchronously. No I/O, no retries, no
//! internal logging.

use std::collections::BTreeSet;
use std::fmt;

use crate::auth::Credential;
use crate::client::{AuthenticatedClient, Client, GuestClient};
use crate::error::{ClientError, ClientResult};
use crate::handler::SharedErrorHandler;
use crate::logging::SharedLogger;
use crate::types::{ChatId, ALL_RESOURCES};

/// Builder for a chat-service client.
///
/// Mutators may be called in any order, any number of times: resources
/// accumulate (duplicates collapse), the sink and scope overwrite prior
/// values, handlers append. The builder is consumed exactly once by
/// [`build`](ClientBuilder::build) or one of its wrappers.
///
/// # Example
///
/// ```
/// use skylark_core::{ClientBuilder, Credential};
///
/// let client = ClientBuilder::new("alice")
///     .with_all_resources()
///     .build(Credential::Password("hunter2".into()))?;
/// assert_eq!(client.username(), "alice");
/// # Ok::<(), skylark_core::ClientError>(())
/// ```
pub struct ClientBuilder {
    username: String,
    resources: BTreeSet<String>,
    logger: Option<SharedLogger>,
    error_handlers: Vec<SharedErrorHandler>,
    chat: Option<ChatId>,
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("username", &self.username)
            .field("resources", &self.resources)
            .field("error_handlers", &self.error_handlers.len())
            .field("chat", &self.chat)
            .finish_non_exhaustive()
    }
}

impl ClientBuilder {
    /// Start configuring a client for the given username.
    ///
    /// For guest access the username can be anything; for authenticated
    /// access it is the login identifier and feeds credential derivation.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            resources: BTreeSet::new(),
            logger: None,
            error_handlers: Vec::new(),
            chat: None,
        }
    }

    /// Subscribe to the well-known bundle of all resource categories.
    pub fn with_all_resources(mut self) -> Self {
        self.resources
            .extend(ALL_RESOURCES.iter().map(|r| (*r).to_string()));
        self
    }

    /// Subscribe to a single resource by its path string.
    ///
    /// Useful for resources the service pushes but this crate has no
    /// constant for yet.
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resources.insert(resource.into());
        self
    }

    /// Set the diagnostics sink the built client will log to.
    ///
    /// Overwrites any previously configured sink. The resolver never logs
    /// through it; it is passed to the client unmodified.
    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Append an error handler for the built client to dispatch to.
    pub fn with_error_handler(mut self, handler: SharedErrorHandler) -> Self {
        self.error_handlers.push(handler);
        self
    }

    /// Scope the client to a single conversation for guest access.
    ///
    /// Fails immediately with [`ClientError::InvalidChatId`] if the id does
    /// not start with the `19:` conversation prefix; a malformed id never
    /// survives to build time. Has no effect on the outcome if a credential
    /// is later supplied to `build`.
    pub fn with_chat(mut self, id: impl Into<String>) -> ClientResult<Self> {
        self.chat = Some(ChatId::new(id)?);
        Ok(self)
    }

    /// Resolve the accumulated configuration into a client handle.
    ///
    /// A raw password is first derived into a credential token (see
    /// [`password_to_token`](crate::password_to_token)); a precomputed token
    /// is trusted as-is. Then:
    ///
    /// 1. fails with [`ClientError::NoResources`] if no resources were added
    /// 2. a token selects [`Client::Authenticated`]
    /// 3. otherwise a conversation scope selects [`Client::Guest`]
    /// 4. otherwise fails with [`ClientError::NoChatSpecified`]
    pub fn build(self, credential: Credential) -> ClientResult<Client> {
        let token = credential.into_token(&self.username);
        if self.resources.is_empty() {
            return Err(ClientError::NoResources);
        }
        if let Some(token) = token {
            Ok(Client::Authenticated(AuthenticatedClient::new(
                self.username,
                token,
                self.resources,
                self.logger,
                self.error_handlers,
            )))
        } else if let Some(chat) = self.chat {
            Ok(Client::Guest(GuestClient::new(
                self.username,
                chat,
                self.resources,
                self.logger,
                self.error_handlers,
            )))
        } else {
            Err(ClientError::NoChatSpecified)
        }
    }

    /// Build with an optional raw password.
    ///
    /// `Some` derives a credential and takes the authenticated path; `None`
    /// falls through to guest dispatch.
    pub fn build_with_password(self, password: Option<&str>) -> ClientResult<Client> {
        match password {
            Some(password) => self.build(Credential::Password(password.to_string())),
            None => self.build(Credential::None),
        }
    }

    /// Build with a precomputed credential token, skipping derivation.
    pub fn build_with_token(self, token: impl Into<String>) -> ClientResult<Client> {
        self.build(Credential::Token(token.into()))
    }
}
