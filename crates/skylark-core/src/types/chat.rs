//! Conversation identifiers

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Prefix every valid conversation id starts with.
pub const CHAT_ID_PREFIX: &str = "19:";

/// A validated conversation identifier.
///
/// Guest clients are scoped to exactly one conversation; the service only
/// accepts ids carrying the `19:` prefix, so construction enforces it up
/// front rather than letting a malformed id reach the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChatId(String);

impl ChatId {
    /// Validate and wrap a conversation id.
    ///
    /// Fails with [`ClientError::InvalidChatId`] when the id does not start
    /// with [`CHAT_ID_PREFIX`].
    pub fn new(id: impl Into<String>) -> ClientResult<Self> {
        let id = id.into();
        if id.starts_with(CHAT_ID_PREFIX) {
            Ok(Self(id))
        } else {
            Err(ClientError::InvalidChatId(id))
        }
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ChatId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ChatId {
    type Error = ClientError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<ChatId> for String {
    fn from(id: ChatId) -> Self {
        id.0
    }
}
