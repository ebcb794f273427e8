//! Client handles produced by the resolver
//!
//! The resolver is the only gate: these constructors validate nothing
//! further about their inputs. The handles carry everything the network
//! layer needs to open a session; the long-poll/HTTP protocol itself lives
//! behind them and is not part of this crate.

mod authenticated;
mod guest;

use std::collections::BTreeSet;

pub use authenticated::AuthenticatedClient;
pub use guest::GuestClient;

use crate::handler::SharedErrorHandler;
use crate::logging::SharedLogger;

/// A fully-specified client handle, one of the two construction paths.
///
/// The set is closed: a credential token selects [`AuthenticatedClient`],
/// an anonymous single-conversation scope selects [`GuestClient`], and the
/// resolver picks exactly one at build time.
#[derive(Clone, Debug)]
pub enum Client {
    /// Full access, authenticated with a password-derived (or precomputed) token
    Authenticated(AuthenticatedClient),
    /// Anonymous access scoped to a single conversation
    Guest(GuestClient),
}

impl Client {
    /// The login identifier this client was configured with.
    pub fn username(&self) -> &str {
        match self {
            Client::Authenticated(c) => c.username(),
            Client::Guest(c) => c.username(),
        }
    }

    /// The subscription resources this client will register for.
    pub fn resources(&self) -> &BTreeSet<String> {
        match self {
            Client::Authenticated(c) => c.resources(),
            Client::Guest(c) => c.resources(),
        }
    }

    /// The diagnostics sink, if one was configured.
    pub fn logger(&self) -> Option<&SharedLogger> {
        match self {
            Client::Authenticated(c) => c.logger(),
            Client::Guest(c) => c.logger(),
        }
    }

    /// The error handlers, in the order they were appended.
    pub fn error_handlers(&self) -> &[SharedErrorHandler] {
        match self {
            Client::Authenticated(c) => c.error_handlers(),
            Client::Guest(c) => c.error_handlers(),
        }
    }
}
