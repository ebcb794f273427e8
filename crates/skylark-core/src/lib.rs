//! Skylark Core
//!
//! Runtime-agnostic configuration resolution for a chat-service client.
//! This crate decides which authentication mode and which conversational
//! scope a client will operate under, and derives the login credential from
//! a username/password pair. The network protocol behind the resulting
//! client handles lives elsewhere.
//!
//! ## Building a client
//!
//! ```
//! use skylark_core::{ClientBuilder, Client, Credential};
//!
//! let client = ClientBuilder::new("alice")
//!     .with_all_resources()
//!     .build(Credential::Password("hunter2".into()))?;
//!
//! assert!(matches!(client, Client::Authenticated(_)));
//! # Ok::<(), skylark_core::ClientError>(())
//! ```
//!
//! Guest access is scoped to a single conversation instead of a credential:
//!
//! ```
//! use skylark_core::{ClientBuilder, Client, Credential};
//!
//! let client = ClientBuilder::new("visitor")
//!     .with_all_resources()
//!     .with_chat("19:room@thread.skype")?
//!     .build(Credential::None)?;
//!
//! assert!(matches!(client, Client::Guest(_)));
//! # Ok::<(), skylark_core::ClientError>(())
//! ```

pub mod auth;
pub mod builder;
pub mod client;
pub mod error;
pub mod handler;
pub mod logging;
pub mod types;

// Re-export the public surface
pub use auth::{password_to_token, Credential};
pub use builder::ClientBuilder;
pub use client::{AuthenticatedClient, Client, GuestClient};
pub use error::{ClientError, ClientResult};
pub use handler::{ErrorHandler, SharedErrorHandler};
pub use logging::{ConsoleLogger, Logger, NoOpLogger, SharedLogger};
pub use types::{ChatId, ALL_RESOURCES, CHAT_ID_PREFIX};
