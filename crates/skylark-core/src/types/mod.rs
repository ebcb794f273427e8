//! Core types shared across the crate

mod chat;
mod resource;

pub use chat::{ChatId, CHAT_ID_PREFIX};
pub use resource::{
    ALL_RESOURCES, RESOURCE_CONTACTS, RESOURCE_CONVERSATION_MESSAGES,
    RESOURCE_CONVERSATION_PROPERTIES, RESOURCE_THREADS,
};
