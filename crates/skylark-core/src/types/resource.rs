//! Subscription resources
//!
//! A resource is a path string identifying a category of server-pushed
//! updates a client wishes to receive. The literals below are part of the
//! protocol surface and must match the service exactly.

/// All conversation properties.
pub const RESOURCE_CONVERSATION_PROPERTIES: &str = "/v1/users/ME/conversations/ALL/properties";

/// All conversation messages.
pub const RESOURCE_CONVERSATION_MESSAGES: &str = "/v1/users/ME/conversations/ALL/messages";

/// All contacts.
pub const RESOURCE_CONTACTS: &str = "/v1/users/ME/contacts/ALL";

/// All threads.
pub const RESOURCE_THREADS: &str = "/v1/threads/ALL";

/// The well-known bundle subscribing to every known resource category.
pub const ALL_RESOURCES: [&str; 4] = [
    RESOURCE_CONVERSATION_PROPERTIES,
    RESOURCE_CONVERSATION_MESSAGES,
    RESOURCE_CONTACTS,
    RESOURCE_THREADS,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_literals() {
        // Protocol compatibility: these strings are fixed by the service
        assert_eq!(
            ALL_RESOURCES,
            [
                "/v1/users/ME/conversations/ALL/properties",
                "/v1/users/ME/conversations/ALL/messages",
                "/v1/users/ME/contacts/ALL",
                "/v1/threads/ALL",
            ]
        );
    }
}
