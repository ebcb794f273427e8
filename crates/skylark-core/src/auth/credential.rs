//! Credential input for the terminal build call

use super::hash::password_to_token;

/// How the caller supplies (or omits) an authentication credential.
///
/// `Token` carries an already-derived credential and is used verbatim, with
/// no revalidation. That is deliberate: a caller reusing a cached session
/// hands its token straight back without the resolver re-deriving anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// No credential; selects guest access scoped to one conversation.
    None,
    /// A raw password, derived into a token during build.
    Password(String),
    /// A precomputed credential token, submitted as-is.
    Token(String),
}

impl Credential {
    /// Resolve to the token submitted at login, deriving one when a raw
    /// password was supplied.
    pub(crate) fn into_token(self, username: &str) -> Option<String> {
        match self {
            Credential::None => None,
            Credential::Password(password) => Some(password_to_token(username, &password)),
            Credential::Token(token) => Some(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_yields_no_token() {
        assert_eq!(Credential::None.into_token("bob"), None);
    }

    #[test]
    fn test_password_derives() {
        let token = Credential::Password("pw".to_string()).into_token("bob");
        assert_eq!(token.as_deref(), Some("UH/1uTq0wZm3G9AcFzDQ5g=="));
    }

    #[test]
    fn test_token_passes_through_unchanged() {
        let token = Credential::Token("not-even-base64".to_string()).into_token("bob");
        assert_eq!(token.as_deref(), Some("not-even-base64"));
    }
}
