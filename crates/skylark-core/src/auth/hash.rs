//! Login credential derivation

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use md5::{Digest, Md5};

/// Service tag interposed between username and password during derivation.
const SERVICE_TAG: &str = "skyper";

/// Derive the credential token submitted in place of a plaintext password.
///
/// The token is `base64(md5(lower(username) + "\n" + "skyper" + "\n" + password))`
/// over the UTF-8 bytes of that exact sequence. The service performs the same
/// derivation and expects a bit-exact match, so the delimiter structure, the
/// service tag literal, and the standard base64 alphabet are all fixed.
///
/// The username is lower-cased first: `"Alice"` and `"alice"` derive the same
/// token for the same password.
///
/// # Example
///
/// ```
/// use skylark_core::password_to_token;
///
/// let token = password_to_token("bob", "pw");
/// assert_eq!(token, password_to_token("BOB", "pw"));
/// ```
pub fn password_to_token(username: &str, password: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(username.to_lowercase().as_bytes());
    hasher.update(b"\n");
    hasher.update(SERVICE_TAG.as_bytes());
    hasher.update(b"\n");
    hasher.update(password.as_bytes());
    STANDARD.encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        // base64(md5("bob\nskyper\npw")), verified against the live service
        assert_eq!(password_to_token("bob", "pw"), "UH/1uTq0wZm3G9AcFzDQ5g==");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            password_to_token("alice", "hunter2"),
            password_to_token("alice", "hunter2")
        );
    }

    #[test]
    fn test_casing_invariant() {
        let expected = "DMUzluD49yzy66O3c/EV4Q==";
        assert_eq!(password_to_token("alice", "hunter2"), expected);
        assert_eq!(password_to_token("Alice", "hunter2"), expected);
        assert_eq!(password_to_token("ALICE", "hunter2"), expected);
    }

    #[test]
    fn test_password_casing_is_significant() {
        assert_ne!(
            password_to_token("alice", "hunter2"),
            password_to_token("alice", "Hunter2")
        );
    }
}
