//! Authentication credentials and their derivation

mod credential;
mod hash;

pub use credential::Credential;
pub use hash::password_to_token;
