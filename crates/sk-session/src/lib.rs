//! Client-side session: who is signed in, and how that survives a restart.
//!
//! Authentication here is a non-production stand-in. Credentials are
//! compared in plain text against two demo accounts by
//! [`MockCredentialVerifier`], and tokens are timestamp strings with no
//! cryptographic meaning. Real backends plug in through
//! [`CredentialVerifier`] without touching [`SessionStore`].

mod clock;
mod credential_verifier;
mod mock_credential_verifier;
mod session;
mod session_store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use credential_verifier::CredentialVerifier;
pub use mock_credential_verifier::{
    ADMIN_EMAIL, ADMIN_PASSWORD, DEMO_USER_EMAIL, DEMO_USER_PASSWORD, MockCredentialVerifier,
};
pub use session::Session;
pub use session_store::{SessionStore, TOKEN_KEY, USER_KEY};

#[cfg(test)]
mod tests;
