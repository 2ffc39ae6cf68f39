use crate::{Clock, CredentialVerifier, Session};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use sk_core::{Identity, SignupData};
use sk_storage::KeyValueStore;
use tokio::sync::watch;

/// Storage key of the JSON-serialized identity.
pub const USER_KEY: &str = "song-koffi-user";
/// Storage key of the opaque session token.
pub const TOKEN_KEY: &str = "song-koffi-token";

const TOKEN_PREFIX: &str = "mock-jwt-token-";

/// Owns the authentication lifecycle and its persistence.
///
/// Construct once at startup, call [`SessionStore::restore`], then share by
/// reference. Operations never return errors: rejected credentials come back
/// as `false`, storage problems are logged and the in-memory session still
/// transitions.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    verifier: Arc<dyn CredentialVerifier>,
    clock: Arc<dyn Clock>,
    latency: Duration,
    state_tx: watch::Sender<Session>,
}

impl SessionStore {
    /// `latency` is the artificial round trip applied to login and signup.
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        verifier: Arc<dyn CredentialVerifier>,
        clock: Arc<dyn Clock>,
        latency: Duration,
    ) -> Self {
        let (state_tx, _) = watch::channel(Session::starting());

        Self {
            storage,
            verifier,
            clock,
            latency,
            state_tx,
        }
    }

    /// Receiver notified on every state change, including `is_loading` flips.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state_tx.subscribe()
    }

    pub fn session(&self) -> Session {
        self.state_tx.borrow().clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state_tx.borrow().identity.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state_tx.borrow().is_authenticated()
    }

    pub fn is_administrator(&self) -> bool {
        self.state_tx.borrow().is_administrator()
    }

    pub fn is_loading(&self) -> bool {
        self.state_tx.borrow().is_loading
    }

    /// The persisted session token, if any.
    pub fn token(&self) -> Option<String> {
        self.read(TOKEN_KEY)
    }

    /// Restores a previously persisted session. Call once at startup.
    ///
    /// Both the identity record and the token must be present and non-empty.
    /// A record that fails to parse is discarded together with the token and
    /// the session is signed out. When nothing is persisted the in-memory
    /// identity is left as it is.
    pub fn restore(&self) {
        let stored_user = self.read(USER_KEY);
        let stored_token = self.read(TOKEN_KEY);

        let outcome = match (stored_user, stored_token) {
            (Some(user), Some(_)) => match serde_json::from_str::<Identity>(&user) {
                Ok(identity) => {
                    info!("Restored session for {} ({})", identity.id, identity.role);
                    RestoreOutcome::Restored(identity)
                }
                Err(e) => {
                    warn!("Discarding corrupted session record: {e}");
                    self.clear_persisted();
                    RestoreOutcome::Corrupt
                }
            },
            _ => {
                debug!("No persisted session");
                RestoreOutcome::Absent
            }
        };

        self.state_tx.send_modify(|state| {
            match outcome {
                RestoreOutcome::Restored(identity) => state.identity = Some(identity),
                RestoreOutcome::Corrupt => state.identity = None,
                RestoreOutcome::Absent => {}
            }
            state.is_loading = false;
        });
    }

    /// Signs in. Returns `false` when the verifier rejects the credentials.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        self.set_loading(true);
        tokio::time::sleep(self.latency).await;

        match self.verifier.verify(email, password).await {
            Some(identity) => {
                info!("Login succeeded for {} ({})", identity.id, identity.role);
                self.establish(identity);
                true
            }
            None => {
                info!("Login rejected for {email}");
                self.set_loading(false);
                false
            }
        }
    }

    /// Creates a standard account from already-validated form data and
    /// signs it in. Always succeeds; no duplicate check is made.
    pub async fn signup(&self, data: SignupData) -> bool {
        self.set_loading(true);
        tokio::time::sleep(self.latency).await;

        let identity = Identity::standard(
            format!("user-{}", self.clock.now_millis()),
            data.display_name,
            data.email,
            data.phone,
            self.clock.today(),
        );

        info!("Signed up {}", identity.id);
        self.establish(identity);
        true
    }

    /// Forgets the persisted session and signs out.
    pub fn logout(&self) {
        self.clear_persisted();
        self.state_tx.send_modify(|state| {
            state.identity = None;
        });
        info!("Logged out");
    }

    /// Persists identity + a fresh token and publishes the authenticated state.
    fn establish(&self, identity: Identity) {
        let token = format!("{TOKEN_PREFIX}{}", self.clock.now_millis());

        match serde_json::to_string(&identity) {
            Ok(json) => {
                self.write(USER_KEY, &json);
                self.write(TOKEN_KEY, &token);
            }
            Err(e) => warn!("Failed to serialize identity {}: {e}", identity.id),
        }

        self.state_tx.send_modify(|state| {
            state.identity = Some(identity);
            state.is_loading = false;
        });
    }

    fn set_loading(&self, is_loading: bool) {
        self.state_tx.send_modify(|state| state.is_loading = is_loading);
    }

    fn clear_persisted(&self) {
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(e) = self.storage.remove(key) {
                e.report("remove", key);
            }
        }
    }

    /// Empty values count as absent.
    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                e.report("read", key);
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            e.report("persist", key);
        }
    }
}

enum RestoreOutcome {
    Restored(Identity),
    Corrupt,
    Absent,
}
