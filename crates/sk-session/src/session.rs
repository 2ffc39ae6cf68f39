use sk_core::Identity;

/// Snapshot of the authentication state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub(crate) identity: Option<Identity>,
    pub(crate) is_loading: bool,
}

impl Session {
    /// State before the persisted session has been restored.
    pub(crate) fn starting() -> Self {
        Self {
            identity: None,
            is_loading: true,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn is_administrator(&self) -> bool {
        self.identity
            .as_ref()
            .is_some_and(Identity::is_administrator)
    }

    /// True while restoring, logging in or signing up.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }
}
