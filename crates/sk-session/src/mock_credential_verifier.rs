use crate::{Clock, CredentialVerifier};

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use sk_core::{Identity, MIN_PASSWORD_LENGTH};

pub const ADMIN_EMAIL: &str = "admin@songkoffi.com";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const DEMO_USER_EMAIL: &str = "user@songkoffi.com";
pub const DEMO_USER_PASSWORD: &str = "user123";

const ADMIN_ID: &str = "admin-1";
const ADMIN_NAME: &str = "Admin KOFFI";
const ADMIN_JOINED: NaiveDate = match NaiveDate::from_ymd_opt(2023, 1, 1) {
    Some(date) => date,
    None => panic!("invalid admin join date"),
};
const DEMO_USER_ID: &str = "user-1";
const DEMO_USER_NAME: &str = "Coffee Lover";

/// Insecure demo verifier. NOT for production.
///
/// Resolution order:
/// 1. the admin demo account
/// 2. the user demo account (joined today)
/// 3. any email containing `@` with a password of 6+ characters, which
///    becomes a fresh standard account named after the email's local part
/// 4. rejected
///
/// Comparisons are exact and case-sensitive.
pub struct MockCredentialVerifier {
    clock: Arc<dyn Clock>,
}

impl MockCredentialVerifier {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

#[async_trait]
impl CredentialVerifier for MockCredentialVerifier {
    async fn verify(&self, email: &str, password: &str) -> Option<Identity> {
        if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
            return Some(Identity::administrator(
                ADMIN_ID,
                ADMIN_NAME,
                ADMIN_EMAIL,
                ADMIN_JOINED,
            ));
        }

        if email == DEMO_USER_EMAIL && password == DEMO_USER_PASSWORD {
            return Some(Identity::standard(
                DEMO_USER_ID,
                DEMO_USER_NAME,
                DEMO_USER_EMAIL,
                None,
                self.clock.today(),
            ));
        }

        if let Some((local_part, _)) = email.split_once('@')
            && password.chars().count() >= MIN_PASSWORD_LENGTH
        {
            return Some(Identity::standard(
                format!("user-{}", self.clock.now_millis()),
                local_part,
                email,
                None,
                self.clock.today(),
            ));
        }

        None
    }
}
