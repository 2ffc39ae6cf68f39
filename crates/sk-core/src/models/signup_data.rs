/// Fields accepted by the session store's signup operation.
///
/// Produced by [`crate::SignupForm::validate`], which performs the
/// form-level checks before the store is invoked.
#[derive(Clone, PartialEq, Eq)]
pub struct SignupData {
    pub display_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

// Password stays out of logs.
impl std::fmt::Debug for SignupData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupData")
            .field("display_name", &self.display_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("phone", &self.phone)
            .finish()
    }
}
