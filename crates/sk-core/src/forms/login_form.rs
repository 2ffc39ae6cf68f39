use crate::FormRejection;

/// Raw values of the sign-in form.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), FormRejection> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(FormRejection::MissingFields);
        }
        Ok(())
    }
}
