use crate::{FormRejection, MIN_PASSWORD_LENGTH, SignupData};

/// Raw values of the registration form.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Checks required fields, the confirmation and the password length,
    /// in that order, and yields the data handed to the session store.
    ///
    /// An empty phone field is treated as "not provided".
    pub fn validate(&self) -> Result<SignupData, FormRejection> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(FormRejection::MissingRequiredFields);
        }

        if self.password != self.confirm_password {
            return Err(FormRejection::PasswordMismatch);
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(FormRejection::PasswordTooShort);
        }

        let phone = if self.phone.is_empty() {
            None
        } else {
            Some(self.phone.clone())
        };

        Ok(SignupData {
            display_name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            phone,
        })
    }
}
