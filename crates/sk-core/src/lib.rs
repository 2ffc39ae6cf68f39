pub mod error;
pub mod forms;
pub mod models;

pub use error::{CoreError, Result};
pub use forms::form_rejection::FormRejection;
pub use forms::login_form::LoginForm;
pub use forms::password_strength::PasswordStrength;
pub use forms::signup_form::SignupForm;
pub use models::identity::Identity;
pub use models::locale::Locale;
pub use models::localized::Localized;
pub use models::role::Role;
pub use models::signup_data::SignupData;

/// Minimum password length accepted by signup and by the demo login fallback.
pub const MIN_PASSWORD_LENGTH: usize = 6;

#[cfg(test)]
mod tests;
