//! Form-level validation that runs before the session store is invoked.

pub mod form_rejection;
pub mod login_form;
pub mod password_strength;
pub mod signup_form;
