pub mod identity;
pub mod locale;
pub mod localized;
pub mod role;
pub mod signup_data;
