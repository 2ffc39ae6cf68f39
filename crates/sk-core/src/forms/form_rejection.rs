use crate::Locale;

use thiserror::Error;

/// Reasons a login or signup form is refused, with the messages shown to
/// the visitor.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRejection {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please fill in all required fields")]
    MissingRequiredFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Something went wrong, please try again")]
    SignupFailed,
}

impl FormRejection {
    pub fn message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::MissingFields, Locale::Vi) => "Vui lòng điền đầy đủ thông tin",
            (Self::MissingFields, Locale::En) => "Please fill in all fields",
            (Self::MissingRequiredFields, Locale::Vi) => "Vui lòng điền đầy đủ thông tin bắt buộc",
            (Self::MissingRequiredFields, Locale::En) => "Please fill in all required fields",
            (Self::PasswordMismatch, Locale::Vi) => "Mật khẩu xác nhận không khớp",
            (Self::PasswordMismatch, Locale::En) => "Passwords do not match",
            (Self::PasswordTooShort, Locale::Vi) => "Mật khẩu phải có ít nhất 6 ký tự",
            (Self::PasswordTooShort, Locale::En) => "Password must be at least 6 characters",
            (Self::InvalidCredentials, Locale::Vi) => "Email hoặc mật khẩu không đúng",
            (Self::InvalidCredentials, Locale::En) => "Invalid email or password",
            (Self::SignupFailed, Locale::Vi) => "Có lỗi xảy ra, vui lòng thử lại",
            (Self::SignupFailed, Locale::En) => "Something went wrong, please try again",
        }
    }
}
