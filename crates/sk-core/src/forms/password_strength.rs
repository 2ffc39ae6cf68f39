use crate::Locale;

/// Strength hint shown under the signup password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    /// One point each for: 8+ characters, an uppercase letter, a lowercase
    /// letter, a digit, and any other character. Range 0..=5.
    pub fn score(password: &str) -> u8 {
        let mut score = 0;
        if password.chars().count() >= 8 {
            score += 1;
        }
        if password.chars().any(|c| c.is_ascii_uppercase()) {
            score += 1;
        }
        if password.chars().any(|c| c.is_ascii_lowercase()) {
            score += 1;
        }
        if password.chars().any(|c| c.is_ascii_digit()) {
            score += 1;
        }
        if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
            score += 1;
        }
        score
    }

    pub fn of(password: &str) -> Self {
        match Self::score(password) {
            0 | 1 => Self::Weak,
            2 => Self::Fair,
            3 => Self::Good,
            _ => Self::Strong,
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Weak, Locale::Vi) => "Yếu",
            (Self::Weak, Locale::En) => "Weak",
            (Self::Fair, Locale::Vi) => "Trung bình",
            (Self::Fair, Locale::En) => "Fair",
            (Self::Good, Locale::Vi) => "Tốt",
            (Self::Good, Locale::En) => "Good",
            (Self::Strong, Locale::Vi) => "Rất tốt",
            (Self::Strong, Locale::En) => "Strong",
        }
    }
}
