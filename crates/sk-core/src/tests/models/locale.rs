use crate::Locale;

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err};

#[test]
fn test_locale_default_is_vietnamese() {
    assert_eq!(Locale::default(), Locale::Vi);
}

#[test]
fn test_locale_from_str() {
    assert_eq!(Locale::from_str("vi").unwrap(), Locale::Vi);
    assert_eq!(Locale::from_str("en").unwrap(), Locale::En);
}

#[test]
fn given_unknown_or_differently_cased_value_when_parse_then_error() {
    assert_that!(Locale::from_str("EN"), err(anything()));
    assert_that!(Locale::from_str("fr"), err(anything()));
    assert_that!(Locale::from_str(""), err(anything()));
}

#[test]
fn given_locale_when_toggled_twice_then_returns_original() {
    for locale in Locale::ALL {
        assert_that!(locale.toggled().toggled(), eq(locale));
        assert_ne!(locale.toggled(), locale);
    }
}

#[test]
fn test_locale_display_matches_storage_value() {
    assert_eq!(Locale::Vi.to_string(), "vi");
    assert_eq!(Locale::En.to_string(), "en");
}
