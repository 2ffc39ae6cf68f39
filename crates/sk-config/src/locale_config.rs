use serde::Deserialize;
use sk_core::Locale;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Language used when nothing valid has been saved yet
    pub default: Locale,
}
