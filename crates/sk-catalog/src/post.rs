use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sk_core::Localized;

/// A blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: Localized<String>,
    pub excerpt: Localized<String>,
    pub image: String,
    pub date: NaiveDate,
    pub author: Localized<String>,
    #[serde(default)]
    pub featured: bool,
}
