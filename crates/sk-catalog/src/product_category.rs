use crate::{ContentError, ContentResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Espresso,
    ColdBrew,
    Signature,
    Pastry,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 4] = [
        ProductCategory::Espresso,
        ProductCategory::ColdBrew,
        ProductCategory::Signature,
        ProductCategory::Pastry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Espresso => "espresso",
            Self::ColdBrew => "coldbrew",
            Self::Signature => "signature",
            Self::Pastry => "pastry",
        }
    }

    /// Key of the category label in the translation table.
    pub fn translation_key(&self) -> String {
        format!("menu.categories.{}", self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = ContentError;

    #[track_caller]
    fn from_str(s: &str) -> ContentResult<Self> {
        match s {
            "espresso" => Ok(Self::Espresso),
            "coldbrew" => Ok(Self::ColdBrew),
            "signature" => Ok(Self::Signature),
            "pastry" => Ok(Self::Pastry),
            _ => Err(ContentError::unknown_category(s)),
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
