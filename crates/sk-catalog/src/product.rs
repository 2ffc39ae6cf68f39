use crate::ProductCategory;

use serde::{Deserialize, Serialize};
use sk_core::Localized;

/// A menu item. Prices are whole Vietnamese đồng.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: Localized<String>,
    pub description: Localized<String>,
    pub price: u64,
    pub category: ProductCategory,
    #[serde(default)]
    pub featured: bool,
    pub image: String,
}
