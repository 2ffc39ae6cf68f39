use crate::{ContentError, ContentResult, Product, ProductCategory};

use std::str::FromStr;

use sk_core::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProductCategory),
}

impl CategoryFilter {
    pub fn admits(&self, category: ProductCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ContentError;

    #[track_caller]
    fn from_str(s: &str) -> ContentResult<Self> {
        match s {
            "all" => Ok(Self::All),
            other => other.parse().map(Self::Only),
        }
    }
}

/// Menu page filter: category buttons plus the search box.
#[derive(Debug, Clone, Default)]
pub struct MenuQuery {
    pub category: CategoryFilter,
    pub search: String,
}

impl MenuQuery {
    pub fn new(category: CategoryFilter, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }

    /// Search matches name or description in `locale`, ignoring case.
    pub fn matches(&self, product: &Product, locale: Locale) -> bool {
        if !self.category.admits(product.category) {
            return false;
        }

        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        product.name.get(locale).to_lowercase().contains(&needle)
            || product.description.get(locale).to_lowercase().contains(&needle)
    }

    pub fn apply<'a>(&self, products: &'a [Product], locale: Locale) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|p| self.matches(p, locale))
            .collect()
    }
}
