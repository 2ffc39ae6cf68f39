use crate::{ContentError, ContentResult, Post, Product};

use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::de::DeserializeOwned;

/// JSON files backing the menu and blog pages.
#[derive(Debug, Clone)]
pub struct ContentSource {
    products_path: PathBuf,
    posts_path: PathBuf,
}

impl ContentSource {
    pub fn new(products_path: impl Into<PathBuf>, posts_path: impl Into<PathBuf>) -> Self {
        Self {
            products_path: products_path.into(),
            posts_path: posts_path.into(),
        }
    }

    pub fn load_products(&self) -> ContentResult<Vec<Product>> {
        Self::load_json(&self.products_path)
    }

    pub fn load_posts(&self) -> ContentResult<Vec<Post>> {
        Self::load_json(&self.posts_path)
    }

    /// Like [`ContentSource::load_products`], but a failure is logged and
    /// `fallback` returned instead.
    pub fn load_products_or(&self, fallback: Vec<Product>) -> Vec<Product> {
        self.load_products().unwrap_or_else(|e| {
            warn!("Using fallback products: {e}");
            fallback
        })
    }

    pub fn load_posts_or(&self, fallback: Vec<Post>) -> Vec<Post> {
        self.load_posts().unwrap_or_else(|e| {
            warn!("Using fallback posts: {e}");
            fallback
        })
    }

    pub fn products_path(&self) -> &Path {
        &self.products_path
    }

    pub fn posts_path(&self) -> &Path {
        &self.posts_path
    }

    fn load_json<T: DeserializeOwned>(path: &Path) -> ContentResult<Vec<T>> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ContentError::read(path.to_path_buf(), e))?;

        let items: Vec<T> = serde_json::from_str(&contents)
            .map_err(|e| ContentError::parse(path.to_path_buf(), e))?;

        debug!("Loaded {} entries from {}", items.len(), path.display());
        Ok(items)
    }
}
