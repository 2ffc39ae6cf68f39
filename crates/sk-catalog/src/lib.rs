//! Menu and blog content: loading, filtering, price display.

mod content_source;
mod error;
mod featured;
mod menu_query;
mod post;
mod price;
mod product;
mod product_category;

pub use content_source::ContentSource;
pub use error::{ContentError, Result as ContentResult};
pub use featured::{featured, featured_posts};
pub use menu_query::{CategoryFilter, MenuQuery};
pub use post::Post;
pub use price::format_vnd;
pub use product::Product;
pub use product_category::ProductCategory;

#[cfg(test)]
mod tests;
