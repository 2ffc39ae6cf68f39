use crate::{Post, Product};

/// Products highlighted on the home page, in their original order.
pub fn featured(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.featured).collect()
}

pub fn featured_posts(posts: &[Post]) -> Vec<&Post> {
    posts.iter().filter(|p| p.featured).collect()
}
