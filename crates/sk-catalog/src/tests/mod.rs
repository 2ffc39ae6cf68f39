
use crate::{Product, ProductCategory};

use sk_core::Localized;

pub(crate) fn product(
    id: &str,
    name: (&str, &str),
    description: (&str, &str),
    category: ProductCategory,
    featured: bool,
) -> Product {
    Product {
        id: id.to_string(),
        name: Localized::from_strs(name.0, name.1),
        description: Localized::from_strs(description.0, description.1),
        price: 45_000,
        category,
        featured,
        image: format!("https://images.example.com/{id}.jpg"),
    }
}

pub(crate) fn sample_menu() -> Vec<Product> {
    vec![
        product(
            "esp-classic",
            ("Espresso Cổ Điển", "Classic Espresso"),
            ("Hương vị đậm đà", "Rich, pure essence of Arabica coffee"),
            ProductCategory::Espresso,
            true,
        ),
        product(
            "latte-vanilla",
            ("Latte Vani", "Vanilla Latte"),
            ("Latte thơm ngọt với syrup vani", "Sweet latte with natural vanilla syrup"),
            ProductCategory::Espresso,
            false,
        ),
        product(
            "cb-orange",
            ("Cold Brew Cam Tươi", "Orange Cold Brew"),
            ("Cold brew kết hợp với cam tươi", "Cold brew combined with fresh orange"),
            ProductCategory::ColdBrew,
            false,
        ),
        product(
            "croissant",
            ("Bánh Sừng Bò", "Croissant"),
            ("Bánh sừng bò bơ tươi", "Fresh butter croissant"),
            ProductCategory::Pastry,
            true,
        ),
    ]
}

pub(crate) fn ids<'a>(products: &[&'a Product]) -> Vec<&'a str> {
    products.iter().map(|p| p.id.as_str()).collect()
}
