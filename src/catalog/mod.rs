use crate::models::{Category, Product};

const ELECTRONICS: (i32, &str) = (101, "Electronics");
const ACCESSORIES: (i32, &str) = (102, "Accessories");

/// (id, name, price in cents, stock, category)
static PRODUCTS: &[(i32, &str, i64, u32, (i32, &str))] = &[
    (1, "Laptop", 120_050, 25, ELECTRONICS),
    (2, "Headphones", 5_000, 100, ACCESSORIES),
    (3, "Mouse", 2_599, 75, ACCESSORIES),
    (4, "Keyboard", 8_999, 45, ACCESSORIES),
    (5, "Monitor", 29_999, 30, ELECTRONICS),
];

/// Build the fixed product list in definition order.
///
/// A fresh `Vec` is returned on every call and every product gets its own
/// `Category` value, so callers never share state.
pub fn products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|&(id, name, price_cents, stock, (cat_id, cat_name))| Product {
            id,
            name: name.to_string(),
            price_cents,
            stock,
            category: Category::new(cat_id, cat_name),
        })
        .collect()
}
