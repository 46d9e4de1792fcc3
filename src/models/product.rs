use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference data embedded by value into every product. Two products in the
/// same category each own their own copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl Category {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    /// Price stored as integer cents (e.g. 120050 = 1200.50), emitted as `price`.
    #[serde(rename = "price", with = "cents")]
    pub price_cents: i64,
    pub stock: u32,
    pub category: Category,
}

/// Response envelope for `GET /api/productlist`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub total_count: usize,
    pub timestamp: DateTime<Utc>,
}

impl ProductListResponse {
    /// Wraps `products` in place, deriving the count and stamping the current
    /// UTC time.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            total_count: products.len(),
            products,
            timestamp: Utc::now(),
        }
    }
}

/// Serde adapter between integer cents and a JSON number with two fraction
/// digits of meaning.
mod cents {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(cents: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(*cents as f64 / 100.0)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() {
            return Err(D::Error::custom("price must be a finite number"));
        }
        Ok((amount * 100.0).round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mouse() -> Product {
        Product {
            id: 3,
            name: "Mouse".to_string(),
            price_cents: 2599,
            stock: 75,
            category: Category::new(102, "Accessories"),
        }
    }

    #[test]
    fn product_serializes_with_price_field() {
        let value = serde_json::to_value(mouse()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "name": "Mouse",
                "price": 25.99,
                "stock": 75,
                "category": { "id": 102, "name": "Accessories" },
            })
        );
        assert!(value.get("price_cents").is_none());
    }

    #[test]
    fn price_keeps_cents_exact() {
        let mut p = mouse();
        p.price_cents = 120050;
        let text = serde_json::to_string(&p).unwrap();
        assert!(text.contains("\"price\":1200.5"), "got {}", text);
        let back: Product = serde_json::from_str(&text).unwrap();
        assert_eq!(back.price_cents, 120050);
    }

    #[test]
    fn price_parses_trailing_zero_literal() {
        let p: Product = serde_json::from_value(json!({
            "id": 2,
            "name": "Headphones",
            "price": 50.00,
            "stock": 100,
            "category": { "id": 102, "name": "Accessories" },
        }))
        .unwrap();
        assert_eq!(p.price_cents, 5000);
    }

    #[test]
    fn negative_stock_is_rejected() {
        let result: Result<Product, _> = serde_json::from_value(json!({
            "id": 9,
            "name": "Broken",
            "price": 1.0,
            "stock": -1,
            "category": { "id": 1, "name": "X" },
        }));
        assert!(result.is_err());
    }

    #[test]
    fn envelope_counts_products_and_uses_camel_case() {
        let resp = ProductListResponse::new(vec![mouse(), mouse()]);
        assert_eq!(resp.total_count, 2);

        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["totalCount"], 2);
        assert!(value.get("total_count").is_none());
        assert_eq!(value["products"].as_array().unwrap().len(), 2);
        assert!(value["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn empty_envelope_has_zero_count() {
        let resp = ProductListResponse::new(Vec::new());
        assert_eq!(resp.total_count, 0);
        assert!(resp.products.is_empty());
    }

    #[test]
    fn envelope_timestamp_is_fresh_per_construction() {
        let before = Utc::now();
        let first = ProductListResponse::new(vec![mouse()]);
        let second = ProductListResponse::new(vec![mouse()]);
        let after = Utc::now();
        assert!(first.timestamp >= before);
        assert!(second.timestamp >= first.timestamp);
        assert!(second.timestamp <= after);
    }

    #[test]
    fn embedded_categories_are_independent_copies() {
        let a = mouse();
        let mut b = mouse();
        b.category.name = "Peripherals".to_string();
        assert_eq!(a.category.name, "Accessories");
        assert_ne!(a.category, b.category);
    }
}
