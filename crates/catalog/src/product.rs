use serde::{Deserialize, Serialize};

use shopfront_core::Price;

/// Product identifier assigned by the remote catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A catalog product, immutable once fetched.
///
/// This mirrors the remote record: the price travels as a decimal string
/// and the image is a URL. The fetch preserves the service's ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    pub category: String,
    pub description: String,
    pub image: String,
}

/// Display ordering for the landing view: fetched order, reversed.
///
/// The fetch itself never reorders; only the featured listing flips it.
pub fn featured_order(products: &[Product]) -> impl Iterator<Item = &Product> {
    products.iter().rev()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str) -> Product {
        Product {
            id: ProductId(id),
            title: title.to_string(),
            price: "9.99".parse().unwrap(),
            category: "misc".to_string(),
            description: String::new(),
            image: format!("https://example.com/{id}.png"),
        }
    }

    #[test]
    fn deserializes_a_remote_record() {
        let raw = r#"{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": "109.95",
            "category": "men's clothing",
            "description": "Fits 15 inch laptops",
            "image": "https://example.com/1.jpg"
        }"#;

        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.id, ProductId(1));
        assert_eq!(product.title, "Fjallraven Backpack");
        assert_eq!(product.price, "109.95".parse().unwrap());
    }

    #[test]
    fn serializes_price_back_to_a_string() {
        let value = serde_json::to_value(product(3, "Mug")).unwrap();
        assert_eq!(value["price"], serde_json::json!("9.99"));
    }

    #[test]
    fn featured_order_reverses_fetched_order() {
        let products = vec![product(1, "a"), product(2, "b"), product(3, "c")];
        let ids: Vec<u64> = featured_order(&products).map(|p| p.id.0).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn featured_order_leaves_the_source_untouched() {
        let products = vec![product(1, "a"), product(2, "b")];
        let _ = featured_order(&products).count();
        assert_eq!(products[0].id, ProductId(1));
    }
}
