//! Product entry from the external catalog and its derived pricing
//!
//! The upstream schema is not ours, so every field defaults when absent,
//! null, or of an unusable type. Numbers also accept numeric strings; counts
//! below zero read as 0.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::format::format_usd;

/// Catalog entry as served by the upstream API
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    #[serde(deserialize_with = "lenient_count")]
    pub id: u64,
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(deserialize_with = "lenient_number")]
    pub price: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub discount_percentage: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub rating: f64,
    #[serde(deserialize_with = "lenient_count")]
    pub stock: u64,
    #[serde(deserialize_with = "lenient_text")]
    pub brand: String,
    #[serde(deserialize_with = "lenient_text")]
    pub thumbnail: String,
    #[serde(deserialize_with = "lenient_text")]
    pub availability_status: String,
}

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(number_of(&value).unwrap_or(0.0))
}

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    if let Some(n) = value.as_u64() {
        return Ok(n);
    }
    // Saturating cast: negatives become 0
    Ok(number_of(&value).map(|v| v.floor() as u64).unwrap_or(0))
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Stock badge level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    High,
    Medium,
    Low,
}

impl StockLevel {
    pub fn from_stock(stock: u64) -> Self {
        if stock > 50 {
            StockLevel::High
        } else if stock > 20 {
            StockLevel::Medium
        } else {
            StockLevel::Low
        }
    }
}

impl Product {
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Price before discount; equals `price` when there is no usable discount
    pub fn original_price(&self) -> f64 {
        let discount = self.discount_percentage;
        if discount > 0.0 && discount < 100.0 {
            self.price / (1.0 - discount / 100.0)
        } else {
            self.price
        }
    }

    pub fn savings(&self) -> f64 {
        self.original_price() - self.price
    }

    /// Whole stars to fill out of five
    pub fn filled_stars(&self) -> u8 {
        if !self.rating.is_finite() {
            return 0;
        }
        self.rating.floor().clamp(0.0, 5.0) as u8
    }

    pub fn stock_level(&self) -> StockLevel {
        StockLevel::from_stock(self.stock)
    }
}

/// Display-ready product card
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub product: Product,
    pub price_display: String,
    /// Present only when the product is discounted
    pub original_price_display: Option<String>,
    pub savings_display: Option<String>,
    pub discount_badge: Option<String>,
    pub filled_stars: u8,
    pub rating_display: String,
    pub stock_level: StockLevel,
    pub stock_display: String,
}

impl From<Product> for ProductCard {
    fn from(product: Product) -> Self {
        let discounted = product.discount_percentage > 0.0;
        Self {
            price_display: format_usd(product.price),
            original_price_display: discounted.then(|| format_usd(product.original_price())),
            savings_display: discounted.then(|| format!("Save {}", format_usd(product.savings()))),
            discount_badge: discounted.then(|| format!("-{:.0}% OFF", product.discount_percentage)),
            filled_stars: product.filled_stars(),
            rating_display: format!("{:.1}", product.rating),
            stock_level: product.stock_level(),
            stock_display: format!("{} in stock", product.stock),
            product,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> &'static str {
        r#"{
            "id": 1,
            "title": "Essence Mascara Lash Princess",
            "description": "A popular mascara.",
            "category": "beauty",
            "price": 9.99,
            "discountPercentage": 7.17,
            "rating": 4.94,
            "stock": 5,
            "brand": "Essence",
            "thumbnail": "https://cdn.example.com/thumb.png",
            "availabilityStatus": "Low Stock",
            "tags": ["beauty", "mascara"]
        }"#
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let product = Product::from_slice(sample().as_bytes()).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.brand, "Essence");
        assert_eq!(product.availability_status, "Low Stock");
    }

    #[test]
    fn test_missing_fields_default() {
        let product = Product::from_slice(br#"{"title": "Bare"}"#).unwrap();
        assert_eq!(product.title, "Bare");
        assert_eq!(product.price, 0.0);
        assert_eq!(product.brand, "");

        let card = ProductCard::from(product);
        assert_eq!(card.price_display, "$0.00");
        assert_eq!(card.discount_badge, None);
        assert_eq!(card.filled_stars, 0);
    }

    #[test]
    fn test_null_and_malformed_fields_default() {
        let body = br#"{
            "id": "12",
            "title": null,
            "price": null,
            "discountPercentage": "12.5",
            "rating": {"avg": 4},
            "stock": -1,
            "brand": 42
        }"#;
        let product = Product::from_slice(body).unwrap();
        assert_eq!(product.id, 12);
        assert_eq!(product.title, "");
        assert_eq!(product.price, 0.0);
        assert_eq!(product.discount_percentage, 12.5);
        assert_eq!(product.rating, 0.0);
        assert_eq!(product.stock, 0);
        assert_eq!(product.brand, "42");

        let card = ProductCard::from(product);
        assert_eq!(card.price_display, "$0.00");
        assert_eq!(card.stock_level, StockLevel::Low);
    }

    #[test]
    fn test_derived_pricing() {
        let product = Product::from_slice(sample().as_bytes()).unwrap();
        assert_relative_eq!(product.original_price(), 9.99 / 0.9283, max_relative = 1e-12);
        assert_relative_eq!(product.savings(), 9.99 / 0.9283 - 9.99, max_relative = 1e-9);
        assert_eq!(product.filled_stars(), 4);
        assert_eq!(product.stock_level(), StockLevel::Low);

        let card = ProductCard::from(product);
        assert_eq!(card.price_display, "$9.99");
        assert_eq!(card.original_price_display.as_deref(), Some("$10.76"));
        assert_eq!(card.savings_display.as_deref(), Some("Save $0.77"));
        assert_eq!(card.discount_badge.as_deref(), Some("-7% OFF"));
        assert_eq!(card.rating_display, "4.9");
        assert_eq!(card.stock_display, "5 in stock");
    }

    #[test]
    fn test_degenerate_discount() {
        let product = Product {
            price: 50.0,
            discount_percentage: 100.0,
            ..Default::default()
        };
        assert_eq!(product.original_price(), 50.0);
        assert_eq!(product.savings(), 0.0);
    }

    #[test]
    fn test_stock_levels() {
        assert_eq!(StockLevel::from_stock(51), StockLevel::High);
        assert_eq!(StockLevel::from_stock(50), StockLevel::Medium);
        assert_eq!(StockLevel::from_stock(21), StockLevel::Medium);
        assert_eq!(StockLevel::from_stock(20), StockLevel::Low);
    }
}
