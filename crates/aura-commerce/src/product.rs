//! Product records and identifiers.
//!
//! Using a newtype for product ids prevents accidentally mixing them up
//! with quantities or other integers.

use crate::price::Price;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique product identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct ProductId(i64);

impl ProductId {
    /// Create an ID from the catalog's integer key.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying integer.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A product in the collection.
///
/// Records are immutable once constructed; identity is `id`. The cart
/// stores a snapshot of the record as it was when added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Display category (e.g., "Living Room").
    pub category: String,
    /// Price string as shown on the site (e.g., "$3,499").
    pub display_price: String,
    /// Numeric price used for cart totals.
    pub price: Price,
    /// Image reference.
    pub image: String,
    /// Optional long-form description.
    pub description: Option<String>,
}

impl Product {
    /// Create a new product record.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        display_price: impl Into<String>,
        price: Price,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            display_price: display_price.into(),
            price,
            image: image.into(),
            description: None,
        }
    }

    /// Attach a long-form description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Description for the detail view.
    ///
    /// Falls back to the house blurb, personalized with the product name,
    /// when the catalog record carries none.
    pub fn description_text(&self) -> String {
        match &self.description {
            Some(description) => description.clone(),
            None => format!(
                "Experience the perfect blend of contemporary design and timeless \
                 elegance with the {}. Crafted with meticulous attention to detail, \
                 this piece transforms any space into a sophisticated sanctuary. \
                 Premium materials and expert craftsmanship ensure lasting beauty \
                 and comfort.",
                self.name
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armchair() -> Product {
        Product::new(
            2,
            "Architectural Armchair",
            "Accent Seating",
            "$1,299",
            Price::from_dollars(1_299),
            "armchair.jpg",
        )
    }

    #[test]
    fn test_product_id_display() {
        let id = ProductId::new(42);
        assert_eq!(format!("{}", id), "42");
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn test_product_id_equality() {
        assert_eq!(ProductId::new(1), ProductId::from(1));
        assert_ne!(ProductId::new(1), ProductId::new(2));
    }

    #[test]
    fn test_product_construction() {
        let p = armchair();
        assert_eq!(p.id, ProductId::new(2));
        assert_eq!(p.name, "Architectural Armchair");
        assert_eq!(p.display_price, "$1,299");
        assert_eq!(p.price, Price::from_dollars(1_299));
        assert!(p.description.is_none());
    }

    #[test]
    fn test_with_description() {
        let p = armchair().with_description("A sculptural statement piece.");
        assert_eq!(p.description.as_deref(), Some("A sculptural statement piece."));
        assert_eq!(p.description_text(), "A sculptural statement piece.");
    }

    #[test]
    fn test_description_fallback_names_the_product() {
        let text = armchair().description_text();
        assert!(text.contains("Architectural Armchair"));
        assert!(text.starts_with("Experience the perfect blend"));
    }

    #[test]
    fn test_product_json_shape_matches_content_source() {
        let value = serde_json::to_value(armchair()).unwrap();
        assert_eq!(value["id"], 2);
        assert_eq!(value["name"], "Architectural Armchair");
        assert_eq!(value["display_price"], "$1,299");
        assert_eq!(value["price"]["cents"], 129_900);
        assert!(value["description"].is_null());
    }
}
