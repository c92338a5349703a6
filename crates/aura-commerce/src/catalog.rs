//! Validated product catalog.

use crate::error::CatalogError;
use crate::product::{Product, ProductId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A read-only collection of products with unique ids.
///
/// Construction validates the content source, so a catalog that builds is
/// safe to render and to add to the cart from without further checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and negative prices.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.price.is_negative() {
                return Err(CatalogError::NegativePrice(product.id));
            }
        }
        Ok(Self { products })
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Iterate over the products.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
