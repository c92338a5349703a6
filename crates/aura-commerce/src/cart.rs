//! Shopping cart and line items.
//!
//! The cart is the behavioral core of the storefront. Its contract is
//! deliberately forgiving: every operation succeeds, unknown ids are
//! ignored, and non-positive quantities mean removal. Count and subtotal
//! are derived from the lines on every call, never stored.

use crate::price::Price;
use crate::product::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// A product plus the quantity of it in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Snapshot of the product as it was when added.
    pub product: Product,
    /// Units of the product. Always at least 1; a mutation that would
    /// drop it to zero removes the line instead.
    pub quantity: i64,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// An insertion-ordered shopping cart.
///
/// At most one line exists per product id; adding an already-carted
/// product increments its line in place, so the order products were first
/// added in is stable across further mutations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line in place (its position is unchanged)
    /// or appends a new line with quantity 1. Never fails.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine::new(product.clone()));
        }
    }

    /// Remove the line for a product.
    ///
    /// Unknown ids are silently ignored; returns whether a line was
    /// actually removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != id);
        self.lines.len() < before
    }

    /// Set the quantity of a product's line.
    ///
    /// A quantity of zero or less behaves exactly like [`Cart::remove`].
    /// Unknown ids are silently ignored; returns whether anything changed.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(id);
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == id) {
            line.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantities across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of line totals.
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Line for a product, if present.
    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == id)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: i64, dollars: i64) -> Product {
        Product::new(
            id,
            format!("Product {id}"),
            "Test",
            format!("${dollars}"),
            Price::from_dollars(dollars),
            format!("product-{id}.jpg"),
        )
    }

    // === Add Tests ===

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.subtotal(), Price::zero());
    }

    #[test]
    fn test_add_appends_line_with_quantity_one() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 100));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.lines()[0].product.id, ProductId::new(1));
    }

    #[test]
    fn test_add_same_product_increments_single_line() {
        let mut cart = Cart::new();
        let p = test_product(1, 100);
        for _ in 0..5 {
            cart.add(&p);
        }

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        let a = test_product(1, 100);
        let b = test_product(2, 50);

        cart.add(&a);
        cart.add(&b);
        cart.add(&a);

        let ids: Vec<ProductId> = cart.lines().iter().map(|l| l.product.id).collect();
        assert_eq!(ids, vec![ProductId::new(1), ProductId::new(2)]);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[1].quantity, 1);
    }

    // === Remove Tests ===

    #[test]
    fn test_remove_deletes_line() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 100));

        assert!(cart.remove(ProductId::new(1)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_unknown_id_is_silently_ignored() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 100));
        let before = cart.clone();

        assert!(!cart.remove(ProductId::new(99)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_only_targets_matching_line() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 100));
        cart.add(&test_product(2, 50));

        cart.remove(ProductId::new(1));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].product.id, ProductId::new(2));
    }

    // === Set Quantity Tests ===

    #[test]
    fn test_set_quantity_updates_line() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 100));

        assert!(cart.set_quantity(ProductId::new(1), 7));
        assert_eq!(cart.total_quantity(), 7);
        assert_eq!(cart.subtotal(), Price::from_dollars(700));
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 100));

        assert!(cart.set_quantity(ProductId::new(1), 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_negative_removes_line() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 100));

        assert!(cart.set_quantity(ProductId::new(1), -3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_nonpositive_matches_remove() {
        let mut via_set = Cart::new();
        let mut via_remove = Cart::new();
        for cart in [&mut via_set, &mut via_remove] {
            cart.add(&test_product(1, 100));
            cart.add(&test_product(2, 50));
        }

        via_set.set_quantity(ProductId::new(1), 0);
        via_remove.remove(ProductId::new(1));

        assert_eq!(via_set, via_remove);
    }

    #[test]
    fn test_set_quantity_unknown_id_is_silently_ignored() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 100));
        let before = cart.clone();

        assert!(!cart.set_quantity(ProductId::new(99), 5));
        assert_eq!(cart, before);
    }

    // === Clear Tests ===

    #[test]
    fn test_clear_empties_lines() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 100));
        cart.add(&test_product(2, 50));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.subtotal(), Price::zero());
    }

    #[test]
    fn test_clear_on_empty_cart_is_a_no_op() {
        let mut cart = Cart::new();
        cart.clear();
        assert!(cart.is_empty());
    }

    // === Derived Value Tests ===

    #[test]
    fn test_totals_recompute_after_every_mutation() {
        let mut cart = Cart::new();
        let p1 = test_product(1, 100);
        let p2 = test_product(2, 50);

        cart.add(&p1);
        assert_eq!(cart.total_quantity(), 1);
        assert_eq!(cart.subtotal(), Price::from_dollars(100));

        cart.add(&p1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal(), Price::from_dollars(200));

        cart.add(&p2);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.subtotal(), Price::from_dollars(250));

        cart.set_quantity(ProductId::new(1), 0);
        assert_eq!(cart.total_quantity(), 1);
        assert_eq!(cart.subtotal(), Price::from_dollars(50));

        cart.clear();
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.subtotal(), Price::zero());
    }

    #[test]
    fn test_subtotal_weighs_quantities() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 3_499));
        cart.set_quantity(ProductId::new(1), 2);
        cart.add(&test_product(2, 899));

        assert_eq!(cart.subtotal(), Price::from_dollars(7_897));
    }

    #[test]
    fn test_line_total() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 1_299));
        cart.set_quantity(ProductId::new(1), 3);

        let line = cart.get(ProductId::new(1)).unwrap();
        assert_eq!(line.line_total(), Price::from_dollars(3_897));
    }

    #[test]
    fn test_get_returns_line_by_id() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 100));

        assert!(cart.get(ProductId::new(1)).is_some());
        assert!(cart.get(ProductId::new(2)).is_none());
    }
}
