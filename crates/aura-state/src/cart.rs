//! Reactive cart store.

use aura_commerce::{Cart, CartLine, Price, Product, ProductId};
use leptos::prelude::*;

/// Reactive handle to the shopping cart and the drawer visibility flag.
///
/// Copyable; every copy points at the same underlying signals. The fields
/// stay private so mutation only happens through the operations below,
/// which keeps the derived count and subtotal in lockstep with the lines.
#[derive(Clone, Copy)]
pub struct CartStore {
    cart: RwSignal<Cart>,
    is_open: RwSignal<bool>,
    count: Memo<i64>,
    subtotal: Memo<Price>,
}

impl CartStore {
    /// Create a store over an empty cart with the drawer closed.
    pub fn new() -> Self {
        let cart = RwSignal::new(Cart::new());
        let count = Memo::new(move |_| cart.with(Cart::total_quantity));
        let subtotal = Memo::new(move |_| cart.with(Cart::subtotal));
        Self {
            cart,
            is_open: RwSignal::new(false),
            count,
            subtotal,
        }
    }

    /// Add one unit of a product, creating or incrementing its line.
    pub fn add(&self, product: &Product) {
        tracing::debug!(product_id = %product.id, name = %product.name, "cart add");
        self.cart.update(|cart| cart.add(product));
    }

    /// Remove a product's line. Unknown ids are silently ignored.
    pub fn remove(&self, id: ProductId) {
        tracing::debug!(product_id = %id, "cart remove");
        self.cart.update(|cart| {
            cart.remove(id);
        });
    }

    /// Set a line's quantity; zero or less removes the line. Unknown ids
    /// are silently ignored.
    pub fn set_quantity(&self, id: ProductId, quantity: i64) {
        tracing::debug!(product_id = %id, quantity, "cart set quantity");
        self.cart.update(|cart| {
            cart.set_quantity(id, quantity);
        });
    }

    /// Remove every line. The drawer flag is untouched.
    pub fn clear(&self) {
        tracing::debug!("cart clear");
        self.cart.update(Cart::clear);
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> Vec<CartLine> {
        self.cart.with(|cart| cart.lines().to_vec())
    }

    /// Sum of quantities, derived from the lines.
    pub fn count(&self) -> i64 {
        self.count.get()
    }

    /// Sum of line totals, derived from the lines.
    pub fn subtotal(&self) -> Price {
        self.subtotal.get()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.cart.with(Cart::is_empty)
    }

    /// Drawer visibility.
    pub fn is_open(&self) -> bool {
        self.is_open.get()
    }

    /// Show or hide the drawer. The lines are untouched.
    pub fn set_open(&self, open: bool) {
        tracing::debug!(open, "cart drawer");
        self.is_open.set(open);
    }

    /// Show the drawer.
    pub fn open(&self) {
        self.set_open(true);
    }

    /// Hide the drawer.
    pub fn close(&self) {
        self.set_open(false);
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a cart store and provide it through context.
pub fn provide_cart() -> CartStore {
    let store = CartStore::new();
    provide_context(store);
    store
}

/// The cart store provided by an ancestor scope.
///
/// Panics when no ancestor called [`provide_cart`]; that is a wiring bug
/// and should fail at first render, not be papered over.
pub fn use_cart() -> CartStore {
    use_context::<CartStore>()
        .expect("use_cart must be called within a scope that called provide_cart")
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

    // === Mutation Tests ===

    #[test]
    fn test_new_store_is_empty_and_closed() {
        let store = CartStore::new();
        assert!(store.is_empty());
        assert!(!store.is_open());
        assert_eq!(store.count(), 0);
        assert_eq!(store.subtotal(), Price::zero());
    }

    #[test]
    fn test_add_accumulates_into_one_line() {
        let store = CartStore::new();
        let p = test_product(1, 100);

        store.add(&p);
        store.add(&p);

        let lines = store.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
    }

    #[test]
    fn test_remove_unknown_id_is_silently_ignored() {
        let store = CartStore::new();
        store.add(&test_product(1, 100));

        store.remove(ProductId::new(42));

        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let store = CartStore::new();
        store.add(&test_product(1, 100));

        store.set_quantity(ProductId::new(1), 0);

        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_leaves_drawer_flag_alone() {
        let store = CartStore::new();
        store.add(&test_product(1, 100));
        store.open();

        store.clear();

        assert!(store.is_empty());
        assert!(store.is_open());
    }

    #[test]
    fn test_drawer_flag_leaves_lines_alone() {
        let store = CartStore::new();
        store.add(&test_product(1, 100));

        store.open();
        store.close();
        store.set_open(true);

        assert!(store.is_open());
        assert_eq!(store.count(), 1);
    }

    // === Derived Value Tests ===

    #[test]
    fn test_memos_track_every_mutation() {
        let store = CartStore::new();
        let p1 = test_product(1, 100);
        let p2 = test_product(2, 50);

        store.add(&p1);
        assert_eq!(store.count(), 1);
        assert_eq!(store.subtotal(), Price::from_dollars(100));

        store.add(&p1);
        assert_eq!(store.count(), 2);
        assert_eq!(store.subtotal(), Price::from_dollars(200));

        store.add(&p2);
        assert_eq!(store.count(), 3);
        assert_eq!(store.subtotal(), Price::from_dollars(250));

        store.set_quantity(ProductId::new(1), 0);
        assert_eq!(store.count(), 1);
        assert_eq!(store.subtotal(), Price::from_dollars(50));

        store.clear();
        assert_eq!(store.count(), 0);
        assert_eq!(store.subtotal(), Price::zero());
    }

    #[test]
    fn test_lines_preserve_insertion_order() {
        let store = CartStore::new();
        let a = test_product(1, 100);
        let b = test_product(2, 50);

        store.add(&a);
        store.add(&b);
        store.add(&a);

        let ids: Vec<ProductId> = store.lines().iter().map(|l| l.product.id).collect();
        assert_eq!(ids, vec![ProductId::new(1), ProductId::new(2)]);
    }

    // === Context Tests ===

    #[test]
    fn test_provide_and_use_share_one_store() {
        let owner = Owner::new();
        owner.set();

        let provided = provide_cart();
        let used = use_cart();

        provided.add(&test_product(1, 100));
        assert_eq!(used.count(), 1);
    }

    #[test]
    #[should_panic(expected = "use_cart must be called within a scope")]
    fn test_use_cart_outside_provider_panics() {
        let owner = Owner::new();
        owner.set();

        let _ = use_cart();
    }
}
