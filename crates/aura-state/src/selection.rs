//! Product detail selection state.

use aura_commerce::Product;
use leptos::prelude::*;

/// Reactive handle to the product detail overlay.
///
/// Two pieces move independently: which product was last selected, and
/// whether the overlay is showing. [`SelectionStore::close`] drops the
/// flag but retains the product, so the overlay contents stay renderable
/// while it leaves the screen; the next select replaces them.
#[derive(Clone, Copy)]
pub struct SelectionStore {
    selected: RwSignal<Option<Product>>,
    is_open: RwSignal<bool>,
}

impl SelectionStore {
    /// Create a store with nothing selected and the overlay hidden.
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new(None),
            is_open: RwSignal::new(false),
        }
    }

    /// Open the detail overlay for a product.
    ///
    /// Selecting while already open replaces the product in place.
    pub fn select(&self, product: Product) {
        tracing::debug!(product_id = %product.id, "detail open");
        self.selected.set(Some(product));
        self.is_open.set(true);
    }

    /// Hide the detail overlay, retaining the selected product.
    pub fn close(&self) {
        tracing::debug!("detail close");
        self.is_open.set(false);
    }

    /// The most recently selected product, if any.
    pub fn selected(&self) -> Option<Product> {
        self.selected.get()
    }

    /// Overlay visibility.
    pub fn is_open(&self) -> bool {
        self.is_open.get()
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a selection store and provide it through context.
pub fn provide_selection() -> SelectionStore {
    let store = SelectionStore::new();
    provide_context(store);
    store
}

/// The selection store provided by an ancestor scope.
///
/// Panics when no ancestor called [`provide_selection`].
pub fn use_selection() -> SelectionStore {
    use_context::<SelectionStore>()
        .expect("use_selection must be called within a scope that called provide_selection")
}
