//! Reactive state containers for the Aura Interiors storefront.
//!
//! The pure cart and catalog logic lives in `aura-commerce`; this crate
//! wraps it in Leptos signals so every consumer re-renders when the state
//! it reads changes. Three stores exist:
//!
//! - [`CartStore`]: the shopping cart plus the drawer visibility flag
//! - [`SelectionStore`]: which product the detail overlay is showing
//! - [`ToastStore`]: the transient notification queue
//!
//! Stores are provided through context at the application root with the
//! `provide_*` functions and looked up with the `use_*` accessors, which
//! panic when called outside a provider scope. Components never receive a
//! store by prop drilling.

pub mod cart;
pub mod selection;
pub mod toast;

pub use cart::{provide_cart, use_cart, CartStore};
pub use selection::{provide_selection, use_selection, SelectionStore};
pub use toast::{provide_toasts, use_toasts, Toast, ToastAction, ToastId, ToastStore};
