//! Commerce domain types for the Aura Interiors storefront.
//!
//! This crate holds the storefront's behavioral core with zero I/O:
//!
//! - **Price**: cents-based money with storefront display formatting
//! - **Product**: immutable catalog records keyed by integer id
//! - **Cart**: insertion-ordered lines with derived count and subtotal
//! - **Catalog**: validated read-only product collection
//!
//! Cart operations never fail. Unknown ids are silently ignored and
//! non-positive quantities remove the line, so the UI layer above can
//! call them straight from event handlers without error plumbing.
//!
//! # Example
//!
//! ```
//! use aura_commerce::prelude::*;
//!
//! let sofa = Product::new(
//!     1,
//!     "Luxe Velvet Sofa",
//!     "Living Room",
//!     "$3,499",
//!     Price::from_dollars(3_499),
//!     "sofa.jpg",
//! );
//!
//! let mut cart = Cart::new();
//! cart.add(&sofa);
//! cart.add(&sofa);
//!
//! assert_eq!(cart.total_quantity(), 2);
//! assert_eq!(cart.subtotal().display(), "$6,998");
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod price;
pub mod product;

pub use cart::{Cart, CartLine};
pub use catalog::Catalog;
pub use error::CatalogError;
pub use price::Price;
pub use product::{Product, ProductId};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, CartLine};
    pub use crate::catalog::Catalog;
    pub use crate::error::CatalogError;
    pub use crate::price::Price;
    pub use crate::product::{Product, ProductId};
}
