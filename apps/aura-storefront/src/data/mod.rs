//! Static content for the storefront.

pub mod collection;
pub mod content;
