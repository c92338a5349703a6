//! The featured furniture collection.
//!
//! This is the site's product content source. It is validated into a
//! [`Catalog`] at startup, so a duplicate id or bad price fails before
//! the first render.

use aura_commerce::{Catalog, CatalogError, Price, Product};

/// Products shown in the featured collection grid, in display order.
pub fn featured_products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Luxe Velvet Sofa",
            "Living Room",
            "$3,499",
            Price::from_dollars(3_499),
            "https://images.unsplash.com/photo-1684261556324-a09b2cdf68b1?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        ),
        Product::new(
            2,
            "Architectural Armchair",
            "Accent Seating",
            "$1,299",
            Price::from_dollars(1_299),
            "https://images.unsplash.com/photo-1760611656233-915efdf138b1?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        ),
        Product::new(
            3,
            "Marble Dining Set",
            "Dining",
            "$4,899",
            Price::from_dollars(4_899),
            "https://images.unsplash.com/photo-1685644201646-9e836c398c92?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        ),
        Product::new(
            4,
            "Designer Coffee Table",
            "Tables",
            "$899",
            Price::from_dollars(899),
            "https://images.unsplash.com/photo-1612735489907-520981cd3885?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        ),
    ]
}

/// The featured collection as a validated catalog.
pub fn featured_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(featured_products())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_commerce::ProductId;
    use std::collections::HashSet;

    #[test]
    fn test_featured_catalog_builds() {
        let catalog = featured_catalog().unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_product_ids_are_unique() {
        let ids: HashSet<ProductId> = featured_products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_display_prices_match_numeric_prices() {
        for product in featured_products() {
            assert_eq!(
                product.display_price,
                product.price.display(),
                "display price for {} drifted from its numeric value",
                product.name
            );
        }
    }

    #[test]
    fn test_collection_order_is_stable() {
        let names: Vec<String> = featured_products().into_iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![
                "Luxe Velvet Sofa",
                "Architectural Armchair",
                "Marble Dining Set",
                "Designer Coffee Table",
            ]
        );
    }

    #[test]
    fn test_every_product_has_an_image() {
        for product in featured_products() {
            assert!(product.image.starts_with("https://"));
        }
    }
}
