use aura_commerce::{Catalog, Product};
use aura_state::{use_cart, use_selection, use_toasts};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// The product grid.
///
/// Clicking a card opens the detail overlay for that product; the quick
/// "Add" action goes straight to the cart and raises the confirmation
/// toast without opening the overlay.
#[component]
pub fn FeaturedCollection(catalog: Catalog) -> impl IntoView {
    view! {
        <section id="featured-collection" class="collection">
            <div class="section-header">
                <span class="eyebrow">"Our Collection"</span>
                <h2>"Featured " <em>"Masterpieces"</em></h2>
                <p>
                    "Curated pieces that blend timeless elegance with contemporary \
                     innovation. Each item is a statement of refined taste."
                </p>
            </div>

            <div class="product-grid">
                {catalog
                    .products()
                    .iter()
                    .cloned()
                    .map(|product| view! { <ProductCard product=product/> })
                    .collect_view()}
            </div>

            <div class="collection-cta">
                <button class="btn-outline-dark">"View Full Collection"</button>
            </div>
        </section>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let cart = use_cart();
    let selection = use_selection();
    let toasts = use_toasts();

    let for_detail = product.clone();
    let for_add = product.clone();

    let quick_add = move |ev: MouseEvent| {
        // The card behind this button opens the overlay; adding must not.
        ev.stop_propagation();
        cart.add(&for_add);
        toasts.success_with_action(
            format!("{} added to cart!", for_add.name),
            "View your cart to proceed to checkout",
            "View Cart",
            Callback::new(move |_| cart.open()),
        );
    };

    view! {
        <article class="product-card" on:click=move |_| selection.select(for_detail.clone())>
            <div class="product-image">
                <img src=product.image.clone() alt=product.name.clone()/>
                <div class="product-actions">
                    <span class="btn-view">"View Details"</span>
                    <button class="btn-add" on:click=quick_add>"Add"</button>
                </div>
            </div>
            <div class="product-info">
                <p class="product-category">{product.category.clone()}</p>
                <h3>{product.name.clone()}</h3>
                <p class="product-price">{product.display_price.clone()}</p>
            </div>
        </article>
    }
}
