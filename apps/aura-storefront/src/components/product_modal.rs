use aura_commerce::Product;
use aura_state::{use_cart, use_selection, use_toasts};
use leptos::prelude::*;

/// Product detail overlay.
///
/// The selection store retains the product after `close()`, so the
/// markup stays populated while the overlay leaves the screen. With
/// nothing selected yet the overlay renders nothing at all.
#[component]
pub fn ProductModal() -> impl IntoView {
    let selection = use_selection();

    view! {
        <Show when=move || selection.is_open()>
            <div class="modal-backdrop" on:click=move |_| selection.close()></div>
            <div class="modal">
                {move || selection.selected().map(|product| view! { <ModalContent product=product/> })}
            </div>
        </Show>
    }
}

#[component]
fn ModalContent(product: Product) -> impl IntoView {
    let cart = use_cart();
    let selection = use_selection();
    let toasts = use_toasts();

    let description = product.description_text();
    let for_add = product.clone();

    let add_to_cart = move |_| {
        cart.add(&for_add);
        toasts.success_with_action(
            format!("{} added to cart!", for_add.name),
            "View your cart to proceed to checkout",
            "View Cart",
            Callback::new(move |_| cart.open()),
        );
    };

    view! {
        <button class="modal-close" aria-label="Close" on:click=move |_| selection.close()>
            "×"
        </button>

        <div class="modal-grid">
            <div class="modal-image">
                <img src=product.image.clone() alt=product.name.clone()/>
                <span class="modal-badge">"NEW ARRIVAL"</span>
                <button class="modal-ar">"View in AR"</button>
            </div>

            <div class="modal-details">
                <p class="product-category">{product.category.clone()}</p>
                <h2>{product.name.clone()}</h2>
                <p class="modal-rating">"★★★★☆ (127 reviews)"</p>
                <p class="modal-price">{product.display_price.clone()}</p>
                <p class="modal-description">{description}</p>

                <div class="modal-features">
                    <h3>"Key Features"</h3>
                    <ul>
                        <li>"Premium materials & construction"</li>
                        <li>"AR visualization available"</li>
                        <li>"Free white-glove delivery"</li>
                        <li>"5-year warranty included"</li>
                    </ul>
                </div>

                <button class="btn-dark modal-add" on:click=add_to_cart>
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}
