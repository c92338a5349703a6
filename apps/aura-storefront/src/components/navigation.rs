use aura_state::use_cart;
use leptos::prelude::*;

use crate::data::content::NavContent;

/// Fixed top bar: brand, section anchors, and the cart button.
///
/// The badge renders only while the cart holds something, and tracks the
/// derived count.
#[component]
pub fn Navigation() -> impl IntoView {
    let cart = use_cart();
    let content = NavContent::default();

    view! {
        <nav class="site-nav">
            <div class="nav-inner">
                <a href="#top" class="nav-brand">{content.brand}</a>

                <div class="nav-links">
                    {content
                        .links
                        .into_iter()
                        .map(|link| view! { <a href=link.href>{link.label}</a> })
                        .collect_view()}
                </div>

                <div class="nav-actions">
                    <button
                        class="nav-cart"
                        aria-label="Open shopping cart"
                        on:click=move |_| cart.open()
                    >
                        "Cart"
                        <Show when={move || cart.count() > 0}>
                            <span class="nav-cart-badge">{move || cart.count()}</span>
                        </Show>
                    </button>
                    <button class="nav-consult">{content.consultation_label}</button>
                </div>
            </div>
        </nav>
    }
}
