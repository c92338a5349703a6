use aura_commerce::CartLine;
use aura_state::use_cart;
use leptos::prelude::*;

/// Right-hand cart drawer: line list, quantity steppers, and subtotal.
#[component]
pub fn CartDrawer() -> impl IntoView {
    let cart = use_cart();

    view! {
        <Show when=move || cart.is_open()>
            <div class="drawer-backdrop" on:click=move |_| cart.close()></div>
            <aside class="cart-drawer">
                <header class="drawer-header">
                    <h2>"Shopping Cart"</h2>
                    <button class="drawer-close" aria-label="Close cart" on:click=move |_| cart.close()>
                        "×"
                    </button>
                </header>

                <div class="drawer-body">
                    <Show
                        when=move || !cart.is_empty()
                        fallback=|| {
                            view! {
                                <div class="cart-empty">
                                    <p>"Your cart is empty"</p>
                                    <p class="muted">"Add some beautiful furniture to get started"</p>
                                </div>
                            }
                        }
                    >
                        <div class="cart-lines">
                            <For
                                each=move || cart.lines()
                                key=|line| (line.product.id, line.quantity)
                                children=move |line| view! { <CartLineRow line=line/> }
                            />
                        </div>
                    </Show>
                </div>

                <Show when=move || !cart.is_empty()>
                    <footer class="drawer-footer">
                        <div class="subtotal-row">
                            <span>"Subtotal"</span>
                            <span class="subtotal">{move || cart.subtotal().display()}</span>
                        </div>
                        <p class="muted">"Shipping and taxes calculated at checkout"</p>
                        <button class="btn-dark checkout">"Proceed to Checkout"</button>
                        <button class="drawer-clear" on:click=move |_| cart.clear()>
                            "Clear Cart"
                        </button>
                        <button class="drawer-continue" on:click=move |_| cart.close()>
                            "Continue Shopping"
                        </button>
                    </footer>
                </Show>
            </aside>
        </Show>
    }
}

#[component]
fn CartLineRow(line: CartLine) -> impl IntoView {
    let cart = use_cart();
    let id = line.product.id;
    let quantity = line.quantity;

    // Stepping to zero removes the line; the store normalizes that.
    view! {
        <div class="cart-line">
            <img class="line-image" src=line.product.image.clone() alt=line.product.name.clone()/>
            <div class="line-info">
                <div class="line-top">
                    <div>
                        <h3>{line.product.name.clone()}</h3>
                        <p class="line-category">{line.product.category.clone()}</p>
                    </div>
                    <button
                        class="line-remove"
                        aria-label="Remove from cart"
                        on:click=move |_| cart.remove(id)
                    >
                        "Remove"
                    </button>
                </div>
                <div class="line-bottom">
                    <div class="quantity-stepper">
                        <button on:click=move |_| cart.set_quantity(id, quantity - 1)>"−"</button>
                        <span>{quantity}</span>
                        <button on:click=move |_| cart.set_quantity(id, quantity + 1)>"+"</button>
                    </div>
                    <p class="line-price">{line.product.display_price.clone()}</p>
                </div>
            </div>
        </div>
    }
}
