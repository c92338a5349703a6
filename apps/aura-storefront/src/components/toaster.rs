use std::time::Duration;

use aura_state::{use_toasts, Toast};
use leptos::prelude::*;

/// How long a toast stays on screen before auto-dismissing.
const TOAST_LIFETIME: Duration = Duration::from_millis(4_000);

/// Renders the toast queue in the corner of the viewport.
///
/// Expiry is a presentation policy; the store itself never drops a
/// toast on its own, and dismissing one that already expired is a no-op.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toaster">
            <For
                each=move || toasts.toasts()
                key=|toast| toast.id
                children=move |toast| view! { <ToastCard toast=toast/> }
            />
        </div>
    }
}

#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let toasts = use_toasts();
    let id = toast.id;

    set_timeout(move || toasts.dismiss(id), TOAST_LIFETIME);

    let action = toast.action.map(|action| {
        let on_select = action.on_select;
        view! {
            <button
                class="toast-action"
                on:click=move |_| {
                    on_select.run(());
                    toasts.dismiss(id);
                }
            >
                {action.label}
            </button>
        }
    });

    view! {
        <div class="toast">
            <div class="toast-body">
                <p class="toast-message">{toast.message}</p>
                {toast.description.map(|text| view! { <p class="toast-description">{text}</p> })}
            </div>
            {action}
            <button class="toast-close" aria-label="Dismiss" on:click=move |_| toasts.dismiss(id)>
                "×"
            </button>
        </div>
    }
}
