//! Transient notification queue.
//!
//! Confirmation toasts are pushed by whoever performed the triggering
//! action (the add-to-cart buttons), not by the cart store itself, so the
//! cart stays a pure state container.

use leptos::prelude::*;

/// Identifier for a pushed toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

/// An action button on a toast (e.g., "View Cart").
#[derive(Clone)]
pub struct ToastAction {
    /// Button label.
    pub label: String,
    /// Invoked when the button is pressed.
    pub on_select: Callback<()>,
}

/// A transient notification.
#[derive(Clone)]
pub struct Toast {
    /// Queue identifier, unique for the lifetime of the store.
    pub id: ToastId,
    /// Headline (e.g., "Luxe Velvet Sofa added to cart!").
    pub message: String,
    /// Secondary line under the headline.
    pub description: Option<String>,
    /// Optional action button.
    pub action: Option<ToastAction>,
}

/// Reactive handle to the notification queue.
///
/// The queue is ordered by push time. Dismissing an unknown id is a
/// silent no-op, the same normalization policy the cart follows.
#[derive(Clone, Copy)]
pub struct ToastStore {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastStore {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Push a success toast.
    pub fn success(&self, message: impl Into<String>, description: impl Into<String>) -> ToastId {
        self.push(message.into(), Some(description.into()), None)
    }

    /// Push a success toast with an action button.
    pub fn success_with_action(
        &self,
        message: impl Into<String>,
        description: impl Into<String>,
        label: impl Into<String>,
        on_select: Callback<()>,
    ) -> ToastId {
        self.push(
            message.into(),
            Some(description.into()),
            Some(ToastAction {
                label: label.into(),
                on_select,
            }),
        )
    }

    fn push(
        &self,
        message: String,
        description: Option<String>,
        action: Option<ToastAction>,
    ) -> ToastId {
        let id = self.allocate_id();
        tracing::debug!(toast_id = id.0, message = %message, "toast push");
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                message,
                description,
                action,
            })
        });
        id
    }

    fn allocate_id(&self) -> ToastId {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        ToastId(id)
    }

    /// Remove a toast. Unknown ids are silently ignored.
    pub fn dismiss(&self, id: ToastId) {
        tracing::debug!(toast_id = id.0, "toast dismiss");
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    /// Toasts in push order.
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    /// Number of queued toasts.
    pub fn len(&self) -> usize {
        self.toasts.with(Vec::len)
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.toasts.with(Vec::is_empty)
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a toast store and provide it through context.
pub fn provide_toasts() -> ToastStore {
    let store = ToastStore::new();
    provide_context(store);
    store
}

/// The toast store provided by an ancestor scope.
///
/// Panics when no ancestor called [`provide_toasts`].
pub fn use_toasts() -> ToastStore {
    use_context::<ToastStore>()
        .expect("use_toasts must be called within a scope that called provide_toasts")
}
