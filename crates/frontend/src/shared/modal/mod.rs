use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Overlay + dialog surface. Clicking the overlay or the close button calls
/// `on_close`; `shown` drives the fade (opacity) transition.
#[component]
pub fn Modal(
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Fade state: false while fading in or out
    #[prop(into)]
    shown: Signal<bool>,
    /// Extra class on the dialog surface
    #[prop(optional, into)]
    modal_class: String,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    view! {
        <div
            class="modal-overlay"
            role="dialog"
            aria-modal="true"
            style:opacity=move || if shown.get() { "1" } else { "0" }
            on:click=handle_overlay_click
        >
            <div
                class=format!("modal {}", modal_class)
                class:modal--shown=move || shown.get()
                on:click=stop_propagation
            >
                <button class="modal__close" aria-label="Close" on:click=handle_close>
                    {icon("x")}
                </button>
                {children()}
            </div>
        </div>
    }
}
