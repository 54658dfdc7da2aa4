//! Image Modal Component
//!
//! Full-size view of a screenshot.

use leptos::prelude::*;

#[component]
pub fn ImageModal(image: RwSignal<Option<String>>) -> impl IntoView {
    let close = move |_| image.set(None);

    view! {
        <Show when=move || image.with(Option::is_some)>
            <div class="modal is-active">
                <div class="modal-background" on:click=close></div>
                <div class="modal-content">
                    <p class="image">
                        <img src=move || image.get().unwrap_or_default() alt="Screenshot" />
                    </p>
                </div>
                <button class="modal-close is-large" aria-label="close" on:click=close></button>
            </div>
        </Show>
    }
}
