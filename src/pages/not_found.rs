//! Fallback for unknown paths

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="section has-text-centered">
            <h1 class="title">"Page not found"</h1>
            <a class="button is-primary" href="/">"Back to home"</a>
        </section>
    }
}
