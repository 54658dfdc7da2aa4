//! Empty State Component

use leptos::prelude::*;

use crate::render::EmptyState;

#[component]
pub fn EmptyStateView(state: EmptyState) -> impl IntoView {
    view! {
        <div class="empty-state has-text-centered py-6">
            <span class="icon is-large has-text-grey-light">
                <i class=format!("{} fa-3x", state.icon)></i>
            </span>
            <h3 class="title is-5 mt-4">{state.heading}</h3>
            <p class="has-text-grey">{state.message}</p>
        </div>
    }
}
