//! Notification Center
//!
//! Transient notifications; each one closes itself after the configured
//! delay or on its close button.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NotificationCenter() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="notifications-container">
            <For
                each=move || ctx.notifications.with(|queue| queue.items().to_vec())
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.class()>
                            <button class="delete" on:click=move |_| ctx.dismiss(id)></button>
                            {n.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
