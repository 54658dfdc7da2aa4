//! Landing Page

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::landing_page;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let session = Memo::new(move |_| ctx.current_session());

    view! {
        <section class="hero is-medium">
            <div class="hero-body has-text-centered">
                <h1 class="title">"Complaint Desk"</h1>
                <p class="subtitle">"Report a problem and follow it until it is resolved."</p>
                {move || match session.get() {
                    Some(session) => view! {
                        <a class="button is-primary" href=landing_page(session.is_admin()).path()>
                            "Go to your complaints"
                        </a>
                    }
                    .into_any(),
                    None => view! {
                        <div class="buttons is-centered">
                            <a class="button is-primary" href="/register">"Get Started"</a>
                            <a class="button is-light" href="/login">"Login"</a>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </section>
    }
}
