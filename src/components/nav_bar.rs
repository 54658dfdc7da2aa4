//! Navigation Bar
//!
//! Shows who is signed in and the logout action.

use leptos::prelude::*;

use crate::context::{use_app_context, NotificationKind};
use crate::controllers;
use crate::routes::{landing_page, navigate};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let session = Memo::new(move |_| ctx.current_session());

    let logout = move |_| {
        let mut store = ctx.session.get_untracked();
        let target = controllers::logout(&mut store);
        ctx.session.set(store);
        ctx.notify("Logged out successfully", NotificationKind::Success);
        navigate(target);
    };

    view! {
        <nav class="navbar is-primary" role="navigation">
            <div class="navbar-brand">
                <a class="navbar-item" href="/">
                    <span class="icon"><i class="fas fa-clipboard-check"></i></span>
                    <strong>"Complaint Desk"</strong>
                </a>
            </div>
            <div class="navbar-end">
                {move || match session.get() {
                    Some(session) => {
                        let home = landing_page(session.is_admin()).path();
                        view! {
                            <a class="navbar-item" href=home>
                                {if session.is_admin() { "Admin Console" } else { "My Complaints" }}
                            </a>
                            <div class="navbar-item">
                                <div>
                                    <p class="user-name">{session.user.name.clone()}</p>
                                    <p class="user-email is-size-7">{session.user.email.clone()}</p>
                                </div>
                            </div>
                            <div class="navbar-item">
                                <button class="button is-light" on:click=logout>
                                    <span class="icon"><i class="fas fa-sign-out-alt"></i></span>
                                    <span>"Logout"</span>
                                </button>
                            </div>
                        }
                        .into_any()
                    }
                    None => view! {
                        <a class="navbar-item" href="/login">"Login"</a>
                        <a class="navbar-item" href="/register">"Register"</a>
                    }
                    .into_any(),
                }}
            </div>
        </nav>
    }
}
