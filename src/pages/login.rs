//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{AuthCard, TextField};
use crate::components::{SubmitButton, SubmitButtonState};
use crate::context::{use_app_context, NotificationKind};
use crate::controllers::{self, BusyGuard, LoginForm};
use crate::routes::navigate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let button = SubmitButtonState::new("Login");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let api = ctx.api();
        spawn_local(async move {
            let _busy = BusyGuard::engage(&button, "Logging in...");
            let mut store = ctx.session.get_untracked();
            match controllers::login(&api, &mut store, &form).await {
                Ok(landing) => {
                    ctx.session.set(store);
                    ctx.notify("Login successful!", NotificationKind::Success);
                    navigate(landing);
                }
                Err(e) => ctx.notify_error(&e),
            }
        });
    };

    view! {
        <AuthCard title="Login" icon="fas fa-sign-in-alt">
            <form id="loginForm" on:submit=on_submit>
                <TextField label="Email" id="email" kind="email" icon="fas fa-envelope" value=email />
                <TextField label="Password" id="password" kind="password" icon="fas fa-lock" value=password />
                <p class="mb-4 has-text-right">
                    <a href="/forgot-password">"Forgot password?"</a>
                </p>
                <SubmitButton state=button icon="fas fa-sign-in-alt" />
            </form>
            <p class="has-text-centered mt-4">
                "No account yet? "
                <a href="/register">"Register"</a>
            </p>
        </AuthCard>
    }
}
