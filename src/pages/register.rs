//! Registration Page
//!
//! Creates an account and signs it in; the admin checkbox is sent as-is.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{AuthCard, TextField};
use crate::components::{SubmitButton, SubmitButtonState};
use crate::context::{use_app_context, NotificationKind};
use crate::controllers::{self, BusyGuard, RegisterForm};
use crate::routes::navigate;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app_context();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let is_admin = RwSignal::new(false);
    let button = SubmitButtonState::new("Register");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = RegisterForm {
            email: email.get_untracked(),
            name: name.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
            is_admin: is_admin.get_untracked(),
        };
        let min_length = ctx.config().min_password_length;
        let api = ctx.api();
        spawn_local(async move {
            let _busy = BusyGuard::engage(&button, "Creating account...");
            let mut store = ctx.session.get_untracked();
            match controllers::register(&api, &mut store, &form, min_length).await {
                Ok(landing) => {
                    ctx.session.set(store);
                    ctx.notify("Registration successful!", NotificationKind::Success);
                    navigate(landing);
                }
                Err(e) => ctx.notify_error(&e),
            }
        });
    };

    view! {
        <AuthCard title="Create Account" icon="fas fa-user-plus">
            <form id="registerForm" on:submit=on_submit>
                <TextField label="Full Name" id="name" icon="fas fa-user" value=name />
                <TextField label="Email" id="email" kind="email" icon="fas fa-envelope" value=email />
                <TextField label="Password" id="password" kind="password" icon="fas fa-lock" value=password />
                <TextField label="Confirm Password" id="confirmPassword" kind="password" icon="fas fa-lock" value=confirm />
                <div class="field">
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            id="isAdmin"
                            prop:checked=move || is_admin.get()
                            on:change=move |ev| is_admin.set(event_target_checked(&ev))
                        />
                        " Register as administrator"
                    </label>
                </div>
                <SubmitButton state=button icon="fas fa-user-plus" />
            </form>
            <p class="has-text-centered mt-4">
                "Already registered? "
                <a href="/login">"Login"</a>
            </p>
        </AuthCard>
    }
}
