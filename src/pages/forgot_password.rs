//! Forgot Password Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{AuthCard, TextField};
use crate::components::{SubmitButton, SubmitButtonState};
use crate::context::{use_app_context, NotificationKind};
use crate::controllers::{self, BusyGuard};

const RESET_LINK_SENT: &str =
    "If the email exists, a reset link has been sent to your email address.";

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let ctx = use_app_context();
    let email = RwSignal::new(String::new());
    let button = SubmitButtonState::new("Send Reset Link");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let address = email.get_untracked();
        let api = ctx.api();
        spawn_local(async move {
            let _busy = BusyGuard::engage(&button, "Sending...");
            match controllers::forgot_password(&api, &address).await {
                Ok(()) => {
                    ctx.notify(RESET_LINK_SENT, NotificationKind::Info);
                    email.set(String::new());
                }
                Err(e) => ctx.notify_error(&e),
            }
        });
    };

    view! {
        <AuthCard title="Forgot Password" icon="fas fa-key">
            <p class="mb-4 has-text-grey">
                "Enter your email and we will send you a link to reset your password."
            </p>
            <form id="forgotPasswordForm" on:submit=on_submit>
                <TextField label="Email" id="email" kind="email" icon="fas fa-envelope" value=email />
                <SubmitButton state=button icon="fas fa-paper-plane" />
            </form>
            <p class="has-text-centered mt-4">
                <a href="/login">"Back to login"</a>
            </p>
        </AuthCard>
    }
}
