//! Reset Password Page
//!
//! The token comes from the emailed link's query string.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{AuthCard, TextField};
use crate::components::{SubmitButton, SubmitButtonState};
use crate::context::{use_app_context, NotificationKind};
use crate::controllers::{self, BusyGuard, ResetPasswordForm};
use crate::routes::{current_query_param, navigate, Page};

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let ctx = use_app_context();
    // Read once; the link is not expected to change under us
    let token = StoredValue::new(current_query_param("token").unwrap_or_default());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let button = SubmitButtonState::new("Reset Password");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ResetPasswordForm {
            token: token.get_value(),
            new_password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
        };
        let config = ctx.config();
        let api = ctx.api();
        spawn_local(async move {
            let result = {
                let _busy = BusyGuard::engage(&button, "Resetting...");
                controllers::reset_password(&api, &form, config.min_password_length).await
            };
            match result {
                Ok(()) => {
                    ctx.notify(
                        "Password reset successfully! You can now login with your new password.",
                        NotificationKind::Success,
                    );
                    TimeoutFuture::new(config.reset_redirect_delay.as_millis() as u32).await;
                    navigate(Page::Login);
                }
                Err(e) => ctx.notify_error(&e),
            }
        });
    };

    view! {
        <AuthCard title="Reset Password" icon="fas fa-unlock-alt">
            <form id="resetPasswordForm" on:submit=on_submit>
                <TextField label="New Password" id="newPassword" kind="password" icon="fas fa-lock" value=password />
                <TextField label="Confirm Password" id="confirmPassword" kind="password" icon="fas fa-lock" value=confirm />
                <SubmitButton state=button icon="fas fa-check" />
            </form>
        </AuthCard>
    }
}
