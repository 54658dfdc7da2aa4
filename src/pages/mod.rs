//! Pages
//!
//! One component per server route.

mod admin;
mod dashboard;
mod forgot_password;
mod home;
mod login;
mod not_found;
mod register;
mod reset_password;

pub use admin::AdminPage;
pub use dashboard::DashboardPage;
pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use reset_password::ResetPasswordPage;

use leptos::prelude::*;

use crate::context::{AppContext, NotificationKind};
use crate::error::AppResult;
use crate::models::Complaint;
use crate::store::{store_replace_complaints, ComplaintStore};

const LOAD_FAILED: &str = "Failed to load complaints";

/// Replace the cached list with a fresh fetch, or report the failure
fn finish_load(ctx: AppContext, store: ComplaintStore, result: AppResult<Vec<Complaint>>) {
    match result {
        Ok(complaints) => store_replace_complaints(&store, complaints),
        Err(e) => {
            log::warn!(target: "Complaints", "load failed: {}", e);
            ctx.notify(LOAD_FAILED, NotificationKind::Danger);
        }
    }
}

/// Centered card used by the sign-in style pages
#[component]
fn AuthCard(#[prop(into)] title: String, icon: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="section">
            <div class="columns is-centered">
                <div class="column is-5">
                    <div class="box auth-card fade-in">
                        <h1 class="title is-4 has-text-centered">
                            <span class="icon"><i class=icon></i></span>
                            " "
                            {title}
                        </h1>
                        {children()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Labeled text input bound to a signal
#[component]
fn TextField(
    #[prop(into)] label: String,
    id: &'static str,
    #[prop(default = "text")] kind: &'static str,
    icon: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="label" for=id>{label}</label>
            <div class="control has-icons-left">
                <input
                    id=id
                    class="input"
                    type=kind
                    required
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <span class="icon is-small is-left"><i class=icon></i></span>
            </div>
        </div>
    }
}
