//! Complaint Desk App
//!
//! Restores the session, decides whether the requested page may render and
//! mounts it under the shared navigation.

use leptos::prelude::*;

use crate::components::{NavBar, NotificationCenter};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{
    AdminPage, DashboardPage, ForgotPasswordPage, HomePage, LoginPage, NotFoundPage, RegisterPage,
    ResetPasswordPage,
};
use crate::routes::{current_page, gate, navigate, Page, PageGate};
use crate::session::SessionStore;
use crate::storage::BrowserStorage;

fn page_view(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Login => view! { <LoginPage /> }.into_any(),
        Page::Register => view! { <RegisterPage /> }.into_any(),
        Page::ForgotPassword => view! { <ForgotPasswordPage /> }.into_any(),
        Page::ResetPassword => view! { <ResetPasswordPage /> }.into_any(),
        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
        Page::Admin => view! { <AdminPage /> }.into_any(),
        Page::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_document();
    let mut session = SessionStore::new(BrowserStorage);
    session.load();

    let requested = current_page();
    let decision = gate(requested, session.current());
    log::info!(target: "App", "{:?} -> {:?}", requested, decision);

    provide_context(AppContext::new(session, config));

    match decision {
        PageGate::Redirect(target) => {
            navigate(target);
            ().into_any()
        }
        PageGate::Render(page) => view! {
            <NavBar />
            <NotificationCenter />
            <main>{page_view(page)}</main>
        }
        .into_any(),
    }
}
