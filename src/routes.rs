//! Page Routes
//!
//! Which page the server shell was loaded for, and whether the current
//! session may see it.

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Register,
    ForgotPassword,
    ResetPassword,
    Dashboard,
    Admin,
    NotFound,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Page::Home,
            "/login" => Page::Login,
            "/register" => Page::Register,
            "/forgot-password" => Page::ForgotPassword,
            "/reset-password" => Page::ResetPassword,
            "/dashboard" => Page::Dashboard,
            "/admin" => Page::Admin,
            _ => Page::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home | Page::NotFound => "/",
            Page::Login => "/login",
            Page::Register => "/register",
            Page::ForgotPassword => "/forgot-password",
            Page::ResetPassword => "/reset-password",
            Page::Dashboard => "/dashboard",
            Page::Admin => "/admin",
        }
    }

    /// Requires a session
    pub fn is_protected(&self) -> bool {
        matches!(self, Page::Dashboard | Page::Admin)
    }

    /// Pointless for a signed-in user
    pub fn is_auth_page(&self) -> bool {
        matches!(self, Page::Login | Page::Register | Page::ForgotPassword)
    }
}

/// Role-appropriate landing page
pub fn landing_page(is_admin: bool) -> Page {
    if is_admin {
        Page::Admin
    } else {
        Page::Dashboard
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageGate {
    Render(Page),
    Redirect(Page),
}

pub fn gate(page: Page, session: Option<&Session>) -> PageGate {
    match session {
        None if page.is_protected() => PageGate::Redirect(Page::Login),
        Some(session) if page.is_auth_page() => PageGate::Redirect(landing_page(session.is_admin())),
        _ => PageGate::Render(page),
    }
}

/// Leave the page (full navigation, the server serves every route)
pub fn navigate(page: Page) {
    log::info!(target: "Routes", "navigating to {}", page.path());
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(page.path());
    }
}

pub fn current_page() -> Page {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Page::from_path(&path))
        .unwrap_or(Page::NotFound)
}

/// Value of a query parameter, percent-decoded
pub fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            let value = value.replace('+', " ");
            percent_encoding::percent_decode_str(&value)
                .decode_utf8_lossy()
                .into_owned()
        })
}

pub fn current_query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    query_param(&search, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    fn session(is_admin: bool) -> Session {
        Session {
            token: "tok".to_string(),
            user: User {
                id: None,
                name: "Sam".to_string(),
                email: "sam@example.com".to_string(),
                is_admin,
            },
        }
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path("/dashboard/"), Page::Dashboard);
        assert_eq!(Page::from_path("/forgot-password"), Page::ForgotPassword);
        assert_eq!(Page::from_path("/nope"), Page::NotFound);
    }

    #[test]
    fn test_protected_page_without_session_redirects_to_login() {
        assert_eq!(gate(Page::Dashboard, None), PageGate::Redirect(Page::Login));
        assert_eq!(gate(Page::Admin, None), PageGate::Redirect(Page::Login));
        assert_eq!(gate(Page::Login, None), PageGate::Render(Page::Login));
        assert_eq!(gate(Page::ResetPassword, None), PageGate::Render(Page::ResetPassword));
    }

    #[test]
    fn test_auth_pages_redirect_signed_in_users() {
        let admin = session(true);
        let user = session(false);
        assert_eq!(gate(Page::Login, Some(&admin)), PageGate::Redirect(Page::Admin));
        assert_eq!(gate(Page::Register, Some(&user)), PageGate::Redirect(Page::Dashboard));
        assert_eq!(gate(Page::ForgotPassword, Some(&user)), PageGate::Redirect(Page::Dashboard));
        assert_eq!(gate(Page::Dashboard, Some(&user)), PageGate::Render(Page::Dashboard));
        assert_eq!(gate(Page::Home, Some(&admin)), PageGate::Render(Page::Home));
    }

    #[test]
    fn test_query_param() {
        assert_eq!(query_param("?token=abc%2Fdef&x=1", "token").as_deref(), Some("abc/def"));
        assert_eq!(query_param("?x=1", "token"), None);
        assert_eq!(query_param("token", "token").as_deref(), Some(""));
        assert_eq!(query_param("", "token"), None);
    }
}
