//! Form Controllers
//!
//! What each form does once its fields are read: validate, call the API,
//! update the session. Components own the DOM side and show the outcome.

use crate::api::{ApiClient, AuthResponse, ComplaintDraft, HttpTransport, RegisterArgs, SubmitResponse};
use crate::error::{AppError, AppResult};
use crate::models::{Complaint, ComplaintEdit, ComplaintStatus};
use crate::routes::{landing_page, Page};
use crate::session::SessionStore;
use crate::storage::KeyValueStorage;

pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const MSG_MISSING_RESET_TOKEN: &str = "This reset link is missing its token";
pub const SUBMITTING_LABEL: &str = "Submitting...";

pub fn password_too_short(min_length: usize) -> String {
    format!("Password must be at least {} characters long", min_length)
}

/// Confirmation must match and the password must be long enough
pub fn validate_password_pair(password: &str, confirm: &str, min_length: usize) -> AppResult<()> {
    if password != confirm {
        return Err(AppError::Validation(MSG_PASSWORD_MISMATCH.to_string()));
    }
    if password.chars().count() < min_length {
        return Err(AppError::Validation(password_too_short(min_length)));
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub email: String,
    pub name: String,
    pub password: String,
    pub confirm_password: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ResetPasswordForm {
    pub token: String,
    pub new_password: String,
    pub confirm_password: String,
}

fn establish_session<S: KeyValueStorage>(
    store: &mut SessionStore<S>,
    response: AuthResponse,
) -> AppResult<Page> {
    let landing = landing_page(response.user.is_admin);
    store.save(&response.access_token, response.user)?;
    Ok(landing)
}

/// Sign in; returns the page to go to
pub async fn login<T: HttpTransport, S: KeyValueStorage>(
    api: &ApiClient<T>,
    store: &mut SessionStore<S>,
    form: &LoginForm,
) -> AppResult<Page> {
    let response = api.login(&form.email, &form.password).await?;
    establish_session(store, response)
}

pub async fn register<T: HttpTransport, S: KeyValueStorage>(
    api: &ApiClient<T>,
    store: &mut SessionStore<S>,
    form: &RegisterForm,
    min_password_length: usize,
) -> AppResult<Page> {
    validate_password_pair(&form.password, &form.confirm_password, min_password_length)?;
    let args = RegisterArgs {
        email: &form.email,
        name: &form.name,
        password: &form.password,
        is_admin: form.is_admin,
    };
    let response = api.register(&args).await?;
    establish_session(store, response)
}

pub async fn forgot_password<T: HttpTransport>(api: &ApiClient<T>, email: &str) -> AppResult<()> {
    api.forgot_password(email).await?;
    Ok(())
}

pub async fn reset_password<T: HttpTransport>(
    api: &ApiClient<T>,
    form: &ResetPasswordForm,
    min_password_length: usize,
) -> AppResult<()> {
    validate_password_pair(&form.new_password, &form.confirm_password, min_password_length)?;
    if form.token.trim().is_empty() {
        return Err(AppError::Validation(MSG_MISSING_RESET_TOKEN.to_string()));
    }
    api.reset_password(&form.token, &form.new_password).await?;
    Ok(())
}

pub fn logout<S: KeyValueStorage>(store: &mut SessionStore<S>) -> Page {
    store.clear();
    Page::Home
}

/// A submit button that can show a busy state
pub trait SubmitControl {
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
    fn set_disabled(&self, disabled: bool);
}

/// Puts a control into its busy state; dropping the guard restores the
/// original label and re-enables it, whatever happened in between.
pub struct BusyGuard<'a, C: SubmitControl> {
    control: &'a C,
    original_label: String,
}

impl<'a, C: SubmitControl> BusyGuard<'a, C> {
    pub fn engage(control: &'a C, busy_label: &str) -> Self {
        let original_label = control.label();
        control.set_disabled(true);
        control.set_label(busy_label);
        Self {
            control,
            original_label,
        }
    }
}

impl<C: SubmitControl> Drop for BusyGuard<'_, C> {
    fn drop(&mut self) {
        self.control.set_label(&self.original_label);
        self.control.set_disabled(false);
    }
}

/// Upload a complaint with the submit control busy for the duration
pub async fn submit_complaint<T: HttpTransport, C: SubmitControl>(
    api: &ApiClient<T>,
    draft: ComplaintDraft,
    control: &C,
) -> AppResult<SubmitResponse> {
    let _busy = BusyGuard::engage(control, SUBMITTING_LABEL);
    let response = api.submit_complaint(draft).await?;
    log::info!(target: "Complaints", "submitted complaint {:?}", response.complaint_id);
    Ok(response)
}

pub async fn load_my_complaints<T: HttpTransport>(api: &ApiClient<T>) -> AppResult<Vec<Complaint>> {
    let complaints = api.list_my_complaints().await?;
    log::info!(target: "Complaints", "loaded {} own complaints", complaints.len());
    Ok(complaints)
}

pub async fn load_all_complaints<T: HttpTransport>(api: &ApiClient<T>) -> AppResult<Vec<Complaint>> {
    let complaints = api.list_all_complaints().await?;
    log::info!(target: "Complaints", "loaded {} complaints for review", complaints.len());
    Ok(complaints)
}

/// One admin card's edit state: the last acknowledged record. Outgoing
/// edits are built from it; a rejected save falls back to it.
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    saved: ComplaintEdit,
}

impl EditDraft {
    pub fn new(saved: ComplaintEdit) -> Self {
        Self { saved }
    }

    pub fn saved(&self) -> &ComplaintEdit {
        &self.saved
    }

    /// Edit sent when the status select changes; keeps the unsaved notes
    pub fn status_change(&self, next: ComplaintStatus, notes: &str) -> ComplaintEdit {
        self.saved.clone().with_status(next).with_notes(notes)
    }

    /// Edit sent by the notes button; keeps the selected status
    pub fn notes_change(&self, status: ComplaintStatus, notes: &str) -> ComplaintEdit {
        self.saved.clone().with_status(status).with_notes(notes)
    }

    pub fn acknowledge(&mut self, edit: ComplaintEdit) {
        self.saved = edit;
    }

    /// Status the select shows again after a failed save
    pub fn rejected_status(&self) -> ComplaintStatus {
        self.saved.status.clone()
    }
}

/// Send status and notes together
pub async fn save_complaint_edit<T: HttpTransport>(
    api: &ApiClient<T>,
    id: u64,
    edit: &ComplaintEdit,
) -> AppResult<()> {
    api.update_complaint(id, edit).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::api::mock::MockTransport;
    use crate::api::RequestBody;
    use crate::error::ApiError;
    use crate::models::Category;
    use crate::storage::memory::MemoryStorage;

    const ADMIN_AUTH: &str = r#"{"access_token":"tok-a","token_type":"bearer","user":{"email":"root@example.com","name":"Root","is_admin":true}}"#;
    const USER_AUTH: &str = r#"{"access_token":"tok-u","token_type":"bearer","user":{"email":"u@example.com","name":"Una","is_admin":false}}"#;

    #[derive(Default)]
    struct FakeButton {
        label: RefCell<String>,
        disabled: Cell<bool>,
    }

    impl FakeButton {
        fn new(label: &str) -> Rc<Self> {
            Rc::new(Self {
                label: RefCell::new(label.to_string()),
                disabled: Cell::new(false),
            })
        }
    }

    impl SubmitControl for Rc<FakeButton> {
        fn label(&self) -> String {
            self.label.borrow().clone()
        }
        fn set_label(&self, label: &str) {
            *self.label.borrow_mut() = label.to_string();
        }
        fn set_disabled(&self, disabled: bool) {
            self.disabled.set(disabled);
        }
    }

    fn draft() -> ComplaintDraft {
        ComplaintDraft {
            title: "Overcharged".to_string(),
            description: "Billed twice".to_string(),
            category: Category::Billing,
            screenshot: None,
        }
    }

    #[test]
    fn test_password_validation() {
        assert_eq!(
            validate_password_pair("secret1", "secret2", 6),
            Err(AppError::Validation(MSG_PASSWORD_MISMATCH.to_string()))
        );
        assert_eq!(
            validate_password_pair("abc", "abc", 6),
            Err(AppError::Validation(
                "Password must be at least 6 characters long".to_string()
            ))
        );
        assert_eq!(validate_password_pair("abcdef", "abcdef", 6), Ok(()));
    }

    #[tokio::test]
    async fn test_admin_login_lands_on_admin_console() {
        let transport = MockTransport::new().respond(200, ADMIN_AUTH);
        let api = ApiClient::new(transport.clone(), "");
        let storage = MemoryStorage::new();
        let mut store = SessionStore::new(storage.clone());

        let form = LoginForm {
            email: "root@example.com".to_string(),
            password: "pw".to_string(),
        };
        let page = login(&api, &mut store, &form).await.unwrap();

        assert_eq!(page, Page::Admin);
        assert_eq!(store.token(), Some("tok-a"));
        let mut reloaded = SessionStore::new(storage);
        reloaded.load();
        assert!(reloaded.current().unwrap().is_admin());

        match &transport.requests()[0].body {
            RequestBody::Json(json) => {
                let body: serde_json::Value = serde_json::from_str(json).unwrap();
                assert_eq!(body["email"], "root@example.com");
                assert_eq!(body["password"], "pw");
            }
            other => panic!("expected JSON body, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_user_login_lands_on_dashboard() {
        let api = ApiClient::new(MockTransport::new().respond(200, USER_AUTH), "");
        let mut store = SessionStore::new(MemoryStorage::new());
        let page = login(&api, &mut store, &LoginForm::default()).await.unwrap();
        assert_eq!(page, Page::Dashboard);
        assert_eq!(store.user().map(|u| u.name.as_str()), Some("Una"));
    }

    #[tokio::test]
    async fn test_failed_login_keeps_session_empty() {
        let transport =
            MockTransport::new().respond(401, r#"{"detail":"Incorrect email or password"}"#);
        let api = ApiClient::new(transport, "");
        let mut store = SessionStore::new(MemoryStorage::new());

        let err = login(&api, &mut store, &LoginForm::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Incorrect email or password");
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_mismatch_never_hits_network() {
        let transport = MockTransport::new();
        let api = ApiClient::new(transport.clone(), "");
        let mut store = SessionStore::new(MemoryStorage::new());
        let form = RegisterForm {
            email: "a@b.c".to_string(),
            name: "A".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret2".to_string(),
            is_admin: false,
        };

        let err = register(&api, &mut store, &form, 6).await.unwrap_err();
        assert_eq!(err.to_string(), MSG_PASSWORD_MISMATCH);
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_register_sends_admin_flag() {
        let transport = MockTransport::new().respond(200, ADMIN_AUTH);
        let api = ApiClient::new(transport.clone(), "");
        let mut store = SessionStore::new(MemoryStorage::new());
        let form = RegisterForm {
            email: "root@example.com".to_string(),
            name: "Root".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            is_admin: true,
        };

        assert_eq!(register(&api, &mut store, &form, 6).await.unwrap(), Page::Admin);
        let RequestBody::Json(json) = &transport.requests()[0].body else {
            panic!("expected JSON body");
        };
        let body: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(body["is_admin"], true);
        assert_eq!(body["name"], "Root");
    }

    #[tokio::test]
    async fn test_reset_password_validation_and_request() {
        let transport = MockTransport::new().respond(200, r#"{"message":"Password reset successfully"}"#);
        let api = ApiClient::new(transport.clone(), "");

        let short = ResetPasswordForm {
            token: "t".to_string(),
            new_password: "abc".to_string(),
            confirm_password: "abc".to_string(),
        };
        assert!(matches!(
            reset_password(&api, &short, 6).await,
            Err(AppError::Validation(_))
        ));
        let tokenless = ResetPasswordForm {
            token: String::new(),
            new_password: "abcdef".to_string(),
            confirm_password: "abcdef".to_string(),
        };
        assert_eq!(
            reset_password(&api, &tokenless, 6).await,
            Err(AppError::Validation(MSG_MISSING_RESET_TOKEN.to_string()))
        );
        assert_eq!(transport.request_count(), 0);

        let ok = ResetPasswordForm {
            token: "t".to_string(),
            ..tokenless
        };
        reset_password(&api, &ok, 6).await.unwrap();
        assert_eq!(transport.requests()[0].url, "/api/reset-password");
    }

    #[tokio::test]
    async fn test_submit_disables_button_while_in_flight() {
        let button = FakeButton::new("Submit Complaint");
        let observed = Rc::new(RefCell::new(None));
        let seen = observed.clone();
        let probe = button.clone();
        let transport = MockTransport::new()
            .respond(200, r#"{"message":"Complaint submitted successfully","complaint_id":4}"#)
            .on_send(move |_| {
                *seen.borrow_mut() = Some((probe.disabled.get(), probe.label.borrow().clone()));
            });
        let api = ApiClient::new(transport, "").with_token(Some("tok".to_string()));

        let response = submit_complaint(&api, draft(), &button).await.unwrap();

        assert_eq!(response.complaint_id, Some(4));
        assert_eq!(
            observed.borrow().clone(),
            Some((true, SUBMITTING_LABEL.to_string()))
        );
        assert!(!button.disabled.get());
        assert_eq!(button.label(), "Submit Complaint");
    }

    #[tokio::test]
    async fn test_submit_restores_button_after_failure() {
        let button = FakeButton::new("Submit Complaint");
        let api = ApiClient::new(
            MockTransport::new().fail(ApiError::Network("offline".to_string())),
            "",
        );

        let err = submit_complaint(&api, draft(), &button).await.unwrap_err();
        assert_eq!(err.to_string(), "Network error: offline");
        assert!(!button.disabled.get());
        assert_eq!(button.label(), "Submit Complaint");
    }

    #[tokio::test]
    async fn test_submit_uses_upload_fallback_message() {
        let button = FakeButton::new("Submit");
        let api = ApiClient::new(MockTransport::new().respond(500, "oops"), "");
        let err = submit_complaint(&api, draft(), &button).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to submit complaint");
    }

    #[tokio::test]
    async fn test_save_edit_sends_status_and_notes_together() {
        let transport = MockTransport::new().respond(200, r#"{"message":"Complaint updated successfully"}"#);
        let api = ApiClient::new(transport.clone(), "");
        let edit = ComplaintEdit {
            status: ComplaintStatus::Resolved,
            admin_notes: Some("Refund issued".to_string()),
        };

        save_complaint_edit(&api, 12, &edit).await.unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.url, "/api/admin/complaints/12");
        let RequestBody::Json(json) = &request.body else {
            panic!("expected JSON body");
        };
        assert_eq!(json, r#"{"status":"resolved","admin_notes":"Refund issued"}"#);
    }

    #[test]
    fn test_edit_draft_carries_notes_with_status() {
        let draft = EditDraft::new(ComplaintEdit {
            status: ComplaintStatus::Pending,
            admin_notes: Some("old".to_string()),
        });
        assert_eq!(
            draft.status_change(ComplaintStatus::Resolved, "typed but unsaved"),
            ComplaintEdit {
                status: ComplaintStatus::Resolved,
                admin_notes: Some("typed but unsaved".to_string()),
            }
        );
        assert_eq!(
            draft.notes_change(ComplaintStatus::InProgress, ""),
            ComplaintEdit {
                status: ComplaintStatus::InProgress,
                admin_notes: Some(String::new()),
            }
        );
        // Building edits never moves the saved record
        assert_eq!(draft.rejected_status(), ComplaintStatus::Pending);
    }

    #[tokio::test]
    async fn test_failed_status_save_reverts_to_last_acknowledged() {
        let transport = MockTransport::new()
            .respond(200, r#"{"message":"Complaint updated successfully"}"#)
            .respond(403, r#"{"detail":"Not enough permissions"}"#);
        let api = ApiClient::new(transport.clone(), "");
        let mut draft = EditDraft::new(ComplaintEdit {
            status: ComplaintStatus::Pending,
            admin_notes: None,
        });

        let first = draft.status_change(ComplaintStatus::InProgress, "on it");
        save_complaint_edit(&api, 5, &first).await.unwrap();
        draft.acknowledge(first.clone());
        assert_eq!(draft.saved(), &first);

        let second = draft.status_change(ComplaintStatus::Rejected, "on it");
        let err = save_complaint_edit(&api, 5, &second).await.unwrap_err();
        assert_eq!(err.to_string(), "Not enough permissions");
        assert_eq!(draft.rejected_status(), ComplaintStatus::InProgress);
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_load_complaints() {
        let body = r#"[{"id":1,"title":"t","description":"d","category":"product","status":"pending",
            "screenshot_path":null,"admin_notes":null,"user_id":3,
            "created_at":"2024-03-01T10:00:00","updated_at":"2024-03-01T10:00:00"}]"#;
        let api = ApiClient::new(MockTransport::new().respond(200, body), "");
        let complaints = load_my_complaints(&api).await.unwrap();
        assert_eq!(complaints.len(), 1);
        assert_eq!(complaints[0].category, Category::Product);
    }

    #[test]
    fn test_logout_clears_session() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::new(storage.clone());
        store
            .save(
                "tok",
                crate::models::User {
                    id: None,
                    name: "N".to_string(),
                    email: "n@example.com".to_string(),
                    is_admin: false,
                },
            )
            .unwrap();
        assert_eq!(logout(&mut store), Page::Home);
        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
    }
}
