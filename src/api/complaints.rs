//! Complaint Endpoints

use serde::Deserialize;

use super::{ApiClient, HttpTransport, MultipartForm};
use crate::error::ApiError;
use crate::models::{Category, Complaint, ComplaintEdit};

/// Upload fallback when the server gives no message
pub const SUBMIT_FALLBACK_MESSAGE: &str = "Failed to submit complaint";

/// Fields of the complaint form
#[derive(Debug, Clone)]
pub struct ComplaintDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub screenshot: Option<web_sys::File>,
}

impl ComplaintDraft {
    pub fn into_form(self) -> MultipartForm {
        MultipartForm::default()
            .text("title", &self.title)
            .text("description", &self.description)
            .text("category", self.category.as_str())
            .file("screenshot", self.screenshot)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub complaint_id: Option<u64>,
}

impl<T: HttpTransport> ApiClient<T> {
    pub async fn submit_complaint(&self, draft: ComplaintDraft) -> Result<SubmitResponse, ApiError> {
        self.post_multipart("/api/complaints", draft.into_form(), SUBMIT_FALLBACK_MESSAGE)
            .await
    }

    /// The caller's own complaints
    pub async fn list_my_complaints(&self) -> Result<Vec<Complaint>, ApiError> {
        self.get_json("/api/complaints").await
    }

    /// Every complaint with submitter identity (admin only)
    pub async fn list_all_complaints(&self) -> Result<Vec<Complaint>, ApiError> {
        self.get_json("/api/admin/complaints").await
    }

    /// The response body is only an acknowledgment and is not inspected
    pub async fn update_complaint(&self, id: u64, edit: &ComplaintEdit) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .put_json(&format!("/api/admin/complaints/{}", id), edit)
            .await?;
        Ok(())
    }
}
