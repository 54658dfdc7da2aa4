//! View Models
//!
//! Pure mapping from complaint records to what the cards display. Leptos
//! components render these; nothing here touches the DOM.

mod badges;
mod dates;

pub use badges::*;
pub use dates::*;

use crate::models::{Complaint, ComplaintEdit, ComplaintStatus};

pub const EMPTY_HEADING: &str = "No complaints found";
pub const EMPTY_FIRST_COMPLAINT: &str = "Submit your first complaint using the form above.";
pub const EMPTY_NO_MATCH: &str = "No complaints match the selected filter.";
pub const EMPTY_ADMIN: &str = "All complaints will appear here when submitted.";

#[derive(Debug, Clone, PartialEq)]
pub struct EmptyState {
    pub icon: &'static str,
    pub heading: &'static str,
    pub message: &'static str,
}

/// Either an empty-state message or the cards to show
#[derive(Debug, Clone, PartialEq)]
pub enum ListView<C> {
    Empty(EmptyState),
    Cards(Vec<C>),
}

/// One complaint as shown on the user dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct ComplaintCard {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: CategoryBadge,
    pub status: StatusBadge,
    pub screenshot_url: Option<String>,
    pub admin_response: Option<String>,
    pub created: String,
    pub updated: String,
}

/// One complaint in the admin console, with the editable record
#[derive(Debug, Clone, PartialEq)]
pub struct AdminComplaintCard {
    pub card: ComplaintCard,
    /// "Name (email)"
    pub submitter: String,
    pub edit: ComplaintEdit,
}

/// Public URL of an uploaded screenshot
pub fn screenshot_url(path: &str) -> String {
    if path.starts_with('/') || path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

fn non_blank(text: &Option<String>) -> Option<String> {
    text.as_ref()
        .filter(|s| !s.trim().is_empty())
        .cloned()
}

pub fn complaint_card(complaint: &Complaint, clock: &Clock) -> ComplaintCard {
    ComplaintCard {
        id: complaint.id,
        title: complaint.title.clone(),
        description: complaint.description.clone(),
        category: category_badge(&complaint.category),
        status: status_badge(&complaint.status),
        screenshot_url: non_blank(&complaint.screenshot_path).map(|p| screenshot_url(&p)),
        admin_response: non_blank(&complaint.admin_notes),
        created: clock.label(complaint.created_at.0),
        updated: clock.label(complaint.updated_at.0),
    }
}

pub fn admin_complaint_card(complaint: &Complaint, clock: &Clock) -> AdminComplaintCard {
    let name = complaint.user_name.as_deref().unwrap_or("Unknown");
    let email = complaint.user_email.as_deref().unwrap_or("Unknown");
    AdminComplaintCard {
        card: complaint_card(complaint, clock),
        submitter: format!("{} ({})", name, email),
        edit: ComplaintEdit::from_complaint(complaint),
    }
}

/// Dashboard list. `filter_active` picks the empty-state wording.
pub fn user_complaints_view(
    complaints: &[Complaint],
    filter_active: bool,
    clock: &Clock,
) -> ListView<ComplaintCard> {
    if complaints.is_empty() {
        return ListView::Empty(EmptyState {
            icon: "fas fa-inbox",
            heading: EMPTY_HEADING,
            message: if filter_active {
                EMPTY_NO_MATCH
            } else {
                EMPTY_FIRST_COMPLAINT
            },
        });
    }
    ListView::Cards(complaints.iter().map(|c| complaint_card(c, clock)).collect())
}

pub fn admin_complaints_view(
    complaints: &[Complaint],
    clock: &Clock,
) -> ListView<AdminComplaintCard> {
    if complaints.is_empty() {
        return ListView::Empty(EmptyState {
            icon: "fas fa-clipboard-list",
            heading: EMPTY_HEADING,
            message: EMPTY_ADMIN,
        });
    }
    ListView::Cards(
        complaints
            .iter()
            .map(|c| admin_complaint_card(c, clock))
            .collect(),
    )
}

/// Per-status totals for the dashboard stats cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub rejected: usize,
}

pub fn status_counts(complaints: &[Complaint]) -> StatusCounts {
    complaints
        .iter()
        .fold(StatusCounts::default(), |mut counts, complaint| {
            match complaint.status {
                ComplaintStatus::Pending => counts.pending += 1,
                ComplaintStatus::InProgress => counts.in_progress += 1,
                ComplaintStatus::Resolved => counts.resolved += 1,
                ComplaintStatus::Rejected => counts.rejected += 1,
                ComplaintStatus::Unknown(_) => {}
            }
            counts
        })
}
