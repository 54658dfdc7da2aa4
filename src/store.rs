//! Complaint List Store
//!
//! Last fetched complaints plus the active status filter. Uses Leptos
//! reactive_stores so the list and filter update independently.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Complaint, ComplaintEdit, ComplaintStatus};

/// Cached complaints for the current view. Never a source of truth.
#[derive(Clone, Debug, Default, Store)]
pub struct ComplaintListCache {
    /// Most recent fetch, replaced wholesale on every fetch
    pub complaints: Vec<Complaint>,
    /// Status filter (None = all)
    pub status_filter: Option<ComplaintStatus>,
}

impl ComplaintListCache {
    /// Complaints passing the filter; no network involved
    pub fn visible(&self) -> Vec<Complaint> {
        filter_by_status(&self.complaints, self.status_filter.as_ref())
    }

    pub fn filter_active(&self) -> bool {
        self.status_filter.is_some()
    }
}

pub fn filter_by_status(complaints: &[Complaint], filter: Option<&ComplaintStatus>) -> Vec<Complaint> {
    complaints
        .iter()
        .filter(|c| filter.map_or(true, |status| &c.status == status))
        .cloned()
        .collect()
}

/// Apply an acknowledged admin edit to a cached complaint
pub fn apply_edit(complaints: &mut [Complaint], id: u64, edit: &ComplaintEdit) -> bool {
    match complaints.iter_mut().find(|c| c.id == id) {
        Some(complaint) => {
            complaint.status = edit.status.clone();
            complaint.admin_notes = edit.admin_notes.clone();
            true
        }
        None => false,
    }
}

/// Type alias for the store
pub type ComplaintStore = Store<ComplaintListCache>;

/// Create an empty store and provide it to the page's components
pub fn provide_complaint_store() -> ComplaintStore {
    let store = Store::new(ComplaintListCache::default());
    provide_context(store);
    store
}

/// Get the complaint store from context
pub fn use_complaint_store() -> ComplaintStore {
    expect_context::<ComplaintStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the cached list after a successful fetch
pub fn store_replace_complaints(store: &ComplaintStore, complaints: Vec<Complaint>) {
    store.complaints().set(complaints);
}

/// Patch a complaint after the server acknowledged an edit
pub fn store_apply_edit(store: &ComplaintStore, id: u64, edit: &ComplaintEdit) {
    let applied = apply_edit(&mut store.complaints().write(), id, edit);
    if !applied {
        log::warn!(target: "Store", "edited complaint {} is not cached", id);
    }
}

pub fn store_set_filter(store: &ComplaintStore, filter: Option<ComplaintStatus>) {
    store.status_filter().set(filter);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures::complaint;

    #[test]
    fn test_visible_respects_filter() {
        let mut cache = ComplaintListCache {
            complaints: vec![
                complaint(1, "pending"),
                complaint(2, "resolved"),
                complaint(3, "pending"),
            ],
            status_filter: None,
        };
        assert_eq!(cache.visible().len(), 3);
        assert!(!cache.filter_active());

        cache.status_filter = Some(ComplaintStatus::Pending);
        let ids: Vec<u64> = cache.visible().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);

        cache.status_filter = Some(ComplaintStatus::Rejected);
        assert!(cache.visible().is_empty());
        assert!(cache.filter_active());
    }

    #[test]
    fn test_apply_edit_patches_status_and_notes() {
        let mut list = vec![complaint(1, "pending"), complaint(2, "pending")];
        let edit = ComplaintEdit {
            status: ComplaintStatus::Resolved,
            admin_notes: Some("Done".to_string()),
        };
        assert!(apply_edit(&mut list, 2, &edit));
        assert_eq!(list[1].status, ComplaintStatus::Resolved);
        assert_eq!(list[1].admin_notes.as_deref(), Some("Done"));
        assert_eq!(list[0].status, ComplaintStatus::Pending);
        assert!(!apply_edit(&mut list, 99, &edit));
    }
}
