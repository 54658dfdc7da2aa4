//! UI Components
//!
//! Reusable Leptos components.

mod admin_complaint_card;
mod complaint_card;
mod complaint_form;
mod empty_state;
mod file_upload_area;
mod image_modal;
mod nav_bar;
mod notification_center;
mod stats_cards;
mod status_filter;
mod submit_button;

pub use admin_complaint_card::AdminComplaintCardView;
pub use complaint_card::ComplaintCardView;
pub use complaint_form::ComplaintForm;
pub use empty_state::EmptyStateView;
pub use file_upload_area::FileUploadArea;
pub use image_modal::ImageModal;
pub use nav_bar::NavBar;
pub use notification_center::NotificationCenter;
pub use stats_cards::StatsCards;
pub use status_filter::StatusFilter;
pub use submit_button::{SubmitButton, SubmitButtonState};
