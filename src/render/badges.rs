//! Status and category lookup tables

use crate::models::{Category, ComplaintStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub icon: &'static str,
    pub class: &'static str,
    /// Accent color for card borders and stats
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBadge {
    pub icon: &'static str,
    pub class: String,
    /// Title-cased category name
    pub label: String,
}

pub fn status_badge(status: &ComplaintStatus) -> StatusBadge {
    match status {
        ComplaintStatus::Pending => StatusBadge {
            label: "Pending",
            icon: "fas fa-clock",
            class: "status-pending",
            color: "#f59e0b",
        },
        ComplaintStatus::InProgress => StatusBadge {
            label: "In Progress",
            icon: "fas fa-spinner fa-spin",
            class: "status-in_progress",
            color: "#3b82f6",
        },
        ComplaintStatus::Resolved => StatusBadge {
            label: "Resolved",
            icon: "fas fa-check-circle",
            class: "status-resolved",
            color: "#10b981",
        },
        ComplaintStatus::Rejected => StatusBadge {
            label: "Rejected",
            icon: "fas fa-times-circle",
            class: "status-rejected",
            color: "#ef4444",
        },
        ComplaintStatus::Unknown(_) => StatusBadge {
            label: "Unknown",
            icon: "fas fa-clock",
            class: "status-pending",
            color: "#6b7280",
        },
    }
}

pub fn category_icon(category: &Category) -> &'static str {
    match category {
        Category::Technical => "fas fa-cog",
        Category::Billing => "fas fa-dollar-sign",
        Category::Service => "fas fa-handshake",
        Category::Product => "fas fa-box",
        Category::Other => "fas fa-question-circle",
        Category::Unknown(_) => "fas fa-clipboard",
    }
}

pub fn category_badge(category: &Category) -> CategoryBadge {
    let class = match category {
        Category::Unknown(_) => "category-icon-default".to_string(),
        known => format!("category-icon-{}", known.as_str()),
    };
    CategoryBadge {
        icon: category_icon(category),
        class,
        label: capitalize(category.as_str()),
    }
}

/// Upper-case the first character
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
