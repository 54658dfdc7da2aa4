//! Stats Cards Component
//!
//! Per-status totals over the whole cached list, ignoring the filter.

use leptos::prelude::*;

use crate::models::ComplaintStatus;
use crate::render::{status_badge, status_counts};
use crate::store::{use_complaint_store, ComplaintListCacheStoreFields};

#[component]
pub fn StatsCards() -> impl IntoView {
    let store = use_complaint_store();
    let counts = Memo::new(move |_| store.complaints().with(|list| status_counts(list)));
    let has_complaints = move || store.complaints().with(|list| !list.is_empty());

    let stat = move |status: ComplaintStatus| {
        let badge = status_badge(&status);
        let count = move || {
            let c = counts.get();
            match &status {
                ComplaintStatus::Pending => c.pending,
                ComplaintStatus::InProgress => c.in_progress,
                ComplaintStatus::Resolved => c.resolved,
                _ => c.rejected,
            }
        };
        view! {
            <div class="column">
                <div class="box stats-card has-text-centered" style=format!("border-top: 4px solid {}", badge.color)>
                    <p class="title is-4">{count}</p>
                    <p class="heading">{badge.label}</p>
                </div>
            </div>
        }
    };

    view! {
        <Show when=has_complaints>
            <div class="columns is-mobile stats-row">
                {ComplaintStatus::ALL.into_iter().map(stat).collect_view()}
            </div>
        </Show>
    }
}
