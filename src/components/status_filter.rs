//! Status Filter Component
//!
//! Narrows the cached list; never refetches.

use leptos::prelude::*;

use crate::models::ComplaintStatus;
use crate::render::status_badge;
use crate::store::{store_set_filter, use_complaint_store, ComplaintListCacheStoreFields};

#[component]
pub fn StatusFilter() -> impl IntoView {
    let store = use_complaint_store();
    let current = move || {
        store
            .status_filter()
            .with(|f| f.as_ref().map(|s| s.as_str().to_string()).unwrap_or_default())
    };

    view! {
        <div class="field status-filter">
            <div class="control has-icons-left">
                <div class="select">
                    <select
                        id="statusFilter"
                        prop:value=current
                        on:change=move |ev| {
                            store_set_filter(&store, ComplaintStatus::from_filter(&event_target_value(&ev)))
                        }
                    >
                        <option value="">"All Statuses"</option>
                        {ComplaintStatus::ALL
                            .iter()
                            .map(|s| {
                                view! { <option value=s.as_str().to_string()>{status_badge(s).label}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>
                <span class="icon is-left"><i class="fas fa-filter"></i></span>
            </div>
        </div>
    }
}
