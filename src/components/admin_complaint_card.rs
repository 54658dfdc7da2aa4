//! Admin Complaint Card Component
//!
//! Complaint card with submitter identity, a status select and a notes
//! editor. Status changes save immediately; notes save on their button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::complaint_card::{CardDates, CardHeader, ScreenshotThumb};
use crate::context::{use_app_context, NotificationKind};
use crate::controllers::{self, EditDraft};
use crate::models::{ComplaintEdit, ComplaintStatus};
use crate::render::{status_badge, AdminComplaintCard};
use crate::store::{store_apply_edit, use_complaint_store};

#[component]
pub fn AdminComplaintCardView(
    card: AdminComplaintCard,
    on_enlarge: Callback<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_complaint_store();
    let id = card.card.id;

    let draft = StoredValue::new(EditDraft::new(card.edit.clone()));
    let status = RwSignal::new(card.edit.status.clone());
    let notes = RwSignal::new(card.edit.admin_notes.clone().unwrap_or_default());
    let saving = RwSignal::new(false);

    let save = move |edit: ComplaintEdit, success: &'static str| {
        saving.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match controllers::save_complaint_edit(&api, id, &edit).await {
                Ok(()) => {
                    draft.update_value(|d| d.acknowledge(edit.clone()));
                    store_apply_edit(&store, id, &edit);
                    ctx.notify(success, NotificationKind::Success);
                }
                Err(e) => {
                    status.set(draft.with_value(EditDraft::rejected_status));
                    ctx.notify_error(&e);
                }
            }
            saving.set(false);
        });
    };

    let on_status_change = move |ev: web_sys::Event| {
        let next = ComplaintStatus::from_str(&event_target_value(&ev));
        status.set(next.clone());
        let edit = draft.with_value(|d| d.status_change(next, &notes.get_untracked()));
        save(edit, "Status updated successfully!");
    };

    let on_save_notes = move |_| {
        let edit = draft.with_value(|d| d.notes_change(status.get_untracked(), &notes.get_untracked()));
        save(edit, "Notes saved successfully!");
    };

    let border = format!("border-left: 4px solid {}", card.card.status.color);
    let inner = card.card.clone();

    view! {
        <div class="box complaint-card admin-card fade-in" style=border>
            <CardHeader card=inner.clone() />
            <p class="is-size-7 has-text-grey mt-2">
                <i class="fas fa-user"></i>
                " "
                {card.submitter.clone()}
            </p>
            <p class="complaint-description mt-3">{inner.description.clone()}</p>
            {inner.screenshot_url.clone().map(|url| view! { <ScreenshotThumb url=url on_enlarge=on_enlarge /> })}

            <div class="columns mt-3">
                <div class="column is-one-third">
                    <label class="label is-small">"Status"</label>
                    <div class="select is-small is-fullwidth">
                        <select
                            prop:value=move || status.get().as_str().to_string()
                            disabled=move || saving.get()
                            on:change=on_status_change
                        >
                            {ComplaintStatus::ALL
                                .iter()
                                .map(|s| {
                                    view! { <option value=s.as_str().to_string()>{status_badge(s).label}</option> }
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>
                <div class="column">
                    <label class="label is-small">"Admin Notes"</label>
                    <textarea
                        class="textarea is-small"
                        rows="2"
                        placeholder="Add notes for the customer"
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    ></textarea>
                    <button
                        class="button is-small is-link mt-2"
                        disabled=move || saving.get()
                        on:click=on_save_notes
                    >
                        <span class="icon"><i class="fas fa-save"></i></span>
                        <span>"Save Notes"</span>
                    </button>
                </div>
            </div>

            <CardDates created=inner.created.clone() updated=inner.updated.clone() />
        </div>
    }
}
