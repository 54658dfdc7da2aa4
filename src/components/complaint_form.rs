//! Complaint Form Component
//!
//! Title, description, category and an optional screenshot, sent as one
//! multipart upload.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{create_file_drop_signals, reset, selected_file};

use super::{FileUploadArea, SubmitButton, SubmitButtonState};
use crate::api::ComplaintDraft;
use crate::context::{use_app_context, NotificationKind};
use crate::controllers;
use crate::models::Category;

#[component]
pub fn ComplaintForm(
    /// Runs after a successful submit, e.g. to reload the list
    #[prop(optional)]
    on_submitted: Option<Callback<()>>,
) -> impl IntoView {
    let ctx = use_app_context();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(Category::Product);
    let drop = create_file_drop_signals();
    let file_input = NodeRef::<Input>::new();
    let button = SubmitButtonState::new("Submit Complaint");

    let clear_form = move || {
        title.set(String::new());
        description.set(String::new());
        category.set(Category::Product);
        reset(&drop);
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ComplaintDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            category: category.get_untracked(),
            screenshot: selected_file(&drop),
        };
        let api = ctx.api();
        spawn_local(async move {
            match controllers::submit_complaint(&api, draft, &button).await {
                Ok(_) => {
                    ctx.notify("Complaint submitted successfully!", NotificationKind::Success);
                    clear_form();
                    if let Some(callback) = on_submitted {
                        callback.run(());
                    }
                }
                Err(e) => ctx.notify_error(&e),
            }
        });
    };

    view! {
        <form id="complaintForm" class="box" on:submit=on_submit>
            <h2 class="title is-5">"Submit a Complaint"</h2>
            <div class="field">
                <label class="label" for="title">"Title"</label>
                <div class="control">
                    <input
                        id="title"
                        class="input"
                        type="text"
                        required
                        placeholder="Brief summary of the issue"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="field">
                <label class="label" for="category">"Category"</label>
                <div class="control">
                    <div class="select is-fullwidth">
                        <select
                            id="category"
                            prop:value=move || category.get().as_str().to_string()
                            on:change=move |ev| category.set(Category::from_str(&event_target_value(&ev)))
                        >
                            {Category::ALL
                                .iter()
                                .map(|c| {
                                    let value = c.as_str().to_string();
                                    let label = crate::render::capitalize(&value);
                                    view! { <option value=value>{label}</option> }
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>
            </div>
            <div class="field">
                <label class="label" for="description">"Description"</label>
                <div class="control">
                    <textarea
                        id="description"
                        class="textarea"
                        required
                        placeholder="Describe what happened"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </div>
            </div>
            <FileUploadArea drop=drop input_ref=file_input />
            <SubmitButton state=button icon="fas fa-paper-plane" />
        </form>
    }
}
