//! File Upload Area Component
//!
//! Click-or-drop area backed by a hidden file input.

use leptos::html::Input;
use leptos::prelude::*;
use leptos_dragdrop::{
    make_on_dragleave, make_on_dragover, make_on_drop, make_on_input_change, FileDropSignals,
};

#[component]
pub fn FileUploadArea(
    drop: FileDropSignals,
    /// The hidden input, so the owning form can clear it
    input_ref: NodeRef<Input>,
) -> impl IntoView {
    let open_picker = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div class="field">
            <label class="label">"Screenshot (optional)"</label>
            <input
                type="file"
                id="screenshot"
                accept="image/*"
                class="is-hidden"
                node_ref=input_ref
                on:change=make_on_input_change(drop)
            />
            <div
                class=move || if drop.is_over_read.get() { "file-upload-area dragover" } else { "file-upload-area" }
                on:click=open_picker
                on:dragover=make_on_dragover(drop)
                on:dragleave=make_on_dragleave(drop)
                on:drop=make_on_drop(drop)
            >
                {move || match drop.summary_read.get() {
                    Some(file) => view! {
                        <div class="has-text-centered">
                            <i class="fas fa-check-circle has-text-success fa-2x mb-2"></i>
                            <p><strong>{file.name.clone()}</strong></p>
                            <p class="has-text-grey">{file.size_label()}</p>
                            <p class="has-text-grey is-size-7">"Click to change file"</p>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <div class="has-text-centered">
                            <i class="fas fa-cloud-upload-alt fa-2x mb-2"></i>
                            <p><strong>"Click to upload"</strong>" or drag and drop"</p>
                            <p class="has-text-grey">"PNG, JPG up to 10MB"</p>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
