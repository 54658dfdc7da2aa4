//! Submit Button Component
//!
//! A submit button whose label and disabled state live in signals, so a
//! controller can flip it into a busy state during a request.

use leptos::prelude::*;

use crate::controllers::{SubmitControl, SUBMITTING_LABEL};

#[derive(Clone, Copy)]
pub struct SubmitButtonState {
    pub label: RwSignal<String>,
    pub disabled: RwSignal<bool>,
}

impl SubmitButtonState {
    pub fn new(label: &str) -> Self {
        Self {
            label: RwSignal::new(label.to_string()),
            disabled: RwSignal::new(false),
        }
    }
}

impl SubmitControl for SubmitButtonState {
    fn label(&self) -> String {
        self.label.get_untracked()
    }

    fn set_label(&self, label: &str) {
        self.label.set(label.to_string());
    }

    fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
    }
}

#[component]
pub fn SubmitButton(
    state: SubmitButtonState,
    #[prop(into)] icon: String,
) -> impl IntoView {
    let busy = move || state.disabled.get() && state.label.get() == SUBMITTING_LABEL;

    view! {
        <button type="submit" class="button is-primary is-fullwidth" disabled=move || state.disabled.get()>
            <span class="icon">
                <i class=move || if busy() { "fas fa-spinner fa-spin".to_string() } else { icon.clone() }></i>
            </span>
            <span>{move || state.label.get()}</span>
        </button>
    }
}
