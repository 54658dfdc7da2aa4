//! Admin Console
//!
//! Every complaint with its submitter; status and notes are edited in place.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::finish_load;
use crate::components::{AdminComplaintCardView, EmptyStateView, ImageModal, StatsCards};
use crate::context::use_app_context;
use crate::controllers;
use crate::render::{admin_complaints_view, AdminComplaintCard, Clock, ListView};
use crate::store::{provide_complaint_store, ComplaintListCacheStoreFields};

#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = provide_complaint_store();
    let enlarged = RwSignal::new(None::<String>);
    let on_enlarge = Callback::new(move |url: String| enlarged.set(Some(url)));

    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            finish_load(ctx, store, controllers::load_all_complaints(&api).await);
        });
    });

    let list = Memo::new(move |_| {
        store
            .complaints()
            .with(|all| admin_complaints_view(all, &Clock::local()))
    });
    let cards = move || match list.get() {
        ListView::Cards(cards) => cards,
        ListView::Empty(_) => Vec::new(),
    };
    let empty = move || match list.get() {
        ListView::Empty(state) => Some(view! { <EmptyStateView state=state /> }),
        ListView::Cards(_) => None,
    };

    view! {
        <section class="section">
            <div class="container">
                <h1 class="title is-4">"All Complaints"</h1>
                <StatsCards />
                <div id="adminComplaintsList">
                    {empty}
                    // Keyed by the saved record so a card with an unsaved draft
                    // survives edits to its neighbours
                    <For
                        each=cards
                        key=|card: &AdminComplaintCard| (card.card.id, card.edit.clone())
                        children=move |card| view! { <AdminComplaintCardView card=card on_enlarge=on_enlarge /> }
                    />
                </div>
            </div>
            <ImageModal image=enlarged />
        </section>
    }
}
