//! User Dashboard
//!
//! Complaint form, per-status totals and the caller's complaints.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::finish_load;
use crate::components::{
    ComplaintCardView, ComplaintForm, EmptyStateView, ImageModal, StatsCards, StatusFilter,
};
use crate::context::use_app_context;
use crate::controllers;
use crate::render::{user_complaints_view, Clock, ListView};
use crate::store::{provide_complaint_store, ComplaintListCache, ComplaintListCacheStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = provide_complaint_store();
    let enlarged = RwSignal::new(None::<String>);
    let on_enlarge = Callback::new(move |url: String| enlarged.set(Some(url)));

    let reload = Callback::new(move |_: ()| {
        let api = ctx.api();
        spawn_local(async move {
            finish_load(ctx, store, controllers::load_my_complaints(&api).await);
        });
    });

    Effect::new(move |_| reload.run(()));

    let list = Memo::new(move |_| {
        let cache = ComplaintListCache {
            complaints: store.complaints().get(),
            status_filter: store.status_filter().get(),
        };
        user_complaints_view(&cache.visible(), cache.filter_active(), &Clock::local())
    });

    view! {
        <section class="section">
            <div class="container">
                <div class="columns">
                    <div class="column is-5">
                        <ComplaintForm on_submitted=reload />
                    </div>
                    <div class="column">
                        <StatsCards />
                        <div class="level">
                            <div class="level-left">
                                <h2 class="title is-5">"My Complaints"</h2>
                            </div>
                            <div class="level-right">
                                <StatusFilter />
                            </div>
                        </div>
                        <div id="complaintsList">
                            {move || match list.get() {
                                ListView::Empty(state) => view! { <EmptyStateView state=state /> }.into_any(),
                                ListView::Cards(cards) => cards
                                    .into_iter()
                                    .map(|card| view! { <ComplaintCardView card=card on_enlarge=on_enlarge /> })
                                    .collect_view()
                                    .into_any(),
                            }}
                        </div>
                    </div>
                </div>
            </div>
            <ImageModal image=enlarged />
        </section>
    }
}
