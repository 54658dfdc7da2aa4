//! Complaint Card Component
//!
//! Read-only card for the dashboard list. The header and body pieces are
//! shared with the admin card.

use leptos::prelude::*;

use crate::render::ComplaintCard;

/// Title, category and status badge
#[component]
pub fn CardHeader(card: ComplaintCard) -> impl IntoView {
    view! {
        <div class="complaint-header">
            <div class="is-flex is-align-items-center">
                <span class=format!("category-icon {}", card.category.class)>
                    <i class=card.category.icon></i>
                </span>
                <div>
                    <h3 class="title is-6 mb-1">{card.title}</h3>
                    <p class="is-size-7 has-text-grey">{card.category.label}</p>
                </div>
            </div>
            <span class=format!("status-badge {}", card.status.class)>
                <i class=card.status.icon></i>
                " "
                {card.status.label}
            </span>
        </div>
    }
}

/// Screenshot thumbnail; clicking it asks for the enlarged view
#[component]
pub fn ScreenshotThumb(url: String, on_enlarge: Callback<String>) -> impl IntoView {
    let target = url.clone();
    view! {
        <div class="complaint-screenshot mt-3">
            <img
                src=url
                alt="Screenshot"
                class="screenshot-thumb"
                on:click=move |_| on_enlarge.run(target.clone())
            />
        </div>
    }
}

#[component]
pub fn CardDates(created: String, updated: String) -> impl IntoView {
    view! {
        <div class="complaint-dates is-size-7 has-text-grey mt-3">
            <span>
                <i class="fas fa-calendar-plus"></i>
                " Submitted "
                {created}
            </span>
            <span class="ml-4">
                <i class="fas fa-calendar-check"></i>
                " Updated "
                {updated}
            </span>
        </div>
    }
}

#[component]
pub fn ComplaintCardView(card: ComplaintCard, on_enlarge: Callback<String>) -> impl IntoView {
    let border = format!("border-left: 4px solid {}", card.status.color);
    let screenshot = card.screenshot_url.clone();
    let response = card.admin_response.clone();
    let (created, updated) = (card.created.clone(), card.updated.clone());
    let description = card.description.clone();

    view! {
        <div class="box complaint-card fade-in" style=border>
            <CardHeader card=card />
            <p class="complaint-description mt-3">{description}</p>
            {screenshot.map(|url| view! { <ScreenshotThumb url=url on_enlarge=on_enlarge /> })}
            {response.map(|notes| view! {
                <div class="admin-response mt-3">
                    <p class="has-text-weight-semibold">
                        <i class="fas fa-reply"></i>
                        " Admin Response"
                    </p>
                    <p>{notes}</p>
                </div>
            })}
            <CardDates created=created updated=updated />
        </div>
    }
}
