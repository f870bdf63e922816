//! Placeholder shown when a list has nothing to display.

use leptos::prelude::*;

#[component]
pub fn EmptyState(
    title: &'static str,
    message: &'static str,
    #[prop(optional)] action: Option<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-icon">"🍃"</div>
            <h3>{title}</h3>
            <p>{message}</p>
            {action.map(|(href, label)| view! {
                <a href={href} class="btn btn-primary">{label}</a>
            })}
        </div>
    }
}
