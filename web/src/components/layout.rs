//! Common frame around every page.

use leptos::prelude::*;

use crate::components::nav::Nav;
use crate::state::use_app;

/// Navigation bar, notice banner and the page content.
#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    let app = use_app();

    view! {
        <Nav/>
        {move || app.notice.get().map(|msg| view! {
            <div class="notice-banner">
                <span>{msg}</span>
                <button class="notice-dismiss" on:click=move |_| app.dismiss()>"×"</button>
            </div>
        })}
        <main class="main-content">{children()}</main>
    }
}
