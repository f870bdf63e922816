//! Top navigation bar component.

use leptos::prelude::*;

use crate::model::SiteInfo;
use crate::state::use_auth;

#[server(name = GetSiteInfo, prefix = "/api")]
pub async fn get_site_info() -> Result<SiteInfo, ServerFnError> {
    let state = crate::server::app_state()?;
    Ok(SiteInfo {
        title: state.site_title.clone(),
        disease_count: state.catalog.len(),
    })
}

/// Site-wide navigation bar.
#[component]
pub fn Nav() -> impl IntoView {
    let auth = use_auth();
    let info = Resource::new(|| (), |_| get_site_info());

    view! {
        <nav class="nav-bar">
            <div class="nav-brand">
                <a href="/" class="nav-logo">
                    "🌱 "
                    <Suspense fallback=|| "AgriGuard AI">
                        {move || info.get().map(|res| match res {
                            Ok(site) => site.title,
                            Err(_) => "AgriGuard AI".to_string(),
                        })}
                    </Suspense>
                </a>
            </div>
            <div class="nav-links">
                <a href="/" class="nav-link">"Home"</a>
                <a href="/diagnosis" class="nav-link">"Diagnose"</a>
                <a href="/results" class="nav-link">"Results"</a>
                <a href="/diseases" class="nav-link">"Diseases"</a>
                <a href="/dashboard" class="nav-link">"Dashboard"</a>
                <a href="/help" class="nav-link">"Help"</a>
            </div>
            <div class="nav-user">{move || auth.display_name()}</div>
        </nav>
    }
}
