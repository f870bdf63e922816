//! Root Leptos application component with routing.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::layout::MainLayout;
use crate::pages::{
    dashboard::DashboardPage,
    diagnosis::DiagnosisPage,
    disease::DiseasePage,
    diseases::DiseasesPage,
    help::HelpPage,
    home::HomePage,
    results::ResultsPage,
};
use crate::state::provide_contexts;

/// Server-side application state, provided as Leptos context for server functions.
#[derive(Clone, Debug)]
#[cfg(feature = "ssr")]
pub struct AppState {
    pub catalog: std::sync::Arc<agriguard_common::Catalog>,
    pub site_title: String,
}

/// HTML document wrapping the app during server-side rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// The root `<App/>` component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_contexts();

    view! {
        <Stylesheet id="leptos" href="/pkg/agriguard-web.css"/>
        <Title text="AgriGuard AI – Plant Disease Diagnosis"/>
        <Meta name="description" content="Diagnose crop diseases and browse the disease database"/>

        <Router>
            <MainLayout>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/diagnosis") view=DiagnosisPage/>
                    <Route path=path!("/results") view=ResultsPage/>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                    <Route path=path!("/help") view=HelpPage/>
                    <Route path=path!("/diseases") view=DiseasesPage/>
                    <Route path=path!("/diseases/:id") view=DiseasePage/>
                </Routes>
            </MainLayout>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <a href="/" class="back-link">"← Home"</a>
        </div>
    }
}
