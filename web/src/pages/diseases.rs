//! Disease database – searchable, filterable catalog of known diseases.

use leptos::prelude::*;

use agriguard_common::filter::{self, CropFilter, FilterState, SeverityFilter};
use agriguard_common::{Catalog, DiseaseRecord};

use crate::components::disease_card::DiseaseCard;
use crate::components::empty_state::EmptyState;

// ─── Server functions ────────────────────────────────────────────────────────

/// The full disease catalog. Filtering happens on the client.
#[server(name = GetCatalog, prefix = "/api")]
pub async fn get_catalog() -> Result<Catalog, ServerFnError> {
    let state = crate::server::app_state()?;
    tracing::debug!("Serving catalog with {} records", state.catalog.len());
    Ok(state.catalog.as_ref().clone())
}

// ─── Page component ──────────────────────────────────────────────────────────

#[component]
pub fn DiseasesPage() -> impl IntoView {
    let catalog = Resource::new(|| (), |_| get_catalog());

    view! {
        <div class="diseases-page">
            <header class="diseases-hero">
                <h1>"🍃 Disease Database"</h1>
                <p class="diseases-tagline">
                    "Comprehensive guide to plant diseases detectable by AgriGuard AI"
                </p>
            </header>

            <Suspense fallback=move || view! { <p class="loading">"Loading diseases…"</p> }>
                {move || catalog.get().map(|res| match res {
                    Ok(c) => view! { <DiseaseCatalog catalog=c/> }.into_any(),
                    Err(e) => view! {
                        <p class="error">"Error: " {e.to_string()}</p>
                    }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

/// Search box, the two selectors and the result grid.
///
/// The visible list is recomputed from scratch whenever the filter state
/// changes and always keeps catalog order.
#[component]
fn DiseaseCatalog(catalog: Catalog) -> impl IntoView {
    let total = catalog.len();
    let crop_options = catalog.crop_options();
    let catalog = StoredValue::new(catalog);

    let state = RwSignal::new(FilterState::default());
    let visible = Memo::new(move |_| {
        state.with(|s| {
            catalog.with_value(|c| c.filter(s).into_iter().cloned().collect::<Vec<DiseaseRecord>>())
        })
    });

    let crop_select = crop_options
        .into_iter()
        .map(|opt| {
            let label = opt.label();
            let value = opt.value().to_string();
            let selected = move || state.with(|s| s.crop == opt);
            view! { <option value=value selected=selected>{label}</option> }
        })
        .collect_view();

    let severity_select = SeverityFilter::options()
        .into_iter()
        .map(|opt| {
            let selected = move || state.with(|s| s.severity == opt);
            view! { <option value=opt.value() selected=selected>{opt.label()}</option> }
        })
        .collect_view();

    view! {
        <section class="filter-panel">
            <div class="filter-grid">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search diseases..."
                    prop:value=move || state.with(|s| s.query.clone())
                    on:input=move |ev| {
                        let query = event_target_value(&ev);
                        state.update(|s| s.query = query);
                    }
                />
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        let crop = CropFilter::from_option(&event_target_value(&ev));
                        state.update(|s| s.crop = crop);
                    }
                >
                    {crop_select}
                </select>
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        let severity = SeverityFilter::from_option(&event_target_value(&ev));
                        state.update(|s| s.severity = severity);
                    }
                >
                    {severity_select}
                </select>
            </div>
            <p class="filter-summary">
                {move || filter::summary(visible.with(|v| v.len()), total)}
            </p>
        </section>

        <section class="disease-results">
            <div class="disease-grid">
                <For
                    each=move || visible.get()
                    key=|d| d.id
                    children=move |disease: DiseaseRecord| {
                        view! { <DiseaseCard disease=disease/> }
                    }
                />
            </div>
            <Show when=move || visible.with(|v| v.is_empty())>
                <EmptyState
                    title="No diseases found"
                    message="Try adjusting your search or filters"
                />
            </Show>
        </section>
    }
}
