//! Dashboard – catalog statistics and session activity.

use leptos::prelude::*;

use agriguard_common::Catalog;

use crate::components::disease_card::SeverityBadge;
use crate::pages::diseases::get_catalog;
use crate::state::use_diagnosis;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let catalog = Resource::new(|| (), |_| get_catalog());

    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            <Suspense fallback=move || view! { <p class="loading">"Loading…"</p> }>
                {move || catalog.get().map(|res| match res {
                    Ok(c) => view! { <CatalogStats catalog=c/> }.into_any(),
                    Err(e) => view! {
                        <p class="error">"Error: " {e.to_string()}</p>
                    }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn CatalogStats(catalog: Catalog) -> impl IntoView {
    let diagnosis = use_diagnosis();
    let severe = catalog
        .severity_counts()
        .into_iter()
        .find(|(s, _)| *s == agriguard_common::Severity::Severe)
        .map(|(_, n)| n)
        .unwrap_or(0);

    let severity_rows = catalog
        .severity_counts()
        .into_iter()
        .map(|(severity, count)| view! {
            <tr>
                <td><SeverityBadge severity=severity/></td>
                <td class="num">{count}</td>
            </tr>
        })
        .collect_view();

    let crop_rows = catalog
        .crop_counts()
        .into_iter()
        .map(|(crop, count)| view! {
            <tr>
                <td>{crop}</td>
                <td class="num">{count}</td>
            </tr>
        })
        .collect_view();

    view! {
        <div class="stats-bar">
            <div class="stat">
                <span class="stat-value">{catalog.len()}</span>
                <span class="stat-label">"Known Diseases"</span>
            </div>
            <div class="stat">
                <span class="stat-value">{catalog.crops().len()}</span>
                <span class="stat-label">"Crops Covered"</span>
            </div>
            <div class="stat">
                <span class="stat-value">{severe}</span>
                <span class="stat-label">"Severe Diseases"</span>
            </div>
            <div class="stat">
                <span class="stat-value">{move || diagnosis.requests.with(|r| r.len())}</span>
                <span class="stat-label">"Diagnoses This Session"</span>
            </div>
        </div>

        <div class="dashboard-tables">
            <section>
                <h2>"By Severity"</h2>
                <table class="report-table">
                    <thead><tr><th>"Severity"</th><th>"Diseases"</th></tr></thead>
                    <tbody>{severity_rows}</tbody>
                </table>
            </section>
            <section>
                <h2>"By Crop"</h2>
                <table class="report-table">
                    <thead><tr><th>"Crop"</th><th>"Diseases"</th></tr></thead>
                    <tbody>{crop_rows}</tbody>
                </table>
            </section>
        </div>
    }
}
